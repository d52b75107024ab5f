//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target.

mod check;
mod generate;
mod output;
mod types;

pub use check::CheckReport;
pub use generate::{GenerateReport, PreviewReport};
pub use output::{Report, TerminalOutput};
pub use types::{TypeRow, TypesReport};
