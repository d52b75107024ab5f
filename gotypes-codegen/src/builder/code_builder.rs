//! Code builder utility for generating gofmt-indented code.

/// One indentation level, as gofmt emits.
const INDENT: &str = "\t";

/// Fluent API for building code with proper indentation.
///
/// # Example
///
/// ```
/// use gotypes_codegen::builder::CodeBuilder;
///
/// let code = CodeBuilder::go()
///     .line("func main() {")
///     .indent()
///     .line("println(\"Hello, world!\")")
///     .dedent()
///     .line("}")
///     .build();
///
/// assert_eq!(code, "func main() {\n\tprintln(\"Hello, world!\")\n}\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent_level: usize,
    buffer: String,
}

impl CodeBuilder {
    /// Create an empty builder at indentation level zero.
    pub fn go() -> Self {
        Self::default()
    }

    /// Add a line of code with current indentation.
    pub fn line(mut self, s: &str) -> Self {
        self.write_indent();
        self.buffer.push_str(s);
        self.buffer.push('\n');
        self
    }

    /// Add a blank line (no indentation).
    pub fn blank(mut self) -> Self {
        self.buffer.push('\n');
        self
    }

    /// Increase indentation level.
    pub fn indent(mut self) -> Self {
        self.indent_level += 1;
        self
    }

    /// Decrease indentation level.
    pub fn dedent(mut self) -> Self {
        self.indent_level = self.indent_level.saturating_sub(1);
        self
    }

    /// Add a block with a closing line.
    ///
    /// # Example
    ///
    /// ```
    /// use gotypes_codegen::builder::CodeBuilder;
    ///
    /// let code = CodeBuilder::go()
    ///     .block_with_close("var (", ")", |b: CodeBuilder| b.line("x = 1"))
    ///     .build();
    ///
    /// assert_eq!(code, "var (\n\tx = 1\n)\n");
    /// ```
    pub fn block_with_close<F>(self, header: &str, close: &str, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        let builder = self.line(header).indent();
        f(builder).dedent().line(close)
    }

    /// Add a line comment (`// text`). An empty text yields a bare `//`.
    pub fn comment(mut self, text: &str) -> Self {
        self.write_indent();
        self.buffer.push_str("//");
        if !text.is_empty() {
            self.buffer.push(' ');
            self.buffer.push_str(text);
        }
        self.buffer.push('\n');
        self
    }

    /// Add a multi-line comment, one `//` line per input line.
    pub fn comments(self, text: &str) -> Self {
        text.lines().fold(self, |b, line| b.comment(line))
    }

    /// Conditionally add content.
    pub fn when<F>(self, condition: bool, f: F) -> Self
    where
        F: FnOnce(Self) -> Self,
    {
        if condition { f(self) } else { self }
    }

    /// Iterate and add content for each item.
    pub fn each<T, I, F>(mut self, items: I, f: F) -> Self
    where
        I: IntoIterator<Item = T>,
        F: Fn(Self, T) -> Self,
    {
        for item in items {
            self = f(self, item);
        }
        self
    }

    /// Consume the builder and return the generated code.
    pub fn build(self) -> String {
        self.buffer
    }

    fn write_indent(&mut self) {
        self.buffer.push_str(&INDENT.repeat(self.indent_level));
    }
}
