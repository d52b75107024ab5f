//! Expression templates with a single substitution point.
//!
//! Templates are written with a `%s` placeholder (e.g. `strconv.FormatBool(bool(*%s))`)
//! and split at that placeholder when parsed, so a parsed [`Template`] always has
//! exactly one place to substitute a variable name. `%%` stands for a literal `%`.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The positional placeholder substituted with a variable name.
pub const PLACEHOLDER: &str = "%s";

/// Error returned when a template string does not have exactly one placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected exactly one '%s' placeholder, found {found}")]
pub struct TemplateError {
    pub found: usize,
}

/// An expression template split around its placeholder.
///
/// # Example
///
/// ```
/// use gotypes_core::Template;
///
/// let tpl = Template::parse("strconv.FormatBool(bool(*%s))").unwrap();
/// assert_eq!(tpl.render("v"), "strconv.FormatBool(bool(*v))");
/// assert_eq!(tpl.packages(), vec!["strconv"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template {
    prefix: String,
    suffix: String,
}

impl Template {
    /// Parse a template string, requiring exactly one `%s`.
    ///
    /// `%%` is unescaped to `%`; any other `%` is kept as written.
    pub fn parse(s: &str) -> Result<Self, TemplateError> {
        let mut parts = vec![String::new()];
        let mut chars = s.chars().peekable();

        while let Some(c) = chars.next() {
            match (c, chars.peek()) {
                ('%', Some('%')) => {
                    chars.next();
                    push(&mut parts, '%');
                }
                ('%', Some('s')) => {
                    chars.next();
                    parts.push(String::new());
                }
                _ => push(&mut parts, c),
            }
        }

        match <[String; 2]>::try_from(parts) {
            Ok([prefix, suffix]) => Ok(Self { prefix, suffix }),
            Err(parts) => Err(TemplateError {
                found: parts.len() - 1,
            }),
        }
    }

    /// Substitute `var` at the placeholder.
    pub fn render(&self, var: &str) -> String {
        let mut out = String::with_capacity(self.prefix.len() + var.len() + self.suffix.len());
        out.push_str(&self.prefix);
        out.push_str(var);
        out.push_str(&self.suffix);
        out
    }

    /// Text before the placeholder.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Text after the placeholder.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Package qualifiers referenced by the template, in first-occurrence order.
    ///
    /// A qualifier is an identifier directly followed by `.` and another identifier
    /// (`strconv.Itoa`). Selectors on expressions (`(*v).String`), numeric literals
    /// and quoted literals are not qualifiers.
    pub fn packages(&self) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        for part in [self.prefix.as_str(), self.suffix.as_str()] {
            for pkg in qualifiers(part) {
                if !found.contains(&pkg) {
                    found.push(pkg);
                }
            }
        }
        found
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.prefix.replace('%', "%%"),
            PLACEHOLDER,
            self.suffix.replace('%', "%%")
        )
    }
}

impl std::str::FromStr for Template {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Template {
    type Error = TemplateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Template> for String {
    fn from(tpl: Template) -> Self {
        tpl.to_string()
    }
}

fn push(parts: &mut [String], c: char) {
    if let Some(last) = parts.last_mut() {
        last.push(c);
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn qualifiers(src: &str) -> Vec<&str> {
    let bytes = src.as_bytes();
    let mut out = Vec::new();
    let mut prev: Option<u8> = None;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if b == b'\'' || b == b'"' || b == b'`' {
            i += 1;
            while i < bytes.len() && bytes[i] != b {
                if bytes[i] == b'\\' {
                    i += 1;
                }
                i += 1;
            }
            i += 1;
            prev = Some(b);
        } else if is_ident_start(b) {
            let start = i;
            while i < bytes.len() && is_ident_continue(bytes[i]) {
                i += 1;
            }
            let selector = prev == Some(b'.');
            let qualified = bytes.get(i) == Some(&b'.')
                && bytes.get(i + 1).is_some_and(|&c| is_ident_start(c));
            if qualified && !selector {
                out.push(&src[start..i]);
            }
            prev = Some(b'a');
        } else if b.is_ascii_digit() {
            // 0.0, 1e10, 0x1F
            while i < bytes.len() && (is_ident_continue(bytes[i]) || bytes[i] == b'.') {
                i += 1;
            }
            prev = Some(b'0');
        } else {
            prev = Some(b);
            i += 1;
        }
    }

    out
}
