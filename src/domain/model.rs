use serde::Serialize;
use std::io::Write;

use crate::domain::language::Language;

pub const CONTAINER_VALUE: &str = "This is not a # comment";

/// Holds one string that looks like it carries a `#` comment but doesn't.
///
/// `value` is fixed at construction and never changes afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    value: String,
}

impl Container {
    pub fn new() -> Self {
        Self {
            value: CONTAINER_VALUE.to_string(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn status_line(&self) -> String {
        format!("Value is: {}", self.value)
    }

    /// Emits the status line to `out` and returns `5 + 10`.
    ///
    /// The sum itself cannot fail; only writing to `out` can.
    pub fn compute<W: Write>(&self, out: &mut W) -> std::io::Result<i32> {
        let x = 5;
        writeln!(out, "{}", self.status_line())?;
        let y = 10;
        Ok(x + y)
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

/// Counters collected while stripping one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StripStats {
    pub lines_in: usize,
    pub lines_out: usize,
    pub block_comments: usize,
    pub line_comments: usize,
    pub docstrings: usize,
}

#[derive(Debug, Clone)]
pub struct StripOutcome {
    pub text: String,
    pub stats: StripStats,
}

#[derive(Debug, Clone, Serialize)]
pub struct StripReport {
    pub input: String,
    pub output: Option<String>,
    pub language: Language,
    pub bytes_before: usize,
    pub bytes_after: usize,
    #[serde(flatten)]
    pub stats: StripStats,
}
