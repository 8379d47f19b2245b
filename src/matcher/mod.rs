//! Criterion matching for file names.

pub mod file;

pub use file::{FileFilter, split_extension};

use crate::error::Result;
use regex::Regex;

/// Decides which substring of a file name is the target of a rename.
#[derive(Debug, Clone)]
pub enum Criterion {
    /// Plain substring mode: the search term itself is the target.
    Literal(String),
    /// Regex mode: the leftmost match in the file name is the target.
    Pattern(Regex),
}

impl Criterion {
    /// Creates a plain substring criterion.
    pub fn literal(term: impl Into<String>) -> Self {
        Criterion::Literal(term.into())
    }

    /// Compiles a regex criterion.
    pub fn pattern(pattern: &str) -> Result<Self> {
        Ok(Criterion::Pattern(Regex::new(pattern)?))
    }

    /// Returns the substring of `file_name` to be replaced.
    ///
    /// Literal mode returns the search term unconditionally; containment is
    /// decided later when the replacement is computed. Pattern mode returns
    /// the first match, or an empty string when nothing matches. An empty
    /// result always means "no match".
    pub fn matched<'a>(&'a self, file_name: &'a str) -> &'a str {
        match self {
            Criterion::Literal(term) => term.as_str(),
            Criterion::Pattern(re) => re.find(file_name).map_or("", |m| m.as_str()),
        }
    }

    /// Returns true for the regex variant.
    pub fn is_pattern(&self) -> bool {
        matches!(self, Criterion::Pattern(_))
    }

    /// Returns the search term or pattern source.
    pub fn as_str(&self) -> &str {
        match self {
            Criterion::Literal(term) => term.as_str(),
            Criterion::Pattern(re) => re.as_str(),
        }
    }
}
