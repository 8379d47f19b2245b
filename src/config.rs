//! Run configuration.

use crate::error::{RenameError, Result};
use crate::matcher::{Criterion, FileFilter};
use std::path::{Path, PathBuf};

/// Validated, immutable options for one planning run.
#[derive(Debug, Clone)]
pub struct Options {
    root: PathBuf,
    criterion: Criterion,
    filter: FileFilter,
    replacement: String,
}

impl Options {
    /// Starts building options.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Root directory of the traversal.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// How the target substring is found in each file name.
    pub fn criterion(&self) -> &Criterion {
        &self.criterion
    }

    /// Extension and exclude filters.
    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Replacement text. Empty means the match is deleted.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }
}

/// Builder for [`Options`].
#[derive(Debug, Clone, Default)]
pub struct OptionsBuilder {
    root: Option<PathBuf>,
    search: Option<String>,
    extension: Option<String>,
    replacement: String,
    regex: bool,
    excludes: Vec<String>,
}

impl OptionsBuilder {
    /// Sets the directory to traverse.
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Sets the search term, or the pattern in regex mode.
    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    /// Only rename files with this extension.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        self.extension = Some(ext.into());
        self
    }

    /// Replaces the match with `text` instead of deleting it.
    pub fn replace(mut self, text: impl Into<String>) -> Self {
        self.replacement = text.into();
        self
    }

    /// Treats the search term as a regular expression.
    pub fn regex(mut self, enabled: bool) -> Self {
        self.regex = enabled;
        self
    }

    /// Skips files whose relative path matches the glob.
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    /// Validates the options. No filesystem access happens here.
    pub fn build(self) -> Result<Options> {
        let root = self
            .root
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| RenameError::InvalidConfig("a root path is required".into()))?;
        let search = self
            .search
            .filter(|s| !s.is_empty())
            .ok_or_else(|| RenameError::InvalidConfig("a search term is required".into()))?;

        let criterion = if self.regex {
            Criterion::pattern(&search)?
        } else {
            Criterion::literal(search)
        };

        let mut filter = FileFilter::new();
        if let Some(ext) = self.extension {
            filter = filter.extension(ext);
        }
        for pattern in &self.excludes {
            filter = filter.exclude(pattern)?;
        }

        Ok(Options {
            root,
            criterion,
            filter,
            replacement: self.replacement,
        })
    }
}
