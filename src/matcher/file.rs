//! Per-file predicates applied before a name is matched.

use crate::error::Result;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// Splits a file name into stem and extension, the extension keeping its dot.
///
/// The extension starts at the last `.` in the name, so `archive.tar.gz`
/// yields `.gz`, `.bashrc` is all extension, and `README` has none.
pub fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(idx) => name.split_at(idx),
        None => (name, ""),
    }
}

/// Extension and glob filters for candidate files.
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    extension: Option<String>,
    exclude_globs: Vec<String>,
    exclude_set: GlobSet,
}

impl FileFilter {
    /// Creates a filter that admits every file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts matching to one extension, given with or without the dot.
    pub fn extension(mut self, ext: impl Into<String>) -> Self {
        let ext = ext.into();
        self.extension = match ext.as_str() {
            "" => None,
            e if e.starts_with('.') => Some(ext),
            _ => Some(format!(".{ext}")),
        };
        self
    }

    /// Excludes files whose path relative to the root matches the glob.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude_globs.push(pattern.to_string());
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude_globs {
            builder.add(Glob::new(pattern)?);
        }
        self.exclude_set = builder.build()?;
        Ok(self)
    }

    /// Returns the normalized extension filter, if any.
    pub fn extension_filter(&self) -> Option<&str> {
        self.extension.as_deref()
    }

    /// Extension gate. Files without an extension always pass.
    pub fn admits_extension(&self, file_name: &str) -> bool {
        let (_, ext) = split_extension(file_name);
        match self.extension.as_deref() {
            Some(filter) if !ext.is_empty() => ext == filter,
            _ => true,
        }
    }

    /// Returns true if the relative path matches an exclude glob.
    pub fn is_excluded(&self, rel_path: &Path) -> bool {
        !self.exclude_globs.is_empty() && self.exclude_set.is_match(rel_path)
    }
}
