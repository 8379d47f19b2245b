//! New-name computation and file transfer.

pub mod collision;
pub mod file;

pub use collision::resolve;
pub use file::{FileOperation, Transfer, TransferStrategy};

use crate::config::Options;
use crate::matcher::{Criterion, FileFilter};

/// Why a file produced no plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The extension differs from the configured filter.
    Extension,
    /// The criterion found nothing in the name.
    NoMatch,
    /// Replacing the match leaves the name as it was.
    Unchanged,
    /// Replacing the match would leave an empty name.
    EmptyName,
}

/// Result of planning one file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NameOutcome {
    Rename(String),
    Skip(SkipReason),
}

/// Computes candidate names from the extension filter, criterion and replacement.
#[derive(Debug, Clone, Copy)]
pub struct NamePlanner<'a> {
    filter: &'a FileFilter,
    criterion: &'a Criterion,
    replacement: &'a str,
}

impl<'a> NamePlanner<'a> {
    pub fn new(options: &'a Options) -> Self {
        Self::from_parts(options.filter(), options.criterion(), options.replacement())
    }

    pub fn from_parts(
        filter: &'a FileFilter,
        criterion: &'a Criterion,
        replacement: &'a str,
    ) -> Self {
        Self {
            filter,
            criterion,
            replacement,
        }
    }

    /// Plans a candidate name for `file_name`. Never fails: a file that
    /// does not qualify is a skip, not an error.
    pub fn plan(&self, file_name: &str) -> NameOutcome {
        if !self.filter.admits_extension(file_name) {
            return NameOutcome::Skip(SkipReason::Extension);
        }

        let matched = self.criterion.matched(file_name);
        if matched.is_empty() || !file_name.contains(matched) {
            return NameOutcome::Skip(SkipReason::NoMatch);
        }

        // every occurrence of the matched text is replaced, not only the first
        let new_name = file_name.replace(matched, self.replacement);
        if new_name.is_empty() {
            NameOutcome::Skip(SkipReason::EmptyName)
        } else if new_name == file_name {
            NameOutcome::Skip(SkipReason::Unchanged)
        } else {
            NameOutcome::Rename(new_name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planner_for(
        criterion: &Criterion,
        filter: &FileFilter,
        replacement: &'static str,
    ) -> NameOutcome {
        NamePlanner::from_parts(filter, criterion, replacement).plan("example_target.txt")
    }

    #[test]
    fn test_deletes_literal_match() {
        let criterion = Criterion::literal("target");
        let filter = FileFilter::new();
        let planner = NamePlanner::from_parts(&filter, &criterion, "");

        assert_eq!(
            planner.plan("example_target.txt"),
            NameOutcome::Rename("example_.txt".into())
        );
        assert_eq!(planner.plan("example.txt"), NameOutcome::Skip(SkipReason::NoMatch));
    }

    #[test]
    fn test_replaces_every_occurrence() {
        let criterion = Criterion::literal("ab");
        let filter = FileFilter::new();
        let planner = NamePlanner::from_parts(&filter, &criterion, "x");

        assert_eq!(planner.plan("ab_ab.ab"), NameOutcome::Rename("x_x.x".into()));
    }

    #[test]
    fn test_regex_match_is_replaced_literally() {
        let criterion = Criterion::pattern("a.*a").unwrap();
        let filter = FileFilter::new();
        let planner = NamePlanner::from_parts(&filter, &criterion, "bbb");

        assert_eq!(planner.plan("aaa.json"), NameOutcome::Rename("bbb.json".into()));
        assert_eq!(planner.plan("aaaaaaa.json"), NameOutcome::Rename("bbb.json".into()));
        assert_eq!(planner.plan("xyz.json"), NameOutcome::Skip(SkipReason::NoMatch));
    }

    #[test]
    fn test_extension_gate() {
        let criterion = Criterion::literal("target");
        let txt = FileFilter::new().extension("txt");
        let md = FileFilter::new().extension("md");

        assert!(matches!(planner_for(&criterion, &txt, ""), NameOutcome::Rename(_)));
        assert_eq!(
            planner_for(&criterion, &md, ""),
            NameOutcome::Skip(SkipReason::Extension)
        );

        let planner = NamePlanner::from_parts(&md, &criterion, "");
        assert_eq!(planner.plan("target_notes"), NameOutcome::Rename("_notes".into()));
    }

    #[test]
    fn test_unchanged_name_is_skipped() {
        let criterion = Criterion::literal("target");
        let filter = FileFilter::new();
        let planner = NamePlanner::from_parts(&filter, &criterion, "target");

        assert_eq!(
            planner.plan("example_target.txt"),
            NameOutcome::Skip(SkipReason::Unchanged)
        );
    }

    #[test]
    fn test_empty_result_is_skipped() {
        let criterion = Criterion::pattern(".*").unwrap();
        let filter = FileFilter::new();
        let planner = NamePlanner::from_parts(&filter, &criterion, "");

        assert_eq!(planner.plan("whole.txt"), NameOutcome::Skip(SkipReason::EmptyName));
    }

    #[test]
    fn test_empty_term_never_matches() {
        let criterion = Criterion::literal("");
        let filter = FileFilter::new();
        let planner = NamePlanner::from_parts(&filter, &criterion, "x");

        assert_eq!(planner.plan("file.txt"), NameOutcome::Skip(SkipReason::NoMatch));
    }
}
