//! Transfer of planned renames onto the file system.

use crate::error::{RenameError, Result};
use crate::plan::Plan;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Primitive used to carry out each plan entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferStrategy {
    /// Rename in place.
    #[default]
    Rename,
    /// Copy content; the original stays.
    Copy,
    /// Copy, then remove the original. Works across volumes.
    Move,
}

impl TransferStrategy {
    /// Past-tense verb for user-facing summaries.
    pub fn verb(&self) -> &'static str {
        match self {
            TransferStrategy::Rename => "renamed",
            TransferStrategy::Copy => "copied",
            TransferStrategy::Move => "moved",
        }
    }
}

/// A single file operation derived from a plan entry.
#[derive(Debug, Clone)]
pub enum FileOperation {
    Rename { from: PathBuf, to: PathBuf },
    Copy { from: PathBuf, to: PathBuf },
    Move { from: PathBuf, to: PathBuf },
}

impl FileOperation {
    pub fn new(
        strategy: TransferStrategy,
        from: impl Into<PathBuf>,
        to: impl Into<PathBuf>,
    ) -> Self {
        let (from, to) = (from.into(), to.into());
        match strategy {
            TransferStrategy::Rename => FileOperation::Rename { from, to },
            TransferStrategy::Copy => FileOperation::Copy { from, to },
            TransferStrategy::Move => FileOperation::Move { from, to },
        }
    }

    /// Executes the file operation.
    pub fn execute(&self) -> io::Result<()> {
        match self {
            FileOperation::Rename { from, to } => fs::rename(from, to),
            FileOperation::Copy { from, to } => copy_file(from, to),
            FileOperation::Move { from, to } => {
                copy_file(from, to)?;
                fs::remove_file(from)
            }
        }
    }

    /// Returns a description of the operation.
    pub fn describe(&self) -> String {
        match self {
            FileOperation::Rename { from, to } => {
                format!("Rename {} -> {}", from.display(), to.display())
            }
            FileOperation::Copy { from, to } => {
                format!("Copy {} -> {}", from.display(), to.display())
            }
            FileOperation::Move { from, to } => {
                format!("Move {} -> {}", from.display(), to.display())
            }
        }
    }

    fn paths(&self) -> (&Path, &Path) {
        match self {
            FileOperation::Rename { from, to }
            | FileOperation::Copy { from, to }
            | FileOperation::Move { from, to } => (from, to),
        }
    }
}

/// Copies content and permissions into a destination that must not exist yet.
/// A partially written destination is removed on failure.
fn copy_file(from: &Path, to: &Path) -> io::Result<()> {
    let mut source = File::open(from)?;
    let permissions = source.metadata()?.permissions();
    let mut dest = OpenOptions::new().write(true).create_new(true).open(to)?;

    let copied = io::copy(&mut source, &mut dest)
        .and_then(|_| dest.sync_all())
        .and_then(|_| dest.set_permissions(permissions));
    if let Err(err) = copied {
        drop(dest);
        let _ = fs::remove_file(to);
        return Err(err);
    }
    Ok(())
}

/// Applies a finished plan with one strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transfer {
    strategy: TransferStrategy,
}

impl Transfer {
    pub fn new(strategy: TransferStrategy) -> Self {
        Self { strategy }
    }

    pub fn strategy(&self) -> TransferStrategy {
        self.strategy
    }

    /// Returns the operations the plan would execute, without executing them.
    pub fn operations(&self, plan: &Plan) -> Vec<FileOperation> {
        plan.iter()
            .map(|(from, to)| FileOperation::new(self.strategy, from, to))
            .collect()
    }

    /// Executes every entry and returns how many succeeded.
    ///
    /// Stops at the first failure. Completed operations are not rolled back;
    /// the error carries their count.
    pub fn apply(&self, plan: &Plan) -> Result<usize> {
        let mut completed = 0;
        for op in self.operations(plan) {
            if let Err(source) = op.execute() {
                let (from, to) = op.paths();
                return Err(RenameError::Transfer {
                    from: from.to_path_buf(),
                    to: to.to_path_buf(),
                    completed,
                    source,
                });
            }
            debug!("{}", op.describe());
            completed += 1;
        }
        Ok(completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn plan_with(dir: &Path, pairs: &[(&str, &str)]) -> Plan {
        let mut plan = Plan::new();
        for (from, to) in pairs {
            fs::write(dir.join(from), format!("content of {from}")).unwrap();
            plan.insert(dir.join(from), dir.join(to));
        }
        plan
    }

    #[test]
    fn test_rename() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with(dir.path(), &[("a_old.txt", "a.txt"), ("b_old.txt", "b.txt")]);

        let count = Transfer::new(TransferStrategy::Rename).apply(&plan).unwrap();

        assert_eq!(count, 2);
        assert!(!dir.path().join("a_old.txt").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "content of a_old.txt"
        );
    }

    #[test]
    fn test_copy_keeps_original() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with(dir.path(), &[("a_old.txt", "a.txt")]);

        let count = Transfer::new(TransferStrategy::Copy).apply(&plan).unwrap();

        assert_eq!(count, 1);
        assert!(dir.path().join("a_old.txt").exists());
        assert_eq!(
            fs::read(dir.path().join("a.txt")).unwrap(),
            fs::read(dir.path().join("a_old.txt")).unwrap()
        );
    }

    #[test]
    fn test_move_removes_original() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with(dir.path(), &[("a_old.txt", "a.txt")]);

        Transfer::new(TransferStrategy::Move).apply(&plan).unwrap();

        assert!(!dir.path().join("a_old.txt").exists());
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "content of a_old.txt"
        );
    }

    #[test]
    fn test_copy_refuses_existing_destination() {
        let dir = TempDir::new().unwrap();
        let plan = plan_with(dir.path(), &[("a_old.txt", "a.txt")]);
        fs::write(dir.path().join("a.txt"), "appeared later").unwrap();

        let err = Transfer::new(TransferStrategy::Copy).apply(&plan).unwrap_err();

        assert_eq!(err.completed(), 0);
        assert_eq!(
            fs::read_to_string(dir.path().join("a.txt")).unwrap(),
            "appeared later"
        );
    }

    #[test]
    fn test_stops_at_first_failure() {
        let dir = TempDir::new().unwrap();
        let mut plan = plan_with(dir.path(), &[("a_old.txt", "a.txt")]);
        // sorts after a_old.txt and has no source on disk
        plan.insert(dir.path().join("b_missing.txt"), dir.path().join("b.txt"));
        plan.insert(dir.path().join("c_old.txt"), dir.path().join("c.txt"));
        fs::write(dir.path().join("c_old.txt"), "c").unwrap();

        let err = Transfer::new(TransferStrategy::Rename).apply(&plan).unwrap_err();

        match err {
            RenameError::Transfer { from, completed, .. } => {
                assert_eq!(completed, 1);
                assert_eq!(from, dir.path().join("b_missing.txt"));
            }
            other => panic!("unexpected error: {other}"),
        }
        // no rollback of the first rename, and nothing after the failure
        assert!(dir.path().join("a.txt").exists());
        assert!(dir.path().join("c_old.txt").exists());
    }

    #[test]
    fn test_describe() {
        let op = FileOperation::new(TransferStrategy::Move, "x", "y");
        assert_eq!(op.describe(), "Move x -> y");
        assert_eq!(TransferStrategy::Copy.verb(), "copied");
    }
}
