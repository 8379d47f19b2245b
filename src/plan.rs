//! The old-path to new-path mapping produced by a walk.

use serde::Serialize;
use std::collections::btree_map;
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

/// One planned rename.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub from: PathBuf,
    pub to: PathBuf,
}

/// A conflict-free set of renames, keyed by original path.
#[derive(Debug, Clone, Default)]
pub struct Plan {
    entries: BTreeMap<PathBuf, PathBuf>,
    targets: HashSet<PathBuf>,
}

impl Plan {
    /// Creates an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Self-referential entries are rejected and return false.
    pub fn insert(&mut self, from: PathBuf, to: PathBuf) -> bool {
        if from == to {
            return false;
        }
        if let Some(previous) = self.entries.insert(from, to.clone()) {
            self.targets.remove(&previous);
        }
        self.targets.insert(to);
        true
    }

    /// Returns true if some entry already targets `dir/name`.
    pub fn targets_name(&self, dir: &Path, name: &str) -> bool {
        self.targets.contains(&dir.join(name))
    }

    /// Looks up the planned destination of `from`.
    pub fn get(&self, from: &Path) -> Option<&Path> {
        self.entries.get(from).map(PathBuf::as_path)
    }

    pub fn contains(&self, from: &Path) -> bool {
        self.entries.contains_key(from)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates `(from, to)` pairs in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.entries
            .iter()
            .map(|(from, to)| (from.as_path(), to.as_path()))
    }

    /// Returns owned entries, for reporting.
    pub fn entries(&self) -> Vec<PlanEntry> {
        self.entries
            .iter()
            .map(|(from, to)| PlanEntry {
                from: from.clone(),
                to: to.clone(),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Plan {
    type Item = (&'a PathBuf, &'a PathBuf);
    type IntoIter = btree_map::Iter<'a, PathBuf, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
