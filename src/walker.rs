//! Directory traversal that builds a rename plan.

use crate::config::Options;
use crate::error::{RenameError, Result};
use crate::plan::Plan;
use crate::transform::{NameOutcome, NamePlanner, collision};
use std::path::Path;
use tracing::{debug, trace};
use walkdir::WalkDir;

/// Walks the root directory and plans a rename for every qualifying file.
///
/// Directories are visited, never renamed. Entries are visited in file-name
/// order so collision suffixes are reproducible. Any traversal error aborts
/// the walk; no partial plan is returned.
pub fn walk(options: &Options) -> Result<Plan> {
    let root = options.root();
    let planner = NamePlanner::new(options);
    let mut plan = Plan::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| RenameError::Traversal {
            path: source.path().unwrap_or(root).to_path_buf(),
            source,
        })?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let Some(file_name) = entry.file_name().to_str() else {
            trace!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };

        let rel_path = path.strip_prefix(root).unwrap_or(path);
        if options.filter().is_excluded(rel_path) {
            trace!(path = %path.display(), "excluded");
            continue;
        }

        let candidate = match planner.plan(file_name) {
            NameOutcome::Rename(name) => name,
            NameOutcome::Skip(reason) => {
                trace!(path = %path.display(), ?reason, "skipped");
                continue;
            }
        };

        let dir = path.parent().unwrap_or(Path::new(""));
        let new_name = collision::resolve(dir, &candidate, &plan);
        let new_path = dir.join(&new_name);
        let planned = format!("{} -> {}", path.display(), new_path.display());
        if plan.insert(path.to_path_buf(), new_path) {
            debug!("planned {planned}");
        }
    }

    Ok(plan)
}
