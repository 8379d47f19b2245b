//! Collision resolution for planned names.

use crate::matcher::split_extension;
use crate::plan::Plan;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Returns a name for `candidate` that is unique within `dir`.
///
/// A name conflicts when another plan entry already targets it in the same
/// directory, or when anything exists on disk at `dir/name`. Conflicts are
/// resolved by inserting `_1`, `_2`, ... before the extension; the lowest
/// free suffix wins.
pub fn resolve(dir: &Path, candidate: &str, planned: &Plan) -> String {
    if !conflicts(dir, candidate, planned) {
        return candidate.to_string();
    }

    let (stem, ext) = split_extension(candidate);
    let mut count: u64 = 1;
    loop {
        let next = format!("{stem}_{count}{ext}");
        if !conflicts(dir, &next, planned) {
            warn!(
                dir = %dir.display(),
                candidate,
                resolved = %next,
                "name collision resolved with suffix"
            );
            return next;
        }
        count += 1;
    }
}

/// Returns true if `name` is already planned in `dir` or present on disk.
pub fn conflicts(dir: &Path, name: &str, planned: &Plan) -> bool {
    planned.targets_name(dir, name) || fs::symlink_metadata(dir.join(name)).is_ok()
}
