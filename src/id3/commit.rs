// Finalizing an edit: install or discard the staged output

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TagError, TagResult};
use crate::id3::rewrite::RewriteOutcome;

/// Path for the staged output: `<name>.tmp` beside the original.
///
/// Staying in the same directory keeps the final rename on one filesystem,
/// where it is an atomic replace.
pub fn staged_path(original: &Path) -> PathBuf {
    let mut name = original
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("staged"));
    name.push(".tmp");
    original.with_file_name(name)
}

/// Finalize an edit.
///
/// On [`RewriteOutcome::Replaced`], atomically install the staged file at
/// the original path. On [`RewriteOutcome::NotFound`], delete the staged
/// file and leave the original untouched. The original is never modified in
/// place; until the rename lands it stays byte-identical to its pre-edit
/// state. A failure here is [`TagError::Commit`], distinct from staging
/// failures, because the staged file may be left behind.
pub fn commit(original: &Path, staged: &Path, outcome: &RewriteOutcome) -> TagResult<()> {
    match outcome {
        RewriteOutcome::Replaced { .. } => {
            fs::rename(staged, original).map_err(TagError::Commit)
        }
        RewriteOutcome::NotFound => fs::remove_file(staged).map_err(TagError::Commit),
    }
}
