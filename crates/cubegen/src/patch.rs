use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::PatchOptions;
use crate::section;
use crate::vertex::VertexTable;

#[derive(Debug, thiserror::Error)]
pub enum PatchError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub content: String,
    pub changed: bool,
    pub written: bool,
}

/// Rewrites the generated sections of the file at `path` in place.
///
/// The whole file is read, transformed in memory and written back in one go.
/// Nothing is written when `options.dry_run` is set.
pub fn patch_file(
    path: &Path,
    options: &PatchOptions,
    table: &VertexTable,
) -> Result<PatchOutcome, PatchError> {
    let original = fs::read_to_string(path).map_err(|source| PatchError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let content = section::render_patched(&original, &options.marker_prefix, table);
    let changed = content != original;
    log::debug!(
        "patching {} ({} -> {} bytes, changed: {})",
        path.display(),
        original.len(),
        content.len(),
        changed
    );

    if options.dry_run {
        return Ok(PatchOutcome {
            content,
            changed,
            written: false,
        });
    }

    fs::write(path, &content).map_err(|source| PatchError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(PatchOutcome {
        content,
        changed,
        written: true,
    })
}
