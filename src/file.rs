// src/file.rs

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    config::consts::{DEFAULT_FILE, LINE_SEP},
    error::WriteError,
    nouns::NounSet,
};

/// `nouns.txt` in the directory holding the running executable.
pub fn default_out_path() -> Result<PathBuf, WriteError> {
    let exe = env::current_exe().map_err(WriteError::Locate)?;
    let dir = exe.parent().ok_or_else(|| {
        WriteError::Locate(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{} has no parent directory", exe.display()),
        ))
    })?;
    Ok(dir.join(DEFAULT_FILE))
}

/// Pick the explicit path when given, the default otherwise.
pub fn resolve_out_path(path: Option<&Path>) -> Result<PathBuf, WriteError> {
    match path {
        Some(p) => Ok(p.to_path_buf()),
        None => default_out_path(),
    }
}

/// Newline-joined, no trailing newline.
pub fn to_export_string(nouns: &NounSet) -> String {
    nouns
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(LINE_SEP)
}

/// Create/truncate the target and write one noun per line.
/// Parent directories are not created. Returns the path written to.
pub fn write_noun_list(nouns: &NounSet, path: Option<&Path>) -> Result<PathBuf, WriteError> {
    let path = resolve_out_path(path)?;

    fs::write(&path, to_export_string(nouns)).map_err(|source| WriteError::Io {
        path: path.clone(),
        source,
    })?;

    info!(path = %path.display(), count = nouns.len(), "wrote noun list");
    Ok(path)
}

/// Read a file written by [`write_noun_list`] back into a set.
pub fn load_noun_list(path: &Path) -> io::Result<NounSet> {
    let text = fs::read_to_string(path)?;
    Ok(text.split(LINE_SEP).collect())
}
