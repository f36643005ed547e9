use crate::error::{ConverterError, Result};
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Refuses to replace an existing file unless `force` is set.
pub fn check_output_path(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConverterError::OutputExists(path.display().to_string()));
    }
    Ok(())
}

/// Writes through a temp file in the target directory, then renames it into place.
pub fn write_atomic(path: &Path, contents: &str, force: bool) -> Result<()> {
    check_output_path(path, force)?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(ConverterError::Io)?;

    let mut file = NamedTempFile::new_in(dir).map_err(ConverterError::Io)?;
    file.write_all(contents.as_bytes())
        .map_err(ConverterError::Io)?;
    file.flush().map_err(ConverterError::Io)?;
    file.persist(path)
        .map_err(|err| ConverterError::Io(err.error))?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output file");
    Ok(())
}
