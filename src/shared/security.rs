use crate::shared::error::FleetError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum snapshot/config file size (32 MB).
/// A vessel holds hundreds of components; anything this large is not a snapshot.
pub const MAX_FILE_SIZE: u64 = 32 * 1024 * 1024;

/// Validates that a path exists, is not a symbolic link and is a regular file
/// no larger than `max_size` bytes.
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns `FleetError::SecurityError` for symlinks and oversized files and
/// `FleetError::FileReadError` when metadata cannot be read.
pub fn validate_regular_file(path: &Path, max_size: u64) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| FleetError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(FleetError::SecurityError {
            path: path.to_path_buf(),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > max_size {
        return Err(FleetError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes",
                metadata.len(),
                max_size
            ),
            hint: "Split the export per vessel".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a file to a string after `validate_regular_file` passes.
pub fn read_regular_file(path: &Path) -> Result<String> {
    validate_regular_file(path, MAX_FILE_SIZE)?;
    let content = fs::read_to_string(path).map_err(|e| FleetError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;
    Ok(content)
}

/// Validates an identifier that will be embedded in a URL path or file name.
///
/// Rejects empty values, path separators, `..` and URL-significant characters.
pub fn validate_identifier(value: &str, description: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FleetError::Validation {
            message: format!("{} must not be empty", description),
        }
        .into());
    }

    if value.contains('/') || value.contains('\\') || value.contains("..") {
        return Err(FleetError::Validation {
            message: format!(
                "Security: {} contains path separators or '..' which are not allowed",
                description
            ),
        }
        .into());
    }

    if value.contains('#') || value.contains('?') || value.contains('@') {
        return Err(FleetError::Validation {
            message: format!("Security: {} contains URL-unsafe characters", description),
        }
        .into());
    }

    Ok(())
}
