//! Image file output writer.
//!
//! Writes decoded image bytes to a timestamped file inside the output
//! directory, creating the directory on first use.

use crate::utils::config::{IMAGE_FILE_PREFIX, IMAGE_TIMESTAMP_FORMAT};
use crate::utils::error::OutputError;
use chrono::{DateTime, Local};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Write image bytes to a timestamped file under `output_dir`
///
/// **Public** - main entry point for image output
///
/// # Arguments
/// * `image_data` - Decoded JPEG bytes
/// * `output_dir` - Directory the file is placed in; created when missing
///
/// # Returns
/// Full path of the written file
///
/// # Errors
/// * `OutputError::InvalidPath` - Empty path, a non-directory target, or a
///   directory that cannot be created
/// * `OutputError::WriteFailed` - I/O error during the write
pub fn save_image(image_data: &[u8], output_dir: impl AsRef<Path>) -> Result<PathBuf, OutputError> {
    let output_dir = output_dir.as_ref();

    validate_output_dir(output_dir)?;

    if !output_dir.exists() {
        debug!("Creating output directory: {}", output_dir.display());
        fs::create_dir_all(output_dir).map_err(|e| {
            OutputError::InvalidPath(format!(
                "Cannot create directory {}: {}",
                output_dir.display(),
                e
            ))
        })?;
    }

    let image_path = output_dir.join(image_file_name(Local::now()));

    info!("Writing image to: {}", image_path.display());

    fs::write(&image_path, image_data).map_err(OutputError::WriteFailed)?;

    info!("Image written successfully ({} bytes)", image_data.len());

    Ok(image_path)
}

/// Timestamped file name for a captured image
///
/// **Private** - internal naming scheme
fn image_file_name(timestamp: DateTime<Local>) -> String {
    format!(
        "{}_{}.jpg",
        IMAGE_FILE_PREFIX,
        timestamp.format(IMAGE_TIMESTAMP_FORMAT)
    )
}

/// Validate that the output directory is usable
///
/// **Private** - internal validation
fn validate_output_dir(dir: &Path) -> Result<(), OutputError> {
    if dir.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if dir.exists() && !dir.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is not a directory: {}",
            dir.display()
        )));
    }

    Ok(())
}
