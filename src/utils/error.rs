//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while talking to the camera
#[derive(Error, Debug)]
pub enum CameraError {
    #[error("Failed to resolve camera address {0}")]
    AddressResolution(String),

    #[error("Failed to connect to {0}: {1}")]
    ConnectFailed(String, #[source] std::io::Error),

    #[error("Failed to send command to {0}: {1}")]
    SendFailed(String, #[source] std::io::Error),

    #[error("Failed to read results from {0}: {1}")]
    ReceiveFailed(String, #[source] std::io::Error),
}

/// Errors that can occur while extracting the image payload
#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("No image data found in the camera response")]
    NoImageData,

    #[error("Image payload is not valid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),
}

/// Errors that can occur while writing the image file
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
