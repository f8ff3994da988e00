//! TCP client for the camera's control and results endpoints.

pub mod client;

// Re-export main client type
pub use client::{frame_command, CameraClient};
