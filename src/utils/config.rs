//! Configuration and constants for the CLI.
//!
//! The network defaults mirror the camera's factory settings; each is
//! adjustable on the device itself, so the CLI exposes a flag for it.

use std::time::Duration;

/// Default camera address
/// (camera-side: Device Settings > Network Settings > Network)
pub const DEFAULT_HOST: &str = "192.168.1.200";

/// Default TCP port accepting control commands
/// (camera-side: Device Settings > Network Settings > TCP/IP Settings)
pub const DEFAULT_CONTROL_PORT: u16 = 107;

/// Default TCP port streaming back command results
pub const DEFAULT_RESULTS_PORT: u16 = 25250;

/// Default timeout for camera connects, reads, and writes
pub const DEFAULT_CAMERA_TIMEOUT: Duration = Duration::from_secs(5);

/// Default string that fires the camera
/// (camera-side: Device Settings > Network Settings > TCP/IP Settings > Control)
pub const DEFAULT_TRIGGER_COMMAND: &str = "TRIGGER";

/// Command that asks the camera for the image of the last inspection
pub const IMAGE_REQUEST_COMMAND: &str = "getresultimage";

/// Terminator the camera expects after every command
pub const COMMAND_TERMINATOR: &str = "\r\n";

/// Base64 signature of a JPEG stream (the encoded SOI bytes `FF D8 FF`)
pub const JPEG_BASE64_MARKER: &[u8] = b"/9j/";

/// Default directory where acquired images are written
pub const DEFAULT_OUTPUT_DIR: &str = "images";

/// File name prefix for saved images
pub const IMAGE_FILE_PREFIX: &str = "output_image";

/// Timestamp layout embedded in saved image names
pub const IMAGE_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
