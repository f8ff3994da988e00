//! Trigger command implementation.
//!
//! Sends the configured trigger string to the camera's control port and
//! logs whatever the results port reports back. No files are written.

use crate::camera::CameraClient;
use crate::utils::config::{
    DEFAULT_CAMERA_TIMEOUT, DEFAULT_CONTROL_PORT, DEFAULT_HOST, DEFAULT_RESULTS_PORT,
    DEFAULT_TRIGGER_COMMAND,
};
use anyhow::{Context, Result};
use log::{debug, info};
use std::time::Duration;

/// Arguments for the trigger command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct TriggerArgs {
    /// Camera host address
    pub host: String,

    /// TCP port accepting control commands
    pub control_port: u16,

    /// TCP port streaming back command results
    pub results_port: u16,

    /// Text sent to fire the camera (must match the string configured on
    /// the device)
    pub trigger_string: String,

    /// Connect/read/write timeout for every camera socket
    pub timeout: Duration,
}

impl Default for TriggerArgs {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            control_port: DEFAULT_CONTROL_PORT,
            results_port: DEFAULT_RESULTS_PORT,
            trigger_string: DEFAULT_TRIGGER_COMMAND.to_string(),
            timeout: DEFAULT_CAMERA_TIMEOUT,
        }
    }
}

/// Execute the trigger command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Trigger command arguments
///
/// # Returns
/// Ok once the trigger reached the camera and the results port was drained
///
/// # Errors
/// * Camera resolution, connection, send, or receive failures
pub fn execute_trigger(args: TriggerArgs) -> Result<()> {
    info!("Triggering camera at {}:{}", args.host, args.control_port);

    let client = CameraClient::new(args.host.as_str(), args.control_port, args.results_port)
        .with_timeout(args.timeout);

    let response = client
        .send_command(&args.trigger_string)
        .context("Failed to trigger the camera")?;

    log_camera_response(&response);

    println!("✓ Trigger sent to {}:{}", args.host, args.control_port);

    Ok(())
}

/// Log the textual outcome reported on the results port
///
/// **Private** - a bare trigger only reports the result, it never saves it
fn log_camera_response(response: &[u8]) {
    if response.is_empty() {
        debug!("Results port closed without data");
    } else {
        info!(
            "Camera response: {}",
            String::from_utf8_lossy(response).trim()
        );
    }
}

/// Validate trigger arguments
///
/// **Public** - can be called before execute_trigger for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_trigger_args(args: &TriggerArgs) -> Result<()> {
    if args.host.is_empty() {
        anyhow::bail!("Camera host cannot be empty");
    }

    if args.control_port == 0 {
        anyhow::bail!("Control port cannot be 0");
    }

    if args.results_port == 0 {
        anyhow::bail!("Results port cannot be 0");
    }

    if args.control_port == args.results_port {
        anyhow::bail!("Control and results ports must differ");
    }

    if args.trigger_string.trim().is_empty() {
        anyhow::bail!("Trigger string cannot be empty");
    }

    if args.timeout.is_zero() {
        anyhow::bail!("Timeout must be greater than 0");
    }

    Ok(())
}
