//! Acquire command implementation.
//!
//! The acquire command:
//! 1. Triggers the camera
//! 2. Requests the image of the inspection that just ran
//! 3. Extracts the JPEG payload and saves it to local storage

use crate::camera::CameraClient;
use crate::commands::trigger::{validate_trigger_args, TriggerArgs};
use crate::output::save_image;
use crate::payload::extract_jpeg;
use crate::utils::config::{DEFAULT_OUTPUT_DIR, IMAGE_REQUEST_COMMAND};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the acquire command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct AcquireArgs {
    /// Connection and trigger parameters; an acquire is a trigger plus
    /// persistence of the result image
    pub trigger: TriggerArgs,

    /// Directory the image file is written into
    pub output_dir: PathBuf,
}

impl Default for AcquireArgs {
    fn default() -> Self {
        Self {
            trigger: TriggerArgs::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

/// Execute the acquire command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Acquire command arguments
///
/// # Returns
/// Ok once the image file is on disk
///
/// # Errors
/// * Camera connection failures at either step
/// * A response without an image payload
/// * File write errors
pub fn execute_acquire(args: AcquireArgs) -> Result<()> {
    let start_time = Instant::now();

    info!(
        "Acquiring image from camera at {}:{}",
        args.trigger.host, args.trigger.control_port
    );

    let client = CameraClient::new(
        args.trigger.host.as_str(),
        args.trigger.control_port,
        args.trigger.results_port,
    )
    .with_timeout(args.trigger.timeout);

    // Step 1: Trigger the camera
    info!("Step 1/3: Triggering camera...");
    client
        .send_command(&args.trigger.trigger_string)
        .context("Failed to trigger the camera")?;

    // Step 2: Request the result image
    info!("Step 2/3: Requesting result image...");
    let response = client
        .send_command(IMAGE_REQUEST_COMMAND)
        .context("Failed to request the result image")?;

    debug!("Result response: {} bytes", response.len());

    // Step 3: Decode and save
    info!("Step 3/3: Decoding and saving image...");
    let image_data =
        extract_jpeg(&response).context("Camera response carried no usable image")?;

    let image_path =
        save_image(&image_data, &args.output_dir).context("Failed to save image")?;

    println!("✓ Image saved to: {}", image_path.display());

    let elapsed = start_time.elapsed();
    info!("Acquire completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate acquire arguments
///
/// **Public** - can be called before execute_acquire for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_acquire_args(args: &AcquireArgs) -> Result<()> {
    validate_trigger_args(&args.trigger)?;

    if args.output_dir.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    Ok(())
}
