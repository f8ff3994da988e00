//! Zebra camera CLI
//!
//! A command-line utility for Zebra FS/VS series smart cameras: fire the
//! trigger over the network and optionally pull the captured image down
//! to local storage.

use anyhow::Result;
use clap::{ArgGroup, Parser};
use env_logger::Env;
use std::path::PathBuf;
use std::time::Duration;

use zebra_cam::commands::{
    execute_acquire, execute_trigger, validate_acquire_args, validate_trigger_args, AcquireArgs,
    TriggerArgs,
};
use zebra_cam::utils::config::{
    DEFAULT_CAMERA_TIMEOUT, DEFAULT_CONTROL_PORT, DEFAULT_HOST, DEFAULT_OUTPUT_DIR,
    DEFAULT_RESULTS_PORT, DEFAULT_TRIGGER_COMMAND,
};

/// Zebra Cam - trigger and image acquisition for FS/VS smart cameras
#[derive(Parser, Debug)]
#[command(name = "zebra")]
#[command(version, about, long_about = None)]
#[command(group(ArgGroup::new("action").args(["trigger", "acquire"])))]
struct Cli {
    /// Trigger the camera; no file is written
    #[arg(short = 't', long)]
    trigger: bool,

    /// Trigger the camera and save the captured image
    #[arg(short = 'a', long)]
    acquire: bool,

    /// Camera host address
    #[arg(long, env = "ZEBRA_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// TCP port for control commands
    #[arg(long, env = "ZEBRA_CONTROL_PORT", default_value_t = DEFAULT_CONTROL_PORT)]
    control_port: u16,

    /// TCP port for command results
    #[arg(long, env = "ZEBRA_RESULTS_PORT", default_value_t = DEFAULT_RESULTS_PORT)]
    results_port: u16,

    /// String sent to fire the camera (must match the device configuration)
    #[arg(long, env = "ZEBRA_TRIGGER_STRING", default_value = DEFAULT_TRIGGER_COMMAND)]
    trigger_string: String,

    /// Directory acquired images are written into
    #[arg(short, long, env = "ZEBRA_OUTPUT_DIR", default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// Seconds to wait on camera connects, reads, and writes
    #[arg(long, default_value_t = DEFAULT_CAMERA_TIMEOUT.as_secs())]
    timeout: u64,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let trigger_args = TriggerArgs {
        host: cli.host,
        control_port: cli.control_port,
        results_port: cli.results_port,
        trigger_string: cli.trigger_string,
        timeout: Duration::from_secs(cli.timeout),
    };

    // Execute the requested action (the arg group rejects combined flags)
    if cli.trigger {
        validate_trigger_args(&trigger_args)?;
        execute_trigger(trigger_args)?;
    } else if cli.acquire {
        let args = AcquireArgs {
            trigger: trigger_args,
            output_dir: cli.output_dir,
        };

        validate_acquire_args(&args)?;
        execute_acquire(args)?;
    } else {
        anyhow::bail!("Please specify either --trigger or --acquire");
    }

    Ok(())
}
