//! Zebra Cam
//!
//! Trigger and image acquisition for Zebra FS/VS series smart cameras
//! over their TCP control interface.
//!
//! This crate provides the core implementation for the `zebra` CLI tool.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install zebra-cam
//! zebra --help
//! ```
//!
//! `zebra -t` fires the camera; `zebra -a` fires it and saves the captured
//! image locally.

pub mod camera;
pub mod commands;
pub mod output;
pub mod payload;
pub mod utils;
