//! Output writer for acquired images.
//!
//! Handles the local-storage side of an acquire: where image files land
//! and how they are named.

pub mod image;

// Re-export main functions
pub use image::save_image;
