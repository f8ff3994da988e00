//! Parsing of camera responses into image bytes.
//!
//! The results port answers `getresultimage` with a text envelope that
//! embeds the captured frame as base64. This module locates and decodes
//! that payload.

pub mod jpeg;

// Re-export main extraction function
pub use jpeg::extract_jpeg;
