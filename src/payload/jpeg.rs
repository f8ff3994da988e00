//! Extraction of the base64-encoded JPEG carried in a camera response.
//!
//! A base64-encoded JPEG always begins with `/9j/` - the encoding of the
//! SOI bytes `FF D8 FF` - so the payload is located by scanning for that
//! marker rather than by parsing the surrounding result text, whose layout
//! depends on the inspection job configured on the camera.

use crate::utils::config::JPEG_BASE64_MARKER;
use crate::utils::error::PayloadError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use log::debug;

/// Extract and decode the JPEG image embedded in a camera response
///
/// **Public** - main entry point for payload extraction
///
/// # Arguments
/// * `response` - Raw bytes read from the results port
///
/// # Returns
/// The decoded JPEG bytes
///
/// # Errors
/// * `PayloadError::NoImageData` - Response carries no `/9j/` marker
/// * `PayloadError::InvalidBase64` - Payload run does not decode
pub fn extract_jpeg(response: &[u8]) -> Result<Vec<u8>, PayloadError> {
    let start = find_marker(response).ok_or(PayloadError::NoImageData)?;
    let encoded = base64_run(&response[start..]);

    debug!(
        "Image payload located at byte {} ({} base64 characters)",
        start,
        encoded.len()
    );

    let image_data = STANDARD.decode(encoded)?;

    Ok(image_data)
}

/// Position of the first JPEG marker in the response
///
/// **Private** - internal helper for extract_jpeg
fn find_marker(response: &[u8]) -> Option<usize> {
    response
        .windows(JPEG_BASE64_MARKER.len())
        .position(|window| window == JPEG_BASE64_MARKER)
}

/// Longest contiguous run of base64 alphabet bytes from the start of `bytes`
///
/// The camera terminates the payload with CRLF and may append further
/// result text, so the run ends at the first byte outside the alphabet.
///
/// **Private** - internal helper for extract_jpeg
fn base64_run(bytes: &[u8]) -> &[u8] {
    let end = bytes
        .iter()
        .position(|b| !is_base64_byte(*b))
        .unwrap_or(bytes.len());

    &bytes[..end]
}

/// Whether `byte` belongs to the standard base64 alphabet (incl. padding)
fn is_base64_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'+' || byte == b'/' || byte == b'='
}
