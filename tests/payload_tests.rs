use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use pretty_assertions::assert_eq;

use zebra_cam::payload::extract_jpeg;
use zebra_cam::utils::PayloadError;

// JFIF header bytes, the start of a real JPEG file
const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

#[test]
fn test_extracts_image_from_results_envelope() {
    let encoded = STANDARD.encode(JPEG_BYTES);
    let response = format!("RESULT:PASS;INSPECTION:42\r\n{}\r\n", encoded);

    let image = extract_jpeg(response.as_bytes()).unwrap();

    assert_eq!(image, JPEG_BYTES);
}

#[test]
fn test_ignores_text_after_the_payload() {
    // Quantization-table variant of the JPEG start bytes
    let response = b"/9j/2wBD\r\nDONE\r\n";

    let image = extract_jpeg(response).unwrap();

    assert_eq!(image, &[0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43]);
}

#[test]
fn test_rejects_response_without_marker() {
    let result = extract_jpeg(b"RESULT:FAIL\r\n");

    assert!(matches!(result, Err(PayloadError::NoImageData)));
}
