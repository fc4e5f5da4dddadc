//! Assertion helpers for tests.

use std::path::Path;

use color_vision::PixelBuffer;
use pretty_assertions::assert_eq;

use super::app::TestOutput;

/// Assert the command exited successfully
pub fn assert_success(output: &TestOutput) {
    assert!(
        output.success,
        "Expected success. stdout: {} stderr: {}",
        output.stdout, output.stderr
    );
}

/// Assert the command failed with a message containing `needle` on stderr
pub fn assert_failure_mentions(output: &TestOutput, needle: &str) {
    assert!(!output.success, "Expected failure, got stdout: {}", output.stdout);
    assert!(
        output.stderr.contains(needle),
        "Expected stderr to mention {needle:?}, got: {}",
        output.stderr
    );
}

/// Assert a file is a PNG and decode it
pub fn assert_png_file(path: &Path) -> PixelBuffer {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G']),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
    huelens::rendering::decode_png(&bytes).expect("Failed to decode PNG")
}

/// Assert two buffers have equal alpha channels
pub fn assert_alpha_preserved(before: &PixelBuffer, after: &PixelBuffer) {
    let alpha = |b: &PixelBuffer| b.pixels().map(|px| px[3]).collect::<Vec<_>>();
    assert_eq!(alpha(before), alpha(after), "alpha channel changed");
}
