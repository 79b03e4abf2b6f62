//! Exit codes following sysexits.h conventions.
//!
//! These codes provide semantic meaning for different failure modes,
//! enabling scripts and CI systems to handle errors appropriately.

#![allow(dead_code)] // Constants are also documented in --help output

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// General error (catch-all).
pub const GENERAL_ERROR: i32 = 1;

/// Command line usage error (no payment method supplied).
/// Maps to EX_USAGE from sysexits.h.
pub const USAGE_ERROR: i32 = 64;

/// Cannot open input file.
/// Maps to EX_NOINPUT from sysexits.h.
pub const INPUT_ERROR: i32 = 66;

/// External tool unavailable or failed.
/// Maps to EX_UNAVAILABLE from sysexits.h.
pub const TOOL_ERROR: i32 = 69;

/// I/O error (cannot write output file).
/// Maps to EX_IOERR from sysexits.h.
pub const IO_ERROR: i32 = 74;

/// Classify an error chain into an exit code by inspecting its rendered text.
pub fn classify(err: &anyhow::Error) -> i32 {
    let message = format!("{err:#}");

    if message.contains("payment method is required") {
        USAGE_ERROR
    } else if message.contains("File not found") || message.contains("Failed to read") {
        INPUT_ERROR
    } else if message.contains("c2patool") {
        TOOL_ERROR
    } else if message.contains("Failed to write") || message.contains("serialization") {
        IO_ERROR
    } else {
        GENERAL_ERROR
    }
}
