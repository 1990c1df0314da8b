//! Offline validation of serial numbers and extra data.

pub mod pattern;

use crate::error::ErrorCode;
use crate::models::RadioModel;

/// Validate a serial number and optional extra data against a model.
///
/// Checks run in a fixed order and the first failure wins: serial length,
/// serial pattern, then (only when `extra` is non-empty) extra length and
/// extra pattern. Lengths are counted in bytes, as the web API does.
pub fn validate(model: &RadioModel, serial: &str, extra: Option<&str>) -> ErrorCode {
    if serial.len() != model.serial_max_len() {
        return ErrorCode::InvalidSerialLength;
    }

    if !pattern::is_match(model.serial_pattern(), serial) {
        return ErrorCode::InvalidSerialPattern;
    }

    if let Some(extra) = extra.filter(|e| !e.is_empty()) {
        if extra.len() != model.extra_max_len() {
            return ErrorCode::InvalidExtraLength;
        }
        if !pattern::is_match(model.extra_pattern().unwrap_or_default(), extra) {
            return ErrorCode::InvalidExtraPattern;
        }
    }

    ErrorCode::Success
}
