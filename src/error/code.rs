//! Stable integer error codes shared by the SDK and the web API.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of a validation or a web API call.
///
/// Codes are stable integers on the wire. Values the SDK does not know are
/// kept as [`ErrorCode::Unknown`] so they pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum ErrorCode {
    /// Cannot reach the web API or decode its answer. Only produced locally.
    ConnectionError,
    Success,
    /// Input data failed server-side validation (length, format etc.).
    InvalidInput,
    /// The command is not supported by the web API.
    InvalidCommand,
    /// The radio model is not supported by the calculator.
    InvalidRadioModel,
    InvalidSerialLength,
    /// The serial does not match the expected regex pattern.
    InvalidSerialPattern,
    /// The serial is well formed but not supported by the selected calculator.
    InvalidSerialNotSupported,
    InvalidExtraLength,
    InvalidExtraPattern,
    /// The activation key is missing, invalid or expired.
    InvalidLicense,
    Unknown(i64),
}

impl ErrorCode {
    pub fn code(self) -> i64 {
        match self {
            Self::ConnectionError => -1,
            Self::Success => 0,
            Self::InvalidInput => 1,
            Self::InvalidCommand => 2,
            Self::InvalidRadioModel => 3,
            Self::InvalidSerialLength => 4,
            Self::InvalidSerialPattern => 5,
            Self::InvalidSerialNotSupported => 6,
            Self::InvalidExtraLength => 7,
            Self::InvalidExtraPattern => 8,
            Self::InvalidLicense => 100,
            Self::Unknown(code) => code,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Human readable description.
    pub fn description(self) -> &'static str {
        match self {
            Self::ConnectionError => "cannot connect to the web API",
            Self::Success => "success",
            Self::InvalidInput => "invalid input data",
            Self::InvalidCommand => "invalid web API command",
            Self::InvalidRadioModel => "radio model is not supported",
            Self::InvalidSerialLength => "invalid radio serial number length",
            Self::InvalidSerialPattern => "radio serial number does not match the expected pattern",
            Self::InvalidSerialNotSupported => "radio serial number is not supported",
            Self::InvalidExtraLength => "invalid extra data length",
            Self::InvalidExtraPattern => "extra data does not match the expected pattern",
            Self::InvalidLicense => "license key is invalid or expired",
            Self::Unknown(_) => "unknown error",
        }
    }
}

impl From<i64> for ErrorCode {
    fn from(code: i64) -> Self {
        match code {
            -1 => Self::ConnectionError,
            0 => Self::Success,
            1 => Self::InvalidInput,
            2 => Self::InvalidCommand,
            3 => Self::InvalidRadioModel,
            4 => Self::InvalidSerialLength,
            5 => Self::InvalidSerialPattern,
            6 => Self::InvalidSerialNotSupported,
            7 => Self::InvalidExtraLength,
            8 => Self::InvalidExtraPattern,
            100 => Self::InvalidLicense,
            other => Self::Unknown(other),
        }
    }
}

impl From<ErrorCode> for i64 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (error code {})", self.description(), self.code())
    }
}
