//! Typed results of web API calls and decoding of response fields.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ErrorCode, RadioError};
use crate::models::{PatternSet, RadioModel};
use crate::transport::JsonObject;

/// Outcome of one web API call.
///
/// `payload` is present only when `error` is [`ErrorCode::Success`].
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub error: ErrorCode,
    pub payload: Option<T>,
    raw: Option<JsonObject>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn success(payload: T, raw: JsonObject) -> Self {
        Self {
            error: ErrorCode::Success,
            payload: Some(payload),
            raw: Some(raw),
        }
    }

    pub(crate) fn failure(error: ErrorCode, raw: JsonObject) -> Self {
        Self {
            error,
            payload: None,
            raw: Some(raw),
        }
    }

    /// Local failure: nothing usable came back from the web API.
    pub fn connection_error() -> Self {
        Self::local(ErrorCode::ConnectionError)
    }

    /// A result produced without contacting the web API.
    pub fn local(error: ErrorCode) -> Self {
        Self {
            error,
            payload: None,
            raw: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_success()
    }

    /// The decoded response object, absent for local results.
    pub fn raw(&self) -> Option<&JsonObject> {
        self.raw.as_ref()
    }

    pub fn into_result(self) -> Result<T, RadioError> {
        match (self.error, self.payload) {
            (ErrorCode::Success, Some(payload)) => Ok(payload),
            (ErrorCode::Success, None) => Err(RadioError::Rejected(ErrorCode::ConnectionError)),
            (error, _) => Err(RadioError::Rejected(error)),
        }
    }

    /// Constraints the web API echoed back when it rejected the input.
    pub fn rejection_hint(&self) -> Option<ModelConstraints> {
        if self.is_success() {
            return None;
        }
        ModelConstraints::from_object(self.raw.as_ref()?)
    }
}

/// License type of the activation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum LicenseType {
    Personal,
    Company,
}

impl TryFrom<i64> for LicenseType {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Personal),
            1 => Ok(Self::Company),
            other => Err(format!("unknown license type {other}")),
        }
    }
}

impl From<LicenseType> for i64 {
    fn from(value: LicenseType) -> Self {
        match value {
            LicenseType::Personal => 0,
            LicenseType::Company => 1,
        }
    }
}

/// License details returned by `login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseInfo {
    pub activation_status: bool,
    pub user_name: String,
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    pub expiration_date: NaiveDate,
}

/// Input rules reported by the web API, e.g. alongside a calc rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelConstraints {
    pub serial_max_len: Option<usize>,
    pub serial_patterns: Option<PatternSet>,
    pub extra_max_len: Option<usize>,
    pub extra_patterns: Option<PatternSet>,
}

impl ModelConstraints {
    fn from_object(object: &JsonObject) -> Option<Self> {
        let constraints = Self {
            serial_max_len: object.get("serialMaxLen").and_then(|v| length(v).ok()),
            serial_patterns: object
                .get("serialRegexPattern")
                .and_then(|v| patterns(v).ok())
                .filter(|p| !p.is_empty()),
            extra_max_len: object.get("extraMaxLen").and_then(|v| length(v).ok()),
            extra_patterns: object
                .get("extraRegexPattern")
                .and_then(|v| patterns(v).ok())
                .filter(|p| !p.is_empty()),
        };
        (constraints != Self::default()).then_some(constraints)
    }
}

pub(crate) fn decode_license(object: &JsonObject) -> Result<LicenseInfo, RadioError> {
    let license = object
        .get("license")
        .ok_or_else(|| RadioError::InvalidResponse("missing 'license'".into()))?;
    Ok(LicenseInfo::deserialize(license)?)
}

pub(crate) fn decode_code(object: &JsonObject) -> Result<String, RadioError> {
    match object.get("code") {
        Some(Value::String(code)) => Ok(code.clone()),
        Some(Value::Number(code)) => Ok(code.to_string()),
        _ => Err(RadioError::InvalidResponse("missing 'code'".into())),
    }
}

/// Build a model from `serialMaxLen`/`serialRegexPattern`/`extraMaxLen`/`extraRegexPattern`.
pub(crate) fn decode_model(
    name: &str,
    object: &JsonObject,
    language_tag: &str,
) -> Result<RadioModel, RadioError> {
    let serial_max_len = length(required(object, "serialMaxLen")?)?;
    let serial_patterns = patterns(required(object, "serialRegexPattern")?)?;
    let extra_max_len = object.get("extraMaxLen").map(length).transpose()?.unwrap_or(0);
    let extra_patterns = object
        .get("extraRegexPattern")
        .map(patterns)
        .transpose()?
        .unwrap_or_default();

    Ok(RadioModel::new(name, serial_max_len, serial_patterns)
        .with_extra(extra_max_len, extra_patterns)
        .with_language_tag(language_tag))
}

/// Decode every entry of `supportedRadioModels`, in response order.
pub(crate) fn decode_model_list(
    object: &JsonObject,
    language_tag: &str,
) -> Result<Vec<RadioModel>, RadioError> {
    let models = required(object, "supportedRadioModels")?;
    let entries = match models {
        Value::Object(entries) => entries,
        // PHP encodes an empty associative array as []
        Value::Array(items) if items.is_empty() => return Ok(Vec::new()),
        _ => {
            return Err(RadioError::InvalidResponse(
                "'supportedRadioModels' is not an object".into(),
            ))
        }
    };

    entries
        .iter()
        .map(|(name, params)| match params {
            Value::Object(params) => decode_model(name, params, language_tag),
            _ => Err(RadioError::InvalidResponse(format!(
                "parameters of '{name}' are not an object"
            ))),
        })
        .collect()
}

fn required<'a>(object: &'a JsonObject, field: &str) -> Result<&'a Value, RadioError> {
    object
        .get(field)
        .ok_or_else(|| RadioError::InvalidResponse(format!("missing '{field}'")))
}

fn length(value: &Value) -> Result<usize, RadioError> {
    let parsed = match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        Value::Null => Some(0),
        _ => None,
    };
    parsed
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| RadioError::InvalidResponse(format!("invalid length {value}")))
}

/// Patterns arrive as a single string, a tag-to-pattern object, or nothing.
fn patterns(value: &Value) -> Result<PatternSet, RadioError> {
    match value {
        Value::String(pattern) => Ok(PatternSet::single(pattern.as_str())),
        Value::Object(map) => map
            .iter()
            .map(|(tag, pattern)| match pattern {
                Value::String(pattern) => Ok((tag.as_str(), pattern.as_str())),
                _ => Err(RadioError::InvalidResponse(format!(
                    "pattern for '{tag}' is not a string"
                ))),
            })
            .collect(),
        Value::Null => Ok(PatternSet::default()),
        Value::Array(items) if items.is_empty() => Ok(PatternSet::default()),
        other => Err(RadioError::InvalidResponse(format!("invalid pattern {other}"))),
    }
}
