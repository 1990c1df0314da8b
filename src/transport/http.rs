//! HTTP transport for the Radio Code Calculator web API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde_json::Value;
use tracing::debug;

use crate::error::RadioError;

use super::{JsonObject, RequestForm, Transport};

/// Default web API endpoint.
pub const DEFAULT_API_URL: &str = "https://www.pelock.com/api/radio-code-calculator/v1";

const USER_AGENT_VALUE: &str = "PELock Radio Code Calculator";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends form-encoded POST requests with `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    /// Transport for [`DEFAULT_API_URL`] with [`DEFAULT_TIMEOUT`].
    pub fn new() -> Result<Self, RadioError> {
        Self::with_options(DEFAULT_API_URL, DEFAULT_TIMEOUT)
    }

    pub fn with_options(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, RadioError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(default_headers())
            .build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Use a preconfigured client (proxies, custom TLS roots, ...).
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_form(&self, form: &RequestForm) -> Result<JsonObject, RadioError> {
        debug!(
            url = %self.base_url,
            command = form.command().unwrap_or_default(),
            "Sending web API request"
        );

        let resp = self.client.post(&self.base_url).form(form).send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        match decode_body(&body) {
            Ok(object) => Ok(object),
            Err(e) if !status.is_success() => {
                debug!(status = status.as_u16(), error = %e, "Undecodable error response");
                Err(RadioError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Decode a response body into a JSON object.
pub fn decode_body(body: &str) -> Result<JsonObject, RadioError> {
    if body.trim().is_empty() {
        return Err(RadioError::EmptyResponse);
    }
    match serde_json::from_str::<Value>(body)? {
        Value::Object(object) if !object.is_empty() => Ok(object),
        Value::Object(_) => Err(RadioError::EmptyResponse),
        other => Err(RadioError::InvalidResponse(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_object() {
        let object = decode_body(r#"{"error":0,"code":"2487"}"#).unwrap();
        assert_eq!(object["code"], "2487");
    }

    #[test]
    fn decode_rejects_empty_bodies() {
        assert!(matches!(decode_body(""), Err(RadioError::EmptyResponse)));
        assert!(matches!(decode_body("  \n"), Err(RadioError::EmptyResponse)));
        assert!(matches!(decode_body("{}"), Err(RadioError::EmptyResponse)));
    }

    #[test]
    fn decode_rejects_non_objects() {
        assert!(matches!(decode_body("[1,2]"), Err(RadioError::InvalidResponse(_))));
        assert!(matches!(decode_body("<html>"), Err(RadioError::Serialization(_))));
    }
}
