//! Transport trait and request forms.

pub mod http;
pub mod retry;

pub use http::HttpTransport;
pub use retry::RetryingTransport;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::{Map, Value};
use strum::{Display, EnumString, IntoStaticStr};

use crate::error::RadioError;

/// Decoded JSON object returned by the web API.
pub type JsonObject = Map<String, Value>;

/// Web API commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Command {
    Login,
    Info,
    List,
    Calc,
}

/// Form fields of one POST request, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RequestForm(Vec<(String, String)>);

impl RequestForm {
    pub fn new(command: Command) -> Self {
        Self::raw_command(<&'static str>::from(command))
    }

    /// A form with an arbitrary `command` value.
    pub fn raw_command(command: impl Into<String>) -> Self {
        Self(vec![("command".to_string(), command.into())])
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a field, replacing an earlier value with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn command(&self) -> Option<&str> {
        self.get("command")
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.0
    }
}

/// Sends one form-encoded request and returns the decoded JSON object.
///
/// Implementations report every failure (connectivity, empty or undecodable
/// body) as an error; the client folds them into a connection error code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post_form(&self, form: &RequestForm) -> Result<JsonObject, RadioError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn post_form(&self, form: &RequestForm) -> Result<JsonObject, RadioError> {
        (**self).post_form(form).await
    }
}
