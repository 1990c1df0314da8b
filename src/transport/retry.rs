//! Retrying transport decorator.

use async_trait::async_trait;

use crate::error::RadioError;
use crate::util::retry::RetryPolicy;

use super::{JsonObject, RequestForm, Transport};

/// Wraps a transport and resends requests that failed with a retryable error.
#[derive(Debug, Clone)]
pub struct RetryingTransport<T> {
    inner: T,
    policy: RetryPolicy,
}

impl<T: Transport> RetryingTransport<T> {
    pub fn new(inner: T, policy: RetryPolicy) -> Self {
        Self { inner, policy }
    }
}

#[async_trait]
impl<T: Transport> Transport for RetryingTransport<T> {
    async fn post_form(&self, form: &RequestForm) -> Result<JsonObject, RadioError> {
        self.policy.execute(|| self.inner.post_form(form)).await
    }
}
