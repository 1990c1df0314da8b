//! Radio Code Calculator web API client.

pub mod response;

pub use response::{ApiResponse, LicenseInfo, LicenseType, ModelConstraints};

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::RadioConfig;
use crate::error::{ErrorCode, RadioError};
use crate::models::{ModelRef, RadioModel, DEFAULT_LANGUAGE_TAG};
use crate::transport::{
    Command, HttpTransport, JsonObject, RequestForm, RetryingTransport, Transport,
};

/// Client for the Radio Code Calculator web API.
///
/// Every operation performs exactly one request and reports its outcome as
/// an [`ApiResponse`]. Transport failures never escape as errors; they
/// become [`ErrorCode::ConnectionError`].
///
/// ```no_run
/// use radio_code::client::RadioCodeCalculator;
/// use radio_code::models::CatalogModel;
///
/// # async fn example() -> radio_code::error::Result<()> {
/// let calculator = RadioCodeCalculator::new("ABCD-ABCD-ABCD-ABCD")?;
/// let response = calculator.calc(CatalogModel::FordMSeries, "123456", None).await;
/// if let Some(code) = response.payload {
///     println!("Radio code is {code}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct RadioCodeCalculator {
    transport: Arc<dyn Transport>,
    api_key: Option<String>,
    language_tag: String,
}

impl fmt::Debug for RadioCodeCalculator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadioCodeCalculator")
            .field("transport", &"..")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("language_tag", &self.language_tag)
            .finish()
    }
}

impl RadioCodeCalculator {
    /// Client for the default endpoint using `api_key`.
    pub fn new(api_key: impl Into<String>) -> Result<Self, RadioError> {
        Ok(Self::with_transport(Some(api_key.into()), HttpTransport::new()?))
    }

    /// Client over a custom transport.
    pub fn with_transport(api_key: Option<String>, transport: impl Transport + 'static) -> Self {
        Self {
            transport: Arc::new(transport),
            api_key,
            language_tag: DEFAULT_LANGUAGE_TAG.to_string(),
        }
    }

    /// Client built from layered configuration.
    ///
    /// Requests are retried only when `max_attempts` is greater than one.
    pub fn from_config(config: &RadioConfig) -> Result<Self, RadioError> {
        let http = HttpTransport::with_options(config.base_url.clone(), config.timeout())?;
        let client = match config.retry_policy() {
            Some(policy) => {
                Self::with_transport(config.api_key.clone(), RetryingTransport::new(http, policy))
            }
            None => Self::with_transport(config.api_key.clone(), http),
        };
        Ok(client.with_language_tag(config.language_tag.clone()))
    }

    /// Language tag given to models built from web API responses.
    pub fn with_language_tag(mut self, language_tag: impl Into<String>) -> Self {
        self.language_tag = language_tag.into();
        self
    }

    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.as_deref().is_some_and(|key| !key.is_empty())
    }

    /// Log in and fetch the license details of the activation key.
    pub async fn login(&self) -> ApiResponse<LicenseInfo> {
        self.dispatch(RequestForm::new(Command::Login), response::decode_license)
            .await
    }

    /// Fetch the input rules of one radio model.
    pub async fn info(&self, model: impl Into<ModelRef>) -> ApiResponse<RadioModel> {
        let model = model.into();
        let name = model.name();
        let form = RequestForm::new(Command::Info).field("radio_model", name);
        self.dispatch(form, |object| {
            response::decode_model(name, object, &self.language_tag)
        })
        .await
    }

    /// List every radio model supported by the web API, in response order.
    pub async fn list(&self) -> ApiResponse<Vec<RadioModel>> {
        self.dispatch(RequestForm::new(Command::List), |object| {
            response::decode_model_list(object, &self.language_tag)
        })
        .await
    }

    /// Calculate the radio code for `serial` (and optional extra data).
    pub async fn calc(
        &self,
        model: impl Into<ModelRef>,
        serial: &str,
        extra: Option<&str>,
    ) -> ApiResponse<String> {
        let model = model.into();
        let form = RequestForm::new(Command::Calc)
            .field("radio_model", model.name())
            .field("serial", serial)
            .field("extra", extra.unwrap_or_default());
        self.dispatch(form, response::decode_code).await
    }

    /// Validate offline first, then calculate.
    ///
    /// When a local descriptor is available (catalog name, catalog entry or
    /// explicit model) and rejects the input, no request is sent and the
    /// validation code is returned.
    pub async fn calc_checked(
        &self,
        model: impl Into<ModelRef>,
        serial: &str,
        extra: Option<&str>,
    ) -> ApiResponse<String> {
        let model = model.into();
        if let Some(local) = model.local_model() {
            let error = local.validate(serial, extra);
            if !error.is_success() {
                debug!(model = local.name(), %error, "Offline validation rejected input");
                return ApiResponse::local(error);
            }
        }
        self.calc(model, serial, extra).await
    }

    /// Send an arbitrary command and return the raw response object.
    pub async fn send(&self, form: RequestForm) -> ApiResponse<JsonObject> {
        self.dispatch(form, |object| Ok(object.clone())).await
    }

    async fn dispatch<T, F>(&self, mut form: RequestForm, decode: F) -> ApiResponse<T>
    where
        F: FnOnce(&JsonObject) -> Result<T, RadioError>,
    {
        if let Some(key) = self.api_key.as_deref().filter(|key| !key.is_empty()) {
            form.set("key", key);
        }
        let command = form.command().unwrap_or_default().to_string();

        let object = match self.transport.post_form(&form).await {
            Ok(object) => object,
            Err(e) => {
                warn!(command = %command, error = %e, "Web API request failed");
                return ApiResponse::connection_error();
            }
        };

        let error = match object.get("error").and_then(|v| v.as_i64()) {
            Some(code) => ErrorCode::from(code),
            None => {
                warn!(command = %command, "Web API response has no integer 'error' field");
                return ApiResponse::connection_error();
            }
        };
        debug!(command = %command, %error, "Web API response");

        if !error.is_success() {
            return ApiResponse::failure(error, object);
        }

        match decode(&object) {
            Ok(payload) => ApiResponse::success(payload, object),
            Err(e) => {
                warn!(command = %command, error = %e, "Malformed web API response");
                ApiResponse::connection_error()
            }
        }
    }
}
