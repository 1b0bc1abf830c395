//! # API Client
//!
//! HTTP client for the wallet service. Every call goes through
//! [`ApiClient::execute`], which unwraps the success envelope, classifies
//! failures into [`ApiError`] and reports each failure once through the
//! configured [`Notifier`]. Cancelled requests are never reported.

use std::sync::Arc;

use reqwest::{header, Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use shared::{ApiEnvelope, ApiErrorBody};
use tracing::{debug, warn};

use super::validator::{decode, Validator};
use crate::config::ClientConfig;
use crate::error::{ApiError, ConfigError, Result, ValidationFailure};
use crate::notify::{notification_for, Notifier};
use crate::pagination::CancelToken;

/// Message used when an error response carries none.
const FALLBACK_SERVER_MESSAGE: &str = "An unexpected error occurred";

/// HTTP client for the wallet service.
///
/// Cheap to clone: the connection pool and notifier are shared.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    notifier: Arc<dyn Notifier>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("base_url", &self.base_url).finish()
    }
}

impl ApiClient {
    pub fn new(
        config: &ClientConfig,
        notifier: Arc<dyn Notifier>,
    ) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let builder = Client::builder();
        // the browser fetch API has no per-request timeout
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(config.request_timeout());

        let client = builder.build().map_err(|err| ConfigError::HttpClient(err.to_string()))?;

        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            notifier,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// `GET path?query`, returning the validated envelope `data`.
    pub async fn get<T, Q>(
        &self,
        path: &str,
        query: Option<&Q>,
        validator: Option<&dyn Validator<T>>,
        cancel: Option<CancelToken>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let mut request = self.client.get(self.url(path));
        if let Some(query) = query {
            request = request.query(query);
        }
        self.execute(request, validator, cancel).await
    }

    /// `POST path` with a JSON body, returning the validated envelope `data`.
    pub async fn post<T, B>(
        &self,
        path: &str,
        body: &B,
        validator: Option<&dyn Validator<T>>,
        cancel: Option<CancelToken>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.client.post(self.url(path)).json(body);
        self.execute(request, validator, cancel).await
    }

    /// `GET path?query` returning the raw body (no envelope), sent with the
    /// given `Accept` header.
    pub async fn get_bytes<Q>(&self, path: &str, query: &Q, accept: &str) -> Result<Vec<u8>>
    where
        Q: Serialize + ?Sized,
    {
        let request = self
            .client
            .get(self.url(path))
            .query(query)
            .header(header::ACCEPT, accept);

        let outcome = async {
            let (status, body) = send(request).await?;
            if !(200..300).contains(&status) {
                return Err(server_error(status, &body));
            }
            Ok(body)
        }
        .await;

        self.report(outcome)
    }

    async fn execute<T>(
        &self,
        request: RequestBuilder,
        validator: Option<&dyn Validator<T>>,
        cancel: Option<CancelToken>,
    ) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let exchange = async {
            let (status, body) = send(request).await?;
            if !(200..300).contains(&status) {
                return Err(server_error(status, &body));
            }
            unwrap_envelope(&body, validator)
        };

        let outcome = match cancel {
            Some(token) => token.run(exchange).await.and_then(|outcome| outcome),
            None => exchange.await,
        };

        self.report(outcome)
    }

    fn report<T>(&self, outcome: Result<T>) -> Result<T> {
        if let Err(err) = &outcome {
            if err.is_cancelled() {
                debug!("Request cancelled");
            } else {
                warn!("API request failed: {}", err);
            }
            if let Some(notification) = notification_for(err) {
                self.notifier.notify(notification);
            }
        }
        outcome
    }
}

async fn send(request: RequestBuilder) -> Result<(u16, Vec<u8>)> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .bytes()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    Ok((status, body.to_vec()))
}

/// Classify a non-2xx response.
pub(crate) fn server_error(status: u16, body: &[u8]) -> ApiError {
    let parsed: ApiErrorBody = serde_json::from_slice(body).unwrap_or_default();
    let code = parsed.code();
    let message = if parsed.message.trim().is_empty() {
        FALLBACK_SERVER_MESSAGE.to_string()
    } else {
        parsed.message
    };

    ApiError::Server { status, message, code }
}

/// Unwrap `{success, statusCode, message, data}` and validate `data`.
pub(crate) fn unwrap_envelope<T>(body: &[u8], validator: Option<&dyn Validator<T>>) -> Result<T>
where
    T: DeserializeOwned,
{
    let envelope: ApiEnvelope<Value> = serde_json::from_slice(body).map_err(ValidationFailure::from)?;

    if !envelope.success {
        return Err(ApiError::Server {
            status: envelope.status_code,
            message: envelope.message,
            code: None,
        });
    }

    let data = match validator {
        Some(validator) => validator.validate(envelope.data)?,
        None => decode(envelope.data)?,
    };
    Ok(data)
}
