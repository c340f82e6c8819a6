//! Request execution with tracing instrumentation.
//!
//! This module provides the [`NessusClient`] struct, its builder, and the
//! shared executor every endpoint method funnels through: sign the request,
//! send it, check the status and decode the body.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderValue};
use reqwest::redirect::Policy;
use serde::Serialize;
use tracing::{Span, debug, instrument, trace};
use url::Url;

use crate::auth::AuthProvider;
use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::endpoint::Endpoint;
use crate::error::{ClientError, ConfigError, NessusError, RequestError};
use crate::response::ResponseFormat;

/// Builder for configuring a [`NessusClient`].
#[derive(Debug)]
pub struct NessusClientBuilder {
    auth: AuthProvider,
    base_url: String,
    allow_insecure: bool,
    timeout: Duration,
}

impl NessusClientBuilder {
    fn new(auth: AuthProvider, base_url: impl Into<String>) -> Self {
        Self {
            auth,
            base_url: base_url.into(),
            allow_insecure: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Skips TLS certificate verification.
    ///
    /// Meant for lab scanners with self-signed certificates.
    pub fn allow_insecure(mut self, allow: bool) -> Self {
        self.allow_insecure = allow;
        self
    }

    /// Sets the request timeout.
    ///
    /// ## Examples
    ///
    /// ```rust,ignore
    /// use std::time::Duration;
    ///
    /// let client = NessusClient::builder(auth, "https://scanner.local:8834")
    ///     .timeout(Duration::from_secs(60))
    ///     .build()
    ///     .await?;
    /// ```
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builds the [`NessusClient`], preparing the auth provider.
    ///
    /// ## Errors
    ///
    /// - [`NessusError::Config`] if the base URL is invalid.
    /// - [`NessusError::Client`] if the HTTP client cannot be constructed.
    /// - [`NessusError::Init`] if the auth provider cannot be prepared.
    pub async fn build(self) -> Result<NessusClient, NessusError> {
        let base_url = Url::parse(&self.base_url).map_err(ConfigError::InvalidUrl)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme {
                scheme: base_url.scheme().to_string(),
            }
            .into());
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.allow_insecure)
            .redirect(Policy::none())
            .build()
            .map_err(ClientError::Build)?;

        self.auth
            .prepare(&base_url, &http)
            .await
            .map_err(NessusError::Init)?;

        debug!(
            base_url = %base_url,
            auth.method = self.auth.name(),
            allow_insecure = self.allow_insecure,
            "scanner client ready"
        );

        Ok(NessusClient {
            http,
            base_url,
            auth: self.auth,
        })
    }
}

/// Async client for the scanner management API.
///
/// Holds the base URL, a prepared HTTP client and the auth provider. All
/// state is immutable after construction, so a client can be shared behind
/// an `Arc`.
///
/// ## Examples
///
/// ```rust,no_run
/// use nessus_client::{AuthProvider, NessusClient};
///
/// # async fn run() -> Result<(), nessus_client::NessusError> {
/// let auth = AuthProvider::key("access", "secret");
/// let client = NessusClient::new(auth, "https://scanner.local:8834", false).await?;
///
/// client.launch_scan(42).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct NessusClient {
    http: reqwest::Client,
    base_url: Url,
    auth: AuthProvider,
}

impl NessusClient {
    /// Creates a new builder.
    pub fn builder(auth: AuthProvider, base_url: impl Into<String>) -> NessusClientBuilder {
        NessusClientBuilder::new(auth, base_url)
    }

    /// Creates a client with the default timeout.
    ///
    /// ## Errors
    ///
    /// [`NessusError::Init`] if the auth provider cannot be prepared; see
    /// [`NessusClientBuilder::build`] for the other cases.
    pub async fn new(
        auth: AuthProvider,
        base_url: impl Into<String>,
        allow_insecure: bool,
    ) -> Result<Self, NessusError> {
        Self::builder(auth, base_url)
            .allow_insecure(allow_insecure)
            .build()
            .await
    }

    /// Creates a client from a [`ClientConfig`].
    pub async fn from_config(config: ClientConfig) -> Result<Self, NessusError> {
        Self::builder(config.credentials.into_auth(), config.base_url)
            .allow_insecure(config.allow_insecure)
            .timeout(config.timeout)
            .build()
            .await
    }

    /// Returns the base URL for this client.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the auth provider in use.
    pub fn auth(&self) -> &AuthProvider {
        &self.auth
    }

    /// Builds a request for `endpoint`.
    ///
    /// `body`, when given, is serialized as JSON and sent with
    /// `Content-Type: application/json`.
    pub(crate) fn request<F, B>(
        &self,
        endpoint: &Endpoint<F>,
        params: &[(&str, &str)],
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<reqwest::Request, NessusError>
    where
        F: ResponseFormat,
        B: Serialize + ?Sized,
    {
        let url = endpoint
            .url(&self.base_url, params)
            .map_err(RequestError::InvalidUrl)?;

        let mut builder = self
            .http
            .request(endpoint.method().to_reqwest(), url)
            .header(ACCEPT, HeaderValue::from_static(F::content_type()));

        if !query.is_empty() {
            builder = builder.query(query);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body).map_err(RequestError::Serialize)?;
            builder = builder
                .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
                .body(bytes);
        }

        Ok(builder.build().map_err(RequestError::Build)?)
    }

    /// Executes a request and decodes the response with `F`.
    ///
    /// The response is owned here and dropped on every exit path, which
    /// releases the underlying connection.
    ///
    /// ## Errors
    ///
    /// Returns an error if:
    /// - Credentials cannot be attached
    /// - The request fails (network, DNS, TLS, timeout)
    /// - The scanner answers with a status code of 300 or above
    /// - The body cannot be decoded as `F`
    #[instrument(
        name = "nessus_request",
        skip(self, endpoint, request),
        fields(
            endpoint = endpoint.id(),
            http.method = %request.method(),
            http.url = %request.url(),
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    pub(crate) async fn execute<F>(
        &self,
        endpoint: &Endpoint<F>,
        mut request: reqwest::Request,
    ) -> Result<F::Output, NessusError>
    where
        F: ResponseFormat,
    {
        self.auth.add_credentials(&mut request)?;

        let response = self
            .http
            .execute(request)
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status().as_u16();
        Span::current().record("http.status_code", status);

        if status >= 300 {
            let otel_status = if status >= 500 { "ERROR" } else { "UNSET" };
            Span::current().record("otel.status_code", otel_status);
            return Err(ClientError::HttpStatus { status }.into());
        }

        Span::current().record("otel.status_code", "OK");

        if !F::EXPECTS_BODY {
            drop(response);
            debug!(status, "response received, body discarded");
            return Ok(F::parse(bytes::Bytes::new()).await?);
        }

        let body = response.bytes().await.map_err(ClientError::Transport)?;
        trace!(len = body.len(), "response body read");
        debug!(status, "response received");

        Ok(F::parse(body).await?)
    }
}
