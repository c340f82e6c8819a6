//! Static endpoint descriptors.
//!
//! An [`Endpoint`] pairs an HTTP method with a path template and is typed by
//! the [`ResponseFormat`] its response decodes into, so the executor knows the
//! expected shape (or that no body is expected) at compile time.

use std::fmt;
use std::marker::PhantomData;

use url::Url;

use crate::method::RestMethod;
use crate::response::ResponseFormat;

/// A single scanner API endpoint.
///
/// ## Type Parameters
///
/// - `F`: The [`ResponseFormat`] for this endpoint's response.
///
/// ## Examples
///
/// ```rust
/// use nessus_client::{Endpoint, RestMethod};
/// use nessus_client::response::Discard;
///
/// const STOP: Endpoint<Discard> = Endpoint::new("stop_scan", RestMethod::Post, "/scans/{id}/stop");
///
/// assert_eq!(STOP.substitute_params(&[("id", "42")]), "/scans/42/stop");
/// ```
pub struct Endpoint<F: ResponseFormat> {
    id: &'static str,
    method: RestMethod,
    /// URL path template (may contain `{param}` placeholders).
    path: &'static str,
    _format: PhantomData<fn() -> F>,
}

// Manual impls: the format marker need not be Clone or Debug itself.
impl<F: ResponseFormat> Clone for Endpoint<F> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: ResponseFormat> Copy for Endpoint<F> {}

impl<F: ResponseFormat> fmt::Debug for Endpoint<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("id", &self.id)
            .field("method", &self.method)
            .field("path", &self.path)
            .finish()
    }
}

impl<F: ResponseFormat> Endpoint<F> {
    /// Creates an endpoint descriptor.
    pub const fn new(id: &'static str, method: RestMethod, path: &'static str) -> Self {
        Self {
            id,
            method,
            path,
            _format: PhantomData,
        }
    }

    /// Returns the endpoint's identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the HTTP method for this endpoint.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the path template for this endpoint.
    pub fn path(&self) -> &'static str {
        self.path
    }

    /// Substitutes path parameters in the template.
    ///
    /// Placeholders without a matching parameter are left untouched.
    pub fn substitute_params(&self, params: &[(&str, &str)]) -> String {
        let mut path = self.path.to_string();
        for (key, value) in params {
            path = path.replace(&format!("{{{key}}}"), value);
        }
        path
    }

    /// Builds the full URL for this endpoint under `base_url`.
    ///
    /// The path is appended to the base URL as-is rather than resolved with
    /// [`Url::join`], so a base such as `https://host/api` keeps its `/api`
    /// prefix.
    pub fn url(&self, base_url: &Url, params: &[(&str, &str)]) -> Result<Url, url::ParseError> {
        let base = base_url.as_str().trim_end_matches('/');
        Url::parse(&format!("{base}{}", self.substitute_params(params)))
    }
}
