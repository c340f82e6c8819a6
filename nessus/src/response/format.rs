//! Response format trait and implementations.
//!
//! The [`ResponseFormat`] trait defines how an HTTP response body turns into
//! a typed value. Scanner endpoints either answer with JSON ([`JsonFormat`])
//! or with nothing worth reading ([`Discard`]).

use std::future::Future;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;

use crate::error::ValidationError;

/// Trait for response format parsing strategies.
///
/// ## Examples
///
/// ```rust,ignore
/// use nessus_client::response::{Discard, JsonFormat};
///
/// // The format type encodes both the parsing strategy and output type
/// type PluginResponse = JsonFormat<Plugin>;
/// type LaunchResponse = Discard;
/// ```
pub trait ResponseFormat: Send + Sync {
    /// The output type after parsing.
    type Output: Send;

    /// Whether the executor should read the body at all.
    ///
    /// When `false` the response is dropped unread and [`parse`](Self::parse)
    /// receives an empty buffer.
    const EXPECTS_BODY: bool = true;

    /// Parse a response body into the output type.
    fn parse(
        body: bytes::Bytes,
    ) -> impl Future<Output = Result<Self::Output, ValidationError>> + Send;

    /// Returns the value sent in the `Accept` header.
    fn content_type() -> &'static str;
}

/// JSON response format with typed deserialization.
///
/// ## Type Parameters
///
/// - `T`: The type to deserialize the JSON into. Must implement [`DeserializeOwned`].
#[derive(Debug, Clone, Copy)]
pub struct JsonFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for JsonFormat<T> {
    type Output = T;

    async fn parse(body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        serde_json::from_slice(&body).map_err(ValidationError::JsonParse)
    }

    fn content_type() -> &'static str {
        "application/json"
    }
}

/// Format for endpoints whose body carries nothing the caller needs.
///
/// Launch and stop actions succeed or fail on the status code alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl ResponseFormat for Discard {
    type Output = ();

    const EXPECTS_BODY: bool = false;

    async fn parse(_body: bytes::Bytes) -> Result<Self::Output, ValidationError> {
        Ok(())
    }

    fn content_type() -> &'static str {
        "*/*"
    }
}
