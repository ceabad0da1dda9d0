//! The dispatcher seam between resource methods and the HTTP transport.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::{HttpError, HttpMethod};

/// Performs one API call and returns the parsed JSON body.
///
/// Resource methods only ever talk to a `Requester`. [`HttpClient`](crate::clients::HttpClient)
/// is the production implementation; tests substitute an in-memory one.
///
/// Implementations must not retry, cache, or reinterpret failures: a non-2xx
/// answer comes back as [`HttpError::Response`] exactly as the server sent it.
#[allow(async_fn_in_trait)]
pub trait Requester {
    /// Sends `method path` with optional query parameters and JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] for invalid requests, transport failures,
    /// non-2xx responses and 2xx responses whose body is not JSON.
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<Value, HttpError>;
}

impl<R: Requester> Requester for &R {
    async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        query: Option<HashMap<String, String>>,
        body: Option<Value>,
    ) -> Result<Value, HttpError> {
        (**self).request(method, path, query, body).await
    }
}
