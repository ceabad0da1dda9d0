//! HTTP client types for Crowdin API communication.
//!
//! This module provides the transport layer: the [`Requester`] dispatcher
//! trait used by every resource method, and [`HttpClient`], its
//! reqwest-backed implementation.
//!
//! # Overview
//!
//! - [`Requester`]: Dispatcher seam (`method`, `path`, query, body -> JSON)
//! - [`HttpClient`]: The async HTTP client for API communication
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A parsed response from the API
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PATCH, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_api::{ApiToken, CrowdinConfig};
//! use crowdin_api::clients::{HttpClient, HttpMethod, Requester};
//!
//! let config = CrowdinConfig::builder()
//!     .token(ApiToken::new("my-token")?)
//!     .build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let project = client.request(HttpMethod::Get, "projects/42", None, None).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. Every call is a single HTTP exchange; rate limiting (429) and server
//! errors are surfaced to the caller unchanged.

mod errors;
mod http_client;
mod http_request;
mod http_response;
mod requester;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
pub use requester::Requester;

#[cfg(test)]
pub(crate) use requester::mock;
