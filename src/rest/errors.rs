//! Error type for resource operations.
//!
//! Resource methods add exactly one local failure mode on top of the
//! transport: [`ResourceError::InvalidArgument`], raised before any network
//! call. Everything the server reports is passed through as
//! [`ResourceError::Http`] without being remapped.
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_api::rest::ResourceError;
//! use crowdin_api::HttpError;
//!
//! match projects.get_project(42).await {
//!     Ok(project) => println!("{}", project["data"]["name"]),
//!     Err(ResourceError::Http(HttpError::Response(e))) if e.code == 404 => {
//!         println!("no such project");
//!     }
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

use crate::clients::HttpError;
use thiserror::Error;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The caller supplied an unsupported combination of arguments.
    ///
    /// Always raised before any request is sent.
    #[error("Invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the arguments.
        reason: String,
    },

    /// Request parameters could not be serialized to JSON.
    #[error("Failed to serialize request parameters: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response did not have the shape the operation relies on.
    #[error("Unexpected response from {path}: {reason}")]
    UnexpectedResponse {
        /// The request path.
        path: String,
        /// What was missing or malformed.
        reason: &'static str,
    },

    /// An HTTP-level error, passed through unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns the HTTP status code if the server answered with an error.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}
