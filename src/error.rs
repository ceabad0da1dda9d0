//! Error types for the Crowdin API client.
//!
//! This module contains the error type used for configuration and
//! validation errors.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use crowdin_api::{ApiToken, ConfigError};
//!
//! let result = ApiToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API token cannot be empty.
    #[error("API token cannot be empty. Please provide a valid Crowdin personal access token.")]
    EmptyApiToken,

    /// Organization name is invalid.
    #[error("Invalid organization '{organization}'. Expected the Crowdin Enterprise organization name (e.g., 'acme').")]
    InvalidOrganization {
        /// The invalid organization that was provided.
        organization: String,
    },

    /// Base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.crowdin.com/api/v2').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Page size must be positive.
    #[error("Invalid page size {size}. Page size must be at least 1.")]
    InvalidPageSize {
        /// The rejected page size.
        size: u32,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
