//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated Crowdin personal access token.
///
/// The token is sent as a bearer credential on every request. Its value is
/// masked in debug output so it does not end up in logs.
///
/// # Example
///
/// ```rust
/// use crowdin_api::ApiToken;
///
/// let token = ApiToken::new("my-token").unwrap();
/// assert_eq!(token.as_ref(), "my-token");
/// assert_eq!(format!("{:?}", token), "ApiToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    /// Creates a new validated API token.
    ///
    /// Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ConfigError::EmptyApiToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for ApiToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiToken(*****)")
    }
}

/// A validated Crowdin Enterprise organization.
///
/// # Accepted Formats
///
/// - `acme` - used as-is
/// - `acme.crowdin.com` / `acme.api.crowdin.com` - reduced to `acme`
///
/// # Example
///
/// ```rust
/// use crowdin_api::Organization;
///
/// let org = Organization::new("acme.crowdin.com").unwrap();
/// assert_eq!(org.as_ref(), "acme");
/// assert_eq!(org.api_host(), "acme.api.crowdin.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Organization(String);

impl Organization {
    const SUFFIXES: [&'static str; 2] = [".api.crowdin.com", ".crowdin.com"];

    /// Creates a new validated organization.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOrganization`] if the name is empty or
    /// contains characters other than ASCII letters, digits and hyphens.
    pub fn new(organization: impl Into<String>) -> Result<Self, ConfigError> {
        let organization = organization.into().trim().to_lowercase();

        let name = Self::SUFFIXES
            .iter()
            .find_map(|suffix| organization.strip_suffix(suffix))
            .unwrap_or(&organization);

        if !Self::is_valid_name(name) {
            return Err(ConfigError::InvalidOrganization { organization });
        }

        Ok(Self(name.to_string()))
    }

    /// Returns the API host for this organization.
    #[must_use]
    pub fn api_host(&self) -> String {
        format!("{}.api.crowdin.com", self.0)
    }

    fn is_valid_name(name: &str) -> bool {
        if name.is_empty() || name.starts_with('-') || name.ends_with('-') {
            return false;
        }

        name.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }
}

impl AsRef<str> for Organization {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API base URL, e.g. `https://api.crowdin.com/api/v2`.
///
/// Trailing slashes are removed so that paths can be appended with a single `/`.
///
/// # Example
///
/// ```rust
/// use crowdin_api::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:8080/api/v2/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:8080/api/v2");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl(String);

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidBaseUrl { url: url.clone() });
        }

        if url[host_start..].starts_with([':', '/', '?', '#']) {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self(url))
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
