//! Configuration types for the Crowdin API client.
//!
//! # Overview
//!
//! - [`CrowdinConfig`]: The main configuration struct holding all client settings
//! - [`CrowdinConfigBuilder`]: A builder for constructing [`CrowdinConfig`] instances
//! - [`ApiToken`]: A validated personal access token with masked debug output
//! - [`Organization`]: A validated Crowdin Enterprise organization
//! - [`BaseUrl`]: A validated API base URL override
//!
//! # Example
//!
//! ```rust
//! use crowdin_api::{CrowdinConfig, ApiToken, Organization};
//!
//! let config = CrowdinConfig::builder()
//!     .token(ApiToken::new("my-token").unwrap())
//!     .organization(Organization::new("acme").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://acme.api.crowdin.com/api/v2");
//! ```

mod newtypes;

pub use newtypes::{ApiToken, BaseUrl, Organization};

use crate::error::ConfigError;

/// Base URL of the crowdin.com API.
pub const DEFAULT_BASE_URL: &str = "https://api.crowdin.com/api/v2";

/// Number of items requested per page when aggregating list endpoints.
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Configuration for the Crowdin API client.
///
/// `CrowdinConfig` is `Clone`, `Send`, and `Sync`.
///
/// # Base URL Resolution
///
/// 1. An explicit [`BaseUrl`] wins.
/// 2. Otherwise, an [`Organization`] selects `https://{org}.api.crowdin.com/api/v2`.
/// 3. Otherwise, [`DEFAULT_BASE_URL`] is used.
#[derive(Clone, Debug)]
pub struct CrowdinConfig {
    token: ApiToken,
    organization: Option<Organization>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    page_size: u32,
}

impl CrowdinConfig {
    /// Creates a new builder for constructing a `CrowdinConfig`.
    #[must_use]
    pub fn builder() -> CrowdinConfigBuilder {
        CrowdinConfigBuilder::new()
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &ApiToken {
        &self.token
    }

    /// Returns the organization, if configured.
    #[must_use]
    pub const fn organization(&self) -> Option<&Organization> {
        self.organization.as_ref()
    }

    /// Returns the resolved API base URL.
    #[must_use]
    pub fn base_url(&self) -> String {
        if let Some(url) = &self.base_url {
            return url.as_ref().to_string();
        }

        self.organization.as_ref().map_or_else(
            || DEFAULT_BASE_URL.to_string(),
            |org| format!("https://{}/api/v2", org.api_host()),
        )
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the page size used for list aggregation.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }
}

// Verify CrowdinConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CrowdinConfig>();
};

/// Builder for constructing [`CrowdinConfig`] instances.
///
/// `token` is required. Defaults:
///
/// - `organization`: `None` (crowdin.com)
/// - `base_url`: `None`
/// - `user_agent_prefix`: `None`
/// - `page_size`: [`DEFAULT_PAGE_SIZE`]
///
/// # Example
///
/// ```rust
/// use crowdin_api::{CrowdinConfig, ApiToken, BaseUrl};
///
/// let config = CrowdinConfig::builder()
///     .token(ApiToken::new("token").unwrap())
///     .base_url(BaseUrl::new("http://localhost:8080/api/v2").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .page_size(100)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.page_size(), 100);
/// ```
#[derive(Debug, Default)]
pub struct CrowdinConfigBuilder {
    token: Option<ApiToken>,
    organization: Option<Organization>,
    base_url: Option<BaseUrl>,
    user_agent_prefix: Option<String>,
    page_size: Option<u32>,
}

impl CrowdinConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: ApiToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the Crowdin Enterprise organization.
    #[must_use]
    pub fn organization(mut self, organization: Organization) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Overrides the API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the page size used when aggregating list endpoints.
    #[must_use]
    pub const fn page_size(mut self, size: u32) -> Self {
        self.page_size = Some(size);
        self
    }

    /// Builds the [`CrowdinConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `token` is not set,
    /// and [`ConfigError::InvalidPageSize`] if the page size is zero.
    pub fn build(self) -> Result<CrowdinConfig, ConfigError> {
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        let page_size = self.page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        if page_size == 0 {
            return Err(ConfigError::InvalidPageSize { size: page_size });
        }

        Ok(CrowdinConfig {
            token,
            organization: self.organization,
            base_url: self.base_url,
            user_agent_prefix: self.user_agent_prefix,
            page_size,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token() -> ApiToken {
        ApiToken::new("token").unwrap()
    }

    #[test]
    fn test_builder_requires_token() {
        let result = CrowdinConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = CrowdinConfig::builder().token(token()).build().unwrap();

        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.page_size(), DEFAULT_PAGE_SIZE);
        assert!(config.organization().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_organization_selects_enterprise_base_url() {
        let config = CrowdinConfig::builder()
            .token(token())
            .organization(Organization::new("acme").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "https://acme.api.crowdin.com/api/v2");
    }

    #[test]
    fn test_explicit_base_url_wins_over_organization() {
        let config = CrowdinConfig::builder()
            .token(token())
            .organization(Organization::new("acme").unwrap())
            .base_url(BaseUrl::new("http://localhost:9000/api/v2").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.base_url(), "http://localhost:9000/api/v2");
    }

    #[test]
    fn test_builder_rejects_zero_page_size() {
        let result = CrowdinConfig::builder().token(token()).page_size(0).build();

        assert!(matches!(
            result,
            Err(ConfigError::InvalidPageSize { size: 0 })
        ));
    }

    #[test]
    fn test_config_is_clone_and_debug_hides_token() {
        let config = CrowdinConfig::builder()
            .token(ApiToken::new("very-secret").unwrap())
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.token(), config.token());

        let debug_str = format!("{:?}", config);
        assert!(debug_str.contains("CrowdinConfig"));
        assert!(!debug_str.contains("very-secret"));
    }
}
