//! Entry point tying configuration, transport and resources together.

use crate::clients::{HttpClient, HttpError};
use crate::config::CrowdinConfig;
use crate::rest::resources::ProjectsResource;

/// A configured Crowdin API client.
///
/// Owns one [`HttpClient`] and hands out resource wrappers that borrow it.
///
/// # Example
///
/// ```rust,ignore
/// use crowdin_api::{ApiToken, CrowdinClient, CrowdinConfig};
///
/// let config = CrowdinConfig::builder()
///     .token(ApiToken::new("my-token")?)
///     .build()?;
/// let client = CrowdinClient::new(&config)?;
///
/// let project = client.projects().get_project(42).await?;
/// ```
#[derive(Debug)]
pub struct CrowdinClient {
    http_client: HttpClient,
    page_size: u64,
}

// Verify CrowdinClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CrowdinClient>();
};

impl CrowdinClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: &CrowdinConfig) -> Result<Self, HttpError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            page_size: u64::from(config.page_size()),
        })
    }

    /// Returns the underlying HTTP client.
    #[must_use]
    pub const fn http_client(&self) -> &HttpClient {
        &self.http_client
    }

    /// Projects and file format settings endpoints.
    #[must_use]
    pub const fn projects(&self) -> ProjectsResource<&HttpClient> {
        ProjectsResource::new(&self.http_client, self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiToken, Organization};

    #[test]
    fn test_client_uses_configured_base_url_and_page_size() {
        let config = CrowdinConfig::builder()
            .token(ApiToken::new("secret").unwrap())
            .organization(Organization::new("acme").unwrap())
            .page_size(100)
            .build()
            .unwrap();

        let client = CrowdinClient::new(&config).unwrap();

        assert_eq!(
            client.http_client().base_url(),
            "https://acme.api.crowdin.com/api/v2"
        );
        assert_eq!(client.page_size, 100);
    }
}
