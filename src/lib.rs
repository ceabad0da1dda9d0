//! # Crowdin API Rust Client
//!
//! A Rust client for the Crowdin REST API v2, providing type-safe
//! configuration, an async HTTP transport and typed wrappers for the
//! Projects resource.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CrowdinConfig`] and [`CrowdinConfigBuilder`]
//! - Validated newtypes for the API token, organization and base URL
//! - An async HTTP client behind the [`Requester`] dispatcher trait
//! - Optional-parameter filtering: absent parameters never reach the wire
//! - Page normalization and full aggregation for list endpoints
//! - The Projects resource, including file format settings
//!
//! ## Quick Start
//!
//! ```rust
//! use crowdin_api::{ApiToken, CrowdinConfig};
//!
//! let config = CrowdinConfig::builder()
//!     .token(ApiToken::new("your-personal-access-token").unwrap())
//!     .page_size(100)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url(), "https://api.crowdin.com/api/v2");
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use crowdin_api::{ApiToken, CrowdinClient, CrowdinConfig, PageParams};
//! use crowdin_api::rest::resources::ListProjectsParams;
//!
//! let config = CrowdinConfig::builder()
//!     .token(ApiToken::new("your-personal-access-token")?)
//!     .build()?;
//! let client = CrowdinClient::new(&config)?;
//!
//! // Every project, across all pages
//! let projects = client.projects().list_projects(&ListProjectsParams::default()).await?;
//!
//! // File format settings of one project, starting at offset 50
//! let files = client
//!     .projects()
//!     .list_project_files(42, &PageParams::window(50, 25))
//!     .await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (`debug` per request and per fetched
//! page, `warn` for non-2xx responses) and never installs a subscriber.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **No hidden behavior**: No retries, no caching, errors are passed through
//! - **Async-first**: Designed for use with Tokio async runtime

mod client;

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use client::CrowdinClient;
pub use config::{ApiToken, BaseUrl, CrowdinConfig, CrowdinConfigBuilder, Organization};
pub use error::ConfigError;

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, Requester,
};

// Re-export resource infrastructure
pub use rest::resources::ProjectsResource;
pub use rest::{PageParams, ResourceError, ResourcePath};
