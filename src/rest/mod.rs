//! REST resource infrastructure for the Crowdin API.
//!
//! Every resource method is built from the same few pieces:
//!
//! - **[`ResourcePath`]**: canonical relative paths from identifiers
//! - **[`params`]**: optional-parameter filtering for bodies and query strings
//! - **[`PageParams`] / [`fetch_all`]**: page normalization and aggregation
//! - **[`ResourceError`]**: the single error type resource methods return
//!
//! Concrete resources live in [`resources`].
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_api::rest::resources::projects::{ListProjectsParams, ProjectsResource};
//! use crowdin_api::rest::PageParams;
//!
//! let projects = ProjectsResource::new(&client, 25);
//!
//! // Everything from the third page on
//! let rest = projects
//!     .list_projects(&ListProjectsParams {
//!         pagination: PageParams::page(3),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! // A single project, body returned as sent by the server
//! let project = projects.get_project(42).await?;
//! println!("{}", project["data"]["name"]);
//! ```

mod errors;
mod pagination;
mod path;
mod resource;

pub mod params;
pub mod resources;

pub use errors::ResourceError;
pub use pagination::{fetch_all, PageParams};
pub use path::ResourcePath;
