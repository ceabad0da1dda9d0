//! Crowdin API resources.
//!
//! Each resource wraps one group of endpoints and talks to the API only
//! through a [`Requester`](crate::clients::Requester), so any dispatcher can
//! back it.
//!
//! # Available Resources
//!
//! ## Projects
//!
//! Projects and their file format settings.
//!
//! ```rust,ignore
//! use crowdin_api::rest::resources::{ListProjectsParams, ProjectsResource};
//!
//! let projects = ProjectsResource::new(&client, 25);
//! let all = projects.list_projects(&ListProjectsParams::default()).await?;
//! ```

pub mod projects;

pub use projects::{ListProjectsParams, PatchRequest, ProjectsResource};
