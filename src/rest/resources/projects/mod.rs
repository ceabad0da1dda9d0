//! Projects resource.
//!
//! Projects hold source files or strings and their translations. This
//! module wraps the project endpoints and the nested file format settings
//! endpoints of the Crowdin v2 API.
//!
//! Single-item operations return the response body unchanged. The two list
//! operations walk every page and return the concatenated `data` items.
//!
//! # Example
//!
//! ```rust,ignore
//! use crowdin_api::rest::resources::projects::{
//!     AddFileBasedProjectParams, ListProjectsParams, PatchRequest, ProjectsResource,
//! };
//!
//! let projects = ProjectsResource::new(&client, 25);
//!
//! let all = projects.list_projects(&ListProjectsParams::default()).await?;
//! println!("{} projects", all.len());
//!
//! let created = projects
//!     .add_file_based_project(&AddFileBasedProjectParams {
//!         name: "Docs".to_string(),
//!         source_language_id: "en".to_string(),
//!         ..Default::default()
//!     })
//!     .await?;
//!
//! let id = created["data"]["id"].as_u64().unwrap();
//! projects
//!     .edit_project(id, &[PatchRequest::replace("/description", "Product docs")])
//!     .await?;
//! ```

mod enums;
mod types;

use std::collections::HashMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::clients::{HttpMethod, Requester};
use crate::rest::pagination::{fetch_all, PageParams};
use crate::rest::resource::dispatch;
use crate::rest::{params, ResourceError, ResourcePath};

pub use enums::{
    HasManagerAccess, PatchOperation, ProjectLanguageAccessPolicy, ProjectTranslateDuplicates,
    ProjectType, ProjectVisibility,
};
pub use types::{
    AddFileBasedProjectParams, AddStringsBasedProjectParams, DocxFileFormatSettings,
    FileFormatSettings, ListProjectsParams, MediaWikiFileFormatSettings, NotificationSettings,
    OtherFileFormatSettings, PatchRequest, PropertyFileFormatSettings, QaCheckCategories,
    SpecificFileFormatSettings, TxtFileFormatSettings, UserId, XmlFileFormatSettings,
};

const CUSTOM_SEGMENTATIONS: &str = "custom-segmentations";

/// Endpoints under `projects`.
#[derive(Debug, Clone)]
pub struct ProjectsResource<R> {
    requester: R,
    page_size: u64,
}

impl<R: Requester> ProjectsResource<R> {
    /// `projects/{id}` and `projects/{id}/file-format-settings/{ffs_id}`.
    pub const PATH: ResourcePath = ResourcePath::new("projects", "file-format-settings");

    /// Creates the resource. `page_size` is the limit used by list
    /// operations when the caller gives none.
    pub const fn new(requester: R, page_size: u64) -> Self {
        Self {
            requester,
            page_size,
        }
    }

    /// Returns the underlying requester.
    pub const fn requester(&self) -> &R {
        &self.requester
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&B>,
    ) -> Result<Value, ResourceError> {
        dispatch(&self.requester, method, path, body).await
    }

    // ---------------------------------------------------------------------
    // Projects
    // ---------------------------------------------------------------------

    /// Lists every project matching the filters, walking all pages.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InvalidArgument`] for invalid pagination, before any
    /// request; otherwise whatever the dispatcher reports.
    pub async fn list_projects(
        &self,
        params: &ListProjectsParams,
    ) -> Result<Vec<Value>, ResourceError> {
        let filters = params::to_query(params)?;
        fetch_all(
            &self.requester,
            &Self::PATH.collection(),
            &filters,
            &params.pagination,
            self.page_size,
        )
        .await
    }

    /// Creates a project from a caller-built body.
    ///
    /// Top-level `null` entries are dropped before sending.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn add_project(&self, body: &Value) -> Result<Value, ResourceError> {
        self.send(HttpMethod::Post, &Self::PATH.collection(), Some(body))
            .await
    }

    /// Creates a files-based project.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn add_file_based_project(
        &self,
        params: &AddFileBasedProjectParams,
    ) -> Result<Value, ResourceError> {
        self.send(HttpMethod::Post, &Self::PATH.collection(), Some(params))
            .await
    }

    /// Creates a strings-based project.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn add_strings_based_project(
        &self,
        params: &AddStringsBasedProjectParams,
    ) -> Result<Value, ResourceError> {
        self.send(HttpMethod::Post, &Self::PATH.collection(), Some(params))
            .await
    }

    /// Fetches one project.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn get_project(&self, project_id: u64) -> Result<Value, ResourceError> {
        self.send::<Value>(HttpMethod::Get, &Self::PATH.build(project_id, None::<u64>), None)
            .await
    }

    /// Deletes one project.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn delete_project(&self, project_id: u64) -> Result<Value, ResourceError> {
        self.send::<Value>(
            HttpMethod::Delete,
            &Self::PATH.build(project_id, None::<u64>),
            None,
        )
        .await
    }

    /// Applies JSON-Patch operations to a project.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn edit_project(
        &self,
        project_id: u64,
        patches: &[PatchRequest],
    ) -> Result<Value, ResourceError> {
        self.send(
            HttpMethod::Patch,
            &Self::PATH.build(project_id, None::<u64>),
            Some(patches),
        )
        .await
    }

    // ---------------------------------------------------------------------
    // File format settings
    // ---------------------------------------------------------------------

    /// Lists every file format settings entry of a project, walking all
    /// pages.
    ///
    /// # Errors
    ///
    /// [`ResourceError::InvalidArgument`] for invalid pagination, before any
    /// request; otherwise whatever the dispatcher reports.
    pub async fn list_project_files(
        &self,
        project_id: u64,
        pagination: &PageParams,
    ) -> Result<Vec<Value>, ResourceError> {
        fetch_all(
            &self.requester,
            &Self::PATH.nested_collection(project_id),
            &HashMap::new(),
            pagination,
            self.page_size,
        )
        .await
    }

    /// Adds file format settings for `format` (e.g. `xml`, `docx`).
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn add_project_file(
        &self,
        project_id: u64,
        format: &str,
        settings: &FileFormatSettings,
    ) -> Result<Value, ResourceError> {
        let body = json!({
            "format": format,
            "settings": params::to_body(settings)?,
        });
        self.send(
            HttpMethod::Post,
            &Self::PATH.nested_collection(project_id),
            Some(&body),
        )
        .await
    }

    /// Fetches one file format settings entry.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn get_project_file(
        &self,
        project_id: u64,
        file_format_settings_id: u64,
    ) -> Result<Value, ResourceError> {
        self.send::<Value>(
            HttpMethod::Get,
            &Self::PATH.build(project_id, Some(file_format_settings_id)),
            None,
        )
        .await
    }

    /// Deletes one file format settings entry.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn delete_project_file(
        &self,
        project_id: u64,
        file_format_settings_id: u64,
    ) -> Result<Value, ResourceError> {
        self.send::<Value>(
            HttpMethod::Delete,
            &Self::PATH.build(project_id, Some(file_format_settings_id)),
            None,
        )
        .await
    }

    /// Applies JSON-Patch operations to a file format settings entry.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn edit_project_file(
        &self,
        project_id: u64,
        file_format_settings_id: u64,
        patches: &[PatchRequest],
    ) -> Result<Value, ResourceError> {
        self.send(
            HttpMethod::Patch,
            &Self::PATH.build(project_id, Some(file_format_settings_id)),
            Some(patches),
        )
        .await
    }

    /// Returns a download link for the custom segmentation (SRX) file.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn download_project_file_custom_segmentation(
        &self,
        project_id: u64,
        file_format_settings_id: u64,
    ) -> Result<Value, ResourceError> {
        self.send::<Value>(
            HttpMethod::Get,
            &Self::PATH.nested_action(project_id, file_format_settings_id, CUSTOM_SEGMENTATIONS),
            None,
        )
        .await
    }

    /// Resets the custom segmentation to the default rules.
    ///
    /// # Errors
    ///
    /// Passes dispatcher errors through unchanged.
    pub async fn reset_project_file_custom_segmentation(
        &self,
        project_id: u64,
        file_format_settings_id: u64,
    ) -> Result<Value, ResourceError> {
        self.send::<Value>(
            HttpMethod::Delete,
            &Self::PATH.nested_action(project_id, file_format_settings_id, CUSTOM_SEGMENTATIONS),
            None,
        )
        .await
    }
}
