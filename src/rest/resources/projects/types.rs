//! Request payload types for the Projects resource.
//!
//! All optional fields are skipped when absent, so a default-constructed
//! struct serializes to `{}` plus its required fields.

use serde::Serialize;
use serde_json::{Map, Value};

use super::enums::{
    HasManagerAccess, PatchOperation, ProjectLanguageAccessPolicy, ProjectTranslateDuplicates,
    ProjectType, ProjectVisibility,
};
use crate::rest::PageParams;

/// A user filter: numeric id or login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum UserId {
    /// Numeric user id.
    Id(u64),
    /// User login.
    Login(String),
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for UserId {
    fn from(login: &str) -> Self {
        Self::Login(login.to_string())
    }
}

impl From<String> for UserId {
    fn from(login: String) -> Self {
        Self::Login(login)
    }
}

/// Parameters for [`ProjectsResource::list_projects`](super::ProjectsResource::list_projects).
///
/// `pagination` is not serialized; it is turned into `offset`/`limit` by the
/// aggregation loop.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListProjectsParams {
    /// Where to start and how much to fetch per request.
    #[serde(skip)]
    pub pagination: PageParams,

    /// Only projects in this group.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<u64>,

    /// Only projects this user belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,

    /// Only projects the current user manages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_manager_access: Option<HasManagerAccess>,
}

/// Per-event email notification switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translator_new_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_new_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_language_completed: Option<bool>,
}

/// Which QA checks are enabled for a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QaCheckCategories {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spaces: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punctuation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_register: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_symbols: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrong_translation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spellcheck: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icu: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ftl: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<bool>,
}

/// Body for creating a files-based project.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFileBasedProjectParams {
    /// Project name.
    pub name: String,
    /// Source language code, e.g. `en`.
    pub source_language_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalize_placeholder: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub save_meta_info_in_source: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<NotificationSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ProjectVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_access_policy: Option<ProjectLanguageAccessPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_duplicates: Option<ProjectTranslateDuplicates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mt_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_substitution: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_translate_dialects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
}

/// Body for creating a strings-based project.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStringsBasedProjectParams {
    /// Project name.
    pub name: String,
    /// Source language code, e.g. `en`.
    pub source_language_id: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub project_type: Option<ProjectType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<ProjectVisibility>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_access_policy: Option<ProjectLanguageAccessPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_duplicates: Option<ProjectTranslateDuplicates>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_mt_allowed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_substitution: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_translate_dialects: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_downloads: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_strings_proofreaders_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_global_tm: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_untranslated_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_approved_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_context_process_hidden_strings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_context_pseudo_language_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_check_is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa_check_categories: Option<QaCheckCategories>,
    /// Free-form language mapping, sent as given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_mapping: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub glossary_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<NotificationSettings>,
}

/// One JSON-Patch operation, as used by the edit endpoints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatchRequest {
    pub op: PatchOperation,
    /// JSON pointer, e.g. `/name`.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl PatchRequest {
    /// `replace` operation.
    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOperation::Replace,
            path: path.into(),
            value: Some(value.into()),
        }
    }

    /// `add` operation.
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOperation::Add,
            path: path.into(),
            value: Some(value.into()),
        }
    }

    /// `test` operation.
    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            op: PatchOperation::Test,
            path: path.into(),
            value: Some(value.into()),
        }
    }

    /// `remove` operation; carries no value.
    pub fn remove(path: impl Into<String>) -> Self {
        Self {
            op: PatchOperation::Remove,
            path: path.into(),
            value: None,
        }
    }
}

// ---------------------------------------------------------------------------
// File format settings
// ---------------------------------------------------------------------------

/// Settings for Java `.properties` files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyFileFormatSettings {
    /// `0` to `3`, see the Crowdin docs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_quotes: Option<u8>,
    /// `0` or `1`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_special_characters: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

/// Settings for XML files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct XmlFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_attributes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translatable_elements: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

/// Settings for `.docx` files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocxFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clean_tags_aggressively: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden_text: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hyperlink_urls: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translate_hidden_rows_and_columns: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_notes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_hidden_slides: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_segmentation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

/// Settings for MediaWiki files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaWikiFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

/// Settings for plain text files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxtFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub srx_storage_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

/// Settings for any format that only supports an export pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
}

/// Settings with format-specific keys, sent as given next to the
/// export pattern.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificFileFormatSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_pattern: Option<String>,
    #[serde(flatten)]
    pub options: Map<String, Value>,
}

/// The `settings` object of a file format settings entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FileFormatSettings {
    Property(PropertyFileFormatSettings),
    Xml(XmlFileFormatSettings),
    Docx(DocxFileFormatSettings),
    MediaWiki(MediaWikiFileFormatSettings),
    Txt(TxtFileFormatSettings),
    Other(OtherFileFormatSettings),
    Specific(SpecificFileFormatSettings),
}

macro_rules! impl_from_settings {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for FileFormatSettings {
                fn from(settings: $ty) -> Self {
                    Self::$variant(settings)
                }
            }
        )*
    };
}

impl_from_settings! {
    Property => PropertyFileFormatSettings,
    Xml => XmlFileFormatSettings,
    Docx => DocxFileFormatSettings,
    MediaWiki => MediaWikiFileFormatSettings,
    Txt => TxtFileFormatSettings,
    Other => OtherFileFormatSettings,
    Specific => SpecificFileFormatSettings,
}
