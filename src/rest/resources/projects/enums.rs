//! Enumerated parameter values for the Projects resource.
//!
//! String-valued enums derive their wire form through serde renames.
//! Crowdin encodes a few settings as integers; those implement
//! [`Serialize`] by hand so they go out as numbers.

use serde::{Serialize, Serializer};

/// Whether a project is built from files or from strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    /// Files-based project (`0`).
    FilesBased,
    /// Strings-based project (`1`).
    StringsBased,
}

impl ProjectType {
    /// Returns the integer sent on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::FilesBased => 0,
            Self::StringsBased => 1,
        }
    }
}

impl Serialize for ProjectType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Who can see a project.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectVisibility {
    /// Anyone can join.
    Open,
    /// Invitation only.
    Private,
}

/// How translators get access to target languages.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProjectLanguageAccessPolicy {
    /// All project languages are open to every member.
    Open,
    /// Language access is granted by a manager.
    Moderate,
}

/// How duplicate source strings are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectTranslateDuplicates {
    /// Show all duplicates (`0`).
    Show,
    /// Hide duplicates, regular detection (`1`).
    HideRegularDetection,
    /// Show, but auto-translate duplicates (`2`).
    ShowAutoTranslate,
    /// Show within a version branch, regular detection (`3`).
    ShowWithinVersionBranchRegularDetection,
    /// Hide duplicates, strict detection (`4`).
    HideStrictDetection,
    /// Show within a version branch, strict detection (`5`).
    ShowWithinVersionBranchStrictDetection,
}

impl ProjectTranslateDuplicates {
    /// Returns the integer sent on the wire.
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Show => 0,
            Self::HideRegularDetection => 1,
            Self::ShowAutoTranslate => 2,
            Self::ShowWithinVersionBranchRegularDetection => 3,
            Self::HideStrictDetection => 4,
            Self::ShowWithinVersionBranchStrictDetection => 5,
        }
    }
}

impl Serialize for ProjectTranslateDuplicates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// List-filter flag: only projects the user manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HasManagerAccess {
    /// `0`
    No,
    /// `1`
    Yes,
}

impl From<bool> for HasManagerAccess {
    fn from(value: bool) -> Self {
        if value {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl Serialize for HasManagerAccess {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(match self {
            Self::No => 0,
            Self::Yes => 1,
        })
    }
}

/// JSON-Patch operation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum PatchOperation {
    Add,
    Replace,
    Test,
    Remove,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integer_enums_serialize_as_numbers() {
        assert_eq!(serde_json::to_value(ProjectType::FilesBased).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(ProjectType::StringsBased).unwrap(), json!(1));
        assert_eq!(
            serde_json::to_value(ProjectTranslateDuplicates::ShowWithinVersionBranchStrictDetection)
                .unwrap(),
            json!(5)
        );
        assert_eq!(serde_json::to_value(HasManagerAccess::Yes).unwrap(), json!(1));
        assert_eq!(
            serde_json::to_value(HasManagerAccess::from(false)).unwrap(),
            json!(0)
        );
    }

    #[test]
    fn test_string_enums_serialize_lowercase() {
        assert_eq!(
            serde_json::to_value(ProjectVisibility::Private).unwrap(),
            json!("private")
        );
        assert_eq!(
            serde_json::to_value(ProjectLanguageAccessPolicy::Moderate).unwrap(),
            json!("moderate")
        );
        assert_eq!(
            serde_json::to_value(PatchOperation::Replace).unwrap(),
            json!("replace")
        );
    }

    #[test]
    fn test_translate_duplicates_codes_are_sequential() {
        let all = [
            ProjectTranslateDuplicates::Show,
            ProjectTranslateDuplicates::HideRegularDetection,
            ProjectTranslateDuplicates::ShowAutoTranslate,
            ProjectTranslateDuplicates::ShowWithinVersionBranchRegularDetection,
            ProjectTranslateDuplicates::HideStrictDetection,
            ProjectTranslateDuplicates::ShowWithinVersionBranchStrictDetection,
        ];
        let codes: Vec<u8> = all.iter().map(|d| d.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }
}
