//! Path building for REST resources.
//!
//! Every Crowdin resource is addressed the same way: a root collection
//! (`projects`), an item inside it (`projects/{id}`), and optionally one level
//! of nested items (`projects/{id}/file-format-settings/{ffs_id}`).
//! [`ResourcePath`] captures the two segment names once, as a `const`, and
//! derives every concrete path from identifiers.
//!
//! Identifiers are interpolated as-is. No validation is performed; a bad id
//! simply produces a path the server will reject.
//!
//! # Example
//!
//! ```rust
//! use crowdin_api::rest::ResourcePath;
//!
//! const PROJECTS: ResourcePath = ResourcePath::new("projects", "file-format-settings");
//!
//! assert_eq!(PROJECTS.build(42, None::<u64>), "projects/42");
//! assert_eq!(PROJECTS.build(42, Some(7)), "projects/42/file-format-settings/7");
//! ```

use std::fmt::Display;

/// The segment names of a resource and its nested collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// Root collection segment, e.g. `projects`.
    pub root: &'static str,
    /// Nested collection segment, e.g. `file-format-settings`.
    pub nested: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    #[must_use]
    pub const fn new(root: &'static str, nested: &'static str) -> Self {
        Self { root, nested }
    }

    /// Builds an item path, nested when `sub_id` is present.
    ///
    /// - `build(42, None)` -> `projects/42`
    /// - `build(42, Some(7))` -> `projects/42/file-format-settings/7`
    #[must_use]
    pub fn build<I: Display, S: Display>(&self, root_id: I, sub_id: Option<S>) -> String {
        match sub_id {
            Some(sub_id) => format!("{}/{root_id}/{}/{sub_id}", self.root, self.nested),
            None => format!("{}/{root_id}", self.root),
        }
    }

    /// The root collection path, e.g. `projects`.
    #[must_use]
    pub fn collection(&self) -> String {
        self.root.to_string()
    }

    /// The nested collection of one root item, e.g.
    /// `projects/42/file-format-settings`.
    #[must_use]
    pub fn nested_collection<I: Display>(&self, root_id: I) -> String {
        format!("{}/{root_id}/{}", self.root, self.nested)
    }

    /// An action endpoint below a nested item, e.g.
    /// `projects/42/file-format-settings/7/custom-segmentations`.
    #[must_use]
    pub fn nested_action<I: Display, S: Display>(
        &self,
        root_id: I,
        sub_id: S,
        action: &str,
    ) -> String {
        format!("{}/{action}", self.build(root_id, Some(sub_id)))
    }
}

// Verify types are Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ResourcePath>();
};

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECTS: ResourcePath = ResourcePath::new("projects", "file-format-settings");

    #[test]
    fn test_build_item_path() {
        assert_eq!(PROJECTS.build(42, None::<u64>), "projects/42");
    }

    #[test]
    fn test_build_nested_item_path() {
        assert_eq!(
            PROJECTS.build(42, Some(7)),
            "projects/42/file-format-settings/7"
        );
    }

    #[test]
    fn test_build_does_not_validate_ids() {
        assert_eq!(PROJECTS.build("", None::<u64>), "projects/");
        assert_eq!(PROJECTS.build("a b", Some("x")), "projects/a b/file-format-settings/x");
    }

    #[test]
    fn test_collection_paths() {
        assert_eq!(PROJECTS.collection(), "projects");
        assert_eq!(
            PROJECTS.nested_collection(42),
            "projects/42/file-format-settings"
        );
    }

    #[test]
    fn test_nested_action_path() {
        assert_eq!(
            PROJECTS.nested_action(42, 7, "custom-segmentations"),
            "projects/42/file-format-settings/7/custom-segmentations"
        );
    }
}
