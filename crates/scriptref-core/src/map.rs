//! Cross-reference map document: sorting invariant and serialization.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::types::Reference;
use crate::Result;

/// First-line marker of an emitted cross-reference map document.
pub const XREFMAP_MARKER: &str = "### YamlMime:XRefMap";

/// One version's cross-reference map.
///
/// The constructor enforces the map invariant: references sorted
/// strictly ascending by `uid`, duplicates dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XrefMap {
    pub sorted: bool,
    pub references: Vec<Reference>,
}

impl XrefMap {
    /// Build a map from unordered references, sorting by `uid` and
    /// deduplicating.
    #[must_use]
    pub fn new(mut references: Vec<Reference>) -> Self {
        references.sort_by(|a, b| a.uid.cmp(&b.uid));
        let before = references.len();
        references.dedup_by(|a, b| a.uid == b.uid);
        if references.len() < before {
            warn!(
                dropped = before - references.len(),
                "duplicate uids in reference collection"
            );
        }
        Self {
            sorted: true,
            references,
        }
    }

    /// Serialize to the marker line plus YAML body.
    pub fn to_yaml(&self) -> Result<String> {
        let body = serde_yaml::to_string(self)?;
        Ok(format!("{XREFMAP_MARKER}\n{body}"))
    }

    /// Write the document to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn reference(uid: &str) -> Reference {
        Reference {
            uid: uid.to_string(),
            name: uid.rsplit('.').next().unwrap_or(uid).to_string(),
            href: format!(
                "https://docs.unity3d.com/2021.3/Documentation/ScriptReference/{uid}.html"
            ),
            comment_id: format!("T:{uid}"),
            full_name: uid.to_string(),
            name_with_type: uid.to_string(),
        }
    }

    #[test]
    fn test_references_sorted_ascending_by_uid() {
        let map = XrefMap::new(vec![
            reference("UnityEngine.Vector3"),
            reference("UnityEngine.Camera"),
            reference("UnityEngine.Object"),
        ]);
        let uids: Vec<&str> = map.references.iter().map(|r| r.uid.as_str()).collect();
        assert_eq!(
            uids,
            vec![
                "UnityEngine.Camera",
                "UnityEngine.Object",
                "UnityEngine.Vector3"
            ]
        );
        assert!(map.sorted);
    }

    #[test]
    fn test_duplicate_uids_are_dropped() {
        let map = XrefMap::new(vec![
            reference("UnityEngine.Object"),
            reference("UnityEngine.Object"),
        ]);
        assert_eq!(map.references.len(), 1);
    }

    #[test]
    fn test_yaml_begins_with_marker_and_sorted_flag() {
        let map = XrefMap::new(vec![reference("UnityEngine.Object")]);
        let yaml = map.to_yaml().unwrap();
        assert!(yaml.starts_with("### YamlMime:XRefMap\n"));
        assert!(yaml.contains("sorted: true"));
        assert!(yaml.contains("uid: UnityEngine.Object"));
        assert!(yaml.contains("commentId: T:UnityEngine.Object"));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("2021.3").join("xrefmap.yml");
        let map = XrefMap::new(vec![reference("UnityEngine.Object")]);
        map.write_to(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.starts_with(XREFMAP_MARKER));
    }
}
