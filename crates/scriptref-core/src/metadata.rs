//! Ingestion of metadata documents produced by the doc generator.
//!
//! A metadata directory holds a mix of files; only those whose first
//! line carries the `ManagedReference` marker are symbol metadata. Each
//! recognized document contributes its `items` list. Entries missing a
//! `uid` or `commentId` cannot be classified and are skipped with a
//! warning; a malformed document is likewise skipped. Neither aborts
//! the batch.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::types::SymbolEntry;
use crate::{Error, Result};

/// First-line marker identifying a symbol metadata document.
pub const METADATA_MARKER: &str = "### YamlMime:ManagedReference";

#[derive(Debug, Deserialize)]
struct ManagedReferenceDoc {
    #[serde(default)]
    items: Vec<RawItem>,
}

#[derive(Debug, Deserialize)]
struct RawItem {
    #[serde(default)]
    uid: Option<String>,
    #[serde(default, rename = "commentId")]
    comment_id: Option<String>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default, rename = "fullName")]
    full_name: Option<String>,
    #[serde(default, rename = "nameWithType")]
    name_with_type: Option<String>,
}

/// Whether a document's first line carries the metadata marker.
#[must_use]
pub fn is_managed_reference(content: &str) -> bool {
    content
        .lines()
        .next()
        .is_some_and(|line| line.trim_end() == METADATA_MARKER)
}

/// Parse the symbol entries out of one metadata document.
///
/// Items without a `uid` or `commentId` are dropped with a warning.
pub fn parse_document(content: &str) -> Result<Vec<SymbolEntry>> {
    let doc: ManagedReferenceDoc = serde_yaml::from_str(content)
        .map_err(|err| Error::Parse(format!("metadata document: {err}")))?;

    let mut entries = Vec::with_capacity(doc.items.len());
    for item in doc.items {
        let (Some(uid), Some(comment_id)) = (item.uid, item.comment_id) else {
            warn!("symbol entry missing uid or commentId; skipping");
            continue;
        };
        entries.push(SymbolEntry {
            uid,
            comment_id,
            name: item.name.unwrap_or_default(),
            full_name: item.full_name.unwrap_or_default(),
            name_with_type: item.name_with_type.unwrap_or_default(),
        });
    }
    Ok(entries)
}

/// Collect symbol entries from every recognized document in `dir`.
///
/// Unrecognized files are ignored; unreadable or malformed documents
/// are skipped with a warning.
pub fn collect_entries(dir: &Path) -> Result<Vec<SymbolEntry>> {
    let mut entries = Vec::new();

    for dir_entry in fs::read_dir(dir)? {
        let path = dir_entry?.path();
        if !path.is_file() {
            continue;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "unreadable file in metadata directory");
                continue;
            },
        };

        if !is_managed_reference(&content) {
            debug!(path = %path.display(), "no metadata marker; ignoring file");
            continue;
        }

        match parse_document(&content) {
            Ok(mut parsed) => {
                debug!(path = %path.display(), count = parsed.len(), "parsed metadata document");
                entries.append(&mut parsed);
            },
            Err(err) => {
                warn!(path = %path.display(), error = %err, "malformed metadata document; skipping");
            },
        }
    }

    Ok(entries)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
### YamlMime:ManagedReference
items:
- uid: UnityEngine.Object
  commentId: T:UnityEngine.Object
  name: Object
  fullName: UnityEngine.Object
  nameWithType: Object
- uid: UnityEngine.Object.Instantiate(UnityEngine.Object)
  commentId: M:UnityEngine.Object.Instantiate(UnityEngine.Object)
  name: Instantiate(Object)
  fullName: UnityEngine.Object.Instantiate(UnityEngine.Object)
  nameWithType: Object.Instantiate(Object)
";

    #[test]
    fn test_marker_detection() {
        assert!(is_managed_reference(SAMPLE));
        assert!(is_managed_reference("### YamlMime:ManagedReference\r\nitems: []\n"));
        assert!(!is_managed_reference("### YamlMime:XRefMap\nsorted: true\n"));
        assert!(!is_managed_reference("just some file\n"));
        assert!(!is_managed_reference(""));
    }

    #[test]
    fn test_parse_document_extracts_entries() {
        let entries = parse_document(SAMPLE).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].uid, "UnityEngine.Object");
        assert_eq!(entries[0].comment_id, "T:UnityEngine.Object");
        assert_eq!(entries[1].name, "Instantiate(Object)");
    }

    #[test]
    fn test_entries_missing_uid_or_comment_id_are_skipped() {
        let content = "\
### YamlMime:ManagedReference
items:
- uid: UnityEngine.Object
  commentId: T:UnityEngine.Object
- name: orphaned
- uid: UnityEngine.NoComment
";
        let entries = parse_document(content).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].uid, "UnityEngine.Object");
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let err = parse_document("### YamlMime:ManagedReference\nitems: {not: [a, list")
            .unwrap_err();
        assert_eq!(err.category(), "parse");
    }

    #[test]
    fn test_collect_entries_mixes_and_ignores() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("UnityEngine.Object.yml"), SAMPLE).unwrap();
        fs::write(dir.path().join("toc.yml"), "- name: TOC\n").unwrap();
        fs::write(dir.path().join("readme.md"), "# not metadata\n").unwrap();
        fs::write(
            dir.path().join("broken.yml"),
            "### YamlMime:ManagedReference\nitems: {not: [a, list",
        )
        .unwrap();

        let entries = collect_entries(dir.path()).unwrap();
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn test_collect_entries_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let entries = collect_entries(dir.path()).unwrap();
        assert!(entries.is_empty());
    }
}
