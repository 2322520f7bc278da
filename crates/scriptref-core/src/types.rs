//! Core data types shared across metadata parsing and map building.

use serde::{Deserialize, Serialize};

/// Symbol kind encoded in the leading tag of a doc-comment ID.
///
/// The tag decides which URL spelling the resolution engine tries
/// first: namespaces have no page of their own, enum-member fields use
/// a hyphen separator, everything else starts from the dot form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentKind {
    /// `N:` — namespace.
    Namespace,
    /// `T:` — class, struct, interface, enum or delegate.
    Type,
    /// `F:` — field, including enum members.
    Field,
    /// `P:` — property or indexer.
    Property,
    /// `M:` — method, constructor or operator.
    Method,
    /// `E:` — event.
    Event,
    /// Tag not recognized; resolved like the general case.
    Unknown,
}

impl CommentKind {
    /// Classify a doc-comment ID by its leading tag.
    #[must_use]
    pub fn from_comment_id(comment_id: &str) -> Self {
        match comment_id.as_bytes().first() {
            Some(b'N') if comment_id.starts_with("N:") => Self::Namespace,
            Some(b'T') if comment_id.starts_with("T:") => Self::Type,
            Some(b'F') if comment_id.starts_with("F:") => Self::Field,
            Some(b'P') if comment_id.starts_with("P:") => Self::Property,
            Some(b'M') if comment_id.starts_with("M:") => Self::Method,
            Some(b'E') if comment_id.starts_with("E:") => Self::Event,
            _ => Self::Unknown,
        }
    }
}

/// One documented member as emitted by the metadata generator.
///
/// Read once, never mutated. `uid` carries backtick-encoded generic
/// arity and parenthesized parameter lists; the display strings are
/// free-form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolEntry {
    pub uid: String,
    pub comment_id: String,
    pub name: String,
    pub full_name: String,
    pub name_with_type: String,
}

/// One row of the cross-reference map.
///
/// Field names match the consuming toolchain's schema exactly; the
/// final collection is sorted ascending by `uid` with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    pub uid: String,
    pub name: String,
    pub href: String,
    #[serde(rename = "commentId")]
    pub comment_id: String,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "nameWithType")]
    pub name_with_type: String,
}
