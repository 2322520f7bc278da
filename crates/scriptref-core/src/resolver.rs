//! Href resolution engine for ScriptReference page URLs.
//!
//! The documentation site's URL convention is not derivable from a
//! symbol identifier alone: enum members use hyphens, most members use
//! a hyphen only at the final segment boundary, constructors and
//! operators use synthetic suffixes, and namespaces have no page at
//! all. The engine therefore derives a ranked list of candidate
//! spellings ([`plan_candidates`]) and confirms them empirically with a
//! header-only existence probe, degrading to the enclosing type's page
//! and finally to the version's index page rather than emitting a
//! broken link.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

use crate::probe::PageProbe;
use crate::types::CommentKind;

/// Root namespaces the documentation site omits from its URL scheme.
const ROOT_NAMESPACES: [&str; 2] = ["UnityEngine.", "UnityEditor."];

const CTOR_MARKER: &str = ".#ctor";

/// Enclosing-generic-type arity markers are deleted outright.
static ENCLOSING_ARITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"``\d+").expect("enclosing arity pattern is valid"));
/// Own-arity markers collapse to an underscore form.
static OWN_ARITY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`(\d+)").expect("own arity pattern is valid"));
static PARAMETER_LIST: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("parameter list pattern is valid"));
static BRACE_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^}]*\}").expect("brace block pattern is valid"));

/// Ranked URL spellings for one symbol, before any validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidatePlan {
    /// Spelling tried first.
    pub primary: String,
    /// Same href with the final separator flipped, or the marker form
    /// truncated back to the enclosing type.
    pub alternate: Option<String>,
    /// Enclosing type's page, used only as a last resort.
    pub parent: Option<String>,
}

impl CandidatePlan {
    fn single(primary: String) -> Self {
        Self {
            primary,
            alternate: None,
            parent: None,
        }
    }
}

/// Which rung of the fallback ladder produced the final URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rung {
    /// The primary candidate was confirmed.
    Primary,
    /// The flipped/truncated spelling was confirmed.
    Alternate,
    /// Fell back to the enclosing type's page.
    Parent,
    /// Every probe rejected; the version's index page was used.
    Index,
}

/// Outcome of a ladder walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Absolute URL, always well-formed and never empty.
    pub url: String,
    /// The ladder rung that matched.
    pub rung: Rung,
}

impl Resolved {
    /// Whether resolution fell back past the primary candidate.
    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        !matches!(self.rung, Rung::Primary)
    }
}

/// Derive the ranked candidate hrefs for a symbol.
///
/// Pure function over `(uid, comment_id)`; the transform order is
/// fixed: operator-slug extraction first (it consumes the parenthesized
/// signature), generic-arity collapse second, parameter-list and brace
/// removal last. Namespaces short-circuit to the literal `index` href.
#[must_use]
pub fn plan_candidates(uid: &str, comment_id: &str) -> CandidatePlan {
    let kind = CommentKind::from_comment_id(comment_id);
    if kind == CommentKind::Namespace {
        return CandidatePlan::single("index".to_string());
    }
    if kind == CommentKind::Unknown {
        debug!(comment_id, "unrecognized comment-ID tag; using general case");
    }

    let mut id = strip_root_namespace(uid).to_string();

    let mut marker = false;
    if let Some(rewritten) = rewrite_operator(&id) {
        id = rewritten;
        marker = true;
    } else if id.contains(CTOR_MARKER) {
        id = id.replacen(CTOR_MARKER, "-ctor", 1);
        marker = true;
    }

    id = ENCLOSING_ARITY.replace_all(&id, "").into_owned();
    id = OWN_ARITY.replace_all(&id, "_$1").into_owned();
    id = PARAMETER_LIST.replace_all(&id, "").into_owned();
    id = BRACE_BLOCK.replace_all(&id, "").into_owned();
    // An unclosed parenthesis can survive the paired removal; nothing
    // after it belongs in a page name.
    if let Some(idx) = id.find(['(', '{']) {
        id.truncate(idx);
    }

    if marker {
        let alternate = truncate_at_marker(&id);
        return CandidatePlan {
            primary: id,
            alternate,
            parent: None,
        };
    }

    if kind == CommentKind::Field && last_segment_is_lowercase(&id) {
        // Enum-member-style fields hyphenate the final separator.
        if let Some(hyphenated) = flip_last_dot(&id) {
            let parent = parent_of(&id);
            return CandidatePlan {
                primary: hyphenated,
                alternate: Some(id),
                parent,
            };
        }
    }

    let alternate = flip_last_dot(&id);
    let parent = parent_of(&id);
    CandidatePlan {
        primary: id,
        alternate,
        parent,
    }
}

fn strip_root_namespace(uid: &str) -> &str {
    for prefix in ROOT_NAMESPACES {
        if let Some(rest) = uid.strip_prefix(prefix) {
            return rest;
        }
    }
    uid
}

/// Rewrite an operator-overload identifier to its `-operator_<slug>`
/// form, consuming the signature. Returns `None` when the identifier
/// holds no recognized operator segment.
fn rewrite_operator(id: &str) -> Option<String> {
    let pos = id.find(".op_")?;
    let tail = &id[pos + 1..];
    let name_end = tail.find(['(', '~']).unwrap_or(tail.len());
    let op_name = &tail[3..name_end];

    let slug = match op_name {
        "Equality" => "eq".to_string(),
        "Inequality" => "ne".to_string(),
        "LessThan" => "lt".to_string(),
        "GreaterThan" => "gt".to_string(),
        "Addition" => "add".to_string(),
        "Subtraction" => "subtract".to_string(),
        "Multiply" => "multiply".to_string(),
        "Division" => "divide".to_string(),
        "Implicit" | "Explicit" => conversion_slug(tail)?,
        other => {
            debug!(operator = other, "operator name not in slug table");
            return None;
        },
    };

    Some(format!("{}-operator_{slug}", &id[..pos]))
}

/// Slug for implicit/explicit conversion operators: the converted-to
/// type (the `~`-suffixed return type when present, else the sole
/// parameter type), with its namespace stripped.
fn conversion_slug(tail: &str) -> Option<String> {
    let target = if let Some(idx) = tail.rfind('~') {
        &tail[idx + 1..]
    } else {
        let open = tail.find('(')?;
        let inner = &tail[open + 1..];
        let end = inner.find([',', ')']).unwrap_or(inner.len());
        &inner[..end]
    };

    let bare = target.rsplit('.').next().unwrap_or(target).trim();
    if bare.is_empty() {
        None
    } else {
        Some(bare.to_string())
    }
}

/// Marker forms have no dotted equivalent; the alternate drops
/// everything from the synthetic suffix onward.
fn truncate_at_marker(id: &str) -> Option<String> {
    let idx = id.find("-operator").or_else(|| id.rfind("-ctor"))?;
    if idx == 0 {
        return None;
    }
    Some(id[..idx].to_string())
}

fn last_segment_is_lowercase(id: &str) -> bool {
    id.rsplit('.')
        .next()
        .and_then(|segment| segment.chars().next())
        .is_some_and(char::is_lowercase)
}

fn flip_last_dot(id: &str) -> Option<String> {
    let idx = id.rfind('.')?;
    Some(format!("{}-{}", &id[..idx], &id[idx + 1..]))
}

fn parent_of(id: &str) -> Option<String> {
    let idx = id.rfind('.')?;
    if idx == 0 {
        return None;
    }
    Some(id[..idx].to_string())
}

/// Resolves symbol identifiers to verified ScriptReference page URLs.
///
/// Generic over the [`PageProbe`] capability so tests (and offline
/// runs) can substitute canned existence results for real HEAD
/// requests.
pub struct HrefResolver<P> {
    probe: P,
    base_url: String,
}

impl<P: PageProbe> HrefResolver<P> {
    /// Create a resolver probing pages under `base_url`.
    pub fn new(probe: P, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { probe, base_url }
    }

    /// Absolute URL of a ScriptReference page for `version`.
    #[must_use]
    pub fn page_url(&self, version: &str, href: &str) -> String {
        format!(
            "{}/{version}/Documentation/ScriptReference/{href}.html",
            self.base_url
        )
    }

    /// The version's index page, the known-good final fallback.
    #[must_use]
    pub fn index_url(&self, version: &str) -> String {
        self.page_url(version, "index")
    }

    /// Resolve a symbol to the most likely documentation page URL.
    ///
    /// Walks the fallback ladder — primary spelling, flipped/truncated
    /// alternate, enclosing type's page — accepting the first candidate
    /// the probe confirms, and returns the version's index page when
    /// every probe rejects. Probe failures advance the ladder; this
    /// function never fails.
    pub async fn resolve(&self, uid: &str, comment_id: &str, version: &str) -> Resolved {
        let plan = plan_candidates(uid, comment_id);

        if plan.primary == "index" {
            // Namespace pages are not individually addressable.
            return Resolved {
                url: self.index_url(version),
                rung: Rung::Primary,
            };
        }

        let ladder = [
            (Some(&plan.primary), Rung::Primary),
            (plan.alternate.as_ref(), Rung::Alternate),
            (plan.parent.as_ref(), Rung::Parent),
        ];

        for (href, rung) in ladder {
            let Some(href) = href else { continue };
            let url = self.page_url(version, href);
            match self.probe.exists(&url).await {
                Ok(true) => {
                    debug!(%uid, %url, ?rung, "candidate page confirmed");
                    return Resolved { url, rung };
                },
                Ok(false) => {
                    debug!(%uid, %url, ?rung, "candidate page rejected");
                },
                Err(err) => {
                    warn!(%uid, %url, error = %err, "existence probe failed; advancing fallback ladder");
                },
            }
        }

        Resolved {
            url: self.index_url(version),
            rung: Rung::Index,
        }
    }
}
