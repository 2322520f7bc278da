//! # scriptref-core
//!
//! Core functionality for scriptref — a cross-reference map generator
//! for Unity ScriptReference documentation.
//!
//! The library turns the metadata a documentation generator emits
//! (symbol uids and structured doc-comment IDs) into a sorted map of
//! `{uid, name, href, commentId, fullName, nameWithType}` records
//! pointing at the public online reference site.
//!
//! ## Architecture
//!
//! - **Metadata ingestion**: recognizes and parses the generator's
//!   symbol documents out of a mixed directory.
//! - **Identifier normalization**: rewrites display names into plain
//!   human-readable labels.
//! - **Href resolution**: derives ranked candidate URL spellings per
//!   symbol and confirms them with header-only existence probes,
//!   degrading through a fallback ladder instead of failing.
//! - **Map building**: bounded concurrent fan-out per version, then a
//!   single collect-sort-dedupe aggregation step.
//!
//! ## Quick Start
//!
//! ```no_run
//! use scriptref_core::{build_version_map, Config, HrefResolver, HttpProbe};
//!
//! # async fn run() -> scriptref_core::Result<()> {
//! let config = Config::load()?;
//! let probe = HttpProbe::with_settings(
//!     config.probe_timeout(),
//!     config.max_retries,
//!     config.retry_delay(),
//! )?;
//! let resolver = HrefResolver::new(probe, &config.base_url);
//!
//! let map = build_version_map(
//!     &resolver,
//!     std::path::Path::new("metadata/2021.3"),
//!     "2021.3",
//!     config.concurrency,
//! )
//! .await?;
//!
//! if let Some(map) = map {
//!     map.write_to(std::path::Path::new("out/2021.3/xrefmap.yml"))?;
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Batch results are always best-effort: a symbol that cannot be
//! confirmed degrades to its enclosing type's page or the version's
//! index page, and one bad entry never aborts the others. Operations
//! that can genuinely fail return [`Result<T, Error>`].

/// Per-version map building and aggregation
pub mod builder;
/// Tool configuration loading
pub mod config;
/// Error types and result aliases
pub mod error;
/// Cross-reference map document and serialization
pub mod map;
/// Metadata document recognition and parsing
pub mod metadata;
/// Display-name normalization
pub mod normalizer;
/// Page-existence probing
pub mod probe;
/// Href resolution engine
pub mod resolver;
/// Core data types
pub mod types;

// Re-export commonly used types
pub use builder::{BatchSummary, build_version_map, resolve_references};
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use map::{XREFMAP_MARKER, XrefMap};
pub use metadata::{METADATA_MARKER, collect_entries, is_managed_reference, parse_document};
pub use normalizer::normalize;
pub use probe::{AlwaysExists, CannedProbe, HttpProbe, PageProbe};
pub use resolver::{CandidatePlan, HrefResolver, Resolved, Rung, plan_candidates};
pub use types::{CommentKind, Reference, SymbolEntry};
