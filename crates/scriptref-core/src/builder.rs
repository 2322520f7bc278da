//! Per-version map building: concurrent resolution and aggregation.
//!
//! Each symbol's resolution is independent, so the batch fans out
//! across a bounded number of in-flight probes and aggregates with a
//! single collect-then-sort step. No mutable state is shared between
//! concurrent resolutions; the sort happens once every resolution for
//! the version has finished.

use std::path::Path;

use futures::{StreamExt, stream};
use tracing::{info, warn};

use crate::map::XrefMap;
use crate::metadata;
use crate::normalizer::normalize;
use crate::probe::PageProbe;
use crate::resolver::HrefResolver;
use crate::types::{Reference, SymbolEntry};
use crate::Result;

/// Counters for one version's batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Entries that produced a reference record.
    pub resolved: usize,
    /// Entries whose href fell back past the primary candidate.
    pub degraded: usize,
}

/// Resolve a batch of entries into reference records.
///
/// Fans out up to `concurrency` probes at a time; results are
/// collected, sorted by `uid` and deduplicated by [`XrefMap::new`].
pub async fn resolve_references<P: PageProbe>(
    resolver: &HrefResolver<P>,
    entries: Vec<SymbolEntry>,
    version: &str,
    concurrency: usize,
) -> (Vec<Reference>, BatchSummary) {
    let results: Vec<(Reference, bool)> = stream::iter(entries)
        .map(|entry| async move {
            let resolved = resolver
                .resolve(&entry.uid, &entry.comment_id, version)
                .await;
            let degraded = resolved.is_degraded();
            let reference = Reference {
                name: normalize(&entry.name),
                full_name: normalize(&entry.full_name),
                name_with_type: normalize(&entry.name_with_type),
                href: resolved.url,
                uid: entry.uid,
                comment_id: entry.comment_id,
            };
            (reference, degraded)
        })
        .buffer_unordered(concurrency.max(1))
        .collect()
        .await;

    let mut summary = BatchSummary::default();
    let mut references = Vec::with_capacity(results.len());
    for (reference, degraded) in results {
        summary.resolved += 1;
        if degraded {
            summary.degraded += 1;
        }
        references.push(reference);
    }
    (references, summary)
}

/// Build the cross-reference map for one version.
///
/// Returns `Ok(None)` when the version's metadata directory is absent
/// or contributes no entries; the version is then skipped entirely
/// rather than partially executed.
pub async fn build_version_map<P: PageProbe>(
    resolver: &HrefResolver<P>,
    metadata_dir: &Path,
    version: &str,
    concurrency: usize,
) -> Result<Option<XrefMap>> {
    if !metadata_dir.is_dir() {
        warn!(
            version,
            path = %metadata_dir.display(),
            "metadata directory missing; skipping version"
        );
        return Ok(None);
    }

    let entries = metadata::collect_entries(metadata_dir)?;
    if entries.is_empty() {
        warn!(version, "no symbol entries found; skipping version");
        return Ok(None);
    }

    let total = entries.len();
    let (references, summary) = resolve_references(resolver, entries, version, concurrency).await;
    info!(
        version,
        total,
        resolved = summary.resolved,
        degraded = summary.degraded,
        "version batch resolved"
    );

    Ok(Some(XrefMap::new(references)))
}
