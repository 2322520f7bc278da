//! Generate command implementation.
//!
//! Builds one cross-reference map per requested documentation version.
//! Versions whose metadata directory is absent or empty are skipped;
//! the run only fails on I/O or configuration errors, never on an
//! individual symbol.

use std::path::Path;

use anyhow::Result;
use scriptref_core::{
    AlwaysExists, Config, HrefResolver, HttpProbe, PageProbe, build_version_map,
};
use tracing::info;

/// Build maps for `versions`, reading metadata from
/// `<metadata_root>/<version>` and writing
/// `<output_dir>/<version>/xrefmap.yml`.
pub async fn execute(
    versions: &[String],
    metadata_root: &Path,
    output_dir: &Path,
    base_url: Option<String>,
    concurrency: Option<usize>,
    offline: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(concurrency) = concurrency {
        config.concurrency = concurrency;
    }

    if offline {
        info!("offline mode: emitting primary candidates unverified");
        let resolver = HrefResolver::new(AlwaysExists, &config.base_url);
        return run(&resolver, &config, versions, metadata_root, output_dir).await;
    }

    let probe = HttpProbe::with_settings(
        config.probe_timeout(),
        config.max_retries,
        config.retry_delay(),
    )?;
    let resolver = HrefResolver::new(probe, &config.base_url);
    run(&resolver, &config, versions, metadata_root, output_dir).await
}

async fn run<P: PageProbe>(
    resolver: &HrefResolver<P>,
    config: &Config,
    versions: &[String],
    metadata_root: &Path,
    output_dir: &Path,
) -> Result<()> {
    for version in versions {
        let metadata_dir = metadata_root.join(version);
        match build_version_map(resolver, &metadata_dir, version, config.concurrency).await? {
            Some(map) => {
                let path = output_dir.join(version).join("xrefmap.yml");
                map.write_to(&path)?;
                println!(
                    "{version}: {} references -> {}",
                    map.references.len(),
                    path.display()
                );
            },
            None => {
                println!("{version}: skipped (no metadata)");
            },
        }
    }
    Ok(())
}
