//! Resolve command implementation.
//!
//! Debugging aid: walk the fallback ladder for a single symbol and
//! report which spelling matched.

use anyhow::Result;
use scriptref_core::{Config, HrefResolver, HttpProbe, Rung};

/// Resolve one uid and print the confirmed URL.
pub async fn execute(
    uid: &str,
    comment_id: Option<String>,
    docs_version: &str,
    base_url: Option<String>,
    json: bool,
) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    let comment_id = comment_id.unwrap_or_else(|| format!("T:{uid}"));

    let probe = HttpProbe::with_settings(
        config.probe_timeout(),
        config.max_retries,
        config.retry_delay(),
    )?;
    let resolver = HrefResolver::new(probe, &config.base_url);
    let resolved = resolver.resolve(uid, &comment_id, docs_version).await;

    let rung = rung_label(resolved.rung);
    if json {
        let payload = serde_json::json!({
            "uid": uid,
            "commentId": comment_id,
            "href": resolved.url,
            "rung": rung,
            "degraded": resolved.is_degraded(),
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{}", resolved.url);
        if resolved.is_degraded() {
            eprintln!("note: degraded to {rung} page");
        }
    }
    Ok(())
}

const fn rung_label(rung: Rung) -> &'static str {
    match rung {
        Rung::Primary => "primary",
        Rung::Alternate => "alternate",
        Rung::Parent => "parent",
        Rung::Index => "index",
    }
}
