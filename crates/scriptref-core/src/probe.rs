//! Page-existence probing against the documentation site.
//!
//! The resolution engine only ever asks one question of the network:
//! does this page exist? The [`PageProbe`] trait captures that
//! capability so the engine can be driven by a real HTTP client, a
//! canned fake in tests, or nothing at all in offline runs.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::{Error, Result};

/// Existence check for a single absolute URL.
///
/// `Ok(true)` means the page exists, `Ok(false)` means it was rejected
/// (including after exhausting transient-error retries). Errors are
/// treated as rejections by the caller; they never abort a batch.
#[async_trait]
pub trait PageProbe: Send + Sync {
    /// Whether a page exists at `url`.
    async fn exists(&self, url: &str) -> Result<bool>;
}

/// HEAD-request prober with bounded retries for transient failures.
///
/// A `200` accepts the candidate; any other definitive status rejects
/// it. Server errors (5xx), timeouts and connection failures are
/// retried on the same URL with exponential backoff before counting as
/// a rejection, so throttling does not silently degrade the map.
pub struct HttpProbe {
    client: Client,
    max_retries: u32,
    retry_delay: Duration,
}

impl HttpProbe {
    /// Creates a prober with default settings (10s timeout, 2 retries,
    /// 250ms initial backoff).
    pub fn new() -> Result<Self> {
        Self::with_settings(Duration::from_secs(10), 2, Duration::from_millis(250))
    }

    /// Creates a prober with explicit timeout and retry settings.
    pub fn with_settings(
        timeout: Duration,
        max_retries: u32,
        retry_delay: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("scriptref/", env!("CARGO_PKG_VERSION")))
            // Only a direct 200 counts as an existing page; following
            // redirects would blur rejected spellings into accepted ones.
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(Error::Network)?;
        Ok(Self {
            client,
            max_retries,
            retry_delay,
        })
    }
}

#[async_trait]
impl PageProbe for HttpProbe {
    async fn exists(&self, url: &str) -> Result<bool> {
        let mut attempt = 0;
        let mut delay = self.retry_delay;

        loop {
            let transient = match self.client.head(url).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status == StatusCode::OK {
                        return Ok(true);
                    }
                    if !status.is_server_error() {
                        debug!(%url, %status, "page rejected by status");
                        return Ok(false);
                    }
                    debug!(%url, %status, "server error from probe");
                    true
                },
                Err(err) => {
                    let err = Error::Network(err);
                    if !err.is_recoverable() {
                        debug!(%url, error = %err, "non-recoverable probe failure");
                        return Ok(false);
                    }
                    true
                },
            };

            if transient && attempt < self.max_retries {
                attempt += 1;
                debug!(%url, attempt, "retrying probe after transient failure");
                tokio::time::sleep(delay).await;
                delay *= 2;
                continue;
            }

            warn!(%url, "probe retries exhausted; treating as rejection");
            return Ok(false);
        }
    }
}

/// Probe that accepts every URL. Used for offline runs, where the
/// primary candidate is emitted unverified.
pub struct AlwaysExists;

#[async_trait]
impl PageProbe for AlwaysExists {
    async fn exists(&self, _url: &str) -> Result<bool> {
        Ok(true)
    }
}

/// Behavior of a [`CannedProbe`] for URLs outside its accept set.
#[derive(Debug, Clone, Copy)]
enum MissBehavior {
    Reject,
    Fail,
}

/// Probe returning canned existence results, for tests.
pub struct CannedProbe {
    accepted: HashSet<String>,
    on_miss: MissBehavior,
}

impl CannedProbe {
    /// Accepts exactly the given URLs, rejecting everything else.
    #[must_use]
    pub fn accepting(urls: &[&str]) -> Self {
        Self {
            accepted: urls.iter().map(ToString::to_string).collect(),
            on_miss: MissBehavior::Reject,
        }
    }

    /// Rejects every URL.
    #[must_use]
    pub fn rejecting() -> Self {
        Self::accepting(&[])
    }

    /// Accepts the given URLs and fails (returns an error) for the
    /// rest, exercising the caller's error-advance path.
    #[must_use]
    pub fn failing_then_accepting(urls: &[&str]) -> Self {
        Self {
            accepted: urls.iter().map(ToString::to_string).collect(),
            on_miss: MissBehavior::Fail,
        }
    }
}

#[async_trait]
impl PageProbe for CannedProbe {
    async fn exists(&self, url: &str) -> Result<bool> {
        if self.accepted.contains(url) {
            return Ok(true);
        }
        match self.on_miss {
            MissBehavior::Reject => Ok(false),
            MissBehavior::Fail => Err(Error::Timeout(format!("canned failure for {url}"))),
        }
    }
}
