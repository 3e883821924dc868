//! Link reachability probe
//!
//! The URL classifier treats network probing as an injectable capability:
//! the trait below is all the core depends on, and tests supply stubs
//! instead of touching the network. The real implementation sends a HEAD
//! request with a short timeout and a bounded redirect chain.

use std::time::Duration;

use anyhow::Result;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

/// Outcome of probing a single external URL
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The server answered with a non-error status
    Reachable,
    /// The server answered with a 4xx/5xx status
    HttpStatus(u16),
    /// The request timed out
    Timeout,
    /// Any other transport failure (DNS, TLS, connection refused, ...)
    TransportError,
}

/// Capability for checking whether an external URL responds
///
/// The validator works correctly with this stubbed out entirely; external
/// URLs are then format-checked but not probed.
pub trait LinkProbe {
    fn head(&self, url: &str) -> ProbeOutcome;
}

/// HEAD-request probe backed by a blocking reqwest client
pub struct HttpProbe {
    client: Client,
}

impl HttpProbe {
    /// Build a probe with the given per-request timeout. Redirects are
    /// followed up to 5 hops so moved-but-alive pages don't report broken.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(5))
            .build()?;
        Ok(Self { client })
    }
}

impl LinkProbe for HttpProbe {
    fn head(&self, url: &str) -> ProbeOutcome {
        match self.client.head(url).send() {
            Ok(response) => {
                let status = response.status();
                if status.is_client_error() || status.is_server_error() {
                    ProbeOutcome::HttpStatus(status.as_u16())
                } else {
                    ProbeOutcome::Reachable
                }
            }
            Err(err) if err.is_timeout() => {
                log::debug!("probe timeout for {}", url);
                ProbeOutcome::Timeout
            }
            Err(err) => {
                // Network conditions, not document defects
                log::debug!("probe transport failure for {}: {}", url, err);
                ProbeOutcome::TransportError
            }
        }
    }
}
