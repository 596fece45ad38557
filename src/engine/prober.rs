// src/engine/prober.rs
use std::sync::Arc;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::error::ProbeError;
use crate::target::Target;

/// What the engine keeps of a completed HTTP exchange.
/// The body has always been read to the end by the time this exists.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// Request URL after every redirect was followed
    pub final_url: String,
    /// Body text, or the reason it could not be read
    pub body: Result<String, String>,
}

impl HttpResponse {
    pub fn new(status: u16, final_url: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            final_url: final_url.into(),
            body: Ok(body.into()),
        }
    }
}

/// Network seam used by the engine. Implementations must be safe to share across tasks.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    /// Issue a single GET and drain the response
    async fn get(&self, url: &Url) -> Result<HttpResponse, ProbeError>;
}

/// Performs exactly one round-trip for one target
#[derive(Clone)]
pub struct Prober {
    transport: Arc<dyn Transport>,
}

impl Prober {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Resolve the target URL for this username and fetch it
    pub async fn probe(&self, target: &Target, username: &str) -> Result<HttpResponse, ProbeError> {
        let resolved = target.resolve_url(username);
        let url = Url::parse(&resolved)
            .map_err(|e| ProbeError::InvalidUrl(format!("{}: {}", resolved, e)))?;

        debug!("Probing {} at {}", target.name, url);
        self.transport.get(&url).await
    }
}
