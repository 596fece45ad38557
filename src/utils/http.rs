// src/utils/http.rs
use std::time::Duration;
use anyhow::{Result, Context};
use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::engine::{HttpResponse, Transport};
use crate::error::ProbeError;

/// Desktop browser identity sent with every probe
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/90.0.4430.93 Safari/537.36";

/// Total time allowed for one probe, connect through body
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Pooled HTTP client shared by every probe of a run
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    user_agent: String,
}

impl HttpClient {
    /// Create a new HTTP client
    pub fn new(user_agent: Option<String>, timeout_secs: Option<u64>) -> Result<Self> {
        let user_agent = user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let timeout = Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(&user_agent)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, user_agent })
    }

    /// Get the user agent
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, ProbeError> {
        debug!("GET {}", url);

        let response = self.client.get(url.clone()).send().await?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();
        // text() consumes the response, so the connection goes back to the pool on every path
        let body = response.text().await.map_err(|e| e.to_string());

        Ok(HttpResponse { status, final_url, body })
    }
}
