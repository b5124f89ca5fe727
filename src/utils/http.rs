// src/utils/http.rs

//! HTTP client utilities and the rendered-page fetch seam.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::Result;
use crate::models::HttpConfig;

/// Create a configured HTTP client.
pub fn create_client(config: &HttpConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch seam for pages whose data loads after initial navigation.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch a page and return its HTML.
    ///
    /// With `wait_for_async_load` set, the fetch holds a settle window
    /// between navigation and content capture so client-rendered data can
    /// populate.
    async fn fetch_rendered(&self, url: &str, wait_for_async_load: bool) -> Result<String>;
}

/// reqwest-backed page fetcher.
///
/// Each call is self-contained: navigate, wait out the settle window,
/// capture content. Nothing persists between calls beyond the pooled
/// client connections.
pub struct HttpPageFetcher {
    client: Client,
    render_wait: Duration,
}

impl HttpPageFetcher {
    pub fn new(client: Client, render_wait: Duration) -> Self {
        Self {
            client,
            render_wait,
        }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_rendered(&self, url: &str, wait_for_async_load: bool) -> Result<String> {
        if wait_for_async_load {
            // Initial navigation kicks off the page's client-side data
            // load; capture only after the settle window.
            self.client.get(url).send().await?.error_for_status()?;
            tokio::time::sleep(self.render_wait).await;
        }

        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.text().await?)
    }
}
