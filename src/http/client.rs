use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tokio::time::sleep;

/// HTTP client with a fixed delay between requests
///
/// The backend is a small shared service; the delay keeps a burst of CLI
/// commands from hammering it.
pub struct RateLimitedClient {
    client: Client,
    delay: Duration,
    request_count: usize,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self {
            client,
            delay: Duration::from_millis(rate_limit_ms),
            request_count: 0,
        })
    }

    pub async fn get(&mut self, url: &str) -> Result<reqwest::Response> {
        self.throttle().await;
        self.client
            .get(url)
            .send()
            .await
            .context("Failed to send GET request")
    }

    pub async fn post_json<T: Serialize + ?Sized>(
        &mut self,
        url: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        self.throttle().await;
        self.client
            .post(url)
            .json(body)
            .send()
            .await
            .context("Failed to send POST request")
    }

    pub async fn put_json<T: Serialize + ?Sized>(
        &mut self,
        url: &str,
        body: &T,
    ) -> Result<reqwest::Response> {
        self.throttle().await;
        self.client
            .put(url)
            .json(body)
            .send()
            .await
            .context("Failed to send PUT request")
    }

    pub async fn delete(&mut self, url: &str) -> Result<reqwest::Response> {
        self.throttle().await;
        self.client
            .delete(url)
            .send()
            .await
            .context("Failed to send DELETE request")
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    /// No delay before the first request of a run.
    async fn throttle(&mut self) {
        if self.request_count > 0 {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }
}
