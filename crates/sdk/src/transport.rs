//! HTTP transport of the indexer and profile service requests.

use serde_json::Value;
use url::Url;

use crate::error::LeaderboardError;

/// JSON-over-HTTP transport.
///
/// Implementations return the parsed response body as is. No retries,
/// timeouts or status checks are layered on top: a non-2xx response
/// surfaces as a body of unexpected shape or as a JSON error.
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request and parses the response body as JSON.
    fn get_json(&self, url: Url) -> impl Future<Output = Result<Value, LeaderboardError>> + Send;

    /// Issues a POST request with a JSON body and parses the response body
    /// as JSON.
    fn post_json(
        &self,
        url: Url,
        body: Value,
    ) -> impl Future<Output = Result<Value, LeaderboardError>> + Send;
}

/// Default [`HttpTransport`] over a shared [`reqwest::Client`].
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self { Self { client } }
}

impl HttpTransport for ReqwestTransport {
    async fn get_json(&self, url: Url) -> Result<Value, LeaderboardError> {
        Ok(self.client.get(url).send().await?.json().await?)
    }

    async fn post_json(&self, url: Url, body: Value) -> Result<Value, LeaderboardError> {
        Ok(self
            .client
            .post(url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?)
    }
}
