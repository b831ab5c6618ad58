use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;
use url::Url;

use crate::{error::LeaderboardError, transport::HttpTransport};

/// Request seen by [`StubHttp`].
#[derive(Clone, Debug, PartialEq)]
pub enum StubRequest {
    Get(Url),
    Post(Url, Value),
}

#[derive(Default)]
struct State {
    get_response: Option<Value>,
    post_response: Option<Value>,
    requests: Vec<StubRequest>,
}

/// [`HttpTransport`] returning fixed responses and recording requests.
///
/// Clones share the same state, so a clone kept by the test observes the
/// requests issued by the SDK. Requests without a stubbed response fail.
#[derive(Clone, Default)]
pub struct StubHttp {
    state: Arc<Mutex<State>>,
}

impl StubHttp {
    pub fn new() -> Self { Self::default() }

    /// Responds to every GET with `response`.
    pub fn with_get(self, response: Value) -> Self {
        self.state().get_response = Some(response);
        self
    }

    /// Responds to every POST with `response`.
    pub fn with_post(self, response: Value) -> Self {
        self.state().post_response = Some(response);
        self
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<StubRequest> { self.state().requests.clone() }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HttpTransport for StubHttp {
    async fn get_json(&self, url: Url) -> Result<Value, LeaderboardError> {
        let mut state = self.state();
        state.requests.push(StubRequest::Get(url.clone()));
        state
            .get_response
            .clone()
            .ok_or_else(|| LeaderboardError::InvalidArgument(format!("no stubbed GET {url}")))
    }

    async fn post_json(&self, url: Url, body: Value) -> Result<Value, LeaderboardError> {
        let mut state = self.state();
        state
            .requests
            .push(StubRequest::Post(url.clone(), body));
        state
            .post_response
            .clone()
            .ok_or_else(|| LeaderboardError::InvalidArgument(format!("no stubbed POST {url}")))
    }
}
