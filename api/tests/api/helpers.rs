use std::time::Duration;

use echo_api::{EchoApi, PollOptions, RequestView};
use serde_json::{json, Value};
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// long enough that only the immediate poll and manual refreshes run
pub const MANUAL_ONLY: Duration = Duration::from_secs(600);

pub struct TestApp {
    pub test_server: MockServer,
}

impl TestApp {
    pub fn api(&self) -> EchoApi {
        EchoApi::new(&self.test_server.uri(), Duration::from_secs(2))
            .expect("mock server uri should be a valid base url")
    }

    /// Replaces whatever `/echo` answered before.
    pub async fn respond_with(&self, template: ResponseTemplate) {
        self.test_server.reset().await;
        Mock::given(method("GET"))
            .and(path("/echo"))
            .respond_with(template)
            .mount(&self.test_server)
            .await;
    }

    pub fn mount_view(&self, interval: Duration) -> (RequestView, UnboundedReceiver<()>) {
        let (tx, rx) = unbounded_channel();
        let view = RequestView::mount(self.api(), PollOptions { interval }, move || {
            let _ = tx.send(());
        });
        (view, rx)
    }

    pub async fn received(&self) -> usize {
        self.test_server
            .received_requests()
            .await
            .map(|r| r.len())
            .unwrap_or(0)
    }
}

pub async fn spawn_test_app() -> TestApp {
    TestApp {
        test_server: MockServer::start().await,
    }
}

pub async fn next_update(updates: &mut UnboundedReceiver<()>) {
    tokio::time::timeout(Duration::from_secs(5), updates.recv())
        .await
        .expect("timed out waiting for a poll")
        .expect("poll task hung up");
}

pub fn example_records() -> Value {
    json!([
        {
            "id": 2,
            "timestamp": "2024-01-01T00:00:00Z",
            "data": "{\"a\":1}",
            "headers": {"X-A": ["1"], "X-B": ["2"], "X-C": ["3"]}
        },
        {
            "id": 1,
            "timestamp": "2023-12-31T23:59:59.5Z",
            "data": "test data",
            "headers": {"Content-Type": ["text/plain"], "X-Test-Header": ["test-value"]}
        }
    ])
}
