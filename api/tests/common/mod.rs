#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use nutriai_api::{
    application::http::server::http_server::{router, state},
    args::{Args, LlmArgs, LogArgs, ServerArgs},
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path},
};

pub const TEST_KEY: &str = "sk-test";

/// An app wired to a stub completion boundary.
pub struct TestApp {
    pub upstream: MockServer,
}

impl AsyncTestContext for TestApp {
    async fn setup() -> Self {
        TestApp {
            upstream: MockServer::start().await,
        }
    }
}

impl TestApp {
    fn args(&self, api_key: Option<&str>, root_path: &str) -> Args {
        Args {
            server: ServerArgs {
                host: "127.0.0.1".to_string(),
                port: 0,
                root_path: root_path.to_string(),
                allowed_origins: vec!["http://localhost:3000".to_string()],
                metrics_enabled: false,
            },
            llm: LlmArgs {
                api_key: api_key.map(str::to_string),
                model: "gpt-4.1-mini".to_string(),
                base_url: self.upstream.uri(),
            },
            log: LogArgs {
                filter: "debug".to_string(),
                json: false,
            },
        }
    }

    pub fn server(&self) -> TestServer {
        self.server_with_key(Some(TEST_KEY))
    }

    pub fn server_with_key(&self, api_key: Option<&str>) -> TestServer {
        self.build_server(self.args(api_key, ""))
    }

    /// Serves the app under a `SERVER_ROOT_PATH` prefix.
    pub fn server_at(&self, root_path: &str) -> TestServer {
        self.build_server(self.args(Some(TEST_KEY), root_path))
    }

    fn build_server(&self, args: Args) -> TestServer {
        let app_state = state(Arc::new(args));
        let router = router(app_state).expect("router builds");
        TestServer::new(router).expect("test server starts")
    }

    /// Answers the next `expected_calls` completion requests with `reply`.
    pub async fn upstream_replies(&self, reply: ResponseTemplate, expected_calls: u64) {
        Mock::given(method("POST"))
            .and(path("/responses"))
            .and(header("authorization", format!("Bearer {TEST_KEY}").as_str()))
            .respond_with(reply)
            .expect(expected_calls)
            .mount(&self.upstream)
            .await;
    }

    pub async fn upstream_returns_text(&self, text: &str) {
        self.upstream_replies(
            ResponseTemplate::new(200).set_body_json(aggregate_reply(text)),
            1,
        )
        .await;
    }

    pub async fn received_requests(&self) -> Vec<Value> {
        self.upstream
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .map(|request| request.body_json::<Value>().expect("json body"))
            .collect()
    }
}

/// Reply envelope exposing the convenience aggregate text.
pub fn aggregate_reply(text: &str) -> Value {
    json!({
        "id": "resp_test",
        "object": "response",
        "output_text": text,
        "output": []
    })
}

/// Reply envelope carrying only typed output segments.
pub fn segmented_reply(parts: &[&str]) -> Value {
    let content: Vec<Value> = parts
        .iter()
        .map(|text| json!({ "type": "output_text", "text": text, "annotations": [] }))
        .collect();

    json!({
        "id": "resp_test",
        "object": "response",
        "output": [
            { "type": "reasoning", "id": "rs_1", "summary": [] },
            { "type": "message", "id": "msg_1", "role": "assistant", "content": content }
        ]
    })
}
