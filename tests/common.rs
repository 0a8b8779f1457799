//! Test helper utilities for robert integration tests
//!
//! Shared fixtures for mock chat completion servers.

// Allow dead code in test utilities - functions are used across different test files
#![allow(dead_code)]

use robert::{ModelType, Payload, RequestClient, Role};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const COMPLETIONS_PATH: &str = "/v1/chat/completions";

pub const TEST_KEY: &str = "sk-test-0001";

/// Response body in the documented chat completion shape.
pub fn success_body() -> Value {
    json!({
        "id": "x",
        "object": "chat.completion",
        "created": 1,
        "model": "m",
        "usage": {
            "prompt_tokens": 1,
            "completion_tokens": 2,
            "total_tokens": 3
        },
        "choices": [{
            "message": {"role": "assistant", "content": "hi"},
            "finish_reason": "stop",
            "index": 0
        }]
    })
}

/// Small conversation used as a request body.
pub fn sample_payload() -> Payload {
    let mut payload = Payload::new(ModelType::Turbo, 0.5, 0.0).expect("valid parameters");
    payload.add_message(Role::System, "You are terse.");
    payload.add_message(Role::User, "Say hi.");
    payload
}

pub fn endpoint_for(server: &MockServer) -> String {
    format!("{}{}", server.uri(), COMPLETIONS_PATH)
}

pub fn client_for(server: &MockServer) -> RequestClient {
    RequestClient::new(endpoint_for(server), TEST_KEY)
}

/// Mount a POST handler on the completions path answering with `template`.
pub async fn mount_completion(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path(COMPLETIONS_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}
