//! Basic chat example demonstrating a single request/response.
//!
//! This example shows how to:
//! - Load the client configuration from the environment
//! - Build a conversation payload
//! - Send it and read the decoded response
//!
//! # Running
//!
//! ```bash
//! export OPENAI_API_KEY="sk-..."
//! cargo run --example basic_chat
//! ```

use robert::{ModelType, Payload, RequestClient, Role};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let client = RequestClient::from_env()?;

    let mut payload = Payload::new(ModelType::Turbo, 0.7, 0.0)?;
    payload.add_message(Role::System, "You are a helpful assistant. Be concise.");
    payload.add_message(
        Role::User,
        "What is the capital of France? Answer in one sentence.",
    );

    println!("Sending request to {}...", client.endpoint());

    let record = client.send(&payload.serialize()?).await?;

    println!("\nResponse: {}", record.first_content().unwrap_or_default());
    println!(
        "\nToken usage: {} input + {} output = {} total",
        record.usage.prompt_tokens, record.usage.completion_tokens, record.usage.total_tokens
    );

    Ok(())
}
