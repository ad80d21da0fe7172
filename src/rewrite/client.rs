// src/rewrite/client.rs
use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::future::Future;
use url::Url;

/// One prompt in, one message out. The pipeline depends only on this trait,
/// so tests run against a stub instead of a live endpoint.
pub trait ChatBackend {
    fn complete(&self, prompt: &str) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Chat-completions client for the rewrite stage. One shared `reqwest`
/// client, credentials injected at construction rather than read from a
/// process-wide global.
pub struct ChatClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f32,
}

impl ChatClient {
    pub fn new(
        http: Client,
        endpoint: Url,
        api_key: String,
        model: String,
        temperature: f32,
    ) -> Self {
        ChatClient {
            http,
            endpoint,
            api_key,
            model,
            temperature,
        }
    }
}

impl ChatBackend for ChatClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let req = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "system",
                content: prompt,
            }],
        };

        let resp = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&req)
            .send()
            .await
            .with_context(|| format!("POST {} failed", self.endpoint))?
            .error_for_status()
            .with_context(|| format!("non-success status from {}", self.endpoint))?
            .json::<ChatCompletionResponse>()
            .await
            .with_context(|| format!("decoding response from {}", self.endpoint))?;

        let Some(choice) = resp.choices.into_iter().next() else {
            bail!("response from {} contained no choices", self.endpoint);
        };

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_chat_completion_response() {
        let json = r#"{
            "id": "chatcmpl-123",
            "choices": [
                {
                    "index": 0,
                    "message": { "role": "assistant", "content": "Mo-Fr 09:00-17:00" },
                    "finish_reason": "stop"
                }
            ]
        }"#;
        let resp: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.choices[0].message.content, "Mo-Fr 09:00-17:00");
    }

    #[test]
    fn request_serializes_with_system_role() {
        let req = ChatCompletionRequest {
            model: "gpt-3.5-turbo",
            temperature: 0.7,
            messages: vec![ChatMessage {
                role: "system",
                content: "prompt",
            }],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
    }
}
