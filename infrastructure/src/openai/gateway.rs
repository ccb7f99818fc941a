//! OpenAI chat completions gateway
//!
//! Stateless reqwest adapter behind the [`LlmGateway`] port. One `send` is
//! one POST to `{base_url}/chat/completions`; the full transcript travels
//! with every request, so the adapter keeps no session state.

use crate::credentials::ApiKey;
use crate::openai::protocol::{
    ApiErrorBody, ChatCompletionRequest, ChatCompletionResponse, WireMessage,
};
use async_trait::async_trait;
use reqwest::StatusCode;
use smartgpt_application::ports::llm_gateway::{GatewayError, LlmGateway};
use smartgpt_domain::{Message, Model};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Gateway to an OpenAI-compatible chat completions API
pub struct OpenAiGateway {
    client: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl OpenAiGateway {
    pub fn new(api_key: ApiKey) -> Result<Self, reqwest::Error> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the gateway at a different OpenAI-compatible endpoint
    pub fn with_base_url(
        api_key: ApiKey,
        base_url: impl Into<String>,
    ) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Replace the default request timeout
    pub fn with_timeout(self, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, ..self })
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn map_transport_error(e: reqwest::Error) -> GatewayError {
        if e.is_timeout() {
            GatewayError::Timeout
        } else if e.is_connect() {
            GatewayError::Connection(e.to_string())
        } else {
            GatewayError::Other(e.to_string())
        }
    }

    fn map_status_error(status: StatusCode, body: String) -> GatewayError {
        // The error envelope is best effort; fall back to the raw body
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.message)
            .unwrap_or(body);

        match status {
            StatusCode::TOO_MANY_REQUESTS => GatewayError::RateLimited,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                GatewayError::AuthenticationFailed
            }
            _ => GatewayError::Api {
                status: status.as_u16(),
                message,
            },
        }
    }
}

#[async_trait]
impl LlmGateway for OpenAiGateway {
    async fn send(
        &self,
        model: &Model,
        transcript: &[Message],
        temperature: f32,
    ) -> Result<Message, GatewayError> {
        let request = ChatCompletionRequest {
            model: model.as_str(),
            messages: transcript.iter().map(WireMessage::from).collect(),
            temperature,
        };
        debug!(
            model = model.as_str(),
            temperature,
            messages = transcript.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.completions_url())
            .bearer_auth(self.api_key.reveal())
            .json(&request)
            .send()
            .await
            .map_err(Self::map_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Chat completion request failed");
            return Err(Self::map_status_error(status, body));
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))?;

        if let Some(usage) = &completion.usage {
            debug!(total_tokens = usage.total_tokens, "Chat completion usage");
        }

        let reply = completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .filter(|content| !content.is_empty())
            .ok_or(GatewayError::EmptyResponse)?;

        Ok(Message::assistant(reply))
    }
}
