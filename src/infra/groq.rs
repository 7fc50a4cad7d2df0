use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::infra::config::Config;
use crate::models::completion::CompletionRequest;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("Error code: {status} - {body}")]
    Provider { status: u16, body: String },

    #[error("failed to decode completion response: {0}")]
    Decode(String),

    #[error("completion response contained no reply")]
    EmptyReply,
}

/// 大模型补全服务的抽象，进程入口构造后注入到 AppState，测试时可替换为假实现
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// 发起一次补全调用，返回第一个候选回复的文本
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError>;
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Groq 的 OpenAI 兼容 chat completions 接口
pub struct GroqClient {
    http: Client,
    api_key: String,
    endpoint: String,
}

impl GroqClient {
    pub fn new(config: &Config) -> Result<Self, CompletionError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.completion_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            api_key: config.api_key.clone(),
            endpoint: format!("{}/chat/completions", config.groq_base_url),
        })
    }
}

#[async_trait]
impl CompletionClient for GroqClient {
    #[instrument(skip_all, fields(model = %request.model))]
    async fn complete(&self, request: &CompletionRequest) -> Result<String, CompletionError> {
        let resp = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_else(|_| "<no body>".to_string());
            return Err(CompletionError::Provider { status: status.as_u16(), body });
        }

        let data: ChatCompletionResponse = resp
            .json()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;

        let reply = data
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or(CompletionError::EmptyReply)?;

        debug!("补全完成: reply_len={}", reply.len());
        Ok(reply)
    }
}
