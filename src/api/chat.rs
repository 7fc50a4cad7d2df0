use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ax_state::AppState;
use crate::core::prompt::system_prompt_from_file;
use crate::error::ChatError;
use crate::models::completion::{CompletionMessage, CompletionRequest};
use crate::models::context::{ChatReply, ChatRequest};

pub const MODEL: &str = "llama-3.3-70b-versatile";
// 低温度，回答更稳定
pub const TEMPERATURE: f32 = 0.3;
pub const MAX_TOKENS: u32 = 512;

pub fn completion_request(system_prompt: String, message: &str) -> CompletionRequest {
    CompletionRequest {
        model: MODEL.to_string(),
        messages: vec![
            CompletionMessage::system(system_prompt),
            CompletionMessage::user(message),
        ],
        temperature: TEMPERATURE,
        max_tokens: MAX_TOKENS,
    }
}

/// 处理流程：校验消息 -> 读取 FAQ 生成系统提示词 -> 调用补全接口 -> 返回首个回复
#[instrument(skip_all)]
pub async fn chat(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatReply>, ChatError> {
    // 请求体解析失败归入 500，与其他异常一致
    let Json(payload) = payload.map_err(|e| ChatError::InvalidBody(e.body_text()))?;
    let message = payload.trimmed_message()?;

    info!("收到 chat 请求: message_len={}", message.len());

    let system_prompt = system_prompt_from_file(&state.faq_path).await?;
    let request = completion_request(system_prompt, message);
    let reply = state.client.complete(&request).await?;

    Ok(Json(ChatReply { reply }))
}
