use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ChatError;

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    // 外层 None 表示字段缺失，Some(None) 表示显式传了 null
    #[serde(default, deserialize_with = "present")]
    pub message: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl ChatRequest {
    /// 去除首尾空白后的消息；缺失或空白返回 400，null 按非法请求体处理
    pub fn trimmed_message(&self) -> Result<&str, ChatError> {
        match &self.message {
            None => Err(ChatError::MissingMessage),
            Some(None) => Err(ChatError::InvalidBody(
                "message must be a string, got null".to_string(),
            )),
            Some(Some(m)) => match m.trim() {
                "" => Err(ChatError::MissingMessage),
                trimmed => Ok(trimmed),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
