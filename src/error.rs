use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::infra::groq::CompletionError;

/// `/chat` 请求失败的全部情形，在 HTTP 边界统一映射状态码
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("No message provided")]
    MissingMessage,

    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    Faq(#[from] std::io::Error),

    #[error("{0}")]
    Completion(#[from] CompletionError),
}

impl ChatError {
    pub fn status(&self) -> StatusCode {
        match self {
            ChatError::MissingMessage => StatusCode::BAD_REQUEST,
            // 其余错误不区分瞬时/永久，一律 500
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ChatError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!("chat 请求失败: {}", self);
        }
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_message_is_client_error() {
        let err = ChatError::MissingMessage;
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "No message provided");
    }

    #[test]
    fn io_error_keeps_raw_text() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "faq.txt missing");
        let err = ChatError::from(io);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "faq.txt missing");
    }

    #[test]
    fn provider_error_is_server_error() {
        let err = ChatError::from(CompletionError::Provider {
            status: 401,
            body: "invalid api key".into(),
        });
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Error code: 401 - invalid api key");
    }
}
