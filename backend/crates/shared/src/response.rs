//! API Response Envelope
//!
//! Every success body shares the shape `{success: true, message?, data?}`.
//! Error bodies are rendered by [`crate::error::app_error::AppError`].

use serde::Serialize;

/// 成功レスポンスの共通エンベロープ
///
/// ## Examples
/// ```rust
/// use kernel::response::ApiResponse;
///
/// let body = ApiResponse::ok(42).with_message("Answer computed");
/// assert!(body.success);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// データ付きの成功レスポンス
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// メッセージを設定
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl ApiResponse<()> {
    /// データなし・メッセージのみの成功レスポンス
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}
