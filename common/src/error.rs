//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 入力チェックエラー（リクエスト送信前）
    #[error("{0}")]
    Validation(String),

    /// バックエンドが非2xxを返した
    #[error("API error ({status}): {}", .detail.as_deref().unwrap_or("no detail"))]
    Api { status: u16, detail: Option<String> },

    #[error("Request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Network(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// カメラ/マイクの取得失敗
    #[error("Media device error: {0}")]
    Device(String),
}

impl Error {
    /// 画面に出すメッセージ
    ///
    /// 入力エラーとサーバーの `detail` はそのまま、それ以外は操作ごとの既定メッセージ
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Error::Validation(message) => message.clone(),
            Error::Api {
                detail: Some(detail),
                ..
            } => detail.clone(),
            Error::Device(_) => crate::capture::DEVICE_PERMISSION_MESSAGE.to_string(),
            _ => fallback.to_string(),
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_api() {
        let error = Error::Api {
            status: 500,
            detail: Some("Error analyzing idea: quota".to_string()),
        };
        assert_eq!(error.to_string(), "API error (500): Error analyzing idea: quota");

        let error = Error::Api {
            status: 502,
            detail: None,
        };
        assert_eq!(error.to_string(), "API error (502): no detail");
    }

    #[test]
    fn test_user_message_prefers_detail() {
        let error = Error::Api {
            status: 400,
            detail: Some("Persona must be one of: investor".to_string()),
        };
        assert_eq!(error.user_message("fallback"), "Persona must be one of: investor");
    }

    #[test]
    fn test_user_message_fallback() {
        let error = Error::Api {
            status: 500,
            detail: None,
        };
        assert_eq!(error.user_message("Failed."), "Failed.");
        assert_eq!(Error::Timeout(120).user_message("Failed."), "Failed.");
        assert_eq!(Error::Network("reset".into()).user_message("Failed."), "Failed.");
    }

    #[test]
    fn test_user_message_validation_and_device() {
        let error = Error::Validation("Please enter your startup idea description".into());
        assert_eq!(
            error.user_message("unused"),
            "Please enter your startup idea description"
        );

        let error = Error::Device("NotAllowedError".into());
        assert_eq!(
            error.user_message("unused"),
            "Unable to access camera/microphone. Please check permissions."
        );
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: Error = json_error.into();
        assert!(matches!(error, Error::Json(_)));
    }
}
