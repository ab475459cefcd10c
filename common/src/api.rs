//! バックエンドAPIの契約（エンドポイント・タイムアウト・エラー応答）

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

pub const ANALYZE_IDEA_PATH: &str = "/api/analyze-idea";
pub const ANALYZE_MARKET_PATH: &str = "/api/analyze-market";
pub const ANALYZE_PITCH_PATH: &str = "/api/analyze-pitch";
pub const HEALTH_PATH: &str = "/health";

/// multipartのフィールド名
pub const PITCH_VIDEO_FIELD: &str = "video";
pub const PITCH_PERSONA_FIELD: &str = "persona";

pub const IDEA_TIMEOUT_SECS: u64 = 120;
pub const PITCH_TIMEOUT_SECS: u64 = 300;

pub const IDEA_FAILURE_MESSAGE: &str = "Failed to analyze idea. Please try again.";
pub const MARKET_FAILURE_MESSAGE: &str = "Failed to analyze market insights. Please try again.";
pub const PITCH_FAILURE_MESSAGE: &str = "Failed to analyze pitch. Please try again.";

/// API接続設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
    pub idea_timeout_secs: Option<u64>,
    /// 市場分析は既定でタイムアウトなし
    pub market_timeout_secs: Option<u64>,
    pub pitch_timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            idea_timeout_secs: Some(IDEA_TIMEOUT_SECS),
            market_timeout_secs: None,
            pitch_timeout_secs: Some(PITCH_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn url(&self, path: &str) -> String {
        endpoint_url(&self.base_url, path)
    }
}

/// ベースURLとパスを結合（スラッシュの重複を避ける）
pub fn endpoint_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// 非2xxレスポンスをエラーに変換
///
/// ボディが `{"detail": "..."}` なら detail を保持する。
/// detail が文字列でない場合（検証エラーの配列など）や空文字列は保持しない
pub fn error_from_response(status: u16, body: &str) -> Error {
    let detail = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .filter(|detail| !detail.is_empty());
    Error::Api { status, detail }
}
