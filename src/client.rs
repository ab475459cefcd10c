//! バックエンドHTTPクライアント
//!
//! 入力検証はリクエスト送信前に行い、不正な入力では通信しない

use std::path::Path;
use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;

use pitch_coach_common::api::{
    error_from_response, ANALYZE_IDEA_PATH, ANALYZE_MARKET_PATH, ANALYZE_PITCH_PATH, HEALTH_PATH,
    PITCH_PERSONA_FIELD, PITCH_VIDEO_FIELD,
};
use pitch_coach_common::capture::INVALID_VIDEO_MESSAGE;
use pitch_coach_common::{
    ApiConfig, Error, HealthStatus, IdeaAnalysisResult, IdeaForm, MarketInsightsRequest,
    MarketInsightsResult, Persona, PitchAnalysisResponse,
};

use crate::error::{PitchCoachError, Result};

/// ヘルスチェックのタイムアウト
const HEALTH_TIMEOUT_SECS: u64 = 10;

pub struct BackendClient {
    http: Client,
    config: ApiConfig,
}

impl BackendClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("pitch-coach/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| PitchCoachError::Client(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// アイデア解析
    pub async fn analyze_idea(&self, form: &IdeaForm) -> Result<IdeaAnalysisResult> {
        let request = form.to_request()?;
        tracing::debug!(keywords = request.keywords.len(), "analyze-idea");

        let builder = self
            .http
            .post(self.config.url(ANALYZE_IDEA_PATH))
            .json(&request);
        self.send(builder, self.config.idea_timeout_secs).await
    }

    /// 市場分析
    pub async fn analyze_market(
        &self,
        request: &MarketInsightsRequest,
    ) -> Result<MarketInsightsResult> {
        request.validate()?;
        tracing::debug!(industry = %request.industry, "analyze-market");

        let builder = self
            .http
            .post(self.config.url(ANALYZE_MARKET_PATH))
            .json(request);
        self.send(builder, self.config.market_timeout_secs).await
    }

    /// ピッチ動画の解析（multipart: video + persona）
    pub async fn analyze_pitch(
        &self,
        video: &Path,
        persona: Persona,
    ) -> Result<PitchAnalysisResponse> {
        if !video.is_file() {
            return Err(PitchCoachError::FileNotFound(video.display().to_string()));
        }
        let mime = video_mime_for_path(video)
            .ok_or_else(|| Error::Validation(INVALID_VIDEO_MESSAGE.to_string()))?;

        let bytes = tokio::fs::read(video).await?;
        let file_name = video
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "pitch-video".to_string());
        tracing::debug!(file = %file_name, mime, size = bytes.len(), persona = persona.id(), "analyze-pitch");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime)
            .map_err(network_error)?;
        let form = Form::new()
            .part(PITCH_VIDEO_FIELD, part)
            .text(PITCH_PERSONA_FIELD, persona.id());

        let builder = self
            .http
            .post(self.config.url(ANALYZE_PITCH_PATH))
            .multipart(form);
        self.send(builder, self.config.pitch_timeout_secs).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        let builder = self.http.get(self.config.url(HEALTH_PATH));
        self.send(builder, Some(HEALTH_TIMEOUT_SECS)).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        timeout_secs: Option<u64>,
    ) -> Result<T> {
        let builder = match timeout_secs {
            Some(secs) => builder.timeout(Duration::from_secs(secs)),
            None => builder,
        };

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::Timeout(timeout_secs.unwrap_or_default())
            } else {
                network_error(e)
            }
        })?;

        let status = response.status();
        let body = response.text().await.map_err(network_error)?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "backend response");

        if !status.is_success() {
            return Err(error_from_response(status.as_u16(), &body).into());
        }
        let parsed = serde_json::from_str(&body).map_err(Error::from)?;
        Ok(parsed)
    }
}

/// 拡張子から動画のMIMEタイプを推定（動画でなければNone）
pub fn video_mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let mime = match ext.as_str() {
        "mp4" => "video/mp4",
        "m4v" => "video/x-m4v",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mpeg" | "mpg" => "video/mpeg",
        _ => return None,
    };
    Some(mime)
}

fn network_error(e: reqwest::Error) -> Error {
    Error::Network(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_mime_for_path() {
        assert_eq!(video_mime_for_path(Path::new("pitch.MP4")), Some("video/mp4"));
        assert_eq!(video_mime_for_path(Path::new("a/b/demo.mov")), Some("video/quicktime"));
        assert_eq!(video_mime_for_path(Path::new("recorded-pitch.webm")), Some("video/webm"));
        assert_eq!(video_mime_for_path(Path::new("take2.mkv")), Some("video/x-matroska"));
        assert_eq!(video_mime_for_path(Path::new("old.AVI")), Some("video/x-msvideo"));
        assert_eq!(video_mime_for_path(Path::new("clip.mpg")), Some("video/mpeg"));
        assert_eq!(video_mime_for_path(Path::new("slides.pdf")), None);
        assert_eq!(video_mime_for_path(Path::new("no_extension")), None);
    }
}
