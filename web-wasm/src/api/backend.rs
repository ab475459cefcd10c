//! Pitch Coach バックエンド呼び出し
//!
//! 1操作につき1リクエスト。タイムアウトは AbortController とタイマーの競争で実現する

use futures::future::{select, Either};
use gloo::net::http::{Request, RequestBuilder, Response};
use gloo::timers::future::TimeoutFuture;
use serde::de::DeserializeOwned;
use web_sys::{AbortController, File, FormData};

use pitch_coach_common::api::{
    self, ANALYZE_IDEA_PATH, ANALYZE_MARKET_PATH, ANALYZE_PITCH_PATH, DEFAULT_API_BASE_URL,
    PITCH_PERSONA_FIELD, PITCH_VIDEO_FIELD,
};
use pitch_coach_common::{
    ApiConfig, Error, IdeaAnalysisRequest, IdeaAnalysisResult, MarketInsightsRequest,
    MarketInsightsResult, Persona, PitchAnalysisResponse, Result,
};

/// ビルド時の環境変数 PITCH_COACH_API_URL（未指定なら localhost:8000）
pub fn api_config() -> ApiConfig {
    ApiConfig::with_base_url(option_env!("PITCH_COACH_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

/// アイデア解析（120秒タイムアウト）
pub async fn analyze_idea(request: &IdeaAnalysisRequest) -> Result<IdeaAnalysisResult> {
    let config = api_config();
    log::info!("analyze-idea: {} keywords", request.keywords.len());

    let controller = abort_controller()?;
    let request = builder(&config, ANALYZE_IDEA_PATH, &controller)
        .json(request)
        .map_err(network_error)?;

    let response = send(request, &controller, config.idea_timeout_secs).await?;
    read_json(response).await
}

/// 市場分析（タイムアウト指定なし）
pub async fn analyze_market(request: &MarketInsightsRequest) -> Result<MarketInsightsResult> {
    let config = api_config();
    log::info!("analyze-market: industry={}", request.industry);

    let controller = abort_controller()?;
    let request = builder(&config, ANALYZE_MARKET_PATH, &controller)
        .json(request)
        .map_err(network_error)?;

    let response = send(request, &controller, config.market_timeout_secs).await?;
    read_json(response).await
}

/// ピッチ動画解析（multipart、300秒タイムアウト）
pub async fn analyze_pitch(video: &File, persona: Persona) -> Result<PitchAnalysisResponse> {
    let config = api_config();
    log::info!(
        "analyze-pitch: {} ({:.1} MB) persona={}",
        video.name(),
        video.size() / 1_048_576.0,
        persona
    );

    let form = FormData::new().map_err(js_error)?;
    form.append_with_blob_and_filename(PITCH_VIDEO_FIELD, video, &video.name())
        .map_err(js_error)?;
    form.append_with_str(PITCH_PERSONA_FIELD, persona.id())
        .map_err(js_error)?;

    // Content-Type はブラウザが boundary 付きで設定する
    let controller = abort_controller()?;
    let request = builder(&config, ANALYZE_PITCH_PATH, &controller)
        .body(form)
        .map_err(network_error)?;

    let response = send(request, &controller, config.pitch_timeout_secs).await?;
    read_json(response).await
}

fn builder(config: &ApiConfig, path: &str, controller: &AbortController) -> RequestBuilder {
    Request::post(&config.url(path)).abort_signal(Some(&controller.signal()))
}

fn abort_controller() -> Result<AbortController> {
    AbortController::new().map_err(js_error)
}

async fn send(
    request: Request,
    controller: &AbortController,
    timeout_secs: Option<u64>,
) -> Result<Response> {
    let Some(secs) = timeout_secs else {
        return request.send().await.map_err(network_error);
    };

    let timer = TimeoutFuture::new((secs * 1000).min(u32::MAX as u64) as u32);
    match select(Box::pin(request.send()), Box::pin(timer)).await {
        Either::Left((response, _)) => response.map_err(network_error),
        Either::Right(_) => {
            controller.abort();
            log::warn!("request aborted after {}s", secs);
            Err(Error::Timeout(secs))
        }
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await.map_err(network_error)?;

    if !response.ok() {
        log::error!("backend returned {}", status);
        return Err(api::error_from_response(status, &body));
    }

    Ok(serde_json::from_str(&body)?)
}

fn network_error(e: gloo::net::Error) -> Error {
    Error::Network(e.to_string())
}

fn js_error(e: wasm_bindgen::JsValue) -> Error {
    Error::Network(format!("{:?}", e))
}
