//! バックエンドクライアントの結合テスト
//!
//! 127.0.0.1:0 にaxumのスタブサーバーを立てて検証

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tempfile::tempdir;
use tokio::net::TcpListener;

use pitch_coach::client::BackendClient;
use pitch_coach::error::PitchCoachError;
use pitch_coach_common::api::IDEA_FAILURE_MESSAGE;
use pitch_coach_common::capture::INVALID_VIDEO_MESSAGE;
use pitch_coach_common::idea::EMPTY_IDEA_MESSAGE;
use pitch_coach_common::market::INCOMPLETE_FORM_MESSAGE;
use pitch_coach_common::{ApiConfig, Error, IdeaForm, MarketInsightsRequest, Persona};

/// スタブが受け取ったリクエスト
#[derive(Clone, Default)]
struct Received {
    calls: Arc<AtomicUsize>,
    bodies: Arc<Mutex<Vec<Value>>>,
}

impl Received {
    fn record(&self, body: Value) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.bodies.lock().unwrap().push(body);
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn last(&self) -> Value {
        self.bodies.lock().unwrap().last().cloned().unwrap()
    }
}

fn idea_response() -> Value {
    json!({
        "scores": {
            "novelty": 8.5,
            "technical_feasibility": 7.0,
            "market_overlap": 6.0,
            "patent_risk": 9.0,
            "implementation_complexity": 5.0,
            "ethical_regulatory": 8.0
        },
        "weighted_score": 76.5,
        "explanations": {"novelty": "Few direct analogues"},
        "patents": [{
            "patent_number": "US1234567B2",
            "title": "Adaptive tutoring system",
            "abstract": "A system that adapts lessons.",
            "filing_date": "2019-04-01",
            "status": "Granted",
            "link": "https://patents.google.com/patent/US1234567B2"
        }]
    })
}

async fn record_idea(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.record(body);
    Json(idea_response())
}

async fn record_market(State(received): State<Received>, Json(body): Json<Value>) -> Json<Value> {
    received.record(body);
    Json(json!({
        "customer_segments": [
            {"name": "K-12 schools", "description": "Public districts", "size": "Large", "key_characteristics": []}
        ],
        "competitors": {"direct": [{"name": "Khanmigo", "strengths": ["brand"], "weaknesses": []}]},
        "market_gaps": ["Rural schools"],
        "positioning_insights": "Lead with teacher time saved."
    }))
}

async fn record_pitch(State(received): State<Received>, mut multipart: Multipart) -> Json<Value> {
    let mut fields = serde_json::Map::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let data = field.bytes().await.unwrap();
        let value = match file_name {
            Some(file_name) => json!({
                "file_name": file_name,
                "content_type": content_type,
                "size": data.len(),
            }),
            None => json!(String::from_utf8_lossy(&data)),
        };
        fields.insert(name, value);
    }
    received.record(Value::Object(fields));

    Json(json!({
        "success": true,
        "analysis": {"raw_feedback": "## Strengths\n- Strong hook", "structured_feedback": {}},
        "transcript": "We help teachers.",
        "persona": "edtech"
    }))
}

async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn recording_backend() -> (BackendClient, Received) {
    let received = Received::default();
    let router = Router::new()
        .route("/api/analyze-idea", post(record_idea))
        .route("/api/analyze-market", post(record_market))
        .route("/api/analyze-pitch", post(record_pitch))
        .route("/health", get(|| async { Json(json!({"status": "healthy"})) }))
        .with_state(received.clone());
    let base_url = spawn_backend(router).await;
    let client = BackendClient::new(ApiConfig::with_base_url(base_url)).unwrap();
    (client, received)
}

fn backend_error(err: PitchCoachError) -> Error {
    match err {
        PitchCoachError::Backend(inner) => inner,
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_analyze_idea_posts_request_and_parses_result() {
    let (client, received) = recording_backend().await;
    let form = IdeaForm {
        description: "AI tutor for rural schools".into(),
        keywords: " ai, , education ".into(),
        industry: String::new(),
    };

    let result = client.analyze_idea(&form).await.unwrap();

    assert_eq!(result.weighted_score, 76.5);
    assert_eq!(result.scores.novelty, 8.5);
    assert_eq!(result.explanations.novelty, "Few direct analogues");
    assert_eq!(result.patents.len(), 1);
    assert_eq!(result.patents[0].abstract_text, "A system that adapts lessons.");

    // industry が空なら送らない
    assert_eq!(
        received.last(),
        json!({
            "idea_description": "AI tutor for rural schools",
            "keywords": ["ai", "education"]
        })
    );
}

#[tokio::test]
async fn test_empty_idea_is_rejected_without_request() {
    let (client, received) = recording_backend().await;
    let form = IdeaForm {
        description: "   \n".into(),
        ..Default::default()
    };

    let err = backend_error(client.analyze_idea(&form).await.unwrap_err());

    assert!(matches!(err, Error::Validation(_)));
    assert_eq!(err.user_message(IDEA_FAILURE_MESSAGE), EMPTY_IDEA_MESSAGE);
    assert_eq!(received.calls(), 0);
}

#[tokio::test]
async fn test_server_detail_is_surfaced() {
    let router = Router::new().route(
        "/api/analyze-idea",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"detail": "Patent search unavailable"})),
            )
                .into_response()
        }),
    );
    let base_url = spawn_backend(router).await;
    let client = BackendClient::new(ApiConfig::with_base_url(base_url)).unwrap();
    let form = IdeaForm {
        description: "Drone delivery".into(),
        ..Default::default()
    };

    let err = backend_error(client.analyze_idea(&form).await.unwrap_err());

    assert!(matches!(err, Error::Api { status: 500, .. }));
    assert_eq!(err.user_message(IDEA_FAILURE_MESSAGE), "Patent search unavailable");
}

#[tokio::test]
async fn test_non_string_detail_falls_back_to_generic_message() {
    let router = Router::new().route(
        "/api/analyze-idea",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({"detail": [{"loc": ["body"], "msg": "field required"}]})),
            )
                .into_response()
        }),
    );
    let base_url = spawn_backend(router).await;
    let client = BackendClient::new(ApiConfig::with_base_url(base_url)).unwrap();
    let form = IdeaForm {
        description: "Drone delivery".into(),
        ..Default::default()
    };

    let err = backend_error(client.analyze_idea(&form).await.unwrap_err());

    assert_eq!(err.user_message(IDEA_FAILURE_MESSAGE), IDEA_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_idea_timeout() {
    let router = Router::new().route(
        "/api/analyze-idea",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(json!({}))
        }),
    );
    let base_url = spawn_backend(router).await;
    let config = ApiConfig {
        idea_timeout_secs: Some(1),
        ..ApiConfig::with_base_url(base_url)
    };
    let client = BackendClient::new(config).unwrap();
    let form = IdeaForm {
        description: "Slow idea".into(),
        ..Default::default()
    };

    let err = backend_error(client.analyze_idea(&form).await.unwrap_err());

    assert!(matches!(err, Error::Timeout(1)));
    assert_eq!(err.user_message(IDEA_FAILURE_MESSAGE), IDEA_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_incomplete_market_form_is_rejected_without_request() {
    let (client, received) = recording_backend().await;
    let request = MarketInsightsRequest {
        startup_idea: "AI tutor".into(),
        ideal_customer: "Teachers".into(),
        problem_solving: String::new(),
        industry: "EdTech".into(),
        ..Default::default()
    };

    let err = backend_error(client.analyze_market(&request).await.unwrap_err());

    assert_eq!(err.to_string(), INCOMPLETE_FORM_MESSAGE);
    assert_eq!(received.calls(), 0);
}

#[tokio::test]
async fn test_analyze_market_tolerates_missing_fields() {
    let (client, received) = recording_backend().await;
    let request = MarketInsightsRequest {
        startup_idea: "AI tutor".into(),
        ideal_customer: "Teachers".into(),
        problem_solving: "Grading takes too long".into(),
        industry: "EdTech".into(),
        ..Default::default()
    };

    let result = client.analyze_market(&request).await.unwrap();

    assert_eq!(result.customer_segments[0].name, "K-12 schools");
    assert!(result.customer_personas.is_empty());
    assert_eq!(result.competitors.direct[0].name, "Khanmigo");
    assert!(result.competitors.adjacent.is_empty());
    assert_eq!(result.market_gaps, vec!["Rural schools".to_string()]);

    let body = received.last();
    assert_eq!(body["geographic_regions"], json!(""));
    assert_eq!(body["problem_solving"], json!("Grading takes too long"));
}

#[tokio::test]
async fn test_analyze_pitch_sends_video_and_persona() {
    let (client, received) = recording_backend().await;
    let dir = tempdir().expect("Failed to create temp dir");
    let video = dir.path().join("demo.mp4");
    std::fs::write(&video, vec![0u8; 2048]).unwrap();

    let response = client.analyze_pitch(&video, Persona::Edtech).await.unwrap();

    assert!(response.success);
    assert_eq!(response.transcript, "We help teachers.");
    assert_eq!(response.persona.as_deref(), Some("edtech"));
    assert_eq!(
        received.last(),
        json!({
            "video": {"file_name": "demo.mp4", "content_type": "video/mp4", "size": 2048},
            "persona": "edtech"
        })
    );
}

#[tokio::test]
async fn test_analyze_pitch_rejects_non_video_file() {
    let (client, received) = recording_backend().await;
    let dir = tempdir().expect("Failed to create temp dir");
    let slides = dir.path().join("deck.pdf");
    std::fs::write(&slides, b"%PDF").unwrap();

    let err = backend_error(client.analyze_pitch(&slides, Persona::Investor).await.unwrap_err());

    assert_eq!(err.to_string(), INVALID_VIDEO_MESSAGE);
    assert_eq!(received.calls(), 0);
}

#[tokio::test]
async fn test_analyze_pitch_missing_file() {
    let (client, received) = recording_backend().await;

    let err = client
        .analyze_pitch(std::path::Path::new("/nonexistent/pitch.mp4"), Persona::Investor)
        .await
        .unwrap_err();

    assert!(matches!(err, PitchCoachError::FileNotFound(_)));
    assert_eq!(received.calls(), 0);
}

#[tokio::test]
async fn test_health() {
    let (client, _) = recording_backend().await;

    let health = client.health().await.unwrap();

    assert_eq!(health.status, "healthy");
}
