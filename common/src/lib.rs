//! Pitch Coach Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod api;
pub mod capture;
pub mod error;
pub mod feedback;
pub mod idea;
pub mod market;
pub mod persona;
pub mod score;
pub mod types;

pub use api::ApiConfig;
pub use capture::{CaptureDevice, CapturePhase, CaptureSource, VideoCapture};
pub use error::{Error, Result};
pub use feedback::{classify_line, clean_markdown, format_feedback, FeedbackLine, Sentiment};
pub use idea::IdeaForm;
pub use market::{segment_slices, MarketField, SegmentSlice};
pub use persona::Persona;
pub use score::{ScoreDimension, ScoreTone};
pub use types::{
    CompetitorLandscape, CustomerPersona, CustomerSegment, DirectCompetitor, HealthStatus,
    IdeaAnalysisRequest, IdeaAnalysisResult, IdeaExplanations, IdeaScores, MarketInsightsRequest,
    MarketInsightsResult, Patent, PitchAnalysisResponse, PitchFeedback, RelatedCompetitor,
};
