//! バックエンドAPI

pub mod backend;

pub use backend::{analyze_idea, analyze_market, analyze_pitch};
