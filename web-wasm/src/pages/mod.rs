//! ページコンポーネント

pub mod idea_analyzer;
pub mod landing;
pub mod market_insights;
pub mod pitch_practice;
