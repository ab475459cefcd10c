//! UIコンポーネント

pub mod error_banner;
pub mod feedback_display;
pub mod header;
pub mod loading_panel;
pub mod persona_selector;
pub mod score_card;
pub mod segment_chart;
pub mod video_uploader;
