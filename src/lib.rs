//! Pitch Coach CLI
//!
//! アイデア解析・市場分析・ピッチ動画解析をバックエンドに依頼するターミナルクライアント

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;
pub mod report;
