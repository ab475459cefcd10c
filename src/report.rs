//! 解析結果のJSON保存

use chrono::{DateTime, Local};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// 既定の保存ファイル名（例: idea-20261019-153000.json）
pub fn default_report_name(kind: &str, now: DateTime<Local>) -> String {
    format!("{}-{}.json", kind, now.format("%Y%m%d-%H%M%S"))
}

/// 保存先を決定
///
/// - 未指定: カレントディレクトリに既定名
/// - ディレクトリ: その中に既定名
/// - それ以外: 指定パスそのまま
pub fn resolve_report_path(output: Option<&Path>, kind: &str, now: DateTime<Local>) -> PathBuf {
    match output {
        None => PathBuf::from(default_report_name(kind, now)),
        Some(path) if path.is_dir() => path.join(default_report_name(kind, now)),
        Some(path) => path.to_path_buf(),
    }
}

pub fn save_report<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
