use crate::error::{PitchCoachError, Result};
use pitch_coach_common::api::{DEFAULT_API_BASE_URL, IDEA_TIMEOUT_SECS, PITCH_TIMEOUT_SECS};
use pitch_coach_common::{ApiConfig, Persona};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// バックエンドURLを上書きする環境変数
pub const API_URL_ENV: &str = "PITCH_COACH_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_base_url: String,
    pub idea_timeout_seconds: u64,
    /// 未指定ならタイムアウトなし
    pub market_timeout_seconds: Option<u64>,
    pub pitch_timeout_seconds: u64,
    pub default_persona: Persona,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            idea_timeout_seconds: IDEA_TIMEOUT_SECS,
            market_timeout_seconds: None,
            pitch_timeout_seconds: PITCH_TIMEOUT_SECS,
            default_persona: Persona::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 指定パスから読み込む（ファイルが無ければ既定値）
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// 壊れた設定ファイルは警告して既定値で読み込む（config コマンドで上書き修復するため）
    pub fn load_or_default() -> Result<Self> {
        Ok(Self::load_or_default_from(&Self::config_path()?))
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        Self::load_from(path).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "設定ファイルを読み込めないため既定値を使用します");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PitchCoachError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("pitch-coach").join("config.json"))
    }

    /// 接続先URLを決定（--api-url > 環境変数 > 設定ファイル）
    pub fn resolve_api_url(&self, flag: Option<&str>, env: Option<&str>) -> String {
        flag.or(env)
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(&self.api_base_url)
            .to_string()
    }

    pub fn api_config(&self, flag: Option<&str>) -> ApiConfig {
        let env = std::env::var(API_URL_ENV).ok();
        self.api_config_with(flag, env.as_deref())
    }

    pub fn api_config_with(&self, flag: Option<&str>, env: Option<&str>) -> ApiConfig {
        ApiConfig {
            base_url: self.resolve_api_url(flag, env),
            idea_timeout_secs: Some(self.idea_timeout_seconds),
            market_timeout_secs: self.market_timeout_seconds,
            pitch_timeout_secs: Some(self.pitch_timeout_seconds),
        }
    }

    pub fn set_api_url(&mut self, url: &str) -> Result<()> {
        self.api_base_url = validate_api_url(url)?;
        self.save()
    }

    pub fn set_default_persona(&mut self, persona: Persona) -> Result<()> {
        self.default_persona = persona;
        self.save()
    }
}

/// http(s) のURLのみ受け付ける（末尾のスラッシュは除去）
pub fn validate_api_url(url: &str) -> Result<String> {
    let url = url.trim();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(PitchCoachError::Config(format!(
            "URLは http:// または https:// で始めてください: {}",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}
