use thiserror::Error;

#[derive(Error, Debug)]
pub enum PitchCoachError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{0}")]
    Backend(#[from] pitch_coach_common::Error),

    #[error("HTTPクライアントの初期化に失敗: {0}")]
    Client(String),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for PitchCoachError {
    fn from(e: dialoguer::Error) -> Self {
        PitchCoachError::Prompt(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PitchCoachError>;
