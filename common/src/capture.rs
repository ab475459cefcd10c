//! ピッチ動画の取り込み状態管理
//!
//! 録画: Idle → Recording → Finalizing → Captured
//! アップロード: Idle → Captured
//!
//! ブラウザ依存の部分（MediaRecorder, File）は型パラメータで受け取り、
//! ここでは状態遷移とカメラ/マイクの解放だけを扱う

use crate::error::{Error, Result};

/// 録画形式の優先順位（先頭から対応しているものを使う）
pub const RECORDING_MIME_PREFERENCES: [&str; 4] = [
    "video/webm;codecs=vp9,opus",
    "video/webm;codecs=vp8,opus",
    "video/webm",
    "video/mp4",
];

pub const RECORDED_FILE_NAME: &str = "recorded-pitch.webm";
pub const RECORDED_MIME_TYPE: &str = "video/webm";

pub const INVALID_VIDEO_MESSAGE: &str = "Please select a valid video file";
pub const DEVICE_PERMISSION_MESSAGE: &str =
    "Unable to access camera/microphone. Please check permissions.";
pub const VIDEO_ALREADY_STAGED_MESSAGE: &str =
    "Remove the current video before adding another one";

/// 録画に使うMIMEタイプを選ぶ
///
/// どれも対応していない場合は最後の候補（video/mp4）
pub fn choose_recording_mime(is_supported: impl Fn(&str) -> bool) -> &'static str {
    RECORDING_MIME_PREFERENCES
        .iter()
        .copied()
        .find(|mime| is_supported(mime))
        .unwrap_or(RECORDING_MIME_PREFERENCES[RECORDING_MIME_PREFERENCES.len() - 1])
}

/// アップロード可能な動画か（MIMEタイプが video/ で始まる）
pub fn is_video_mime(mime: &str) -> bool {
    mime.starts_with("video/")
}

/// 録画中に保持するカメラ/マイク
pub trait CaptureDevice {
    /// トラックを停止してデバイスを解放
    fn release(&mut self);
}

/// 動画の取得元
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    Upload,
    Recording,
}

/// 画面表示用の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapturePhase {
    Idle,
    Recording,
    /// 録画停止後、データ確定待ち
    Finalizing,
    Captured(CaptureSource),
}

enum CaptureState<D, V> {
    Idle,
    Recording(D),
    Finalizing,
    Captured { video: V, source: CaptureSource },
}

/// 動画1本分の取り込み状態
pub struct VideoCapture<D: CaptureDevice, V> {
    state: CaptureState<D, V>,
}

impl<D: CaptureDevice, V> Default for VideoCapture<D, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: CaptureDevice, V> VideoCapture<D, V> {
    pub fn new() -> Self {
        Self {
            state: CaptureState::Idle,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        match &self.state {
            CaptureState::Idle => CapturePhase::Idle,
            CaptureState::Recording(_) => CapturePhase::Recording,
            CaptureState::Finalizing => CapturePhase::Finalizing,
            CaptureState::Captured { source, .. } => CapturePhase::Captured(*source),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.state, CaptureState::Idle)
    }

    /// 録画中のデバイス
    pub fn device(&self) -> Option<&D> {
        match &self.state {
            CaptureState::Recording(device) => Some(device),
            _ => None,
        }
    }

    /// 確定済みの動画
    pub fn staged(&self) -> Option<&V> {
        match &self.state {
            CaptureState::Captured { video, .. } => Some(video),
            _ => None,
        }
    }

    /// ファイル選択で動画を確定
    ///
    /// 録画中だった場合はデバイスを解放してから差し替える
    pub fn stage_upload(&mut self, video: V, mime: &str) -> Result<()> {
        if !is_video_mime(mime) {
            return Err(Error::Validation(INVALID_VIDEO_MESSAGE.to_string()));
        }
        if matches!(self.state, CaptureState::Captured { .. }) {
            return Err(Error::Validation(VIDEO_ALREADY_STAGED_MESSAGE.to_string()));
        }

        self.release_device();
        self.state = CaptureState::Captured {
            video,
            source: CaptureSource::Upload,
        };
        Ok(())
    }

    /// 録画開始（Idleのときのみ）
    ///
    /// 受け付けられない場合は渡されたデバイスを解放して返す
    pub fn start_recording(&mut self, mut device: D) -> Result<()> {
        if !self.is_idle() {
            device.release();
            return Err(Error::Validation(VIDEO_ALREADY_STAGED_MESSAGE.to_string()));
        }
        self.state = CaptureState::Recording(device);
        Ok(())
    }

    /// 録画停止（デバイス解放、データ確定待ちへ）
    pub fn stop_recording(&mut self) -> bool {
        if !matches!(self.state, CaptureState::Recording(_)) {
            return false;
        }
        self.release_device();
        self.state = CaptureState::Finalizing;
        true
    }

    /// 録画データを確定
    ///
    /// 停止後（Finalizing）以外で届いたデータは捨てる
    pub fn stage_recording(&mut self, video: V) -> bool {
        if !matches!(self.state, CaptureState::Finalizing) {
            return false;
        }
        self.state = CaptureState::Captured {
            video,
            source: CaptureSource::Recording,
        };
        true
    }

    /// 動画を取り除いて初期状態に戻す
    pub fn remove(&mut self) -> Option<V> {
        self.release_device();
        match std::mem::replace(&mut self.state, CaptureState::Idle) {
            CaptureState::Captured { video, .. } => Some(video),
            _ => None,
        }
    }

    fn release_device(&mut self) {
        if let CaptureState::Recording(device) = &mut self.state {
            device.release();
            self.state = CaptureState::Idle;
        }
    }
}

impl<D: CaptureDevice, V> Drop for VideoCapture<D, V> {
    fn drop(&mut self) {
        self.release_device();
    }
}
