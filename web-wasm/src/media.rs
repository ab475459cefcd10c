//! カメラ/マイク録画（MediaRecorder）

use std::cell::RefCell;
use std::rc::Rc;

use gloo::file::ObjectUrl;
use js_sys::Array;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, BlobEvent, File, FilePropertyBag, MediaRecorder, MediaRecorderOptions, MediaStream,
    MediaStreamConstraints, MediaStreamTrack,
};

use pitch_coach_common::capture::{
    choose_recording_mime, RECORDED_FILE_NAME, RECORDED_MIME_TYPE,
};
use pitch_coach_common::{CaptureDevice, Error, Result, VideoCapture};

/// 送信待ちの動画（プレビューURLはdropで解放される）
pub struct StagedVideo {
    pub file: File,
    pub preview: ObjectUrl,
}

impl StagedVideo {
    pub fn new(file: File) -> Self {
        let preview = ObjectUrl::from(gloo::file::File::from(file.clone()));
        Self { file, preview }
    }
}

/// 録画中のストリームとレコーダー
pub struct MediaSession {
    stream: MediaStream,
    recorder: MediaRecorder,
}

pub type PitchCapture = VideoCapture<MediaSession, StagedVideo>;

impl MediaSession {
    /// カメラ/マイクを取得して録画を開始
    ///
    /// 停止後にまとめたファイルを `on_recorded` に渡す
    pub async fn start<F>(on_recorded: F) -> Result<Self>
    where
        F: Fn(File) + 'static,
    {
        let window = web_sys::window().ok_or_else(|| Error::Device("window unavailable".into()))?;
        let devices = window.navigator().media_devices().map_err(device_error)?;

        let constraints = MediaStreamConstraints::new();
        constraints.set_video(&JsValue::TRUE);
        constraints.set_audio(&JsValue::TRUE);

        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(device_error)?;
        let stream: MediaStream = JsFuture::from(promise)
            .await
            .map_err(device_error)?
            .dyn_into()
            .map_err(device_error)?;

        let mime = choose_recording_mime(|m| MediaRecorder::is_type_supported(m));
        let options = MediaRecorderOptions::new();
        options.set_mime_type(mime);

        let recorder =
            match MediaRecorder::new_with_media_stream_and_media_recorder_options(&stream, &options)
            {
                Ok(recorder) => recorder,
                Err(e) => {
                    stop_tracks(&stream);
                    return Err(device_error(e));
                }
            };

        let chunks: Rc<RefCell<Vec<Blob>>> = Rc::new(RefCell::new(Vec::new()));

        let chunks_clone = chunks.clone();
        let on_data = Closure::wrap(Box::new(move |ev: BlobEvent| {
            if let Some(data) = ev.data() {
                if data.size() > 0.0 {
                    chunks_clone.borrow_mut().push(data);
                }
            }
        }) as Box<dyn FnMut(_)>);
        recorder.set_ondataavailable(Some(on_data.as_ref().unchecked_ref()));
        on_data.forget();

        let on_stop = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let parts = Array::new();
            for chunk in chunks.borrow_mut().drain(..) {
                parts.push(&chunk);
            }
            match recorded_file(&parts) {
                Ok(file) => on_recorded(file),
                Err(e) => log::error!("failed to assemble recording: {}", e),
            }
        }) as Box<dyn FnMut(_)>);
        recorder.set_onstop(Some(on_stop.as_ref().unchecked_ref()));
        on_stop.forget();

        if let Err(e) = recorder.start() {
            stop_tracks(&stream);
            return Err(device_error(e));
        }
        log::info!("recording started ({})", mime);

        Ok(Self { stream, recorder })
    }

    pub fn stream(&self) -> &MediaStream {
        &self.stream
    }
}

impl CaptureDevice for MediaSession {
    fn release(&mut self) {
        // 停止済みの場合のInvalidStateErrorは無視
        let _ = self.recorder.stop();
        stop_tracks(&self.stream);
        log::info!("camera/microphone released");
    }
}

fn recorded_file(parts: &Array) -> Result<File> {
    let props = FilePropertyBag::new();
    props.set_type(RECORDED_MIME_TYPE);
    File::new_with_blob_sequence_and_options(parts, RECORDED_FILE_NAME, &props)
        .map_err(device_error)
}

fn stop_tracks(stream: &MediaStream) {
    for track in stream.get_tracks().iter() {
        if let Ok(track) = track.dyn_into::<MediaStreamTrack>() {
            track.stop();
        }
    }
}

fn device_error(e: JsValue) -> Error {
    Error::Device(format!("{:?}", e))
}
