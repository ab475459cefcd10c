//! ピッチ動画のアップロード/録画コンポーネント

use leptos::html::{Input, Video};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, HtmlInputElement};

use pitch_coach_common::api::PITCH_FAILURE_MESSAGE;
use pitch_coach_common::capture::DEVICE_PERMISSION_MESSAGE;
use pitch_coach_common::{CapturePhase, Persona, PitchAnalysisResponse};

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::media::{MediaSession, PitchCapture, StagedVideo};

#[component]
pub fn VideoUploader<FS, FC, FF>(
    persona: ReadSignal<Persona>,
    is_analyzing: ReadSignal<bool>,
    on_analysis_start: FS,
    on_analysis_complete: FC,
    on_analysis_failed: FF,
) -> impl IntoView
where
    FS: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(PitchAnalysisResponse) + 'static + Clone + Send + Sync,
    FF: Fn(()) + 'static + Clone + Send + Sync,
{
    let capture = RwSignal::new_local(PitchCapture::new());
    let (error, set_error) = signal(None::<String>);
    let file_input: NodeRef<Input> = NodeRef::new();
    let live_preview: NodeRef<Video> = NodeRef::new();

    let phase = move || capture.with(|c| c.phase());

    // 録画中はカメラ映像をプレビューに流す
    Effect::new(move |_| {
        if let Some(video) = live_preview.get() {
            capture.with_untracked(|c| video.set_src_object(c.device().map(|d| d.stream())));
        }
    });

    // ページ離脱時にカメラ/マイクを解放
    on_cleanup(move || {
        capture.try_update(|c| {
            c.remove();
        });
    });

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let mime = file.type_();
        let staged = StagedVideo::new(file);
        match capture.try_update(|c| c.stage_upload(staged, &mime)) {
            Some(Ok(())) => set_error.set(None),
            Some(Err(e)) => set_error.set(Some(e.user_message(PITCH_FAILURE_MESSAGE))),
            None => {}
        }
    };

    let start_recording = move |_| {
        set_error.set(None);
        spawn_local(async move {
            let on_recorded = move |file: File| {
                let accepted = capture
                    .try_update(|c| c.stage_recording(StagedVideo::new(file)))
                    .unwrap_or(false);
                if !accepted {
                    log::info!("discarded recording that finished after reset");
                }
            };

            match MediaSession::start(on_recorded).await {
                Ok(session) => {
                    if let Some(Err(e)) = capture.try_update(|c| c.start_recording(session)) {
                        set_error.set(Some(e.user_message(PITCH_FAILURE_MESSAGE)));
                    }
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(DEVICE_PERMISSION_MESSAGE.to_string()));
                }
            }
        });
    };

    let stop_recording = move |_| {
        capture.update(|c| {
            c.stop_recording();
        });
    };

    let remove_video = move |_| {
        capture.update(|c| {
            c.remove();
        });
        if let Some(input) = file_input.get_untracked() {
            input.set_value("");
        }
    };

    let analyze = move |_| {
        let Some(file) = capture.with_untracked(|c| c.staged().map(|v| v.file.clone())) else {
            return;
        };
        let persona = persona.get_untracked();
        on_analysis_start(());
        set_error.set(None);

        let on_analysis_complete = on_analysis_complete.clone();
        let on_analysis_failed = on_analysis_failed.clone();
        spawn_local(async move {
            match api::analyze_pitch(&file, persona).await {
                Ok(response) => on_analysis_complete(response),
                Err(e) => {
                    log::error!("Analysis error: {}", e);
                    set_error.set(Some(e.user_message(PITCH_FAILURE_MESSAGE)));
                    on_analysis_failed(());
                }
            }
        });
    };

    let capture_view = move || match phase() {
        CapturePhase::Captured(_) => {
            let preview = capture.with(|c| c.staged().map(|v| v.preview.to_string()));
            let analyze = analyze.clone();
            view! {
                <div class="space-y-4">
                    <div class="relative rounded-xl overflow-hidden bg-black border-2 border-slate-700">
                        <video src=preview controls=true class="w-full"></video>
                        <button
                            class="remove-video absolute top-4 right-4 p-2 rounded-full"
                            disabled=move || is_analyzing.get()
                            on:click=remove_video
                        >
                            "✕"
                        </button>
                    </div>
                    <button
                        class="btn btn-primary btn-large w-full"
                        disabled=move || is_analyzing.get()
                        on:click=analyze
                    >
                        {move || {
                            if is_analyzing.get() { "Analyzing Your Pitch..." } else { "Analyze My Pitch" }
                        }}
                    </button>
                </div>
            }
            .into_any()
        }
        current => {
            let is_recording = current == CapturePhase::Recording;
            let is_finalizing = current == CapturePhase::Finalizing;
            view! {
                <div class="space-y-4">
                    <div
                        class="upload-area group border-2 border-dashed rounded-xl p-12 text-center cursor-pointer"
                        on:click=move |_| {
                            if let Some(input) = file_input.get_untracked() {
                                input.click();
                            }
                        }
                    >
                        <div class="upload-icon">"⬆"</div>
                        <p class="text-lg font-semibold text-slate-200 mb-2">"Click to upload video"</p>
                        <p class="text-sm text-slate-400">"MP4, MOV, WebM up to 100MB"</p>
                        <input
                            node_ref=file_input
                            type="file"
                            accept="video/*"
                            class="hidden"
                            disabled=move || is_analyzing.get()
                            on:change=on_file_change
                        />
                    </div>

                    <div class="divider"><span>"OR"</span></div>

                    {if is_recording {
                        view! {
                            <div class="space-y-4">
                                <div class="relative bg-black rounded-xl overflow-hidden">
                                    <video
                                        node_ref=live_preview
                                        autoplay=true
                                        muted=true
                                        playsinline=true
                                        class="w-full h-auto min-h-[400px] object-contain"
                                    ></video>
                                    <div class="recording-badge absolute top-4 left-4 animate-pulse">
                                        "● Recording..."
                                    </div>
                                </div>
                                <button class="btn btn-danger w-full" on:click=stop_recording>
                                    "■ Stop Recording"
                                </button>
                            </div>
                        }
                        .into_any()
                    } else if is_finalizing {
                        view! { <p class="text-center text-slate-400">"Preparing your recording..."</p> }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class="btn btn-primary w-full"
                                disabled=move || is_analyzing.get()
                                on:click=start_recording
                            >
                                "🎥 Record Pitch"
                            </button>
                        }
                        .into_any()
                    }}
                </div>
            }
            .into_any()
        }
    };

    view! {
        <div class="card">
            <div class="mb-6">
                <h2 class="text-3xl font-bold text-slate-100 mb-2">"Upload or Record Your Pitch"</h2>
                <p class="text-slate-400">"Capture your presentation for expert analysis"</p>
            </div>
            <ErrorBanner message=error />
            {capture_view}
        </div>
    }
}
