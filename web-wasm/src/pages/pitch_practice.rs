//! ピッチ練習ページ

use leptos::prelude::*;

use pitch_coach_common::{Persona, PitchAnalysisResponse};

use crate::components::feedback_display::FeedbackDisplay;
use crate::components::header::{BackLink, PageHeader};
use crate::components::loading_panel::LoadingPanel;
use crate::components::persona_selector::PersonaSelector;
use crate::components::video_uploader::VideoUploader;

#[component]
pub fn PitchPracticePage() -> impl IntoView {
    let (persona, set_persona) = signal(Persona::default());
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (result, set_result) = signal(None::<PitchAnalysisResponse>);

    let on_analysis_start = move |_| set_is_analyzing.set(true);
    let on_analysis_complete = move |response: PitchAnalysisResponse| {
        set_result.set(Some(response));
        set_is_analyzing.set(false);
    };
    // 失敗時も解析中表示を解除する
    let on_analysis_failed = move |_| set_is_analyzing.set(false);

    let on_reset = move |_| {
        set_result.set(None);
        set_is_analyzing.set(false);
    };

    view! {
        <main class="page theme-pitch">
            <div class="container mx-auto px-4 py-12 max-w-7xl">
                <BackLink />
                <PageHeader
                    icon="✨"
                    title="Pitch Perfect"
                    subtitle="Master your startup pitch with AI-powered expert feedback"
                    tagline="Powered by Claude • Real-time Analysis • Expert Personas"
                    gradient="from-indigo-400 via-purple-400 to-pink-400"
                />

                <Show
                    when=move || result.get().is_none()
                    fallback=move || {
                        result.get().map(|response| {
                            // レスポンスのペルソナを優先し、無ければ選択中のもの
                            let shown = response
                                .persona
                                .as_deref()
                                .and_then(|p| p.parse::<Persona>().ok())
                                .unwrap_or_else(|| persona.get_untracked());
                            view! {
                                <FeedbackDisplay
                                    analysis=response.analysis
                                    transcript=response.transcript
                                    persona=shown
                                    on_reset=on_reset
                                />
                            }
                        })
                    }
                >
                    <div class="space-y-8">
                        <PersonaSelector
                            selected=persona
                            on_change=move |p| set_persona.set(p)
                            disabled=is_analyzing
                        />
                        <VideoUploader
                            persona=persona
                            is_analyzing=is_analyzing
                            on_analysis_start=on_analysis_start
                            on_analysis_complete=on_analysis_complete
                            on_analysis_failed=on_analysis_failed
                        />
                        <Show when=move || is_analyzing.get()>
                            <LoadingPanel
                                icon="✨"
                                title="Analyzing Your Pitch..."
                                description="Transcribing your video and generating expert feedback"
                                steps=vec![
                                    "Extracting audio from video...",
                                    "Transcribing speech...",
                                    "Generating expert feedback...",
                                ]
                            />
                        </Show>
                    </div>
                </Show>
            </div>
        </main>
    }
}
