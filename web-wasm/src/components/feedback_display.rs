//! ピッチフィードバック表示コンポーネント

use leptos::prelude::*;
use pitch_coach_common::{format_feedback, FeedbackLine, Persona, PitchFeedback, Sentiment};

#[component]
pub fn FeedbackDisplay<F>(
    analysis: PitchFeedback,
    transcript: String,
    persona: Persona,
    on_reset: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let (show_transcript, set_show_transcript) = signal(false);
    let lines = format_feedback(&analysis.raw_feedback);

    view! {
        <div class="space-y-6">
            <div class="rounded-2xl p-8 text-white bg-gradient-to-r from-indigo-500 via-purple-500 to-pink-500">
                <h2 class="text-4xl font-bold mb-2">"🏆 Analysis Complete"</h2>
                <p class="text-white/90 text-lg">
                    {format!("Expert feedback from your {}", persona.title())}
                </p>
            </div>

            <div class="card">
                <button
                    class="w-full flex items-center justify-between text-left"
                    on:click=move |_| set_show_transcript.update(|s| *s = !*s)
                >
                    <h3 class="text-xl font-bold text-slate-100">"📄 Your Transcript"</h3>
                    <span class=move || {
                        if show_transcript.get() { "chevron rotate-180" } else { "chevron" }
                    }>"⌄"</span>
                </button>
                <Show when=move || show_transcript.get()>
                    <div class="mt-4 p-6 bg-slate-900/50 rounded-xl">
                        <p class="text-slate-300 whitespace-pre-wrap leading-relaxed">
                            {transcript.clone()}
                        </p>
                    </div>
                </Show>
            </div>

            <div class="card p-8">
                <h3 class="text-2xl font-bold text-slate-100 mb-6">"📈 Expert Analysis"</h3>
                <div class="space-y-6">
                    {lines.into_iter().map(feedback_line).collect_view()}
                </div>
            </div>

            <div class="flex justify-center">
                <button
                    class="btn btn-primary btn-large"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "↻ Analyze Another Pitch"
                </button>
            </div>
        </div>
    }
}

fn feedback_line(line: FeedbackLine) -> AnyView {
    match line {
        FeedbackLine::Heading(text) => view! {
            <h4 class="text-2xl font-bold text-slate-100 mt-8 mb-4 border-l-4 border-indigo-500 pl-4">
                {text}
            </h4>
        }
        .into_any(),
        FeedbackLine::Bullet { text, sentiment } => {
            let (icon, icon_class) = match sentiment {
                Sentiment::Positive => ("✔", "text-emerald-400"),
                Sentiment::Negative => ("✖", "text-amber-400"),
            };
            view! {
                <div class="feedback-bullet flex items-start space-x-3 py-3 px-4 rounded-lg bg-slate-900/30">
                    <span class=format!("mt-1 flex-shrink-0 {}", icon_class)>{icon}</span>
                    <p class="text-slate-300 flex-1 leading-relaxed">{text}</p>
                </div>
            }
            .into_any()
        }
        FeedbackLine::Score(text) => view! {
            <div class="score-callout border-l-4 border-indigo-500 p-6 rounded-r-xl my-4">
                <p class="text-xl font-bold text-slate-100">{text}</p>
            </div>
        }
        .into_any(),
        FeedbackLine::Paragraph(text) => view! {
            <p class="text-slate-300 leading-relaxed text-lg">{text}</p>
        }
        .into_any(),
    }
}
