//! スコアカードコンポーネント

use leptos::prelude::*;
use pitch_coach_common::score::{bar_width_percent, format_score};
use pitch_coach_common::{ScoreDimension, ScoreTone};

#[component]
pub fn ScoreCard(dimension: ScoreDimension, score: f64, explanation: String) -> impl IntoView {
    let tone = ScoreTone::from_score(score);

    view! {
        <div class=format!("score-card tone-{} card p-6", tone.as_str())>
            <div class="flex items-start justify-between mb-4">
                <div class="flex items-center space-x-3">
                    <span class="text-xl">{dimension.icon()}</span>
                    <h3 class="font-semibold text-slate-200">{dimension.label()}</h3>
                </div>
                <div class=format!("text-2xl font-bold {}", tone.text_class())>
                    {format!("{}/10", format_score(score))}
                </div>
            </div>
            <div class="w-full bg-slate-700 rounded-full h-2 mb-4">
                <div
                    class=format!("h-2 rounded-full {} transition-all duration-1000", tone.bar_class())
                    style=format!("width: {}%", bar_width_percent(score))
                ></div>
            </div>
            <p class="text-slate-400 text-sm leading-relaxed">{explanation}</p>
        </div>
    }
}
