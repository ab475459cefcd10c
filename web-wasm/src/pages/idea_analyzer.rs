//! アイデア解析ページ

use leptos::prelude::*;
use leptos::task::spawn_local;

use pitch_coach_common::api::IDEA_FAILURE_MESSAGE;
use pitch_coach_common::score::format_score;
use pitch_coach_common::{IdeaAnalysisResult, IdeaForm, Patent, ScoreDimension};

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::components::header::{BackLink, PageHeader};
use crate::components::loading_panel::LoadingPanel;
use crate::components::score_card::ScoreCard;

#[component]
pub fn IdeaAnalyzerPage() -> impl IntoView {
    let (description, set_description) = signal(String::new());
    let (keywords, set_keywords) = signal(String::new());
    let (industry, set_industry) = signal(String::new());
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (result, set_result) = signal(None::<IdeaAnalysisResult>);
    let (error, set_error) = signal(None::<String>);

    let on_analyze = move |_| {
        let form = IdeaForm {
            description: description.get_untracked(),
            keywords: keywords.get_untracked(),
            industry: industry.get_untracked(),
        };
        // 入力エラー時はリクエストを送らない
        let request = match form.to_request() {
            Ok(request) => request,
            Err(e) => {
                set_error.set(Some(e.user_message(IDEA_FAILURE_MESSAGE)));
                return;
            }
        };

        set_is_analyzing.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::analyze_idea(&request).await {
                Ok(analysis) => set_result.set(Some(analysis)),
                Err(e) => {
                    log::error!("Analysis error: {}", e);
                    set_error.set(Some(e.user_message(IDEA_FAILURE_MESSAGE)));
                }
            }
            set_is_analyzing.set(false);
        });
    };

    let on_reset = move |_| {
        set_result.set(None);
        set_description.set(String::new());
        set_keywords.set(String::new());
        set_industry.set(String::new());
        set_error.set(None);
    };

    view! {
        <main class="page theme-idea">
            <div class="container mx-auto px-4 py-12 max-w-7xl">
                <BackLink />
                <PageHeader
                    icon="💡"
                    title="Idea Analyzer"
                    subtitle="Evaluate your startup idea with AI-powered analysis"
                    tagline="Patent Search • Market Analysis • Feasibility Scoring"
                    gradient="from-purple-400 via-pink-400 to-rose-400"
                />

                <Show
                    when=move || result.get().is_none()
                    fallback=move || {
                        result
                            .get()
                            .map(|analysis| view! { <IdeaResults analysis=analysis on_reset=on_reset /> })
                    }
                >
                    <div class="max-w-4xl mx-auto space-y-8">
                        <div class="card p-8">
                            <h2 class="text-2xl font-bold text-slate-100 mb-6">"Describe Your Startup Idea"</h2>
                            <ErrorBanner message=error />

                            <div class="space-y-6">
                                <div class="form-group">
                                    <label for="idea-description">"Idea Description *"</label>
                                    <textarea
                                        id="idea-description"
                                        class="h-48"
                                        placeholder="Describe your startup idea in detail. Include the problem you're solving, your solution, target market, and key features..."
                                        prop:value=move || description.get()
                                        on:input=move |ev| set_description.set(event_target_value(&ev))
                                        disabled=move || is_analyzing.get()
                                    ></textarea>
                                </div>

                                <div class="grid md:grid-cols-2 gap-6">
                                    <div class="form-group">
                                        <label for="idea-keywords">"Keywords (optional)"</label>
                                        <input
                                            type="text"
                                            id="idea-keywords"
                                            placeholder="AI, healthcare, blockchain, fintech..."
                                            prop:value=move || keywords.get()
                                            on:input=move |ev| set_keywords.set(event_target_value(&ev))
                                            disabled=move || is_analyzing.get()
                                        />
                                        <p class="text-sm text-slate-500 mt-2">"Comma-separated keywords"</p>
                                    </div>
                                    <div class="form-group">
                                        <label for="idea-industry">"Industry/Domain (optional)"</label>
                                        <input
                                            type="text"
                                            id="idea-industry"
                                            placeholder="Healthcare, Education, FinTech..."
                                            prop:value=move || industry.get()
                                            on:input=move |ev| set_industry.set(event_target_value(&ev))
                                            disabled=move || is_analyzing.get()
                                        />
                                    </div>
                                </div>

                                <button
                                    class="btn btn-primary btn-large w-full"
                                    disabled=move || is_analyzing.get()
                                    on:click=on_analyze
                                >
                                    {move || if is_analyzing.get() { "Analyzing..." } else { "➤ Analyze My Idea" }}
                                </button>
                            </div>
                        </div>

                        <Show when=move || is_analyzing.get()>
                            <LoadingPanel
                                icon="💡"
                                title="Analyzing Your Idea..."
                                description="Evaluating originality, feasibility, market overlap, and searching patent databases"
                                steps=vec![
                                    "Analyzing novelty and originality...",
                                    "Searching U.S. patent databases...",
                                    "Evaluating market and feasibility...",
                                ]
                            />
                        </Show>
                    </div>
                </Show>
            </div>
        </main>
    }
}

#[component]
fn IdeaResults<F>(analysis: IdeaAnalysisResult, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let IdeaAnalysisResult {
        scores,
        weighted_score,
        explanations,
        patents,
    } = analysis;

    view! {
        <div class="space-y-8">
            <div class="rounded-2xl p-8 text-white text-center bg-gradient-to-r from-purple-500 via-pink-500 to-rose-500">
                <h2 class="text-2xl font-bold mb-4">"Originality & Technology Score"</h2>
                <div class="weighted-score text-7xl font-black mb-2">{format_score(weighted_score)}</div>
                <div class="text-xl opacity-90">"out of 100"</div>
            </div>

            <div class="grid md:grid-cols-2 gap-6">
                {ScoreDimension::ALL
                    .into_iter()
                    .map(|dimension| {
                        view! {
                            <ScoreCard
                                dimension=dimension
                                score=scores.get(dimension)
                                explanation=explanations.get(dimension).to_string()
                            />
                        }
                    })
                    .collect_view()}
            </div>

            {(!patents.is_empty()).then(|| view! { <PatentList patents=patents /> })}

            <div class="flex justify-center">
                <button
                    class="btn btn-primary btn-large"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Analyze Another Idea"
                </button>
            </div>
        </div>
    }
}

#[component]
fn PatentList(patents: Vec<Patent>) -> impl IntoView {
    let count = patents.len();

    view! {
        <div class="card p-8">
            <h2 class="text-2xl font-bold text-slate-100 mb-6">
                {format!("🛡️ Relevant U.S. Patents ({})", count)}
            </h2>
            <div class="space-y-4">
                {patents
                    .into_iter()
                    .map(|patent| {
                        view! {
                            <div class="patent bg-slate-900/50 rounded-xl p-6">
                                <h3 class="text-lg font-bold text-slate-100">{patent.title}</h3>
                                <p class="text-sm text-slate-400 mt-1">
                                    {format!(
                                        "Patent #{} • Filed: {} • Status: {}",
                                        patent.patent_number,
                                        patent.filing_date,
                                        patent.status,
                                    )}
                                </p>
                                <p class="text-slate-400 text-sm leading-relaxed my-4">{patent.abstract_text}</p>
                                <a
                                    href=patent.link
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-purple-400 hover:text-purple-300 text-sm font-semibold"
                                >
                                    "View Patent Details →"
                                </a>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
