//! 市場分析ページ

use leptos::prelude::*;
use leptos::task::spawn_local;

use pitch_coach_common::api::MARKET_FAILURE_MESSAGE;
use pitch_coach_common::market::segment_color;
use pitch_coach_common::{
    segment_slices, CompetitorLandscape, CustomerPersona, CustomerSegment, MarketField,
    MarketInsightsRequest, MarketInsightsResult,
};

use crate::api;
use crate::components::error_banner::ErrorBanner;
use crate::components::header::{BackLink, PageHeader};
use crate::components::loading_panel::LoadingPanel;
use crate::components::segment_chart::SegmentChart;

#[component]
pub fn MarketInsightsPage() -> impl IntoView {
    let form = RwSignal::new(MarketInsightsRequest::default());
    let (is_analyzing, set_is_analyzing) = signal(false);
    let (result, set_result) = signal(None::<MarketInsightsResult>);
    let (error, set_error) = signal(None::<String>);

    let can_submit = move || form.with(|f| f.is_complete()) && !is_analyzing.get();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = form.get_untracked();
        if let Err(e) = request.validate() {
            set_error.set(Some(e.user_message(MARKET_FAILURE_MESSAGE)));
            return;
        }

        set_is_analyzing.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::analyze_market(&request).await {
                Ok(insights) => set_result.set(Some(insights)),
                Err(e) => {
                    log::error!("Analysis error: {}", e);
                    set_error.set(Some(e.user_message(MARKET_FAILURE_MESSAGE)));
                }
            }
            set_is_analyzing.set(false);
        });
    };

    let on_reset = move |_| {
        set_result.set(None);
        form.set(MarketInsightsRequest::default());
        set_error.set(None);
    };

    view! {
        <main class="page theme-market">
            <div class="container mx-auto px-4 py-12 max-w-7xl">
                <BackLink />
                <PageHeader
                    icon="📊"
                    title="Market Insights"
                    subtitle="Discover your ideal customers and competitive landscape"
                    gradient="from-cyan-400 via-teal-400 to-emerald-400"
                />

                <Show
                    when=move || result.get().is_none()
                    fallback=move || {
                        result
                            .get()
                            .map(|insights| view! { <MarketResults insights=insights on_reset=on_reset /> })
                    }
                >
                    <div class="max-w-4xl mx-auto space-y-8">
                        <form class="card p-8" on:submit=on_submit>
                            <h2 class="text-2xl font-bold text-slate-100 mb-6">"Tell Us About Your Startup"</h2>
                            <ErrorBanner message=error />

                            <div class="space-y-6">
                                {MarketField::ALL
                                    .into_iter()
                                    .map(|field| view! { <MarketInput field=field form=form disabled=is_analyzing /> })
                                    .collect_view()}

                                <button
                                    type="submit"
                                    class="btn btn-primary btn-large w-full"
                                    disabled=move || !can_submit()
                                >
                                    {move || {
                                        if is_analyzing.get() { "Analyzing Market..." } else { "📈 Get Market Insights" }
                                    }}
                                </button>
                            </div>
                        </form>

                        <Show when=move || is_analyzing.get()>
                            <LoadingPanel
                                icon="📊"
                                title="Analyzing Your Market..."
                                description="Identifying customer segments, personas, and competitors"
                            />
                        </Show>
                    </div>
                </Show>
            </div>
        </main>
    }
}

/// 入力欄1つ分（rowsがあればtextarea）
#[component]
fn MarketInput(
    field: MarketField,
    form: RwSignal<MarketInsightsRequest>,
    disabled: ReadSignal<bool>,
) -> impl IntoView {
    let id = format!("market-{}", field.name());
    let label = if field.is_required() {
        format!("{} *", field.question())
    } else {
        format!("{} (optional)", field.question())
    };
    let value = move || form.with(|f| f.get(field).to_string());
    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        form.update(|f| f.set(field, text));
    };

    let input = match field.rows() {
        Some(rows) => view! {
            <textarea
                id=id.clone()
                rows=rows.to_string()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
                disabled=move || disabled.get()
            ></textarea>
        }
        .into_any(),
        None => view! {
            <input
                type="text"
                id=id.clone()
                placeholder=field.placeholder()
                prop:value=value
                on:input=on_input
                disabled=move || disabled.get()
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-group">
            <label for=id>{label}</label>
            {input}
        </div>
    }
}

#[component]
fn MarketResults<F>(insights: MarketInsightsResult, on_reset: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let MarketInsightsResult {
        customer_segments,
        customer_personas,
        competitors,
        market_gaps,
        positioning_insights,
    } = insights;

    view! {
        <div class="space-y-8">
            {(!customer_segments.is_empty()).then(|| view! { <SegmentSection segments=customer_segments /> })}
            {(!customer_personas.is_empty()).then(|| view! { <PersonaSection personas=customer_personas /> })}
            <CompetitorSection competitors=competitors />

            {(!market_gaps.is_empty()).then(|| view! {
                <div class="card p-8">
                    <h2 class="text-3xl font-bold text-slate-100 mb-6">"🎯 Market Gaps & Opportunities"</h2>
                    <ul class="space-y-3">
                        {market_gaps
                            .into_iter()
                            .map(|gap| view! {
                                <li class="market-gap flex items-start space-x-3 text-slate-300">
                                    <span class="text-emerald-400">"✔"</span>
                                    <span>{gap}</span>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}

            {(!positioning_insights.is_empty()).then(|| view! {
                <div class="card p-8">
                    <h2 class="text-3xl font-bold text-slate-100 mb-6">"🧭 Positioning Strategy"</h2>
                    <p class="text-slate-300 leading-relaxed">{positioning_insights}</p>
                </div>
            })}

            <div class="flex justify-center">
                <button
                    class="btn btn-primary btn-large"
                    on:click={
                        let on_reset = on_reset.clone();
                        move |_| on_reset(())
                    }
                >
                    "Analyze Another Market"
                </button>
            </div>
        </div>
    }
}

#[component]
fn SegmentSection(segments: Vec<CustomerSegment>) -> impl IntoView {
    let slices = segment_slices(&segments);

    view! {
        <div class="card p-8">
            <h2 class="text-3xl font-bold text-slate-100 mb-6">"👥 Customer Segments"</h2>
            <div class="grid lg:grid-cols-2 gap-8 items-center">
                <SegmentChart slices=slices />
                <div class="space-y-4">
                    {segments
                        .into_iter()
                        .enumerate()
                        .map(|(index, segment)| view! {
                            <div class="segment p-4 bg-slate-900/50 rounded-xl border border-slate-700">
                                <div class="flex items-center space-x-2 mb-2">
                                    <div
                                        class="w-3 h-3 rounded-full"
                                        style=format!("background-color: {}", segment_color(index))
                                    ></div>
                                    <h3 class="text-lg font-bold text-cyan-400">{segment.name}</h3>
                                </div>
                                <p class="text-slate-300 text-sm mb-2">{segment.description}</p>
                                <p class="text-xs text-slate-400">
                                    <strong>"Size: "</strong>
                                    {segment.size}
                                </p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
fn PersonaSection(personas: Vec<CustomerPersona>) -> impl IntoView {
    view! {
        <div class="card p-8">
            <h2 class="text-3xl font-bold text-slate-100 mb-6">"🎯 Customer Personas"</h2>
            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                {personas
                    .into_iter()
                    .map(|persona| {
                        let pain_point = persona.pain_points.into_iter().next().unwrap_or_default();
                        let goal = persona.goals.into_iter().next().unwrap_or_default();
                        view! {
                            <div class="customer-persona p-6 bg-slate-900/50 rounded-xl border border-slate-700">
                                <h3 class="text-xl font-bold text-teal-400 mb-3">{persona.name}</h3>
                                <div class="space-y-3">
                                    <div>
                                        <p class="text-xs font-semibold text-slate-400 mb-1">"Demographics"</p>
                                        <p class="text-slate-300 text-sm">{persona.demographics}</p>
                                    </div>
                                    <div>
                                        <p class="text-xs font-semibold text-slate-400 mb-1">"Top Pain Point"</p>
                                        <p class="text-slate-300 text-sm">{format!("• {}", pain_point)}</p>
                                    </div>
                                    <div>
                                        <p class="text-xs font-semibold text-slate-400 mb-1">"Primary Goal"</p>
                                        <p class="text-slate-300 text-sm">{format!("→ {}", goal)}</p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn CompetitorSection(competitors: CompetitorLandscape) -> impl IntoView {
    let tiers = [
        ("Direct", competitors.direct.len(), "text-purple-400"),
        ("Adjacent", competitors.adjacent.len(), "text-indigo-400"),
        ("Indirect", competitors.indirect.len(), "text-blue-400"),
    ];

    view! {
        <div class="card p-8">
            <h2 class="text-3xl font-bold text-slate-100 mb-6">"💡 Competitive Landscape"</h2>
            <div class="grid grid-cols-3 gap-4 mb-8">
                {tiers
                    .into_iter()
                    .map(|(label, count, class)| view! {
                        <div class="competitor-tier p-4 rounded-lg text-center">
                            <div class=format!("text-3xl font-bold {}", class)>{count}</div>
                            <div class="text-sm text-slate-400">{label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>
            <div class="space-y-3">
                {competitors
                    .direct
                    .into_iter()
                    .map(|comp| {
                        let strengths = first_two(&comp.strengths);
                        let weaknesses = first_two(&comp.weaknesses);
                        view! {
                            <div class="competitor p-4 bg-slate-900/50 rounded-xl">
                                <h4 class="text-lg font-bold text-slate-100 mb-1">{comp.name}</h4>
                                <p class="text-slate-400 text-sm mb-3">{comp.description}</p>
                                <div class="grid md:grid-cols-2 gap-3 text-xs">
                                    <div>
                                        <span class="text-green-400 font-semibold">"Strengths: "</span>
                                        <span class="text-slate-400">{strengths}</span>
                                    </div>
                                    <div>
                                        <span class="text-red-400 font-semibold">"Weaknesses: "</span>
                                        <span class="text-slate-400">{weaknesses}</span>
                                    </div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn first_two(items: &[String]) -> String {
    items.iter().take(2).map(String::as_str).collect::<Vec<_>>().join(", ")
}
