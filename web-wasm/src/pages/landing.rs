//! トップページ

use leptos::prelude::*;

struct Feature {
    href: &'static str,
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    points: [&'static str; 3],
    gradient: &'static str,
}

static FEATURES: [Feature; 2] = [
    Feature {
        href: "/pitch-practice",
        icon: "🎥",
        title: "Pitch Practice",
        description: "Record or upload your pitch and get instant feedback from AI experts tailored to your audience.",
        points: [
            "Video recording & upload",
            "5 expert AI personas",
            "Detailed feedback & scoring",
        ],
        gradient: "from-indigo-500 to-purple-500",
    },
    Feature {
        href: "/idea-analyzer",
        icon: "💡",
        title: "Idea Analyzer",
        description: "Evaluate originality, feasibility and patent risk before you build.",
        points: [
            "Originality & feasibility score",
            "U.S. patent landscape search",
            "Market & regulatory insights",
        ],
        gradient: "from-purple-500 to-pink-500",
    },
];

static STATS: [(&str, &str, &str); 3] = [
    ("AI-Powered", "Claude Sonnet 4.5", "text-indigo-400"),
    ("5 Experts", "Industry Personas", "text-purple-400"),
    ("100% Free", "For Entrepreneurs", "text-pink-400"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="page theme-landing">
            <div class="container mx-auto px-4 py-20 max-w-7xl text-center">
                <h1 class="text-7xl md:text-8xl font-black mb-8 bg-gradient-to-r from-indigo-400 via-purple-400 to-pink-400 bg-clip-text text-transparent leading-tight">
                    "Startup Intelligence"
                </h1>
                <p class="text-2xl md:text-3xl text-slate-300 max-w-4xl mx-auto leading-relaxed mb-4">
                    "Perfect your pitch, validate your idea, and understand your market"
                </p>
                <p class="text-lg text-slate-500 mb-12">"Everything a founder needs before the first meeting"</p>

                <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto mb-12">
                    {FEATURES
                        .iter()
                        .map(|feature| view! {
                            <a href=feature.href class="feature-card card p-8 text-left block">
                                <div class=format!(
                                    "inline-flex p-4 rounded-xl bg-gradient-to-br {} mb-6 text-3xl",
                                    feature.gradient,
                                )>{feature.icon}</div>
                                <h2 class="text-3xl font-bold text-slate-100 mb-4">{feature.title}</h2>
                                <p class="text-slate-400 text-lg leading-relaxed mb-6">{feature.description}</p>
                                <ul class="space-y-2">
                                    {feature
                                        .points
                                        .iter()
                                        .map(|point| view! {
                                            <li class="flex items-center space-x-2 text-slate-300">
                                                <span class="text-emerald-400">"✔"</span>
                                                <span>{*point}</span>
                                            </li>
                                        })
                                        .collect_view()}
                                </ul>
                            </a>
                        })
                        .collect_view()}
                </div>

                <a href="/market-insights" class="btn btn-secondary btn-large mb-20 inline-block">
                    "📊 Explore Market Insights →"
                </a>

                <div class="grid md:grid-cols-3 gap-8 max-w-4xl mx-auto">
                    {STATS
                        .iter()
                        .map(|(headline, caption, class)| view! {
                            <div class="stat-tile">
                                <div class=format!("text-4xl font-bold mb-2 {}", class)>{*headline}</div>
                                <div class="text-slate-500">{*caption}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </main>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <main class="page theme-landing">
            <div class="container mx-auto px-4 py-20 text-center">
                <h1 class="text-6xl font-black text-slate-100 mb-4">"404"</h1>
                <p class="text-xl text-slate-400 mb-8">"This page could not be found."</p>
                <a href="/" class="btn btn-primary">"Back to Home"</a>
            </div>
        </main>
    }
}
