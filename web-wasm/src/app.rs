//! メインアプリケーションコンポーネント（ルーティング）

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::pages::idea_analyzer::IdeaAnalyzerPage;
use crate::pages::landing::{LandingPage, NotFoundPage};
use crate::pages::market_insights::MarketInsightsPage;
use crate::pages::pitch_practice::PitchPracticePage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <div class="app min-h-screen bg-gradient-to-br from-slate-950 via-slate-900 to-slate-950">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=LandingPage />
                    <Route path=path!("/idea-analyzer") view=IdeaAnalyzerPage />
                    <Route path=path!("/market-insights") view=MarketInsightsPage />
                    <Route path=path!("/pitch-practice") view=PitchPracticePage />
                </Routes>
            </div>
        </Router>
    }
}
