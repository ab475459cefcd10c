//! ページヘッダーコンポーネント

use leptos::prelude::*;

/// トップへ戻るリンク
#[component]
pub fn BackLink() -> impl IntoView {
    view! {
        <a href="/" class="back-link mb-8 inline-flex items-center space-x-2 text-slate-400 hover:text-slate-200">
            <span>"←"</span>
            <span>"Back to Home"</span>
        </a>
    }
}

#[component]
pub fn PageHeader(
    icon: &'static str,
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] tagline: Option<&'static str>,
    /// タイトルのグラデーション
    gradient: &'static str,
) -> impl IntoView {
    view! {
        <header class="text-center mb-16">
            <div class=format!("inline-flex p-3 rounded-xl bg-gradient-to-br {} mb-6 text-3xl", gradient)>
                {icon}
            </div>
            <h1 class=format!(
                "text-6xl md:text-7xl font-black mb-6 bg-gradient-to-r {} bg-clip-text text-transparent",
                gradient,
            )>{title}</h1>
            <p class="text-xl md:text-2xl text-slate-400 max-w-3xl mx-auto leading-relaxed">
                {subtitle}
                {tagline.map(|t| view! {
                    <br />
                    <span class="text-slate-500 text-lg">{t}</span>
                })}
            </p>
        </header>
    }
}
