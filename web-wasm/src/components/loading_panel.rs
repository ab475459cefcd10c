//! 解析中表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingPanel(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    #[prop(optional)] steps: Vec<&'static str>,
) -> impl IntoView {
    view! {
        <div class="card p-16 text-center">
            <div class="relative mb-8">
                <div class="spinner mx-auto"></div>
                <div class="absolute inset-0 flex items-center justify-center text-3xl animate-pulse">
                    {icon}
                </div>
            </div>
            <h3 class="text-3xl font-bold text-slate-100 mb-4">{title}</h3>
            <p class="text-slate-400 text-lg max-w-md mx-auto mb-6">{description}</p>
            <div class="space-y-3 max-w-md mx-auto text-left">
                {steps
                    .into_iter()
                    .map(|step| {
                        view! {
                            <div class="flex items-center space-x-3 text-slate-500">
                                <div class="w-2 h-2 bg-purple-500 rounded-full animate-pulse"></div>
                                <span>{step}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
