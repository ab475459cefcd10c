//! エラー表示コンポーネント

use leptos::prelude::*;

#[component]
pub fn ErrorBanner(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="mb-6 p-4 bg-red-500/10 border border-red-500/30 rounded-xl text-red-400">
                <div class="flex items-center space-x-2">
                    <span>"⚠️"</span>
                    <span>{move || message.get().unwrap_or_default()}</span>
                </div>
            </div>
        </Show>
    }
}
