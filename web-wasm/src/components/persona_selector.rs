//! ペルソナ選択コンポーネント

use leptos::prelude::*;
use pitch_coach_common::Persona;

#[component]
pub fn PersonaSelector<F>(
    selected: ReadSignal<Persona>,
    on_change: F,
    disabled: ReadSignal<bool>,
) -> impl IntoView
where
    F: Fn(Persona) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="card">
            <div class="mb-8">
                <h2 class="text-3xl font-bold mb-2 bg-gradient-to-r from-indigo-400 to-purple-400 bg-clip-text text-transparent">
                    "Choose Your Expert"
                </h2>
                <p class="text-slate-400">"Select the perspective that matters most for your pitch"</p>
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {Persona::ALL
                    .into_iter()
                    .map(|persona| {
                        let on_change = on_change.clone();
                        let is_selected = move || selected.get() == persona;
                        view! {
                            <button
                                class=move || {
                                    let mut class = String::from("persona-card group relative p-6 rounded-xl border-2 transition-all");
                                    if is_selected() {
                                        class.push_str(" selected");
                                    }
                                    if disabled.get() {
                                        class.push_str(" opacity-50");
                                    }
                                    class
                                }
                                disabled=move || disabled.get()
                                on:click=move |_| on_change(persona)
                            >
                                <Show when=is_selected>
                                    <div class="absolute top-4 right-4 w-6 h-6 rounded-full bg-indigo-500 flex items-center justify-center text-white text-sm">
                                        "✓"
                                    </div>
                                </Show>
                                <div class=format!(
                                    "inline-flex p-3 rounded-xl mb-4 bg-gradient-to-br {} text-2xl",
                                    persona.gradient(),
                                )>{persona.icon()}</div>
                                <div class="text-left">
                                    <h3 class="text-lg font-bold mb-2 text-slate-100">{persona.title()}</h3>
                                    <p class="text-sm text-slate-400 leading-relaxed">{persona.description()}</p>
                                </div>
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
