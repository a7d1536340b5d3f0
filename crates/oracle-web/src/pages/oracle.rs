//! Oracle Section
//!
//! Renders [`OracleState`]: the signal holds the whole state machine and
//! every transition goes through its `begin` / `settle`.

use leptos::prelude::*;
use oracle_core::OracleState;

use crate::api;
use crate::components::{ArrowRight, Loader, Sparkles};

/// Response as displayed: wrapped in plain double quotes
pub fn quote_response(text: &str) -> String {
    format!("\"{text}\"")
}

#[component]
pub fn OracleSection() -> impl IntoView {
    let state = RwSignal::new(OracleState::new());
    let busy = move || state.with(OracleState::is_pending);

    let submit = move || {
        if state.with_untracked(|s| s.check_submit().is_err()) {
            return;
        }
        let Some(Ok(prompt)) = state.try_update(OracleState::begin) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let outcome = api::consult(&prompt).await;
            state.update(|s| {
                s.settle(&outcome);
            });
        });
    };

    view! {
        <section id="oracle" class="py-32 relative">
            <div class="absolute inset-0 bg-gradient-to-b from-transparent to-neutral-900/80 pointer-events-none"></div>

            <div class="container mx-auto px-6 relative z-10 max-w-2xl text-center">
                <div class="mb-8 flex justify-center">
                    <Sparkles class="text-white opacity-50 w-8 h-8" />
                </div>
                <h2 class="serif text-3xl md:text-5xl text-white mb-6">"Ask the Oracle"</h2>
                <p class="text-gray-400 mb-12 font-light">
                    "Query the machine spirit. Ask about design, life, or the code that binds us."
                </p>

                <div class="glass p-1 rounded-full flex items-center shadow-2xl shadow-purple-900/10 mb-8">
                    <input
                        type="text"
                        placeholder="What is the essence of beauty?"
                        class="flex-1 bg-transparent border-none outline-none text-white px-6 py-3 placeholder-gray-600 font-light"
                        prop:value=move || state.with(|s| s.query().to_owned())
                        on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                submit();
                            }
                        }
                    />
                    <button
                        class="bg-white text-black rounded-full w-12 h-12 flex items-center justify-center hover:bg-gray-200 transition-colors disabled:opacity-50"
                        on:click=move |_| submit()
                        disabled=busy
                    >
                        {move || {
                            if busy() {
                                view! { <Loader class="w-5 h-5" /> }.into_any()
                            } else {
                                view! { <ArrowRight class="w-5 h-5" /> }.into_any()
                            }
                        }}
                    </button>
                </div>

                <div class="min-h-[100px] flex items-center justify-center">
                    {move || state.with(|s| s.view().response.map(|text| {
                        let quoted = quote_response(text);
                        view! { <p class="text-xl serif text-gray-200 leading-relaxed italic">{quoted}</p> }
                    }))}
                    {move || state.with(|s| s.view().error.map(|text| {
                        let text = text.to_owned();
                        view! { <p class="text-red-400 text-sm">{text}</p> }
                    }))}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_uses_straight_quotes() {
        assert_eq!(
            quote_response("Beauty is silence made visible."),
            "\"Beauty is silence made visible.\""
        );
        assert!(!quote_response("x").contains('\u{201c}'));
    }
}
