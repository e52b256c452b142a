//! Message input, tone/mode pickers, and the generate action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Left half of the workspace. A successful generation is handed to the
//! result panel through the shared `ResultState` signal.
//!
//! ERROR HANDLING
//! ==============
//! Failures show one generic line to the user; the underlying cause only goes
//! to the console log.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{Mode, Tone};
use crate::state::compose::ComposeState;
use crate::state::result::ResultState;

#[component]
pub fn ComposePanel() -> impl IntoView {
    let compose = expect_context::<RwSignal<ComposeState>>();
    let result = expect_context::<RwSignal<ResultState>>();
    let config = expect_context::<StoredValue<ClientConfig>>();

    let on_generate = move |_| {
        let Some(request) = compose.try_update(ComposeState::begin).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let endpoint = config.with_value(ClientConfig::email_endpoint);
            let outcome = crate::net::api::generate_email(&endpoint, &request).await;
            if let Err(e) = &outcome {
                log::error!("email generation failed: {e}");
            }
            if let Some(Some(email)) = compose.try_update(|c| c.finish(outcome)) {
                result.try_update(|r| r.show(email));
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (request, config, result);
    };

    view! {
        <section class="compose-panel">
            <label class="compose-panel__label" for="compose-message">
                "Message Content"
            </label>
            <textarea
                id="compose-message"
                class="compose-panel__message"
                rows="8"
                placeholder="Describe what you want to communicate..."
                prop:value=move || compose.with(|c| c.message.clone())
                on:input=move |ev| compose.update(|c| c.message = event_target_value(&ev))
            ></textarea>

            <span class="compose-panel__label">"Email Tone"</span>
            <div class="compose-panel__options">
                {Tone::ALL
                    .into_iter()
                    .map(|tone| {
                        view! {
                            <button
                                class="option-button"
                                class:option-button--active=move || compose.with(|c| c.tone == tone)
                                type="button"
                                on:click=move |_| compose.update(|c| c.tone = tone)
                            >
                                {tone.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <span class="compose-panel__label">"Email Mode"</span>
            <div class="compose-panel__options">
                {Mode::ALL
                    .into_iter()
                    .map(|mode| {
                        view! {
                            <button
                                class="option-button"
                                class:option-button--active=move || compose.with(|c| c.mode == mode)
                                type="button"
                                on:click=move |_| compose.update(|c| c.mode = mode)
                            >
                                {mode.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <Show when=move || compose.with(|c| c.error.is_some())>
                <p class="compose-panel__error">
                    {move || compose.with(|c| c.error.clone().unwrap_or_default())}
                </p>
            </Show>

            <button
                class="btn btn--primary compose-panel__generate"
                type="button"
                disabled=move || !compose.with(ComposeState::can_generate)
                on:click=on_generate
            >
                {move || if compose.with(|c| c.busy) { "Generating..." } else { "Generate Email" }}
            </button>
        </section>
    }
}
