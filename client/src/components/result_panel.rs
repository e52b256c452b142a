//! Generated email display with copy, clear, stats, and the mail hand-off.

use leptos::prelude::*;

use crate::state::result::ResultState;
use crate::util::browser::{copy_to_clipboard, set_location};
use crate::util::schedule::{Scheduled, run_after};

#[component]
pub fn ResultPanel() -> impl IntoView {
    let result = expect_context::<RwSignal<ResultState>>();
    let has_text = move || result.with(|r| r.generated.is_some());

    let on_copy = move |_| {
        let Some(Some((text, task))) = result.try_update(ResultState::copy) else {
            return;
        };
        copy_to_clipboard(&text);
        let Scheduled { after, action } = task;
        run_after(after, move || {
            result.try_update(|r| r.apply(action));
        });
    };

    let on_send = move |_| {
        if let Some(href) = result.with(ResultState::mailto) {
            set_location(&href);
        }
    };

    view! {
        <section class="result-panel">
            <header class="result-panel__header">
                <h2 class="result-panel__title">"Generated Email"</h2>
                <span class="toolbar__spacer"></span>
                <Show when=has_text>
                    <button
                        class="btn result-panel__clear"
                        type="button"
                        on:click=move |_| result.update(ResultState::clear)
                    >
                        "Clear"
                    </button>
                    <button class="btn result-panel__copy" type="button" on:click=on_copy>
                        {move || if result.with(|r| r.copied) { "Copied" } else { "Copy" }}
                    </button>
                </Show>
            </header>

            <Show
                when=has_text
                fallback=|| {
                    view! {
                        <div class="result-panel__empty">
                            "Your generated email will appear here"
                        </div>
                    }
                }
            >
                <pre class="result-panel__text">
                    {move || result.with(|r| r.text().unwrap_or_default().to_owned())}
                </pre>
                {move || {
                    result
                        .with(ResultState::stats)
                        .map(|stats| {
                            view! {
                                <div class="result-panel__stats">
                                    <span>{format!("Words: {}", stats.words)}</span>
                                    <span>{format!("Characters: {}", stats.characters)}</span>
                                    <span>{format!("Lines: {}", stats.lines)}</span>
                                </div>
                            }
                        })
                }}

                <div class="send-panel">
                    <h3 class="send-panel__title">"Send Email"</h3>
                    <input
                        class="send-panel__input"
                        type="email"
                        placeholder="Recipient email address"
                        prop:value=move || result.with(|r| r.recipient.clone())
                        on:input=move |ev| result.update(|r| r.recipient = event_target_value(&ev))
                    />
                    <input
                        class="send-panel__input"
                        type="text"
                        placeholder="Subject (optional)"
                        prop:value=move || result.with(|r| r.subject.clone())
                        on:input=move |ev| result.update(|r| r.subject = event_target_value(&ev))
                    />
                    <button
                        class="btn btn--primary send-panel__send"
                        type="button"
                        disabled=move || !result.with(ResultState::can_send)
                        on:click=on_send
                    >
                        "Open in Mail App"
                    </button>
                </div>
            </Show>
        </section>
    }
}
