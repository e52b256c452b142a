//! Inline success/error banner used by the auth screens.

#[cfg(test)]
#[path = "banner_test.rs"]
mod banner_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn class(self) -> &'static str {
        match self {
            Self::Success => "banner banner--success",
            Self::Error => "banner banner--error",
        }
    }
}

/// Renders nothing while `message` is `None`. With `on_close` the banner gets
/// a dismiss button.
#[component]
pub fn Banner(
    kind: BannerKind,
    message: Signal<Option<String>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.with(Option::is_some)>
            <div class=kind.class() role="alert">
                <span class="banner__text">{move || message.get().unwrap_or_default()}</span>
                {on_close.map(|close| {
                    view! {
                        <button
                            class="banner__close"
                            type="button"
                            aria-label="Dismiss"
                            on:click=move |_| close.run(())
                        >
                            "×"
                        </button>
                    }
                })}
            </div>
        </Show>
    }
}
