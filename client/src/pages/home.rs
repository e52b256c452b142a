//! Protected generation workspace at `/`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the compose and result signals for its lifetime and provides them to
//! the two panels. Logging out resets both before the session is dropped, so
//! nothing from this visit survives into the next sign-in.

use leptos::prelude::*;

use crate::components::compose_panel::ComposePanel;
use crate::components::result_panel::ResultPanel;
use crate::state::auth::IdentityClient;
use crate::state::compose::ComposeState;
use crate::state::result::ResultState;
use crate::util::browser::confirm;

const LOGOUT_CONFIRM: &str = "Are you sure you want to logout?";
const LOGGED_OUT: &str = "Logged out successfully!";

#[component]
pub fn HomePage() -> impl IntoView {
    let identity = expect_context::<IdentityClient>();
    let compose = RwSignal::new(ComposeState::default());
    let result = RwSignal::new(ResultState::default());
    provide_context(compose);
    provide_context(result);

    let on_logout = move |_| {
        if !confirm(LOGOUT_CONFIRM) {
            return;
        }
        compose.update(ComposeState::reset);
        result.update(ResultState::clear);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match identity.sign_out().await {
                Ok(()) => crate::util::browser::alert(LOGGED_OUT),
                Err(e) => log::error!("logout failed: {e}"),
            }
        });

        #[cfg(not(feature = "hydrate"))]
        let _ = (identity, LOGGED_OUT);
    };

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <div class="home-page__titles">
                    <h1 class="home-page__title">"Nora AI"</h1>
                    <p class="home-page__subtitle">
                        "Create customised emails powered by artificial intelligence"
                    </p>
                </div>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__logout" type="button" title="Logout" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <main class="home-page__workspace">
                <ComposePanel/>
                <ResultPanel/>
            </main>
        </div>
    }
}
