//! Route wrapper that only renders its children for a signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the generation workspace at `/`. Verification is not checked here;
//! `/email/auth` owns that decision.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::IdentityClient;
use crate::util::auth::{GuardState, guard_state, install_unauth_redirect};

/// Full-screen placeholder shown while the session resolves.
#[component]
pub fn LoadingScreen(#[prop(default = "Loading...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading-screen">
            <div class="loading-screen__spinner"></div>
            <p class="loading-screen__label">{label}</p>
        </div>
    }
}

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let identity = expect_context::<IdentityClient>();
    let session = identity.session();
    install_unauth_redirect(session, use_navigate());

    move || match session.with(guard_state) {
        GuardState::Loading => view! { <LoadingScreen/> }.into_any(),
        GuardState::Unauthenticated => view! { <LoadingScreen label="Redirecting..."/> }.into_any(),
        GuardState::Authenticated => children().into_any(),
    }
}
