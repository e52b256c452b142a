//! Email/password and federated sign-in at `/signin`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every successful sign-in lands on the verification gate after a short
//! banner. `?from=signup` marks a visitor who just registered; their fresh
//! session must not bounce them away before they sign in explicitly.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::app::SIGNUP_PATH;
use crate::components::banner::{Banner, BannerKind};
use crate::components::protected::LoadingScreen;
use crate::state::auth::IdentityClient;
use crate::state::signin::{SignInState, signed_in_redirect};

/// Query value marking arrival from a completed sign-up.
pub const FROM_SIGNUP: &str = "signup";

#[component]
pub fn SignInPage() -> impl IntoView {
    let identity = expect_context::<IdentityClient>();
    let session = identity.session();
    let navigate = use_navigate();
    let query = use_query_map();
    let screen = RwSignal::new(SignInState::default());

    let from_signup = move || query.with(|q| q.get("from").as_deref() == Some(FROM_SIGNUP));

    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        let target = session.with(|auth| screen.with(|s| signed_in_redirect(auth, from_signup(), s)));
        if let Some(path) = target {
            navigate_signed_in(path, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    super::flow::resume_federated(identity, screen, navigate.clone());

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if !screen.try_update(SignInState::begin).unwrap_or(false) {
            return;
        }
        let (email, password) = screen.with_untracked(|s| (s.email.trim().to_owned(), s.password.clone()));

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match identity.sign_in_with_password(&email, &password).await {
                    Ok(()) => {
                        if let Some(task) = screen.try_update(|s| s.succeed(crate::state::signin::SIGNIN_SUCCESS)) {
                            super::flow::schedule_screen_action(screen, navigate, task);
                        }
                    }
                    Err(e) => {
                        screen.try_update(|s| s.fail(&e));
                    }
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (email, password, &navigate_submit);
    };

    let on_federated = move |_| {
        #[cfg(feature = "hydrate")]
        super::flow::start_federated(identity, screen, crate::app::SIGNIN_PATH);
    };

    let busy = move || !screen.with(SignInState::can_submit);
    let success = Signal::derive(move || {
        screen.with(|s| s.banners.success.as_ref().map(|m| format!("{m} Redirecting...")))
    });
    let error = Signal::derive(move || screen.with(|s| s.banners.error.clone()));
    let dismiss = Callback::new(move |()| screen.update(|s| s.banners.dismiss_error()));

    view! {
        <Show
            when=move || !session.with(|a| a.loading)
            fallback=|| view! { <LoadingScreen/> }
        >
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Welcome Back"</h1>
                    <p class="auth-card__subtitle">"Sign in to continue to Nora AI"</p>

                    <Banner kind=BannerKind::Success message=success/>
                    <Banner kind=BannerKind::Error message=error on_close=dismiss/>

                    <form class="auth-form" on:submit=on_submit.clone()>
                        <input
                            class="auth-input"
                            type="email"
                            required=true
                            placeholder="Email address"
                            prop:value=move || screen.with(|s| s.email.clone())
                            on:input=move |ev| screen.update(|s| s.email = event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            required=true
                            placeholder="Password"
                            prop:value=move || screen.with(|s| s.password.clone())
                            on:input=move |ev| screen.update(|s| s.password = event_target_value(&ev))
                        />
                        <button class="auth-button" type="submit" disabled=busy>
                            {move || if screen.with(|s| s.navigating) { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>

                    <div class="auth-divider">
                        <span>"Or"</span>
                    </div>
                    <button
                        class="auth-button auth-button--google"
                        type="button"
                        disabled=busy
                        on:click=on_federated
                    >
                        "Continue with Google"
                    </button>

                    <p class="auth-card__footer">
                        "Don't have an account? "
                        <A href=SIGNUP_PATH>"Sign up"</A>
                    </p>
                </div>
            </div>
        </Show>
    }
}
