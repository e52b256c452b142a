//! Email-verification gate at `/email/auth`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached after every sign-in. Verified users pass straight through to the
//! workspace, signed-out visitors go back to `/signin`, and everyone else can
//! resend the verification link or log out.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::banner::{Banner, BannerKind};
use crate::components::protected::LoadingScreen;
use crate::state::auth::IdentityClient;
use crate::state::verify::{VerifyState, verification_redirect};

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let identity = expect_context::<IdentityClient>();
    let session = identity.session();
    let navigate = use_navigate();
    let screen = RwSignal::new(VerifyState::default());

    // Also covers logout: the cleared session sends the visitor to /signin.
    let navigate_gate = navigate.clone();
    Effect::new(move || {
        if let Some(path) = session.with(verification_redirect) {
            navigate_gate(path, NavigateOptions::default());
        }
    });

    let on_resend = move |_| {
        let Some(user) = identity.current_user() else {
            return;
        };
        if !screen.try_update(VerifyState::begin_resend).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let task = match identity.send_verification_email(&user).await {
                    Ok(()) => screen.try_update(VerifyState::resend_succeeded),
                    Err(e) => {
                        log::warn!("verification email not sent: {e}");
                        screen.try_update(|s| s.resend_failed(&e))
                    }
                };
                if let Some(task) = task {
                    super::flow::schedule_screen_action(screen, navigate, task);
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        let _ = (user, &navigate);
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = identity.sign_out().await {
                screen.try_update(|s| s.sign_out_failed(&e));
            }
        });
    };

    let awaiting_verification = move || {
        session.with(|a| a.is_signed_in() && !a.is_verified())
    };
    let email = move || {
        session.with(|a| a.user.as_ref().and_then(|u| u.email.clone()).unwrap_or_default())
    };
    let success = Signal::derive(move || screen.with(|s| s.banners.success.clone()));
    let error = Signal::derive(move || screen.with(|s| s.banners.error.clone()));

    view! {
        <Show when=awaiting_verification fallback=|| view! { <LoadingScreen/> }>
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Verify Your Email"</h1>
                    <p class="auth-card__subtitle">
                        "We've sent a verification link to "
                        <strong>{email}</strong>
                    </p>
                    <p class="auth-card__hint">
                        "Please check your inbox and click the link to verify your account."
                    </p>

                    <Banner kind=BannerKind::Success message=success/>
                    <Banner kind=BannerKind::Error message=error/>

                    <button
                        class="auth-button"
                        type="button"
                        disabled=move || screen.with(|s| s.sending)
                        on:click=on_resend.clone()
                    >
                        {move || {
                            if screen.with(|s| s.sending) { "Sending..." } else { "Resend Verification Email" }
                        }}
                    </button>
                    <button class="auth-button auth-button--secondary" type="button" on:click=on_logout>
                        "Logout"
                    </button>
                </div>
            </div>
        </Show>
    }
}
