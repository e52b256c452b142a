//! Account registration at `/signup`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::app::SIGNIN_PATH;
use crate::components::banner::{Banner, BannerKind};
use crate::components::protected::LoadingScreen;
use crate::state::auth::IdentityClient;
use crate::state::signup::{SignUpState, signed_up_redirect};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let identity = expect_context::<IdentityClient>();
    let session = identity.session();
    let navigate = use_navigate();
    let screen = RwSignal::new(SignUpState::default());

    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        let target = session.with(|auth| screen.with(|s| signed_up_redirect(auth, s)));
        if let Some(path) = target {
            navigate_signed_in(path, NavigateOptions::default());
        }
    });

    #[cfg(feature = "hydrate")]
    super::flow::resume_federated(identity, screen, navigate.clone());

    let navigate_submit = navigate.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((email, password)) = screen.try_update(SignUpState::begin_password).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate_submit.clone();
            leptos::task::spawn_local(async move {
                match identity.sign_up_with_password(email.trim(), &password).await {
                    Ok(()) => {
                        if let Some(task) = screen.try_update(SignUpState::password_succeeded) {
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
        super::flow::start_federated(identity, screen, crate::app::SIGNUP_PATH);
    };

    let busy = move || !screen.with(SignUpState::can_submit);
    let success = Signal::derive(move || screen.with(|s| s.banners.success.clone()));
    let error = Signal::derive(move || screen.with(|s| s.banners.error.clone()));
    let dismiss = Callback::new(move |()| screen.update(|s| s.banners.dismiss_error()));

    view! {
        <Show
            when=move || !session.with(|a| a.loading)
            fallback=|| view! { <LoadingScreen/> }
        >
            <div class="auth-page">
                <div class="auth-card">
                    <h1>"Create Account"</h1>
                    <p class="auth-card__subtitle">"Join Nora AI and start writing better emails"</p>

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
                        <input
                            class="auth-input"
                            type="password"
                            required=true
                            placeholder="Confirm password"
                            prop:value=move || screen.with(|s| s.confirm_password.clone())
                            on:input=move |ev| {
                                screen.update(|s| s.confirm_password = event_target_value(&ev));
                            }
                        />
                        <button class="auth-button" type="submit" disabled=busy>
                            {move || {
                                if screen.with(|s| s.navigating) { "Creating account..." } else { "Sign up" }
                            }}
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
                        "Already have an account? "
                        <A href=SIGNIN_PATH>"Sign in"</A>
                    </p>
                </div>
            </div>
        </Show>
    }
}
