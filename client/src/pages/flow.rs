//! Bridges the pure screen state machines in `crate::state` to browser
//! timers, router navigation, and the identity client.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::IdentityClient;
use crate::state::screen::{FederatedFlow, HasBanners, ScreenAction, apply_screen_action};
use crate::util::schedule::{Scheduled, run_after};

/// Fire `task` after its delay. Does nothing if the screen has unmounted by then.
pub(crate) fn schedule_screen_action<S, F>(screen: RwSignal<S>, navigate: F, task: Scheduled<ScreenAction>)
where
    S: HasBanners + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    let Scheduled { after, action } = task;
    run_after(after, move || {
        if let Some(Some(path)) = screen.try_update(|s| apply_screen_action(s, action)) {
            navigate(path, NavigateOptions::default());
        }
    });
}

/// Start a federated sign-in; the page is replaced by the provider's on success.
pub(crate) fn start_federated<S>(identity: IdentityClient, screen: RwSignal<S>, return_path: &'static str)
where
    S: FederatedFlow + Send + Sync + 'static,
{
    if !screen.try_update(S::begin_federated).unwrap_or(false) {
        return;
    }
    leptos::task::spawn_local(async move {
        if let Err(e) = identity.sign_in_federated(return_path).await {
            log::warn!("federated sign-in did not start: {e}");
            screen.try_update(|s| s.fail(&e));
        }
    });
}

/// Finish a federated sign-in if this page load is the provider's redirect back.
pub(crate) fn resume_federated<S, F>(identity: IdentityClient, screen: RwSignal<S>, navigate: F)
where
    S: FederatedFlow + Send + Sync + 'static,
    F: Fn(&str, NavigateOptions) + 'static,
{
    leptos::task::spawn_local(async move {
        if !screen.try_update(S::begin_federated).unwrap_or(false) {
            return;
        }
        match identity.complete_federated().await {
            Ok(true) => {
                if let Some(task) = screen.try_update(S::federated_succeeded) {
                    schedule_screen_action(screen, navigate, task);
                }
            }
            Ok(false) => {
                screen.try_update(S::abandon);
            }
            Err(e) => {
                log::warn!("federated sign-in failed: {e}");
                screen.try_update(|s| s.fail(&e));
            }
        }
    });
}
