//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::protected::ProtectedRoute;
use crate::config::ClientConfig;
use crate::pages::{home::HomePage, signin::SignInPage, signup::SignUpPage, verify_email::VerifyEmailPage};
use crate::state::auth::IdentityClient;

pub const HOME_PATH: &str = "/";
pub const SIGNIN_PATH: &str = "/signin";
pub const SIGNUP_PATH: &str = "/signup";
pub const VERIFY_EMAIL_PATH: &str = "/email/auth";
/// Sign-in reached right after a password sign-up.
pub const SIGNIN_FROM_SIGNUP_PATH: &str = "/signin?from=signup";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides configuration and the identity client, starts session restore,
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let identity = IdentityClient::new(config.identity.clone());
    identity.restore();

    provide_context(identity);
    provide_context(StoredValue::new(config));

    view! {
        <Stylesheet id="leptos" href="/pkg/nora.css"/>
        <Title text="Nora AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <ProtectedRoute><HomePage/></ProtectedRoute> }
                />
                <Route path=StaticSegment("signin") view=SignInPage/>
                <Route path=StaticSegment("signup") view=SignUpPage/>
                <Route path=(StaticSegment("email"), StaticSegment("auth")) view=VerifyEmailPage/>
            </Routes>
        </Router>
    }
}
