//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::api::{self, ApiError};
use crate::pages::{dashboard::DashboardPage, login::LoginPage, register::RegisterPage};
use crate::state::auth::AuthState;
use crate::state::dashboard::DashboardState;
use crate::util::{session, task};

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
/// Provides the shared state contexts, restores a stored session once the app
/// is running in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    let dashboard = RwSignal::new(DashboardState::default());

    provide_context(auth);
    provide_context(dashboard);

    // Effects only run after hydration, so SSR output stays in the loading state.
    Effect::new(move || restore_session(auth));

    view! {
        <Stylesheet id="leptos" href="/pkg/bankdash.css"/>
        <Title text="Bank Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}

/// Load the stored session and check its token with the backend.
///
/// A token the backend rejects clears the session, unless the user has signed
/// out or in again meanwhile. Transport failures keep it.
fn restore_session(auth: RwSignal<AuthState>) {
    let Some(stored) = session::load() else {
        auth.set(AuthState::signed_out());
        return;
    };
    let token = stored.token.clone();
    auth.set(AuthState::signed_in(stored));

    task::spawn(async move {
        match api::validate_token(&token).await {
            Ok(()) => {}
            Err(ApiError::Status { status, .. }) => {
                if !session::is_current(session::token().as_deref(), &token) {
                    log::debug!("ignoring rejection of a replaced session ({status})");
                    return;
                }
                log::info!("stored session rejected ({status}); signing out");
                session::clear();
                auth.set(AuthState::signed_out());
            }
            Err(e) => log::warn!("session validation skipped: {e}"),
        }
    });
}
