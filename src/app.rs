//! Root application component with routing, the session context, and the
//! navigation guard.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::nav_bar::NavBar;
use crate::pages::{
    home::HomePage, interview::InterviewPage, login::LoginPage, ping::PingPage,
    register::RegisterPage,
};
use crate::routes::{LOGIN_PATH, NavigationDecision, check_navigation};
use crate::state::session::SessionState;

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

/// Pre-transition gate for protected views: renders its children only when
/// the guard allows the destination, otherwise redirects to the login route.
#[component]
fn Guarded(path: &'static str, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show
            when=move || check_navigation(path) == NavigationDecision::Allow
            fallback=|| view! { <Redirect path=LOGIN_PATH/> }
        >
            {children()}
        </Show>
    }
}

/// Root application component.
///
/// Constructs the shared session signal from the credential store's cached
/// profile, provides it via context, and sets up client-side routing. The
/// `/interview` route is the one entry in the route table with
/// `requires_auth`, so it renders through [`Guarded`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::restore());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/coach-client.css"/>
        <Title text="AI Interview Coach"/>

        <Router>
            <NavBar/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("ping") view=PingPage/>
                <Route
                    path=StaticSegment("interview")
                    view=|| {
                        view! {
                            <Guarded path="/interview">
                                <InterviewPage/>
                            </Guarded>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}
