//! Public landing page.

use leptos::prelude::*;

use crate::net::types::UserProfile;
use crate::state::session::SessionState;

/// Landing page — greets a logged-in visitor by name, otherwise points
/// at the login and registration pages.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let greeting = move || {
        session.get().current().map(UserProfile::display_name).map_or_else(
            || "Practice interviews with AI feedback.".to_owned(),
            |name| format!("Welcome back, {name}."),
        )
    };

    view! {
        <div class="home-page">
            <h1>"AI Interview Coach"</h1>
            <p class="home-page__tagline">{greeting}</p>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <div class="home-page__actions">
                            <a class="btn btn--primary" href="/login">"Log in"</a>
                            <a class="btn" href="/register">"Register"</a>
                        </div>
                    }
                }
            >
                <div class="home-page__actions">
                    <a class="btn btn--primary" href="/interview">"Go to interviews"</a>
                </div>
            </Show>
        </div>
    }
}
