//! Top navigation bar showing the current identity and a logout action.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::UserProfile;
use crate::routes::LOGIN_PATH;
use crate::state::session::SessionState;

/// Navigation bar — reads the shared session signal, so it re-renders on
/// login and logout without any explicit refresh.
#[component]
pub fn NavBar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let who = move || {
        session
            .get()
            .current()
            .map(UserProfile::display_name)
    };

    let on_logout = move |_| {
        session.update(SessionState::logout);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="nav-bar">
            <a class="nav-bar__brand" href="/">"AI Interview Coach"</a>
            <a class="nav-bar__link" href="/interview">"Interviews"</a>
            <a class="nav-bar__link" href="/ping">"Ping"</a>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || session.get().is_authenticated()
                fallback=|| {
                    view! {
                        <a class="nav-bar__link" href="/login">"Log in"</a>
                        <a class="nav-bar__link" href="/register">"Register"</a>
                    }
                }
            >
                <span class="nav-bar__user">{who}</span>
                <button class="btn nav-bar__logout" on:click=on_logout.clone()>
                    "Log out"
                </button>
            </Show>
        </nav>
    }
}
