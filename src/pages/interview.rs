//! Interview page: the protected view behind the navigation guard.
//!
//! The guard only checks token presence; a token the server no longer
//! accepts surfaces here as a 401 on the session list, at which point the
//! page logs the visitor out and sends them back to the login form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::routes::LOGIN_PATH;
use crate::state::session::SessionState;

/// Lists the visitor's interview sessions.
#[component]
pub fn InterviewPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let sessions = LocalResource::new(|| api::my_sessions());

    // Stale-token reaction: a 401 means the stored token was rejected
    // server-side, so drop the session and return to login.
    Effect::new(move || {
        if let Some(Err(e)) = sessions.get() {
            if e.is_unauthorized() {
                session.update(SessionState::logout);
                navigate(LOGIN_PATH, NavigateOptions::default());
            }
        }
    });

    view! {
        <div class="interview-page">
            <h1>"Your interview sessions"</h1>
            <Suspense fallback=move || view! { <p>"Loading sessions..."</p> }>
                {move || {
                    sessions
                        .get()
                        .map(|result| match result {
                            Ok(list) => {
                                if list.is_empty() {
                                    view! {
                                        <p class="interview-page__empty">
                                            "No sessions yet. Start one from a scenario."
                                        </p>
                                    }
                                        .into_any()
                                } else {
                                    view! {
                                        <ul class="interview-page__list">
                                            {list
                                                .into_iter()
                                                .map(|s| {
                                                    let started = s.started_at.unwrap_or_default();
                                                    view! {
                                                        <li class="interview-page__item">
                                                            <span>{format!("Session #{}", s.id)}</span>
                                                            <span>{format!("scenario {}", s.scenario_id)}</span>
                                                            <span class="interview-page__status">{s.status}</span>
                                                            <span class="interview-page__date">{started}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    }
                                        .into_any()
                                }
                            }
                            Err(e) => {
                                view! {
                                    <p class="interview-page__error">{api::as_error(&e)}</p>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
