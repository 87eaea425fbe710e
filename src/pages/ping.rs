//! Ping page: connectivity check against the API root.

use leptos::prelude::*;

use crate::net::api;

/// Fetches the API root message and shows it, or the normalized failure.
#[component]
pub fn PingPage() -> impl IntoView {
    let ping = LocalResource::new(|| api::ping());

    view! {
        <div class="ping-page">
            <h1>"API status"</h1>
            <Suspense fallback=move || view! { <p>"Pinging..."</p> }>
                {move || {
                    ping.get()
                        .map(|result| match result {
                            Ok(message) => {
                                view! { <p class="ping-page__ok">{message}</p> }.into_any()
                            }
                            Err(e) => {
                                view! { <p class="ping-page__error">{api::as_error(&e)}</p> }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
