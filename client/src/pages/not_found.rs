//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    // Server-rendered misses answer with a real 404.
    #[cfg(feature = "ssr")]
    if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
        response.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <main class="not-found">
            <p class="not-found__code">"404"</p>
            <h1 class="not-found__title">"Page not found"</h1>
            <p class="not-found__text">"The page you are looking for might have been removed, had its name changed, or is temporarily unavailable."</p>
            <a class="btn btn--primary" href="/">"Return Home"</a>
        </main>
    }
}
