//! Spinner with a caption, inline or covering the viewport.

use leptos::prelude::*;

#[component]
pub fn Loader(
    #[prop(optional)] full_screen: bool,
    #[prop(into, default = "Loading...".to_owned())] text: String,
) -> impl IntoView {
    let show_text = !text.is_empty();
    view! {
        <div class="loader" class:loader--fullscreen=full_screen role="status" aria-live="polite">
            <span class="loader__spinner" aria-hidden="true"></span>
            <Show when=move || show_text>
                <span class="loader__text">{text.clone()}</span>
            </Show>
        </div>
    }
}
