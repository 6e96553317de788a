//! Renders queued toasts and schedules their expiry.

use leptos::prelude::*;

use crate::state::toast::{ToastKind, ToastState};
#[cfg(feature = "hydrate")]
use crate::state::toast::TOAST_TTL_MS;

/// Show a toast from anywhere that can reach the toast context.
pub fn notify(toasts: RwSignal<ToastState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    match kind {
        ToastKind::Error => log::warn!("toast: {message}"),
        ToastKind::Success | ToastKind::Info => log::debug!("toast: {message}"),
    }
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
        toasts.try_update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// The toast queue provided by the app root.
pub fn use_toasts() -> RwSignal<ToastState> {
    expect_context::<RwSignal<ToastState>>()
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-host" aria-live="polite">
            <For each=move || toasts.get().toasts key=|toast| toast.id let:toast>
                <div class=toast.kind.css_class() role="status">
                    <span class="toast__message">{toast.message.clone()}</span>
                    <button
                        type="button"
                        class="toast__close"
                        aria-label="Dismiss"
                        on:click=move |_| toasts.update(|t| t.dismiss(toast.id))
                    >
                        "✕"
                    </button>
                </div>
            </For>
        </div>
    }
}
