//! Top bar of the dashboard: mobile menu button, title, current user.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::format::avatar_initial;

#[component]
pub fn DashboardHeader() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let username = move || auth.with(|a| a.username().unwrap_or_default().to_owned());
    let initial = move || avatar_initial(&username());

    view! {
        <header class="dashboard-header">
            <button
                type="button"
                class="dashboard-header__menu"
                aria-label="Open sidebar"
                on:click=move |_| ui.update(|u| u.sidebar_open = true)
            >
                "☰"
            </button>
            <h1 class="dashboard-header__title">"Dashboard"</h1>
            <div class="dashboard-header__user">
                <span class="avatar">{initial}</span>
                <span class="dashboard-header__username">{username}</span>
            </div>
        </header>
    }
}
