//! Authenticated shell around every `/dashboard/*` page.
//!
//! SYSTEM CONTEXT
//! ==============
//! While the stored session is being restored the whole viewport shows a
//! loader. Once restored, an anonymous visitor is sent to `/login`; a signed
//! in user gets the sidebar, header and the matched child route.

use leptos::prelude::*;
use leptos_router::components::Outlet;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::dashboard_header::DashboardHeader;
use crate::components::loader::Loader;
use crate::components::sidebar::{MobileSidebar, Sidebar};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(auth, use_navigate());

    // The mobile overlay closes whenever the route changes.
    let pathname = use_location().pathname;
    Effect::new(move || {
        pathname.track();
        ui.update(|u| u.sidebar_open = false);
    });

    let signed_in = move || auth.with(|a| a.user.is_some());
    let restoring = move || auth.with(|a| a.loading);

    view! {
        <Show
            when=signed_in
            fallback=move || view! {
                <Show when=restoring>
                    <Loader full_screen=true/>
                </Show>
            }
        >
            <div class="dashboard">
                <Sidebar/>
                <MobileSidebar/>
                <div class="dashboard__main">
                    <DashboardHeader/>
                    <main class="dashboard__content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}
