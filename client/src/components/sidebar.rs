//! Dashboard navigation: the fixed desktop sidebar and the mobile overlay.
//!
//! DESIGN
//! ======
//! Both variants render the same nav list. The Users entry is only listed
//! for admins; the page itself also refuses non-admins.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::auth::{can_manage_users, sign_out};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

const NAV_ITEMS: [NavItem; 4] = [
    NavItem { path: "/dashboard/overview", label: "Dashboard", icon: "⌂" },
    NavItem { path: "/dashboard/sugar-history", label: "Sugar History", icon: "☰" },
    NavItem { path: "/dashboard/users", label: "Users", icon: "☺" },
    NavItem { path: "/dashboard/statistics", label: "Statistics", icon: "▤" },
];

const USERS_PATH: &str = "/dashboard/users";

/// Entries visible to the current user.
pub fn nav_items(is_admin: bool) -> Vec<NavItem> {
    NAV_ITEMS.into_iter().filter(|item| is_admin || item.path != USERS_PATH).collect()
}

/// Whether `item_path` should be highlighted for `current`.
pub fn is_active(current: &str, item_path: &str) -> bool {
    let current = current.trim_end_matches('/');
    current == item_path || current.strip_prefix(item_path).is_some_and(|rest| rest.starts_with('/'))
}

#[component]
fn NavList() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let pathname = use_location().pathname;
    let items = move || nav_items(can_manage_users(&auth.get()));

    view! {
        <nav class="sidebar__nav">
            <ul>
                <For each=items key=|item| item.path let:item>
                    <li>
                        <a
                            href=item.path
                            class="sidebar__link"
                            class:sidebar__link--active=move || is_active(&pathname.get(), item.path)
                        >
                            <span class="sidebar__icon" aria-hidden="true">{item.icon}</span>
                            {item.label}
                        </a>
                    </li>
                </For>
            </ul>
        </nav>
    }
}

#[component]
fn SidebarBody() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let on_logout = move |_| sign_out(auth, &navigate);

    view! {
        <div class="sidebar__body">
            <a href="/dashboard/overview" class="sidebar__brand">
                <span class="brand-mark" aria-hidden="true">"◆"</span>
                <span class="brand-name">"ScanSek"</span>
            </a>
            <NavList/>
            <div class="sidebar__footer">
                <button type="button" class="sidebar__link sidebar__logout" on:click=on_logout>
                    <span class="sidebar__icon" aria-hidden="true">"⎋"</span>
                    "Logout"
                </button>
            </div>
        </div>
    }
}

/// Always-visible sidebar on wide screens.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar sidebar--desktop">
            <SidebarBody/>
        </aside>
    }
}

/// Slide-in sidebar for narrow screens, driven by [`UiState::sidebar_open`].
#[component]
pub fn MobileSidebar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let close = move || ui.update(|u| u.sidebar_open = false);

    view! {
        <Show when=move || ui.get().sidebar_open>
            <div class="sidebar-overlay">
                <div class="sidebar-overlay__backdrop" on:click=move |_| close()></div>
                <aside class="sidebar sidebar--mobile">
                    <button
                        type="button"
                        class="sidebar__close"
                        aria-label="Close sidebar"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                    <SidebarBody/>
                </aside>
            </div>
        </Show>
    }
}
