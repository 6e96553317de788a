//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
    hooks::use_location,
};

use crate::components::toast_host::ToastHost;
use crate::pages::{
    dashboard::DashboardLayout, landing::LandingPage, login::LoginPage, not_found::NotFoundPage,
    overview::OverviewPage, statistics::StatisticsPage, sugar_history::SugarHistoryPage, users::UsersPage,
};
use crate::services::sugar::SugarService;
use crate::services::users::UserService;
use crate::state::{auth::AuthState, toast::ToastState, ui::UiState};
use crate::util::auth::HOME_PATH;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Jump back to the top of the page on every route change.
#[component]
fn ScrollToTop() -> impl IntoView {
    let pathname = use_location().pathname;
    Effect::new(move || {
        pathname.track();
        #[cfg(feature = "hydrate")]
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });
}

/// Root application component.
///
/// Provides the shared state signals and mock service handles, restores the
/// stored session once in the browser, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::restoring());
    provide_context(auth);
    provide_context(RwSignal::new(UiState::default()));
    provide_context(RwSignal::new(ToastState::default()));
    provide_context(SugarService::default());
    provide_context(UserService::default());

    // Effects only run in the browser, where local storage exists.
    Effect::new(move || {
        auth.set(AuthState::restored(crate::util::storage::load_session()));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/scansek.css"/>
        <Title text="ScanSek"/>

        <Router>
            <ScrollToTop/>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=LandingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=|| view! { <Redirect path=HOME_PATH/> }/>
                    <Route path=StaticSegment("overview") view=OverviewPage/>
                    <Route path=StaticSegment("sugar-history") view=SugarHistoryPage/>
                    <Route path=StaticSegment("users") view=UsersPage/>
                    <Route path=StaticSegment("statistics") view=StatisticsPage/>
                </ParentRoute>
            </Routes>
        </Router>
        <ToastHost/>
    }
}
