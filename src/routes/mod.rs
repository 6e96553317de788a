//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no API surface: the dashboard's data comes from in-browser mock
//! services. The host only renders the Leptos app, serves its static bundle,
//! and exposes a health probe. Unknown paths fall through to the app, whose
//! not-found route sets the 404 status.

pub mod health;

use std::path::PathBuf;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, file_and_error_handler, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Full application router over the given Leptos site options.
pub fn app(leptos_options: LeptosOptions) -> Router {
    let routes = generate_route_list(client::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Router::new()
        .merge(health::router())
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .fallback(file_and_error_handler(client::app::shell))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(leptos_options)
}
