//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Binds the small JSON API and health check next to Leptos SSR rendering
//! under a single Axum router. The sidebar resize strategy is passed to the
//! server-only HTML shell, which writes it onto `<body>`.

pub mod nav;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Landing page for `/`.
pub const HOME_PATH: &str = "/dashboard/overview";

fn api_routes() -> Router {
    Router::new()
        .route("/", get(redirect_home))
        .route("/api/nav", get(nav::list_nav))
        .route("/healthz", get(healthz))
}

async fn redirect_home() -> Redirect {
    Redirect::temporary(HOME_PATH)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// API routes + Leptos SSR pages + `/pkg` static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded.
pub fn app(config: &ServerConfig) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let resize = config.resize;

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone(), resize)
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
