//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server only hosts the UI: Leptos SSR for `/login` and `/dashboard`,
//! the compiled WASM/CSS under `/pkg`, a health check, and the `/` redirect.
//! Links and authentication are external HTTP services the browser calls
//! directly.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ServerError;

/// Routes that do not need Leptos options.
fn base_routes() -> Router {
    Router::new()
        .route("/", get(redirect_root))
        .route("/healthz", get(healthz))
}

async fn redirect_root() -> Redirect {
    Redirect::temporary("/dashboard")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// Leptos SSR routes plus the `/pkg` asset directory.
///
/// # Errors
///
/// Returns [`ServerError::Leptos`] if the Leptos configuration cannot be
/// loaded.
fn leptos_app() -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());
    Ok(leptos_router.nest_service("/pkg", ServeDir::new(site_root_path.join("pkg"))))
}

/// Full application router.
///
/// # Errors
///
/// Propagates [`leptos_app`] failures.
pub fn app() -> Result<Router, ServerError> {
    Ok(base_routes()
        .merge(leptos_app()?)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
