//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves everything: the server-rendered landing page, the
//! compiled wasm/css bundle under `/pkg`, and a health probe. The Leptos
//! routes come from the route table declared in `site::app::App`, so the
//! server never duplicates the page structure.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use std::path::{Path, PathBuf};

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Assemble the application router.
///
/// # Errors
///
/// Returns an error when the Leptos configuration cannot be loaded (missing
/// or malformed `[[workspace.metadata.leptos]]` and no environment
/// overrides).
pub fn app() -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(site::app::App);
    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || site::app::shell(opts.clone())
        })
        .with_state(leptos_options);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .nest_service("/pkg", ServeDir::new(pkg_dir(&site_root)))
        .merge(leptos_router)
        .layer(cors)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

/// Directory holding the compiled wasm/css bundle.
fn pkg_dir(site_root: &Path) -> PathBuf {
    site_root.join("pkg")
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
