//! HTTP server for the contact book.
//!
//! This module wires the route handlers, session middleware, and method
//! override into an axum application and serves it.

pub mod error;
pub mod handlers;
pub mod method_override;
pub mod views;

pub use error::AppError;
pub use handlers::AppState;

use crate::session::session_middleware;
use anyhow::Result;
use axum::extract::Request;
use axum::routing::get;
use axum::{middleware, Router, ServiceExt};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::util::{MapRequest, MapRequestLayer};
use tower::Layer;
use tower_http::trace::TraceLayer;

/// The full application: method override in front of the router.
pub type App = MapRequest<Router, fn(Request) -> Request>;

/// Build the router with every page and action.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route(
            "/contact",
            get(handlers::list_contacts)
                .post(handlers::create_contact)
                .put(handlers::update_contact)
                .delete(handlers::delete_contact),
        )
        .route("/contact/add", get(handlers::add_contact_form))
        .route("/contact/edit/{name}", get(handlers::edit_contact_form))
        .route("/contact/{name}", get(handlers::contact_detail))
        .fallback(handlers::not_found)
        .layer(middleware::from_fn_with_state(
            state.sessions.clone(),
            session_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build the servable application.
///
/// The method override must see the request before routing, so it wraps
/// the router instead of being one of its layers.
pub fn build_app(state: AppState) -> App {
    let override_method: fn(Request) -> Request = method_override::override_method;
    MapRequestLayer::new(override_method).layer(router(state))
}

/// Serve the application on `addr` until Ctrl-C.
///
/// Expired sessions are purged in the background once per TTL period.
pub async fn run_server(state: AppState, addr: SocketAddr) -> Result<()> {
    let sessions = state.sessions.clone();
    let sweep_every = sessions.ttl().max(Duration::from_secs(1));
    let sweeper = tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweep_every);
        loop {
            interval.tick().await;
            sessions.cleanup_expired();
        }
    });

    let app = build_app(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Contact book listening at http://{}", listener.local_addr()?);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
