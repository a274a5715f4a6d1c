/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod endpoints;
pub mod error;

use axum::Router;
use axum::routing::{get, post, put};
use http::header::{ACCEPT, CONTENT_TYPE};
use http::{HeaderValue, Method};
use recipes_core::types::{Cli, ServerState};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

fn cors_layer(cli: &Cli) -> CorsLayer {
    let allow_origin = match &cli.serve_url {
        Some(url) => match HeaderValue::from_str(url) {
            Ok(origin) => AllowOrigin::exact(origin),
            Err(_) => {
                tracing::warn!("Ignoring invalid serve url {}, no origin allowed", url);
                AllowOrigin::list(Vec::<HeaderValue>::new())
            }
        },
        None => AllowOrigin::any(),
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([ACCEPT, CONTENT_TYPE])
}

pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/recipes/list", get(endpoints::recipes::get_list))
        .route("/recipes/create", post(endpoints::recipes::post_create))
        .route(
            "/recipes/{recipe}",
            put(endpoints::recipes::put_recipe).delete(endpoints::recipes::delete_recipe),
        )
        .route("/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(CatchPanicLayer::custom(endpoints::handle_panic))
        .layer(cors_layer(&state.cli))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip, state.cli.port);
    let app = create_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    tracing::info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
