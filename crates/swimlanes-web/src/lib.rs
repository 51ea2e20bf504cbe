//! Swimlanes Web Server
//!
//! Axum-based dashboard showing tracker stories as per-developer swimlanes.

pub mod error;
pub mod routes;
pub mod session;
pub mod state;
pub mod views;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use swimlanes_core::config::SwimlanesConfig;
use swimlanes_tracker::Connect;
use tower_http::trace::TraceLayer;

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let project_routes = Router::new()
        .route("/{project_id}", get(routes::board::show_board))
        .route(
            "/{project_id}/stories/{story_id}/next",
            post(routes::stories::next_state),
        )
        .route(
            "/{project_id}/stories/{story_id}/blocked",
            post(routes::stories::blocked),
        )
        .route(
            "/{project_id}/bug",
            get(routes::bug::bug_form).post(routes::bug::create_bug),
        );

    Router::new()
        .route("/", get(routes::projects::index))
        .route("/project", get(routes::projects::list_projects))
        .nest("/project", project_routes)
        .layer(middleware::from_fn(session::remember_token))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the web server.
pub async fn run_server(
    config: SwimlanesConfig,
    connector: Arc<dyn Connect>,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config, connector);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Web server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
