use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    config::Config,
    middleware::security_headers,
    routes::{game, health},
    state::AppState,
};

/// Build the application router with all routes and middleware
pub fn build_router(state: AppState, config: &Config) -> Router {
    let router = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Games
        .route("/game/", game::game_routes())
        .route("/game/:id", game::game_routes())
        .with_state(state)
        .layer(DefaultBodyLimit::max(config.max_body_bytes));

    let router = match cors_layer(config) {
        Some(cors) => router.layer(cors),
        None => router,
    };

    // Add middleware layers (applied in reverse order)
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(middleware::from_fn(
                security_headers::security_headers_middleware,
            )),
    )
}

/// CORS layer for the configured origins, if any
fn cors_layer(config: &Config) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::PATCH, Method::POST])
            .allow_headers([header::CONTENT_TYPE]),
    )
}
