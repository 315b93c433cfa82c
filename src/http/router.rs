//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (auth, CORS, timeout,
//! tracing), and creates the axum router ready for serving.

use std::time::Duration;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use super::auth;
use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Everything except /info sits behind Basic auth
    let protected = Router::new()
        .route(
            "/surveys",
            get(handlers::list_surveys).post(handlers::create_survey),
        )
        .route(
            "/surveys/surveytype/{survey_type}",
            get(handlers::list_surveys_by_type),
        )
        .route(
            "/surveys/shortname/{short_name}",
            get(handlers::get_survey_by_short_name),
        )
        .route(
            "/surveys/ref/{reference}",
            get(handlers::get_survey_by_reference).put(handlers::update_survey_by_reference),
        )
        .route("/surveys/{survey_id}", get(handlers::get_survey))
        .route(
            "/surveys/{survey_id}/classifiertypeselectors",
            get(handlers::list_classifier_selectors),
        )
        .route(
            "/surveys/{survey_id}/classifiertypeselectors/{selector_id}",
            get(handlers::get_classifier_selector),
        )
        .route(
            "/surveys/{survey_id}/classifiers",
            axum::routing::post(handlers::create_classifiers),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ));

    Router::new()
        .route("/info", get(handlers::get_info))
        .merge(protected)
        // Wall-clock bound on request handling, database calls included
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use crate::http::auth::BasicCredentials;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new())
            as Arc<dyn crate::db::repository::FullRepository>;
        let state = AppState::new(repo, BasicCredentials::new("admin", "secret"));
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
