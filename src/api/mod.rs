pub mod handlers;
pub mod models;
pub mod openapi;

use crate::api::handlers::{AppService, api_routes};
use crate::api::openapi::ApiDoc;
use axum::{Router, http::header, routing::get};
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Full application router: health check, `/api` routes and Swagger UI.
pub fn build_app(service: Arc<AppService>) -> Router {
    Router::new()
        .route("/", get(|| async { "OK" }))
        .nest("/api", api_routes(service))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(30)))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    http::Method::GET,
                    http::Method::POST,
                    http::Method::PUT,
                    http::Method::DELETE,
                ])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
}
