use axum::http::{Method, header};
use tower_http::cors::{Any, CorsLayer};

/// Methods advertised in `Access-Control-Allow-Methods`.
pub const CORS_ALLOWED_METHODS: [Method; 3] = [Method::GET, Method::POST, Method::OPTIONS];

/// Headers advertised in `Access-Control-Allow-Headers`.
pub const CORS_ALLOWED_HEADERS: [header::HeaderName; 1] = [header::CONTENT_TYPE];

/// Creates the CORS layer for the public worker surface.
///
/// - Any origin (`Access-Control-Allow-Origin: *` on every response)
/// - GET, POST, OPTIONS
/// - `Content-Type` request header
///
/// Every `OPTIONS` request is answered by the layer itself with an empty 200,
/// so preflights succeed on any path, routed or not.
pub fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(CORS_ALLOWED_METHODS)
        .allow_headers(CORS_ALLOWED_HEADERS)
}
