use axum::http::HeaderValue;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

const PREFLIGHT_MAX_AGE_SECS: u64 = 86400;

/// Allows a single frontend origin to use every method and header. Requests
/// from any other origin get no `Access-Control-Allow-Origin` header.
///
/// Methods and headers are mirrored from the preflight request because
/// wildcards cannot be combined with credentials.
pub fn create_cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    tracing::info!(origin = ?allowed_origin, "CORS: allowing a single origin");

    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(Duration::from_secs(PREFLIGHT_MAX_AGE_SECS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_cors_layer() {
        let _layer = create_cors_layer(HeaderValue::from_static("http://localhost:5173"));
    }
}
