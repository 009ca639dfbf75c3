use crate::config::CorsSettings;
use actix_cors::Cors;
use actix_web::{http::header, middleware::DefaultHeaders};

/// CORS layer for the single configured browser origin
///
/// Preflights from that origin are answered here. Other origins are not
/// rejected; they fall through and receive the configured origin from
/// [`security_headers`], which browsers then refuse.
pub fn cors(settings: &CorsSettings) -> Cors {
    Cors::default()
        .allowed_origin(&settings.client_url)
        .allowed_methods(vec!["GET"])
        .allow_any_header()
        .supports_credentials()
        .block_on_origin_mismatch(false)
        .max_age(3600)
}

/// Headers set on every response, including errors and unmatched routes
///
/// Must wrap outside of [`cors`] so the CORS layer's own values win when it
/// sets them.
pub fn security_headers(settings: &CorsSettings) -> DefaultHeaders {
    DefaultHeaders::new()
        .add((header::X_CONTENT_TYPE_OPTIONS, "nosniff"))
        .add((header::X_FRAME_OPTIONS, "DENY"))
        .add((header::X_XSS_PROTECTION, "1; mode=block"))
        .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, settings.client_url.clone()))
        .add((header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true"))
        .add((header::VARY, "Origin"))
}
