use actix_cors::Cors;

/// Links are opened from whatever host serves the UI, so any origin may call
/// the API. No cookies or credentials are involved.
pub fn create_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
