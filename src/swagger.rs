use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::draw::create_draw,
        handlers::draw::get_result,
        handlers::draw::query_result,
    ),
    components(
        schemas(
            CreateDrawRequest,
            CreateDrawResponse,
            DrawLink,
            ResultResponse,
            ResultQuery,
            ErrorResponse,
        )
    ),
    tags(
        (name = "draw", description = "Gift draw creation and private result retrieval"),
    ),
    info(
        title = "Secret Draw API",
        version = "0.1.0",
        description = "Runs secret gift draws and serves each participant their own assignment",
    ),
    servers(
        (url = "/api/v1", description = "Local server")
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_draw_paths() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/draws"));
        assert!(doc.paths.paths.contains_key("/results/{result_id}"));
        assert!(doc.paths.paths.contains_key("/results"));
    }
}
