use crate::error::AppError;
use crate::models::*;
use crate::services::DrawService;
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};

fn origin_from_request(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        // opaque origins (file://, sandboxed frames) send the literal "null"
        .filter(|v| !v.is_empty() && *v != "null")
}

#[utoipa::path(
    post,
    path = "/draws",
    tag = "draw",
    request_body = CreateDrawRequest,
    responses(
        (status = 200, description = "Draw created, one private link per participant", body = CreateDrawResponse),
        (status = 400, description = "Missing draw name or fewer than 3 participants", body = ErrorResponse),
        (status = 422, description = "No valid assignment found", body = ErrorResponse),
        (status = 500, description = "Draw could not be saved", body = ErrorResponse)
    )
)]
/// Runs a draw and returns the links to hand out, one per giver.
pub async fn create_draw(
    service: web::Data<DrawService>,
    req: HttpRequest,
    request: web::Json<CreateDrawRequest>,
) -> Result<HttpResponse> {
    match service
        .create_draw(&request, origin_from_request(&req))
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(response)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/results/{result_id}",
    tag = "draw",
    params(
        ("result_id" = String, Path, description = "Retrieval id taken from a participant link")
    ),
    responses(
        (status = 200, description = "The participant's assignment", body = ResultResponse),
        (status = 404, description = "Unknown or expired link", body = ErrorResponse)
    )
)]
/// Reveals the single assignment a link points to
pub async fn get_result(
    service: web::Data<DrawService>,
    path: web::Path<String>,
) -> Result<HttpResponse> {
    match service.retrieve(&path.into_inner()).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/results",
    tag = "draw",
    params(
        ("result_id" = Option<String>, Query, description = "Retrieval id taken from a participant link")
    ),
    responses(
        (status = 200, description = "The participant's assignment", body = ResultResponse),
        (status = 400, description = "result_id missing", body = ErrorResponse),
        (status = 404, description = "Unknown or expired link", body = ErrorResponse)
    )
)]
/// Query-string variant of [`get_result`]
pub async fn query_result(
    service: web::Data<DrawService>,
    query: web::Query<ResultQuery>,
) -> Result<HttpResponse> {
    let result_id = match query.result_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => {
            return Ok(AppError::BadRequest("result_id is required".into()).error_response());
        }
    };

    match service.retrieve(result_id).await {
        Ok(result) => Ok(HttpResponse::Ok().json(result)),
        Err(e) => Ok(e.error_response()),
    }
}

/// Routes
pub fn draw_config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into()),
    )
    .route("/draws", web::post().to(create_draw))
    .route("/results", web::get().to(query_result))
    .route("/results/{result_id}", web::get().to(get_result));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_origin_from_request() {
        let req = TestRequest::default()
            .insert_header((header::ORIGIN, "https://friends.example.org"))
            .to_http_request();
        assert_eq!(origin_from_request(&req), Some("https://friends.example.org"));

        let req = TestRequest::default()
            .insert_header((header::ORIGIN, "null"))
            .to_http_request();
        assert_eq!(origin_from_request(&req), None);

        let req = TestRequest::default().to_http_request();
        assert_eq!(origin_from_request(&req), None);
    }
}
