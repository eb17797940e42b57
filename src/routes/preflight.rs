use actix_web::HttpResponse;
use actix_web::http::StatusCode;

use crate::utils::with_cors;

/// Answer a CORS preflight request: an empty 200 with the cross-origin
/// headers. The request body is never read.
pub async fn preflight() -> HttpResponse {
    with_cors(StatusCode::OK).finish()
}
