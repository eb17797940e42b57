use actix_web::http::StatusCode;
use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    HeaderName,
};
use actix_web::{HttpResponse, HttpResponseBuilder, web};
use anyhow::Context;
use futures::StreamExt;

/// Largest request body the form endpoints will decode.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Cross-origin headers attached to every response of the form endpoints.
pub const CORS_HEADERS: [(HeaderName, &str); 3] = [
    (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
    (ACCESS_CONTROL_ALLOW_METHODS, "POST, OPTIONS"),
    (ACCESS_CONTROL_ALLOW_HEADERS, "Content-Type"),
];

/// Start a response carrying the cross-origin headers.
pub fn with_cors(status: StatusCode) -> HttpResponseBuilder {
    let mut builder = HttpResponse::build(status);
    for header in CORS_HEADERS {
        builder.insert_header(header);
    }
    builder
}

/// A JSON response carrying the cross-origin headers.
pub fn json_response(status: StatusCode, body: serde_json::Value) -> HttpResponse {
    with_cors(status).json(body)
}

/// Collect a request body of at most [`MAX_BODY_BYTES`].
///
/// An oversized body is read to the end before it is rejected, so the
/// client always receives the JSON error response.
pub async fn read_body(mut payload: web::Payload) -> Result<web::Bytes, anyhow::Error> {
    let mut body = web::BytesMut::new();
    let mut oversized = false;
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.context("Failed to read the request body")?;
        if oversized || body.len() + chunk.len() > MAX_BODY_BYTES {
            oversized = true;
            continue;
        }
        body.extend_from_slice(&chunk);
    }
    if oversized {
        anyhow::bail!("The request body is larger than {} bytes", MAX_BODY_BYTES);
    }
    Ok(body.freeze())
}
