//! Stamp `traceId` into problem-details bodies.
//!
//! `AppError` leaves a `ProblemDetails` in the response extensions; this layer
//! re-renders the body with the request's `x-request-id`.

use axum::{
    Json,
    body::Body,
    http::{HeaderMap, Request, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ProblemDetails;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

pub fn request_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}

pub async fn fill_trace_id(req: Request<Body>, next: Next) -> Response {
    let trace_id = request_id(req.headers());
    let res = next.run(req).await;

    match trace_id {
        Some(trace_id) => stamp(res, &trace_id),
        None => res,
    }
}

/// Re-render a problem response with `trace_id`; other responses pass through.
pub fn stamp(res: Response, trace_id: &str) -> Response {
    let Some(mut problem) = res.extensions().get::<ProblemDetails>().cloned() else {
        return res;
    };
    problem.trace_id = trace_id.to_string();

    let (mut parts, _) = res.into_parts();
    parts.headers.remove(header::CONTENT_LENGTH);

    let rendered = Json(problem.clone()).into_response();
    let (rendered_parts, body) = rendered.into_parts();
    parts.headers.extend(rendered_parts.headers);
    parts.extensions.insert(problem);

    Response::from_parts(parts, body)
}
