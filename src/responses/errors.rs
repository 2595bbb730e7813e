use crate::errors::ServerError;
use crate::responses::json::json_with_status;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

#[derive(Serialize)]
struct ErrorBody<'a> {
    status: u16,
    error: &'a str,
}

/// Convert a ServerError into a JSON error response.
///
/// Validation failures are sent as the bare `[{field, message}]` list,
/// everything else as `{status, error}`.
pub fn error_to_response(err: ServerError) -> Response {
    let status = status_for(&err);

    let built = match &err {
        ServerError::Validation(errors) => json_with_status(status, errors),
        other => json_with_status(
            status,
            &ErrorBody {
                status,
                error: &other.to_string(),
            },
        ),
    };

    built.unwrap_or_else(|e| {
        tracing::error!("Failed to render error response: {e}");
        plain_internal_error()
    })
}

pub fn status_for(err: &ServerError) -> u16 {
    match err {
        ServerError::NotFound => 404,
        ServerError::MethodNotAllowed => 405,
        ServerError::BadRequest(_) | ServerError::Validation(_) => 400,
        ServerError::Serialization(_) | ServerError::InternalError => 500,
    }
}

fn plain_internal_error() -> Response {
    ResponseBuilder::new()
        .status(500)
        .header("Content-Type", mime::TEXT_PLAIN_UTF_8.as_ref())
        .body(Body::from("Internal Server Error"))
        .unwrap_or_else(|_| Response::new(Body::from("Internal Server Error")))
}
