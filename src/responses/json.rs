// responses/json.rs
use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, Response, ResponseBuilder};
use serde::Serialize;

/// Serialize `value` as a JSON response with the given status.
pub fn json_with_status<T: Serialize + ?Sized>(status: u16, value: &T) -> Result<Response, ServerError> {
    let body = serde_json::to_vec(value)?;

    ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .map_err(|_| ServerError::InternalError)
}

/// 200 OK with a JSON body
pub fn json_response<T: Serialize + ?Sized>(value: &T) -> ResultResp {
    json_with_status(200, value)
}
