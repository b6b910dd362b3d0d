use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};
use serde::Serialize;

pub fn json_response<T: Serialize>(status: u16, payload: &T) -> ResultResp {
    let body = serde_json::to_string(payload).map_err(|_| ServerError::InternalError)?;

    let resp = ResponseBuilder::new()
        .status(status)
        .header("Content-Type", mime::APPLICATION_JSON.as_ref())
        .body(Body::from(body))
        .unwrap();

    Ok(resp)
}
