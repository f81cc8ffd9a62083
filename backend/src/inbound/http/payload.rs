//! Request body handling shared by the resource handlers.

use serde_json::Value;

use crate::domain::{Error, InputPayload};

/// Accept only JSON objects as resource input.
///
/// Keys are kept verbatim; validators ignore the ones they do not know.
pub(crate) fn into_input(body: Value) -> Result<InputPayload, Error> {
    match body {
        Value::Object(map) => Ok(map),
        _ => Err(Error::invalid_request("Request body must be a JSON object")),
    }
}
