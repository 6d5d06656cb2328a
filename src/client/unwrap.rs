//! Response unwrapping.
//!
//! The workflow service nests its result as a JSON string at
//! `outputs[0].outputs[0].results.message.data.text`; that string is itself a
//! JSON document and is decoded a second time.

use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

const RESULT_TEXT_POINTER: &str = "/outputs/0/outputs/0/results/message/data/text";

#[derive(Debug, Error)]
pub enum UnwrapError {
    /// The nested text field is absent (or not a non-empty string).
    #[error("Invalid response format")]
    InvalidFormat,

    /// The text field is present but is not the expected JSON document.
    #[error("malformed result payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// The double-encoded result text, if every level is present.
pub fn result_text(response: &Value) -> Option<&str> {
    response
        .pointer(RESULT_TEXT_POINTER)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Extract and decode the nested result as `T`.
pub fn unwrap_result<T: DeserializeOwned>(response: &Value) -> Result<T, UnwrapError> {
    let text = result_text(response).ok_or(UnwrapError::InvalidFormat)?;
    Ok(serde_json::from_str(text)?)
}
