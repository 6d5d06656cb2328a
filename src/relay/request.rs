//! Inbound relay body and its normalization into the outbound payload.

use serde::{Deserialize, Serialize};

use crate::relay::error::RelayError;
use crate::relay::kind::RelayKind;
use crate::upstream::FlowPayload;

/// Default `input_type` for every use case.
pub const DEFAULT_INPUT_TYPE: &str = "text";

/// Body accepted by every relay route.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    #[serde(default)]
    pub input_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_type: Option<String>,
}

impl RelayRequest {
    /// Decode a raw request body. An empty body decodes as `{}`.
    pub fn from_body(body: &[u8]) -> Result<Self, RelayError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| RelayError::InvalidBody(e.to_string()))
    }

    /// Apply per-route defaults and check `input_value` is present and non-blank.
    pub fn into_payload(self, kind: RelayKind) -> Result<FlowPayload, RelayError> {
        let input_value = self
            .input_value
            .filter(|v| !v.trim().is_empty())
            .ok_or(RelayError::MissingInput)?;

        Ok(FlowPayload {
            input_value,
            output_type: non_blank(self.output_type)
                .unwrap_or_else(|| kind.default_output_type().to_string()),
            input_type: non_blank(self.input_type)
                .unwrap_or_else(|| DEFAULT_INPUT_TYPE.to_string()),
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_registration_defaults() {
        let req = RelayRequest::from_body(br#"{"input_value":"{\"name\":\"Ada\"}"}"#).unwrap();
        let payload = req.into_payload(RelayKind::Registration).unwrap();
        assert_eq!(payload.output_type, "chat");
        assert_eq!(payload.input_type, "text");
        assert_eq!(payload.input_value, r#"{"name":"Ada"}"#);
    }

    #[test]
    fn keeps_caller_overrides() {
        let req = RelayRequest::from_body(
            br#"{"input_value":"p_1 Ada","output_type":"chat","input_type":"chat"}"#,
        )
        .unwrap();
        let payload = req.into_payload(RelayKind::Adherence).unwrap();
        assert_eq!(payload.output_type, "chat");
        assert_eq!(payload.input_type, "chat");
    }

    #[test]
    fn blank_overrides_fall_back_to_defaults() {
        let req = RelayRequest::from_body(br#"{"input_value":"x","output_type":""}"#).unwrap();
        let payload = req.into_payload(RelayKind::Scheduling).unwrap();
        assert_eq!(payload.output_type, "text");
    }

    #[test]
    fn missing_or_blank_input_is_rejected() {
        let bodies: [&[u8]; 4] = [
            b"{}",
            br#"{"input_value":""}"#,
            br#"{"input_value":"  \n"}"#,
            b"",
        ];
        for body in bodies {
            let req = RelayRequest::from_body(body).unwrap();
            assert!(matches!(
                req.into_payload(RelayKind::Registration),
                Err(RelayError::MissingInput)
            ));
        }
    }

    #[test]
    fn malformed_json_is_invalid_body() {
        assert!(matches!(
            RelayRequest::from_body(b"{input_value:"),
            Err(RelayError::InvalidBody(_))
        ));
        assert!(matches!(
            RelayRequest::from_body(br#"{"input_value":42}"#),
            Err(RelayError::InvalidBody(_))
        ));
    }
}
