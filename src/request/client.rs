use gloo_net::http::Request;
use log::debug;
use serde_json::Value;
use thiserror::Error;

use crate::request::payload::SubmissionPayload;

/// Body returned by the Apps Script web app. Every member is optional: any
/// JSON value decodes, and only `result == "success"` counts as success.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RemoteReply {
    pub result: Option<Value>,
    pub message: Option<Value>,
    pub error: Option<Value>,
}

impl RemoteReply {
    pub fn from_value(value: &Value) -> Self {
        Self {
            result: value.get("result").cloned(),
            message: value.get("message").cloned(),
            error: value.get("error").cloned(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.result.as_ref().and_then(Value::as_str) == Some("success")
    }

    /// The reply's message as shown to the user, `None` when it is absent or
    /// falsy (`null`, `false`, `0`, `""`).
    pub fn message_text(&self) -> Option<String> {
        match self.message.as_ref()? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(display_text(other)),
        }
    }
}

/// Renders a JSON value the way string interpolation in the browser would.
fn display_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => f.to_string(),
            _ => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => display_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("Failed to build form data: {0}")]
    Body(String),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("HTTP error! Status: {0}")]
    Status(u16),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

/// Status 0 comes back for opaque responses; it is let through to the body
/// parse instead of being treated as an HTTP error.
pub fn check_status(status: u16, ok: bool) -> Result<(), TransportError> {
    if !ok && status != 0 {
        return Err(TransportError::Status(status));
    }
    Ok(())
}

/// Decodes any JSON body. Only a body that is not JSON, or a bare `null`
/// that has no members to read, is a parse failure.
pub fn parse_reply(body: &str) -> Result<RemoteReply, TransportError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| TransportError::Parse(e.to_string()))?;
    if value.is_null() {
        return Err(TransportError::Parse("reply body is null".to_string()));
    }
    Ok(RemoteReply::from_value(&value))
}

/// Posts the payload as multipart form data and decodes the JSON reply.
pub async fn post_payload(
    endpoint: &str,
    payload: &SubmissionPayload,
) -> Result<RemoteReply, TransportError> {
    let form_data = payload
        .to_form_data()
        .map_err(|e| TransportError::Body(format!("{:?}", e)))?;

    debug!("Posting {} fields to the form endpoint", payload.entries().len());
    let response = Request::post(endpoint)
        .body(form_data)
        .send()
        .await
        .map_err(|e| TransportError::Network(e.to_string()))?;

    check_status(response.status(), response.ok())?;

    let body = response
        .text()
        .await
        .map_err(|e| TransportError::Parse(e.to_string()))?;
    parse_reply(&body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_zero_is_allowed() {
        assert_eq!(check_status(0, false), Ok(()));
        assert_eq!(check_status(200, true), Ok(()));
    }

    #[test]
    fn test_error_status_rejected() {
        assert_eq!(check_status(500, false), Err(TransportError::Status(500)));
        assert_eq!(
            check_status(404, false).unwrap_err().to_string(),
            "HTTP error! Status: 404"
        );
    }

    #[test]
    fn test_parse_success_reply() {
        let reply = parse_reply(r#"{"result":"success","row":12}"#).unwrap();
        assert!(reply.is_success());
        assert_eq!(reply.message_text(), None);
    }

    #[test]
    fn test_parse_error_reply() {
        let reply =
            parse_reply(r#"{"result":"error","message":"Sheet full","error":{"code":7}}"#).unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.message_text().as_deref(), Some("Sheet full"));
        assert!(reply.error.is_some());
    }

    #[test]
    fn test_json_without_success_result_is_a_reply() {
        let reply = parse_reply(r#"{"message":"Sheet full"}"#).unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.message_text().as_deref(), Some("Sheet full"));

        let reply = parse_reply(r#"{"result":null}"#).unwrap();
        assert!(!reply.is_success());
        assert_eq!(reply.message_text(), None);

        let reply = parse_reply(r#"{"result":"SUCCESS"}"#).unwrap();
        assert!(!reply.is_success());

        assert!(!parse_reply("42").unwrap().is_success());
    }

    #[test]
    fn test_non_string_messages_rendered_as_text() {
        let text = |body: &str| parse_reply(body).unwrap().message_text();
        assert_eq!(text(r#"{"result":"error","message":42}"#).as_deref(), Some("42"));
        assert_eq!(text(r#"{"result":"error","message":1.5}"#).as_deref(), Some("1.5"));
        assert_eq!(text(r#"{"result":"error","message":2.0}"#).as_deref(), Some("2"));
        assert_eq!(text(r#"{"result":"error","message":true}"#).as_deref(), Some("true"));
        assert_eq!(text(r#"{"result":"error","message":["a",1]}"#).as_deref(), Some("a,1"));
        assert_eq!(
            text(r#"{"result":"error","message":{"a":1}}"#).as_deref(),
            Some("[object Object]")
        );
        assert_eq!(text(r#"{"result":"error","message":"   "}"#).as_deref(), Some("   "));
    }

    #[test]
    fn test_falsy_messages_are_absent() {
        for body in [
            r#"{"result":"error","message":""}"#,
            r#"{"result":"error","message":null}"#,
            r#"{"result":"error","message":0}"#,
            r#"{"result":"error","message":false}"#,
        ] {
            assert_eq!(parse_reply(body).unwrap().message_text(), None, "{body}");
        }
    }

    #[test]
    fn test_unparseable_body_is_transport_error() {
        assert!(matches!(parse_reply("<html>"), Err(TransportError::Parse(_))));
        assert!(matches!(parse_reply(""), Err(TransportError::Parse(_))));
        assert!(matches!(parse_reply("null"), Err(TransportError::Parse(_))));
    }
}
