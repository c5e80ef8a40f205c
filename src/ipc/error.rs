use serde_json::json;

use crate::collections::CollectionError;

pub fn ok(id: &str, result: serde_json::Value) -> serde_json::Value {
    json!({
        "id": id,
        "ok": true,
        "result": result
    })
}

pub fn err(
    id: &str,
    code: &str,
    message: impl Into<String>,
    details: Option<serde_json::Value>,
) -> serde_json::Value {
    let mut error = json!({
        "code": code,
        "message": message.into(),
    });
    if let Some(d) = details {
        error["details"] = d;
    }
    json!({
        "id": id,
        "ok": false,
        "error": error,
    })
}

/// Handler-internal failure carrying the wire error code; turned into the
/// error envelope once the request id is known.
pub struct HandlerErr {
    pub code: &'static str,
    pub message: String,
    pub details: Option<serde_json::Value>,
}

impl HandlerErr {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        HandlerErr {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn response(self, id: &str) -> serde_json::Value {
        err(id, self.code, self.message, self.details)
    }
}

impl From<CollectionError> for HandlerErr {
    fn from(e: CollectionError) -> Self {
        match e {
            CollectionError::Invalid(message) => HandlerErr::new("bad_params", message),
            CollectionError::OutOfRange { index, len } => HandlerErr {
                code: "not_found",
                message: format!("index {index} out of range (len {len})"),
                details: Some(json!({ "index": index, "len": len })),
            },
            CollectionError::Storage(e) => HandlerErr::new("storage_failed", format!("{e:#}")),
        }
    }
}

impl From<anyhow::Error> for HandlerErr {
    fn from(e: anyhow::Error) -> Self {
        HandlerErr::new("storage_failed", format!("{e:#}"))
    }
}
