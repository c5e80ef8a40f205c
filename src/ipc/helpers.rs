use serde_json::Value;

use super::error::HandlerErr;
use crate::model::TeacherStatus;

// Param extraction shared by the handlers: presence and type checks only.
// Blankness and domain rules live in the collections.

pub fn required_str(params: &Value, key: &str) -> Result<String, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| HandlerErr::new("bad_params", format!("missing params.{key}")))
}

pub fn optional_str(params: &Value, key: &str) -> Result<Option<String>, HandlerErr> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or_else(|| HandlerErr::new("bad_params", format!("params.{key} must be a string"))),
    }
}

pub fn required_index(params: &Value, key: &str) -> Result<usize, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_u64())
        .map(|v| v as usize)
        .ok_or_else(|| HandlerErr::new("bad_params", format!("missing params.{key}")))
}

pub fn required_id(params: &Value, key: &str) -> Result<i64, HandlerErr> {
    params
        .get(key)
        .and_then(|v| v.as_i64())
        .ok_or_else(|| HandlerErr::new("bad_params", format!("missing params.{key}")))
}

pub fn status_param(params: &Value, key: &str) -> Result<Option<TeacherStatus>, HandlerErr> {
    match optional_str(params, key)? {
        None => Ok(None),
        Some(raw) => TeacherStatus::parse(&raw).map(Some).ok_or_else(|| {
            HandlerErr::new("bad_params", "status must be one of: active, inactive")
        }),
    }
}
