use serde_json::{json, Value};

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::{required_index, required_str};
use crate::ipc::types::{AppState, Request};
use crate::model::QualificationKind;

fn kind_param(params: &Value) -> Result<QualificationKind, HandlerErr> {
    let raw = required_str(params, "kind")?;
    QualificationKind::parse(&raw)
        .ok_or_else(|| HandlerErr::new("bad_params", "kind must be one of: private, group"))
}

// Every mutation answers with the whole table; the settings screen
// re-renders it in full after each change.

fn list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let kind = kind_param(params)?;
    Ok(json!({
        "kind": kind.as_str(),
        "qualifications": state.studio.qualifications(kind).all(),
    }))
}

fn create(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let kind = kind_param(params)?;
    let name = required_str(params, "name")?;
    let rate = required_str(params, "rate")?;
    let table = state.studio.qualifications_mut(kind);
    table.add(name, rate)?;
    Ok(json!({ "kind": kind.as_str(), "qualifications": table.all() }))
}

fn update(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let kind = kind_param(params)?;
    let index = required_index(params, "index")?;
    let name = required_str(params, "name")?;
    let rate = required_str(params, "rate")?;
    let table = state.studio.qualifications_mut(kind);
    table.update(index, name, rate)?;
    Ok(json!({ "kind": kind.as_str(), "qualifications": table.all() }))
}

fn delete(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let kind = kind_param(params)?;
    let index = required_index(params, "index")?;
    let table = state.studio.qualifications_mut(kind);
    table.remove(index)?;
    Ok(json!({ "kind": kind.as_str(), "qualifications": table.all() }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "qualifications.list" => list(state, &req.params),
        "qualifications.create" => create(state, &req.params),
        "qualifications.update" => update(state, &req.params),
        "qualifications.delete" => delete(state, &req.params),
        _ => return None,
    };
    Some(match outcome {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    })
}
