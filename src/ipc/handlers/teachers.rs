use serde_json::{json, Value};

use crate::collections::TeacherDraft;
use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::{optional_str, required_id, required_str, status_param};
use crate::ipc::types::{AppState, Request};
use crate::model::{TeacherRecord, TeacherStatus};

fn draft_from(params: &Value) -> Result<TeacherDraft, HandlerErr> {
    Ok(TeacherDraft {
        name: required_str(params, "name")?,
        role: required_str(params, "role")?,
        email: required_str(params, "email")?,
        phone: optional_str(params, "phone")?.unwrap_or_default(),
        address: optional_str(params, "address")?,
        birth_date: optional_str(params, "birthDate")?,
        status: status_param(params, "status")?.unwrap_or(TeacherStatus::Active),
    })
}

fn list(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let query = optional_str(params, "query")?.unwrap_or_default();
    let status = status_param(params, "status")?;
    let teachers: Vec<&TeacherRecord> = match status {
        Some(wanted) if query.is_empty() => state.studio.roster.with_status(wanted),
        Some(wanted) => state
            .studio
            .roster
            .search(&query)
            .into_iter()
            .filter(|t| t.status == wanted)
            .collect(),
        None => state.studio.roster.search(&query),
    };
    Ok(json!({ "teachers": teachers }))
}

fn create(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let teacher = state.studio.roster.add(draft_from(params)?)?;
    Ok(json!({ "teacher": teacher }))
}

fn update(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_id(params, "teacherId")?;
    match state.studio.roster.update(id, draft_from(params)?)? {
        Some(teacher) => Ok(json!({ "teacher": teacher })),
        None => Err(HandlerErr::new(
            "not_found",
            format!("no teacher with id {id}"),
        )),
    }
}

fn delete(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let id = required_id(params, "teacherId")?;
    let removed = state.studio.roster.remove(id)?;
    Ok(json!({ "removed": removed }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "teachers.list" => list(state, &req.params),
        "teachers.create" => create(state, &req.params),
        "teachers.update" => update(state, &req.params),
        "teachers.delete" => delete(state, &req.params),
        _ => return None,
    };
    Some(match outcome {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    })
}
