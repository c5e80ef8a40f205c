use serde_json::json;

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::model::TeacherProfile;

fn get(state: &AppState) -> Result<serde_json::Value, HandlerErr> {
    Ok(json!({ "profile": state.studio.profile.get() }))
}

fn update(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let profile = TeacherProfile {
        name: required_str(params, "name")?,
        role: required_str(params, "role")?,
        birth_date: required_str(params, "birthDate")?,
    };
    let updated = state.studio.profile.update(profile)?;
    Ok(json!({ "profile": updated }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "profile.get" => get(state),
        "profile.update" => update(state, &req.params),
        _ => return None,
    };
    Some(match outcome {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    })
}
