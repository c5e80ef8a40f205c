use serde_json::json;

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};

fn login(state: &mut AppState, params: &serde_json::Value) -> Result<serde_json::Value, HandlerErr> {
    let email = required_str(params, "email")?;
    state.studio.session.login(&email)?;
    Ok(json!({ "loggedIn": true, "userEmail": email }))
}

fn logout(state: &mut AppState) -> Result<serde_json::Value, HandlerErr> {
    state.studio.session.logout()?;
    Ok(json!({ "loggedIn": false }))
}

fn status(state: &AppState) -> Result<serde_json::Value, HandlerErr> {
    let (logged_in, email) = state.studio.session.status()?;
    Ok(json!({ "loggedIn": logged_in, "userEmail": email }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "session.login" => login(state, &req.params),
        "session.logout" => logout(state),
        "session.status" => status(state),
        _ => return None,
    };
    Some(match outcome {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    })
}
