use serde_json::{json, Value};

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::model::{AVAILABILITY_SLOTS, WEEKDAYS};

fn get(state: &AppState) -> Result<Value, HandlerErr> {
    Ok(json!({
        "days": WEEKDAYS,
        "timeSlots": AVAILABILITY_SLOTS,
        "availability": state.studio.availability.grid(),
    }))
}

fn toggle(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let day = required_str(params, "day")?;
    let time = required_str(params, "time")?;
    let available = state.studio.availability.toggle(&day, &time)?;
    Ok(json!({ "day": day, "time": time, "available": available }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "availability.get" => get(state),
        "availability.toggle" => toggle(state, &req.params),
        _ => return None,
    };
    Some(match outcome {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    })
}
