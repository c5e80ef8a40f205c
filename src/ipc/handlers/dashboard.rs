use serde_json::{json, Value};

use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::views;

/// Everything the landing page shows, gathered in one round trip.
fn open(state: &AppState) -> Result<Value, HandlerErr> {
    let studio = &state.studio;
    Ok(json!({
        "profile": studio.profile.get(),
        "privateQualifications": studio.private_qualifications.all(),
        "groupQualifications": studio.group_qualifications.all(),
        "availability": studio.availability.grid(),
        "activeTeachers": views::active_teachers(studio.roster.all()),
    }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.open" => Some(match open(state) {
            Ok(result) => ok(&req.id, result),
            Err(e) => e.response(&req.id),
        }),
        _ => None,
    }
}
