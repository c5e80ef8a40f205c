use serde_json::{json, Value};

use crate::collections::EventDraft;
use crate::ipc::error::{ok, HandlerErr};
use crate::ipc::helpers::required_str;
use crate::ipc::types::{AppState, Request};
use crate::model::{is_schedule_slot, is_weekday, EventKind, SCHEDULE_SLOTS, WEEKDAYS};
use crate::views;

fn list(state: &AppState) -> Result<Value, HandlerErr> {
    Ok(json!({
        "days": WEEKDAYS,
        "timeSlots": SCHEDULE_SLOTS,
        "events": state.studio.schedule.all(),
    }))
}

fn create(state: &mut AppState, params: &Value) -> Result<Value, HandlerErr> {
    let kind_raw = required_str(params, "type")?;
    let kind = EventKind::parse(&kind_raw).ok_or_else(|| {
        HandlerErr::new("bad_params", "type must be one of: lesson, practice, meeting")
    })?;
    let draft = EventDraft {
        teacher: required_str(params, "teacher")?,
        student: required_str(params, "student")?,
        day: required_str(params, "day")?,
        time: required_str(params, "time")?,
        kind,
    };
    let event = state.studio.schedule.add(draft)?;
    Ok(json!({ "event": event }))
}

fn events_for_day(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let day = required_str(params, "day")?;
    if !is_weekday(&day) {
        return Err(HandlerErr::new("bad_params", format!("unknown day: {day}")));
    }
    let events = views::events_for_day(state.studio.schedule.all(), &day);
    Ok(json!({ "day": day, "events": events }))
}

fn events_at(state: &AppState, params: &Value) -> Result<Value, HandlerErr> {
    let day = required_str(params, "day")?;
    let time = required_str(params, "time")?;
    if !is_weekday(&day) {
        return Err(HandlerErr::new("bad_params", format!("unknown day: {day}")));
    }
    if !is_schedule_slot(&time) {
        return Err(HandlerErr::new(
            "bad_params",
            format!("unknown time slot: {time}"),
        ));
    }
    let events = views::events_at(state.studio.schedule.all(), &day, &time);
    Ok(json!({ "day": day, "time": time, "events": events }))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    let outcome = match req.method.as_str() {
        "schedule.list" => list(state),
        "schedule.create" => create(state, &req.params),
        "schedule.eventsForDay" => events_for_day(state, &req.params),
        "schedule.eventsAt" => events_at(state, &req.params),
        // The dashboard never wired these buttons up; keep the surface
        // honest instead of inventing behavior for it.
        "schedule.update" | "schedule.delete" => Err(HandlerErr::new(
            "not_implemented",
            "schedule events cannot be edited or removed",
        )),
        _ => return None,
    };
    Some(match outcome {
        Ok(result) => ok(&req.id, result),
        Err(e) => e.response(&req.id),
    })
}
