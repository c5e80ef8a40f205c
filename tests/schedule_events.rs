use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

fn temp_dir(prefix: &str) -> PathBuf {
    let p = std::env::temp_dir().join(format!(
        "{}-{}",
        prefix,
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock")
            .as_nanos()
    ));
    std::fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_studiod");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn studiod");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn error_code(value: &serde_json::Value) -> Option<&str> {
    assert_eq!(value.get("ok").and_then(|v| v.as_bool()), Some(false));
    value.pointer("/error/code").and_then(|v| v.as_str())
}

#[test]
fn schedule_lists_demo_events_and_accepts_new_ones() {
    let workspace = temp_dir("studio-schedule");
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let listed = request_ok(&mut stdin, &mut reader, "2", "schedule.list", json!({}));
    let events = listed.get("events").and_then(|v| v.as_array()).expect("events");
    assert_eq!(events.len(), 3);
    assert_eq!(events[0].get("teacher").and_then(|v| v.as_str()), Some("Alynia Allan"));
    assert_eq!(events[0].get("type").and_then(|v| v.as_str()), Some("lesson"));
    assert_eq!(
        listed.get("days").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(7)
    );
    let slots = listed.get("timeSlots").and_then(|v| v.as_array()).expect("slots");
    assert_eq!(slots.len(), 13);
    assert_eq!(slots[0].as_str(), Some("7:00am"));

    let monday = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.eventsForDay",
        json!({ "day": "Monday" }),
    );
    let monday_events = monday.get("events").and_then(|v| v.as_array()).expect("events");
    assert_eq!(monday_events.len(), 1);
    assert_eq!(
        monday_events[0].get("student").and_then(|v| v.as_str()),
        Some("Emma Wilson")
    );

    let slot_hit = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "schedule.eventsAt",
        json!({ "day": "Wednesday", "time": "4:00pm" }),
    );
    let hits = slot_hit.get("events").and_then(|v| v.as_array()).expect("events");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].get("teacher").and_then(|v| v.as_str()), Some("Sarah Johnson"));
    assert_eq!(hits[0].get("type").and_then(|v| v.as_str()), Some("practice"));

    let empty_slot = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "schedule.eventsAt",
        json!({ "day": "Wednesday", "time": "9:00am" }),
    );
    assert_eq!(
        empty_slot.get("events").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(0)
    );

    let created = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "schedule.create",
        json!({
            "teacher": "Jane Doe",
            "student": "Alex Kim",
            "day": "Thursday",
            "time": "3:00pm",
            "type": "lesson"
        }),
    );
    let new_id = created.pointer("/event/id").and_then(|v| v.as_i64()).expect("id");
    assert!(new_id > 3);

    let after = request_ok(&mut stdin, &mut reader, "7", "schedule.list", json!({}));
    assert_eq!(
        after.get("events").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(4)
    );

    drop(stdin);
    let _ = child.wait();

    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );
    let reloaded = request_ok(&mut stdin, &mut reader, "2", "schedule.list", json!({}));
    assert_eq!(
        reloaded.get("events").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(4)
    );
    let thursday = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.eventsForDay",
        json!({ "day": "Thursday" }),
    );
    assert_eq!(
        thursday
            .get("events")
            .and_then(|v| v.as_array())
            .and_then(|a| a.first())
            .and_then(|e| e.get("student"))
            .and_then(|v| v.as_str()),
        Some("Alex Kim")
    );
}

#[test]
fn schedule_rejects_bad_input_and_editing() {
    let workspace = temp_dir("studio-schedule-bad");
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "1",
        "workspace.select",
        json!({ "path": workspace.to_string_lossy() }),
    );

    let blank_student = request(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.create",
        json!({
            "teacher": "Jane",
            "student": "   ",
            "day": "Monday",
            "time": "9:00am",
            "type": "lesson"
        }),
    );
    assert_eq!(error_code(&blank_student), Some("bad_params"));

    let bad_day = request(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.create",
        json!({
            "teacher": "Jane",
            "student": "Emma",
            "day": "Funday",
            "time": "9:00am",
            "type": "lesson"
        }),
    );
    assert_eq!(error_code(&bad_day), Some("bad_params"));

    // Availability labels do not belong on the schedule.
    let bad_time = request(
        &mut stdin,
        &mut reader,
        "4",
        "schedule.create",
        json!({
            "teacher": "Jane",
            "student": "Emma",
            "day": "Monday",
            "time": "9am",
            "type": "lesson"
        }),
    );
    assert_eq!(error_code(&bad_time), Some("bad_params"));

    let bad_kind = request(
        &mut stdin,
        &mut reader,
        "5",
        "schedule.create",
        json!({
            "teacher": "Jane",
            "student": "Emma",
            "day": "Monday",
            "time": "9:00am",
            "type": "recital"
        }),
    );
    assert_eq!(error_code(&bad_kind), Some("bad_params"));

    let untouched = request_ok(&mut stdin, &mut reader, "6", "schedule.list", json!({}));
    assert_eq!(
        untouched.get("events").and_then(|v| v.as_array()).map(|a| a.len()),
        Some(3)
    );

    let edit = request(
        &mut stdin,
        &mut reader,
        "7",
        "schedule.update",
        json!({ "eventId": 1, "student": "Someone Else" }),
    );
    assert_eq!(error_code(&edit), Some("not_implemented"));

    let delete = request(
        &mut stdin,
        &mut reader,
        "8",
        "schedule.delete",
        json!({ "eventId": 1 }),
    );
    assert_eq!(error_code(&delete), Some("not_implemented"));

    let bad_filter_day = request(
        &mut stdin,
        &mut reader,
        "9",
        "schedule.eventsForDay",
        json!({ "day": "Weekend" }),
    );
    assert_eq!(error_code(&bad_filter_day), Some("bad_params"));
}
