use crate::model::{ScheduleEvent, TeacherRecord, TeacherStatus};

// Derived views the dashboard renders. Pure filters over borrowed slices,
// insertion order preserved.

pub fn active_teachers(teachers: &[TeacherRecord]) -> Vec<&TeacherRecord> {
    teachers
        .iter()
        .filter(|t| t.status == TeacherStatus::Active)
        .collect()
}

pub fn events_for_day<'a>(events: &'a [ScheduleEvent], day: &str) -> Vec<&'a ScheduleEvent> {
    events.iter().filter(|e| e.day == day).collect()
}

pub fn events_at<'a>(events: &'a [ScheduleEvent], day: &str, time: &str) -> Vec<&'a ScheduleEvent> {
    events
        .iter()
        .filter(|e| e.day == day && e.time == time)
        .collect()
}
