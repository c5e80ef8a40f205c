use serde::{Deserialize, Serialize};

// Store keys. These names are the compatibility contract with the data the
// dashboard shell has already written; do not rename.
pub const KEY_TEACHER_PROFILE: &str = "teacher_data";
pub const KEY_PRIVATE_QUALIFICATIONS: &str = "private_qualifications";
pub const KEY_GROUP_QUALIFICATIONS: &str = "group_qualifications";
pub const KEY_AVAILABILITY: &str = "availability_data";
pub const KEY_TEACHERS: &str = "teachers_list";
pub const KEY_SCHEDULE_EVENTS: &str = "schedule_events";
pub const KEY_LOGGED_IN: &str = "loggedIn";
pub const KEY_USER_EMAIL: &str = "userEmail";

pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Dashboard availability slots: half-hour granularity 7:30am-6pm plus the
/// "all-day" pseudo-slot. Deliberately a different set from SCHEDULE_SLOTS;
/// the two serve different screens.
pub const AVAILABILITY_SLOTS: [&str; 23] = [
    "all-day", "7:30am", "8am", "8:30am", "9am", "9:30am", "10am", "10:30am", "11am", "11:30am",
    "12pm", "12:30pm", "1pm", "1:30pm", "2pm", "2:30pm", "3pm", "3:30pm", "4pm", "4:30pm", "5pm",
    "5:30pm", "6pm",
];

/// Weekly schedule slots: hourly 7am-7pm.
pub const SCHEDULE_SLOTS: [&str; 13] = [
    "7:00am", "8:00am", "9:00am", "10:00am", "11:00am", "12:00pm", "1:00pm", "2:00pm", "3:00pm",
    "4:00pm", "5:00pm", "6:00pm", "7:00pm",
];

pub fn is_weekday(day: &str) -> bool {
    WEEKDAYS.contains(&day)
}

pub fn is_availability_slot(time: &str) -> bool {
    AVAILABILITY_SLOTS.contains(&time)
}

pub fn is_schedule_slot(time: &str) -> bool {
    SCHEDULE_SLOTS.contains(&time)
}

/// The single logged-in teacher shown on the dashboard header card. Kept
/// separate from roster `TeacherRecord`s; nothing links the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherProfile {
    pub name: String,
    pub role: String,
    pub birth_date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeacherStatus {
    Active,
    Inactive,
}

impl TeacherStatus {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(Self::Active),
            "inactive" => Some(Self::Inactive),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRecord {
    pub id: i64,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,
    pub status: TeacherStatus,
}

/// A price-list row. `rate` is a display string ("$28.00"); no arithmetic is
/// ever performed on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Qualification {
    pub name: String,
    pub rate: String,
}

/// The two independent price lists. Position within a list is a
/// qualification's identity; there is no row id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualificationKind {
    Private,
    Group,
}

impl QualificationKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "private" => Some(Self::Private),
            "group" => Some(Self::Group),
            _ => None,
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Self::Private => KEY_PRIVATE_QUALIFICATIONS,
            Self::Group => KEY_GROUP_QUALIFICATIONS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Private => "private",
            Self::Group => "group",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Lesson,
    Practice,
    Meeting,
}

impl EventKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "lesson" => Some(Self::Lesson),
            "practice" => Some(Self::Practice),
            "meeting" => Some(Self::Meeting),
            _ => None,
        }
    }
}

/// `teacher` is free text expected to match a roster teacher's name. The
/// source never enforced that link, so neither do we: renaming or deleting a
/// teacher leaves its events behind untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEvent {
    pub id: i64,
    pub teacher: String,
    pub student: String,
    pub time: String,
    pub day: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

pub fn default_profile() -> TeacherProfile {
    TeacherProfile {
        name: "Alynia Allan".to_string(),
        role: "Teacher".to_string(),
        birth_date: "Jan 1, 1980".to_string(),
    }
}

pub fn default_private_qualifications() -> Vec<Qualification> {
    [
        "Vocal Contemporary",
        "Vocal Core",
        "Vocal Hybrid",
        "Vocal Plus",
        "Instrument",
    ]
    .iter()
    .map(|name| Qualification {
        name: name.to_string(),
        rate: "$28.00".to_string(),
    })
    .collect()
}

pub fn default_schedule_events() -> Vec<ScheduleEvent> {
    vec![
        ScheduleEvent {
            id: 1,
            teacher: "Alynia Allan".to_string(),
            student: "Emma Wilson".to_string(),
            time: "9:00am".to_string(),
            day: "Monday".to_string(),
            kind: EventKind::Lesson,
        },
        ScheduleEvent {
            id: 2,
            teacher: "John Smith".to_string(),
            student: "Alex Johnson".to_string(),
            time: "2:00pm".to_string(),
            day: "Tuesday".to_string(),
            kind: EventKind::Lesson,
        },
        ScheduleEvent {
            id: 3,
            teacher: "Sarah Johnson".to_string(),
            student: "Mike Brown".to_string(),
            time: "4:00pm".to_string(),
            day: "Wednesday".to_string(),
            kind: EventKind::Practice,
        },
    ]
}
