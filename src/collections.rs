use chrono::Utc;

use crate::grid::{default_availability, Availability};
use crate::model::{
    default_profile, default_private_qualifications, default_schedule_events, is_availability_slot,
    is_schedule_slot, is_weekday, EventKind, Qualification, QualificationKind, ScheduleEvent,
    TeacherProfile, TeacherRecord, TeacherStatus, KEY_AVAILABILITY, KEY_LOGGED_IN,
    KEY_SCHEDULE_EVENTS, KEY_TEACHERS, KEY_TEACHER_PROFILE, KEY_USER_EMAIL,
};
use crate::store::StateStore;

/// Why a mutation was refused. `Invalid` and `OutOfRange` reject the
/// request and leave both the in-memory sequence and the store untouched;
/// `Storage` means the medium itself failed.
#[derive(Debug)]
pub enum CollectionError {
    Invalid(String),
    OutOfRange { index: usize, len: usize },
    Storage(anyhow::Error),
}

impl From<anyhow::Error> for CollectionError {
    fn from(e: anyhow::Error) -> Self {
        CollectionError::Storage(e)
    }
}

fn require(field: &str, value: &str) -> Result<(), CollectionError> {
    if value.trim().is_empty() {
        return Err(CollectionError::Invalid(format!("{field} is required")));
    }
    Ok(())
}

/// Fresh ids are clock readings (epoch millis), bumped past the current
/// maximum so two adds in the same millisecond still come out strictly
/// increasing.
fn next_id(max_existing: Option<i64>) -> i64 {
    let now = Utc::now().timestamp_millis();
    match max_existing {
        Some(max) if now <= max => max + 1,
        _ => now,
    }
}

/// The signed-in teacher's own profile card.
pub struct ProfileSlot<S> {
    store: S,
    profile: TeacherProfile,
}

impl<S: StateStore> ProfileSlot<S> {
    pub fn open(store: S) -> anyhow::Result<Self> {
        let profile = store.load(KEY_TEACHER_PROFILE, default_profile())?;
        Ok(ProfileSlot { store, profile })
    }

    pub fn get(&self) -> &TeacherProfile {
        &self.profile
    }

    /// Full replacement; the edit form posts every field each time.
    pub fn update(&mut self, profile: TeacherProfile) -> Result<&TeacherProfile, CollectionError> {
        require("name", &profile.name)?;
        require("role", &profile.role)?;
        require("birthDate", &profile.birth_date)?;
        self.profile = profile;
        self.store.save(KEY_TEACHER_PROFILE, &self.profile)?;
        Ok(&self.profile)
    }
}

/// One of the two qualification tables (private or group). Rows are
/// addressed by position; they carry no ids.
pub struct QualificationList<S> {
    store: S,
    kind: QualificationKind,
    items: Vec<Qualification>,
}

impl<S: StateStore> QualificationList<S> {
    pub fn open(store: S, kind: QualificationKind) -> anyhow::Result<Self> {
        let default = match kind {
            QualificationKind::Private => default_private_qualifications(),
            QualificationKind::Group => Vec::new(),
        };
        let items = store.load(kind.key(), default)?;
        Ok(QualificationList { store, kind, items })
    }

    pub fn all(&self) -> &[Qualification] {
        &self.items
    }

    pub fn add(&mut self, name: String, rate: String) -> Result<(), CollectionError> {
        require("name", &name)?;
        require("rate", &rate)?;
        self.items.push(Qualification { name, rate });
        self.persist()
    }

    pub fn update(
        &mut self,
        index: usize,
        name: String,
        rate: String,
    ) -> Result<(), CollectionError> {
        require("name", &name)?;
        require("rate", &rate)?;
        if index >= self.items.len() {
            return Err(CollectionError::OutOfRange { index, len: self.items.len() });
        }
        self.items[index] = Qualification { name, rate };
        self.persist()
    }

    pub fn remove(&mut self, index: usize) -> Result<(), CollectionError> {
        if index >= self.items.len() {
            return Err(CollectionError::OutOfRange { index, len: self.items.len() });
        }
        self.items.remove(index);
        self.persist()
    }

    fn persist(&self) -> Result<(), CollectionError> {
        self.store.save(self.kind.key(), &self.items)?;
        Ok(())
    }
}

/// Incoming fields for a roster teacher; ids are assigned here, never
/// accepted from the caller.
#[derive(Debug, Clone)]
pub struct TeacherDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub birth_date: Option<String>,
    pub status: TeacherStatus,
}

fn validated(id: i64, draft: TeacherDraft) -> Result<TeacherRecord, CollectionError> {
    require("name", &draft.name)?;
    require("role", &draft.role)?;
    require("email", &draft.email)?;
    Ok(TeacherRecord {
        id,
        name: draft.name,
        role: draft.role,
        email: draft.email,
        phone: draft.phone,
        address: draft.address,
        birth_date: draft.birth_date,
        status: draft.status,
    })
}

/// The studio-wide teacher roster under `teachers_list`. Starts empty; the
/// dashboard only ever shows teachers someone actually added.
pub struct TeacherRoster<S> {
    store: S,
    teachers: Vec<TeacherRecord>,
}

impl<S: StateStore> TeacherRoster<S> {
    pub fn open(store: S) -> anyhow::Result<Self> {
        let teachers = store.load(KEY_TEACHERS, Vec::new())?;
        Ok(TeacherRoster { store, teachers })
    }

    pub fn all(&self) -> &[TeacherRecord] {
        &self.teachers
    }

    pub fn add(&mut self, draft: TeacherDraft) -> Result<TeacherRecord, CollectionError> {
        let id = next_id(self.teachers.iter().map(|t| t.id).max());
        let record = validated(id, draft)?;
        self.teachers.push(record.clone());
        self.store.save(KEY_TEACHERS, &self.teachers)?;
        Ok(record)
    }

    /// Replaces the identified teacher in place, keeping roster order.
    /// `Ok(None)` when no teacher has that id.
    pub fn update(
        &mut self,
        id: i64,
        draft: TeacherDraft,
    ) -> Result<Option<TeacherRecord>, CollectionError> {
        let record = validated(id, draft)?;
        let Some(pos) = self.teachers.iter().position(|t| t.id == id) else {
            return Ok(None);
        };
        self.teachers[pos] = record.clone();
        self.store.save(KEY_TEACHERS, &self.teachers)?;
        Ok(Some(record))
    }

    /// Removing an id nobody has is a no-op, reported as `false`.
    pub fn remove(&mut self, id: i64) -> Result<bool, CollectionError> {
        let before = self.teachers.len();
        self.teachers.retain(|t| t.id != id);
        if self.teachers.len() == before {
            return Ok(false);
        }
        self.store.save(KEY_TEACHERS, &self.teachers)?;
        Ok(true)
    }

    /// Case-insensitive substring match over name and role. The empty
    /// query matches everyone.
    pub fn search(&self, query: &str) -> Vec<&TeacherRecord> {
        let q = query.to_lowercase();
        self.teachers
            .iter()
            .filter(|t| t.name.to_lowercase().contains(&q) || t.role.to_lowercase().contains(&q))
            .collect()
    }

    /// Exact status match, roster order preserved.
    pub fn with_status(&self, status: TeacherStatus) -> Vec<&TeacherRecord> {
        self.teachers.iter().filter(|t| t.status == status).collect()
    }
}

/// Incoming fields for a schedule entry.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub teacher: String,
    pub student: String,
    pub day: String,
    pub time: String,
    pub kind: EventKind,
}

/// The weekly schedule under `schedule_events`. Append-only for now: the
/// dashboard shipped edit and delete buttons with nothing behind them, and
/// we keep that surface unimplemented rather than invent semantics.
pub struct ScheduleBook<S> {
    store: S,
    events: Vec<ScheduleEvent>,
}

impl<S: StateStore> ScheduleBook<S> {
    pub fn open(store: S) -> anyhow::Result<Self> {
        let events = store.load(KEY_SCHEDULE_EVENTS, default_schedule_events())?;
        Ok(ScheduleBook { store, events })
    }

    pub fn all(&self) -> &[ScheduleEvent] {
        &self.events
    }

    pub fn add(&mut self, draft: EventDraft) -> Result<ScheduleEvent, CollectionError> {
        require("teacher", &draft.teacher)?;
        require("student", &draft.student)?;
        if !is_weekday(&draft.day) {
            return Err(CollectionError::Invalid(format!("unknown day: {}", draft.day)));
        }
        if !is_schedule_slot(&draft.time) {
            return Err(CollectionError::Invalid(format!("unknown time slot: {}", draft.time)));
        }
        let id = next_id(self.events.iter().map(|e| e.id).max());
        let event = ScheduleEvent {
            id,
            teacher: draft.teacher,
            student: draft.student,
            time: draft.time,
            day: draft.day,
            kind: draft.kind,
        };
        self.events.push(event.clone());
        self.store.save(KEY_SCHEDULE_EVENTS, &self.events)?;
        Ok(event)
    }
}

/// The availability grid bound to its store key. Coordinates are checked
/// here; the grid itself accepts anything.
pub struct AvailabilityBoard<S> {
    store: S,
    grid: Availability,
}

impl<S: StateStore> AvailabilityBoard<S> {
    pub fn open(store: S) -> anyhow::Result<Self> {
        let grid = store.load(KEY_AVAILABILITY, default_availability())?;
        Ok(AvailabilityBoard { store, grid })
    }

    pub fn grid(&self) -> &Availability {
        &self.grid
    }

    /// Flips one cell, writes the whole grid through, and returns the new
    /// cell value.
    pub fn toggle(&mut self, day: &str, slot: &str) -> Result<bool, CollectionError> {
        if !is_weekday(day) {
            return Err(CollectionError::Invalid(format!("unknown day: {day}")));
        }
        if !is_availability_slot(slot) {
            return Err(CollectionError::Invalid(format!("unknown time slot: {slot}")));
        }
        self.grid = self.grid.toggled(day, slot);
        self.store.save(KEY_AVAILABILITY, &self.grid)?;
        Ok(self.grid.read(day, slot))
    }
}

/// Login-gate flags. Read per call rather than cached; the dashboard
/// checked them on every page mount.
pub struct SessionFlags<S> {
    store: S,
}

impl<S: StateStore> SessionFlags<S> {
    pub fn new(store: S) -> Self {
        SessionFlags { store }
    }

    pub fn status(&self) -> anyhow::Result<(bool, String)> {
        let logged_in = self.store.load(KEY_LOGGED_IN, false)?;
        let email = self.store.load(KEY_USER_EMAIL, String::new())?;
        Ok((logged_in, email))
    }

    pub fn login(&self, email: &str) -> Result<(), CollectionError> {
        require("email", email)?;
        self.store.save(KEY_LOGGED_IN, &true)?;
        self.store.save(KEY_USER_EMAIL, &email)?;
        Ok(())
    }

    pub fn logout(&self) -> Result<(), CollectionError> {
        self.store.save(KEY_LOGGED_IN, &false)?;
        self.store.save(KEY_USER_EMAIL, &"")?;
        Ok(())
    }
}
