use crate::collections::{
    AvailabilityBoard, ProfileSlot, QualificationList, ScheduleBook, SessionFlags, TeacherRoster,
};
use crate::model::QualificationKind;
use crate::store::StateStore;

/// Every collection the dashboard works with, bound to one store. Opening
/// reads each key once; anything absent or unreadable starts from its
/// seeded default.
pub struct StudioState<S: StateStore> {
    pub profile: ProfileSlot<S>,
    pub private_qualifications: QualificationList<S>,
    pub group_qualifications: QualificationList<S>,
    pub availability: AvailabilityBoard<S>,
    pub roster: TeacherRoster<S>,
    pub schedule: ScheduleBook<S>,
    pub session: SessionFlags<S>,
}

impl<S: StateStore + Clone> StudioState<S> {
    pub fn open(store: S) -> anyhow::Result<Self> {
        Ok(StudioState {
            profile: ProfileSlot::open(store.clone())?,
            private_qualifications: QualificationList::open(
                store.clone(),
                QualificationKind::Private,
            )?,
            group_qualifications: QualificationList::open(store.clone(), QualificationKind::Group)?,
            availability: AvailabilityBoard::open(store.clone())?,
            roster: TeacherRoster::open(store.clone())?,
            schedule: ScheduleBook::open(store.clone())?,
            session: SessionFlags::new(store),
        })
    }

    pub fn qualifications(&self, kind: QualificationKind) -> &QualificationList<S> {
        match kind {
            QualificationKind::Private => &self.private_qualifications,
            QualificationKind::Group => &self.group_qualifications,
        }
    }

    pub fn qualifications_mut(&mut self, kind: QualificationKind) -> &mut QualificationList<S> {
        match kind {
            QualificationKind::Private => &mut self.private_qualifications,
            QualificationKind::Group => &mut self.group_qualifications,
        }
    }
}
