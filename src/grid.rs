use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AVAILABILITY_SLOTS, WEEKDAYS};

/// Weekly availability matrix: day name to time-slot label to available.
/// Serializes as the nested object the dashboard always stored under
/// `availability_data`. A cell missing from stored data reads as false;
/// there is no third state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Availability {
    cells: BTreeMap<String, BTreeMap<String, bool>>,
}

impl Availability {
    /// Builds the full all-false matrix over the given days and slots.
    pub fn initialize(days: &[&str], slots: &[&str]) -> Self {
        let mut cells = BTreeMap::new();
        for day in days {
            let row: BTreeMap<String, bool> = slots
                .iter()
                .map(|slot| (slot.to_string(), false))
                .collect();
            cells.insert(day.to_string(), row);
        }
        Availability { cells }
    }

    pub fn read(&self, day: &str, slot: &str) -> bool {
        self.cells
            .get(day)
            .and_then(|row| row.get(slot))
            .copied()
            .unwrap_or(false)
    }

    /// Returns a copy with exactly one cell flipped; `self` is untouched.
    /// Callers replace their held grid with the result.
    pub fn toggled(&self, day: &str, slot: &str) -> Self {
        let mut next = self.clone();
        let row = next.cells.entry(day.to_string()).or_default();
        let flipped = !row.get(slot).copied().unwrap_or(false);
        row.insert(slot.to_string(), flipped);
        next
    }
}

pub fn default_availability() -> Availability {
    Availability::initialize(&WEEKDAYS, &AVAILABILITY_SLOTS)
}
