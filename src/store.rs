use std::rc::Rc;

use anyhow::Context;
use chrono::Utc;
use log::warn;
use rusqlite::{Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Capability handed to every collection: read and write one serialized
/// value per named key. Collections never see the medium behind it.
pub trait StateStore {
    fn read_raw(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn write_raw(&self, key: &str, raw: &str) -> anyhow::Result<()>;

    /// Reads `key`, decoding into `T`. An absent key yields `default`.
    /// Stored text that no longer decodes as `T` also yields `default`,
    /// with a warning, so one damaged row cannot wedge the whole daemon.
    /// Only a medium failure is an error.
    fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> anyhow::Result<T> {
        match self.read_raw(key)? {
            None => Ok(default),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!("stored value under {key:?} does not decode ({e}); using default");
                    Ok(default)
                }
            },
        }
    }

    /// Serializes `value` and overwrites whatever `key` held before.
    fn save<T: Serialize>(&self, key: &str, value: &T) -> anyhow::Result<()> {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("serialize value for key {key:?}"))?;
        self.write_raw(key, &raw)
    }
}

/// The two backends the daemon runs with. `Detached` is the state before
/// `workspace.select`: reads come back empty so every screen works from
/// seeded defaults, and writes are dropped without error.
#[derive(Clone)]
pub enum Store {
    Sqlite(Rc<Connection>),
    Detached,
}

impl StateStore for Store {
    fn read_raw(&self, key: &str) -> anyhow::Result<Option<String>> {
        match self {
            Store::Sqlite(conn) => conn
                .query_row(
                    "SELECT value_json FROM dashboard_state WHERE key = ?1",
                    [key],
                    |row| row.get(0),
                )
                .optional()
                .with_context(|| format!("read key {key:?}")),
            Store::Detached => Ok(None),
        }
    }

    fn write_raw(&self, key: &str, raw: &str) -> anyhow::Result<()> {
        match self {
            Store::Sqlite(conn) => {
                conn.execute(
                    "INSERT INTO dashboard_state (key, value_json, updated_at)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET
                       value_json = excluded.value_json,
                       updated_at = excluded.updated_at",
                    (key, raw, Utc::now().to_rfc3339()),
                )
                .with_context(|| format!("write key {key:?}"))?;
                Ok(())
            }
            Store::Detached => Ok(()),
        }
    }
}

/// Shared-map store for unit tests. Clones share the same entries, the
/// same way `Store::Sqlite` clones share one connection.
#[cfg(test)]
#[derive(Clone, Default)]
pub struct MemoryStore {
    entries: Rc<std::cell::RefCell<std::collections::HashMap<String, String>>>,
}

#[cfg(test)]
impl StateStore for MemoryStore {
    fn read_raw(&self, key: &str) -> anyhow::Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write_raw(&self, key: &str, raw: &str) -> anyhow::Result<()> {
        self.entries.borrow_mut().insert(key.to_string(), raw.to_string());
        Ok(())
    }
}
