use std::path::PathBuf;

use serde::Deserialize;

use crate::state::StudioState;
use crate::store::Store;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub workspace: Option<PathBuf>,
    pub studio: StudioState<Store>,
}

impl AppState {
    /// Boot state: no workspace selected, every screen served from seeded
    /// defaults, writes dropped until `workspace.select` lands.
    pub fn detached() -> anyhow::Result<AppState> {
        Ok(AppState {
            workspace: None,
            studio: StudioState::open(Store::Detached)?,
        })
    }
}
