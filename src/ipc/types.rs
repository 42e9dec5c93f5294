use serde::Deserialize;

use crate::catalog::Catalog;
use crate::roster::RosterStore;
use crate::view::ViewState;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    pub catalog: Catalog,
    pub roster: RosterStore,
    pub view: ViewState,
}
