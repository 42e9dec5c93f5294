use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::payload;
use crate::ipc::types::{AppState, Request};

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "catalog.list" => {
            let tricks: Vec<_> = state
                .catalog
                .list()
                .iter()
                .map(payload::trick_definition)
                .collect();
            Some(ok(&req.id, json!({ "tricks": tricks })))
        }
        _ => None,
    }
}
