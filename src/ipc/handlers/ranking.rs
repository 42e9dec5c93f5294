use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::payload;
use crate::ipc::types::{AppState, Request};

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "ranking.list" => {
            let entries: Vec<_> = state
                .roster
                .ranking()
                .iter()
                .enumerate()
                .map(|(idx, s)| payload::ranking_entry(idx + 1, s))
                .collect();
            Some(ok(&req.id, json!({ "ranking": entries })))
        }
        _ => None,
    }
}
