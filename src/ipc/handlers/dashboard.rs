use serde_json::json;

use crate::ipc::error::ok;
use crate::ipc::payload;
use crate::ipc::types::{AppState, Request};

/// Dashboard tiles: headline counts, the current leader and the top five of
/// the live ranking. All recomputed per request.
pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.summary" => {
            let ranking = state.roster.ranking();
            let top_student = ranking.first().map(|s| payload::ranking_entry(1, s));
            let top_five: Vec<_> = ranking
                .iter()
                .take(5)
                .enumerate()
                .map(|(idx, s)| payload::ranking_entry(idx + 1, s))
                .collect();
            Some(ok(
                &req.id,
                json!({
                    "totalStudents": state.roster.list().len(),
                    "totalTricks": state.catalog.len(),
                    "topStudent": top_student,
                    "topFive": top_five,
                }),
            ))
        }
        _ => None,
    }
}
