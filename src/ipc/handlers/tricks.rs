use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::payload;
use crate::ipc::types::{AppState, Request};

/// The system's single mutator. Advances the (student, trick) pair one step
/// through absent -> learning -> learned -> mastered -> absent and returns
/// the updated student so clients re-render from authoritative state.
fn handle_toggle(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(student_id) = req.params.get("studentId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.studentId", None);
    };
    let Some(trick_id) = req.params.get("trickId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.trickId", None);
    };

    match state.roster.toggle_trick(student_id, trick_id, &state.catalog) {
        Some((outcome, student)) => ok(
            &req.id,
            json!({
                "outcome": outcome,
                "student": payload::student(student),
            }),
        ),
        None => err(
            &req.id,
            "not_found",
            format!("unknown student: {student_id}"),
            None,
        ),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "tricks.toggle" => Some(handle_toggle(state, req)),
        _ => None,
    }
}
