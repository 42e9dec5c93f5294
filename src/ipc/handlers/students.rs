use serde_json::json;

use crate::calc;
use crate::ipc::error::{err, ok};
use crate::ipc::payload;
use crate::ipc::types::{AppState, Request};

/// Roster grid rows: the full roster filtered by the current search text.
fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let students: Vec<_> = state
        .roster
        .filter(&state.view.search_text)
        .into_iter()
        .map(payload::student)
        .collect();
    ok(&req.id, json!({ "students": students }))
}

fn handle_get(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(student_id) = req.params.get("studentId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.studentId", None);
    };
    match state.roster.find_by_id(student_id) {
        Some(s) => ok(&req.id, json!({ "student": payload::student(s) })),
        None => err(
            &req.id,
            "not_found",
            format!("unknown student: {student_id}"),
            None,
        ),
    }
}

/// Detail overlay payload: the student plus live rank, completion ratio and
/// one row per catalog trick carrying the student's progress on it. Absent
/// tricks appear with a null status so the client renders the whole catalog.
fn handle_profile(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(student_id) = req.params.get("studentId").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.studentId", None);
    };
    let Some(student) = state.roster.find_by_id(student_id) else {
        return err(
            &req.id,
            "not_found",
            format!("unknown student: {student_id}"),
            None,
        );
    };

    let tricks: Vec<_> = state
        .catalog
        .list()
        .iter()
        .map(|def| {
            let record = student.tricks.iter().find(|r| r.trick_id == def.id);
            json!({
                "id": def.id,
                "name": def.name,
                "category": def.category,
                "difficulty": def.difficulty,
                "status": record.map(|r| r.status),
                "dateLearned": record.and_then(|r| r.date_learned.clone()),
            })
        })
        .collect();

    ok(
        &req.id,
        json!({
            "student": payload::student(student),
            "rank": state.roster.rank_of(student_id),
            "completionPercent": calc::completion_percent(&student.tricks, state.catalog.len()),
            "learnedCount": calc::learned_count(&student.tricks),
            "tricks": tricks,
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_list(state, req)),
        "students.get" => Some(handle_get(state, req)),
        "students.profile" => Some(handle_profile(state, req)),
        _ => None,
    }
}
