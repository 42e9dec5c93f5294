use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::view::Screen;

fn view_json(state: &AppState) -> serde_json::Value {
    json!({
        "screen": state.view.screen,
        "selectedStudentId": state.view.selected_student_id,
        "searchText": state.view.search_text,
    })
}

fn handle_navigate(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(raw) = req.params.get("screen").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.screen", None);
    };
    let Some(screen) = Screen::parse(raw) else {
        return err(
            &req.id,
            "bad_params",
            "screen must be one of: dashboard, roster, ranking",
            None,
        );
    };
    state.view.navigate(screen);
    ok(&req.id, view_json(state))
}

fn handle_select_student(state: &mut AppState, req: &Request) -> serde_json::Value {
    let raw = req.params.get("studentId");
    let selection = match raw {
        None | Some(serde_json::Value::Null) => None,
        Some(serde_json::Value::String(id)) => {
            if state.roster.find_by_id(id).is_none() {
                return err(&req.id, "not_found", format!("unknown student: {id}"), None);
            }
            Some(id.clone())
        }
        Some(_) => {
            return err(&req.id, "bad_params", "studentId must be string or null", None);
        }
    };
    state.view.select_student(selection);
    ok(&req.id, view_json(state))
}

fn handle_search(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(text) = req.params.get("text").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.text", None);
    };
    state.view.set_search(text.to_string());
    ok(&req.id, view_json(state))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "view.get" => Some(ok(&req.id, view_json(state))),
        "view.navigate" => Some(handle_navigate(state, req)),
        "view.selectStudent" => Some(handle_select_student(state, req)),
        "view.search" => Some(handle_search(state, req)),
        _ => None,
    }
}
