use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_trickbookd");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn trickbookd");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({ "id": id, "method": method, "params": params });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{} failed: {}",
        method,
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn toggle(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    student_id: &str,
    trick_id: &str,
) -> serde_json::Value {
    request_ok(
        stdin,
        reader,
        id,
        "tricks.toggle",
        json!({ "studentId": student_id, "trickId": trick_id }),
    )
}

// Rafaela (s4) starts with no tricks; 360 Flip ("7") has difficulty 7, so the
// cycle walks 350 -> 1050 -> 1400 -> 0 points.
#[test]
fn four_toggles_cycle_back_to_absent() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let r = toggle(&mut stdin, &mut reader, "1", "s4", "7");
    assert_eq!(r["outcome"], "started");
    assert_eq!(r["student"]["points"], 350);
    assert_eq!(r["student"]["level"], "beginner");
    assert_eq!(r["student"]["tricks"][0]["status"], "learning");
    assert!(r["student"]["tricks"][0]["dateLearned"].is_null());

    let r = toggle(&mut stdin, &mut reader, "2", "s4", "7");
    assert_eq!(r["outcome"], "learned");
    assert_eq!(r["student"]["points"], 1050);
    assert_eq!(r["student"]["level"], "intermediate");
    assert!(r["student"]["tricks"][0]["dateLearned"].is_string());

    let r = toggle(&mut stdin, &mut reader, "3", "s4", "7");
    assert_eq!(r["outcome"], "mastered");
    assert_eq!(r["student"]["points"], 1400);
    assert_eq!(r["student"]["level"], "intermediate");

    let r = toggle(&mut stdin, &mut reader, "4", "s4", "7");
    assert_eq!(r["outcome"], "removed");
    assert_eq!(r["student"]["points"], 0);
    assert_eq!(r["student"]["level"], "beginner");
    assert_eq!(
        r["student"]["tricks"].as_array().map(Vec::len),
        Some(0),
        "trick list must be back to its original empty state"
    );

    let _ = child.kill();
}

#[test]
fn toggle_touches_only_the_targeted_student() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let before = request_ok(&mut stdin, &mut reader, "1", "students.list", json!({}));
    let r = toggle(&mut stdin, &mut reader, "2", "s2", "3");
    assert_eq!(r["outcome"], "started");

    let after = request_ok(&mut stdin, &mut reader, "3", "students.list", json!({}));
    let before_rows = before["students"].as_array().expect("rows");
    let after_rows = after["students"].as_array().expect("rows");
    assert_eq!(before_rows.len(), after_rows.len());
    for (b, a) in before_rows.iter().zip(after_rows) {
        if a["id"] == "s2" {
            continue;
        }
        assert_eq!(b, a, "student {} changed", b["id"]);
    }

    let _ = child.kill();
}

#[test]
fn points_stay_consistent_with_records_after_every_toggle() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    // Lucas already holds Boardslide ("5", difficulty 3) as learning: 1350
    // total. Advancing it to learned adds 300.
    let r = toggle(&mut stdin, &mut reader, "1", "s1", "5");
    assert_eq!(r["outcome"], "learned");
    assert_eq!(r["student"]["points"], 1650);
    assert_eq!(r["student"]["level"], "advanced");

    let r = toggle(&mut stdin, &mut reader, "2", "s1", "5");
    assert_eq!(r["outcome"], "mastered");
    assert_eq!(r["student"]["points"], 1800);

    // The read path reports the same derived values as the toggle response.
    let got = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "students.get",
        json!({ "studentId": "s1" }),
    );
    assert_eq!(got["student"]["points"], 1800);
    assert_eq!(got["student"]["level"], "advanced");

    let _ = child.kill();
}
