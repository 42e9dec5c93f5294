mod calc;
mod catalog;
mod ipc;
mod roster;
mod seed;
mod view;

use std::io::{self, BufRead, Write};

use crate::view::ViewState;

fn main() {
    let (catalog, roster) = match seed::load() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("trickbookd: failed to load seed dataset: {e:?}");
            std::process::exit(1);
        }
    };
    let mut state = ipc::AppState {
        catalog,
        roster,
        view: ViewState::default(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: ipc::Request = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                // Can't reply without id; ignore.
                let _ = writeln!(
                    stdout,
                    "{{\"ok\":false,\"error\":{{\"code\":\"bad_json\",\"message\":\"{}\"}}}}",
                    e
                );
                let _ = stdout.flush();
                continue;
            }
        };

        let resp = ipc::handle_request(&mut state, req);
        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}
