mod collections;
mod db;
mod grid;
mod ipc;
mod model;
mod state;
mod store;
mod views;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use serde_json::json;

/// Headless state daemon for the studio admin dashboard. A UI shell spawns
/// it and drives it with line-delimited JSON requests over stdin/stdout.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Workspace directory to open at startup instead of waiting for a
    /// workspace.select request.
    #[arg(long, value_name = "DIR")]
    workspace: Option<PathBuf>,
}

fn main() {
    // stdout carries the protocol; diagnostics go to stderr only.
    env_logger::builder()
        .target(env_logger::Target::Stderr)
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();

    let mut state = match ipc::AppState::detached() {
        Ok(s) => s,
        Err(e) => {
            error!("failed to initialize: {e:#}");
            std::process::exit(1);
        }
    };

    if let Some(path) = args.workspace {
        if let Err(e) = ipc::select_workspace(&mut state, &path) {
            error!("failed to open workspace {}: {e:#}", path.display());
            std::process::exit(1);
        }
    }

    info!("listening on stdio");

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
                // Can't reply with an id we never parsed.
                let resp = json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() }
                });
                let _ = writeln!(stdout, "{}", resp);
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
