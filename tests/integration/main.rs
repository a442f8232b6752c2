//! Integration tests for the facegate CLI
//!
//! These tests run the real binary against a temporary `FACEGATE_HOME` and an
//! in-process canned-response backend, covering the full cycle of:
//! session set -> check -> rendered outcome.


use std::sync::mpsc::{self, Receiver};
use std::thread;

use tempfile::TempDir;

/// Helper function to create a facegate command with an isolated home
pub fn facegate(home: &TempDir) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("facegate"));
    cmd.env("FACEGATE_HOME", home.path());
    cmd
}

/// Write a config pointing the CLI at the given backend URL
pub fn write_config(home: &TempDir, base_url: &str) {
    let content = format!("[server]\nurl = \"{base_url}\"\ntimeout_secs = 5\n");
    std::fs::write(home.path().join("config.toml"), content).expect("failed to write config");
}

/// One canned backend response: status code and JSON body
pub struct Canned(pub u16, pub &'static str);

/// Serve the canned responses in order on a fresh port
///
/// Returns the base URL and a receiver yielding the request line
/// (`METHOD url`) of each handled request.
pub fn serve(responses: Vec<Canned>) -> (String, Receiver<String>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("failed to bind fake backend");
    let base_url = format!("http://{}", server.server_addr());
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        for Canned(status, body) in responses {
            let Ok(request) = server.recv() else { return };
            let _ = tx.send(format!("{} {}", request.method(), request.url()));

            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                        .expect("static header"),
                );
            let _ = request.respond(response);
        }
    });

    (base_url, rx)
}
