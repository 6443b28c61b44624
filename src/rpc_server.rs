//! Linkshelf RPC Server: JSON-RPC over stdin/stdout for a web or desktop shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"form.update", "params":{"field":"title","value":"..."}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! Logs go to stderr.

use std::io::{self, BufRead, Write};
use std::sync::Mutex;
use std::time::Instant;

use linkshelf::app::App;
use linkshelf::logging;
use linkshelf::rpc_handler::handle_method;
use linkshelf::services::link_opener::LogOpener;
use linkshelf::services::notification::NotificationQueue;
use linkshelf::services::settings_engine::{SettingsEngine, SettingsEngineTrait};

use serde_json::{json, Value};
use tracing::{error, info, warn};

/// Fixed-window limiter: at most `max_per_second` requests per second.
struct RateLimiter {
    window_start: Instant,
    request_count: u32,
    max_per_second: u32,
}

impl RateLimiter {
    fn new(max_per_second: u32) -> Self {
        Self { window_start: Instant::now(), request_count: 0, max_per_second }
    }

    /// Returns true if the request is allowed, false if rate-limited.
    fn check(&mut self) -> bool {
        if self.window_start.elapsed().as_secs() >= 1 {
            self.window_start = Instant::now();
            self.request_count = 0;
        }
        self.request_count += 1;
        self.request_count <= self.max_per_second
    }
}

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut settings_engine = SettingsEngine::new(None);
    let settings = match settings_engine.load() {
        Ok(s) => s,
        Err(e) => {
            // Logging is not up yet; fall back to defaults and report once it is.
            logging::init("info");
            error!("failed to load settings from {}: {}", settings_engine.get_config_path(), e);
            Default::default()
        }
    };
    logging::init(&settings.logging.filter);
    info!(config = settings_engine.get_config_path(), "starting linkshelf-rpc");

    let queue = NotificationQueue::new();
    let app = Mutex::new(App::new(
        &settings,
        Box::new(queue.clone()),
        Box::new(LogOpener),
    ));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_line(&mut out, &json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}))?;

    let mut rate_limiter = RateLimiter::new(settings.rpc.max_requests_per_second);

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                warn!("stdin closed: {}", e);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                write_line(&mut out, &json!({"id":null,"error":format!("parse error: {}", e)}))?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);

        if !rate_limiter.check() {
            warn!("rate limit exceeded");
            write_line(&mut out, &json!({"id": id, "error": "rate limit exceeded"}))?;
            continue;
        }

        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(&app, &queue, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => json!({"id": id, "error": err}),
        };
        write_line(&mut out, &response)?;
    }

    info!("linkshelf-rpc exiting");
    Ok(())
}
