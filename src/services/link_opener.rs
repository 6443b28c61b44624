// Linkshelf link opener
// Opening a link is a side effect the core fires and forgets.

use std::sync::{Arc, Mutex};

use tracing::info;

/// Navigates to a URL outside the app (a new browser tab, a shell handler...).
pub trait LinkOpener: Send {
    fn open(&mut self, url: &str);
}

/// Only records the request in the log; the front end does the navigation.
#[derive(Debug, Default)]
pub struct LogOpener;

impl LinkOpener for LogOpener {
    fn open(&mut self, url: &str) {
        info!(%url, "opening link");
    }
}

/// Remembers every URL it was asked to open. Clones share the history.
#[derive(Debug, Clone, Default)]
pub struct RecordingOpener {
    opened: Arc<Mutex<Vec<String>>>,
}

impl RecordingOpener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.lock().map(|v| v.clone()).unwrap_or_default()
    }
}

impl LinkOpener for RecordingOpener {
    fn open(&mut self, url: &str) {
        if let Ok(mut v) = self.opened.lock() {
            v.push(url.to_string());
        }
    }
}
