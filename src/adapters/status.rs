use crate::core::{Clock, StatusReporter};
use serde::Serialize;
use std::fmt::Debug;
use std::sync::{Arc, Mutex};

pub const DEBUG_LOG_BANNER: &str = "Debug log initialised…";
pub const DANGER_CLASS: &str = "danger";

/// Append-only, timestamped debug log shared between status lines.
#[derive(Clone)]
pub struct DebugLog {
    sink: Option<Arc<Mutex<String>>>,
    clock: Arc<dyn Clock>,
}

impl DebugLog {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            sink: Some(Arc::new(Mutex::new(DEBUG_LOG_BANNER.to_string()))),
            clock,
        }
    }

    /// A log with no output element. Every call is dropped.
    pub fn detached(clock: Arc<dyn Clock>) -> Self {
        Self { sink: None, clock }
    }

    pub fn log(&self, message: &str, data: Option<&serde_json::Value>) {
        let Some(sink) = &self.sink else {
            return;
        };

        let ts = self.clock.now_utc().format("%Y-%m-%dT%H:%M:%S%.3fZ");
        let mut line = format!("[{}] {}", ts, message);
        if let Some(data) = data {
            line.push(' ');
            line.push_str(&data.to_string());
        }
        tracing::debug!("{}", line);

        if let Ok(mut text) = sink.lock() {
            text.push('\n');
            text.push_str(&line);
        }
    }

    /// Log a value as JSON, or as its `Debug` form when it does not serialize.
    pub fn log_data<T: Serialize + Debug>(&self, message: &str, data: &T) {
        match serde_json::to_value(data) {
            Ok(value) => self.log(message, Some(&value)),
            Err(_) => self.log(&format!("{} {:?}", message, data), None),
        }
    }

    pub fn contents(&self) -> String {
        self.sink
            .as_ref()
            .and_then(|sink| sink.lock().ok().map(|text| text.clone()))
            .unwrap_or_default()
    }

    pub fn last_line(&self) -> String {
        self.contents().lines().last().unwrap_or_default().to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusKind {
    Main,
    Assistant,
}

#[derive(Debug, Default)]
struct StatusView {
    text: String,
    danger: bool,
}

/// Status line element that mirrors every message into the debug log.
pub struct StatusLine {
    view: Option<Mutex<StatusView>>,
    kind: StatusKind,
    log: DebugLog,
}

impl StatusLine {
    pub fn new(log: DebugLog) -> Self {
        Self {
            view: Some(Mutex::new(StatusView {
                text: "Status: Waiting…".to_string(),
                danger: false,
            })),
            kind: StatusKind::Main,
            log,
        }
    }

    /// The assistant status line: raw text, empty messages clear it silently.
    pub fn assistant(log: DebugLog) -> Self {
        Self {
            view: Some(Mutex::new(StatusView::default())),
            kind: StatusKind::Assistant,
            log,
        }
    }

    pub fn detached(log: DebugLog) -> Self {
        Self {
            view: None,
            kind: StatusKind::Main,
            log,
        }
    }

    pub fn text(&self) -> String {
        self.view
            .as_ref()
            .and_then(|view| view.lock().ok().map(|v| v.text.clone()))
            .unwrap_or_default()
    }

    pub fn class_name(&self) -> &'static str {
        let danger = self
            .view
            .as_ref()
            .and_then(|view| view.lock().ok().map(|v| v.danger))
            .unwrap_or(false);
        if danger {
            DANGER_CLASS
        } else {
            ""
        }
    }

    pub fn debug_log(&self) -> &DebugLog {
        &self.log
    }
}

impl StatusReporter for StatusLine {
    fn report(&self, message: &str, is_error: bool) {
        let Some(view) = &self.view else {
            return;
        };

        if let Ok(mut view) = view.lock() {
            view.text = match self.kind {
                StatusKind::Main => format!("Status: {}", message),
                StatusKind::Assistant => message.to_string(),
            };
            view.danger = is_error;
        }

        let marker = if is_error { " [ERROR]" } else { "" };
        match self.kind {
            StatusKind::Main => self.log.log(&format!("STATUS: {}{}", message, marker), None),
            StatusKind::Assistant if !message.is_empty() => {
                self.log.log(&format!("AI: {}{}", message, marker), None)
            }
            StatusKind::Assistant => {}
        }
    }
}

/// Reporter that only forwards to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl StatusReporter for TracingReporter {
    fn report(&self, message: &str, is_error: bool) {
        if is_error {
            tracing::warn!("❌ {}", message);
        } else {
            tracing::info!("{}", message);
        }
    }
}
