//! JSONL file writer for orchestration events.
//!
//! Each [`InsightEvent`] becomes one JSON line carrying a `type` and a
//! `timestamp`. The file is opened in append mode so successive runs build a
//! single audit trail.

use fashionos_application::ports::insight_logger::{InsightEvent, InsightLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Insight logger writing one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record and
/// again on `Drop`.
pub struct JsonlInsightLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlInsightLogger {
    /// Open (or create) the log at `path`, creating parent directories.
    ///
    /// Returns `None` when the file cannot be opened; the caller falls back to
    /// no insight log rather than aborting the run.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create insight log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open insight log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn record(event: InsightEvent) -> Value {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let mut map = match event.payload {
            Value::Object(map) => map,
            other => {
                let mut map = Map::new();
                map.insert("data".to_string(), other);
                map
            }
        };
        map.insert("type".to_string(), Value::String(event.event_type.to_string()));
        map.insert("timestamp".to_string(), Value::String(timestamp));
        Value::Object(map)
    }
}

impl InsightLogger for JsonlInsightLogger {
    fn log(&self, event: InsightEvent) {
        let Ok(line) = serde_json::to_string(&Self::record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlInsightLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
