//! JSONL file writer for transcript events.
//!
//! Each [`ConversationEvent`] becomes one JSON line with a `type` field and
//! an RFC3339 `timestamp`, appended through a buffered writer and flushed
//! per event so a crash loses at most the current line.

use adchat_application::ports::conversation_logger::{ConversationEvent, ConversationLogger};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Transcript logger writing one JSON object per line.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Create a logger writing to `path`, creating parent directories as
    /// needed. Returns `None` (with a warning) when the file cannot be
    /// created; transcript logging is never worth failing startup over.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                warn!(
                    "could not create transcript directory {}: {e}",
                    parent.display()
                );
                return None;
            }
        }

        match File::create(path) {
            Ok(file) => Some(Self {
                writer: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("could not create transcript file {}: {e}", path.display());
                None
            }
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

        let record = serde_json::json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": event.payload,
        });

        let Ok(line) = serde_json::to_string(&record) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{line}");
            let _ = writer.flush();
        }
    }
}
