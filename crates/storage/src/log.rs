use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

/// Maximum number of persisted log entries.
pub const MAX_ENTRIES: usize = 100;

pub static LOG: Mutex<Option<Arc<dyn Repository>>> = Mutex::new(None);

/// Storage of log entries, newest first.
///
/// Implementations must not emit log records themselves.
pub trait Repository: Send + Sync + 'static {
    fn read_entries(&self) -> Result<VecDeque<Entry>, Error>;
    fn write_entry(&self, entry: Entry) -> Result<(), Error>;
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{0}")]
    Unknown(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Entry {
    pub time: DateTime<Utc>,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Add `entry` in front of `entries` and drop the oldest entries beyond [`MAX_ENTRIES`].
pub fn prepend(entries: &mut VecDeque<Entry>, entry: Entry) {
    entries.push_front(entry);
    entries.truncate(MAX_ENTRIES);
}

static LOGGER: Logger = Logger;

/// # Errors
///
/// Returns an error if a logger has already been initialized.
pub fn init(repository: Arc<dyn Repository>, max_level: LevelFilter) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(max_level))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let repository = LOG.lock().ok().and_then(|log| log.clone());
        if let Some(repository) = repository {
            let _ = repository.write_entry(Entry {
                time: Utc::now(),
                level: record.level(),
                message: record.args().to_string(),
            });
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use log::Log;
    use pretty_assertions::assert_eq;

    use crate::{LocalStorage, MemoryStore};

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: Utc::now(),
            level: Level::Info,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_prepend() {
        let mut entries = VecDeque::new();
        for i in 0..150 {
            prepend(&mut entries, entry(&i.to_string()));
        }
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front().map(|e| e.message.as_str()), Some("149"));
        assert_eq!(entries.back().map(|e| e.message.as_str()), Some("50"));
    }

    #[test]
    fn test_entry_json() {
        let entry = Entry {
            time: "2024-03-01T18:00:00Z".parse().unwrap(),
            level: Level::Warn,
            message: String::from("corrupt data"),
        };
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "time": "2024-03-01T18:00:00Z",
                "level": "Warn",
                "message": "corrupt data",
            })
        );
    }

    #[test]
    fn test_logger() {
        let repository = Arc::new(LocalStorage::new(MemoryStore::new()));
        if let Ok(mut log) = LOG.lock() {
            *log = Some(repository.clone());
        }
        log::set_max_level(LevelFilter::Trace);

        Logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("failed to write sessions"))
                .build(),
        );

        let entries = repository.read_entries().unwrap();
        assert!(
            entries
                .iter()
                .any(|e| e.level == Level::Error && e.message == "failed to write sessions")
        );
    }
}
