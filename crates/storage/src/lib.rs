#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use strum::{AsRefStr, EnumIter};
use unyield_domain::StorageError;

pub mod file;
#[allow(clippy::module_name_repetitions)]
pub mod local_storage;
pub mod log;
pub mod memory;
pub mod record;

pub use file::FileStore;
pub use local_storage::LocalStorage;
pub use memory::MemoryStore;

/// String-keyed store of JSON documents.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
    /// Remove all keys.
    fn clear(&self) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for std::sync::Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }

    fn clear(&self) -> Result<(), StorageError> {
        (**self).clear()
    }
}

#[derive(AsRefStr, EnumIter, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "workout_templates")]
    Templates,
    #[strum(serialize = "workout_sessions")]
    Sessions,
    #[strum(serialize = "active_workout_session")]
    ActiveSession,
    #[strum(serialize = "settings")]
    Settings,
    #[strum(serialize = "log")]
    Log,
}
