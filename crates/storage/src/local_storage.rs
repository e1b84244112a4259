use std::collections::VecDeque;

use log::{debug, warn};
use serde::{Serialize, de::DeserializeOwned};
use unyield_domain as domain;

use crate::{Key, KeyValueStore, record};

/// Repository persisting the domain data as JSON documents in a key-value store.
///
/// Missing or malformed documents are read as empty data.
pub struct LocalStorage<S> {
    store: S,
}

impl<S: KeyValueStore> LocalStorage<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    fn read<T: DeserializeOwned>(&self, key: Key) -> Result<Option<T>, domain::StorageError> {
        let Some(value) = self.store.get(key.as_ref())? else {
            return Ok(None);
        };
        match serde_json::from_str(&value) {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                warn!("ignoring invalid data for key \"{}\": {err}", key.as_ref());
                Ok(None)
            }
        }
    }

    fn write<T: Serialize + ?Sized>(&self, key: Key, value: &T) -> Result<(), domain::StorageError> {
        let value =
            serde_json::to_string(value).map_err(|err| domain::StorageError::InvalidData {
                key: key.as_ref().to_string(),
                reason: err.to_string(),
            })?;
        self.store.set(key.as_ref(), &value)
    }

    fn read_all<R, T>(&self, key: Key) -> Result<Vec<T>, domain::StorageError>
    where
        R: DeserializeOwned,
        T: TryFrom<R, Error = record::RecordError>,
    {
        Ok(self
            .read::<Vec<R>>(key)?
            .unwrap_or_default()
            .into_iter()
            .filter_map(|r| match T::try_from(r) {
                Ok(value) => Some(value),
                Err(err) => {
                    warn!("ignoring invalid entry for key \"{}\": {err}", key.as_ref());
                    None
                }
            })
            .collect())
    }
}

impl<S: KeyValueStore> domain::WorkoutRepository for LocalStorage<S> {
    fn read_templates(&self) -> Result<Vec<domain::Template>, domain::StorageError> {
        self.read_all::<record::Template, _>(Key::Templates)
    }

    fn write_templates(&self, templates: &[domain::Template]) -> Result<(), domain::StorageError> {
        self.write(
            Key::Templates,
            &templates
                .iter()
                .map(record::Template::from)
                .collect::<Vec<_>>(),
        )
    }

    fn read_sessions(&self) -> Result<Vec<domain::Session>, domain::StorageError> {
        self.read_all::<record::Session, _>(Key::Sessions)
    }

    fn write_sessions(&self, sessions: &[domain::Session]) -> Result<(), domain::StorageError> {
        self.write(
            Key::Sessions,
            &sessions
                .iter()
                .map(record::Session::from)
                .collect::<Vec<_>>(),
        )
    }

    fn read_active_session(&self) -> Result<Option<domain::Session>, domain::StorageError> {
        let Some(session) = self.read::<record::Session>(Key::ActiveSession)? else {
            return Ok(None);
        };
        if !session.is_draft() {
            debug!(
                "ignoring active session {} with status \"{}\"",
                session.id, session.status
            );
            return Ok(None);
        }
        match domain::Session::try_from(session) {
            Ok(session) => Ok(Some(session)),
            Err(err) => {
                warn!("ignoring invalid active session: {err}");
                Ok(None)
            }
        }
    }

    fn write_active_session(
        &self,
        session: Option<&domain::Session>,
    ) -> Result<(), domain::StorageError> {
        match session {
            Some(session) => self.write(Key::ActiveSession, &record::Session::from(session)),
            None => self.store.remove(Key::ActiveSession.as_ref()),
        }
    }

    fn clear(&self) -> Result<(), domain::StorageError> {
        self.store.clear()
    }
}

impl<S: KeyValueStore> domain::SettingsRepository for LocalStorage<S> {
    fn read_settings(&self) -> Result<domain::Settings, domain::StorageError> {
        Ok(self
            .read::<record::Settings>(Key::Settings)?
            .map(domain::Settings::from)
            .unwrap_or_default())
    }

    fn write_settings(&self, settings: &domain::Settings) -> Result<(), domain::StorageError> {
        self.write(Key::Settings, &record::Settings::from(settings))
    }
}

impl<S: KeyValueStore + 'static> crate::log::Repository for LocalStorage<S> {
    fn read_entries(&self) -> Result<VecDeque<crate::log::Entry>, crate::log::Error> {
        match self.store.get(Key::Log.as_ref()) {
            Ok(Some(value)) => Ok(serde_json::from_str(&value).unwrap_or_default()),
            Ok(None) => Ok(VecDeque::new()),
            Err(err) => Err(crate::log::Error::Unknown(err.to_string())),
        }
    }

    fn write_entry(&self, entry: crate::log::Entry) -> Result<(), crate::log::Error> {
        let mut entries = self.read_entries()?;
        crate::log::prepend(&mut entries, entry);
        let value = serde_json::to_string(&entries)
            .map_err(|err| crate::log::Error::Unknown(err.to_string()))?;
        self.store
            .set(Key::Log.as_ref(), &value)
            .map_err(|err| crate::log::Error::Unknown(err.to_string()))
    }
}
