#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;

mod api;
mod error;
mod scoring;
mod session;
mod settings;
mod statistics;
mod store;
mod template;

pub use api::*;
pub use error::*;
pub use scoring::*;
pub use session::*;
pub use settings::*;
pub use statistics::*;
pub use store::*;
pub use template::*;

use derive_more::{Deref, Display};

macro_rules! uuid_id {
    ($name: ident) => {
        #[derive(Deref, Display, Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(uuid::Uuid);

        impl $name {
            #[must_use]
            pub fn new() -> Self {
                Self(uuid::Uuid::new_v4())
            }

            #[must_use]
            pub fn nil() -> Self {
                Self(uuid::Uuid::nil())
            }

            #[must_use]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl From<uuid::Uuid> for $name {
            fn from(value: uuid::Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(uuid::Uuid::from_bytes(value.to_be_bytes()))
            }
        }
    };
}

uuid_id!(TemplateID);
uuid_id!(SessionID);
uuid_id!(SessionExerciseID);
uuid_id!(SetID);

/// Key of an exercise in the catalog, e.g. `"squat"`.
#[derive(Deref, Display, Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ExerciseID(String);

impl AsRef<str> for ExerciseID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}
