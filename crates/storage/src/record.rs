//! JSON representation of the stored data.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use unyield_domain as domain;
use uuid::Uuid;

const STATUS_DRAFT: &str = "draft";
const STATUS_COMPLETE: &str = "complete";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    InvalidTrackingType(#[from] domain::TrackingTypeError),
    #[error(transparent)]
    InvalidRepRange(#[from] domain::RepRangeError),
    #[error("invalid session status \"{0}\"")]
    InvalidStatus(String),
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<TemplateExercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&domain::Template> for Template {
    fn from(value: &domain::Template) -> Self {
        Self {
            id: *value.id,
            name: value.name.clone(),
            description: value.description.clone(),
            exercises: value.exercises.iter().map(TemplateExercise::from).collect(),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl TryFrom<Template> for domain::Template {
    type Error = RecordError;

    fn try_from(value: Template) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: value.name,
            description: value.description,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::TemplateExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TemplateExercise {
    pub exercise_id: String,
    pub order_index: u32,
    pub tracking_type: String,
    pub default_sets: u32,
    pub target_rep_range: String,
    pub rest_seconds: u32,
}

impl From<&domain::TemplateExercise> for TemplateExercise {
    fn from(value: &domain::TemplateExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            order_index: value.order_index,
            tracking_type: value.tracking_type.as_str().to_string(),
            default_sets: value.default_sets,
            target_rep_range: value.target_rep_range.to_string(),
            rest_seconds: value.rest_seconds,
        }
    }
}

impl TryFrom<TemplateExercise> for domain::TemplateExercise {
    type Error = RecordError;

    fn try_from(value: TemplateExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            exercise_id: value.exercise_id.into(),
            order_index: value.order_index,
            tracking_type: domain::TrackingType::try_from(value.tracking_type.as_str())?,
            default_sets: value.default_sets,
            target_rep_range: domain::RepRange::try_from(value.target_rep_range.as_str())?,
            rest_seconds: value.rest_seconds,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: Uuid,
    pub template_id: Option<Uuid>,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exercises: Vec<SessionExercise>,
}

impl Session {
    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.status == STATUS_DRAFT
    }
}

impl From<&domain::Session> for Session {
    fn from(value: &domain::Session) -> Self {
        Self {
            id: *value.id,
            template_id: value.template_id.map(|id| *id),
            name: value.name.clone(),
            started_at: value.started_at,
            finished_at: value.finished_at,
            status: value.status.as_str().to_string(),
            notes: value.notes.clone(),
            exercises: value.exercises.iter().map(SessionExercise::from).collect(),
        }
    }
}

impl TryFrom<Session> for domain::Session {
    type Error = RecordError;

    fn try_from(value: Session) -> Result<Self, Self::Error> {
        let status = match value.status.as_str() {
            STATUS_DRAFT => domain::SessionStatus::Draft,
            STATUS_COMPLETE => domain::SessionStatus::Complete,
            _ => return Err(RecordError::InvalidStatus(value.status)),
        };
        Ok(Self {
            id: value.id.into(),
            template_id: value.template_id.map(domain::TemplateID::from),
            name: value.name,
            started_at: value.started_at,
            finished_at: value.finished_at,
            status,
            notes: value.notes,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::SessionExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    pub id: Uuid,
    pub exercise_id: String,
    pub order_index: u32,
    pub tracking_type: String,
    #[serde(default)]
    pub sets: Vec<SessionSet>,
    #[serde(default)]
    pub last_set_number: u32,
}

impl From<&domain::SessionExercise> for SessionExercise {
    fn from(value: &domain::SessionExercise) -> Self {
        Self {
            id: *value.id,
            exercise_id: value.exercise_id.to_string(),
            order_index: value.order_index,
            tracking_type: value.tracking_type.as_str().to_string(),
            sets: value.sets.iter().map(SessionSet::from).collect(),
            last_set_number: value.last_set_number,
        }
    }
}

impl TryFrom<SessionExercise> for domain::SessionExercise {
    type Error = RecordError;

    fn try_from(value: SessionExercise) -> Result<Self, Self::Error> {
        let sets = value
            .sets
            .into_iter()
            .map(domain::SessionSet::from)
            .collect::<Vec<_>>();
        let last_set_number = sets
            .iter()
            .map(|s| s.set_number)
            .max()
            .unwrap_or(0)
            .max(value.last_set_number);
        Ok(Self {
            id: value.id.into(),
            exercise_id: value.exercise_id.into(),
            order_index: value.order_index,
            tracking_type: domain::TrackingType::try_from(value.tracking_type.as_str())?,
            sets,
            last_set_number,
        })
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionSet {
    pub id: Uuid,
    pub set_number: u32,
    pub reps: Option<u32>,
    pub weight: Option<f32>,
    pub duration_seconds: Option<u32>,
    pub distance: Option<f32>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub notes: String,
}

impl From<&domain::SessionSet> for SessionSet {
    fn from(value: &domain::SessionSet) -> Self {
        Self {
            id: *value.id,
            set_number: value.set_number,
            reps: value.reps,
            weight: value.weight,
            duration_seconds: value.duration_seconds,
            distance: value.distance,
            completed: value.completed,
            notes: value.notes.clone(),
        }
    }
}

impl From<SessionSet> for domain::SessionSet {
    fn from(value: SessionSet) -> Self {
        Self {
            id: value.id.into(),
            set_number: value.set_number,
            reps: value.reps,
            weight: value.weight,
            duration_seconds: value.duration_seconds,
            distance: value.distance,
            completed: value.completed,
            notes: value.notes,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub height_unit: HeightUnit,
    pub feature_flags: BTreeSet<String>,
}

impl From<&domain::Settings> for Settings {
    fn from(value: &domain::Settings) -> Self {
        Self {
            weight_unit: value.weight_unit.into(),
            height_unit: value.height_unit.into(),
            feature_flags: value.feature_flags.clone(),
        }
    }
}

impl From<Settings> for domain::Settings {
    fn from(value: Settings) -> Self {
        Self {
            weight_unit: value.weight_unit.into(),
            height_unit: value.height_unit.into(),
            feature_flags: value.feature_flags,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl From<domain::WeightUnit> for WeightUnit {
    fn from(value: domain::WeightUnit) -> Self {
        match value {
            domain::WeightUnit::Kg => WeightUnit::Kg,
            domain::WeightUnit::Lb => WeightUnit::Lb,
        }
    }
}

impl From<WeightUnit> for domain::WeightUnit {
    fn from(value: WeightUnit) -> Self {
        match value {
            WeightUnit::Kg => domain::WeightUnit::Kg,
            WeightUnit::Lb => domain::WeightUnit::Lb,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HeightUnit {
    #[default]
    Cm,
    In,
}

impl From<domain::HeightUnit> for HeightUnit {
    fn from(value: domain::HeightUnit) -> Self {
        match value {
            domain::HeightUnit::Cm => HeightUnit::Cm,
            domain::HeightUnit::In => HeightUnit::In,
        }
    }
}

impl From<HeightUnit> for domain::HeightUnit {
    fn from(value: HeightUnit) -> Self {
        match value {
            HeightUnit::Cm => domain::HeightUnit::Cm,
            HeightUnit::In => domain::HeightUnit::In,
        }
    }
}
