use std::fmt;

use chrono::{DateTime, Utc};

use crate::{ExerciseID, TemplateID};

pub const UNTITLED_TEMPLATE_NAME: &str = "Untitled Workout";
pub const DEFAULT_SET_COUNT: u32 = 3;
pub const DEFAULT_REST_SECONDS: u32 = 90;

#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub id: TemplateID,
    pub name: String,
    pub description: String,
    pub exercises: Vec<TemplateExercise>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Template {
    /// A blank name is replaced by [`UNTITLED_TEMPLATE_NAME`].
    #[must_use]
    pub fn new(data: TemplateData, now: DateTime<Utc>) -> Self {
        let mut exercises = data.exercises;
        reindex(&mut exercises);
        Self {
            id: TemplateID::new(),
            name: if data.name.trim().is_empty() {
                UNTITLED_TEMPLATE_NAME.to_string()
            } else {
                data.name
            },
            description: data.description,
            exercises,
            created_at: now,
            updated_at: now,
        }
    }

    /// Shallow merge of all given fields.
    pub fn apply(&mut self, update: TemplateUpdate, now: DateTime<Utc>) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(mut exercises) = update.exercises {
            reindex(&mut exercises);
            self.exercises = exercises;
        }
        self.updated_at = now;
    }

    #[must_use]
    pub fn duplicate(&self, now: DateTime<Utc>) -> Self {
        Self {
            id: TemplateID::new(),
            name: format!("{} (Copy)", self.name),
            description: self.description.clone(),
            exercises: self.exercises.clone(),
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.default_sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TemplateExercise {
    pub exercise_id: ExerciseID,
    pub order_index: u32,
    pub tracking_type: TrackingType,
    pub default_sets: u32,
    pub target_rep_range: RepRange,
    pub rest_seconds: u32,
}

impl TemplateExercise {
    #[must_use]
    pub fn new(exercise_id: ExerciseID) -> Self {
        Self {
            exercise_id,
            order_index: 0,
            tracking_type: TrackingType::default(),
            default_sets: DEFAULT_SET_COUNT,
            target_rep_range: RepRange::default(),
            rest_seconds: DEFAULT_REST_SECONDS,
        }
    }
}

/// Inclusive range of target reps. `min` never exceeds `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepRange {
    min: u32,
    max: u32,
}

impl RepRange {
    /// Bounds given in the wrong order are swapped.
    #[must_use]
    pub fn new(a: u32, b: u32) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    #[must_use]
    pub fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u32 {
        self.max
    }
}

impl Default for RepRange {
    fn default() -> Self {
        Self::new(8, 12)
    }
}

impl fmt::Display for RepRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.min == self.max {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

impl TryFrom<&str> for RepRange {
    type Error = RepRangeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let invalid = || RepRangeError::Invalid(value.to_string());
        let (min, max) = match value.split_once('-') {
            Some((min, max)) => (min.trim(), max.trim()),
            None => (value.trim(), value.trim()),
        };
        let min = min.parse::<u32>().map_err(|_| invalid())?;
        let max = max.parse::<u32>().map_err(|_| invalid())?;
        Ok(Self::new(min, max))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("invalid rep range \"{0}\"")]
    Invalid(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TrackingType {
    #[default]
    Strength,
    Bodyweight,
    Duration,
    Cardio,
}

impl TrackingType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrackingType::Strength => "strength",
            TrackingType::Bodyweight => "bodyweight",
            TrackingType::Duration => "duration",
            TrackingType::Cardio => "cardio",
        }
    }
}

impl TryFrom<&str> for TrackingType {
    type Error = TrackingTypeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "strength" => Ok(TrackingType::Strength),
            "bodyweight" => Ok(TrackingType::Bodyweight),
            "duration" => Ok(TrackingType::Duration),
            "cardio" => Ok(TrackingType::Cardio),
            _ => Err(TrackingTypeError::Unknown(value.to_string())),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TrackingTypeError {
    #[error("unknown tracking type \"{0}\"")]
    Unknown(String),
}

/// Input for creating a template.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TemplateData {
    pub name: String,
    pub description: String,
    pub exercises: Vec<TemplateExercise>,
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct TemplateUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub exercises: Option<Vec<TemplateExercise>>,
}

fn reindex(exercises: &mut [TemplateExercise]) {
    for (index, exercise) in (0..).zip(exercises.iter_mut()) {
        exercise.order_index = index;
    }
}
