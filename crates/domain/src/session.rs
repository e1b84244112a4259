use chrono::{DateTime, Duration, Utc};

use crate::{
    DEFAULT_SET_COUNT, ExerciseID, SessionError, SessionExerciseID, SessionID, SetID, Template,
    TemplateID, TrackingType, calc_strength_ratio,
};

pub const QUICK_WORKOUT_NAME: &str = "Quick Workout";

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: SessionID,
    pub template_id: Option<TemplateID>,
    pub name: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub status: SessionStatus,
    pub notes: String,
    pub exercises: Vec<SessionExercise>,
}

impl Session {
    /// Create a draft session with one set per configured default set of each template exercise.
    #[must_use]
    pub fn from_template(template: &Template, name: Option<String>, now: DateTime<Utc>) -> Self {
        Self::draft(
            template.id.into(),
            name.unwrap_or_else(|| template.name.clone()),
            template
                .exercises
                .iter()
                .map(|e| ExerciseConfig {
                    exercise_id: e.exercise_id.clone(),
                    tracking_type: Some(e.tracking_type),
                    sets: Some(e.default_sets),
                })
                .collect(),
            now,
        )
    }

    #[must_use]
    pub fn quick(name: Option<String>, exercises: Vec<ExerciseConfig>, now: DateTime<Utc>) -> Self {
        Self::draft(
            None,
            name.unwrap_or_else(|| QUICK_WORKOUT_NAME.to_string()),
            exercises,
            now,
        )
    }

    fn draft(
        template_id: Option<TemplateID>,
        name: String,
        exercises: Vec<ExerciseConfig>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut session = Self {
            id: SessionID::new(),
            template_id,
            name,
            started_at: now,
            finished_at: None,
            status: SessionStatus::Draft,
            notes: String::new(),
            exercises: vec![],
        };
        session.add_exercises(exercises);
        session
    }

    #[must_use]
    pub fn is_draft(&self) -> bool {
        self.status == SessionStatus::Draft
    }

    pub fn exercise_mut(
        &mut self,
        id: SessionExerciseID,
    ) -> Result<&mut SessionExercise, SessionError> {
        self.exercises
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or(SessionError::ExerciseNotFound(id))
    }

    pub fn add_exercise(&mut self, config: ExerciseConfig) -> SessionExerciseID {
        let exercise = SessionExercise::new(
            config.exercise_id,
            config.tracking_type.unwrap_or_default(),
            u32::try_from(self.exercises.len()).unwrap_or(u32::MAX),
            config.sets.unwrap_or(DEFAULT_SET_COUNT),
        );
        let id = exercise.id;
        self.exercises.push(exercise);
        id
    }

    pub fn add_exercises(&mut self, configs: Vec<ExerciseConfig>) -> Vec<SessionExerciseID> {
        configs
            .into_iter()
            .map(|config| self.add_exercise(config))
            .collect()
    }

    pub fn remove_exercise(&mut self, id: SessionExerciseID) -> Result<(), SessionError> {
        let len = self.exercises.len();
        self.exercises.retain(|e| e.id != id);
        if self.exercises.len() == len {
            return Err(SessionError::ExerciseNotFound(id));
        }
        for (index, exercise) in (0..).zip(self.exercises.iter_mut()) {
            exercise.order_index = index;
        }
        Ok(())
    }

    pub fn finish(&mut self, notes: Option<String>, now: DateTime<Utc>) {
        if let Some(notes) = notes {
            self.notes = notes;
        }
        self.finished_at = Some(now);
        self.status = SessionStatus::Complete;
    }

    /// Elapsed time of a finished session.
    #[must_use]
    pub fn duration(&self) -> Option<Duration> {
        self.finished_at.map(|finished_at| finished_at - self.started_at)
    }

    #[must_use]
    pub fn num_sets(&self) -> usize {
        self.exercises.iter().map(|e| e.sets.len()).sum()
    }

    #[must_use]
    pub fn num_completed_sets(&self) -> usize {
        self.completed_sets().count()
    }

    /// Sum of reps × weight over all completed sets.
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.completed_sets()
            .filter_map(|s| match (s.reps, s.weight) {
                (Some(reps), Some(weight)) => Some(f64::from(reps) * f64::from(weight)),
                _ => None,
            })
            .sum()
    }

    #[must_use]
    pub fn best_strength_ratio(&self, bodyweight: f64) -> f64 {
        self.completed_sets()
            .map(|s| calc_strength_ratio(s.reps, s.weight.map(f64::from), Some(bodyweight)))
            .fold(0.0, f64::max)
    }

    fn completed_sets(&self) -> impl Iterator<Item = &SessionSet> {
        self.exercises
            .iter()
            .flat_map(|e| e.sets.iter())
            .filter(|s| s.completed)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Draft,
    Complete,
}

impl SessionStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Draft => "draft",
            SessionStatus::Complete => "complete",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionExercise {
    pub id: SessionExerciseID,
    pub exercise_id: ExerciseID,
    pub order_index: u32,
    pub tracking_type: TrackingType,
    pub sets: Vec<SessionSet>,
    /// Highest set number ever assigned in this exercise.
    pub last_set_number: u32,
}

impl SessionExercise {
    #[must_use]
    pub fn new(
        exercise_id: ExerciseID,
        tracking_type: TrackingType,
        order_index: u32,
        num_sets: u32,
    ) -> Self {
        let mut exercise = Self {
            id: SessionExerciseID::new(),
            exercise_id,
            order_index,
            tracking_type,
            sets: vec![],
            last_set_number: 0,
        };
        for _ in 0..num_sets {
            exercise.add_set();
        }
        exercise
    }

    /// Set numbers of deleted sets are never handed out again.
    #[must_use]
    pub fn next_set_number(&self) -> u32 {
        self.sets
            .iter()
            .map(|s| s.set_number)
            .max()
            .unwrap_or(0)
            .max(self.last_set_number)
            + 1
    }

    pub fn add_set(&mut self) -> SetID {
        let set = SessionSet::new(self.next_set_number());
        let id = set.id;
        self.last_set_number = set.set_number;
        self.sets.push(set);
        id
    }

    pub fn remove_set(&mut self, id: SetID) -> Result<(), SessionError> {
        let len = self.sets.len();
        self.sets.retain(|s| s.id != id);
        if self.sets.len() == len {
            return Err(SessionError::SetNotFound(id));
        }
        Ok(())
    }

    pub fn set_mut(&mut self, id: SetID) -> Result<&mut SessionSet, SessionError> {
        self.sets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(SessionError::SetNotFound(id))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionSet {
    pub id: SetID,
    pub set_number: u32,
    pub reps: Option<u32>,
    pub weight: Option<f32>,
    pub duration_seconds: Option<u32>,
    pub distance: Option<f32>,
    pub completed: bool,
    pub notes: String,
}

impl SessionSet {
    #[must_use]
    pub fn new(set_number: u32) -> Self {
        Self {
            id: SetID::new(),
            set_number,
            reps: None,
            weight: None,
            duration_seconds: None,
            distance: None,
            completed: false,
            notes: String::new(),
        }
    }

    pub fn apply(&mut self, update: &SetUpdate) {
        if let Some(reps) = update.reps {
            self.reps = Some(reps);
        }
        if let Some(weight) = update.weight {
            self.weight = Some(weight);
        }
        if let Some(duration_seconds) = update.duration_seconds {
            self.duration_seconds = Some(duration_seconds);
        }
        if let Some(distance) = update.distance {
            self.distance = Some(distance);
        }
        if let Some(completed) = update.completed {
            self.completed = completed;
        }
        if let Some(notes) = &update.notes {
            self.notes.clone_from(notes);
        }
    }
}

/// Fields to merge into a set. `None` leaves the field unchanged.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SetUpdate {
    pub reps: Option<u32>,
    pub weight: Option<f32>,
    pub duration_seconds: Option<u32>,
    pub distance: Option<f32>,
    pub completed: Option<bool>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseConfig {
    pub exercise_id: ExerciseID,
    pub tracking_type: Option<TrackingType>,
    pub sets: Option<u32>,
}

impl From<ExerciseID> for ExerciseConfig {
    fn from(value: ExerciseID) -> Self {
        Self {
            exercise_id: value,
            tracking_type: None,
            sets: None,
        }
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct StartSession {
    pub template_id: Option<TemplateID>,
    pub name: Option<String>,
    pub initial_exercises: Vec<ExerciseConfig>,
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    use crate::{TemplateData, TemplateExercise};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap()
    }

    fn set_numbers(exercise: &SessionExercise) -> Vec<u32> {
        exercise.sets.iter().map(|s| s.set_number).collect()
    }

    #[test]
    fn test_session_from_template() {
        let template = Template::new(
            TemplateData {
                name: String::from("Legs"),
                exercises: vec![
                    TemplateExercise::new("squat".into()),
                    TemplateExercise {
                        tracking_type: TrackingType::Duration,
                        default_sets: 2,
                        ..TemplateExercise::new("plank".into())
                    },
                ],
                ..TemplateData::default()
            },
            now(),
        );

        let session = Session::from_template(&template, None, now());

        assert_eq!(session.template_id, Some(template.id));
        assert_eq!(session.name, "Legs");
        assert_eq!(session.status, SessionStatus::Draft);
        assert_eq!(session.started_at, now());
        assert_eq!(session.finished_at, None);
        assert_eq!(session.exercises.len(), 2);
        assert_eq!(set_numbers(&session.exercises[0]), vec![1, 2, 3]);
        assert_eq!(set_numbers(&session.exercises[1]), vec![1, 2]);
        assert_eq!(session.exercises[1].tracking_type, TrackingType::Duration);
        assert_eq!(session.exercises[1].order_index, 1);
        assert!(
            session
                .exercises
                .iter()
                .flat_map(|e| &e.sets)
                .all(|s| !s.completed && s.reps.is_none() && s.weight.is_none())
        );
    }

    #[test]
    fn test_session_quick() {
        let session = Session::quick(
            None,
            vec![
                ExerciseConfig::from(ExerciseID::from("push_up")),
                ExerciseConfig {
                    exercise_id: "run".into(),
                    tracking_type: Some(TrackingType::Cardio),
                    sets: Some(1),
                },
            ],
            now(),
        );

        assert_eq!(session.template_id, None);
        assert_eq!(session.name, QUICK_WORKOUT_NAME);
        assert_eq!(session.exercises[0].tracking_type, TrackingType::Strength);
        assert_eq!(session.exercises[0].sets.len(), 3);
        assert_eq!(session.exercises[1].sets.len(), 1);
    }

    #[test]
    fn test_set_numbers_not_reused() {
        let mut exercise = SessionExercise::new("squat".into(), TrackingType::Strength, 0, 3);

        let id = exercise.add_set();
        assert_eq!(set_numbers(&exercise), vec![1, 2, 3, 4]);

        exercise.remove_set(id).unwrap();
        assert_eq!(exercise.sets.len(), 3);

        exercise.add_set();
        assert_eq!(set_numbers(&exercise), vec![1, 2, 3, 5]);
    }

    #[test]
    fn test_next_set_number_uses_max() {
        let mut exercise = SessionExercise::new("squat".into(), TrackingType::Strength, 0, 0);
        exercise.sets.push(SessionSet::new(7));
        assert_eq!(exercise.next_set_number(), 8);
    }

    #[test]
    fn test_remove_unknown_set() {
        let mut exercise = SessionExercise::new("squat".into(), TrackingType::Strength, 0, 1);
        assert_eq!(
            exercise.remove_set(SetID::nil()),
            Err(SessionError::SetNotFound(SetID::nil()))
        );
        assert_eq!(exercise.sets.len(), 1);
    }

    #[test]
    fn test_remove_exercise_reindexes() {
        let mut session = Session::quick(
            None,
            vec![
                ExerciseID::from("squat").into(),
                ExerciseID::from("bench_press").into(),
                ExerciseID::from("deadlift").into(),
            ],
            now(),
        );
        let id = session.exercises[0].id;

        session.remove_exercise(id).unwrap();

        assert_eq!(
            session
                .exercises
                .iter()
                .map(|e| (e.exercise_id.to_string(), e.order_index))
                .collect::<Vec<_>>(),
            vec![(String::from("bench_press"), 0), (String::from("deadlift"), 1)]
        );
        assert_eq!(
            session.remove_exercise(id),
            Err(SessionError::ExerciseNotFound(id))
        );
    }

    #[test]
    fn test_set_apply() {
        let mut set = SessionSet::new(1);
        set.apply(&SetUpdate {
            reps: Some(10),
            weight: Some(100.0),
            completed: Some(true),
            ..SetUpdate::default()
        });
        set.apply(&SetUpdate {
            reps: Some(8),
            notes: Some(String::from("grindy")),
            ..SetUpdate::default()
        });

        assert_eq!(set.reps, Some(8));
        assert_eq!(set.weight, Some(100.0));
        assert_eq!(set.duration_seconds, None);
        assert!(set.completed);
        assert_eq!(set.notes, "grindy");
    }

    #[test]
    fn test_session_finish_and_metrics() {
        let mut session = Session::quick(None, vec![ExerciseID::from("squat").into()], now());
        let update = SetUpdate {
            reps: Some(5),
            weight: Some(100.0),
            completed: Some(true),
            ..SetUpdate::default()
        };
        let set_ids = session.exercises[0]
            .sets
            .iter()
            .map(|s| s.id)
            .collect::<Vec<_>>();
        session.exercises[0].set_mut(set_ids[0]).unwrap().apply(&update);
        session.exercises[0]
            .set_mut(set_ids[1])
            .unwrap()
            .apply(&SetUpdate {
                reps: Some(10),
                weight: Some(80.0),
                ..update.clone()
            });
        session.exercises[0]
            .set_mut(set_ids[2])
            .unwrap()
            .apply(&SetUpdate {
                completed: Some(false),
                ..update
            });

        assert_eq!(session.duration(), None);

        session.finish(Some(String::from("good day")), now() + Duration::minutes(45));

        assert_eq!(session.status, SessionStatus::Complete);
        assert_eq!(session.notes, "good day");
        assert_eq!(session.duration(), Some(Duration::minutes(45)));
        assert_eq!(session.num_sets(), 3);
        assert_eq!(session.num_completed_sets(), 2);
        assert_approx_eq!(session.volume(), 1300.0);
        assert_approx_eq!(session.best_strength_ratio(80.0), 10.0);
    }

    #[test]
    fn test_session_finish_keeps_notes() {
        let mut session = Session::quick(None, vec![], now());
        session.notes = String::from("warmup skipped");
        session.finish(None, now());
        assert_eq!(session.notes, "warmup skipped");
    }
}
