use crate::TrackingType;

#[derive(Debug, Clone, PartialEq)]
pub struct Exercise {
    pub id: &'static str,
    pub name: &'static str,
    pub tracking_type: TrackingType,
    /// Points per rep in the legacy scoring.
    pub intensity: f64,
}

#[must_use]
pub fn find(id: &str) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == id)
}

pub const EXERCISES: &[Exercise] = &[
    Exercise {
        id: "squat",
        name: "Squat",
        tracking_type: TrackingType::Strength,
        intensity: 1.5,
    },
    Exercise {
        id: "bench_press",
        name: "Bench Press",
        tracking_type: TrackingType::Strength,
        intensity: 1.3,
    },
    Exercise {
        id: "deadlift",
        name: "Deadlift",
        tracking_type: TrackingType::Strength,
        intensity: 1.8,
    },
    Exercise {
        id: "overhead_press",
        name: "Overhead Press",
        tracking_type: TrackingType::Strength,
        intensity: 1.2,
    },
    Exercise {
        id: "barbell_row",
        name: "Barbell Row",
        tracking_type: TrackingType::Strength,
        intensity: 1.2,
    },
    Exercise {
        id: "pull_up",
        name: "Pull-up",
        tracking_type: TrackingType::Bodyweight,
        intensity: 2.0,
    },
    Exercise {
        id: "push_up",
        name: "Push-up",
        tracking_type: TrackingType::Bodyweight,
        intensity: 1.0,
    },
    Exercise {
        id: "dip",
        name: "Dip",
        tracking_type: TrackingType::Bodyweight,
        intensity: 1.5,
    },
    Exercise {
        id: "burpee",
        name: "Burpee",
        tracking_type: TrackingType::Bodyweight,
        intensity: 1.2,
    },
    Exercise {
        id: "plank",
        name: "Plank",
        tracking_type: TrackingType::Duration,
        intensity: 0.2,
    },
    Exercise {
        id: "run",
        name: "Run",
        tracking_type: TrackingType::Cardio,
        intensity: 0.5,
    },
    Exercise {
        id: "row",
        name: "Row",
        tracking_type: TrackingType::Cardio,
        intensity: 0.5,
    },
];
