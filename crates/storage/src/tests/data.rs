use chrono::{DateTime, TimeZone, Utc};
use unyield_domain as domain;

fn time(day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
}

pub static TEMPLATES: std::sync::LazyLock<Vec<domain::Template>> =
    std::sync::LazyLock::new(|| vec![TEMPLATE_2.clone(), TEMPLATE.clone()]);

pub static TEMPLATE: std::sync::LazyLock<domain::Template> =
    std::sync::LazyLock::new(|| domain::Template {
        id: 1.into(),
        name: String::from("Leg Day"),
        description: String::from("Heavy lower body"),
        exercises: vec![
            domain::TemplateExercise {
                exercise_id: "squat".into(),
                order_index: 0,
                tracking_type: domain::TrackingType::Strength,
                default_sets: 3,
                target_rep_range: domain::RepRange::new(5, 5),
                rest_seconds: 180,
            },
            domain::TemplateExercise {
                exercise_id: "plank".into(),
                order_index: 1,
                tracking_type: domain::TrackingType::Duration,
                default_sets: 2,
                target_rep_range: domain::RepRange::default(),
                rest_seconds: 60,
            },
        ],
        created_at: time(1, 10),
        updated_at: time(2, 10),
    });

pub static TEMPLATE_2: std::sync::LazyLock<domain::Template> =
    std::sync::LazyLock::new(|| domain::Template {
        id: 2.into(),
        name: String::from("Push"),
        description: String::new(),
        exercises: vec![domain::TemplateExercise::new("bench_press".into())],
        created_at: time(3, 10),
        updated_at: time(3, 10),
    });

pub static SESSIONS: std::sync::LazyLock<Vec<domain::Session>> =
    std::sync::LazyLock::new(|| vec![COMPLETED_SESSION.clone()]);

pub static COMPLETED_SESSION: std::sync::LazyLock<domain::Session> =
    std::sync::LazyLock::new(|| domain::Session {
        id: 10.into(),
        template_id: Some(TEMPLATE.id),
        name: String::from("Leg Day"),
        started_at: time(4, 18),
        finished_at: Some(time(4, 19)),
        status: domain::SessionStatus::Complete,
        notes: String::from("good day"),
        exercises: vec![domain::SessionExercise {
            id: 11.into(),
            exercise_id: "squat".into(),
            order_index: 0,
            tracking_type: domain::TrackingType::Strength,
            sets: vec![
                domain::SessionSet {
                    id: 12.into(),
                    set_number: 1,
                    reps: Some(10),
                    weight: Some(100.0),
                    duration_seconds: None,
                    distance: None,
                    completed: true,
                    notes: String::new(),
                },
                domain::SessionSet {
                    id: 13.into(),
                    set_number: 3,
                    reps: Some(8),
                    weight: Some(102.5),
                    duration_seconds: None,
                    distance: None,
                    completed: true,
                    notes: String::from("grindy"),
                },
            ],
            last_set_number: 3,
        }],
    });

pub static DRAFT_SESSION: std::sync::LazyLock<domain::Session> =
    std::sync::LazyLock::new(|| domain::Session {
        id: 20.into(),
        template_id: None,
        name: String::from("Quick Workout"),
        started_at: time(5, 7),
        finished_at: None,
        status: domain::SessionStatus::Draft,
        notes: String::new(),
        exercises: vec![domain::SessionExercise {
            id: 21.into(),
            exercise_id: "run".into(),
            order_index: 0,
            tracking_type: domain::TrackingType::Cardio,
            sets: vec![domain::SessionSet {
                id: 22.into(),
                set_number: 1,
                reps: None,
                weight: None,
                duration_seconds: Some(1800),
                distance: Some(5.2),
                completed: false,
                notes: String::new(),
            }],
            last_set_number: 1,
        }],
    });

pub static SETTINGS: std::sync::LazyLock<domain::Settings> = std::sync::LazyLock::new(|| {
    let mut settings = domain::Settings {
        weight_unit: domain::WeightUnit::Lb,
        ..domain::Settings::default()
    };
    settings.set_flag("video_upload", true);
    settings
});
