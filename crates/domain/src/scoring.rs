use std::fmt;

use crate::catalog;

/// Bodyweight-normalized strength score used for leaderboard ranking.
///
/// Computed as `(reps × weight / bodyweight) × (reps × 0.1)` and rounded to three
/// decimals. Returns 0 if any input is missing or not positive.
#[must_use]
pub fn calc_strength_ratio(
    reps: Option<u32>,
    weight_lifted: Option<f64>,
    bodyweight: Option<f64>,
) -> f64 {
    let (Some(reps), Some(weight_lifted), Some(bodyweight)) = (reps, weight_lifted, bodyweight)
    else {
        return 0.0;
    };
    if reps == 0 || weight_lifted <= 0.0 || bodyweight <= 0.0 {
        return 0.0;
    }
    let reps = f64::from(reps);
    let ratio = (reps * weight_lifted / bodyweight) * (reps * 0.1);
    (ratio * 1000.0).round() / 1000.0
}

/// Legacy point value of a logged exercise.
#[must_use]
pub fn calc_points(exercise: &catalog::Exercise, reps: u32, weight: f64, streak: u32) -> u32 {
    let weight_bonus = (weight * 0.1).round().max(0.0);
    let streak_bonus = f64::from(streak.saturating_mul(4).min(50));
    let points = (f64::from(reps) * exercise.intensity + weight_bonus + streak_bonus).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let points = points.clamp(0.0, f64::from(u32::MAX)) as u32;
    points.max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WeightClass {
    Kg55To64,
    Kg65To74,
    Kg75To84,
    Kg85To94,
    Kg95To109,
    Kg110Plus,
}

impl WeightClass {
    pub const ALL: [WeightClass; 6] = [
        WeightClass::Kg55To64,
        WeightClass::Kg65To74,
        WeightClass::Kg75To84,
        WeightClass::Kg85To94,
        WeightClass::Kg95To109,
        WeightClass::Kg110Plus,
    ];

    #[must_use]
    pub fn from_weight(weight_kg: f64) -> Option<Self> {
        match weight_kg {
            w if w.is_nan() || w < 55.0 => None,
            w if w < 65.0 => Some(WeightClass::Kg55To64),
            w if w < 75.0 => Some(WeightClass::Kg65To74),
            w if w < 85.0 => Some(WeightClass::Kg75To84),
            w if w < 95.0 => Some(WeightClass::Kg85To94),
            w if w < 110.0 => Some(WeightClass::Kg95To109),
            _ => Some(WeightClass::Kg110Plus),
        }
    }
}

impl fmt::Display for WeightClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                WeightClass::Kg55To64 => "55-64kg",
                WeightClass::Kg65To74 => "65-74kg",
                WeightClass::Kg75To84 => "75-84kg",
                WeightClass::Kg85To94 => "85-94kg",
                WeightClass::Kg95To109 => "95-109kg",
                WeightClass::Kg110Plus => "110kg+",
            }
        )
    }
}

#[must_use]
pub fn weight_class_from_weight(weight_kg: f64) -> Option<WeightClass> {
    WeightClass::from_weight(weight_kg)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub rank: u32,
    pub entry: T,
    pub strength_ratio: f64,
}

/// Order entries by descending strength ratio. Equal ratios share a rank (1, 1, 3, ...).
#[must_use]
pub fn rank_by_strength_ratio<T>(entries: Vec<(T, f64)>) -> Vec<Ranked<T>> {
    let mut entries = entries;
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut result: Vec<Ranked<T>> = Vec::with_capacity(entries.len());
    for (position, (entry, strength_ratio)) in (1..).zip(entries) {
        let rank = match result.last() {
            Some(previous) if previous.strength_ratio.total_cmp(&strength_ratio).is_eq() => {
                previous.rank
            }
            _ => position,
        };
        result.push(Ranked {
            rank,
            entry,
            strength_ratio,
        });
    }
    result
}
