use std::collections::BTreeSet;

use crate::StorageError;

pub trait SettingsRepository {
    fn read_settings(&self) -> Result<Settings, StorageError>;
    fn write_settings(&self, settings: &Settings) -> Result<(), StorageError>;
}

const KG_PER_LB: f64 = 0.453_592_37;
const CM_PER_IN: f64 = 2.54;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Settings {
    pub weight_unit: WeightUnit,
    pub height_unit: HeightUnit,
    pub feature_flags: BTreeSet<String>,
}

impl Settings {
    #[must_use]
    pub fn is_enabled(&self, flag: &str) -> bool {
        self.feature_flags.contains(flag)
    }

    pub fn set_flag(&mut self, flag: &str, enabled: bool) {
        if enabled {
            self.feature_flags.insert(flag.to_string());
        } else {
            self.feature_flags.remove(flag);
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WeightUnit {
    #[default]
    Kg,
    Lb,
}

impl WeightUnit {
    #[must_use]
    pub fn to_kg(self, value: f64) -> f64 {
        match self {
            WeightUnit::Kg => value,
            WeightUnit::Lb => value * KG_PER_LB,
        }
    }

    #[must_use]
    pub fn from_kg(self, kg: f64) -> f64 {
        match self {
            WeightUnit::Kg => kg,
            WeightUnit::Lb => kg / KG_PER_LB,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            WeightUnit::Kg => "kg",
            WeightUnit::Lb => "lb",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum HeightUnit {
    #[default]
    Cm,
    In,
}

impl HeightUnit {
    #[must_use]
    pub fn to_cm(self, value: f64) -> f64 {
        match self {
            HeightUnit::Cm => value,
            HeightUnit::In => value * CM_PER_IN,
        }
    }

    #[must_use]
    pub fn from_cm(self, cm: f64) -> f64 {
        match self {
            HeightUnit::Cm => cm,
            HeightUnit::In => cm / CM_PER_IN,
        }
    }

    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            HeightUnit::Cm => "cm",
            HeightUnit::In => "in",
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(WeightUnit::Kg, 100.0, 100.0)]
    #[case(WeightUnit::Lb, 225.0, 102.058_283)]
    fn test_weight_unit_to_kg(#[case] unit: WeightUnit, #[case] value: f64, #[case] kg: f64) {
        assert_approx_eq!(unit.to_kg(value), kg, 1e-6);
        assert_approx_eq!(unit.from_kg(kg), value, 1e-5);
    }

    #[rstest]
    #[case(HeightUnit::Cm, 180.0, 180.0)]
    #[case(HeightUnit::In, 70.0, 177.8)]
    fn test_height_unit_to_cm(#[case] unit: HeightUnit, #[case] value: f64, #[case] cm: f64) {
        assert_approx_eq!(unit.to_cm(value), cm);
        assert_approx_eq!(unit.from_cm(cm), value);
    }

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.weight_unit, WeightUnit::Kg);
        assert_eq!(settings.height_unit, HeightUnit::Cm);
        assert!(settings.feature_flags.is_empty());
    }

    #[test]
    fn test_settings_flags() {
        let mut settings = Settings::default();
        settings.set_flag("video_upload", true);
        assert!(settings.is_enabled("video_upload"));
        assert!(!settings.is_enabled("challenges"));
        settings.set_flag("video_upload", false);
        assert!(!settings.is_enabled("video_upload"));
    }
}
