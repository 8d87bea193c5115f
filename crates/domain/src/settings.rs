use serde::{Deserialize, Serialize};

pub const DEFAULT_SEED: u64 = 1;
pub const DEFAULT_DELOAD_FACTOR: f64 = 0.7;
pub const DEFAULT_MAX_SETS: u32 = 8;

/// Tunable constants of the plan generator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seed used when the caller does not supply one.
    pub default_seed: u64,
    /// Load of the deload week relative to the week before.
    pub deload_factor: f64,
    /// Upper limit for the number of sets of a single exercise.
    pub max_sets: u32,
}

impl Settings {
    pub fn new(default_seed: u64, deload_factor: f64, max_sets: u32) -> Result<Self, SettingsError> {
        let settings = Self {
            default_seed,
            deload_factor,
            max_sets,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.deload_factor > 0.0 && self.deload_factor < 1.0) {
            return Err(SettingsError::DeloadFactorOutOfRange(self.deload_factor));
        }

        if self.max_sets == 0 {
            return Err(SettingsError::NoSets);
        }

        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_seed: DEFAULT_SEED,
            deload_factor: DEFAULT_DELOAD_FACTOR,
            max_sets: DEFAULT_MAX_SETS,
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum SettingsError {
    #[error("Deload factor must be greater than 0 and less than 1 ({0})")]
    DeloadFactorOutOfRange(f64),
    #[error("Maximum number of sets must be at least 1")]
    NoSets,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0.7, 8, Ok(()))]
    #[case(0.01, 1, Ok(()))]
    #[case(0.0, 8, Err(SettingsError::DeloadFactorOutOfRange(0.0)))]
    #[case(1.0, 8, Err(SettingsError::DeloadFactorOutOfRange(1.0)))]
    #[case(0.5, 0, Err(SettingsError::NoSets))]
    fn test_settings_new(
        #[case] deload_factor: f64,
        #[case] max_sets: u32,
        #[case] expected: Result<(), SettingsError>,
    ) {
        assert_eq!(
            Settings::new(7, deload_factor, max_sets).map(|_| ()),
            expected
        );
    }

    #[test]
    fn test_settings_new_nan_deload_factor() {
        assert!(matches!(
            Settings::new(7, f64::NAN, 8),
            Err(SettingsError::DeloadFactorOutOfRange(value)) if value.is_nan()
        ));
    }

    #[test]
    fn test_settings_default() {
        assert_eq!(Settings::default().validate(), Ok(()));
    }

    #[test]
    fn test_settings_deserialize_partial() {
        assert_eq!(
            serde_json::from_str::<Settings>(r#"{"deload_factor": 0.6}"#).unwrap(),
            Settings {
                deload_factor: 0.6,
                ..Settings::default()
            }
        );
    }
}
