use std::time::Duration;

use thiserror::Error;

use crate::shared::constants::{DEFAULT_MIN_RECORD_SECS, DEFAULT_STOP_DELAY_SECS};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("{field} must be a whole number of seconds, got '{value}'")]
    NotAnInteger { field: &'static str, value: String },
    #[error("{field} must be at least 1 second, got {value}")]
    NotPositive { field: &'static str, value: i64 },
}

/// Operator-tunable timing thresholds for the recording controller.
///
/// Both values are positive whole seconds. A new value only affects frames
/// evaluated after it is installed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordingSettings {
    min_record_secs: u32,
    stop_delay_secs: u32,
}

impl RecordingSettings {
    pub const MIN_RECORD_FIELD: &'static str = "Min record time";
    pub const STOP_DELAY_FIELD: &'static str = "Stop delay";

    pub fn new(min_record_secs: u32, stop_delay_secs: u32) -> Result<Self, SettingsError> {
        Ok(Self {
            min_record_secs: positive(Self::MIN_RECORD_FIELD, min_record_secs as i64)?,
            stop_delay_secs: positive(Self::STOP_DELAY_FIELD, stop_delay_secs as i64)?,
        })
    }

    /// Parses both fields from user text. Either field failing rejects the pair.
    pub fn parse(min_record: &str, stop_delay: &str) -> Result<Self, SettingsError> {
        Ok(Self {
            min_record_secs: parse_seconds(Self::MIN_RECORD_FIELD, min_record)?,
            stop_delay_secs: parse_seconds(Self::STOP_DELAY_FIELD, stop_delay)?,
        })
    }

    pub fn min_record_secs(&self) -> u32 {
        self.min_record_secs
    }

    pub fn stop_delay_secs(&self) -> u32 {
        self.stop_delay_secs
    }

    pub fn min_record(&self) -> Duration {
        Duration::from_secs(self.min_record_secs as u64)
    }

    pub fn stop_delay(&self) -> Duration {
        Duration::from_secs(self.stop_delay_secs as u64)
    }
}

impl Default for RecordingSettings {
    fn default() -> Self {
        Self {
            min_record_secs: DEFAULT_MIN_RECORD_SECS,
            stop_delay_secs: DEFAULT_STOP_DELAY_SECS,
        }
    }
}

fn parse_seconds(field: &'static str, text: &str) -> Result<u32, SettingsError> {
    let trimmed = text.trim();
    let value: i64 = trimmed.parse().map_err(|_| SettingsError::NotAnInteger {
        field,
        value: text.to_string(),
    })?;
    positive(field, value)
}

fn positive(field: &'static str, value: i64) -> Result<u32, SettingsError> {
    if value < 1 {
        return Err(SettingsError::NotPositive { field, value });
    }
    u32::try_from(value).map_err(|_| SettingsError::NotAnInteger {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults() {
        let s = RecordingSettings::default();
        assert_eq!(s.min_record_secs(), 10);
        assert_eq!(s.stop_delay_secs(), 10);
        assert_eq!(s.min_record(), Duration::from_secs(10));
        assert_eq!(s.stop_delay(), Duration::from_secs(10));
    }

    #[test]
    fn test_parse_valid_values() {
        let s = RecordingSettings::parse("5", " 3 ").unwrap();
        assert_eq!(s.min_record_secs(), 5);
        assert_eq!(s.stop_delay_secs(), 3);
    }

    #[test]
    fn test_parse_accepts_explicit_plus_sign() {
        let s = RecordingSettings::parse("+7", "2").unwrap();
        assert_eq!(s.min_record_secs(), 7);
    }

    #[rstest]
    #[case::decimal("2.5", "10")]
    #[case::word("ten", "10")]
    #[case::empty("", "10")]
    #[case::second_field_bad("10", "abc")]
    #[case::overflow("99999999999", "10")]
    fn test_parse_rejects_non_integers(#[case] min: &str, #[case] delay: &str) {
        let err = RecordingSettings::parse(min, delay).unwrap_err();
        assert!(matches!(err, SettingsError::NotAnInteger { .. }));
    }

    #[rstest]
    #[case::zero("0", "10", RecordingSettings::MIN_RECORD_FIELD)]
    #[case::negative("10", "-4", RecordingSettings::STOP_DELAY_FIELD)]
    fn test_parse_rejects_non_positive(
        #[case] min: &str,
        #[case] delay: &str,
        #[case] expected_field: &str,
    ) {
        match RecordingSettings::parse(min, delay).unwrap_err() {
            SettingsError::NotPositive { field, .. } => assert_eq!(field, expected_field),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_new_rejects_zero() {
        assert!(RecordingSettings::new(0, 5).is_err());
        assert!(RecordingSettings::new(5, 0).is_err());
        assert!(RecordingSettings::new(1, 1).is_ok());
    }

    #[test]
    fn test_error_message_names_field() {
        let err = RecordingSettings::parse("abc", "1").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Min record time must be a whole number of seconds, got 'abc'"
        );
    }
}
