use facewatch_core::recording::domain::recording_settings::{RecordingSettings, SettingsError};

/// Text-backed form for the recording thresholds.
///
/// Edits stay local until [`SettingsForm::apply`] succeeds; a rejected
/// apply leaves the last accepted settings in place.
#[derive(Debug, Clone)]
pub struct SettingsForm {
    pub min_record: String,
    pub stop_delay: String,
    applied: RecordingSettings,
    error: Option<String>,
}

impl SettingsForm {
    pub fn new(applied: RecordingSettings) -> Self {
        Self {
            min_record: applied.min_record_secs().to_string(),
            stop_delay: applied.stop_delay_secs().to_string(),
            applied,
            error: None,
        }
    }

    pub fn applied(&self) -> RecordingSettings {
        self.applied
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// True when the fields no longer match the applied values.
    pub fn is_dirty(&self) -> bool {
        self.min_record.trim() != self.applied.min_record_secs().to_string()
            || self.stop_delay.trim() != self.applied.stop_delay_secs().to_string()
    }

    pub fn apply(&mut self) -> Result<RecordingSettings, SettingsError> {
        match RecordingSettings::parse(&self.min_record, &self.stop_delay) {
            Ok(settings) => {
                self.applied = settings;
                self.error = None;
                self.min_record = settings.min_record_secs().to_string();
                self.stop_delay = settings.stop_delay_secs().to_string();
                Ok(settings)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self::new(RecordingSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_from_defaults() {
        let form = SettingsForm::default();
        assert_eq!(form.min_record, "10");
        assert_eq!(form.stop_delay, "10");
        assert!(!form.is_dirty());
        assert!(form.error().is_none());
    }

    #[test]
    fn test_apply_valid_values() {
        let mut form = SettingsForm::default();
        form.min_record = " 4 ".into();
        form.stop_delay = "6".into();
        assert!(form.is_dirty());

        let settings = form.apply().unwrap();

        assert_eq!(settings, RecordingSettings::new(4, 6).unwrap());
        assert_eq!(form.applied(), settings);
        assert_eq!(form.min_record, "4");
        assert!(!form.is_dirty());
    }

    #[test]
    fn test_rejected_input_keeps_last_good_settings() {
        let mut form = SettingsForm::default();
        form.min_record = "abc".into();

        assert!(form.apply().is_err());

        assert_eq!(form.applied(), RecordingSettings::default());
        assert!(form.error().unwrap().contains("Min record time"));
        assert_eq!(form.min_record, "abc");
    }

    #[test]
    fn test_successful_apply_clears_error() {
        let mut form = SettingsForm::default();
        form.stop_delay = "0".into();
        assert!(form.apply().is_err());

        form.stop_delay = "3".into();
        assert!(form.apply().is_ok());
        assert!(form.error().is_none());
    }
}
