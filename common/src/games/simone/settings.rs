use serde::{Deserialize, Serialize};

use crate::config::Validate;

const MAX_HOLD_MS: u32 = 10_000;
const MAX_POLL_INTERVAL_MS: u32 = 100;

/// Pacing of a session, all in milliseconds.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub struct SimoneSettings {
    /// How long each arrow of the intro demo stays on screen.
    pub intro_demo_hold_ms: u32,
    /// Pause between the intro demo and the first round.
    pub intro_pause_ms: u32,
    /// How long each arrow stays on screen during playback.
    pub playback_hold_ms: u32,
    /// How long a pressed arrow stays highlighted before it is checked.
    pub press_feedback_ms: u32,
    /// Pause after the correct chime before the next playback.
    pub level_transition_ms: u32,
    /// Sleep between input polls while nothing happens. Zero polls as fast as possible.
    pub poll_interval_ms: u32,
}

impl Default for SimoneSettings {
    fn default() -> Self {
        Self {
            intro_demo_hold_ms: 600,
            intro_pause_ms: 1000,
            playback_hold_ms: 600,
            press_feedback_ms: 100,
            level_transition_ms: 200,
            poll_interval_ms: 10,
        }
    }
}

impl SimoneSettings {
    /// No pauses at all; for tests and benchmarks driving a scripted platform.
    pub fn instant() -> Self {
        Self {
            intro_demo_hold_ms: 0,
            intro_pause_ms: 0,
            playback_hold_ms: 0,
            press_feedback_ms: 0,
            level_transition_ms: 0,
            poll_interval_ms: 0,
        }
    }
}

impl Validate for SimoneSettings {
    fn validate(&self) -> Result<(), String> {
        let holds = [
            ("intro_demo_hold_ms", self.intro_demo_hold_ms),
            ("intro_pause_ms", self.intro_pause_ms),
            ("playback_hold_ms", self.playback_hold_ms),
            ("press_feedback_ms", self.press_feedback_ms),
            ("level_transition_ms", self.level_transition_ms),
        ];
        for (name, value) in holds {
            if value > MAX_HOLD_MS {
                return Err(format!(
                    "{} must be at most {}, got {}",
                    name, MAX_HOLD_MS, value
                ));
            }
        }
        if self.playback_hold_ms == 0 && holds.iter().any(|(_, value)| *value > 0) {
            return Err("playback_hold_ms must be positive unless every pause is zero".to_string());
        }
        if self.poll_interval_ms > MAX_POLL_INTERVAL_MS {
            return Err(format!(
                "poll_interval_ms must be at most {}, got {}",
                MAX_POLL_INTERVAL_MS, self.poll_interval_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_and_instant_settings_are_valid() {
        assert!(SimoneSettings::default().validate().is_ok());
        assert!(SimoneSettings::instant().validate().is_ok());
    }

    #[test]
    fn test_overlong_hold_is_rejected() {
        let settings = SimoneSettings {
            press_feedback_ms: 60_000,
            ..SimoneSettings::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("press_feedback_ms"));
    }

    #[test]
    fn test_slow_polling_is_rejected() {
        let settings = SimoneSettings {
            poll_interval_ms: 500,
            ..SimoneSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_invisible_playback_is_rejected() {
        let settings = SimoneSettings {
            playback_hold_ms: 0,
            ..SimoneSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_zero_playback_with_any_other_pause_is_rejected() {
        let settings = SimoneSettings {
            press_feedback_ms: 100,
            ..SimoneSettings::instant()
        };
        let err = settings.validate().unwrap_err();
        assert!(err.contains("playback_hold_ms"));

        let settings = SimoneSettings {
            poll_interval_ms: 10,
            ..SimoneSettings::instant()
        };
        assert!(settings.validate().is_ok());
    }
}
