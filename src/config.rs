//! Tunable delays and user-facing texts.
//!
//! Defaults reproduce the classroom build (Hebrew labels). A host may override
//! any subset by passing JSON to `start_game_with_config`; missing fields keep
//! their defaults.

use serde::{Deserialize, Serialize};

/// Popup fades out at this point (ms after display).
pub const FEEDBACK_FADE_MS: f64 = 1400.0;
/// Popup is removed at this point (ms after display).
pub const FEEDBACK_HIDE_MS: f64 = 1500.0;
/// Pause between the last match and the completion prompt.
pub const COMPLETION_SETTLE_MS: f64 = 500.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub feedback_fade_ms: f64,
    pub feedback_hide_ms: f64,
    pub settle_delay_ms: f64,
    pub success_message: String,
    pub failure_message: String,
    pub level_complete_title: String,
    pub unit_complete_title: String,
    pub next_level_label: String,
    pub go_home_label: String,
    pub home_button_label: String,
    pub concepts_heading: String,
    pub definitions_heading: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            feedback_fade_ms: FEEDBACK_FADE_MS,
            feedback_hide_ms: FEEDBACK_HIDE_MS,
            settle_delay_ms: COMPLETION_SETTLE_MS,
            success_message: "✅ נכון מאוד!".to_string(),
            failure_message: "❌ נסו שוב!".to_string(),
            level_complete_title: "✔ סיימתם את שלב זה".to_string(),
            unit_complete_title: "🎉 כל הכבוד! סיימתם את המשחק ליחידה זו".to_string(),
            next_level_label: "➡ המשיכו לשלב הבא".to_string(),
            go_home_label: "⬅ חזרה לדף הבית".to_string(),
            home_button_label: "🏠 חזרה לדף הבית".to_string(),
            concepts_heading: "מושגים".to_string(),
            definitions_heading: "הסברים".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = GameConfig::from_json(r#"{ "success_message": "Correct!", "settle_delay_ms": 250 }"#)
            .unwrap();
        assert_eq!(cfg.success_message, "Correct!");
        assert_eq!(cfg.settle_delay_ms, 250.0);
        assert_eq!(cfg.feedback_hide_ms, FEEDBACK_HIDE_MS);
        assert_eq!(cfg.failure_message, GameConfig::default().failure_message);
    }

    #[test]
    fn fade_precedes_hide() {
        let cfg = GameConfig::default();
        assert!(cfg.feedback_fade_ms < cfg.feedback_hide_ms);
    }
}
