//! Notification Relay: the transient feedback popup and the persistent
//! completion prompt.
//!
//! At most one feedback message is visible. A new one preempts the old and
//! restarts the hide timer; nothing is queued.

use tracing::debug;

use crate::config::GameConfig;
use crate::timer::Timer;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub message: String,
    pub kind: FeedbackKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Visible,
}

/// The single action the completion prompt offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptAction {
    NextLevel,
    GoHome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompletionPrompt {
    pub is_final: bool,
}

impl CompletionPrompt {
    pub fn action(&self) -> PromptAction {
        if self.is_final {
            PromptAction::GoHome
        } else {
            PromptAction::NextLevel
        }
    }

    pub fn title<'a>(&self, config: &'a GameConfig) -> &'a str {
        if self.is_final {
            &config.unit_complete_title
        } else {
            &config.level_complete_title
        }
    }

    pub fn button_label<'a>(&self, config: &'a GameConfig) -> &'a str {
        match self.action() {
            PromptAction::NextLevel => &config.next_level_label,
            PromptAction::GoHome => &config.go_home_label,
        }
    }
}

pub struct NotificationRelay {
    feedback: Option<Feedback>,
    shown_at_ms: f64,
    hide: Timer,
    completion: Option<CompletionPrompt>,
    fade_ms: f64,
    hide_ms: f64,
    success_message: String,
    failure_message: String,
}

impl NotificationRelay {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            feedback: None,
            shown_at_ms: 0.0,
            hide: Timer::new(),
            completion: None,
            fade_ms: config.feedback_fade_ms,
            hide_ms: config.feedback_hide_ms,
            success_message: config.success_message.clone(),
            failure_message: config.failure_message.clone(),
        }
    }

    pub fn notify(&mut self, message: impl Into<String>, kind: FeedbackKind, now: f64) {
        let message = message.into();
        debug!(?kind, %message, "feedback shown");
        self.feedback = Some(Feedback { message, kind });
        self.shown_at_ms = now;
        self.hide.arm(now, self.hide_ms);
    }

    pub fn success(&mut self, now: f64) {
        let message = self.success_message.clone();
        self.notify(message, FeedbackKind::Success, now);
    }

    pub fn failure(&mut self, now: f64) {
        let message = self.failure_message.clone();
        self.notify(message, FeedbackKind::Failure, now);
    }

    /// Show the persistent prompt. It stays until `dismiss_completion`.
    pub fn announce_completion(&mut self, is_final: bool) {
        debug!(is_final, "completion prompt shown");
        self.completion = Some(CompletionPrompt { is_final });
    }

    pub fn dismiss_completion(&mut self) -> Option<CompletionPrompt> {
        self.completion.take()
    }

    /// Expire the feedback popup. Returns true when something was hidden.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.hide.fire(now) {
            self.feedback = None;
            return true;
        }
        false
    }

    pub fn feedback(&self) -> Option<&Feedback> {
        self.feedback.as_ref()
    }

    /// The popup is still present but past its fade point.
    pub fn is_fading(&self, now: f64) -> bool {
        self.feedback.is_some() && now - self.shown_at_ms >= self.fade_ms
    }

    pub fn completion(&self) -> Option<CompletionPrompt> {
        self.completion
    }

    pub fn visibility(&self) -> Visibility {
        if self.feedback.is_some() || self.completion.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relay() -> NotificationRelay {
        NotificationRelay::new(&GameConfig::default())
    }

    #[test]
    fn starts_hidden() {
        let r = relay();
        assert_eq!(r.visibility(), Visibility::Hidden);
        assert!(r.feedback().is_none());
        assert!(r.completion().is_none());
    }

    #[test]
    fn feedback_auto_hides_after_delay() {
        let mut r = relay();
        r.success(100.0);
        assert_eq!(r.visibility(), Visibility::Visible);
        assert_eq!(r.feedback().unwrap().kind, FeedbackKind::Success);
        assert!(!r.tick(1_500.0));
        assert!(!r.is_fading(1_499.0));
        assert!(r.is_fading(1_500.0));
        assert!(r.tick(1_600.0));
        assert_eq!(r.visibility(), Visibility::Hidden);
    }

    #[test]
    fn new_feedback_preempts_and_restarts_timer() {
        let mut r = relay();
        r.success(0.0);
        r.failure(1_000.0);
        assert_eq!(r.feedback().unwrap().kind, FeedbackKind::Failure);
        assert_eq!(r.feedback().unwrap().message, GameConfig::default().failure_message);
        assert!(!r.tick(1_500.0));
        assert!(!r.is_fading(1_500.0));
        assert!(r.tick(2_500.0));
    }

    #[test]
    fn completion_prompt_persists_until_dismissed() {
        let mut r = relay();
        r.announce_completion(false);
        assert!(!r.tick(1_000_000.0));
        assert_eq!(r.visibility(), Visibility::Visible);
        let prompt = r.dismiss_completion().unwrap();
        assert_eq!(prompt.action(), PromptAction::NextLevel);
        assert_eq!(r.visibility(), Visibility::Hidden);
    }

    #[test]
    fn final_prompt_offers_go_home() {
        let cfg = GameConfig::default();
        let prompt = CompletionPrompt { is_final: true };
        assert_eq!(prompt.action(), PromptAction::GoHome);
        assert_eq!(prompt.button_label(&cfg), cfg.go_home_label);
        assert_eq!(prompt.title(&cfg), cfg.unit_complete_title);
    }
}
