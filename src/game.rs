//! The view actor: owns the Level Engine, Interaction Tracker and
//! Notification Relay and translates discrete input events into transitions.
//!
//! Every method runs to completion synchronously. Renderers re-read
//! [`Game::view`] after each call instead of observing individual fields.

use tracing::{debug, info};

use crate::config::GameConfig;
use crate::engine::{LevelEngine, RandomShuffler, Shuffler};
use crate::relay::{FeedbackKind, NotificationRelay, PromptAction};
use crate::tracker::{DropOutcome, InteractionTracker};
use crate::unit::Unit;

/// Outputs addressed to the host page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostSignal {
    GoHome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConceptTile {
    pub text: String,
    pub matched: bool,
    pub dragging: bool,
}

impl ConceptTile {
    pub fn draggable(&self) -> bool {
        !self.matched
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefinitionTile {
    pub text: String,
    pub matched: bool,
    pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackView {
    pub message: String,
    pub kind: FeedbackKind,
    pub fading: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptView {
    pub title: String,
    pub button_label: String,
    pub action: PromptAction,
}

/// Immutable snapshot of everything a renderer needs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameView {
    pub title: String,
    pub intro: String,
    pub level_name: String,
    pub level_index: usize,
    pub level_count: usize,
    pub concepts: Vec<ConceptTile>,
    pub definitions: Vec<DefinitionTile>,
    pub feedback: Option<FeedbackView>,
    pub completion: Option<PromptView>,
    /// Changes only when a level is (re)loaded.
    pub generation: u64,
}

pub struct Game {
    config: GameConfig,
    engine: LevelEngine,
    tracker: InteractionTracker,
    relay: NotificationRelay,
}

impl Game {
    pub fn new(unit: Unit, config: GameConfig, shuffler: impl Shuffler + 'static) -> Self {
        info!(unit = %unit.name, levels = unit.levels.len(), "game started");
        let relay = NotificationRelay::new(&config);
        Self {
            engine: LevelEngine::new(unit, shuffler),
            tracker: InteractionTracker::new(),
            relay,
            config,
        }
    }

    pub fn with_random_order(unit: Unit, config: GameConfig) -> Self {
        Self::new(unit, config, RandomShuffler::new())
    }

    // Board input is frozen from the final match until the prompt is answered.
    fn input_locked(&self) -> bool {
        self.engine.is_settling() || self.relay.completion().is_some()
    }

    /// Start dragging the concept tile at `index` (presentation order).
    ///
    /// Matched concepts are rejected here rather than relying on the
    /// renderer to disable them.
    pub fn drag_start(&mut self, index: usize) -> bool {
        if self.input_locked() {
            return false;
        }
        let Some(pair) = self.engine.concepts().get(index) else {
            return false;
        };
        if self.engine.is_matched(&pair.concept) {
            debug!(concept = %pair.concept, "drag of matched concept rejected");
            return false;
        }
        let pair = pair.clone();
        self.tracker.begin_drag(pair);
        true
    }

    pub fn drag_end(&mut self) {
        self.tracker.end_drag();
    }

    /// Highlight the definition tile at `index`. Returns true if the highlight changed.
    pub fn drag_over(&mut self, index: usize) -> bool {
        let Some(target) = self.engine.definitions().get(index) else {
            return false;
        };
        if self.tracker.highlighted() == Some(target.definition.as_str()) {
            return false;
        }
        let key = target.definition.clone();
        self.tracker.hover(key);
        true
    }

    pub fn drag_leave(&mut self) {
        self.tracker.clear_hover();
    }

    /// Resolve a drop on the definition tile at `index`.
    pub fn drop_on(&mut self, index: usize, now: f64) -> Option<DropOutcome> {
        self.tracker.clear_hover();
        if self.input_locked() {
            self.tracker.end_drag();
            return None;
        }
        let target = self.engine.definitions().get(index)?.clone();
        let outcome =
            self.tracker
                .resolve_drop(&target, &mut self.engine, &mut self.relay, now)?;
        if matches!(outcome, DropOutcome::Matched { .. })
            && self
                .engine
                .schedule_completion(now, self.config.settle_delay_ms)
        {
            debug!(level = self.engine.level_index(), "level settling");
        }
        Some(outcome)
    }

    /// Advance timers. Returns true when visible state changed.
    pub fn tick(&mut self, now: f64) -> bool {
        let mut changed = self.relay.tick(now);
        if self.engine.poll_completion(now) {
            self.relay.announce_completion(self.engine.is_last_level());
            changed = true;
        }
        changed
    }

    /// The user pressed the completion prompt's only button.
    pub fn confirm_completion(&mut self) -> Option<HostSignal> {
        let prompt = self.relay.dismiss_completion()?;
        match prompt.action() {
            PromptAction::NextLevel => {
                self.tracker = InteractionTracker::new();
                self.engine.advance();
                None
            }
            PromptAction::GoHome => Some(self.go_home()),
        }
    }

    /// Leave the game at any time.
    pub fn go_home(&mut self) -> HostSignal {
        info!(level = self.engine.level_index(), "returning home");
        HostSignal::GoHome
    }

    pub fn view(&self, now: f64) -> GameView {
        let dragging = self.tracker.dragging().map(|p| p.concept.as_str());
        let highlighted = self.tracker.highlighted();
        let unit = self.engine.unit();
        GameView {
            title: unit.name.clone(),
            intro: unit.intro.clone(),
            level_name: self.engine.current_level().name.clone(),
            level_index: self.engine.level_index(),
            level_count: self.engine.level_count(),
            concepts: self
                .engine
                .concepts()
                .iter()
                .map(|p| ConceptTile {
                    text: p.concept.clone(),
                    matched: self.engine.is_matched(&p.concept),
                    dragging: dragging == Some(p.concept.as_str()),
                })
                .collect(),
            definitions: self
                .engine
                .definitions()
                .iter()
                .map(|p| DefinitionTile {
                    text: p.definition.clone(),
                    matched: self.engine.is_matched(&p.concept),
                    highlighted: highlighted == Some(p.definition.as_str()),
                })
                .collect(),
            feedback: self.relay.feedback().map(|f| FeedbackView {
                message: f.message.clone(),
                kind: f.kind,
                fading: self.relay.is_fading(now),
            }),
            completion: self.relay.completion().map(|prompt| PromptView {
                title: prompt.title(&self.config).to_string(),
                button_label: prompt.button_label(&self.config).to_string(),
                action: prompt.action(),
            }),
            generation: self.engine.generation(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn engine(&self) -> &LevelEngine {
        &self.engine
    }

    pub fn tracker(&self) -> &InteractionTracker {
        &self.tracker
    }

    pub fn relay(&self) -> &NotificationRelay {
        &self.relay
    }
}
