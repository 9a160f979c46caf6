//! Interaction Tracker: the active drag source, the highlighted drop target,
//! and drop resolution.

use tracing::debug;

use crate::engine::LevelEngine;
use crate::relay::NotificationRelay;
use crate::unit::Pair;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Matched { concept: String },
    Mismatched { concept: String, target: String },
}

#[derive(Clone, Debug, Default)]
pub struct InteractionTracker {
    dragging: Option<Pair>,
    // Keyed by definition text, like the drop zones themselves.
    highlighted: Option<String>,
}

impl InteractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last writer wins: a new drag replaces any active one.
    pub fn begin_drag(&mut self, pair: Pair) {
        debug!(concept = %pair.concept, "drag started");
        self.dragging = Some(pair);
    }

    pub fn end_drag(&mut self) {
        self.dragging = None;
    }

    pub fn hover(&mut self, target_key: impl Into<String>) {
        self.highlighted = Some(target_key.into());
    }

    pub fn clear_hover(&mut self) {
        self.highlighted = None;
    }

    /// Compare the active drag with `target` by concept.
    ///
    /// A match is recorded in the engine and announced as success; a mismatch
    /// only produces failure feedback. Drag and highlight are cleared either
    /// way. Returns `None` when nothing was being dragged.
    pub fn resolve_drop(
        &mut self,
        target: &Pair,
        engine: &mut LevelEngine,
        relay: &mut NotificationRelay,
        now: f64,
    ) -> Option<DropOutcome> {
        self.clear_hover();
        let source = self.dragging.take()?;
        if source.concept == target.concept {
            engine.record_match(&source.concept);
            relay.success(now);
            debug!(concept = %source.concept, "drop matched");
            Some(DropOutcome::Matched {
                concept: source.concept,
            })
        } else {
            relay.failure(now);
            debug!(concept = %source.concept, target = %target.concept, "drop mismatched");
            Some(DropOutcome::Mismatched {
                concept: source.concept,
                target: target.concept.clone(),
            })
        }
    }

    pub fn dragging(&self) -> Option<&Pair> {
        self.dragging.as_ref()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }
}
