//! Level Engine: shuffled presentation orders, the matched set, completion
//! detection and level progression.

use std::collections::HashSet;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use tracing::{debug, info};

use crate::timer::Timer;
use crate::unit::{Level, Pair, Unit};

/// Produces a presentation order for a level's pairs.
///
/// Any permutation is acceptable; closures can be injected for deterministic tests.
pub trait Shuffler {
    fn shuffle(&mut self, pairs: &mut [Pair]);
}

impl<F> Shuffler for F
where
    F: FnMut(&mut [Pair]),
{
    fn shuffle(&mut self, pairs: &mut [Pair]) {
        self(pairs)
    }
}

/// Default shuffler backed by an entropy-seeded `StdRng`.
pub struct RandomShuffler {
    rng: StdRng,
}

impl RandomShuffler {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomShuffler {
    fn default() -> Self {
        Self::new()
    }
}

impl Shuffler for RandomShuffler {
    fn shuffle(&mut self, pairs: &mut [Pair]) {
        pairs.shuffle(&mut self.rng);
    }
}

/// Runtime state for the level currently on the board.
pub struct LevelEngine {
    unit: Unit,
    level_index: usize,
    concepts: Vec<Pair>,
    definitions: Vec<Pair>,
    matched: HashSet<String>,
    // Set once the settle delay has elapsed after the final match.
    completion_shown: bool,
    settle: Timer,
    // Bumped on every load so observers can tell a reload from an update.
    generation: u64,
    shuffler: Box<dyn Shuffler>,
}

impl LevelEngine {
    /// Takes a validated unit (see `Unit::validate`) and loads its first level.
    pub fn new(unit: Unit, shuffler: impl Shuffler + 'static) -> Self {
        let mut engine = Self {
            unit,
            level_index: 0,
            concepts: Vec::new(),
            definitions: Vec::new(),
            matched: HashSet::new(),
            completion_shown: false,
            settle: Timer::new(),
            generation: 0,
            shuffler: Box::new(shuffler),
        };
        engine.load_level();
        engine
    }

    /// (Re)derive both presentation orders and reset per-level state.
    pub fn load_level(&mut self) {
        let pairs = &self.unit.levels[self.level_index].pairs;
        let mut concepts = pairs.clone();
        let mut definitions = pairs.clone();
        self.shuffler.shuffle(&mut concepts);
        self.shuffler.shuffle(&mut definitions);
        self.concepts = concepts;
        self.definitions = definitions;
        self.matched.clear();
        self.completion_shown = false;
        self.settle.cancel();
        self.generation += 1;
        info!(
            level = self.level_index,
            name = %self.current_level().name,
            pairs = self.concepts.len(),
            "level loaded"
        );
    }

    /// Returns true when `concept` was not matched before.
    pub fn record_match(&mut self, concept: &str) -> bool {
        let inserted = self.matched.insert(concept.to_string());
        debug!(concept, inserted, matched = self.matched.len(), "match recorded");
        inserted
    }

    pub fn is_complete(&self) -> bool {
        self.matched.len() == self.current_level().pairs.len()
    }

    /// Start the settle delay if the level just became complete.
    pub fn schedule_completion(&mut self, now: f64, delay_ms: f64) -> bool {
        if !self.is_complete() || self.completion_shown {
            return false;
        }
        self.settle.arm_once(now, delay_ms)
    }

    /// True on the tick where the settle delay elapses.
    pub fn poll_completion(&mut self, now: f64) -> bool {
        if !self.settle.fire(now) {
            return false;
        }
        self.completion_shown = true;
        info!(level = self.level_index, last = self.is_last_level(), "level complete");
        true
    }

    /// Move to the next level. No-op on the last one.
    pub fn advance(&mut self) -> bool {
        if self.is_last_level() {
            debug!(level = self.level_index, "advance ignored on last level");
            return false;
        }
        self.level_index += 1;
        self.load_level();
        true
    }

    pub fn is_last_level(&self) -> bool {
        self.level_index + 1 == self.unit.levels.len()
    }

    pub fn level_index(&self) -> usize {
        self.level_index
    }

    pub fn level_count(&self) -> usize {
        self.unit.levels.len()
    }

    pub fn unit(&self) -> &Unit {
        &self.unit
    }

    pub fn current_level(&self) -> &Level {
        &self.unit.levels[self.level_index]
    }

    pub fn concepts(&self) -> &[Pair] {
        &self.concepts
    }

    pub fn definitions(&self) -> &[Pair] {
        &self.definitions
    }

    pub fn matched(&self) -> &HashSet<String> {
        &self.matched
    }

    pub fn is_matched(&self, concept: &str) -> bool {
        self.matched.contains(concept)
    }

    pub fn is_settling(&self) -> bool {
        self.settle.is_pending()
    }

    pub fn is_completion_shown(&self) -> bool {
        self.completion_shown
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}
