//! Concept Match core crate.
//!
//! A drag-and-drop matching game: each level of a unit shows its concepts and
//! its definitions in two independently shuffled columns, and the player drags
//! every concept onto the definition it belongs to.
//!
//! The game logic (`engine`, `tracker`, `relay`, `game`) is plain Rust driven
//! by explicit timestamps and runs natively under `cargo test`. The `web`
//! module binds it to the DOM and is only exercised inside a browser.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod engine;
pub mod game;
mod logging;
pub mod relay;
pub mod timer;
pub mod tracker;
pub mod unit;
mod web;

pub use config::GameConfig;
pub use engine::{LevelEngine, RandomShuffler, Shuffler};
pub use game::{Game, GameView, HostSignal};
pub use relay::{FeedbackKind, NotificationRelay, PromptAction, Visibility};
pub use tracker::{DropOutcome, InteractionTracker};
pub use unit::{Level, Pair, Unit, UnitError, sample_unit};
pub use web::{HOME_EVENT, start_game, start_game_with_config, start_sample_game};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
}
