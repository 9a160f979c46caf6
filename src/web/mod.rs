//! Browser binding: builds the board in the DOM, forwards drag / drop / click
//! events into [`Game`], and drives its timers from `requestAnimationFrame`.
//!
//! Listeners are attached once to the `#cm-root` container and locate tiles
//! through `data-role` / `data-index` attributes, so tiles can be rebuilt
//! freely on level load. Between loads only classes and attributes are
//! repainted; replacing the dragged element would abort the browser drag.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, DragEvent, Element, Event, window};

use crate::config::GameConfig;
use crate::game::{Game, GameView, HostSignal};
use crate::relay::PromptAction;
use crate::unit::{Unit, sample_unit};

mod markup;

/// Event dispatched on `document` when the player leaves the game.
pub const HOME_EVENT: &str = "concept-match:home";

struct WebState {
    game: Game,
    rendered_generation: Option<u64>,
}

thread_local! {
    static GAME_STATE: RefCell<Option<WebState>> = const { RefCell::new(None) };
}

/// Start a game for a unit given as JSON, using the default texts and delays.
#[wasm_bindgen]
pub fn start_game(unit_json: &str) -> Result<(), JsValue> {
    start_game_with_config(unit_json, None)
}

/// Like `start_game`, with a JSON object overriding any `GameConfig` fields.
#[wasm_bindgen]
pub fn start_game_with_config(unit_json: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let unit = Unit::from_json(unit_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let config = match config_json {
        Some(json) => GameConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?,
        None => GameConfig::default(),
    };
    mount(unit, config)
}

/// Start the bundled sample unit.
#[wasm_bindgen]
pub fn start_sample_game() -> Result<(), JsValue> {
    mount(sample_unit(), GameConfig::default())
}

fn mount(unit: Unit, config: GameConfig) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let doc = win
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    // Reuse the root (and its listeners / frame loop) when restarted.
    let fresh = doc.get_element_by_id("cm-root").is_none();
    let root: Element = match doc.get_element_by_id("cm-root") {
        Some(el) => el,
        None => {
            let body = doc.body().ok_or_else(|| JsValue::from_str("no body"))?;
            let style = doc.create_element("style")?;
            style.set_text_content(Some(markup::STYLE));
            body.append_child(&style)?;
            let el = doc.create_element("div")?;
            el.set_id("cm-root");
            body.append_child(&el)?;
            el
        }
    };
    root.set_inner_html(markup::SKELETON);
    set_text(&doc, "cm-home", &config.home_button_label);
    set_text(&doc, "cm-concepts-heading", &config.concepts_heading);
    set_text(&doc, "cm-definitions-heading", &config.definitions_heading);

    let game = Game::with_random_order(unit, config);
    GAME_STATE.with(|cell| {
        cell.replace(Some(WebState {
            game,
            rendered_generation: None,
        }))
    });
    with_state(|state| sync(&doc, state, performance_now()));

    if fresh {
        attach_listeners(&root)?;
        start_frame_loop();
    }
    Ok(())
}

fn with_state<R>(f: impl FnOnce(&mut WebState) -> R) -> Option<R> {
    GAME_STATE.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn performance_now() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// Index of the tile with `data-role = role` that contains the event target.
fn tile_index(evt: &Event, role: &str) -> Option<usize> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    let tile = target
        .closest(&format!("[data-role=\"{role}\"]"))
        .ok()
        .flatten()?;
    tile.get_attribute("data-index")?.parse().ok()
}

fn action_of(evt: &Event) -> Option<String> {
    let target: Element = evt.target()?.dyn_into().ok()?;
    target
        .closest("[data-action]")
        .ok()
        .flatten()?
        .get_attribute("data-action")
}

fn add_listener(
    root: &Element,
    kind: &str,
    handler: impl FnMut(Event) + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(_)>);
    root.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn attach_listeners(root: &Element) -> Result<(), JsValue> {
    add_listener(root, "dragstart", |evt: Event| {
        let Some(index) = tile_index(&evt, "concept") else {
            return;
        };
        let accepted = with_state(|state| state.game.drag_start(index)).unwrap_or(false);
        if !accepted {
            evt.prevent_default();
            return;
        }
        // Firefox only starts a drag when some data is attached.
        if let Some(dt) = evt.dyn_ref::<DragEvent>().and_then(|d| d.data_transfer()) {
            let _ = dt.set_data("text/plain", &index.to_string());
        }
        repaint();
    })?;

    add_listener(root, "dragend", |_evt: Event| {
        with_state(|state| state.game.drag_end());
        repaint();
    })?;

    add_listener(root, "dragover", |evt: Event| {
        let Some(index) = tile_index(&evt, "definition") else {
            return;
        };
        // Required for the element to accept a drop.
        evt.prevent_default();
        if with_state(|state| state.game.drag_over(index)).unwrap_or(false) {
            repaint();
        }
    })?;

    add_listener(root, "dragleave", |evt: Event| {
        if tile_index(&evt, "definition").is_none() {
            return;
        }
        with_state(|state| state.game.drag_leave());
        repaint();
    })?;

    add_listener(root, "drop", |evt: Event| {
        let Some(index) = tile_index(&evt, "definition") else {
            return;
        };
        evt.prevent_default();
        let now = performance_now();
        with_state(|state| state.game.drop_on(index, now));
        repaint();
    })?;

    add_listener(root, "click", |evt: Event| {
        let Some(action) = action_of(&evt) else {
            return;
        };
        let signal = match action.as_str() {
            "home" => with_state(|state| state.game.go_home()),
            "confirm" => with_state(|state| state.game.confirm_completion()).flatten(),
            other => {
                warn!(action = other, "unknown action");
                None
            }
        };
        repaint();
        // Dispatch after the state borrow is released; the host may restart the game.
        if let Some(HostSignal::GoHome) = signal {
            if let Err(err) = dispatch_home() {
                web_sys::console::error_1(&err);
            }
        }
    })?;
    Ok(())
}

fn dispatch_home() -> Result<(), JsValue> {
    let doc = document().ok_or_else(|| JsValue::from_str("no document"))?;
    let evt = Event::new(HOME_EVENT)?;
    doc.dispatch_event(&evt)?;
    Ok(())
}

fn repaint() {
    let Some(doc) = document() else {
        return;
    };
    let now = performance_now();
    with_state(|state| sync(&doc, state, now));
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_frame_loop() {
    let f: FrameCallback = Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if let Some(doc) = document() {
            with_state(|state| {
                let changed = state.game.tick(ts);
                // Keep painting while a popup is up so the fade class lands on time.
                if changed || state.game.relay().feedback().is_some() {
                    sync(&doc, state, ts);
                }
            });
        }
        if let (Some(w), Some(cb)) = (window(), f.borrow().as_ref()) {
            let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut(f64)>));
    if let (Some(w), Some(cb)) = (window(), g.borrow().as_ref()) {
        let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

// --- Rendering ---------------------------------------------------------------

fn sync(doc: &Document, state: &mut WebState, now: f64) {
    let view = state.game.view(now);
    if state.rendered_generation != Some(view.generation) {
        render_level(doc, &view);
        state.rendered_generation = Some(view.generation);
    }
    paint(doc, &view);
}

fn set_text(doc: &Document, id: &str, text: &str) {
    if let Some(el) = doc.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn set_hidden(el: &Element, hidden: bool) {
    if hidden {
        let _ = el.set_attribute("hidden", "");
    } else {
        let _ = el.remove_attribute("hidden");
    }
}

fn render_level(doc: &Document, view: &GameView) {
    set_text(doc, "cm-unit-title", &view.title);
    set_text(doc, "cm-intro", &view.intro);
    set_text(doc, "cm-level-name", &view.level_name);
    if let Some(el) = doc.get_element_by_id("cm-concepts") {
        el.set_inner_html(&markup::concept_tiles(&view.concepts));
    }
    if let Some(el) = doc.get_element_by_id("cm-definitions") {
        el.set_inner_html(&markup::definition_tiles(&view.definitions));
    }
}

fn paint(doc: &Document, view: &GameView) {
    for (i, tile) in view.concepts.iter().enumerate() {
        if let Some(el) = doc.get_element_by_id(&markup::concept_id(i)) {
            el.set_class_name(&markup::concept_class(tile));
            let _ = el.set_attribute("draggable", if tile.draggable() { "true" } else { "false" });
        }
    }
    for (i, tile) in view.definitions.iter().enumerate() {
        if let Some(el) = doc.get_element_by_id(&markup::definition_id(i)) {
            el.set_class_name(&markup::definition_class(tile));
        }
    }
    if let Some(el) = doc.get_element_by_id("cm-feedback") {
        match &view.feedback {
            Some(fb) => {
                el.set_class_name(&markup::feedback_class(fb));
                el.set_text_content(Some(&fb.message));
                set_hidden(&el, false);
            }
            None => set_hidden(&el, true),
        }
    }
    if let Some(el) = doc.get_element_by_id("cm-modal") {
        set_hidden(&el, view.completion.is_none());
    }
    if let Some(prompt) = &view.completion {
        set_text(doc, "cm-modal-title", &prompt.title);
        if let Some(button) = doc.get_element_by_id("cm-modal-button") {
            button.set_text_content(Some(&prompt.button_label));
            button.set_class_name(match prompt.action {
                PromptAction::NextLevel => "cm-next",
                PromptAction::GoHome => "cm-home",
            });
        }
    }
}
