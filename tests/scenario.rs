// End-to-end games played through the public API.
// Native-friendly: time is passed explicitly, no browser APIs involved.

use concept_match::{
    DropOutcome, FeedbackKind, Game, GameConfig, HostSignal, Level, Pair, PromptAction, Unit,
    Visibility,
};

fn identity(_: &mut [Pair]) {}

fn unit(levels: &[&[(&str, &str)]]) -> Unit {
    Unit {
        name: "Scenario".to_string(),
        intro: "Match them all".to_string(),
        levels: levels
            .iter()
            .enumerate()
            .map(|(i, pairs)| Level {
                name: format!("Level {}", i + 1),
                pairs: pairs.iter().map(|(c, d)| Pair::new(*c, *d)).collect(),
            })
            .collect(),
    }
}

fn definition_index(game: &Game, definition: &str) -> usize {
    game.view(0.0)
        .definitions
        .iter()
        .position(|t| t.text == definition)
        .unwrap()
}

fn concept_index(game: &Game, concept: &str) -> usize {
    game.view(0.0)
        .concepts
        .iter()
        .position(|t| t.text == concept)
        .unwrap()
}

fn drag_and_drop(game: &mut Game, concept: &str, definition: &str, now: f64) -> Option<DropOutcome> {
    let from = concept_index(game, concept);
    let to = definition_index(game, definition);
    assert!(game.drag_start(from), "drag of '{}' refused", concept);
    game.drag_over(to);
    let outcome = game.drop_on(to, now);
    game.drag_end();
    outcome
}

fn matched(game: &Game) -> Vec<String> {
    let mut v: Vec<String> = game.engine().matched().iter().cloned().collect();
    v.sort();
    v
}

#[test]
fn single_level_unit_plays_to_the_end() {
    let mut game = Game::new(unit(&[&[("A", "1"), ("B", "2")]]), GameConfig::default(), identity);

    let outcome = drag_and_drop(&mut game, "A", "2", 0.0);
    assert!(matches!(outcome, Some(DropOutcome::Mismatched { .. })));
    assert!(matched(&game).is_empty());
    assert_eq!(game.view(0.0).feedback.unwrap().kind, FeedbackKind::Failure);

    let outcome = drag_and_drop(&mut game, "A", "1", 100.0);
    assert_eq!(outcome, Some(DropOutcome::Matched { concept: "A".to_string() }));
    assert_eq!(matched(&game), ["A"]);
    assert_eq!(game.view(100.0).feedback.unwrap().kind, FeedbackKind::Success);

    drag_and_drop(&mut game, "B", "2", 200.0);
    assert_eq!(matched(&game), ["A", "B"]);
    assert!(game.engine().is_complete());

    // Settle delay before the prompt appears.
    game.tick(699.0);
    assert!(game.view(699.0).completion.is_none());
    game.tick(700.0);
    let prompt = game.view(700.0).completion.unwrap();
    assert_eq!(prompt.action, PromptAction::GoHome);
    assert_eq!(prompt.button_label, GameConfig::default().go_home_label);

    assert_eq!(game.confirm_completion(), Some(HostSignal::GoHome));
}

#[test]
fn multi_level_unit_advances_level_by_level() {
    let mut game = Game::new(
        unit(&[&[("A", "1")], &[("B", "2")], &[("C", "3")]]),
        GameConfig::default(),
        identity,
    );
    for (step, (concept, definition)) in [("A", "1"), ("B", "2"), ("C", "3")].iter().enumerate() {
        let now = step as f64 * 10_000.0;
        assert_eq!(game.engine().level_index(), step);
        drag_and_drop(&mut game, concept, definition, now);
        game.tick(now + 500.0);
        let prompt = game.view(now + 500.0).completion.unwrap();
        if step < 2 {
            assert_eq!(prompt.action, PromptAction::NextLevel);
            assert_eq!(game.confirm_completion(), None);
            assert!(game.engine().matched().is_empty());
        } else {
            assert_eq!(prompt.action, PromptAction::GoHome);
        }
    }
}

#[test]
fn completion_is_never_announced_early() {
    let mut game = Game::new(
        unit(&[&[("A", "1"), ("B", "2"), ("C", "3")]]),
        GameConfig::default(),
        identity,
    );
    drag_and_drop(&mut game, "A", "1", 0.0);
    drag_and_drop(&mut game, "B", "2", 0.0);
    game.tick(60_000.0);
    assert!(game.view(60_000.0).completion.is_none());
    assert!(!game.engine().is_complete());
}

#[test]
fn success_feedback_hides_after_delay() {
    let mut game = Game::new(unit(&[&[("A", "1"), ("B", "2")]]), GameConfig::default(), identity);
    drag_and_drop(&mut game, "A", "1", 1_000.0);
    assert_eq!(game.relay().visibility(), Visibility::Visible);
    assert!(!game.view(2_300.0).feedback.unwrap().fading);
    assert!(game.view(2_400.0).feedback.unwrap().fading);
    assert!(game.tick(2_500.0));
    assert!(game.view(2_500.0).feedback.is_none());
    assert_eq!(game.relay().visibility(), Visibility::Hidden);
}

#[test]
fn newer_feedback_restarts_hide_timer() {
    let mut game = Game::new(unit(&[&[("A", "1"), ("B", "2")]]), GameConfig::default(), identity);
    drag_and_drop(&mut game, "A", "2", 0.0);
    drag_and_drop(&mut game, "A", "1", 1_000.0);
    game.tick(1_500.0);
    let fb = game.view(1_500.0).feedback.unwrap();
    assert_eq!(fb.kind, FeedbackKind::Success);
    game.tick(2_500.0);
    assert!(game.view(2_500.0).feedback.is_none());
}

#[test]
fn cancelled_drag_leaves_nothing_behind() {
    let mut game = Game::new(unit(&[&[("A", "1"), ("B", "2")]]), GameConfig::default(), identity);
    assert!(game.drag_start(0));
    game.drag_over(1);
    game.drag_leave();
    game.drag_end();
    assert_eq!(game.drop_on(1, 0.0), None);
    assert!(game.view(0.0).feedback.is_none());
    assert!(game.tracker().dragging().is_none());
}

#[test]
fn custom_config_changes_messages_and_delays() {
    let config = GameConfig {
        success_message: "Correct!".to_string(),
        settle_delay_ms: 100.0,
        ..GameConfig::default()
    };
    let mut game = Game::new(unit(&[&[("A", "1")]]), config, identity);
    drag_and_drop(&mut game, "A", "1", 0.0);
    assert_eq!(game.view(0.0).feedback.unwrap().message, "Correct!");
    assert!(game.tick(100.0));
    assert!(game.view(100.0).completion.is_some());
}

#[test]
fn random_order_keeps_every_tile() {
    let u = unit(&[&[("A", "1"), ("B", "2"), ("C", "3"), ("D", "4"), ("E", "5")]]);
    let game = Game::with_random_order(u, GameConfig::default());
    let view = game.view(0.0);
    let mut concepts: Vec<&str> = view.concepts.iter().map(|t| t.text.as_str()).collect();
    let mut definitions: Vec<&str> = view.definitions.iter().map(|t| t.text.as_str()).collect();
    concepts.sort();
    definitions.sort();
    assert_eq!(concepts, ["A", "B", "C", "D", "E"]);
    assert_eq!(definitions, ["1", "2", "3", "4", "5"]);
}
