//! Whole games driven by the director

use super::support::{sounds, RecordingPlayer};
use crate::actions::{GameState, KeyboardPilot, Pilot, LOSE_MESSAGE, WIN_MESSAGE};
use crate::autopilot::AutoPilot;
use crate::config::GameConfig;
use crate::groups::{self, ALIENS, BULLETS, MESSAGES, PLAYERS};
use crate::setup::{self, build_script};
use crate::sounds::Outcome;
use cast_engine::prelude::*;

/// Holds the same keys down every frame
struct HoldKeys(Vec<KeyCode>);

impl InputSource for HoldKeys {
    fn pump(&mut self, input: &mut InputManager) {
        for &key in &self.0 {
            input.handle_key_input(key, true);
        }
    }
}

fn config(alien_step_frames: u64, linger_frames: u64, max_frames: u64) -> GameConfig {
    let mut config = GameConfig::default();
    config.gameplay.alien_step_frames = alien_step_frames;
    config.gameplay.linger_frames = linger_frames;
    config.audio.enabled = false;
    config.engine.frame_rate = 0;
    config.engine.max_frames = max_frames;
    config
}

fn cast(ship: Point, aliens: &[Point]) -> Cast {
    let mut cast = Cast::new();
    for group in groups::ALL {
        cast.ensure_group(group);
    }
    cast.add_actor(PLAYERS, Actor::at(ship));
    for &alien in aliens {
        cast.add_actor(ALIENS, Actor::at(alien).with_velocity(Point::new(0, 15)));
    }
    cast
}

fn play(
    config: &GameConfig,
    cast: &mut Cast,
    pilot: Box<dyn Pilot>,
    source: &mut dyn InputSource,
) -> (RunSummary, GameState, RecordingPlayer) {
    let player = RecordingPlayer::default();
    let (mut script, state) = build_script(config, sounds(), Box::new(player.clone()), pilot);
    let mut director = Director::new(config.engine.director());
    let summary = director.run(cast, &mut script, source).unwrap();
    (summary, state.get(), player)
}

fn banners(cast: &Cast) -> Vec<&str> {
    cast.actors(MESSAGES).unwrap().iter().map(Actor::text).collect()
}

#[test]
fn test_shooting_the_last_alien_wins() {
    let config = config(1000, 2, 500);
    let mut cast = cast(Point::new(450, 585), &[Point::new(450, 30)]);

    let (summary, state, player) = play(
        &config,
        &mut cast,
        Box::new(KeyboardPilot),
        &mut HoldKeys(vec![KeyCode::Space]),
    );

    assert_eq!(state, GameState::GameOver(Outcome::Won));
    assert_eq!(summary.stop_reason, StopReason::ExitRequested);
    assert_eq!(player.played(), vec!["win"]);
    assert_eq!(banners(&cast), vec![WIN_MESSAGE]);
    assert_eq!(cast.len(ALIENS), 0);
    assert_eq!(
        cast.first_actor(MESSAGES).unwrap().position(),
        Point::new(450, 300)
    );
}

#[test]
fn test_alien_reaching_bottom_loses() {
    let config = config(1, 1, 500);
    let mut cast = cast(Point::new(450, 585), &[Point::new(90, 555), Point::new(300, 30)]);

    let (summary, state, player) = play(&config, &mut cast, Box::new(KeyboardPilot), &mut NoInput);

    assert_eq!(state, GameState::GameOver(Outcome::Lost));
    assert_eq!(summary.stop_reason, StopReason::ExitRequested);
    // Crosses on frame 2, banner lingers one more frame
    assert_eq!(summary.frames, 3);
    assert_eq!(player.played(), vec!["lose"]);
    assert_eq!(banners(&cast), vec![LOSE_MESSAGE]);
    assert_eq!(cast.len(ALIENS), 0);
}

#[test]
fn test_autopilot_clears_a_small_wave() {
    let config = config(1000, 1, 2000);
    let mut cast = cast(
        Point::new(450, 585),
        &[Point::new(300, 30), Point::new(600, 45), Point::new(450, 60)],
    );

    let (_, state, player) = play(&config, &mut cast, Box::new(AutoPilot::new(3, 0.0)), &mut NoInput);

    assert_eq!(state, GameState::GameOver(Outcome::Won));
    assert_eq!(player.played(), vec!["win"]);
    assert_eq!(cast.len(BULLETS), 0);
}

#[test]
fn test_frame_limit_stops_an_unfinished_game() {
    let config = config(1000, 1, 10);
    let mut cast = cast(Point::new(450, 585), &[Point::new(90, 30)]);

    let (summary, state, player) = play(&config, &mut cast, Box::new(KeyboardPilot), &mut NoInput);

    assert_eq!(summary.stop_reason, StopReason::FrameLimit);
    assert_eq!(summary.frames, 10);
    assert_eq!(state, GameState::Playing);
    assert!(player.played().is_empty());
    assert_eq!(cast.len(ALIENS), 1);
}

#[test]
fn test_escape_closes_the_game() {
    struct CloseOnEscape;

    impl InputSource for CloseOnEscape {
        fn pump(&mut self, input: &mut InputManager) {
            input.handle_key_input(KeyCode::Escape, true);
            if input.is_key_down(KeyCode::Escape) {
                input.request_close();
            }
        }
    }

    let config = config(1000, 1, 100);
    let mut cast = cast(Point::new(450, 585), &[Point::new(90, 30)]);

    let (summary, state, _) = play(&config, &mut cast, Box::new(KeyboardPilot), &mut CloseOnEscape);

    assert_eq!(summary.stop_reason, StopReason::CloseRequested);
    assert_eq!(summary.frames, 0);
    assert_eq!(state, GameState::Playing);
}

#[test]
fn test_full_run_from_config_loses_when_bottom_is_close() {
    // Rows start at y = 30, 45, 60; the last row crosses y = 90 on frame 2
    let mut config = config(1, 5, 400);
    config.screen.bottom = 90;

    let report = setup::run(&config).unwrap();

    assert_eq!(report.outcome, Some(Outcome::Lost));
    assert_eq!(report.frames, 7);
}

#[test]
fn test_full_run_is_reproducible_for_a_seed() {
    let config = config(12, 5, 400);

    let first = setup::run(&config).unwrap();
    let second = setup::run(&config).unwrap();

    assert_eq!(first, second);
}
