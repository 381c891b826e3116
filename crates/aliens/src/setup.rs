//! Building and running a game from its configuration

use crate::actions::{
    AnnounceMessagesAction, CollisionBounds, ControlPlayerAction, GameStateHandle, HandleCollisionsAction,
    MoveActorsAction, Pilot,
};
use crate::autopilot::AutoPilot;
use crate::config::GameConfig;
use crate::groups::{self, ALIENS, BULLETS, PLAYERS};
use crate::sounds::{self, GameSounds, Outcome};
use crate::GameError;
use cast_engine::prelude::*;
use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};

/// Chance per frame that the autopilot sits still
const AUTOPILOT_HESITATION: f64 = 0.1;

/// How a finished run went
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameReport {
    /// Frames played
    pub frames: u64,
    /// `None` when the run stopped before the game ended
    pub outcome: Option<Outcome>,
}

/// Lay out the opening cast
///
/// The ship sits on the bottom row in the middle; each alien row picks
/// `aliens_per_row` distinct random columns and marches down one cell per
/// step.
pub fn build_cast(config: &GameConfig, rng: &mut impl Rng) -> Cast {
    let screen = &config.screen;
    let cell = screen.cell_size.max(1);
    let mut cast = Cast::new();
    for group in groups::ALL {
        cast.ensure_group(group);
    }

    let (center_x, _) = screen.center();
    let ship_x = center_x - center_x % cell;
    cast.add_actor(PLAYERS, Actor::at(Point::new(ship_x, screen.max_y - cell)).with_text("#"));

    let columns = usize::try_from(screen.columns()).unwrap_or(0);
    let per_row = usize::try_from(config.gameplay.aliens_per_row).unwrap_or(0).min(columns);
    let march = Point::new(0, cell);
    for row in 0..config.gameplay.alien_rows {
        let y = i32::try_from(row).unwrap_or(i32::MAX).saturating_add(2).saturating_mul(cell);
        let mut picked = sample(rng, columns, per_row).into_vec();
        picked.sort_unstable();
        for column in picked {
            let x = i32::try_from(column).unwrap_or(0) * cell;
            cast.add_actor(ALIENS, Actor::at(Point::new(x, y)).with_velocity(march).with_text("W"));
        }
    }

    log::info!(
        "Cast ready: {} aliens in {} rows",
        cast.len(ALIENS),
        config.gameplay.alien_rows
    );
    cast
}

/// Assemble the per-frame script
///
/// Returns the script and a handle to the collision state so the caller can
/// tell how the game ended.
pub fn build_script(
    config: &GameConfig,
    game_sounds: GameSounds,
    player: Box<dyn SoundPlayer>,
    pilot: Box<dyn Pilot>,
) -> (Script, GameStateHandle) {
    let screen = &config.screen;
    let gameplay = &config.gameplay;

    let collisions = HandleCollisionsAction::new(CollisionBounds::from(screen), game_sounds, player);
    let state = collisions.state_handle();

    let mut script = Script::new();
    script.add_action(
        Phase::Input,
        Box::new(ControlPlayerAction::new(screen, gameplay.fire_cooldown_frames, pilot)),
    );
    script.add_action(
        Phase::Update,
        Box::new(
            MoveActorsAction::new(screen)
                .every(BULLETS, 1)
                .every(ALIENS, gameplay.alien_step_frames),
        ),
    );
    script.add_action(Phase::Update, Box::new(collisions));
    script.add_action(Phase::Output, Box::new(AnnounceMessagesAction::new(gameplay.linger_frames)));

    (script, state)
}

/// Play a whole game with the autopilot at the controls
pub fn run(config: &GameConfig) -> Result<GameReport, GameError> {
    config.validate().map_err(GameError::InvalidConfig)?;

    let game_sounds = GameSounds::load(&config.audio)?;
    let player = sounds::sound_player(&config.audio);

    let mut rng = StdRng::seed_from_u64(config.gameplay.seed);
    let mut cast = build_cast(config, &mut rng);
    let pilot = AutoPilot::new(rng.gen(), AUTOPILOT_HESITATION);
    let (mut script, state) = build_script(config, game_sounds, player, Box::new(pilot));

    let mut director = Director::new(config.engine.director());
    let summary = director.run(&mut cast, &mut script, &mut NoInput)?;

    let report = GameReport {
        frames: summary.frames,
        outcome: state.get().outcome(),
    };
    match report.outcome {
        Some(outcome) => log::info!("Game finished after {} frames: {:?}", report.frames, outcome),
        None => log::warn!("Run stopped after {} frames without a result", report.frames),
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_cast_layout() {
        let config = GameConfig::default();
        let cast = build_cast(&config, &mut StdRng::seed_from_u64(3));

        assert_eq!(cast.group_names(), vec!["aliens", "bullets", "messages", "players"]);
        assert_eq!(cast.first_actor(PLAYERS).unwrap().position(), Point::new(450, 585));
        assert_eq!(cast.len(ALIENS), 24);
        assert_eq!(cast.len(BULLETS), 0);

        for alien in cast.actors(ALIENS).unwrap() {
            let p = alien.position();
            assert_eq!(p.x() % 15, 0);
            assert_eq!(p.y() % 15, 0);
            assert!(p.y() < config.screen.bottom);
            assert_eq!(alien.velocity(), Point::new(0, 15));
        }
    }

    #[test]
    fn test_rows_have_distinct_columns() {
        let config = GameConfig::default();
        let cast = build_cast(&config, &mut StdRng::seed_from_u64(11));

        let first_row: Vec<i32> = cast
            .actors(ALIENS)
            .unwrap()
            .iter()
            .filter(|alien| alien.position().y() == 30)
            .map(|alien| alien.position().x())
            .collect();
        let mut deduped = first_row.clone();
        deduped.dedup();
        assert_eq!(first_row.len(), 8);
        assert_eq!(deduped, first_row);
    }

    #[test]
    fn test_same_seed_same_cast() {
        let config = GameConfig::default();
        let a = build_cast(&config, &mut StdRng::seed_from_u64(5));
        let b = build_cast(&config, &mut StdRng::seed_from_u64(5));
        assert_eq!(a.actors(ALIENS).unwrap(), b.actors(ALIENS).unwrap());
    }

    #[test]
    fn test_script_phase_layout() {
        let config = GameConfig::default();
        let (script, state) = build_script(
            &config,
            GameSounds::none(),
            Box::new(SilentPlayer),
            Box::new(crate::actions::KeyboardPilot),
        );

        assert_eq!(script.action_names(Phase::Input), vec!["control-player"]);
        assert_eq!(script.action_names(Phase::Update), vec!["move-actors", "handle-collisions"]);
        assert_eq!(script.action_names(Phase::Output), vec!["announce-messages"]);
        assert_eq!(state.get().outcome(), None);
    }

    #[test]
    fn test_run_rejects_invalid_config() {
        let mut config = GameConfig::default();
        config.screen.cell_size = 0;
        assert!(matches!(run(&config), Err(GameError::InvalidConfig(_))));
    }
}
