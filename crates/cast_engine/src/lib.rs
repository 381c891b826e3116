//! # Cast Engine
//!
//! A small frame-driven engine for 2D arcade games built around actors,
//! a cast of named actor groups and a script of per-frame actions.
//!
//! ## Features
//!
//! - **Cast/Script Architecture**: actors grouped by name, driven by actions
//! - **Director Loop**: fixed-rate frame loop with input pumping
//! - **Audio**: fire-and-forget sound playback (rodio behind the `rodio` feature)
//! - **Configuration**: TOML and RON config files via serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cast_engine::prelude::*;
//!
//! struct Drift;
//!
//! impl Action for Drift {
//!     fn name(&self) -> &str {
//!         "drift"
//!     }
//!
//!     fn execute(&mut self, cast: &mut Cast, _frame: &mut FrameContext<'_>) -> Result<(), ActionError> {
//!         for actor in cast.actors_mut("stars")? {
//!             actor.move_next(640, 480);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut cast = Cast::new();
//!     cast.ensure_group("stars");
//!
//!     let mut script = Script::new();
//!     script.add_action(Phase::Update, Box::new(Drift));
//!
//!     let mut director = Director::new(DirectorConfig::default());
//!     director.run(&mut cast, &mut script, &mut NoInput)?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod cast;
pub mod script;
pub mod input;
pub mod audio;
pub mod config;

mod director;

pub use director::{Director, DirectorConfig, DirectorError, RunSummary, StopReason};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        Director, DirectorConfig, DirectorError, RunSummary, StopReason,
        foundation::{
            math::Point,
            time::Timer,
        },
        cast::{Actor, Cast, CastError},
        script::{Action, ActionError, FrameContext, Phase, Script},
        input::{InputManager, InputSource, KeyCode, NoInput},
        audio::{AudioAsset, AudioError, SilentPlayer, SoundPlayer},
        config::{Config, ConfigError},
    };
}
