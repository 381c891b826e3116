//! Cross-module game tests

pub mod support;

mod game_loop;
