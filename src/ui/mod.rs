//! UI module - score and game-over labels

mod hud;

pub use hud::*;
