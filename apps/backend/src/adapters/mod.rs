//! Adapters for external dependencies.

pub mod answers_sea;
pub mod games_sea;
pub mod players_sea;
