//! Repository functions for the domain layer.

pub mod answers;
pub mod games;
pub mod players;
