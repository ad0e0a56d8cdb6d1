//! Shared helpers for backend tests: one-time logging setup and
//! assertions over the problem-details error contract.

pub mod logging;
pub mod problem_details;
