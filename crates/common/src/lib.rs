//! Shared building blocks for the lab results workspace.

pub mod types;
pub mod utils;
