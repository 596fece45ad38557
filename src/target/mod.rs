// src/target/mod.rs
mod loader;
mod model;

pub use loader::{load_targets, parse_targets, select_targets};
pub use model::{DetectionStrategy, Target, TargetRecord, USERNAME_PLACEHOLDER};
