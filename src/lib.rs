pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod reporting;
pub mod target;
pub mod utils;

// Re-export main types for easier access
pub use cli::App;
pub use config::Config;
pub use engine::{
    Engine,
    ProbeOutcome,
    ProbeStatus,
    Transport
};
pub use error::{HuntError, HuntResult, ProbeError};
pub use reporting::Report;
pub use target::{DetectionStrategy, Target};
