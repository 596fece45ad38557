pub mod app;
mod commands;
mod interactive;

pub use app::App;
pub use commands::{Args, CheckArgs, Commands};
pub use interactive::prompt_username;
