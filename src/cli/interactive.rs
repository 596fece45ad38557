use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::{HuntError, HuntResult};

/// Ask for the username on the terminal
pub fn prompt_username() -> HuntResult<String> {
    Input::with_theme(&ColorfulTheme::default())
        .with_prompt("Username")
        .interact_text()
        .map_err(|e| HuntError::UnexpectedError(format!("Input error: {}", e)))
}
