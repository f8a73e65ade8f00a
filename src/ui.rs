use inquire::error::InquireError;
use inquire::ui::{Color, RenderConfig, Styled};
use inquire::validator::Validation;
use inquire::{set_global_render_config, CustomUserError, Password, PasswordDisplayMode, Text};

use crate::error::Error;

/// Initialize the global render configuration for inquire prompts
pub fn init_render_config() {
    let mut style = RenderConfig::default_colored();
    style.prompt_prefix = Styled::new(">").with_fg(Color::LightGreen);
    set_global_render_config(style);
}

/// Prompt for the organization URL, offering the stored value as default
pub fn prompt_org_url(current: &str) -> Result<String, Error> {
    let mut prompt = Text::new("Organization URL (i.e. https://dev.azure.com/<myorg>):")
        .with_validator(
            |input: &str| -> Result<Validation, CustomUserError> {
                if input.trim().is_empty() {
                    Ok(Validation::Invalid("Organization URL is required".into()))
                } else {
                    Ok(Validation::Valid)
                }
            },
        );

    if !current.is_empty() {
        prompt = prompt.with_default(current);
    }

    prompt.prompt().map_err(map_inquire_error)
}

/// Prompt for the personal access token.
///
/// An empty answer keeps the currently stored token, so re-running
/// `init` doesn't force re-entering it.
pub fn prompt_pat(current: &str) -> Result<String, Error> {
    let message = if current.is_empty() {
        "Personal access token:"
    } else {
        "Personal access token (empty keeps the stored one):"
    };

    let entered = Password::new(message)
        .with_display_mode(PasswordDisplayMode::Masked)
        .without_confirmation()
        .prompt()
        .map_err(map_inquire_error)?;

    if entered.is_empty() && !current.is_empty() {
        return Ok(current.to_string());
    }
    if entered.is_empty() {
        return Err(Error::InvalidInput("Personal access token is required".into()));
    }
    Ok(entered)
}

/// Map inquire errors to our error type
fn map_inquire_error(err: InquireError) -> Error {
    match err {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => Error::Cancelled,
        _ => Error::Prompt(err.to_string()),
    }
}
