use dialoguer::{Confirm, Input};

use crate::error::{MenuError, Result};
use crate::models::PartyConfiguration;

/// Prompt for a head count in one diner role.
pub fn prompt_count(role: &str, default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt(format!("How many {role}?"))
        .default(default.to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| MenuError::InvalidInput(format!("Invalid count for {role}: {input}")))
}

/// Collect the party composition interactively.
pub fn prompt_party_configuration() -> Result<PartyConfiguration> {
    let men = prompt_count("adult men", 1)?;
    let women = prompt_count("adult women", 1)?;
    let children = prompt_count("children", 0)?;
    let elderly = prompt_count("elderly", 0)?;

    let config = PartyConfiguration::new(men, women, children, elderly);
    if !config.is_valid() {
        return Err(MenuError::InvalidInput(
            "At least one diner is required".to_string(),
        ));
    }
    Ok(config)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
