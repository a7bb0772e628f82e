//! Terminal prompter backed by dialoguer.

use colored::Colorize;
use dialoguer::{Confirm, Input, MultiSelect};
use stewgen_core::prompt::Validator;
use stewgen_core::{GenError, GenResult, Prompter};

/// Asks questions on the controlling terminal.
#[derive(Debug, Default)]
pub struct TermPrompter;

impl TermPrompter {
    pub fn new() -> Self {
        Self
    }
}

fn prompt_error(e: dialoguer::Error) -> GenError {
    GenError::prompt(e.to_string())
}

impl Prompter for TermPrompter {
    fn input(&mut self, message: &str, validate: Validator<'_>) -> GenResult<String> {
        Input::<String>::new()
            .with_prompt(message)
            .allow_empty(true)
            .validate_with(|value: &String| validate(value))
            .interact_text()
            .map_err(prompt_error)
    }

    fn multi_select(&mut self, message: &str, choices: &[String], required: bool) -> GenResult<Vec<usize>> {
        loop {
            let picked = MultiSelect::new()
                .with_prompt(message)
                .items(choices)
                .interact()
                .map_err(prompt_error)?;
            if !required || !picked.is_empty() {
                return Ok(picked);
            }
            println!("{}", "Select at least one option (space to toggle, enter to confirm)".yellow());
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> GenResult<bool> {
        Confirm::new()
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(prompt_error)
    }
}
