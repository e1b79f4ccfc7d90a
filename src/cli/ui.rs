//! User prompts.

use std::io::{self, BufRead, Write};

use console::Term;
use dialoguer::Input;

use crate::error::LensError;
use crate::Result;

const IMAGE_PROMPT: &str = "Enter Docker image name";

/// Interactive input used by the CLI
pub trait UserInterface {
    /// Get a line of text from the user
    fn get_string_input(&self, prompt: &str) -> Result<String>;
}

/// Default UI: dialoguer on a terminal, a plain line read otherwise
#[derive(Default)]
pub struct DefaultUI;

impl UserInterface for DefaultUI {
    fn get_string_input(&self, prompt: &str) -> Result<String> {
        let term = Term::stdout();
        if term.is_term() {
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text_on(&term)
                .map_err(|e| LensError::UserInput(e.to_string()));
        }

        let mut stdout = io::stdout();
        write!(stdout, "{}: ", prompt)?;
        stdout.flush()?;

        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(line)
    }
}

/// Ask for the image to inspect, keeping only the first word typed
pub fn prompt_image(ui: &impl UserInterface) -> Result<String> {
    let input = ui.get_string_input(IMAGE_PROMPT)?;
    Ok(input
        .split_whitespace()
        .next()
        .unwrap_or_default()
        .to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockUserInterface(&'static str);

    impl UserInterface for MockUserInterface {
        fn get_string_input(&self, prompt: &str) -> Result<String> {
            assert_eq!(prompt, "Enter Docker image name");
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_first_token_is_the_image() {
        let ui = MockUserInterface("  nginx:1.25   extra words\n");
        assert_eq!(prompt_image(&ui).unwrap(), "nginx:1.25");
    }

    #[test]
    fn test_blank_input_is_empty_image() {
        let ui = MockUserInterface("   \n");
        assert_eq!(prompt_image(&ui).unwrap(), "");
    }
}
