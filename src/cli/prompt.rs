//! Interactive input helpers

use std::io::BufRead;

use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::PasswordArgs;
use crate::error::{Error, Result};

/// Use the given value or prompt for it
pub fn text_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(v) => Ok(v),
        None => Ok(Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact_text()?),
    }
}

/// Read a password from stdin (`--password-stdin`) or a hidden prompt
pub fn password(args: &PasswordArgs, prompt: &str) -> Result<String> {
    let secret = if args.password_stdin {
        read_line(std::io::stdin().lock())?
    } else {
        Password::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .interact()?
    };

    if secret.is_empty() {
        return Err(Error::Other("Password must not be empty".to_string()));
    }
    Ok(secret)
}

/// First line of `reader` without its line terminator
fn read_line(mut reader: impl BufRead) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
