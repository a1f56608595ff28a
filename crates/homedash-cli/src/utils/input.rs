//! User input utilities for interactive command-line prompts.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

/// Prompts the user for a string input.
///
/// The input is read from stdin and returned with whitespace trimmed.
///
/// # Errors
///
/// Returns an error if reading from stdin fails.
pub fn prompt_string(prompt: &str) -> Result<String> {
    let stdin = io::stdin();
    read_answer(prompt, &mut stdin.lock(), &mut io::stdout())
}

/// Prompts for a value unless one was already supplied on the command line.
pub fn value_or_prompt(value: Option<String>, prompt: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt_string(prompt),
    }
}

fn read_answer(prompt: &str, input: &mut impl BufRead, output: &mut impl Write) -> Result<String> {
    write!(output, "{prompt}: ").context("Failed to write prompt")?;
    output.flush().context("Failed to write prompt")?;

    let mut answer = String::new();
    input
        .read_line(&mut answer)
        .context("Failed to read user input")?;

    Ok(answer.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_answer_trims_and_echoes_prompt() {
        let mut input = Cursor::new("  admin \n");
        let mut output = Vec::new();

        let answer = read_answer("Username", &mut input, &mut output).unwrap();

        assert_eq!(answer, "admin");
        assert_eq!(String::from_utf8(output).unwrap(), "Username: ");
    }

    #[test]
    fn supplied_value_skips_prompt() {
        assert_eq!(value_or_prompt(Some("x".into()), "unused").unwrap(), "x");
    }
}
