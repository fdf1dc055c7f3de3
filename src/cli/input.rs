//! Stdin prompt helpers for the interactive shells
//!
//! All recovery from bad input is by re-prompting the operator; there are
//! no automatic retries anywhere else.

use std::io::{self, Write};

use crate::error::{ContasError, ContasResult};
use crate::models::Money;

/// Print a prompt and read one trimmed line from stdin
///
/// End of input is an error: the shells are interactive and cannot
/// continue without an operator.
pub fn prompt_line(prompt: &str) -> ContasResult<String> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Err(ContasError::Io("unexpected end of input".into()));
    }
    Ok(line.trim().to_string())
}

/// Parse a user-supplied amount, requiring a strictly positive value
pub fn parse_positive_amount(input: &str) -> ContasResult<Money> {
    let amount = Money::parse(input).map_err(|e| ContasError::Parse(e.to_string()))?;
    if !amount.is_positive() {
        return Err(ContasError::Parse("amount must be positive".into()));
    }
    Ok(amount)
}

/// Prompt until the operator enters a positive amount
pub fn prompt_magnitude(prompt: &str) -> ContasResult<Money> {
    loop {
        let line = prompt_line(prompt)?;
        match parse_positive_amount(&line) {
            Ok(amount) => return Ok(amount),
            Err(e) => eprintln!("{}. Please enter a positive number.", e),
        }
    }
}

/// Prompt until the operator enters a non-empty line
pub fn prompt_nonempty(prompt: &str) -> ContasResult<String> {
    loop {
        let line = prompt_line(prompt)?;
        if !line.is_empty() {
            return Ok(line);
        }
        eprintln!("A value is required.");
    }
}

/// Prompt until the operator picks a number in 1..=max
pub fn prompt_choice_in_range(prompt: &str, max: usize) -> ContasResult<usize> {
    loop {
        let line = prompt_line(prompt)?;
        match line.parse::<usize>() {
            Ok(n) if (1..=max).contains(&n) => return Ok(n),
            _ => eprintln!("Please enter a number between 1 and {}.", max),
        }
    }
}

/// Yes/no confirmation; anything other than y/yes is a no
pub fn confirm(prompt: &str) -> ContasResult<bool> {
    let answer = prompt_line(prompt)?.to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
