use crate::domain::ports::Console;
use crate::utils::error::{AppError, Result};
use std::str::FromStr;

pub const INVALID_NUMBER: &str = "Invalid input, please enter a number.";

/// What a menu loop does after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

pub fn prompt_line<C: Console + ?Sized>(console: &mut C, label: &str) -> Result<Option<String>> {
    console.write(label)?;
    console.read_line()
}

pub fn parse_number<T: FromStr>(input: &str) -> Result<T> {
    let trimmed = input.trim();
    trimmed.parse().map_err(|_| AppError::InvalidInput {
        input: trimmed.to_string(),
        reason: "not a number".to_string(),
    })
}

/// Like [`parse_number`] but also rejects `inf` and `NaN`.
pub fn parse_amount(input: &str) -> Result<f64> {
    let amount: f64 = parse_number(input)?;
    if !amount.is_finite() {
        return Err(AppError::InvalidInput {
            input: input.trim().to_string(),
            reason: "not a finite amount".to_string(),
        });
    }
    Ok(amount)
}

/// Prompts until the line parses. `None` once input runs out.
pub fn prompt_number<C, T>(console: &mut C, label: &str) -> Result<Option<T>>
where
    C: Console + ?Sized,
    T: FromStr,
{
    prompt_parsed(console, label, parse_number::<T>)
}

pub fn prompt_amount<C: Console + ?Sized>(console: &mut C, label: &str) -> Result<Option<f64>> {
    prompt_parsed(console, label, parse_amount)
}

/// Blank input means "no value"; anything else must parse.
pub fn prompt_optional_number<C, T>(console: &mut C, label: &str) -> Result<Option<Option<T>>>
where
    C: Console + ?Sized,
    T: FromStr,
{
    prompt_parsed(console, label, |line| {
        if line.trim().is_empty() {
            Ok(None)
        } else {
            parse_number(line).map(Some)
        }
    })
}

fn prompt_parsed<C, T, F>(console: &mut C, label: &str, parse: F) -> Result<Option<T>>
where
    C: Console + ?Sized,
    F: Fn(&str) -> Result<T>,
{
    loop {
        let Some(line) = prompt_line(console, label)? else {
            return Ok(None);
        };
        match parse(&line) {
            Ok(value) => return Ok(Some(value)),
            Err(e) if !e.is_recoverable() => return Err(e),
            Err(e) => {
                tracing::debug!(error = %e, "malformed numeric input");
                console.write_line(INVALID_NUMBER)?;
            }
        }
    }
}
