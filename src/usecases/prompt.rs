//! Interactive Prompt - Amount and Repeat Count
//!
//! Asks the operator for the ETH amount and how many rounds to run,
//! re-asking until each answer is valid. Generic over reader/writer so
//! tests can drive it with in-memory buffers.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

use crate::domain::{EthAmount, RunParameters};

const AMOUNT_QUESTION: &str = "Enter the amount of ETH to send per operation: ";
const REPEAT_QUESTION: &str = "Enter how many times to repeat deposit + swaps: ";

/// Ask for both run parameters.
///
/// # Errors
/// Fails on I/O errors or if input ends before a valid answer.
pub fn prompt_run_parameters<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<RunParameters> {
  let amount = ask(input, output, AMOUNT_QUESTION, |line| {
    EthAmount::parse(line).map_err(|e| e.to_string())
  })?;

  let repeat = ask(input, output, REPEAT_QUESTION, |line| match line.trim().parse::<u32>() {
    Ok(0) => Err("repeat count must be at least 1".to_string()),
    Ok(n) => Ok(n),
    Err(_) => Err(format!("{:?} is not a whole number", line.trim())),
  })?;

  Ok(RunParameters { amount, repeat })
}

fn ask<R, W, T, P>(input: &mut R, output: &mut W, question: &str, parse: P) -> Result<T>
where
  R: BufRead,
  W: Write,
  P: Fn(&str) -> Result<T, String>,
{
  loop {
    write!(output, "{question}").context("Failed to write prompt")?;
    output.flush().context("Failed to flush prompt")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read answer")?;
    if read == 0 {
      bail!("Input closed before a valid answer to {question:?}");
    }

    match parse(&line) {
      Ok(value) => return Ok(value),
      Err(reason) => writeln!(output, "Invalid input: {reason}").context("Failed to write prompt")?,
    }
  }
}

#[cfg(test)]
mod tests {
  use std::io::Cursor;

  use alloy::primitives::U256;

  use super::*;

  fn run(script: &str) -> (Result<RunParameters>, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let result = prompt_run_parameters(&mut input, &mut output);
    (result, String::from_utf8(output).unwrap())
  }

  #[test]
  fn test_valid_answers() {
    let (result, output) = run("0.0001\n3\n");
    let params = result.unwrap();
    assert_eq!(params.amount.to_wei(), U256::from(100_000_000_000_000u64));
    assert_eq!(params.repeat, 3);
    assert!(output.contains(AMOUNT_QUESTION));
    assert!(output.contains(REPEAT_QUESTION));
  }

  #[test]
  fn test_reasks_on_invalid_answers() {
    let (result, output) = run("abc\n0\n0.5\nmany\n0\n2\n");
    let params = result.unwrap();
    assert_eq!(params.repeat, 2);
    assert_eq!(output.matches("Invalid input").count(), 4);
  }

  #[test]
  fn test_eof_is_an_error() {
    let (result, _) = run("0.1\n");
    assert!(result.is_err());
  }
}
