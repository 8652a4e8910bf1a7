//! Generic retry loop for reading a validated value from the console.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

/// Sentinel that abandons the dialogue, accepted at every prompt.
const ABORT_SENTINEL: &str = "esc";

/// Outcome of a prompt: a parsed value, or the user backing out.
#[derive(Debug, PartialEq)]
pub enum Prompted<T> {
    Value(T),
    Aborted,
}

/// Prompts until `parse` accepts a line or the user aborts.
///
/// A rejected line prints the guidance message carried in the parse error
/// and asks again. Exhausted input counts as an abort.
pub fn ask<T>(
    input: &mut impl BufRead,
    output: &mut impl Write,
    prompt: &str,
    parse: impl Fn(&str) -> Result<T, String>,
) -> Result<Prompted<T>> {
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(Prompted::Aborted);
        }
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case(ABORT_SENTINEL) {
            return Ok(Prompted::Aborted);
        }

        match parse(trimmed) {
            Ok(value) => return Ok(Prompted::Value(value)),
            Err(message) => {
                debug!("rejected input {:?}", trimmed);
                writeln!(output, "{}", message)?;
            }
        }
    }
}

/// Parses a temperature value, accepting a comma as decimal separator.
pub fn parse_value(s: &str) -> Result<f64, String> {
    let normalised = if s.contains(',') {
        s.replace(',', ".")
    } else {
        s.to_string()
    };

    normalised.parse().map_err(|_| {
        "Ungültige Eingabe. Bitte geben Sie eine Zahl ein (z.B. 25 oder -10,5).".to_string()
    })
}

// -- Tests -------------------------------------------------------------------
