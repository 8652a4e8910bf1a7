//! Command line interface.

pub mod session;

use std::io::Write;

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(version, about, long_about = None)]
/// Takes no arguments; the converter is driven by the dialogue on stdin.
pub struct Cli {}

/// Writes the instruction banner shown once at startup.
pub fn write_banner(output: &mut impl Write) -> Result<()> {
    writeln!(output, "--- Temperatur-Umrechner ---")?;
    writeln!(
        output,
        "Dieses Programm rechnet einen Temperaturwert in die anderen beiden Einheiten um."
    )?;
    writeln!(output, "Gültige Einheiten sind:")?;
    writeln!(output, "  C für Celsius")?;
    writeln!(output, "  F für Fahrenheit")?;
    writeln!(output, "  K für Kelvin")?;
    writeln!(
        output,
        "Hinweis: Sie können jede Eingabe durch die Eingabe von 'esc' (und Bestätigung mit Enter) abbrechen.\n"
    )?;

    Ok(())
}
