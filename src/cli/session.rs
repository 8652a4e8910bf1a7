//! The interactive conversion dialogue.

use std::io::{BufRead, Write};

use anyhow::Result;
use log::debug;

use crate::{
    cli::write_banner,
    prompt::{ask, parse_value, Prompted},
    reading::{Reading, Unit},
};

const UNIT_PROMPT: &str = "Geben Sie die Ausgangseinheit ein (C, F, K): ";
const VALUE_PROMPT: &str = "Geben Sie den Temperaturwert ein: ";
const CONTINUE_PROMPT: &str = "\nMöchten Sie eine weitere Umrechnung durchführen? (j/n): ";

/// Runs the dialogue until the user aborts or declines another round.
pub fn run(input: &mut impl BufRead, output: &mut impl Write) -> Result<()> {
    write_banner(output)?;

    loop {
        let unit = match ask(input, output, UNIT_PROMPT, Unit::parse)? {
            Prompted::Value(unit) => unit,
            Prompted::Aborted => break,
        };

        let value = match ask(input, output, VALUE_PROMPT, parse_value)? {
            Prompted::Value(value) => value,
            Prompted::Aborted => break,
        };

        let reading = Reading::new(value, unit);
        if !reading.is_plausible() {
            debug!("discarding reading below absolute zero: {:?}", reading);
            writeln!(
                output,
                "Fehler: Der Wert liegt unter dem absoluten Nullpunkt. Bitte erneut versuchen.\n"
            )?;
            continue;
        }

        debug!("converting {:?}", reading);
        reading.report(output)?;

        if !wants_another(input, output)? {
            break;
        }
        writeln!(output)?;
    }

    writeln!(output, "Programm wird beendet. Auf Wiedersehen!")?;

    Ok(())
}

/// Asks for another round; only a `j` answer continues.
fn wants_another(input: &mut impl BufRead, output: &mut impl Write) -> Result<bool> {
    write!(output, "{}", CONTINUE_PROMPT)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }

    Ok(line.trim().eq_ignore_ascii_case("j"))
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {

    use super::*;

    fn run_dialogue(script: &str) -> String {
        let mut output = Vec::new();
        run(&mut script.as_bytes(), &mut output).unwrap();

        String::from_utf8(output).unwrap()
    }

    #[test]
    fn should_convert_zero_celsius_and_stop() {
        let transcript = run_dialogue("C\n0\nn\n");

        assert!(transcript.contains("0.00 °C sind 32.00 °F"));
        assert!(transcript.contains("0.00 °C sind 273.15 K"));
        assert!(transcript.ends_with("Programm wird beendet. Auf Wiedersehen!\n"));
    }

    #[test]
    fn should_discard_negative_kelvin_and_reprompt() {
        let transcript = run_dialogue("K\n-10\nesc\n");

        assert!(transcript.contains("Fehler: Der Wert liegt unter dem absoluten Nullpunkt."));
        assert!(!transcript.contains("--- Ergebnisse ---"));
        assert_eq!(transcript.matches(UNIT_PROMPT).count(), 2);
    }

    #[test]
    fn should_end_on_abort_at_unit_prompt() {
        for sentinel in ["esc", "ESC", "Esc"] {
            let transcript = run_dialogue(&format!("{}\n", sentinel));

            assert_eq!(transcript.matches(UNIT_PROMPT).count(), 1);
            assert!(!transcript.contains(VALUE_PROMPT));
            assert!(transcript.contains("Programm wird beendet."));
        }
    }

    #[test]
    fn should_end_on_abort_at_value_prompt() {
        let transcript = run_dialogue("F\nesc\n");

        assert!(transcript.contains(VALUE_PROMPT));
        assert!(!transcript.contains("--- Ergebnisse ---"));
        assert!(transcript.contains("Programm wird beendet."));
    }

    #[test]
    fn should_loop_while_user_answers_j() {
        let transcript = run_dialogue("C\n100\nj\nF\n212\nn\n");

        assert!(transcript.contains("100.00 °C sind 212.00 °F"));
        assert!(transcript.contains("212.00 °F sind 100.00 °C"));
        assert_eq!(transcript.matches(UNIT_PROMPT).count(), 2);
    }

    #[test]
    fn should_accept_uppercase_j_to_continue() {
        let transcript = run_dialogue("C\n1\nJ\nesc\n");

        assert_eq!(transcript.matches(UNIT_PROMPT).count(), 2);
    }

    #[test]
    fn should_end_on_any_other_continuation_answer() {
        let transcript = run_dialogue("C\n1\nja gerne\n");

        assert_eq!(transcript.matches(UNIT_PROMPT).count(), 1);
        assert!(transcript.ends_with("Programm wird beendet. Auf Wiedersehen!\n"));
    }

    #[test]
    fn should_reprompt_on_invalid_unit_then_convert() {
        let transcript = run_dialogue("X\nC\n25,5\nn\n");

        assert!(transcript.contains("Ungültige Einheit. Bitte geben Sie 'C', 'F' oder 'K' ein."));
        assert!(transcript.contains("25.50 °C sind 77.90 °F"));
    }

    #[test]
    fn should_end_when_input_runs_out() {
        let transcript = run_dialogue("C\n");

        assert!(transcript.contains(VALUE_PROMPT));
        assert!(transcript.ends_with("Programm wird beendet. Auf Wiedersehen!\n"));
    }
}
