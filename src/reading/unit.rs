//! Temperature unit entered at the prompt.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Unit {
    /// Parses a unit token as typed by the user.
    ///
    /// The error carries the guidance message shown before re-prompting.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_uppercase().as_str() {
            "C" => Ok(Unit::Celsius),
            "F" => Ok(Unit::Fahrenheit),
            "K" => Ok(Unit::Kelvin),
            _ => Err("Ungültige Einheit. Bitte geben Sie 'C', 'F' oder 'K' ein.".to_string()),
        }
    }

    /// Label used in the result lines.
    pub fn label(&self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
        }
    }
}
