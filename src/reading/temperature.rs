//! A single user-entered temperature and its plausibility check.

use std::io::Write;

use anyhow::Result;

use crate::convert::{
    celsius_to_fahrenheit, celsius_to_kelvin, fahrenheit_to_celsius, kelvin_to_celsius,
};

use super::Unit;

// Absolute zero per unit, the floor for plausible input
const ABSOLUTE_ZERO_C: f64 = -273.15;
const ABSOLUTE_ZERO_F: f64 = -459.67;
const ABSOLUTE_ZERO_K: f64 = 0.0;

#[derive(Debug, Clone, Copy)]
pub struct Reading {
    pub value: f64,
    pub unit: Unit,
}

impl Reading {
    pub fn new(value: f64, unit: Unit) -> Self {
        Reading { value, unit }
    }

    /// True if the value lies at or above absolute zero in its unit.
    ///
    /// The Fahrenheit and Kelvin floors themselves count as plausible;
    /// the Celsius floor does not.
    pub fn is_plausible(&self) -> bool {
        match self.unit {
            Unit::Celsius => self.value > ABSOLUTE_ZERO_C,
            Unit::Fahrenheit => self.value >= ABSOLUTE_ZERO_F,
            Unit::Kelvin => self.value >= ABSOLUTE_ZERO_K,
        }
    }

    /// Writes the result block: the reading expressed in the other two
    /// units, both numbers rounded to two decimals.
    pub fn report(&self, output: &mut impl Write) -> Result<()> {
        writeln!(output, "\n--- Ergebnisse ---")?;

        let (first, second) = self.derived();
        for derived in [first, second] {
            writeln!(
                output,
                "{:.2} {} sind {:.2} {}",
                self.value,
                self.unit.label(),
                derived.value,
                derived.unit.label()
            )?;
        }

        Ok(())
    }

    /// The same temperature expressed in the other two units, Celsius
    /// serving as the intermediate scale.
    fn derived(&self) -> (Reading, Reading) {
        match self.unit {
            Unit::Celsius => (
                Reading::new(celsius_to_fahrenheit(self.value), Unit::Fahrenheit),
                Reading::new(celsius_to_kelvin(self.value), Unit::Kelvin),
            ),
            Unit::Fahrenheit => {
                let celsius = fahrenheit_to_celsius(self.value);
                (
                    Reading::new(celsius, Unit::Celsius),
                    Reading::new(celsius_to_kelvin(celsius), Unit::Kelvin),
                )
            }
            Unit::Kelvin => {
                let celsius = kelvin_to_celsius(self.value);
                (
                    Reading::new(celsius, Unit::Celsius),
                    Reading::new(celsius_to_fahrenheit(celsius), Unit::Fahrenheit),
                )
            }
        }
    }
}

// -- Tests -------------------------------------------------------------------
