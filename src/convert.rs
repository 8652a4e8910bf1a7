//! Pure conversion formulas between the three temperature scales.

/// T(°F) = T(°C) × 9/5 + 32
pub fn celsius_to_fahrenheit(celsius: f64) -> f64 {
    celsius * 9.0 / 5.0 + 32.0
}

/// T(K) = T(°C) + 273.15
pub fn celsius_to_kelvin(celsius: f64) -> f64 {
    celsius + 273.15
}

/// T(°C) = (T(°F) − 32) × 5/9
pub fn fahrenheit_to_celsius(fahrenheit: f64) -> f64 {
    (fahrenheit - 32.0) * 5.0 / 9.0
}

/// T(°C) = T(K) − 273.15
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - 273.15
}
