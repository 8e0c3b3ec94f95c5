use std::fmt;

use serde::{Deserialize, Serialize};

/// A temperature scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Celsius,
    Fahrenheit,
}

impl Unit {
    /// Lowercase name used in display strings, e.g. `"celsius"`.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which conversion is active. Mirrors the two states of the direction toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Toggle checked.
    CelsiusToFahrenheit,
    /// Toggle unchecked.
    #[default]
    FahrenheitToCelsius,
}

impl Direction {
    /// Map the toggle's checked flag to a direction.
    pub fn from_checked(checked: bool) -> Self {
        if checked {
            Direction::CelsiusToFahrenheit
        } else {
            Direction::FahrenheitToCelsius
        }
    }

    /// The toggle's checked flag for this direction.
    pub fn is_checked(self) -> bool {
        self == Direction::CelsiusToFahrenheit
    }

    /// The other direction.
    pub fn toggled(self) -> Self {
        Self::from_checked(!self.is_checked())
    }

    /// Unit the user types values in.
    pub fn input_unit(self) -> Unit {
        match self {
            Direction::CelsiusToFahrenheit => Unit::Celsius,
            Direction::FahrenheitToCelsius => Unit::Fahrenheit,
        }
    }

    /// Unit the converted value is shown in.
    pub fn output_unit(self) -> Unit {
        match self {
            Direction::CelsiusToFahrenheit => Unit::Fahrenheit,
            Direction::FahrenheitToCelsius => Unit::Celsius,
        }
    }

    /// Toggle label, e.g. `"Celsius -> Fahrenheit"`.
    pub fn label(self) -> &'static str {
        match self {
            Direction::CelsiusToFahrenheit => "Celsius -> Fahrenheit",
            Direction::FahrenheitToCelsius => "Fahrenheit -> Celsius",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
