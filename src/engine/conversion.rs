use serde::Serialize;

use super::direction::Direction;

/// Outcome of reading the raw input text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// A finite temperature in the direction's input unit.
    Value(f64),
    /// Nothing typed yet.
    Empty,
    /// Text that is not a number. Cleared display, not an error.
    Invalid,
}

/// What the shell renders for one (text, direction) pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DisplayState {
    /// Placeholder for the input surface. Only set when the input is empty.
    pub hint: Option<String>,
    /// Main output text. Empty when the input is invalid.
    pub text: String,
}

/// Parse raw input without trimming.
///
/// Accepts the usual float literal grammar (sign, digits, fraction, exponent).
/// Non-finite literals such as `inf` or `NaN` are [`ParsedInput::Invalid`].
pub fn parse_input(raw: &str) -> ParsedInput {
    if raw.is_empty() {
        return ParsedInput::Empty;
    }
    match raw.parse::<f64>() {
        Ok(x) if x.is_finite() => ParsedInput::Value(x),
        _ => ParsedInput::Invalid,
    }
}

/// Convert `value` from the direction's input unit to its output unit.
pub fn convert(value: f64, direction: Direction) -> f64 {
    match direction {
        Direction::CelsiusToFahrenheit => value * 9.0 / 5.0 + 32.0,
        Direction::FahrenheitToCelsius => (value - 32.0) * 5.0 / 9.0,
    }
}

/// Fixed-point rendering with `digits` fractional digits.
pub fn format_number(value: f64, digits: usize) -> String {
    format!("{value:.digits$}")
}

/// Render a parsed input for the given direction.
pub fn format(outcome: ParsedInput, direction: Direction) -> DisplayState {
    match outcome {
        ParsedInput::Empty => DisplayState {
            hint: Some(format!("0 degrees {}", direction.input_unit())),
            ..format(ParsedInput::Value(0.0), direction)
        },
        ParsedInput::Invalid => DisplayState::default(),
        ParsedInput::Value(x) => {
            let converted = convert(x, direction);
            // the intermediate product overflows for |x| above ~2e307
            if !converted.is_finite() {
                return DisplayState::default();
            }
            DisplayState {
                hint: None,
                text: format!(
                    "{} degrees {}",
                    format_number(converted, 1),
                    direction.output_unit()
                ),
            }
        }
    }
}

/// Parse then format. This is the whole per-event computation.
pub fn display(raw: &str, direction: Direction) -> DisplayState {
    format(parse_input(raw), direction)
}

#[cfg(test)]
mod tests {
    use super::*;

    const C2F: Direction = Direction::CelsiusToFahrenheit;
    const F2C: Direction = Direction::FahrenheitToCelsius;

    #[test]
    fn parse_empty() {
        assert_eq!(parse_input(""), ParsedInput::Empty);
    }

    #[test]
    fn parse_invalid() {
        assert_eq!(parse_input("abc"), ParsedInput::Invalid);
        assert_eq!(parse_input("-"), ParsedInput::Invalid);
        assert_eq!(parse_input("1.2.3"), ParsedInput::Invalid);
        assert_eq!(parse_input("12abc"), ParsedInput::Invalid);
    }

    #[test]
    fn parse_does_not_trim() {
        assert_eq!(parse_input(" "), ParsedInput::Invalid);
        assert_eq!(parse_input(" 5"), ParsedInput::Invalid);
        assert_eq!(parse_input("5 "), ParsedInput::Invalid);
    }

    #[test]
    fn parse_numbers() {
        assert_eq!(parse_input("98.6"), ParsedInput::Value(98.6));
        assert_eq!(parse_input("-40"), ParsedInput::Value(-40.0));
        assert_eq!(parse_input("+7"), ParsedInput::Value(7.0));
        assert_eq!(parse_input(".5"), ParsedInput::Value(0.5));
        assert_eq!(parse_input("1e2"), ParsedInput::Value(100.0));
        assert_eq!(parse_input("2.5E-1"), ParsedInput::Value(0.25));
    }

    #[test]
    fn parse_rejects_non_finite() {
        assert_eq!(parse_input("inf"), ParsedInput::Invalid);
        assert_eq!(parse_input("-infinity"), ParsedInput::Invalid);
        assert_eq!(parse_input("NaN"), ParsedInput::Invalid);
        assert_eq!(parse_input("1e400"), ParsedInput::Invalid);
    }

    #[test]
    fn fixed_points() {
        assert_eq!(convert(0.0, C2F), 32.0);
        assert_eq!(convert(100.0, C2F), 212.0);
        assert_eq!(convert(32.0, F2C), 0.0);
        assert_eq!(convert(212.0, F2C), 100.0);
        assert_eq!(convert(-40.0, C2F), -40.0);
        assert_eq!(convert(-40.0, F2C), -40.0);
    }

    #[test]
    fn ratios_are_not_truncated() {
        // integer division would give 1 and 0 here
        assert_eq!(convert(10.0, C2F), 50.0);
        assert!((convert(41.0, F2C) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn format_number_one_digit() {
        assert_eq!(format_number(0.0, 1), "0.0");
        assert_eq!(format_number(98.60000000000001, 1), "98.6");
        assert_eq!(format_number(-17.77777777777778, 1), "-17.8");
        assert_eq!(format_number(1234567.0, 1), "1234567.0");
    }

    #[test]
    fn empty_gives_hint_and_zero_conversion() {
        let state = format(ParsedInput::Empty, C2F);
        assert_eq!(state.hint.as_deref(), Some("0 degrees celsius"));
        assert_eq!(state.text, "32.0 degrees fahrenheit");

        let state = format(ParsedInput::Empty, F2C);
        assert_eq!(state.hint.as_deref(), Some("0 degrees fahrenheit"));
        assert_eq!(state.text, "-17.8 degrees celsius");
    }

    #[test]
    fn invalid_clears() {
        assert_eq!(format(ParsedInput::Invalid, F2C), DisplayState::default());
        assert_eq!(format(ParsedInput::Invalid, C2F).text, "");
    }

    #[test]
    fn value_has_no_hint() {
        let state = format(ParsedInput::Value(32.0), F2C);
        assert_eq!(state.hint, None);
        assert_eq!(state.text, "0.0 degrees celsius");
    }

    #[test]
    fn overflowing_conversion_clears() {
        assert_eq!(display("1e308", C2F), DisplayState::default());
        // value * 9 passes f64::MAX just below 2e307
        assert_eq!(display("2.5e307", C2F), DisplayState::default());
        assert_eq!(display("-2.5e307", C2F), DisplayState::default());
        // (value - 32) * 5 only passes it above ~3.6e307
        assert!(display("2.5e307", F2C).text.ends_with(".0 degrees celsius"));
        assert_eq!(display("4e307", F2C), DisplayState::default());
    }

    #[test]
    fn display_composes_parse_and_format() {
        assert_eq!(display("37", C2F).text, "98.6 degrees fahrenheit");
        assert_eq!(display("abc", F2C).text, "");
    }

    #[test]
    fn serializes_as_hint_and_text() {
        let json = serde_json::to_value(display("", C2F)).unwrap();
        assert_eq!(json["hint"], "0 degrees celsius");
        assert_eq!(json["text"], "32.0 degrees fahrenheit");

        let json = serde_json::to_value(display("abc", C2F)).unwrap();
        assert!(json["hint"].is_null());
        assert_eq!(json["text"], "");
    }
}
