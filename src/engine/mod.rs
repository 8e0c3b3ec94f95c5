//! Fahrenheit/Celsius conversion core.
//!
//! Everything here is a pure function of `(raw text, direction)`. The shell
//! calls [`display`] on every text or direction change and renders the result.

pub mod conversion;
pub mod direction;

pub use conversion::{
    DisplayState, ParsedInput, convert, display, format, format_number, parse_input,
};
pub use direction::{Direction, Unit};
