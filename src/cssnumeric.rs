//! This file separates out the fiddly part of CSS color parsing: turning a single numeric token,
//! such as `255`, `0.5`, `-.25` or `50%`, into a number, and the error type that all CSS parsing
//! shares. Whitespace has already been stripped by the time a token gets here. Exponents (`1e3`)
//! are not CSS syntax and are rejected. (Source for CSS syntax:
//! [https://www.w3.org/TR/css-color-3/](https://www.w3.org/TR/css-color-3/).)

use std::error::Error;
use std::fmt;

/// A CSS numeric value: an integer like 255, a float like 0.8, or a percentage like 104% or 12.5%.
#[derive(Debug, PartialEq, Copy, Clone)]
pub(crate) enum CSSNumeric {
    /// A string of digits, with an optional leading '+' or '-'.
    Integer(i64),
    /// Digits with exactly one '.', which may lead: `.5` is fine.
    Float(f64),
    /// An integer or float followed by '%'. Stored as written, so `50%` is `Percentage(50.)`.
    Percentage(f64),
}

impl CSSNumeric {
    /// The value of this number as an sRGB channel from 0 to 1: plain numbers are on the 0-255 byte
    /// scale, percentages on the 0-100 scale. Nothing is clamped.
    pub(crate) fn to_channel(self) -> f64 {
        match self {
            CSSNumeric::Integer(val) => val as f64 / 255.0,
            CSSNumeric::Float(val) => val / 255.0,
            CSSNumeric::Percentage(val) => val / 100.0,
        }
    }
}

/// An error in parsing a CSS color string.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
#[allow(clippy::enum_variant_names)]
pub enum CSSParseError {
    /// Non-numeric characters were used where a number was expected.
    InvalidNumericCharacters,
    /// Invalid numeric syntax, such as multiple periods, a stray sign, or nothing at all.
    InvalidNumericSyntax,
    /// The string isn't any recognized color form: a bad `rgb()` wrapper, the wrong number of
    /// components, or a hex code of the wrong length.
    InvalidColorSyntax,
    /// A hex code contained something other than 0-9, a-f or A-F.
    InvalidHexDigit,
    /// A component parsed, but isn't a finite number.
    NonFiniteComponent,
}

impl fmt::Display for CSSParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let reason = match *self {
            CSSParseError::InvalidNumericCharacters => "unexpected non-numeric characters",
            CSSParseError::InvalidNumericSyntax => "invalid numeric syntax",
            CSSParseError::InvalidColorSyntax => "invalid color syntax",
            CSSParseError::InvalidHexDigit => "invalid hex digit",
            CSSParseError::NonFiniteComponent => "color component is not finite",
        };
        write!(f, "CSS parsing error: {}", reason)
    }
}

impl Error for CSSParseError {}

/// Parses a string of digits with no sign, such as "023" or "142".
fn parse_css_integer(num: &str) -> Result<i64, CSSParseError> {
    num.parse().map_err(|_| CSSParseError::InvalidNumericSyntax)
}

/// Parses a CSS float without sign, such as "123.42" or ".34". A lone "." is not a number.
fn parse_css_float(num: &str) -> Result<f64, CSSParseError> {
    if num == "." {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    num.parse().map_err(|_| CSSParseError::InvalidNumericSyntax)
}

/// Parses a CSS float, integer or percentage, with an optional leading sign.
pub(crate) fn parse_css_number(num: &str) -> Result<CSSNumeric, CSSParseError> {
    if !num.chars().all(|c| "0123456789-+.%".contains(c)) {
        return Err(CSSParseError::InvalidNumericCharacters);
    }
    // strip at most one leading sign
    let (is_positive, body) = match num.chars().next() {
        Some('-') => (false, &num[1..]),
        Some('+') => (true, &num[1..]),
        _ => (true, num),
    };
    if body.is_empty() || body.contains(|c: char| c == '-' || c == '+') {
        return Err(CSSParseError::InvalidNumericSyntax);
    }
    // a percent sign may only come once, at the very end
    let (is_percentage, digits) = match body.find('%') {
        None => (false, body),
        Some(idx) if idx == body.len() - 1 => (true, &body[..idx]),
        Some(_) => return Err(CSSParseError::InvalidNumericSyntax),
    };
    if digits.is_empty() {
        return Err(CSSParseError::InvalidNumericSyntax);
    }

    let sign = if is_positive { 1.0 } else { -1.0 };
    match digits.matches('.').count() {
        0 => {
            let uint = parse_css_integer(digits)?;
            let int = if is_positive { uint } else { -uint };
            if is_percentage {
                Ok(CSSNumeric::Percentage(int as f64))
            } else {
                Ok(CSSNumeric::Integer(int))
            }
        }
        1 => {
            let float = sign * parse_css_float(digits)?;
            if is_percentage {
                Ok(CSSNumeric::Percentage(float))
            } else {
                Ok(CSSNumeric::Float(float))
            }
        }
        _ => Err(CSSParseError::InvalidNumericSyntax),
    }
}
