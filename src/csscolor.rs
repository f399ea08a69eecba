//! This file uses the numeric parsing in `cssnumeric.rs` to read the two CSS color notations
//! [`RGBColor::from_css`](crate::color::RGBColor::from_css) understands: functional `rgb(r, g, b)`
//! and hex codes. All spaces and tabs are removed before anything else, so `rgb( 1 , 2 , 3 )` and
//! `# f a b` both parse. Out-of-range components are kept as is rather than clamped: `rgb(300,0,0)`
//! has a red channel above 1. Unlike the W3 grammar, a hex code doesn't need its leading `#`.
//!
//! Percentages follow CSS and are read on a 0-100 scale, so `rgb(50%,0,0)` has a red channel of
//! exactly 0.5. Older HSLuv parsers divided every `rgb()` component by 255, percent sign or not;
//! this parser deliberately does not.

use regex::Regex;
use tracing::debug;

use crate::cssnumeric::parse_css_number;
pub use crate::cssnumeric::CSSParseError;

lazy_static! {
    static ref HEX_CODE: Regex =
        Regex::new(r"^[0-9a-fA-F]+$").expect("hex code pattern compiles");
}

/// Removes every space and tab, wherever it is.
fn strip_whitespace(css: &str) -> String {
    css.chars().filter(|&c| c != ' ' && c != '\t').collect()
}

/// Parses the inside of an `rgb()`: exactly three comma-separated numbers, each either on the 0-255
/// scale or a percentage.
fn parse_rgb_args(args: &str) -> Result<(f64, f64, f64), CSSParseError> {
    let nums = args
        .split(',')
        .map(|num| parse_css_number(num).map(|n| n.to_channel()))
        .collect::<Result<Vec<f64>, CSSParseError>>()?;
    match nums.as_slice() {
        [r, g, b] => Ok((*r, *g, *b)),
        _ => Err(CSSParseError::InvalidColorSyntax),
    }
}

/// Parses a hex code without its `#`: 3 digits, each scaled from 0-15, or 6 digits, each pair
/// scaled from 0-255. Case doesn't matter.
fn parse_hex(hex: &str) -> Result<(f64, f64, f64), CSSParseError> {
    if !HEX_CODE.is_match(hex) {
        return Err(CSSParseError::InvalidHexDigit);
    }
    // every character is an ASCII hex digit from here on, so byte slicing is safe
    let digit = |s: &str| {
        u8::from_str_radix(s, 16)
            .map(f64::from)
            .map_err(|_| CSSParseError::InvalidHexDigit)
    };
    match hex.len() {
        3 => Ok((
            digit(&hex[0..1])? / 15.0,
            digit(&hex[1..2])? / 15.0,
            digit(&hex[2..3])? / 15.0,
        )),
        6 => Ok((
            digit(&hex[0..2])? / 255.0,
            digit(&hex[2..4])? / 255.0,
            digit(&hex[4..6])? / 255.0,
        )),
        _ => Err(CSSParseError::InvalidColorSyntax),
    }
}

/// Parses any CSS color this crate accepts into its three sRGB channels. Rejects anything whose
/// components, once parsed, aren't finite.
pub(crate) fn parse_css_rgb(css: &str) -> Result<(f64, f64, f64), CSSParseError> {
    let stripped = strip_whitespace(css);
    let parsed = if let Some(rest) = stripped.strip_prefix("rgb(") {
        match rest.strip_suffix(')') {
            Some(args) => parse_rgb_args(args),
            None => Err(CSSParseError::InvalidColorSyntax),
        }
    } else if let Some(hex) = stripped.strip_prefix('#') {
        parse_hex(hex)
    } else {
        parse_hex(&stripped)
    };

    let (r, g, b) = parsed.map_err(|err| {
        debug!(css = css, error = %err, "rejected CSS color");
        err
    })?;
    if !(r.is_finite() && g.is_finite() && b.is_finite()) {
        debug!(css = css, "rejected CSS color with non-finite component");
        return Err(CSSParseError::NonFiniteComponent);
    }
    Ok((r, g, b))
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    #[test]
    fn test_rgb_str_parsing() {
        assert_eq!(parse_css_rgb("rgb(255,0,51)"), Ok((1., 0., 0.2)));
        // spaces and tabs anywhere are ignored
        assert_eq!(
            parse_css_rgb(" rgb( 255 ,\t0 , 51 ) "),
            Ok((1., 0., 0.2))
        );
        // percentages and floats can be mixed
        assert_eq!(parse_css_rgb("rgb(50%, 25.5, 0%)"), Ok((0.5, 0.1, 0.)));
        // nothing is clamped
        assert_eq!(parse_css_rgb("rgb(-51, 510, 150%)"), Ok((-0.2, 2., 1.5)));
    }

    #[test]
    fn test_rgb_str_errors() {
        assert_eq!(
            parse_css_rgb("rgb(1,2)"),
            Err(CSSParseError::InvalidColorSyntax)
        );
        assert_eq!(
            parse_css_rgb("rgb(1,2,3,4)"),
            Err(CSSParseError::InvalidColorSyntax)
        );
        assert_eq!(
            parse_css_rgb("rgb(1,2,3"),
            Err(CSSParseError::InvalidColorSyntax)
        );
        assert_eq!(
            parse_css_rgb("rgb(1,,3)"),
            Err(CSSParseError::InvalidNumericSyntax)
        );
        assert_eq!(
            parse_css_rgb("rgb(red,0,0)"),
            Err(CSSParseError::InvalidNumericCharacters)
        );
        // the function name is case-sensitive, and RGB( isn't hex either
        assert_eq!(
            parse_css_rgb("RGB(1,2,3)"),
            Err(CSSParseError::InvalidHexDigit)
        );
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(parse_css_rgb("#ff0033"), Ok((1., 0., 0.2)));
        assert_eq!(parse_css_rgb("FF0033"), Ok((1., 0., 0.2)));
        assert_eq!(parse_css_rgb("#f03"), Ok((1., 0., 0.2)));
        assert_eq!(parse_css_rgb("\t# F0 3"), Ok((1., 0., 0.2)));
        assert_eq!(parse_css_rgb("000"), Ok((0., 0., 0.)));
    }

    #[test]
    fn test_hex_errors() {
        assert_eq!(parse_css_rgb("#ff00"), Err(CSSParseError::InvalidColorSyntax));
        assert_eq!(parse_css_rgb("#ff00330"), Err(CSSParseError::InvalidColorSyntax));
        assert_eq!(parse_css_rgb("#gg0033"), Err(CSSParseError::InvalidHexDigit));
        assert_eq!(parse_css_rgb("##f03"), Err(CSSParseError::InvalidHexDigit));
        assert_eq!(parse_css_rgb(""), Err(CSSParseError::InvalidHexDigit));
        assert_eq!(parse_css_rgb("#"), Err(CSSParseError::InvalidHexDigit));
    }

    #[test]
    fn test_non_finite() {
        let huge = format!("rgb({}.0,0,0)", "9".repeat(400));
        assert_eq!(parse_css_rgb(&huge), Err(CSSParseError::NonFiniteComponent));
    }
}
