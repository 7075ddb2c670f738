use crate::{kind::Kind, value::Scalar};
use num_complex::Complex;
use std::{fmt, str::FromStr};

/// Why a raw value could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The value is not a literal of the requested kind
    Syntax(String),
    /// The value is a literal but does not fit the requested width
    Range(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax(msg) => write!(f, "invalid syntax: {}", msg),
            ParseError::Range(msg) => write!(f, "value out of range: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

pub type Parser = fn(&str) -> Result<Scalar, ParseError>;

/// Look up the parser for a kind, `None` for shapes that cannot be parsed
pub fn parser_for(kind: Kind) -> Option<Parser> {
    let parser: Parser = match kind {
        Kind::Bool => |s: &str| parse_bool(s).map(Scalar::Bool),
        Kind::String => |s: &str| Ok(Scalar::String(s.to_string())),
        Kind::I8 => |s: &str| parse_int(s).map(Scalar::I8),
        Kind::I16 => |s: &str| parse_int(s).map(Scalar::I16),
        Kind::I32 => |s: &str| parse_int(s).map(Scalar::I32),
        Kind::I64 => |s: &str| parse_int(s).map(Scalar::I64),
        Kind::Isize => |s: &str| parse_int(s).map(Scalar::Isize),
        Kind::U8 => |s: &str| parse_uint(s).map(Scalar::U8),
        Kind::U16 => |s: &str| parse_uint(s).map(Scalar::U16),
        Kind::U32 => |s: &str| parse_uint(s).map(Scalar::U32),
        Kind::U64 => |s: &str| parse_uint(s).map(Scalar::U64),
        Kind::Usize => |s: &str| parse_uint(s).map(Scalar::Usize),
        Kind::F32 => |s: &str| parse_float(s).map(Scalar::F32),
        Kind::F64 => |s: &str| parse_float(s).map(Scalar::F64),
        Kind::Complex32 => |s: &str| parse_complex(s).map(Scalar::Complex32),
        Kind::Complex64 => |s: &str| parse_complex(s).map(Scalar::Complex64),
        Kind::Sequence | Kind::Mapping | Kind::Record | Kind::Optional | Kind::Reference => {
            return None;
        }
    };
    Some(parser)
}

/// Accepts `1`/`0`, `t`/`f` and `true`/`false` in lower, upper or title case
pub fn parse_bool(s: &str) -> Result<bool, ParseError> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseError::Syntax(format!("'{}' is not a boolean", s))),
    }
}

/// Base-10 integer with an optional sign, checked against the width of `T`
pub fn parse_int<T>(s: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    use std::num::IntErrorKind;

    s.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ParseError::Range(format!("'{}': {}", s, e))
        }
        _ => ParseError::Syntax(format!("'{}': {}", s, e)),
    })
}

/// Base-10 unsigned integer, no sign allowed
pub fn parse_uint<T>(s: &str) -> Result<T, ParseError>
where
    T: FromStr<Err = std::num::ParseIntError>,
{
    if s.starts_with('+') {
        return Err(ParseError::Syntax(format!(
            "'{}': sign not allowed for unsigned integers",
            s
        )));
    }
    parse_int(s)
}

/// Float types the parsers work with
pub trait Float: FromStr + Copy {
    fn is_infinite(self) -> bool;
}

impl Float for f32 {
    fn is_infinite(self) -> bool {
        f32::is_infinite(self)
    }
}

impl Float for f64 {
    fn is_infinite(self) -> bool {
        f64::is_infinite(self)
    }
}

/// Decimal or exponent literal; finite literals that overflow `T` are range errors
pub fn parse_float<T: Float>(s: &str) -> Result<T, ParseError> {
    let value: T = s
        .parse()
        .map_err(|_| ParseError::Syntax(format!("'{}' is not a float", s)))?;

    if value.is_infinite() && !is_infinity_literal(s) {
        return Err(ParseError::Range(format!(
            "'{}' overflows {}",
            s,
            std::any::type_name::<T>()
        )));
    }

    Ok(value)
}

fn is_infinity_literal(s: &str) -> bool {
    let unsigned = s.strip_prefix(['+', '-']).unwrap_or(s);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// Complex literal: `R`, `Ii`, `R+Ii` or `R-Ii`, optionally in parentheses
pub fn parse_complex<T: Float + Default>(s: &str) -> Result<Complex<T>, ParseError> {
    let syntax = || ParseError::Syntax(format!("'{}' is not a complex number", s));

    let mut rest = s;
    if rest.len() >= 2 && rest.starts_with('(') && rest.ends_with(')') {
        rest = &rest[1..rest.len() - 1];
    }

    let (re, n) = float_prefix::<T>(rest, s)?;
    rest = &rest[n..];

    if rest.is_empty() {
        return Ok(Complex::new(re, T::default()));
    }

    match rest.as_bytes()[0] {
        // "++" stays a syntax error
        b'+' if rest.len() > 1 && rest.as_bytes()[1] != b'+' => rest = &rest[1..],
        b'+' | b'-' => {}
        b'i' if rest.len() == 1 => return Ok(Complex::new(T::default(), re)),
        _ => return Err(syntax()),
    }

    let (im, n) = float_prefix::<T>(rest, s)?;
    if &rest[n..] != "i" {
        return Err(syntax());
    }

    Ok(Complex::new(re, im))
}

/// Parse the longest float literal at the start of `s`, returning it and its length
fn float_prefix<T: Float>(s: &str, literal: &str) -> Result<(T, usize), ParseError> {
    let len = float_prefix_len(s);
    if len == 0 {
        return Err(ParseError::Syntax(format!(
            "'{}' is not a complex number",
            literal
        )));
    }

    let value = parse_float::<T>(&s[..len]).map_err(|e| match e {
        ParseError::Range(_) => ParseError::Range(format!(
            "'{}' overflows {}",
            literal,
            std::any::type_name::<T>()
        )),
        ParseError::Syntax(_) => {
            ParseError::Syntax(format!("'{}' is not a complex number", literal))
        }
    })?;

    Ok((value, len))
}

fn float_prefix_len(s: &str) -> usize {
    let bytes = s.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    for word in ["infinity", "inf", "nan"] {
        let end = i + word.len();
        if end <= bytes.len() && bytes[i..end].eq_ignore_ascii_case(word.as_bytes()) {
            return end;
        }
    }

    let digits_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - digits_start;

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        digits += i - frac_start;
    }

    if digits == 0 {
        return 0;
    }

    if i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::{Complex32, Complex64};

    #[test]
    fn test_bool_tokens() {
        for token in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(token), Ok(true), "{token}");
        }
        for token in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(token), Ok(false), "{token}");
        }
    }

    #[test]
    fn test_bool_rejects_other_spellings() {
        assert!(parse_bool("yes").is_err());
        assert!(parse_bool("tRUE").is_err());
        assert!(parse_bool(" true").is_err());
    }

    #[test]
    fn test_int_widths() {
        assert_eq!(parse_int::<i8>("-128"), Ok(-128));
        assert_eq!(parse_int::<i8>("+127"), Ok(127));
        assert_eq!(parse_int::<u64>("18446744073709551615"), Ok(u64::MAX));
        assert_eq!(parse_int::<isize>("-1"), Ok(-1));
    }

    #[test]
    fn test_int_overflow_is_range_error() {
        assert!(matches!(parse_int::<i8>("999"), Err(ParseError::Range(_))));
        assert!(matches!(parse_int::<i8>("-129"), Err(ParseError::Range(_))));
        assert!(matches!(parse_int::<u16>("65536"), Err(ParseError::Range(_))));
    }

    #[test]
    fn test_int_syntax_errors() {
        assert!(matches!(parse_int::<u8>("-1"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_int::<i32>("12abc"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_int::<i32>("1.5"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_int::<i32>("0x10"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_uint_rejects_sign() {
        assert!(matches!(parse_uint::<u8>("+5"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_uint::<usize>("+0"), Err(ParseError::Syntax(_))));
        assert!(matches!(parse_uint::<u32>("-5"), Err(ParseError::Syntax(_))));
        assert_eq!(parse_uint::<u64>("5"), Ok(5));
        assert!(matches!(parse_uint::<u16>("70000"), Err(ParseError::Range(_))));

        for kind in [Kind::U8, Kind::U16, Kind::U32, Kind::U64, Kind::Usize] {
            assert!(parser_for(kind).unwrap()("+5").is_err(), "{kind}");
        }
        assert_eq!(parser_for(Kind::I8).unwrap()("+5"), Ok(Scalar::I8(5)));
    }

    #[test]
    fn test_float() {
        assert_eq!(parse_float::<f32>("32.32"), Ok(32.32f32));
        assert_eq!(parse_float::<f64>("64.64"), Ok(64.64));
        assert_eq!(parse_float::<f64>("1e3"), Ok(1000.0));
        assert_eq!(parse_float::<f64>("-inf"), Ok(f64::NEG_INFINITY));
        assert!(parse_float::<f64>("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_float_overflow_for_width() {
        assert!(matches!(parse_float::<f32>("1e40"), Err(ParseError::Range(_))));
        assert_eq!(parse_float::<f64>("1e40"), Ok(1e40));
        assert!(matches!(parse_float::<f64>("1e400"), Err(ParseError::Range(_))));
    }

    #[test]
    fn test_float_syntax_error() {
        assert!(matches!(parse_float::<f64>("not-a-number"), Err(ParseError::Syntax(_))));
    }

    #[test]
    fn test_complex_forms() {
        assert_eq!(parse_complex::<f64>("1+2i"), Ok(Complex64::new(1.0, 2.0)));
        assert_eq!(parse_complex::<f64>("(1-2i)"), Ok(Complex64::new(1.0, -2.0)));
        assert_eq!(parse_complex::<f64>("3i"), Ok(Complex64::new(0.0, 3.0)));
        assert_eq!(parse_complex::<f64>("-3i"), Ok(Complex64::new(0.0, -3.0)));
        assert_eq!(parse_complex::<f64>("128.128"), Ok(Complex64::new(128.128, 0.0)));
        assert_eq!(parse_complex::<f32>("64.64"), Ok(Complex32::new(64.64, 0.0)));
        assert_eq!(parse_complex::<f64>("1e2+1.5e-1i"), Ok(Complex64::new(100.0, 0.15)));
    }

    #[test]
    fn test_complex_rejects_malformed() {
        for input in ["", "i", "1+", "1++2i", "1+2", "1+2j", "(1+2i", "abc", "1+2ii"] {
            assert!(
                matches!(parse_complex::<f64>(input), Err(ParseError::Syntax(_))),
                "{input}"
            );
        }
    }

    #[test]
    fn test_complex_component_overflow() {
        assert!(matches!(parse_complex::<f32>("1e40+1i"), Err(ParseError::Range(_))));
        assert!(matches!(parse_complex::<f32>("1+1e40i"), Err(ParseError::Range(_))));
        assert!(parse_complex::<f64>("1e40+1i").is_ok());
    }

    #[test]
    fn test_dispatch_table_covers_supported_kinds() {
        for kind in Kind::SUPPORTED {
            assert!(parser_for(kind).is_some(), "{kind} has no parser");
        }
    }

    #[test]
    fn test_dispatch_table_rejects_compound_kinds() {
        for kind in [Kind::Sequence, Kind::Mapping, Kind::Record, Kind::Optional, Kind::Reference] {
            assert!(parser_for(kind).is_none(), "{kind} should have no parser");
        }
    }

    #[test]
    fn test_dispatched_parser_tags_scalar() {
        for kind in Kind::SUPPORTED {
            let parser = parser_for(kind).unwrap();
            let raw = match kind {
                Kind::Bool => "true",
                Kind::String => "text",
                _ => "1",
            };
            assert_eq!(parser(raw).unwrap().kind(), kind);
        }
    }
}
