//! Conversion of raw environment strings into typed field values

use crate::error::{BindError, ConversionError};
use crate::schema::{FieldKind, Value};
use std::str::FromStr;

/// Convert the effective raw value of `key` into a [`Value`] of `kind`.
///
/// `String` fields take the raw value unchanged. Everything else is parsed
/// at the exact width and precision of the declared kind.
pub fn convert(key: &str, kind: FieldKind, raw: String) -> Result<Value, BindError> {
    let conversion = |source: ConversionError| BindError::Conversion {
        key: key.to_string(),
        kind,
        source,
    };

    let value = match kind {
        FieldKind::Bool => Value::Bool(parse_bool(&raw).map_err(conversion)?),
        FieldKind::I8 => Value::I8(parse(&raw).map_err(conversion)?),
        FieldKind::I16 => Value::I16(parse(&raw).map_err(conversion)?),
        FieldKind::I32 => Value::I32(parse(&raw).map_err(conversion)?),
        FieldKind::I64 => Value::I64(parse(&raw).map_err(conversion)?),
        FieldKind::Isize => Value::Isize(parse(&raw).map_err(conversion)?),
        FieldKind::U8 => Value::U8(parse_unsigned(&raw).map_err(conversion)?),
        FieldKind::U16 => Value::U16(parse_unsigned(&raw).map_err(conversion)?),
        FieldKind::U32 => Value::U32(parse_unsigned(&raw).map_err(conversion)?),
        FieldKind::U64 => Value::U64(parse_unsigned(&raw).map_err(conversion)?),
        FieldKind::Usize => Value::Usize(parse_unsigned(&raw).map_err(conversion)?),
        FieldKind::F32 => Value::F32(parse_float(&raw).map_err(conversion)?),
        FieldKind::F64 => Value::F64(parse_float(&raw).map_err(conversion)?),
        FieldKind::String => Value::String(raw),
        FieldKind::Unsupported(_) => {
            return Err(BindError::UnsupportedType {
                key: key.to_string(),
                kind,
            })
        }
    };

    Ok(value)
}

fn parse<T>(raw: &str) -> Result<T, ConversionError>
where
    T: FromStr,
    ConversionError: From<T::Err>,
{
    Ok(raw.parse::<T>()?)
}

/// Unsigned kinds take digits only, without any sign prefix.
fn parse_unsigned<T>(raw: &str) -> Result<T, ConversionError>
where
    T: FromStr,
    ConversionError: From<T::Err>,
{
    if raw.starts_with('+') {
        return Err(ConversionError::Sign);
    }
    parse(raw)
}

/// Finite input that rounds to infinity at the declared precision is out of
/// range. Only an explicit `inf`/`infinity` literal may bind as infinite.
fn parse_float<T>(raw: &str) -> Result<T, ConversionError>
where
    T: FromStr + Into<f64> + Copy,
    ConversionError: From<T::Err>,
{
    let value: T = parse(raw)?;
    if value.into().is_infinite() && !is_infinity_literal(raw) {
        return Err(ConversionError::FloatRange);
    }
    Ok(value)
}

fn is_infinity_literal(raw: &str) -> bool {
    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    digits.eq_ignore_ascii_case("inf") || digits.eq_ignore_ascii_case("infinity")
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and their false
/// counterparts `0`, `f`, `F`, `FALSE`, `false`, `False`.
pub fn parse_bool(raw: &str) -> Result<bool, ConversionError> {
    match raw {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ConversionError::Bool),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok(kind: FieldKind, raw: &str) -> Value {
        convert("KEY", kind, raw.to_string()).unwrap()
    }

    fn conversion_error(kind: FieldKind, raw: &str) -> ConversionError {
        match convert("KEY", kind, raw.to_string()) {
            Err(BindError::Conversion { key, source, .. }) => {
                assert_eq!(key, "KEY");
                source
            }
            other => panic!("Expected Conversion error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_bool_literals() {
        for raw in ["1", "t", "T", "TRUE", "true", "True"] {
            assert_eq!(parse_bool(raw), Ok(true), "{raw}");
        }
        for raw in ["0", "f", "F", "FALSE", "false", "False"] {
            assert_eq!(parse_bool(raw), Ok(false), "{raw}");
        }
    }

    #[test]
    fn test_parse_bool_rejects_other_spellings() {
        for raw in ["", "yes", "no", "tRUE", " true", "2"] {
            assert_eq!(parse_bool(raw), Err(ConversionError::Bool), "{raw:?}");
        }
    }

    #[test]
    fn test_signed_integers_at_width() {
        assert_eq!(ok(FieldKind::I8, "-1"), Value::I8(-1));
        assert_eq!(ok(FieldKind::I8, "-128"), Value::I8(-128));
        assert_eq!(ok(FieldKind::I16, "-1"), Value::I16(-1));
        assert_eq!(ok(FieldKind::I32, "2147483647"), Value::I32(i32::MAX));
        assert_eq!(ok(FieldKind::I64, "-1"), Value::I64(-1));
        assert_eq!(ok(FieldKind::Isize, "-1"), Value::Isize(-1));
    }

    #[test]
    fn test_signed_overflow_is_conversion_error() {
        assert!(matches!(
            conversion_error(FieldKind::I8, "128"),
            ConversionError::Int(_)
        ));
        assert!(matches!(
            conversion_error(FieldKind::I16, "-32769"),
            ConversionError::Int(_)
        ));
    }

    #[test]
    fn test_unsigned_integers_at_width() {
        assert_eq!(ok(FieldKind::U8, "255"), Value::U8(255));
        assert_eq!(ok(FieldKind::U16, "1"), Value::U16(1));
        assert_eq!(ok(FieldKind::U32, "1"), Value::U32(1));
        assert_eq!(ok(FieldKind::U64, "18446744073709551615"), Value::U64(u64::MAX));
        assert_eq!(ok(FieldKind::Usize, "1"), Value::Usize(1));
    }

    #[test]
    fn test_unsigned_rejects_minus_and_overflow() {
        assert!(matches!(
            conversion_error(FieldKind::U8, "-1"),
            ConversionError::Int(_)
        ));
        assert!(matches!(
            conversion_error(FieldKind::U8, "256"),
            ConversionError::Int(_)
        ));
        assert!(matches!(
            conversion_error(FieldKind::U64, "-0"),
            ConversionError::Int(_)
        ));
    }

    #[test]
    fn test_malformed_integer_is_not_zero() {
        assert!(matches!(
            conversion_error(FieldKind::I32, "abc"),
            ConversionError::Int(_)
        ));
        assert!(matches!(
            conversion_error(FieldKind::Usize, ""),
            ConversionError::Int(_)
        ));
    }

    #[test]
    fn test_floats_at_precision() {
        assert_eq!(ok(FieldKind::F32, "1.23"), Value::F32(1.23));
        assert_eq!(ok(FieldKind::F64, "1.23"), Value::F64(1.23));
        assert_eq!(ok(FieldKind::F64, "-1e3"), Value::F64(-1000.0));
        assert!(matches!(
            conversion_error(FieldKind::F64, "1.2.3"),
            ConversionError::Float(_)
        ));
    }

    #[test]
    fn test_unsigned_rejects_plus_sign() {
        assert_eq!(conversion_error(FieldKind::U8, "+5"), ConversionError::Sign);
        assert_eq!(conversion_error(FieldKind::Usize, "+0"), ConversionError::Sign);
    }

    #[test]
    fn test_signed_accepts_plus_sign() {
        assert_eq!(ok(FieldKind::I32, "+5"), Value::I32(5));
    }

    #[test]
    fn test_float_overflow_is_conversion_error() {
        assert_eq!(conversion_error(FieldKind::F32, "1e39"), ConversionError::FloatRange);
        assert_eq!(conversion_error(FieldKind::F64, "1e400"), ConversionError::FloatRange);
        assert_eq!(conversion_error(FieldKind::F64, "-1e400"), ConversionError::FloatRange);
    }

    #[test]
    fn test_float_infinity_literal_is_kept() {
        assert_eq!(ok(FieldKind::F32, "inf"), Value::F32(f32::INFINITY));
        assert_eq!(ok(FieldKind::F64, "-Infinity"), Value::F64(f64::NEG_INFINITY));
        assert_eq!(ok(FieldKind::F32, "3.4e38"), Value::F32(3.4e38));
    }

    #[test]
    fn test_string_is_taken_verbatim() {
        assert_eq!(ok(FieldKind::String, ""), Value::String(String::new()));
        assert_eq!(
            ok(FieldKind::String, "  padded  "),
            Value::String("  padded  ".to_string())
        );
    }

    #[test]
    fn test_unsupported_kind() {
        let err = convert("TAGS", FieldKind::Unsupported("Vec<String>"), "a,b".into());
        match err {
            Err(BindError::UnsupportedType { key, kind }) => {
                assert_eq!(key, "TAGS");
                assert_eq!(kind, FieldKind::Unsupported("Vec<String>"));
            }
            other => panic!("Expected UnsupportedType error, got {other:?}"),
        }
    }
}
