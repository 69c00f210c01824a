//! Conversion of captured text into typed values.
//!
//! Every scannable type declares a [`TypeTag`], which fixes the one
//! specifier (`%d`, `%u`, `%f` or `%s`) a placeholder may carry for it.
//! Specifier checks run before conversion so a mismatched template and a
//! malformed number produce different messages.

use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

use crate::error::ScanError;

/// Primitive kind of a scannable type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    /// Signed integers, specifier `%d`.
    Signed,
    /// Unsigned integers, specifier `%u`.
    Unsigned,
    /// Floating point numbers, specifier `%f`.
    Float,
    /// Text, specifier `%s`.
    Text,
}

impl TypeTag {
    /// Canonical specifier for this kind.
    pub const fn specifier(self) -> &'static str {
        match self {
            TypeTag::Signed => "%d",
            TypeTag::Unsigned => "%u",
            TypeTag::Float => "%f",
            TypeTag::Text => "%s",
        }
    }

    /// Kind denoted by a specifier, if it is one of the four canonical ones.
    pub fn from_specifier(specifier: &str) -> Option<Self> {
        match specifier {
            "%d" => Some(TypeTag::Signed),
            "%u" => Some(TypeTag::Unsigned),
            "%f" => Some(TypeTag::Float),
            "%s" => Some(TypeTag::Text),
            _ => None,
        }
    }
}

/// A type that can be scanned out of a placeholder.
///
/// The lifetime is the one of the scanned input, which lets `&str` borrow
/// its value instead of copying it.
pub trait ScanValue<'a>: Sized {
    /// Primitive kind, which decides the accepted specifier.
    const TAG: TypeTag;

    /// Name used in error messages.
    const TYPE_NAME: &'static str;

    /// Converts the whole of `input` into a value.
    fn parse_value(input: &'a str) -> Result<Self, ScanError>;
}

/// Converts `input` into a `T`, ignoring any specifier.
#[inline]
pub fn parse_value<'a, T: ScanValue<'a>>(input: &'a str) -> Result<T, ScanError> {
    T::parse_value(input)
}

/// Converts `input` into a `T` after checking `specifier` against `T`.
///
/// An empty specifier means the kind is inferred from `T` and always passes.
pub fn parse_value_with_format<'a, T: ScanValue<'a>>(
    input: &'a str,
    specifier: &str,
) -> Result<T, ScanError> {
    let expected = T::TAG.specifier();
    if !specifier.is_empty() && specifier != expected {
        return Err(ScanError::incorrect_format(
            specifier,
            expected,
            T::TYPE_NAME,
        ));
    }
    T::parse_value(input)
}

fn parse_integer<T>(input: &str, type_name: &str) -> Result<T, ScanError>
where
    T: FromStr<Err = ParseIntError>,
{
    // `str::parse` accepts a leading `+`, strict conversion does not.
    if input.starts_with('+') {
        return Err(ScanError::invalid_argument(input, type_name));
    }
    input.parse::<T>().map_err(|error| match error.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            ScanError::out_of_range(input, type_name)
        }
        _ => ScanError::invalid_argument(input, type_name),
    })
}

/// Float literal parsing that reports overflow and underflow instead of
/// rounding to infinity or zero.
trait FloatLiteral: FromStr + Copy {
    fn is_infinite(self) -> bool;
    fn is_zero(self) -> bool;
}

macro_rules! impl_float_literal {
    ($($float:ty),*) => {$(
        impl FloatLiteral for $float {
            #[inline]
            fn is_infinite(self) -> bool {
                <$float>::is_infinite(self)
            }

            #[inline]
            fn is_zero(self) -> bool {
                self == 0.0
            }
        }
    )*};
}

impl_float_literal!(f32, f64);

fn parse_float<T: FloatLiteral>(input: &str, type_name: &str) -> Result<T, ScanError> {
    if input.starts_with('+') {
        return Err(ScanError::invalid_argument(input, type_name));
    }
    let value = input
        .parse::<T>()
        .map_err(|_| ScanError::invalid_argument(input, type_name))?;

    let unsigned = input.strip_prefix('-').unwrap_or(input);
    let is_infinity_literal =
        unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity");
    if value.is_infinite() && !is_infinity_literal {
        return Err(ScanError::out_of_range(input, type_name));
    }

    let mantissa = unsigned.split(['e', 'E']).next().unwrap_or_default();
    if value.is_zero() && mantissa.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        return Err(ScanError::out_of_range(input, type_name));
    }

    Ok(value)
}

macro_rules! impl_scan_value {
    ($parse:ident, $tag:expr, $($ty:ty),*) => {$(
        impl<'a> ScanValue<'a> for $ty {
            const TAG: TypeTag = $tag;
            const TYPE_NAME: &'static str = stringify!($ty);

            #[inline]
            fn parse_value(input: &'a str) -> Result<Self, ScanError> {
                $parse(input, Self::TYPE_NAME)
            }
        }
    )*};
}

impl_scan_value!(parse_integer, TypeTag::Signed, i8, i16, i32, i64);
impl_scan_value!(parse_integer, TypeTag::Unsigned, u8, u16, u32, u64);
impl_scan_value!(parse_float, TypeTag::Float, f32, f64);

impl<'a> ScanValue<'a> for String {
    const TAG: TypeTag = TypeTag::Text;
    const TYPE_NAME: &'static str = "String";

    #[inline]
    fn parse_value(input: &'a str) -> Result<Self, ScanError> {
        Ok(input.to_owned())
    }
}

impl<'a> ScanValue<'a> for &'a str {
    const TAG: TypeTag = TypeTag::Text;
    const TYPE_NAME: &'static str = "&str";

    #[inline]
    fn parse_value(input: &'a str) -> Result<Self, ScanError> {
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specifier_lookup() {
        for tag in [
            TypeTag::Signed,
            TypeTag::Unsigned,
            TypeTag::Float,
            TypeTag::Text,
        ] {
            assert_eq!(TypeTag::from_specifier(tag.specifier()), Some(tag));
        }
        assert_eq!(TypeTag::from_specifier(""), None);
        assert_eq!(TypeTag::from_specifier("%x"), None);
    }

    #[test]
    fn test_type_tags() {
        assert_eq!(<i8 as ScanValue<'_>>::TAG, TypeTag::Signed);
        assert_eq!(<u64 as ScanValue<'_>>::TAG, TypeTag::Unsigned);
        assert_eq!(<f32 as ScanValue<'_>>::TAG, TypeTag::Float);
        assert_eq!(<String as ScanValue<'_>>::TAG, TypeTag::Text);
        assert_eq!(<&str as ScanValue<'_>>::TAG, TypeTag::Text);
    }

    #[test]
    fn test_integers() {
        assert_eq!(parse_value::<i8>("-128"), Ok(i8::MIN));
        assert_eq!(parse_value::<u16>("65535"), Ok(u16::MAX));
        assert_eq!(parse_value::<i64>("-9223372036854775808"), Ok(i64::MIN));
        assert_eq!(parse_value::<u32>("0"), Ok(0));
    }

    #[test]
    fn test_integer_out_of_range() {
        let error = parse_value::<i8>("128").unwrap_err();
        assert_eq!(
            error.message(),
            "Numerical result out of range - \"128\" is out of range for \"i8\""
        );
        assert!(
            parse_value::<i16>("-32769")
                .unwrap_err()
                .message()
                .starts_with("Numerical result out of range")
        );
    }

    #[test]
    fn test_integer_invalid() {
        let error = parse_value::<i32>("BAD").unwrap_err();
        assert_eq!(
            error.message(),
            "Invalid argument - \"BAD\" this is not a number for \"i32\""
        );
        for input in ["", " 1", "1 ", "+1", "1.5", "-"] {
            assert!(
                parse_value::<i32>(input)
                    .unwrap_err()
                    .message()
                    .starts_with("Invalid argument"),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_negative_unsigned_is_invalid() {
        assert!(
            parse_value::<u8>("-1")
                .unwrap_err()
                .message()
                .starts_with("Invalid argument")
        );
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn test_floats() {
        assert_eq!(parse_value::<f32>("2.75"), Ok(2.75));
        assert_eq!(parse_value::<f64>("-1e10"), Ok(-1e10));
        assert_eq!(parse_value::<f64>("-0"), Ok(0.0));
        assert_eq!(parse_value::<f32>("inf"), Ok(f32::INFINITY));
        assert_eq!(parse_value::<f64>("-infinity"), Ok(f64::NEG_INFINITY));
        assert!(parse_value::<f64>("NaN").unwrap().is_nan());
        assert!(parse_value::<f32>("nan").unwrap().is_nan());
    }

    #[test]
    fn test_float_out_of_range() {
        for input in ["1e39", "-1e39", "1e-50"] {
            assert!(
                parse_value::<f32>(input)
                    .unwrap_err()
                    .message()
                    .starts_with("Numerical result out of range"),
                "{input:?} should be out of range"
            );
        }
        assert!(parse_value::<f64>("1e39").is_ok());
    }

    #[test]
    fn test_float_invalid() {
        for input in ["", "abc", "+1.0", "1.0 ", "1,5"] {
            assert!(
                parse_value::<f64>(input)
                    .unwrap_err()
                    .message()
                    .starts_with("Invalid argument"),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_text_is_taken_verbatim() {
        assert_eq!(parse_value::<String>(" a\\n b "), Ok(" a\\n b ".to_owned()));
        assert_eq!(parse_value::<&str>(""), Ok(""));
    }

    #[test]
    fn test_matching_specifier() {
        assert_eq!(parse_value_with_format::<i32>("42", "%d"), Ok(42));
        assert_eq!(parse_value_with_format::<u8>("42", "%u"), Ok(42));
        assert_eq!(parse_value_with_format::<f64>("4.2", "%f"), Ok(4.2));
        assert_eq!(parse_value_with_format::<&str>("42", "%s"), Ok("42"));
        assert_eq!(parse_value_with_format::<i32>("42", ""), Ok(42));
    }

    #[test]
    fn test_mismatched_specifier() {
        let error = parse_value_with_format::<i32>("3.14", "%f").unwrap_err();
        assert_eq!(
            error.message(),
            "Incorrect format specified - \"%f\", expected - \"%d\" for type \"i32\""
        );
        let error = parse_value_with_format::<String>("x", "%q").unwrap_err();
        assert!(error.message().starts_with("Incorrect format specified"));
    }

    #[test]
    fn test_specifier_checked_before_value() {
        let error = parse_value_with_format::<u8>("BAD", "%d").unwrap_err();
        assert!(error.message().starts_with("Incorrect format specified"));
    }
}
