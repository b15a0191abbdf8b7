use crate::Bps;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::*;
use std::str::FromStr;
use thiserror::Error;

/// What went wrong while parsing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The input isn't a plain base 10 decimal number
    InvalidFormat
}

/// Error returned when a string can't be parsed as a [`Bps`]
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid decimal {input:?}: {detail}")]
pub struct ParseBpsError {
    kind: ErrorKind,
    input: String,
    detail: &'static str
}
impl ParseBpsError {
    fn invalid_format(input: &str, detail: &'static str) -> Self {
        Self {
            kind: ErrorKind::InvalidFormat,
            input: input.to_owned(),
            detail
        }
    }
    /// Return the kind of error
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
    /// Return the rejected input
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Read `[+-]digits[.digits]` or `[+-].digits` as an exact fraction. Only
/// ASCII base 10 digits are accepted, so radix prefixes such as `0x` fail on
/// their letter.
fn parse_decimal(input: &str) -> Result<BigRational, ParseBpsError> {
    let mut chars = input.chars().peekable();

    let negative = match chars.peek() {
        Some('-') => {
            chars.next();
            true
        },
        Some('+') => {
            chars.next();
            false
        },
        _ => false
    };

    let ten = BigInt::from(10u8);
    let mut numerator = BigInt::zero();
    let mut denominator = BigInt::one();
    let mut digits = 0usize;

    while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
        chars.next();
        numerator = numerator * &ten + digit;
        digits += 1;
    }

    if let Some('.') = chars.peek() {
        chars.next();

        while let Some(digit) = chars.peek().and_then(|c| c.to_digit(10)) {
            chars.next();
            numerator = numerator * &ten + digit;
            denominator *= &ten;
            digits += 1;
        }
    }

    match chars.next() {
        Some('.') => return Err(ParseBpsError::invalid_format(input, "more than one decimal point")),
        Some(_) => return Err(ParseBpsError::invalid_format(input, "not a base 10 digit")),
        None => ()
    }
    if digits == 0 {
        return Err(ParseBpsError::invalid_format(input, "no digits"));
    }

    let value = BigRational::new(numerator, denominator);
    Ok(if negative { -value } else { value })
}

impl FromStr for Bps {
    type Err = ParseBpsError;

    /// Parse a decimal number of amounts, so `"0.15"` is 15%.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match parse_decimal(input) {
            Ok(value) => Ok(Bps::from_rational(value)),
            Err(err) => {
                tracing::debug!(%err, "rejected decimal");
                Err(err)
            }
        }
    }
}

impl Bps {
    /// Same as `str::parse`, but panics instead of returning an error.
    /// ```rust
    /// use bps::Bps;
    /// assert_eq!(Bps::must_from_str("0.15"), Bps::from_percentage(15));
    /// ```
    ///
    /// ## Panics
    /// Panics if the input isn't a valid decimal number
    pub fn must_from_str(input: &str) -> Self {
        match input.parse() {
            Ok(bps) => bps,
            Err(err) => panic!("{}", err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    fn parse(input: &str) -> Result<Bps, ParseBpsError> {
        input.parse()
    }

    #[test]
    fn valid() {
        assert_eq!(parse("123.456").unwrap(), Bps::from_basis_point(1234560));
        assert_eq!(parse("123").unwrap(), Bps::from_basis_point(1230000));
        assert_eq!(parse(".1234").unwrap(), Bps::from_basis_point(1234));
        assert_eq!(parse("-123.456").unwrap(), Bps::from_basis_point(-1234560));
        assert_eq!(parse("0.0").unwrap(), Bps::from_amount(0));
        assert_eq!(parse(".0").unwrap(), Bps::from_amount(0));
        assert_eq!(parse("+2.5").unwrap(), Bps::from_percentage(250));
        assert_eq!(parse("1.").unwrap(), Bps::from_amount(1));
    }

    #[test]
    fn sign_follows_minus() {
        assert_eq!(parse("-.5").unwrap(), Bps::from_percentage(-50));
        assert_eq!(parse("-0.5").unwrap(), Bps::from_percentage(-50));
        assert_eq!(parse("-0").unwrap(), Bps::default());
    }

    #[test]
    fn long_fractions_are_exact() {
        let bps = parse("0.0000000001").unwrap();
        assert_eq!(bps.to_rational(), BigRational::new(BigInt::one(), BigInt::from(10_000_000_000u64)));
        assert_eq!(bps.ppbs(), BigInt::zero());

        let bps = parse("0.0000000019").unwrap();
        assert_eq!(bps.ppbs(), BigInt::one());

        let big = parse("123456789012345678901234567890.5").unwrap();
        assert_eq!(big.percentages(), "12345678901234567890123456789050".parse::<BigInt>().unwrap());
    }

    #[test]
    fn invalid() {
        for input in &["123.45.6", "0b11", "0o75", "0xF5", "", "-", ".", "+-1", "1e5", " 1", "1 ", "1_000", "١٢"] {
            let err = parse(input).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidFormat, "{:?}", input);
            assert_eq!(err.input(), *input);
        }
    }

    #[test]
    fn error_message() {
        assert_eq!(
            parse("123.45.6").unwrap_err().to_string(),
            "invalid decimal \"123.45.6\": more than one decimal point"
        );
        assert_eq!(parse("0xF5").unwrap_err().to_string(), "invalid decimal \"0xF5\": not a base 10 digit");
        assert_eq!(parse("").unwrap_err().to_string(), "invalid decimal \"\": no digits");
    }

    #[test]
    fn must_from_str() {
        assert_eq!(Bps::must_from_str("123.456"), Bps::from_basis_point(1234560));
        assert_eq!(Bps::must_from_str("0.02645").deci_basis_points(), BigInt::from(2645));
    }

    #[test]
    #[should_panic(expected = "more than one decimal point")]
    fn must_from_str_panics() {
        Bps::must_from_str("123.45.6");
    }

    #[test]
    #[should_panic(expected = "not a base 10 digit")]
    fn must_from_str_panics_on_radix_prefix() {
        Bps::must_from_str("0xF5");
    }

    proptest! {
        #[test]
        fn four_decimals_are_basis_points(int in -1_000_000i64..1_000_000, frac in 0u32..10_000) {
            let sign = if int < 0 { "-" } else { "" };
            let input = format!("{}{}.{:04}", sign, int.abs(), frac);
            let expected = int * 10_000 + if int < 0 { -(frac as i64) } else { frac as i64 };
            prop_assert_eq!(parse(&input).unwrap(), Bps::from_basis_point(expected));
        }

        #[test]
        fn integers_are_amounts(n in any::<i64>()) {
            prop_assert_eq!(parse(&n.to_string()).unwrap(), Bps::from_amount(n));
        }
    }
}
