use crate::{base_unit, BaseUnit};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::*;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign}
};

/// Clamp a big integer into an i64, saturating at the bounds
fn saturate(i: &BigInt) -> i64 {
    i.to_i64().unwrap_or(if i.is_negative() { std::i64::MIN } else { std::i64::MAX })
}

/// A proportion of one amount, stored as an exact fraction. One amount is
/// 100%, 10,000 basis points or 1,000,000,000 ppb, and no matter which of
/// those a value was built from, it compares equal to any other spelling
/// of the same quantity.
///
/// Rounding only ever happens when reading the value back as an integer.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bps {
    value: BigRational
}
impl Default for Bps {
    fn default() -> Self {
        Self { value: BigRational::zero() }
    }
}
impl Bps {
    /// Construct a new instance from an exact number of amounts
    pub fn from_rational(value: BigRational) -> Self {
        Self { value }
    }
    fn from_scaled<T: Into<BigInt>>(n: T, denominator: u64) -> Self {
        Self::from_rational(BigRational::new(n.into(), BigInt::from(denominator)))
    }
    /// Construct a new instance from a whole number of amounts, 1 being 100%
    pub fn from_amount<T: Into<BigInt>>(n: T) -> Self {
        Self::from_rational(BigRational::from_integer(n.into()))
    }
    /// Construct a new instance from a float number of amounts. The float is
    /// taken at its exact binary value, so 0.1 is not quite 10%. Returns None
    /// if the float is NaN or infinite.
    pub fn from_amount_f64(n: f64) -> Option<Self> {
        BigRational::from_float(n).map(Self::from_rational)
    }
    /// Construct a new instance from percentages, 100 being one amount
    pub fn from_percentage<T: Into<BigInt>>(n: T) -> Self {
        Self::from_unit(n, BaseUnit::Percentage)
    }
    /// Construct a new instance from basis points, 10,000 being one amount
    pub fn from_basis_point<T: Into<BigInt>>(n: T) -> Self {
        Self::from_unit(n, BaseUnit::BasisPoint)
    }
    /// Construct a new instance from half basis points, 20,000 being one amount
    pub fn from_half_basis_point<T: Into<BigInt>>(n: T) -> Self {
        Self::from_unit(n, BaseUnit::HalfBasisPoint)
    }
    /// Construct a new instance from deci basis points, 100,000 being one amount
    pub fn from_deci_basis_point<T: Into<BigInt>>(n: T) -> Self {
        Self::from_unit(n, BaseUnit::DeciBasisPoint)
    }
    /// Construct a new instance from parts per million. `None` is zero.
    pub fn from_ppm<T: Into<Option<BigInt>>>(n: T) -> Self {
        Self::from_unit(n.into().unwrap_or_default(), BaseUnit::Ppm)
    }
    /// Construct a new instance from parts per billion. `None` is zero.
    pub fn from_ppb<T: Into<Option<BigInt>>>(n: T) -> Self {
        Self::from_unit(n.into().unwrap_or_default(), BaseUnit::Ppb)
    }
    /// Construct a new instance from a count of the specified unit
    pub fn from_unit<T: Into<BigInt>>(n: T, unit: BaseUnit) -> Self {
        Self::from_scaled(n, unit.denominator())
    }
    /// Construct a new instance from a count of the process-wide default unit,
    /// see [`set_base_unit`](crate::set_base_unit).
    /// ```rust
    /// use bps::Bps;
    /// assert_eq!(Bps::from_base_unit(15), Bps::from_unit(15, bps::base_unit()));
    /// ```
    pub fn from_base_unit<T: Into<BigInt>>(n: T) -> Self {
        Self::from_unit(n, base_unit())
    }

    /// Borrow the exact number of amounts
    pub fn as_rational(&self) -> &BigRational {
        &self.value
    }
    /// Return the exact number of amounts
    pub fn to_rational(&self) -> BigRational {
        self.value.clone()
    }
    /// Return the whole number of amounts, truncated toward zero and saturated
    /// to fit, so 1.999999999 amounts is 1.
    pub fn amounts(&self) -> i64 {
        saturate(&self.value.to_integer())
    }
    /// Return the whole number of the specified unit, truncated toward zero.
    /// ```rust
    /// use bps::{BaseUnit, BigInt, Bps};
    /// let bps = Bps::from_ppb(BigInt::from(1_009_999_999));
    /// assert_eq!(bps.to_unit(BaseUnit::Percentage), BigInt::from(100));
    /// ```
    pub fn to_unit(&self, unit: BaseUnit) -> BigInt {
        (&self.value * BigRational::from_integer(BigInt::from(unit.denominator()))).to_integer()
    }
    /// Return the number of percentages, truncated toward zero
    pub fn percentages(&self) -> BigInt {
        self.to_unit(BaseUnit::Percentage)
    }
    /// Return the number of basis points, truncated toward zero
    pub fn basis_points(&self) -> BigInt {
        self.to_unit(BaseUnit::BasisPoint)
    }
    /// Return the number of half basis points, truncated toward zero
    pub fn half_basis_points(&self) -> BigInt {
        self.to_unit(BaseUnit::HalfBasisPoint)
    }
    /// Return the number of deci basis points, truncated toward zero
    pub fn deci_basis_points(&self) -> BigInt {
        self.to_unit(BaseUnit::DeciBasisPoint)
    }
    /// Return the number of parts per million, truncated toward zero
    pub fn ppms(&self) -> BigInt {
        self.to_unit(BaseUnit::Ppm)
    }
    /// Return the number of parts per billion, truncated toward zero
    pub fn ppbs(&self) -> BigInt {
        self.to_unit(BaseUnit::Ppb)
    }
    /// Return the number of the process-wide default unit, truncated like
    /// `to_unit` and saturated to fit
    pub fn base_unit_amounts(&self) -> i64 {
        saturate(&self.to_unit(base_unit()))
    }
    /// Return the nearest float and whether it is exactly this value.
    /// ```rust
    /// use bps::Bps;
    /// assert_eq!((Bps::from_amount(1) / 4).to_f64(), (0.25, true));
    /// assert_eq!((Bps::from_amount(1) / 3).to_f64().1, false);
    /// ```
    pub fn to_f64(&self) -> (f64, bool) {
        let float = self.value.to_f64().unwrap_or(std::f64::NAN);
        let exact = BigRational::from_float(float).map_or(false, |back| back == self.value);
        (float, exact)
    }
    /// Format the number of amounts as a decimal with `precision` fractional
    /// digits, rounding halves away from zero
    pub fn float_string(&self, precision: usize) -> String {
        let scale = num_traits::pow(BigInt::from(10u8), precision);
        let scaled = (&self.value * BigRational::from_integer(scale)).round().to_integer();
        let digits = scaled.abs().to_str_radix(10);
        let sign = if self.value.is_negative() { "-" } else { "" };
        if precision == 0 {
            return format!("{}{}", sign, digits);
        }
        let digits = format!("{:0>width$}", digits, width = precision + 1);
        let (int, frac) = digits.split_at(digits.len() - precision);
        format!("{}{}.{}", sign, int, frac)
    }

    /// Returns true if this value is 0
    pub fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
    pub fn is_positive(&self) -> bool {
        self.value.is_positive()
    }
    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }
    /// Return this value with a positive sign
    pub fn abs(&self) -> Self {
        Self::from_rational(self.value.abs())
    }
    /// Return -1, 0 or 1 amount depending on the sign
    pub fn signum(&self) -> Self {
        Self::from_rational(self.value.signum())
    }
    /// Calculates division, but returns None if the divisor is 0
    pub fn checked_div<T: Into<BigInt>>(&self, divisor: T) -> Option<Self> {
        let divisor = divisor.into();
        if divisor.is_zero() {
            return None;
        }
        Some(Self::from_rational(&self.value / BigRational::from_integer(divisor)))
    }
}

impl From<BigRational> for Bps {
    fn from(value: BigRational) -> Self {
        Self::from_rational(value)
    }
}
impl From<Bps> for BigRational {
    fn from(bps: Bps) -> Self {
        bps.value
    }
}

impl fmt::Display for Bps {
    /// Prints the value in the process-wide default unit
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.base_unit_amounts(), f)
    }
}
impl fmt::Debug for Bps {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Bps({})", self.value)
    }
}

impl Neg for Bps {
    type Output = Self;
    fn neg(self) -> Self::Output {
        Self::from_rational(-self.value)
    }
}
impl<'a> Neg for &'a Bps {
    type Output = Bps;
    fn neg(self) -> Self::Output {
        Bps::from_rational(-&self.value)
    }
}

macro_rules! impl_bps_op {
    ($($trait:ident $fn:ident, $trait_assign:ident $fn_assign:ident = ($op:tt)),*) => {
        $(impl $trait<Bps> for Bps {
            type Output = Self;
            fn $fn(self, other: Bps) -> Self {
                Bps::from_rational(self.value $op other.value)
            }
        }
        impl<'a> $trait<&'a Bps> for Bps {
            type Output = Self;
            fn $fn(self, other: &Bps) -> Self {
                Bps::from_rational(self.value $op &other.value)
            }
        }
        impl<'a, 'b> $trait<&'b Bps> for &'a Bps {
            type Output = Bps;
            fn $fn(self, other: &Bps) -> Bps {
                Bps::from_rational(&self.value $op &other.value)
            }
        }
        impl $trait_assign<Bps> for Bps {
            fn $fn_assign(&mut self, other: Bps) {
                self.value = &self.value $op other.value;
            }
        }
        impl<'a> $trait_assign<&'a Bps> for Bps {
            fn $fn_assign(&mut self, other: &Bps) {
                self.value = &self.value $op &other.value;
            }
        })*
    }
}
impl_bps_op! {
    Add add, AddAssign add_assign = (+),
    Sub sub, SubAssign sub_assign = (-)
}

macro_rules! impl_scalar_op {
    ($($trait:ident $fn:ident, $trait_assign:ident $fn_assign:ident = ($op:tt)),*) => {
        $(impl<T: Into<BigInt>> $trait<T> for Bps {
            type Output = Self;
            fn $fn(self, other: T) -> Self {
                Bps::from_rational(self.value $op BigRational::from_integer(other.into()))
            }
        }
        impl<'a, T: Into<BigInt>> $trait<T> for &'a Bps {
            type Output = Bps;
            fn $fn(self, other: T) -> Bps {
                Bps::from_rational(&self.value $op BigRational::from_integer(other.into()))
            }
        }
        impl<T: Into<BigInt>> $trait_assign<T> for Bps {
            fn $fn_assign(&mut self, other: T) {
                self.value = &self.value $op BigRational::from_integer(other.into());
            }
        })*
    }
}
// Dividing by zero panics, use `checked_div` when the divisor isn't trusted
impl_scalar_op! {
    Mul mul, MulAssign mul_assign = (*),
    Div div, DivAssign div_assign = (/)
}

impl Sum for Bps {
    fn sum<I: Iterator<Item = Bps>>(iter: I) -> Self {
        iter.fold(Bps::default(), |acc, bps| acc + bps)
    }
}
impl<'a> Sum<&'a Bps> for Bps {
    fn sum<I: Iterator<Item = &'a Bps>>(iter: I) -> Self {
        iter.fold(Bps::default(), |acc, bps| acc + bps)
    }
}
