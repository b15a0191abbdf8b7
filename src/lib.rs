//! Exact basis points.
//!
//! A [`Bps`] is a proportion of one "amount" (1 amount = 100% = 10,000 basis
//! points = 1,000,000,000 parts per billion) stored as an arbitrary precision
//! rational, so conversions between scales never lose information until you
//! ask for a rounded integer.

mod bps;
mod parse;
mod unit;

pub use self::bps::*;
pub use self::parse::*;
pub use self::unit::*;

pub use num_bigint::BigInt;
pub use num_rational::BigRational;
