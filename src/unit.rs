use std::{
    fmt,
    sync::atomic::{AtomicU8, Ordering}
};

pub const PERCENTAGE_DENOMINATOR: u64 = 100;
pub const BASIS_POINT_DENOMINATOR: u64 = 10_000;
pub const HALF_BASIS_POINT_DENOMINATOR: u64 = 20_000;
pub const DECI_BASIS_POINT_DENOMINATOR: u64 = 100_000;
pub const PPM_DENOMINATOR: u64 = 1_000_000;
pub const PPB_DENOMINATOR: u64 = 1_000_000_000;

/// One of the scales a [`Bps`](crate::Bps) can be built from or read back as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum BaseUnit {
    Percentage,
    BasisPoint,
    HalfBasisPoint,
    DeciBasisPoint,
    Ppm,
    Ppb
}
impl Default for BaseUnit {
    fn default() -> Self {
        BaseUnit::DeciBasisPoint
    }
}
impl BaseUnit {
    /// All scales, from the coarsest to the finest
    pub const ALL: [BaseUnit; 6] = [
        BaseUnit::Percentage,
        BaseUnit::BasisPoint,
        BaseUnit::HalfBasisPoint,
        BaseUnit::DeciBasisPoint,
        BaseUnit::Ppm,
        BaseUnit::Ppb
    ];

    /// How many of this unit make up one amount
    pub fn denominator(self) -> u64 {
        match self {
            BaseUnit::Percentage => PERCENTAGE_DENOMINATOR,
            BaseUnit::BasisPoint => BASIS_POINT_DENOMINATOR,
            BaseUnit::HalfBasisPoint => HALF_BASIS_POINT_DENOMINATOR,
            BaseUnit::DeciBasisPoint => DECI_BASIS_POINT_DENOMINATOR,
            BaseUnit::Ppm => PPM_DENOMINATOR,
            BaseUnit::Ppb => PPB_DENOMINATOR
        }
    }
    fn from_u8(i: u8) -> Self {
        Self::ALL.get(i as usize).copied().unwrap_or_default()
    }
}
impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            BaseUnit::Percentage => "percentage",
            BaseUnit::BasisPoint => "basis point",
            BaseUnit::HalfBasisPoint => "half basis point",
            BaseUnit::DeciBasisPoint => "deci basis point",
            BaseUnit::Ppm => "ppm",
            BaseUnit::Ppb => "ppb"
        })
    }
}

static BASE_UNIT: AtomicU8 = AtomicU8::new(BaseUnit::DeciBasisPoint as u8);

/// Return the process-wide default scale used by
/// [`Bps::from_base_unit`](crate::Bps::from_base_unit),
/// [`Bps::base_unit_amounts`](crate::Bps::base_unit_amounts) and `Display`.
pub fn base_unit() -> BaseUnit {
    BaseUnit::from_u8(BASE_UNIT.load(Ordering::Relaxed))
}

/// Change the process-wide default scale.
///
/// There is a single writer in mind: a change is only guaranteed to be seen
/// by other threads that synchronize with this one afterwards. Code that
/// can't make that promise should pass a [`BaseUnit`] explicitly to
/// [`Bps::from_unit`](crate::Bps::from_unit) and
/// [`Bps::to_unit`](crate::Bps::to_unit) instead.
pub fn set_base_unit(unit: BaseUnit) {
    let old = BaseUnit::from_u8(BASE_UNIT.swap(unit as u8, Ordering::Relaxed));
    if old != unit {
        tracing::debug!(%old, new = %unit, "changed default base unit");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn denominators() {
        assert_eq!(BaseUnit::Percentage.denominator(), 100);
        assert_eq!(BaseUnit::BasisPoint.denominator(), 10_000);
        assert_eq!(BaseUnit::HalfBasisPoint.denominator(), 20_000);
        assert_eq!(BaseUnit::DeciBasisPoint.denominator(), 100_000);
        assert_eq!(BaseUnit::Ppm.denominator(), 1_000_000);
        assert_eq!(BaseUnit::Ppb.denominator(), 1_000_000_000);
    }

    #[test]
    fn discriminants_match_table() {
        for unit in BaseUnit::ALL.iter() {
            assert_eq!(BaseUnit::from_u8(*unit as u8), *unit);
        }
        assert_eq!(BaseUnit::from_u8(200), BaseUnit::DeciBasisPoint);
    }

    #[test]
    fn default_is_deci_basis_point() {
        assert_eq!(BaseUnit::default(), BaseUnit::DeciBasisPoint);
    }

    #[test]
    fn display() {
        assert_eq!(BaseUnit::Ppm.to_string(), "ppm");
        assert_eq!(BaseUnit::HalfBasisPoint.to_string(), "half basis point");
    }
}
