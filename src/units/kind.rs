// ============================================================================
// Storage Unit Kinds
// ============================================================================

use crate::quantity::QuantityError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compute 1000^n at compile time.
///
/// Factors go up to 1000^8 = 10^24, which overflows u64, so the table is
/// built over u128.
const fn pow1000(n: u32) -> u128 {
    let mut result: u128 = 1;
    let mut i = 0;
    while i < n {
        result *= 1000;
        i += 1;
    }
    result
}

/// One of the nine supported storage-unit denominations.
///
/// Each kind carries a short symbol (`"KB"`) and a power-of-1000 conversion
/// factor relative to the byte. Kinds are ordered from smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UnitKind {
    Byte,
    Kilobyte,
    Megabyte,
    Gigabyte,
    Terabyte,
    Petabyte,
    Exabyte,
    Zettabyte,
    Yottabyte,
}

impl UnitKind {
    /// All kinds in ascending order of magnitude.
    pub const ALL: [UnitKind; 9] = [
        UnitKind::Byte,
        UnitKind::Kilobyte,
        UnitKind::Megabyte,
        UnitKind::Gigabyte,
        UnitKind::Terabyte,
        UnitKind::Petabyte,
        UnitKind::Exabyte,
        UnitKind::Zettabyte,
        UnitKind::Yottabyte,
    ];

    /// Position in the magnitude ladder: 0 for byte through 8 for yottabyte.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// Short symbol, as rendered after a formatted value.
    pub const fn symbol(self) -> &'static str {
        match self {
            UnitKind::Byte => "B",
            UnitKind::Kilobyte => "KB",
            UnitKind::Megabyte => "MB",
            UnitKind::Gigabyte => "GB",
            UnitKind::Terabyte => "TB",
            UnitKind::Petabyte => "PB",
            UnitKind::Exabyte => "EB",
            UnitKind::Zettabyte => "ZB",
            UnitKind::Yottabyte => "YB",
        }
    }

    /// Long lowercase unit name, as accepted by [`UnitKind::from_str`].
    pub const fn name(self) -> &'static str {
        match self {
            UnitKind::Byte => "byte",
            UnitKind::Kilobyte => "kilobyte",
            UnitKind::Megabyte => "megabyte",
            UnitKind::Gigabyte => "gigabyte",
            UnitKind::Terabyte => "terabyte",
            UnitKind::Petabyte => "petabyte",
            UnitKind::Exabyte => "exabyte",
            UnitKind::Zettabyte => "zettabyte",
            UnitKind::Yottabyte => "yottabyte",
        }
    }

    /// Number of bytes in one unit of this kind (1000^index, exact).
    #[inline]
    pub const fn conversion_factor(self) -> u128 {
        pow1000(self.index())
    }

    /// Multiplier taking a value stored in this kind to `target`.
    ///
    /// Computed from the exact integer factors so that power-of-1000 rates
    /// stay exact; dividing two f64-rounded 10^24 magnitudes would not.
    pub fn rate_to(self, target: UnitKind) -> f64 {
        let (src, dst) = (self.index(), target.index());
        if src >= dst {
            pow1000(src - dst) as f64
        } else {
            1.0 / pow1000(dst - src) as f64
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for UnitKind {
    type Err = QuantityError;

    /// Parse a long unit name (exact, lowercase) or a short symbol
    /// (case-insensitive).
    ///
    /// # Examples
    /// - "kilobyte" -> Kilobyte
    /// - "kb", "KB", "Kb" -> Kilobyte
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        for kind in Self::ALL {
            if s == kind.name() || s.eq_ignore_ascii_case(kind.symbol()) {
                return Ok(kind);
            }
        }
        Err(QuantityError::InvalidUnit(s.to_string()))
    }
}
