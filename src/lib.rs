// ============================================================================
// Storage Units Library
// Typed storage quantities with unit-safe arithmetic and conversion
// ============================================================================

//! # Storage Units
//!
//! A small value-type library for digital storage quantities, from bytes
//! through yottabytes.
//!
//! ## Features
//!
//! - **Nine unit kinds** with power-of-1000 conversion factors
//! - **Checked arithmetic and comparison** with a same-kind operand contract
//!   (cross-kind operands are rejected, never auto-converted)
//! - **Floor division** semantics for quantity division
//! - **Unit conversion** by long name or case-insensitive short symbol
//! - **Grouped display formatting** (comma separators, two decimals)
//! - Optional `serde` derives; trace-level `tracing` events on conversion
//!
//! ## Example
//!
//! ```rust
//! use storage_units::prelude::*;
//!
//! let disk = Quantity::new(UnitKind::Gigabyte, 512.0).unwrap();
//! let used = Quantity::new(UnitKind::Gigabyte, 128.5).unwrap();
//!
//! let free = disk.checked_sub(used).unwrap();
//! assert_eq!(free.value(), 383.5);
//!
//! let in_megabytes = free.convert("MB").unwrap();
//! assert_eq!(in_megabytes.value(), 383_500.0);
//! assert_eq!(in_megabytes.to_string(), "383,500.0 MB");
//! ```

pub mod quantity;
pub mod units;

// Re-exports for convenience
pub mod prelude {
    pub use crate::quantity::{Operand, Quantity, QuantityError, QuantityResult};
    pub use crate::units::UnitKind;
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    #[test]
    fn test_end_to_end_accounting() {
        let capacity = Quantity::new(UnitKind::Terabyte, 2.0).unwrap();
        let in_gigabytes = capacity.convert("gb").unwrap();
        assert_eq!(in_gigabytes.value(), 2000.0);

        // reserve a quarter of the capacity, expressed in bits
        let reserved = Quantity::from_bits(UnitKind::Gigabyte, 4000.0).unwrap();
        let available = in_gigabytes.checked_sub(&reserved).unwrap();
        assert_eq!(available.value(), 1500.0);

        assert!(available.checked_gt(&reserved).unwrap());
        assert_eq!(available.to_string(), "1,500.0 GB");

        // back up the ladder, ending where we started
        let back = available.convert("terabyte").unwrap();
        assert_eq!(back.value(), 1.5);
        assert_eq!(back.unit(), "TB");
    }

    #[test]
    fn test_errors_surface_at_the_offending_call() {
        let a = Quantity::new(UnitKind::Kilobyte, 1.0).unwrap();
        let b = Quantity::new(UnitKind::Megabyte, 1.0).unwrap();

        assert!(matches!(
            a.checked_add(b),
            Err(QuantityError::TypeMismatch { .. })
        ));
        assert!(matches!(
            a.checked_div(0),
            Err(QuantityError::DivisionByZero)
        ));
        assert!(matches!(
            a.convert("lightyear"),
            Err(QuantityError::InvalidUnit(_))
        ));
    }
}
