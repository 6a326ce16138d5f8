// ============================================================================
// Storage Quantity
// A floating-point value tagged with a storage-unit kind
// ============================================================================

use super::errors::{QuantityError, QuantityResult};
use crate::units::UnitKind;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An immutable storage amount: a value stored in its own unit.
///
/// The value is never normalized to bytes; a `Quantity` of 2.5 kilobytes
/// stores 2.5, not 2500. Every operation returns a new `Quantity`.
///
/// # Example
/// ```
/// use storage_units::prelude::*;
///
/// let q = Quantity::new(UnitKind::Kilobyte, 2.5).unwrap();
/// let doubled = q.checked_mul(2).unwrap();
/// assert_eq!(doubled.value(), 5.0);
/// assert_eq!(doubled.unit(), "KB");
/// ```
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Quantity {
    kind: UnitKind,
    value: f64,
    formatted: bool,
}

/// Right-hand side of an arithmetic or comparison operation: a raw number,
/// or a `Quantity` that must be of the same kind as the left operand.
#[derive(Debug, Clone, Copy)]
pub enum Operand {
    Number(f64),
    Quantity(Quantity),
}

macro_rules! operand_from_number {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Operand {
                #[inline]
                fn from(value: $ty) -> Self {
                    Operand::Number(value as f64)
                }
            }
        )*
    };
}

operand_from_number!(f32, f64, i8, i16, i32, i64, u8, u16, u32, u64);

impl From<Quantity> for Operand {
    #[inline]
    fn from(value: Quantity) -> Self {
        Operand::Quantity(value)
    }
}

impl From<&Quantity> for Operand {
    #[inline]
    fn from(value: &Quantity) -> Self {
        Operand::Quantity(*value)
    }
}

impl Quantity {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a quantity of `value` units of `kind`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is NaN or infinite.
    pub fn new(kind: UnitKind, value: f64) -> QuantityResult<Self> {
        if !value.is_finite() {
            return Err(QuantityError::InvalidArgument);
        }
        Ok(Self::of(kind, value))
    }

    /// Create a quantity from a bit count: the stored value is `value / 8`.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if `value` is NaN or infinite.
    pub fn from_bits(kind: UnitKind, value: f64) -> QuantityResult<Self> {
        Self::new(kind, value / 8.0)
    }

    /// Internal constructor for operation results; display formatting is
    /// always re-enabled on a fresh result.
    #[inline]
    const fn of(kind: UnitKind, value: f64) -> Self {
        Self {
            kind,
            value,
            formatted: true,
        }
    }

    /// Create from a `rust_decimal::Decimal`, for callers holding exact
    /// decimals at API boundaries.
    ///
    /// # Errors
    /// Returns `InvalidArgument` if the decimal does not fit an f64.
    pub fn from_decimal(kind: UnitKind, value: rust_decimal::Decimal) -> QuantityResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let value = value.to_f64().ok_or(QuantityError::InvalidArgument)?;
        Self::new(kind, value)
    }

    /// Convert the stored value to a `rust_decimal::Decimal`.
    ///
    /// Returns `None` when the value is outside the Decimal range.
    pub fn to_decimal(&self) -> Option<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;

        rust_decimal::Decimal::from_f64(self.value)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The stored value, in this quantity's own unit.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// The unit kind this value is stored in.
    #[inline]
    pub const fn kind(&self) -> UnitKind {
        self.kind
    }

    /// The kind's short symbol, e.g. `"KB"`.
    #[inline]
    pub const fn unit(&self) -> &'static str {
        self.kind.symbol()
    }

    /// Whether `Display` renders the grouped two-decimal form.
    #[inline]
    pub const fn is_formatted(&self) -> bool {
        self.formatted
    }

    /// Return a copy with the display-formatting flag changed.
    #[inline]
    pub const fn with_formatting(mut self, formatted: bool) -> Self {
        self.formatted = formatted;
        self
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Resolve an operand to its numeric value.
    ///
    /// A raw number is taken as-is; a `Quantity` operand must be of the same
    /// kind as `self`.
    fn operand_value(&self, rhs: Operand) -> QuantityResult<f64> {
        match rhs {
            Operand::Number(n) => Ok(n),
            Operand::Quantity(q) if q.kind == self.kind => Ok(q.value),
            Operand::Quantity(q) => Err(QuantityError::TypeMismatch {
                expected: self.kind,
                found: q.kind,
            }),
        }
    }

    /// Checked addition. The result carries `self`'s kind.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for a `Quantity` operand of a different kind.
    #[inline]
    pub fn checked_add(&self, rhs: impl Into<Operand>) -> QuantityResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        Ok(Self::of(self.kind, self.value + rhs))
    }

    /// Checked subtraction. The result carries `self`'s kind.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for a `Quantity` operand of a different kind.
    #[inline]
    pub fn checked_sub(&self, rhs: impl Into<Operand>) -> QuantityResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        Ok(Self::of(self.kind, self.value - rhs))
    }

    /// Checked multiplication. The result carries `self`'s kind.
    ///
    /// # Errors
    /// Returns `TypeMismatch` for a `Quantity` operand of a different kind.
    #[inline]
    pub fn checked_mul(&self, rhs: impl Into<Operand>) -> QuantityResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        Ok(Self::of(self.kind, self.value * rhs))
    }

    /// Checked floor division: the quotient is truncated toward negative
    /// infinity, so `7 B / 2 B` is `3 B`, not `3.5 B`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` for a zero divisor, `TypeMismatch` for a
    /// `Quantity` operand of a different kind.
    #[inline]
    pub fn checked_div(&self, rhs: impl Into<Operand>) -> QuantityResult<Self> {
        let rhs = self.operand_value(rhs.into())?;
        if rhs == 0.0 {
            return Err(QuantityError::DivisionByZero);
        }
        Ok(Self::of(self.kind, (self.value / rhs).floor()))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Checked equality under the operand contract (same-kind or number).
    ///
    /// # Errors
    /// Returns `TypeMismatch` for a `Quantity` operand of a different kind.
    #[inline]
    pub fn checked_eq(&self, rhs: impl Into<Operand>) -> QuantityResult<bool> {
        Ok(self.value == self.operand_value(rhs.into())?)
    }

    /// Checked less-than under the operand contract.
    #[inline]
    pub fn checked_lt(&self, rhs: impl Into<Operand>) -> QuantityResult<bool> {
        Ok(self.value < self.operand_value(rhs.into())?)
    }

    /// Checked greater-than under the operand contract.
    #[inline]
    pub fn checked_gt(&self, rhs: impl Into<Operand>) -> QuantityResult<bool> {
        Ok(self.value > self.operand_value(rhs.into())?)
    }

    /// Checked less-than-or-equal under the operand contract.
    #[inline]
    pub fn checked_le(&self, rhs: impl Into<Operand>) -> QuantityResult<bool> {
        Ok(self.value <= self.operand_value(rhs.into())?)
    }

    /// Checked greater-than-or-equal under the operand contract.
    #[inline]
    pub fn checked_ge(&self, rhs: impl Into<Operand>) -> QuantityResult<bool> {
        Ok(self.value >= self.operand_value(rhs.into())?)
    }

    // ========================================================================
    // Conversion
    // ========================================================================

    /// Convert to another unit, given as a long name (`"gigabyte"`) or a
    /// short symbol (`"gb"`, case-insensitive).
    ///
    /// # Errors
    /// Returns `InvalidUnit` when the string matches neither; the error
    /// message enumerates the valid short symbols.
    ///
    /// # Example
    /// ```
    /// use storage_units::prelude::*;
    ///
    /// let q = Quantity::new(UnitKind::Byte, 2048.0).unwrap();
    /// assert_eq!(q.convert("kb").unwrap().value(), 2.048);
    /// ```
    pub fn convert(&self, target_unit: &str) -> QuantityResult<Self> {
        let target: UnitKind = target_unit.parse()?;
        let rate = self.kind.rate_to(target);
        tracing::trace!(
            "converting {} {} to {} (rate {})",
            self.value,
            self.kind,
            target,
            rate
        );
        Ok(Self::of(target, self.value * rate))
    }
}

// ============================================================================
// Operator Sugar
// ============================================================================

// Infallible operators for ergonomics (panic on kind mismatch or zero
// divisor - use checked_* in production)
impl<T: Into<Operand>> Add<T> for Quantity {
    type Output = Self;

    #[inline]
    fn add(self, rhs: T) -> Self::Output {
        self.checked_add(rhs).expect("quantity addition failed")
    }
}

impl<T: Into<Operand>> Sub<T> for Quantity {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: T) -> Self::Output {
        self.checked_sub(rhs).expect("quantity subtraction failed")
    }
}

impl<T: Into<Operand>> Mul<T> for Quantity {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self::Output {
        self.checked_mul(rhs).expect("quantity multiplication failed")
    }
}

impl<T: Into<Operand>> Div<T> for Quantity {
    type Output = Self;

    #[inline]
    fn div(self, rhs: T) -> Self::Output {
        self.checked_div(rhs).expect("quantity division failed")
    }
}

// Cross-kind values compare as unequal/unordered rather than erroring; the
// checked_* methods carry the strict operand contract. The formatting flag
// never participates in equality.
impl PartialEq for Quantity {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.value == other.value
    }
}

impl PartialEq<f64> for Quantity {
    #[inline]
    fn eq(&self, other: &f64) -> bool {
        self.value == *other
    }
}

impl PartialOrd for Quantity {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.kind == other.kind {
            self.value.partial_cmp(&other.value)
        } else {
            None
        }
    }
}

impl PartialOrd<f64> for Quantity {
    #[inline]
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        self.value.partial_cmp(other)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// Render a value as `<int>.<frac>` with comma thousands separators on the
/// integer part and the fractional part rounded to two decimal digits, with
/// the trailing zero trimmed (`0.50` renders as `.5`, zero as `.0`).
///
/// Rounding the fractional part never carries into the integer part: 2.996
/// renders as `2.0`. The integer digits are grouped from the value's decimal
/// rendering, so magnitude is not limited by any integer width.
fn format_grouped(value: f64) -> String {
    let int_part = value.trunc();
    let frac_part = (value - int_part).abs();

    let digits = format!("{:.0}", int_part);
    let (sign, digits) = match digits.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", digits.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    grouped.push_str(sign);
    for (i, ch) in digits.char_indices() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let rounded = format!("{:.2}", frac_part);
    let frac_digits = rounded.split('.').nth(1).unwrap_or("0");
    let frac_digits = frac_digits.trim_end_matches('0');

    grouped.push('.');
    grouped.push_str(if frac_digits.is_empty() {
        "0"
    } else {
        frac_digits
    });
    grouped
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.formatted {
            write!(f, "{} {}", format_grouped(self.value), self.kind.symbol())
        } else {
            write!(f, "{} {}", self.value, self.kind.symbol())
        }
    }
}

impl fmt::Debug for Quantity {
    /// Reproduces constructor shape: `Kilobyte(2.5)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self.kind, self.value)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Quantity {
    type Err = QuantityError;

    /// Parse from a `"<value> <unit>"` string, e.g. `"2.5 KB"` or
    /// `"300 byte"`. The unit token follows [`UnitKind`] parsing rules.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (value_str, unit_str) = s
            .split_once(char::is_whitespace)
            .ok_or_else(|| QuantityError::InvalidUnit(s.to_string()))?;

        let value: f64 = value_str
            .parse()
            .map_err(|_| QuantityError::InvalidArgument)?;
        let kind: UnitKind = unit_str.trim_start().parse()?;

        Self::new(kind, value)
    }
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn add_self_doubles(n in -1.0e12..1.0e12f64) {
            let q = Quantity::new(UnitKind::Terabyte, n).unwrap();
            prop_assert_eq!(q.checked_add(&q).unwrap().value(), 2.0 * n);
        }

        #[test]
        fn sub_self_is_zero(n in -1.0e12..1.0e12f64) {
            let q = Quantity::new(UnitKind::Terabyte, n).unwrap();
            prop_assert_eq!(q.checked_sub(&q).unwrap().value(), 0.0);
        }

        #[test]
        fn bits_are_an_eighth(n in -1.0e12..1.0e12f64) {
            // division by 8 only shifts the exponent, so it is exact
            let q = Quantity::from_bits(UnitKind::Byte, n).unwrap();
            prop_assert_eq!(q.value() * 8.0, n);
        }

        #[test]
        fn conversion_roundtrip_is_close(n in 1.0e-6..1.0e12f64) {
            let q = Quantity::new(UnitKind::Megabyte, n).unwrap();
            let back = q.convert("gb").unwrap().convert("mb").unwrap();
            let relative = (back.value() - n).abs() / n;
            prop_assert!(relative < 1.0e-12);
        }

        #[test]
        fn converted_value_scales_by_rate(n in -1.0e9..1.0e9f64) {
            let q = Quantity::new(UnitKind::Gigabyte, n).unwrap();
            prop_assert_eq!(q.convert("megabyte").unwrap().value(), n * 1000.0);
        }
    }
}
