// ============================================================================
// Quantity Module
// Storage amounts tagged with their unit kind
// ============================================================================
//
// This module provides:
// - Quantity: a floating-point value stored in its own unit
// - Operand: the number-or-same-kind right-hand-side contract
// - QuantityError: error types for quantity operations
//
// Design principles:
// - Values are immutable; every operation returns a new Quantity
// - All fallible operations return Result (panics only in operator sugar)
// - Cross-kind arithmetic is rejected, never auto-converted

mod errors;
mod value;

pub use errors::{QuantityError, QuantityResult};
pub use value::{Operand, Quantity};
