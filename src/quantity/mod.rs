// ============================================================================
// Quantity Module
// The scale-tagged value type, its conversions and its operators
// ============================================================================
//
// This module provides:
// - Quantity<R, S>: raw count of representation R at scale S
// - convert / from_quantity: explicit and lossless scale conversion
// - std::ops and comparison impls across scales and representations
// - abs/floor/ceil/round: directed conversion helpers
// - Display/Debug/FromStr and the rust_decimal bridge
//
// Design principles:
// - Zero overhead: a Quantity is its raw value (repr(transparent))
// - Scale ratios are reduced at compile time, never at run time
// - Run-time arithmetic is unchecked, like the underlying scalar

mod conversion;
mod decimal;
mod ops;
mod rounding;
mod text;
mod value;

pub use conversion::{convert, QuantityType};
pub use ops::CommonQuantity;
pub use rounding::{abs, ceil, floor, round};
pub use value::Quantity;
