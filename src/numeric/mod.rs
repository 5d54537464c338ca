// ============================================================================
// Numeric Module
// Representation types, promotion rules and error types
// ============================================================================
//
// This module provides:
// - Representation: scalar types a quantity may store its count in
// - Integral: the subset supporting remainder
// - Promote/Promoted: the representation mixed operands combine in
// - DigitalError: error type for parsing and decimal conversion
//
// Design principles:
// - Representations are primitives, conversions are plain casts
// - Integral conversion runs in i128, floating conversion in f64

mod errors;
mod promotion;
mod representation;

pub use errors::{DigitalError, DigitalResult};
pub use promotion::{Promote, Promoted};
pub use representation::{Integral, Representation};
