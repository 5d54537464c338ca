// ============================================================================
// Scale Module
// Rational scale algebra and the compile-time scale catalog
// ============================================================================
//
// This module provides:
// - Factor: reduced positive rational with gcd-based division and common-unit
// - Scale / Ratio<NUM, DEN>: type-level scales checked at compile time
// - Identity, Kilo..Exa, Kibi..Exbi: the decimal and binary catalog
// - CommonScale: type-level deduction of the scale mixed operations use
//
// Design principles:
// - Scale relationships are computed in const contexts, never at run time
// - Intermediate products are cross-reduced to stay within u64

mod catalog;
mod factor;

pub use catalog::{
    factor_of_symbol, is_harmonic, symbol, Common, CommonScale, Exa, Exbi, Gibi, Giga, Identity,
    Kibi, Kilo, Mebi, Mega, Pebi, Peta, Ratio, Scale, Tebi, Tera, SYMBOLS,
};
pub use factor::{gcd, lcm, Factor};
