// ============================================================================
// Literal Module
// Compile-time construction of quantities from literals
// ============================================================================
//
// This module provides:
// - parse_integer: const digit parsing for decimal, hex, octal and binary
// - integer/floating: const validators used by the `digital!` macro
// - digital!: quantity literals such as `digital!(4 KiB)`
//
// Design principles:
// - Every literal is checked in a const context, bad input fails the build

mod macros;
mod parser;

pub use parser::{floating, integer, is_floating, parse_integer, radix, LiteralError, Radix};
