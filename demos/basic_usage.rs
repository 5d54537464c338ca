// ============================================================================
// Basic Usage Example
// ============================================================================

use digital_units::prelude::*;
use digital_units::scale::{Kibi, Mega};

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Digital Units Example ===\n");

    // Literals carry their scale; the default representation is i64
    let page = digital!(4 KiB);
    let disk = digital!(2 TB);
    let mask = digital!(0o644 B as u16);
    println!("Page size: {}", page);
    println!("Disk size: {}", disk);
    println!("Octal literal: {}", mask);

    // Mixed-scale comparison and arithmetic meet in the common scale
    println!("\n=== Mixed Scales ===");
    println!("1 KB < 1 KiB: {}", digital!(1 KB) < digital!(1 KiB));
    println!("1 KB + 1 KiB = {}", digital!(1 KB) + digital!(1 KiB));
    println!("Pages on disk: {}", disk / page);

    // Explicit conversion truncates, lossless conversion is checked at compile time
    println!("\n=== Conversions ===");
    let disk_gib: Gibibytes = disk.convert();
    let page_bytes = Bytes::from_quantity(page);
    println!("{} as GiB (truncated): {}", disk, disk_gib);
    println!("{} as bytes (lossless): {}", page, page_bytes);
    let precise: Quantity<f64, Kibi> = convert(digital!(1 MB));
    println!("1 MB as fractional KiB: {}", precise);

    // Directed rounding
    println!("\n=== Rounding ===");
    let odd = digital!(1_500 B);
    println!("floor({}) = {}", odd, floor::<Kilobytes>(odd));
    println!("ceil({})  = {}", odd, ceil::<Kilobytes>(odd));
    println!("round({}) = {}", odd, round::<Kilobytes>(odd));
    println!("abs({}) = {}", digital!(-3 MiB), abs(digital!(-3 MiB)));

    // Text round trip
    println!("\n=== Parsing ===");
    for input in ["512 MB", "0x1000 B", "1.5 MB", "4 MiB"] {
        match input.parse::<Quantity<f64, Mega>>() {
            Ok(quantity) => println!("{:>10} -> {}", input, quantity),
            Err(error) => println!("{:>10} -> error: {}", input, error),
        }
    }

    // Decimal export for reporting
    println!("\n=== Decimal Export ===");
    match digital!(3 EiB).to_decimal() {
        Ok(bytes) => println!("3 EiB = {} bytes", bytes),
        Err(error) => println!("3 EiB: {}", error),
    }

    println!("\nExample completed!");
}
