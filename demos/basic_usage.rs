// ============================================================================
// Basic Usage Example
// ============================================================================

use storage_units::prelude::*;

fn main() {
    // Surface the trace events emitted by conversions
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    println!("=== Storage Units Example ===\n");

    let disk = Quantity::new(UnitKind::Gigabyte, 512.0).unwrap();
    let media = Quantity::new(UnitKind::Gigabyte, 128.5).unwrap();
    let photos = Quantity::from_bits(UnitKind::Gigabyte, 96.0).unwrap();

    println!("Disk capacity: {}", disk);
    println!("Media library: {}", media);
    println!("Photos (from a bit count): {}", photos);

    println!("\n=== Arithmetic ===");
    let used = media.checked_add(&photos).unwrap();
    let free = disk.checked_sub(&used).unwrap();
    println!("Used:  {}", used);
    println!("Free:  {}", free);
    println!("Half:  {}", free.checked_div(2).unwrap());

    println!("\n=== Comparison ===");
    println!("used < free:  {}", used.checked_lt(&free).unwrap());
    println!("free > 256:   {}", free.checked_gt(256).unwrap());

    println!("\n=== Conversion ===");
    let in_mb = free.convert("mb").unwrap();
    let in_tb = free.convert("terabyte").unwrap();
    println!("Free in megabytes: {}", in_mb);
    println!("Free in terabytes: {}", in_tb.with_formatting(false));

    println!("\n=== Errors ===");
    let other = Quantity::new(UnitKind::Megabyte, 1.0).unwrap();
    println!("cross-kind add: {}", disk.checked_add(other).unwrap_err());
    println!("zero divisor:   {}", disk.checked_div(0).unwrap_err());
    println!("unknown unit:   {}", disk.convert("bogus").unwrap_err());
}
