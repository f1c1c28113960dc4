use bitmask::{
    BitRange, Bitmask32, Bitmask64, BitmaskError, difference, get_range, intersect, is_subset,
    merge, popcount, scan_forward, scan_reverse, set, set_bits, try_write_range, write_range,
};
use log::{debug, info, warn};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== Bitmask Examples ===\n");

    // Example 1: Single bits, scans and ranges
    example_single_bits();

    // Example 2: Set algebra
    example_set_algebra();

    // Example 3: Wrapper records and checked writes
    if let Err(e) = example_records() {
        warn!("checked example failed: {e}");
    }
}

fn example_single_bits() {
    info!("Example 1: single bits, scans and ranges");

    let mut mask = 0u64;
    for b in [0, 3, 5] {
        set(&mut mask, b);
        debug!("after set({b}): {mask:#066b}");
    }

    println!("  Mask:          {mask:#b}");
    println!("  Popcount:      {}", popcount(mask));
    println!("  First set bit: {}", scan_forward(mask));
    println!("  Last set bit:  {}", scan_reverse(mask));

    write_range(&mut mask, 16, 23, 0xAB);
    debug!("after write_range: {mask:#x}");
    println!("  Bits 16..=23:  {:#x}", get_range(mask, 16, 23));

    print!("  Set bits:");
    for b in set_bits(mask) {
        print!(" {b}");
    }
    println!("\n");
}

fn example_set_algebra() {
    info!("Example 2: set algebra");

    const READ: u64 = 1 << 0;
    const WRITE: u64 = 1 << 1;
    const EXECUTE: u64 = 1 << 2;

    let user = READ | WRITE;
    let group = READ | EXECUTE;

    println!("  user | group: {:03b}", merge(user, group));
    println!("  user & group: {:03b}", intersect(user, group));
    println!("  user - group: {:03b}", difference(user, group));
    println!("  READ within user: {}", is_subset(READ, user));
    println!();
}

fn example_records() -> Result<(), BitmaskError> {
    info!("Example 3: wrapper records and checked writes");

    let mut wide = Bitmask64::new();
    wide.set(40);
    wide.set(64); // ignored
    println!("  Bitmask64 bits: {:?}", wide.iter().collect::<Vec<_>>());

    let mut narrow = Bitmask32::from_bits(0xF0);
    narrow.toggle(4);
    println!("  Bitmask32:      {narrow:#b}");

    let nibble = BitRange::new(8, 11)?;
    try_write_range(&mut wide.bits, nibble, 0x7)?;
    println!("  Nibble 8..=11:  {:#x}", get_range(wide.bits, 8, 11));

    match try_write_range(&mut wide.bits, nibble, 0x1F) {
        Ok(()) => println!("  unexpected write"),
        Err(e) => println!("  Rejected:       {e}"),
    }

    Ok(())
}
