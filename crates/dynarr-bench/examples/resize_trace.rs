//! Walks through the documented growth, insert and shrink scenarios with
//! resize events printed by `tracing-subscriber`.
//!
//! Run with `RUST_LOG=dynarr=trace` to include shrink decisions; the
//! default filter shows resizes only.

use dynarr::DynamicArray;
use tracing_subscriber::EnvFilter;

fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dynarr=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    println!("=== dynarr resize trace ===\n");

    let mut arr = DynamicArray::new();
    println!("new: {arr:#}");
    for v in 1..=5 {
        arr.append(v);
        println!("append({v}): {arr:#}");
    }

    if let Err(err) = arr.insert(2, 99) {
        eprintln!("insert failed: {err}");
        return;
    }
    println!("insert(2, 99): {arr:#}");

    while let Ok(v) = arr.pop() {
        println!("pop() -> {v}: {arr:#}");
    }

    match arr.pop() {
        Ok(v) => println!("unexpected value {v}"),
        Err(err) => println!("pop() on empty: {err}"),
    }
    match arr.get(0) {
        Ok(v) => println!("unexpected value {v}"),
        Err(err) => println!("get(0) on empty: {err}"),
    }

    tracing::info!(len = arr.len(), capacity = arr.capacity(), "done");
}
