//! Deque walkthrough: insertion and removal at both ends.
//!
//! Run with: cargo run --bin deque_walkthrough

use linear_collections::{Deque, Result};

fn main() -> Result<()> {
    println!("=== Double-Ended Queue ===\n");

    let mut deque = Deque::new();

    deque.add_first(1);
    deque.add_last(2);
    println!("remove_first -> {}", deque.remove_first()?); // 1

    deque.add(3);
    println!("remove_last  -> {}", deque.remove_last()?); // 3

    println!("\n=== Key Points ===");
    println!("1. add_first/add_last insert at opposite ends");
    println!("2. add appends at the back, like add_last");
    println!("3. Removal from an empty deque returns an error, not a panic");

    Ok(())
}
