//! Stack walkthrough: top access plus bottom and positional removal.
//!
//! Run with: cargo run --bin stack_walkthrough

use linear_collections::{Result, Stack};

fn main() -> Result<()> {
    println!("=== Stack ===\n");

    let mut stack = Stack::new();

    stack.add(1);
    stack.add(3);
    stack.add(5);
    stack.add(2);
    stack.add(10);

    println!("peek         -> {}", stack.peek()?); // 10
    println!("pop          -> {}", stack.pop()?); // 10
    println!("peek         -> {}", stack.peek()?); // 2

    println!("remove_first -> {}", stack.remove_first()?); // 1
    println!("remove(1)    -> {}", stack.remove(1)?); // 5

    println!("\n=== Key Points ===");
    println!("1. The top is the most recently pushed element");
    println!("2. remove_first evicts the bottom, the oldest element");
    println!("3. remove(i) addresses the current sequence from the bottom");

    Ok(())
}
