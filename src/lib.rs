//! # Linear Collections
//!
//! From-scratch implementations of two linear containers:
//!
//! - [`Deque`] — a double-ended queue over a growable circular buffer,
//!   with insertion and removal at both ends.
//! - [`Stack`] — a LIFO stack over a growable array, with top access plus
//!   removal from the bottom or at an arbitrary position.
//!
//! Both containers report failures as [`CollectionError`] values instead of
//! panicking: every removal or peek returns a [`Result`], and a failed call
//! leaves the container untouched.
//!
//! ## Quick Example
//!
//! ```
//! use linear_collections::{Deque, Result};
//!
//! fn main() -> Result<()> {
//!     let mut deque = Deque::new();
//!     deque.add_first(1);
//!     deque.add_last(2);
//!     assert_eq!(deque.remove_first()?, 1);
//!     Ok(())
//! }
//! ```
//!
//! ## Running the Walkthroughs
//!
//! ```bash
//! cargo run --bin deque_walkthrough
//! cargo run --bin stack_walkthrough
//! ```

pub mod deque;
pub mod error;
pub mod stack;

pub use deque::Deque;
pub use error::{CollectionError, Result};
pub use stack::Stack;
