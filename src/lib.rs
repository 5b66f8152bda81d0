//! `pstack` provides [`CheckpointStack`], a last-in-first-out stack on which labelled
//! remember points can be registered, in order to later inspect or discard everything
//! pushed since that point. This is useful for backtracking: parsers, undo buffers or
//! exploratory searches.
//!
//! ```
//! use pstack::CheckpointStack;
//!
//! let mut stack = CheckpointStack::new();
//! stack.push('A');
//! stack.push('B');
//! stack.remember_point(String::from("p")).unwrap();
//! stack.push('C');
//! stack.push('D');
//!
//! assert_eq!(stack.pop_till("p").unwrap(), vec!['D', 'C']);
//! assert_eq!(stack.pop_all(), vec!['B', 'A']);
//! ```

mod arena;
pub mod error;
pub mod log;
mod stack;

pub use error::{ErrKind, Error, PartialDrain};
pub use stack::CheckpointStack;
