//! # Canopy
//!
//! A balanced binary search tree with a full traversal suite, plus a set
//! of small, independent companion structures.
//!
//! ## Core: the tree
//!
//! [`Tree`] keeps the strict binary-search ordering invariant (left
//! subtree < node < right subtree, duplicates never stored). Construction
//! deduplicates, sorts, and builds the unique minimal-height shape;
//! insertion and removal are recursive descents that never rebalance;
//! [`Tree::rebalance`] rebuilds the whole tree from its in-order values.
//!
//! ## Companions
//!
//! Each of these is self-contained and shares no state with the tree:
//! [`hashmap::HashMap`] (string-keyed, chained, doubling resize),
//! [`list::LinkedList`] (singly linked, indexed edits),
//! [`knight::shortest_path`] (BFS over knight moves on an 8×8 board), and
//! [`sort::merge_sort`].
//!
//! ## Usage Example
//!
//! ```
//! use canopy::Tree;
//!
//! let mut tree = Tree::from_values(vec![1, 7, 4, 23, 8, 9]);
//! assert!(tree.is_balanced());
//! tree.insert(5);
//! assert_eq!(tree.values_in_order(), vec![&1, &4, &5, &7, &8, &9, &23]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod hashmap; // String-keyed chained hash map
pub mod knight; // Knight's-move shortest path
pub mod list; // Singly linked list
pub mod sort; // Merge sort
pub mod tree; // Binary search tree (the core)

// Re-exports for convenience
pub use hashmap::HashMap;
pub use knight::{shortest_path, Square};
pub use list::LinkedList;
pub use sort::merge_sort;
pub use tree::{Node, Tree};

use thiserror::Error;

/// Errors shared by the companion structures.
///
/// Not-found conditions (`find`, `height`, `depth`, `get`, `at`, ...) are
/// plain `Option` returns, not errors, so callers can tell "not present"
/// apart from a legitimate zero. Duplicate insertion into the tree and
/// removal of a missing value are defined no-ops.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A board coordinate fell outside the 8×8 board.
    #[error("square ({file}, {rank}) is outside the 8x8 board")]
    OffBoard {
        /// Horizontal coordinate that was requested.
        file: u8,
        /// Vertical coordinate that was requested.
        rank: u8,
    },

    /// An indexed list edit addressed a position past the permitted range.
    #[error("index {index} is out of bounds for a list of length {len}")]
    IndexOutOfBounds {
        /// Index that was requested.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
}
