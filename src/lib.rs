//! Linear-scan selection exercises over in-memory sequences.
//!
//! Five independent, pure operations:
//! - [`longest::longest_valid_string`]: longest candidate over an allowed alphabet
//!   with no two equal adjacent characters
//! - [`unique::first_unique`]: first item occurring exactly once
//! - [`nearest_min::nearest_minimum_distance`]: smallest gap between two
//!   occurrences of the minimum
//! - [`top_words::top_three_words`]: three most frequent words
//! - [`list::SinglyLinkedList::rotate_right`]: in-place right rotation
//!
//! Each either returns a value (possibly a "no answer" value) or fails with
//! [`ExerciseError::InvalidInput`] before doing any work.

pub mod error;
pub use error::{ExerciseError, Result};

pub mod longest;
pub use longest::longest_valid_string;

pub mod unique;
pub use unique::first_unique;

pub mod nearest_min;
pub use nearest_min::nearest_minimum_distance;

pub mod top_words;
pub use top_words::{top_k_words, top_three_words};

pub mod list;
pub use list::{ListNode, SinglyLinkedList};

pub mod fixtures;

pub mod check;

pub mod bench;
pub use bench::{BenchConfig, Benchmark};

pub mod report;
