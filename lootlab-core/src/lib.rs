//! LootLab Core — probability engine for weighted selection tables.
//!
//! This crate contains the mathematical heart of the calculator:
//! - Domain types (entries, validated tables, sampling modes)
//! - Normalization of raw weights/ranges into a probability distribution
//! - At-least-once probabilities with and without replacement
//! - The full binomial outcome distribution per entry
//! - A seeded weighted roller for concrete loot draws
//!
//! Every computation is a pure function over an immutable table snapshot:
//! no I/O, no shared mutable state, and typed errors instead of NaN or
//! Infinity sentinels.

pub mod domain;
pub mod prob;
pub mod report;
pub mod roll;

pub use domain::{Entry, EntryMode, LootTable, NormalizedEntry, SamplingMode, TableError};
pub use prob::{
    at_least_once_with_replacement, at_least_once_without_replacement, binomial_pmf, normalize,
    ProbError,
};
pub use report::{EntryOutcome, TableReport};
pub use roll::{pick_index, roll_loot, RollError};
