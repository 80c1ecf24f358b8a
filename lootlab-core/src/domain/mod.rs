//! Domain types: entries, tables, and sampling modes.

pub mod entry;
pub mod table;

pub use entry::{Entry, EntryMode, NormalizedEntry};
pub use table::{LootTable, SamplingMode, TableError};
