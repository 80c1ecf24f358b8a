//! Entry — one row of a loot table.
//!
//! An entry is either weight-based (`{"name": "Sword", "weight": 3}`) or
//! range-based (`{"name": "Sword", "range": [1, 50]}`, inclusive bounds in
//! d100 style). The JSON shapes above are the on-disk format; the untagged
//! serde representation keeps both readable without a type discriminator.

use serde::{Deserialize, Serialize};

/// A single loot-table row.
///
/// The two variants are never mixed within one table; homogeneity is
/// enforced by [`LootTable::new`](crate::domain::LootTable::new) at
/// ingestion rather than inferred from the first element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    /// Inclusive numeric range, e.g. `[1, 50]` on a d100 table.
    Ranged { name: String, range: [i64; 2] },

    /// Relative weight. A missing `weight` field deserializes as 0.
    Weighted {
        name: String,
        #[serde(default)]
        weight: f64,
    },
}

/// Which representation a table's entries use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryMode {
    Weighted,
    Ranged,
}

impl Entry {
    pub fn name(&self) -> &str {
        match self {
            Entry::Ranged { name, .. } | Entry::Weighted { name, .. } => name,
        }
    }

    pub fn mode(&self) -> EntryMode {
        match self {
            Entry::Ranged { .. } => EntryMode::Ranged,
            Entry::Weighted { .. } => EntryMode::Weighted,
        }
    }

    /// Effective weight: the `weight` field, or the range width `hi - lo + 1`.
    ///
    /// Both the normalizer and the roller draw against this value, so the
    /// two always agree on entry likelihoods.
    pub fn span(&self) -> f64 {
        match self {
            Entry::Ranged { range: [lo, hi], .. } => (hi - lo + 1) as f64,
            Entry::Weighted { weight, .. } => *weight,
        }
    }
}

/// Normalized entry: name plus probability in `[0, 1]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedEntry {
    pub name: String,
    pub p: f64,
}
