//! LootTable — a validated, immutable snapshot of an entry list.
//!
//! All validation happens once at construction. Downstream computations
//! (normalization, sampling models, the roller) take the table by shared
//! reference and never mutate it, so a table can be handed to any number of
//! concurrent callers without coordination.

use serde::{Deserialize, Serialize};

use super::entry::{Entry, EntryMode};

/// Rejected at table ingestion, before any probability is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    #[error("table mixes weighted and ranged entries (first mismatch at entry {index}, {name:?})")]
    MixedModes { index: usize, name: String },

    #[error("entry {name:?} has negative weight {weight}")]
    NegativeWeight { name: String, weight: f64 },

    #[error("entry {name:?} has non-finite weight {weight}")]
    NonFiniteWeight { name: String, weight: f64 },

    #[error("entry {name:?} has inverted range [{lo}, {hi}]")]
    InvertedRange { name: String, lo: i64, hi: i64 },
}

/// A homogeneous list of loot entries.
///
/// Invariants held after construction:
/// - every entry uses the same representation ([`EntryMode`])
/// - weights are finite and non-negative
/// - ranges satisfy `lo <= hi` (width >= 1)
///
/// An empty table is valid; entry names need not be unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LootTable {
    entries: Vec<Entry>,
}

impl LootTable {
    pub fn new(entries: Vec<Entry>) -> Result<Self, TableError> {
        let mode = entries.first().map(Entry::mode);
        for (index, entry) in entries.iter().enumerate() {
            match entry {
                Entry::Weighted { name, weight } => {
                    if !weight.is_finite() {
                        return Err(TableError::NonFiniteWeight {
                            name: name.clone(),
                            weight: *weight,
                        });
                    }
                    if *weight < 0.0 {
                        return Err(TableError::NegativeWeight {
                            name: name.clone(),
                            weight: *weight,
                        });
                    }
                }
                Entry::Ranged { name, range: [lo, hi] } => {
                    if lo > hi {
                        return Err(TableError::InvertedRange {
                            name: name.clone(),
                            lo: *lo,
                            hi: *hi,
                        });
                    }
                }
            }
            if Some(entry.mode()) != mode {
                return Err(TableError::MixedModes {
                    index,
                    name: entry.name().to_string(),
                });
            }
        }
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Representation used by the entries, or `None` for an empty table.
    pub fn mode(&self) -> Option<EntryMode> {
        self.entries.first().map(Entry::mode)
    }
}

impl<'de> Deserialize<'de> for LootTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        LootTable::new(entries).map_err(serde::de::Error::custom)
    }
}

/// How draws interact with the table population.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Each draw is independent; the table never changes between draws.
    #[serde(alias = "with")]
    WithReplacement,

    /// A drawn entry is removed from the pool for subsequent draws.
    #[serde(alias = "without")]
    WithoutReplacement,
}

impl std::str::FromStr for SamplingMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "with" | "with_replacement" => Ok(SamplingMode::WithReplacement),
            "without" | "without_replacement" => Ok(SamplingMode::WithoutReplacement),
            other => Err(format!(
                "unknown sampling mode {other:?} (expected \"with\" or \"without\")"
            )),
        }
    }
}

impl std::fmt::Display for SamplingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SamplingMode::WithReplacement => write!(f, "with"),
            SamplingMode::WithoutReplacement => write!(f, "without"),
        }
    }
}
