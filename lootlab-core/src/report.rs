//! Per-table outcome report: everything a display or export consumer needs.

use serde::{Deserialize, Serialize};

use crate::domain::{LootTable, SamplingMode};
use crate::prob::{
    at_least_once_with_replacement, at_least_once_without_replacement, binomial_pmf, normalize,
    ProbError,
};

/// Computed outcome for one table entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryOutcome {
    pub name: String,
    /// Single-draw probability from normalization.
    pub p: f64,
    /// P(at least one hit in `draws`) under the report's sampling mode.
    pub at_least_once: f64,
    /// Expected hit count `draws * p`. The same approximation serves both
    /// sampling modes, as in the original calculator.
    pub expected_count: f64,
    /// Full binomial PMF over `k = 0..=draws`.
    pub pmf: Vec<f64>,
}

/// Outcome report for a whole table at a fixed draw count and sampling mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableReport {
    pub draws: u32,
    pub mode: SamplingMode,
    pub entries: Vec<EntryOutcome>,
}

impl TableReport {
    /// Runs the full pipeline: normalize, per-entry at-least-once under
    /// `mode`, and per-entry PMF.
    ///
    /// An empty table produces an empty report. Entry order matches the
    /// table. The table itself is never mutated; every call recomputes from
    /// the snapshot it is given.
    pub fn compute(
        table: &LootTable,
        draws: u32,
        mode: SamplingMode,
    ) -> Result<Self, ProbError> {
        let probs = normalize(table)?;

        let mut entries = Vec::with_capacity(probs.len());
        for normalized in probs {
            let at_least_once = match mode {
                SamplingMode::WithReplacement => {
                    at_least_once_with_replacement(normalized.p, draws)?
                }
                SamplingMode::WithoutReplacement => {
                    at_least_once_without_replacement(normalized.p, draws, table.len())?
                }
            };
            let pmf = binomial_pmf(normalized.p, draws)?;
            entries.push(EntryOutcome {
                p: normalized.p,
                at_least_once,
                expected_count: f64::from(draws) * normalized.p,
                pmf,
                name: normalized.name,
            });
        }

        Ok(TableReport {
            draws,
            mode,
            entries,
        })
    }
}
