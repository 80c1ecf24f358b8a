//! Randomized loot rolls: weighted sampling against cumulative spans.
//!
//! This is the concrete-outcome collaborator of the probability engine. It
//! shares [`Entry::span`] with the normalizer, so the rolled frequencies
//! converge on the computed probabilities. Callers supply the `Rng`; pass a
//! seeded `StdRng` for reproducible rolls.

use rand::Rng;

use crate::domain::{Entry, LootTable, SamplingMode};

/// Failure of a randomized roll.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RollError {
    /// The pool is empty or its spans sum to zero; there is nothing to draw.
    #[error("cannot draw from a pool with no remaining weight")]
    DegeneratePool,
}

/// Draws one index from `entries`, weighted by span.
///
/// A uniform draw in `[0, total)` walks the cumulative spans; zero-span
/// entries can never be selected. Empty or all-zero pools are rejected
/// instead of falling back to the last index.
pub fn pick_index<R: Rng + ?Sized>(entries: &[Entry], rng: &mut R) -> Result<usize, RollError> {
    let total: f64 = entries.iter().map(Entry::span).sum();
    if entries.is_empty() || total <= 0.0 {
        return Err(RollError::DegeneratePool);
    }

    let mut remaining = rng.gen::<f64>() * total;
    for (index, entry) in entries.iter().enumerate() {
        remaining -= entry.span();
        if remaining < 0.0 {
            return Ok(index);
        }
    }
    // Reachable only through accumulated rounding on the final span.
    Ok(entries.len() - 1)
}

/// Rolls up to `draws` names from the table.
///
/// Without replacement, each drawn entry leaves the pool; the roll stops
/// early once the pool is exhausted (no redraw semantics). A table with no
/// drawable weight at the outset is rejected.
pub fn roll_loot<R: Rng + ?Sized>(
    table: &LootTable,
    draws: u32,
    mode: SamplingMode,
    rng: &mut R,
) -> Result<Vec<String>, RollError> {
    let mut pool: Vec<Entry> = table.entries().to_vec();
    if pool.iter().map(Entry::span).sum::<f64>() <= 0.0 {
        return Err(RollError::DegeneratePool);
    }

    let mut loot = Vec::new();
    for _ in 0..draws {
        // Zero-span leftovers can exhaust the drawable weight before the
        // pool itself empties.
        if pool.is_empty() || pool.iter().map(Entry::span).sum::<f64>() <= 0.0 {
            break;
        }
        let index = pick_index(&pool, rng)?;
        loot.push(pool[index].name().to_string());
        if mode == SamplingMode::WithoutReplacement {
            pool.remove(index);
        }
    }
    Ok(loot)
}
