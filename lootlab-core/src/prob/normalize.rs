//! Normalization of raw entry weights into a probability distribution.

use crate::domain::{Entry, LootTable, NormalizedEntry};

use super::ProbError;

/// Converts a table's entries into probabilities summing to 1.
///
/// Per-entry weight is [`Entry::span`], so weighted and ranged tables go
/// through the same arithmetic. Output order and length match the input; an
/// empty table yields an empty vector.
///
/// A table whose spans sum to zero has no defined distribution and is
/// rejected with [`ProbError::DegenerateDistribution`] instead of dividing
/// through to NaN.
pub fn normalize(table: &LootTable) -> Result<Vec<NormalizedEntry>, ProbError> {
    if table.is_empty() {
        return Ok(Vec::new());
    }

    let total: f64 = table.entries().iter().map(Entry::span).sum();
    if total <= 0.0 {
        return Err(ProbError::DegenerateDistribution);
    }

    Ok(table
        .entries()
        .iter()
        .map(|entry| NormalizedEntry {
            name: entry.name().to_string(),
            p: entry.span() / total,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entry;

    fn weighted_table(weights: &[(&str, f64)]) -> LootTable {
        LootTable::new(
            weights
                .iter()
                .map(|&(name, weight)| Entry::Weighted {
                    name: name.into(),
                    weight,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn one_three_split() {
        let probs = normalize(&weighted_table(&[("a", 1.0), ("b", 3.0)])).unwrap();
        assert_eq!(probs.len(), 2);
        assert_eq!(probs[0].name, "a");
        assert!((probs[0].p - 0.25).abs() < 1e-9);
        assert_eq!(probs[1].name, "b");
        assert!((probs[1].p - 0.75).abs() < 1e-9);
    }

    #[test]
    fn d100_ranges_split_evenly() {
        let table = LootTable::new(vec![
            Entry::Ranged {
                name: "a".into(),
                range: [1, 50],
            },
            Entry::Ranged {
                name: "b".into(),
                range: [51, 100],
            },
        ])
        .unwrap();
        let probs = normalize(&table).unwrap();
        assert!((probs[0].p - 0.5).abs() < 1e-9);
        assert!((probs[1].p - 0.5).abs() < 1e-9);
    }

    #[test]
    fn empty_table_yields_empty_output() {
        let probs = normalize(&LootTable::new(vec![]).unwrap()).unwrap();
        assert!(probs.is_empty());
    }

    #[test]
    fn all_zero_weights_rejected() {
        let err = normalize(&weighted_table(&[("a", 0.0), ("b", 0.0)])).unwrap_err();
        assert_eq!(err, ProbError::DegenerateDistribution);
    }

    #[test]
    fn zero_weight_entry_gets_zero_probability() {
        let probs = normalize(&weighted_table(&[("a", 0.0), ("b", 2.0)])).unwrap();
        assert_eq!(probs[0].p, 0.0);
        assert!((probs[1].p - 1.0).abs() < 1e-9);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let probs = normalize(&weighted_table(&[
            ("a", 0.3),
            ("b", 7.0),
            ("c", 12.5),
            ("d", 1.0),
        ]))
        .unwrap();
        let sum: f64 = probs.iter().map(|e| e.p).sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[test]
    fn duplicate_names_are_preserved() {
        let probs = normalize(&weighted_table(&[("a", 1.0), ("a", 1.0)])).unwrap();
        assert_eq!(probs[0].name, probs[1].name);
        assert!((probs[0].p - 0.5).abs() < 1e-9);
    }
}
