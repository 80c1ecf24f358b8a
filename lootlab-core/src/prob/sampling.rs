//! At-least-once probabilities under the two sampling disciplines.

use super::{check_probability, ProbError};

/// P(item appears at least once in `n` independent draws): `1 - (1-p)^n`.
///
/// Exact under with-replacement semantics. `n = 0` yields 0 for any p.
pub fn at_least_once_with_replacement(p: f64, n: u32) -> Result<f64, ProbError> {
    check_probability("p", p)?;
    Ok(1.0 - (1.0 - p).powf(f64::from(n)))
}

/// P(item appears at least once in `n` draws without replacement), using
/// a shrinking-population heuristic — NOT an exact hypergeometric model.
///
/// Each draw `k` removes one entry from the pool, so the per-draw
/// probability is scaled up by `T / (T - k)` (clamped to 1) before being
/// folded into the running miss product. `table_size` is the count of
/// distinct entries, standing in for the population size.
///
/// `n == table_size` is allowed and exhausts the table; `n > table_size`
/// would drive the denominator to zero and is rejected with
/// [`ProbError::InvalidDrawCount`].
pub fn at_least_once_without_replacement(
    p: f64,
    n: u32,
    table_size: usize,
) -> Result<f64, ProbError> {
    check_probability("p", p)?;
    if table_size == 0 {
        return Err(ProbError::InvalidParameter {
            name: "table_size",
            value: 0.0,
        });
    }
    if n as usize > table_size {
        return Err(ProbError::InvalidDrawCount {
            draws: n,
            table_size,
        });
    }

    let t = table_size as f64;
    let mut miss = 1.0;
    for k in 0..n {
        let adjusted = (p * t / (t - f64::from(k))).min(1.0);
        miss *= (1.0 - adjusted).max(0.0);
    }
    Ok(1.0 - miss)
}
