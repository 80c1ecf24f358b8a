//! Full binomial outcome distribution: P(exactly k hits in n draws).

use super::{check_probability, ProbError};

/// Hard bound on the draw count, to keep the `n + 1`-element PMF allocation
/// and its computation within sane limits.
pub const MAX_DRAWS: u32 = 100_000;

/// Above this draw count the coefficient recurrence starts losing precision
/// and the log-space path takes over.
const RECURRENCE_LIMIT: u32 = 500;

/// Probability mass function of the binomial distribution.
///
/// Returns `n + 1` values indexed by `k = 0..=n`, summing to 1 within
/// floating-point tolerance. Small draw counts use the incremental
/// coefficient recurrence `C(n,k) = C(n,k-1) * (n-k+1) / k`; larger counts
/// switch to log-space (`ln Gamma`) and re-exponentiate, which stays stable
/// for any `n` up to [`MAX_DRAWS`].
pub fn binomial_pmf(p: f64, n: u32) -> Result<Vec<f64>, ProbError> {
    check_probability("p", p)?;
    if n > MAX_DRAWS {
        return Err(ProbError::RangeExceeded {
            draws: n,
            max: MAX_DRAWS,
        });
    }

    let len = n as usize + 1;

    // Degenerate trials: all mass at one end.
    if p == 0.0 {
        let mut pmf = vec![0.0; len];
        pmf[0] = 1.0;
        return Ok(pmf);
    }
    if p == 1.0 {
        let mut pmf = vec![0.0; len];
        pmf[len - 1] = 1.0;
        return Ok(pmf);
    }

    if n <= RECURRENCE_LIMIT {
        Ok(pmf_recurrence(p, n))
    } else {
        Ok(pmf_log_space(p, n))
    }
}

fn pmf_recurrence(p: f64, n: u32) -> Vec<f64> {
    let n_f = f64::from(n);
    let mut pmf = Vec::with_capacity(n as usize + 1);
    let mut coeff = 1.0_f64;
    for k in 0..=n {
        if k > 0 {
            coeff = coeff * (n_f - f64::from(k - 1)) / f64::from(k);
        }
        let k_f = f64::from(k);
        pmf.push(coeff * p.powf(k_f) * (1.0 - p).powf(n_f - k_f));
    }
    pmf
}

fn pmf_log_space(p: f64, n: u32) -> Vec<f64> {
    let n_f = f64::from(n);
    let ln_p = p.ln();
    let ln_q = (-p).ln_1p();
    let ln_n_factorial = ln_gamma(n_f + 1.0);

    (0..=n)
        .map(|k| {
            let k_f = f64::from(k);
            let ln_coeff =
                ln_n_factorial - ln_gamma(k_f + 1.0) - ln_gamma(n_f - k_f + 1.0);
            (ln_coeff + k_f * ln_p + (n_f - k_f) * ln_q).exp()
        })
        .collect()
}

/// Lanczos approximation for ln(Gamma(x)), g=7, n=9.
///
/// Only called with factorial arguments (x >= 1), so the reflection branch
/// for small x is unnecessary.
fn ln_gamma(x: f64) -> f64 {
    #[allow(clippy::excessive_precision)]
    const COEFFICIENTS: [f64; 9] = [
        0.99999999999980993,
        676.5203681218851,
        -1259.1392167224028,
        771.32342877765313,
        -176.61502916214059,
        12.507343278686905,
        -0.13857109526572012,
        9.9843695780195716e-6,
        1.5056327351493116e-7,
    ];
    const G: f64 = 7.0;

    debug_assert!(x >= 1.0, "ln_gamma domain: x >= 1, got {x}");

    let x = x - 1.0;
    let mut sum = COEFFICIENTS[0];
    for (i, &c) in COEFFICIENTS.iter().enumerate().skip(1) {
        sum += c / (x + i as f64);
    }

    let t = x + G + 0.5;
    let log_sqrt_2pi = (2.0 * std::f64::consts::PI).sqrt().ln();

    log_sqrt_2pi + (t.ln() * (x + 0.5)) - t + sum.ln()
}
