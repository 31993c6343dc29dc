//! Chi-square probabilities and critical values.
//!
//! Polynomial and series approximations for the standard normal and
//! chi-square distributions, plus a bisection search for the critical
//! chi-square value that produces a target upper-tail probability.
//!
//! # References
//!
//! - Ibbetson, D. (1963) Algorithm 209: Gauss. CACM 6(10), p. 616
//! - Hill, I. D. & Pike, M. C. (1967) Algorithm 299: Chi-squared integral.
//!   CACM 10(4), p. 243 (with the rounding remark in ACM TOMS, June 1985)
//!
//! # Example
//!
//! ```
//! use arbol::stats::chi_square::{chi_square_tail_probability, ChiSquareTable};
//!
//! let table = ChiSquareTable::new();
//! let critical = table.critical_value(0.05, 1);
//! assert!((critical - 3.841).abs() < 1e-3);
//! assert!((chi_square_tail_probability(critical, 1) - 0.05).abs() < 1e-5);
//! ```

use dashmap::DashMap;

/// Largest exponent magnitude evaluated directly with `exp`.
const BIG_X: f64 = 20.0;

/// ln(sqrt(pi))
const LOG_SQRT_PI: f64 = 0.572_364_942_924_700_087_071_713_5;

/// 1 / sqrt(pi)
const I_SQRT_PI: f64 = 0.564_189_583_547_756_286_948_079_5;

/// |z| at and beyond which the normal approximation saturates.
const Z_MAX: f64 = 6.0;

/// Stop width of the critical-value bisection.
pub const CHI_EPSILON: f64 = 1e-6;

/// Upper bound of the critical-value search interval.
pub const CHI_MAX: f64 = 99_999.0;

/// Probability that a standard normal variable lies within `(-|z|, |z|)`.
///
/// Six-digit polynomial approximation, meaningful for `|z| < 6`. For
/// `|z| >= 6` the result saturates at exactly `1.0`.
#[must_use]
pub fn normal_two_sided(z: f64) -> f64 {
    if z == 0.0 {
        return 0.0;
    }

    let mut y = 0.5 * z.abs();
    if y >= Z_MAX * 0.5 {
        1.0
    } else if y < 1.0 {
        let w = y * y;
        ((((((((0.000_124_818_987 * w - 0.001_075_204_047) * w + 0.005_198_775_019) * w
            - 0.019_198_292_004)
            * w
            + 0.059_054_035_642)
            * w
            - 0.151_968_751_364)
            * w
            + 0.319_152_932_694)
            * w
            - 0.531_923_007_300)
            * w
            + 0.797_884_560_593)
            * y
            * 2.0
    } else {
        y -= 2.0;
        (((((((((((((-0.000_045_255_659 * y + 0.000_152_529_290) * y - 0.000_019_538_132)
            * y
            - 0.000_676_904_986)
            * y
            + 0.001_390_604_284)
            * y
            - 0.000_794_620_820)
            * y
            - 0.002_034_254_874)
            * y
            + 0.006_549_791_214)
            * y
            - 0.010_557_625_006)
            * y
            + 0.011_630_447_319)
            * y
            - 0.009_279_453_341)
            * y
            + 0.005_353_579_108)
            * y
            - 0.002_141_268_741)
            * y
            + 0.000_535_310_849)
            * y
            + 0.999_936_657_524
    }
}

/// Cumulative probability `P(Z <= z)` of the standard normal distribution.
///
/// Saturates to `1.0` for `z >= 6` and `0.0` for `z <= -6`.
#[must_use]
pub fn normal_cdf(z: f64) -> f64 {
    let x = normal_two_sided(z);
    if z > 0.0 {
        (x + 1.0) * 0.5
    } else {
        (1.0 - x) * 0.5
    }
}

/// `exp(x)` flushed to zero below `-BIG_X`.
fn ex(x: f64) -> f64 {
    if x < -BIG_X {
        0.0
    } else {
        x.exp()
    }
}

/// Probability that a chi-square variable with `df` degrees of freedom
/// exceeds `x`.
///
/// Returns `1.0` when `x <= 0` or `df < 1`: with no evidence the null
/// hypothesis can never be rejected. Once `x / 2` reaches `BIG_X` the
/// series is summed in the log domain so `exp` cannot overflow.
#[must_use]
pub fn chi_square_tail_probability(x: f64, df: usize) -> f64 {
    if x <= 0.0 || df < 1 {
        return 1.0;
    }

    let a = 0.5 * x;
    let even = df % 2 == 0;
    let y = if df > 1 { ex(-a) } else { 0.0 };
    let s = if even {
        y
    } else {
        2.0 * normal_cdf(-x.sqrt())
    };

    if df <= 2 {
        return s.clamp(0.0, 1.0);
    }

    let limit = 0.5 * (df as f64 - 1.0);
    let mut z = if even { 1.0 } else { 0.5 };
    let tail = if a >= BIG_X {
        let mut e = if even { 0.0 } else { LOG_SQRT_PI };
        let c = a.ln();
        let mut sum = s;
        while z <= limit {
            e += z.ln();
            sum += ex(c * z - a - e);
            z += 1.0;
        }
        sum
    } else {
        let mut e = if even { 1.0 } else { I_SQRT_PI / a.sqrt() };
        let mut c = 0.0;
        while z <= limit {
            e *= a / z;
            c += e;
            z += 1.0;
        }
        c * y + s
    };

    tail.clamp(0.0, 1.0)
}

/// Critical chi-square value whose upper-tail probability is `p`, without
/// consulting any cache.
///
/// Bisection over `[0, CHI_MAX]` until the bracket is narrower than
/// `CHI_EPSILON`; relies on `chi_square_tail_probability` decreasing in `x`.
/// `p <= 0` yields `CHI_MAX` and `p >= 1` yields `0`.
#[must_use]
pub fn critical_value_uncached(p: f64, df: usize) -> f64 {
    if p <= 0.0 {
        return CHI_MAX;
    }
    if p >= 1.0 {
        return 0.0;
    }

    let mut min_chisq = 0.0;
    let mut max_chisq = CHI_MAX;
    let mut chisq = (df as f64 / p.sqrt()).min(CHI_MAX);
    while max_chisq - min_chisq > CHI_EPSILON {
        if chi_square_tail_probability(chisq, df) < p {
            max_chisq = chisq;
        } else {
            min_chisq = chisq;
        }
        chisq = (max_chisq + min_chisq) * 0.5;
    }
    chisq
}

/// Memoized critical chi-square values keyed by `(p, df)`.
///
/// Safe to share across threads (wrap it in an `Arc`). Entries are never
/// evicted. Two threads missing on the same key both compute the value and
/// the last insert wins; the computation is pure, so both values are equal.
#[derive(Debug, Default)]
pub struct ChiSquareTable {
    values: DashMap<(u64, usize), f64>,
}

impl ChiSquareTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: DashMap::new(),
        }
    }

    /// Critical chi-square value for upper-tail probability `p` at `df`
    /// degrees of freedom.
    ///
    /// Boundary probabilities (`p <= 0`, `p >= 1`) are answered directly and
    /// never stored.
    pub fn critical_value(&self, p: f64, df: usize) -> f64 {
        if p <= 0.0 || p >= 1.0 {
            return critical_value_uncached(p, df);
        }

        let key = (p.to_bits(), df);
        if let Some(value) = self.values.get(&key) {
            return *value;
        }

        // computed outside the shard lock
        let value = critical_value_uncached(p, df);
        self.values.insert(key, value);
        value
    }

    /// Number of cached entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when nothing has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
#[path = "chi_square_tests.rs"]
mod tests;
