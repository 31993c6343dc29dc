use super::*;
use std::sync::Arc;

// Reference critical values from standard chi-square tables.
const TABLE: &[(f64, usize, f64)] = &[
    (0.05, 1, 3.841),
    (0.01, 1, 6.635),
    (0.05, 2, 5.991),
    (0.05, 3, 7.815),
    (0.10, 4, 7.779),
    (0.01, 10, 23.209),
    (0.05, 30, 43.773),
];

#[test]
fn test_normal_two_sided_zero() {
    assert_eq!(normal_two_sided(0.0), 0.0);
}

#[test]
fn test_normal_two_sided_saturates_beyond_six() {
    assert_eq!(normal_two_sided(6.0), 1.0);
    assert_eq!(normal_two_sided(-7.5), 1.0);
    assert_eq!(normal_two_sided(100.0), 1.0);
}

#[test]
fn test_normal_two_sided_known_values() {
    // P(|Z| < 1.96) ~ 0.95
    assert!((normal_two_sided(1.96) - 0.950_004).abs() < 1e-5);
    // P(|Z| < 1) ~ 0.682689
    assert!((normal_two_sided(1.0) - 0.682_689).abs() < 1e-5);
}

#[test]
fn test_normal_cdf_symmetry() {
    for &z in &[0.3, 1.0, 1.5, 2.5, 4.0] {
        let sum = normal_cdf(z) + normal_cdf(-z);
        assert!((sum - 1.0).abs() < 1e-12, "z={z}: sum={sum}");
    }
    assert!((normal_cdf(0.0) - 0.5).abs() < 1e-12);
}

#[test]
fn test_normal_cdf_saturation() {
    assert_eq!(normal_cdf(6.0), 1.0);
    assert_eq!(normal_cdf(-6.0), 0.0);
}

#[test]
fn test_tail_probability_non_positive_x() {
    assert_eq!(chi_square_tail_probability(0.0, 3), 1.0);
    assert_eq!(chi_square_tail_probability(-2.0, 3), 1.0);
}

#[test]
fn test_tail_probability_zero_df() {
    assert_eq!(chi_square_tail_probability(5.0, 0), 1.0);
}

#[test]
fn test_tail_probability_two_df_is_exponential() {
    for &x in &[0.5_f64, 2.0, 5.991_464_547, 10.0] {
        let expected = (-x / 2.0).exp();
        assert!((chi_square_tail_probability(x, 2) - expected).abs() < 1e-12);
    }
}

#[test]
fn test_tail_probability_matches_table() {
    for &(p, df, x) in TABLE {
        let got = chi_square_tail_probability(x, df);
        assert!(
            (got - p).abs() < 5e-4,
            "P(chi2_{df} > {x}) = {got}, expected {p}"
        );
    }
}

#[test]
fn test_tail_probability_log_domain_branch_is_continuous() {
    // x / 2 crosses BIG_X at x = 40
    for &df in &[3, 4, 7, 20] {
        let below = chi_square_tail_probability(39.999_999, df);
        let at = chi_square_tail_probability(40.0, df);
        assert!((below - at).abs() < 1e-6, "df={df}: {below} vs {at}");
    }
}

#[test]
fn test_tail_probability_large_arguments_do_not_overflow() {
    for &df in &[3, 50, 301] {
        let p = chi_square_tail_probability(5_000.0, df);
        assert!(p.is_finite());
        assert!((0.0..=1.0).contains(&p));
    }
}

#[test]
fn test_tail_probability_decreasing_in_x() {
    for &df in &[1, 2, 3, 6, 15] {
        let mut previous = 1.0;
        for step in 1..200 {
            let x = f64::from(step) * 0.5;
            let p = chi_square_tail_probability(x, df);
            assert!(p <= previous + 1e-9, "df={df} x={x}");
            previous = p;
        }
    }
}

#[test]
fn test_critical_value_matches_table() {
    for &(p, df, x) in TABLE {
        let got = critical_value_uncached(p, df);
        assert!((got - x).abs() < 1e-2, "critical({p}, {df}) = {got}, expected {x}");
    }
}

#[test]
fn test_critical_value_boundaries() {
    assert_eq!(critical_value_uncached(0.0, 3), CHI_MAX);
    assert_eq!(critical_value_uncached(-0.5, 3), CHI_MAX);
    assert_eq!(critical_value_uncached(1.0, 3), 0.0);
    assert_eq!(critical_value_uncached(1.5, 3), 0.0);
}

#[test]
fn test_critical_value_zero_df_is_unreachable() {
    // tail probability is identically 1 so the search runs to the upper bound
    let value = critical_value_uncached(0.05, 0);
    assert!(CHI_MAX - value < 1e-3);
}

#[test]
fn test_critical_value_inverts_tail_probability() {
    for &p in &[0.01, 0.05, 0.25, 0.5, 0.9] {
        for df in 1..=12 {
            let x = critical_value_uncached(p, df);
            let back = chi_square_tail_probability(x, df);
            assert!((back - p).abs() < 1e-5, "p={p} df={df}: {back}");
        }
    }
}

#[test]
fn test_table_caches_interior_probabilities() {
    let table = ChiSquareTable::new();
    assert!(table.is_empty());

    let first = table.critical_value(0.05, 2);
    let second = table.critical_value(0.05, 2);
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(table.len(), 1);

    table.critical_value(0.05, 3);
    table.critical_value(0.01, 2);
    assert_eq!(table.len(), 3);
}

#[test]
fn test_table_does_not_cache_boundaries() {
    let table = ChiSquareTable::new();
    assert_eq!(table.critical_value(1.0, 4), 0.0);
    assert_eq!(table.critical_value(0.0, 4), CHI_MAX);
    assert!(table.is_empty());
}

#[test]
fn test_table_agrees_with_uncached() {
    let table = ChiSquareTable::new();
    for df in 1..=5 {
        assert_eq!(
            table.critical_value(0.01, df).to_bits(),
            critical_value_uncached(0.01, df).to_bits()
        );
    }
}

#[test]
fn test_tables_are_isolated() {
    let a = ChiSquareTable::new();
    let b = ChiSquareTable::new();
    a.critical_value(0.05, 1);
    assert_eq!(a.len(), 1);
    assert!(b.is_empty());
}

#[test]
fn test_table_concurrent_access() {
    let table = Arc::new(ChiSquareTable::new());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            let table = Arc::clone(&table);
            scope.spawn(move || {
                for df in 1..=8 {
                    table.critical_value(0.05, df);
                    table.critical_value(0.01, df);
                }
            });
        }
    });
    assert_eq!(table.len(), 16);
    assert!((table.critical_value(0.05, 1) - 3.841).abs() < 1e-2);
}
