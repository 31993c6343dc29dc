use super::*;
use std::f64::consts::LN_2;

fn examples(values: &[(&str, &str)]) -> Vec<Example> {
    values
        .iter()
        .map(|&(a, class)| Example::from_pairs([("A", a), ("Class", class)]))
        .collect()
}

fn class_attribute() -> Attribute {
    Attribute::new("Class", ["yes", "no", "maybe"]).expect("valid attribute")
}

// ========================================================================
// Distribution Tests
// ========================================================================

#[test]
fn test_class_distribution_includes_empty_classes() {
    let data = examples(&[("x", "yes"), ("y", "yes"), ("x", "no")]);
    let refs: Vec<&Example> = data.iter().collect();
    assert_eq!(class_distribution(&refs, &class_attribute()), vec![2, 1, 0]);
}

#[test]
fn test_class_distribution_empty() {
    assert_eq!(class_distribution(&[], &class_attribute()), vec![0, 0, 0]);
}

#[test]
fn test_majority_index_tie_prefers_domain_order() {
    assert_eq!(majority_index(&[3, 3, 1]), 0);
    assert_eq!(majority_index(&[1, 3, 3]), 1);
    assert_eq!(majority_index(&[0, 0]), 0);
}

#[test]
fn test_majority_index_picks_most_common() {
    // regression: the least common class must never win
    assert_eq!(majority_index(&[1, 8, 2]), 1);
}

#[test]
fn test_populated_classes() {
    assert_eq!(populated_classes(&[0, 4, 0]), 1);
    assert_eq!(populated_classes(&[1, 4, 2]), 3);
    assert_eq!(populated_classes(&[0, 0]), 0);
}

// ========================================================================
// Entropy Tests
// ========================================================================

#[test]
fn test_entropy_pure() {
    assert!(entropy(&[5, 0]).abs() < 1e-12);
}

#[test]
fn test_entropy_balanced_binary() {
    assert!((entropy(&[2, 2]) - LN_2).abs() < 1e-12);
}

#[test]
fn test_entropy_uniform_three_classes() {
    assert!((entropy(&[3, 3, 3]) - 3.0_f64.ln()).abs() < 1e-12);
}

#[test]
fn test_entropy_empty() {
    assert_eq!(entropy(&[]), 0.0);
    assert_eq!(entropy(&[0, 0]), 0.0);
}

// ========================================================================
// Partition Tests
// ========================================================================

#[test]
fn test_partition_drops_unknown_outside_domain() {
    let attribute = Attribute::new("A", ["x", "y"]).expect("valid attribute");
    let data = examples(&[("x", "yes"), ("y", "no"), ("?", "no"), ("x", "no")]);
    let refs: Vec<&Example> = data.iter().collect();

    let groups = partition(&refs, &attribute);
    let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 1]);
}

#[test]
fn test_partition_keeps_unknown_in_extended_domain() {
    let attribute = Attribute::new("A", ["x", "y"])
        .expect("valid attribute")
        .with_unknown();
    let data = examples(&[("x", "yes"), ("y", "no"), ("?", "no"), ("x", "no")]);
    let refs: Vec<&Example> = data.iter().collect();

    let groups = partition(&refs, &attribute);
    let sizes: Vec<usize> = groups.iter().map(Vec::len).collect();
    assert_eq!(sizes, vec![2, 1, 1]);
    assert_eq!(groups[2][0].get("A"), Some("?"));
}

#[test]
fn test_partition_empty_value_group() {
    let attribute = Attribute::new("A", ["x", "y", "z"]).expect("valid attribute");
    let data = examples(&[("z", "yes")]);
    let refs: Vec<&Example> = data.iter().collect();
    let groups = partition(&refs, &attribute);
    assert!(groups[0].is_empty());
    assert!(groups[1].is_empty());
    assert_eq!(groups[2].len(), 1);
}

// ========================================================================
// Chi-Square Statistic Tests
// ========================================================================

#[test]
fn test_chi_square_perfect_association() {
    // expected 1 per cell, four cells deviating by 1
    let statistic = chi_square_statistic(&[2, 2], &[vec![2, 0], vec![0, 2]]);
    assert!((statistic - 4.0).abs() < 1e-12);
}

#[test]
fn test_chi_square_independent_split() {
    let statistic = chi_square_statistic(&[4, 4], &[vec![2, 2], vec![2, 2]]);
    assert!(statistic.abs() < 1e-12);
}

#[test]
fn test_chi_square_skips_zero_expected_cells() {
    let statistic = chi_square_statistic(&[4, 0], &[vec![2, 0], vec![2, 0]]);
    assert!(statistic.is_finite());
    assert!(statistic.abs() < 1e-12);
}

#[test]
fn test_chi_square_weather_split() {
    // Sunny: 8 Play; Rainy: 1 Play, 8 Stay
    let statistic = chi_square_statistic(&[9, 8], &[vec![8, 0], vec![1, 8]]);
    let e_sunny_play: f64 = 9.0 / 17.0 * 8.0;
    let e_sunny_stay: f64 = 8.0 / 17.0 * 8.0;
    let e_rainy_play: f64 = 9.0 / 17.0 * 9.0;
    let e_rainy_stay: f64 = 8.0 / 17.0 * 9.0;
    let expected = (8.0 - e_sunny_play).powi(2) / e_sunny_play
        + (0.0 - e_sunny_stay).powi(2) / e_sunny_stay
        + (1.0 - e_rainy_play).powi(2) / e_rainy_play
        + (8.0 - e_rainy_stay).powi(2) / e_rainy_stay;
    assert!((statistic - expected).abs() < 1e-9);
}

// ========================================================================
// Gain and Split Information Tests
// ========================================================================

#[test]
fn test_information_gain_perfect_split() {
    let gain = information_gain(&[2, 2], &[vec![2, 0], vec![0, 2]]);
    assert!((gain - LN_2).abs() < 1e-12);
}

#[test]
fn test_information_gain_useless_split() {
    let gain = information_gain(&[4, 4], &[vec![2, 2], vec![2, 2]]);
    assert!(gain.abs() < 1e-12);
}

#[test]
fn test_information_gain_weights_by_full_parent() {
    // two of four examples fall in no group
    let gain = information_gain(&[2, 2], &[vec![1, 1]]);
    assert!((gain - (LN_2 - 0.5 * LN_2)).abs() < 1e-12);
}

#[test]
fn test_split_information_balanced() {
    assert!((split_information(4, [2, 2]) - LN_2).abs() < 1e-12);
}

#[test]
fn test_split_information_single_group_is_zero() {
    assert_eq!(split_information(4, [4, 0]), 0.0);
}

#[test]
fn test_split_information_partial_coverage() {
    let expected = -0.5 * 0.5_f64.ln();
    assert!((split_information(4, [2]) - expected).abs() < 1e-12);
}

#[test]
fn test_split_information_empty() {
    assert_eq!(split_information(0, std::iter::empty()), 0.0);
}
