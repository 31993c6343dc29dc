//! Helper functions for tree induction.
//!
//! Class distributions are plain count vectors aligned with the class
//! attribute's declared domain, so every helper below is deterministic and
//! independent of map iteration order.

use crate::data::{Attribute, Example};

/// Count of examples per class value, in class domain order. Zero-count
/// classes are included.
pub(super) fn class_distribution(examples: &[&Example], class: &Attribute) -> Vec<usize> {
    let mut counts = vec![0; class.cardinality()];
    for example in examples {
        if let Some(index) = example
            .get(class.name())
            .and_then(|value| class.index_of(value))
        {
            counts[index] += 1;
        }
    }
    counts
}

/// Index of the most common class. Ties go to the earliest class in domain
/// order.
pub(super) fn majority_index(counts: &[usize]) -> usize {
    let mut best = 0;
    for (index, &count) in counts.iter().enumerate() {
        if count > counts[best] {
            best = index;
        }
    }
    best
}

/// Number of classes with at least one example.
pub(super) fn populated_classes(counts: &[usize]) -> usize {
    counts.iter().filter(|&&count| count > 0).count()
}

/// Shannon entropy of a class distribution, in nats.
///
/// Empty classes contribute nothing (`0 * ln 0 = 0`); an empty distribution
/// has entropy 0.
pub(super) fn entropy(counts: &[usize]) -> f64 {
    let total: usize = counts.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    counts
        .iter()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let p = count as f64 / total;
            -p * p.ln()
        })
        .sum()
}

/// Splits examples into one group per value of `attribute`'s domain, in
/// domain order.
///
/// Examples whose value is outside the domain (the unknown sentinel, unless
/// the domain was extended with it) belong to no group.
pub(super) fn partition<'a>(examples: &[&'a Example], attribute: &Attribute) -> Vec<Vec<&'a Example>> {
    let mut groups = vec![Vec::new(); attribute.cardinality()];
    for &example in examples {
        if let Some(index) = example
            .get(attribute.name())
            .and_then(|value| attribute.index_of(value))
        {
            groups[index].push(example);
        }
    }
    groups
}

/// Pearson chi-square statistic of the contingency table formed by the
/// per-group class distributions.
///
/// The expected count of a cell is the group size times the class
/// proportion in `parent`. Cells whose expected count is zero are skipped.
pub(super) fn chi_square_statistic(parent: &[usize], groups: &[Vec<usize>]) -> f64 {
    let total: usize = parent.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let mut statistic = 0.0;
    for group in groups {
        let group_size: usize = group.iter().sum();
        for (&observed, &class_total) in group.iter().zip(parent) {
            let expected = class_total as f64 / total * group_size as f64;
            if expected > 0.0 {
                let deviation = observed as f64 - expected;
                statistic += deviation * deviation / expected;
            }
        }
    }
    statistic
}

/// Information gain of splitting `parent` into `groups`.
///
/// Group weights are relative to the full parent size, so examples left out
/// of every group only lower the weighted child entropy.
pub(super) fn information_gain(parent: &[usize], groups: &[Vec<usize>]) -> f64 {
    let total: usize = parent.iter().sum();
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    let weighted: f64 = groups
        .iter()
        .map(|group| {
            let size: usize = group.iter().sum();
            size as f64 / total * entropy(group)
        })
        .sum();
    entropy(parent) - weighted
}

/// Split information (intrinsic value) of a partition with the given group
/// sizes over `total` examples.
pub(super) fn split_information<I>(total: usize, group_sizes: I) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }

    let total = total as f64;
    group_sizes
        .into_iter()
        .filter(|&size| size > 0)
        .map(|size| {
            let fraction = size as f64 / total;
            -fraction * fraction.ln()
        })
        .sum()
}

#[cfg(test)]
#[path = "helpers_tests.rs"]
mod tests;
