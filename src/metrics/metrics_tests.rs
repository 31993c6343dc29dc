use super::*;
use crate::data::{Attribute, Example};
use crate::tree::{DecisionTree, Id3Learner, TreeNode};

fn schema() -> Dataset {
    let weather = Attribute::new("Weather", ["Sunny", "Rainy", "Foggy"]).expect("valid attribute");
    let class = Attribute::new("Class", ["Play", "Stay"]).expect("valid attribute");
    Dataset::new(vec![weather, class], "Class").expect("valid schema")
}

fn weather() -> Dataset {
    let mut data = schema();
    for _ in 0..8 {
        data.add_example(["Sunny", "Play"]).expect("valid example");
        data.add_example(["Rainy", "Stay"]).expect("valid example");
    }
    data.add_example(["Rainy", "Play"]).expect("valid example");
    data
}

/// Knows Sunny and Rainy only.
fn two_branch_tree() -> DecisionTree {
    let root = TreeNode::Node(crate::tree::Node {
        attribute: "Weather".to_string(),
        children: [
            ("Sunny".to_string(), TreeNode::leaf("Play", 8)),
            ("Rainy".to_string(), TreeNode::leaf("Stay", 9)),
        ]
        .into_iter()
        .collect(),
    });
    DecisionTree::new(root, "Class")
}

struct Broken;

impl Classifier for Broken {
    fn classify(&self, _example: &Example) -> Result<String> {
        Err(ArbolError::validation("model is corrupt"))
    }
}

// ========================================================================
// Strict Accuracy
// ========================================================================

#[test]
fn test_weather_accuracy() {
    let data = weather();
    let tree = Id3Learner::new().learn(&data).expect("learning should succeed");
    let acc = accuracy(&tree, &data).expect("all examples compatible");
    assert!((acc - 16.0 / 17.0).abs() < 1e-12);
}

#[test]
fn test_accuracy_perfect_and_zero() {
    let mut data = schema();
    data.add_example(["Sunny", "Play"]).expect("valid example");
    data.add_example(["Rainy", "Stay"]).expect("valid example");
    assert_eq!(accuracy(&two_branch_tree(), &data).expect("compatible"), 1.0);

    let mut wrong = schema();
    wrong.add_example(["Sunny", "Stay"]).expect("valid example");
    assert_eq!(accuracy(&two_branch_tree(), &wrong).expect("compatible"), 0.0);
}

#[test]
fn test_accuracy_empty_dataset() {
    let err = accuracy(&two_branch_tree(), &schema()).unwrap_err();
    assert!(matches!(err, ArbolError::EmptyInput(_)));
}

#[test]
fn test_accuracy_unknown_class_rejected() {
    let mut data = schema();
    data.add_example(["Sunny", "?"]).expect("loader accepts unknown");
    let err = accuracy(&two_branch_tree(), &data).unwrap_err();
    assert!(matches!(err, ArbolError::Validation { .. }));
}

#[test]
fn test_accuracy_propagates_incompatibility() {
    let mut data = weather();
    data.add_example(["Foggy", "Play"]).expect("valid example");
    let err = accuracy(&two_branch_tree(), &data).unwrap_err();
    assert!(matches!(err, ArbolError::IncompatibleExample { .. }));
}

#[test]
fn test_accuracy_accepts_trait_objects() {
    let tree: Box<dyn Classifier> = Box::new(two_branch_tree());
    let acc = accuracy(tree.as_ref(), &weather()).expect("compatible");
    assert!((acc - 16.0 / 17.0).abs() < 1e-12);
}

// ========================================================================
// Lenient Evaluation
// ========================================================================

#[test]
fn test_evaluate_skips_incompatible_examples() {
    let mut data = weather();
    data.add_example(["Foggy", "Play"]).expect("valid example");
    data.add_example(["?", "Stay"]).expect("valid example");

    let report = evaluate(&two_branch_tree(), &data).expect("evaluation succeeds");
    assert_eq!(report.correct, 16);
    assert_eq!(report.evaluated, 17);
    assert_eq!(report.total(), 19);

    let indices: Vec<usize> = report.skipped.iter().map(|s| s.index).collect();
    assert_eq!(indices, [17, 18]);
    assert!(report.skipped[0].reason.contains("Foggy"));
    assert!((report.accuracy().expect("some evaluated") - 16.0 / 17.0).abs() < 1e-12);
}

#[test]
fn test_evaluate_nothing_evaluated() {
    let mut data = schema();
    data.add_example(["Foggy", "Play"]).expect("valid example");
    let report = evaluate(&two_branch_tree(), &data).expect("evaluation succeeds");
    assert_eq!(report.evaluated, 0);
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(report.accuracy(), Err(ArbolError::EmptyInput(_))));
}

#[test]
fn test_evaluate_empty_dataset() {
    let err = evaluate(&two_branch_tree(), &schema()).unwrap_err();
    assert!(matches!(err, ArbolError::EmptyInput(_)));
}

#[test]
fn test_evaluate_propagates_unrecoverable_errors() {
    let err = evaluate(&Broken, &weather()).unwrap_err();
    assert!(matches!(err, ArbolError::Validation { .. }));
}

#[test]
fn test_default_report_has_no_accuracy() {
    let report = EvaluationReport::default();
    assert_eq!(report.total(), 0);
    assert!(report.accuracy().is_err());
}
