use ndarray::{array, Array1};
use crate::data::{one_hot, LabeledSet, LearningPair, MIN_CLASS_SIZE};
use crate::metrics::{classify, ScoreRank};

fn samples(width: usize, value: f32, count: usize) -> Vec<Array1<f32>> {
    (0..count).map(|_| Array1::from_elem(width, value)).collect()
}

#[test]
fn test_one_hot() {
    assert_eq!(one_hot(1, 3), array![0.0, 1.0, 0.0]);
    assert_eq!(one_hot(0, 1), array![1.0]);
}

#[test]
fn test_learning_pair_accessors() {
    let pair = LearningPair::new(array![0.5, 0.25], one_hot(0, 2));
    assert_eq!(pair.input(), array![0.5, 0.25].view());
    assert_eq!(pair.reference(), array![1.0, 0.0].view());
}

#[test]
fn test_labeled_set_orders_classes_by_name() {
    let mut set = LabeledSet::new();
    set.add_class("zebra", samples(4, 1.0, MIN_CLASS_SIZE)).unwrap();
    set.add_class("apple", samples(4, 0.0, MIN_CLASS_SIZE + 2)).unwrap();

    assert_eq!(set.class_names(), vec!["apple".to_string(), "zebra".to_string()]);
    assert_eq!(set.num_classes(), 2);
    assert_eq!(set.len(), 2 * MIN_CLASS_SIZE + 2);
    assert_eq!(set.input_width(), Some(4));

    let pairs = set.learning_pairs();
    assert_eq!(pairs.len(), set.len());
    // apple samples come first and are all zeros
    assert_eq!(pairs[0].reference(), array![1.0, 0.0].view());
    assert_eq!(pairs[0].input()[0], 0.0);
    let last = pairs.last().unwrap();
    assert_eq!(last.reference(), array![0.0, 1.0].view());
    assert_eq!(last.input()[0], 1.0);
}

#[test]
fn test_labeled_set_rejects_bad_classes() {
    let mut set = LabeledSet::new();
    set.add_class("a", samples(3, 0.0, MIN_CLASS_SIZE)).unwrap();

    assert!(set.add_class("a", samples(3, 1.0, MIN_CLASS_SIZE)).unwrap_err().is_configuration());
    let err = set.add_class("b", samples(3, 1.0, MIN_CLASS_SIZE - 1)).unwrap_err();
    assert!(err.is_configuration());
    assert!(set.add_class("c", samples(2, 1.0, MIN_CLASS_SIZE)).unwrap_err().is_shape_mismatch());

    assert_eq!(set.num_classes(), 1);
    assert!(set.remove_class("a"));
    assert!(set.is_empty());
    assert_eq!(set.input_width(), None);
    set.add_class("c", samples(2, 1.0, MIN_CLASS_SIZE)).unwrap();
    assert_eq!(set.input_width(), Some(2));
}

#[test]
fn test_classify_ranks() {
    let output = array![0.2, 0.7, 0.9, 0.5];
    let names = ["cat", "dog", "fox", "owl"];
    let results = classify(output.view(), &names).unwrap();

    assert_eq!(results.len(), 4);
    assert_eq!(results[0].rank, ScoreRank::LowerHalf);
    assert_eq!(results[1].rank, ScoreRank::UpperHalf);
    assert_eq!(results[2].rank, ScoreRank::Maximal);
    assert_eq!(results[2].class_name, "fox");
    assert_eq!(results[3].rank, ScoreRank::UpperHalf);

    assert!(classify(output.view(), &names[..3]).unwrap_err().is_shape_mismatch());
}
