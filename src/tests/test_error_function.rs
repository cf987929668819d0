use ndarray::array;
use crate::error_function::{CrossEntropyError, ErrorFunction, ErrorFunctionKind, QuadraticError};

#[test]
fn test_quadratic_value_and_derivative() {
    let result = array![0.2, 0.8];
    let reference = array![0.0, 1.0];
    let quadratic = QuadraticError;

    let value = quadratic.value(result.view(), reference.view()).unwrap();
    assert!((value - 0.04).abs() < 1e-6);

    let d0 = quadratic.derivative(result.view(), reference.view(), 0);
    let d1 = quadratic.derivative(result.view(), reference.view(), 1);
    assert!((d0 - 0.2).abs() < 1e-6);
    assert!((d1 + 0.2).abs() < 1e-6);

    let gradient = quadratic.gradient(result.view(), reference.view()).unwrap();
    assert_eq!(gradient.len(), 2);
    assert!((gradient[0] - d0).abs() < 1e-7);
}

#[test]
fn test_quadratic_shape_mismatch() {
    let result = array![0.2, 0.8, 0.1];
    let reference = array![0.0, 1.0];
    let err = QuadraticError.value(result.view(), reference.view()).unwrap_err();
    assert!(err.is_shape_mismatch());
    assert!(QuadraticError.gradient(result.view(), reference.view()).is_err());
}

#[test]
fn test_quadratic_is_always_valid() {
    assert!(QuadraticError.check_validity().is_ok());
    assert_eq!(QuadraticError.kind(), ErrorFunctionKind::Quadratic);
}

#[test]
fn test_cross_entropy() {
    let ce = CrossEntropyError::default();
    assert!(ce.check_validity().is_ok());

    let close = ce.value(array![0.9, 0.1].view(), array![1.0, 0.0].view()).unwrap();
    let far = ce.value(array![0.1, 0.9].view(), array![1.0, 0.0].view()).unwrap();
    assert!(close > 0.0);
    assert!(far > close);

    let result = array![0.3, 0.6];
    let reference = array![1.0, 0.0];
    assert!(ce.derivative(result.view(), reference.view(), 0) < 0.0);
    assert!(ce.derivative(result.view(), reference.view(), 1) > 0.0);
}

#[test]
fn test_cross_entropy_validity() {
    for epsilon in [0.0, -1.0, 0.5, f32::NAN] {
        let err = CrossEntropyError::new(epsilon).check_validity().unwrap_err();
        assert!(err.is_configuration());
        assert!(ErrorFunctionKind::CrossEntropy { epsilon }.build().is_err());
    }
}

#[test]
fn test_kind_rebuilds_same_function() {
    let kind = ErrorFunctionKind::CrossEntropy { epsilon: 1e-5 };
    let function = kind.build().unwrap();
    assert_eq!(function.kind(), kind);
    assert_eq!(ErrorFunctionKind::default().build().unwrap().kind(), ErrorFunctionKind::Quadratic);
}
