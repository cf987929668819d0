use ndarray::array;
use crate::activations::Activation;

#[test]
fn test_sigmoid_values() {
    let mut data = array![0.0, 1.0, -1.0];
    Activation::Sigmoid.apply(&mut data);
    assert!((data[0] - 0.5).abs() < 1e-6);
    assert!((data[1] - 0.731_058_6).abs() < 1e-6);
    assert!((data[2] - 0.268_941_4).abs() < 1e-6);
}

#[test]
fn test_sigmoid_extreme_inputs_stay_in_range() {
    let mut data = array![1e10, -1e10, f32::MAX / 2.0, f32::MIN / 2.0];
    Activation::Sigmoid.apply(&mut data);
    for &v in data.iter() {
        assert!(v.is_finite());
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn test_derivative_from_output() {
    assert!((Activation::Sigmoid.derivative_from_output(0.5) - 0.25).abs() < 1e-7);
    assert_eq!(Activation::Sigmoid.derivative_from_output(1.0), 0.0);
    assert_eq!(Activation::Tanh.derivative_from_output(0.0), 1.0);

    let outputs = array![0.2, 0.5, 0.9];
    let deriv = Activation::Sigmoid.derivative(outputs.view());
    assert!((deriv[0] - 0.16).abs() < 1e-6);
    assert!((deriv[2] - 0.09).abs() < 1e-6);
}

#[test]
fn test_derivative_matches_finite_difference() {
    for activation in [Activation::Sigmoid, Activation::Tanh] {
        for &x in &[-2.0f32, -0.3, 0.0, 0.7, 1.5] {
            let h = 1e-3;
            let numeric =
                (activation.apply_scalar(x + h) - activation.apply_scalar(x - h)) / (2.0 * h);
            let analytic = activation.derivative_from_output(activation.apply_scalar(x));
            assert!((numeric - analytic).abs() < 1e-3, "{:?} at {}", activation, x);
        }
    }
}

#[test]
fn test_range() {
    assert_eq!(Activation::default(), Activation::Sigmoid);
    assert_eq!(Activation::Sigmoid.range(), (0.0, 1.0));
    assert_eq!(Activation::Tanh.range(), (-1.0, 1.0));
}
