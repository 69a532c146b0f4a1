use crate::matrix::{Matrix, Scalar};

pub trait Activation {
    /// Returns activation function at x
    fn call(&self, x: Scalar) -> Scalar;
    /// Returns derivative of activation function at the pre-activation value x.
    ///
    /// Backward propagation gates error signals with this, so it takes `z`
    /// and not the activated output.
    fn derivative(&self, x: Scalar) -> Scalar;
}

#[derive(Debug, Clone, Copy)]
pub enum Activations {
    Identity,
    Sigmoid,
    Arctan,
    /// `max(0, x)`. The derivative at exactly 0 is taken to be 0.
    ReLU,
}

impl Activation for Activations {
    fn call(&self, x: Scalar) -> Scalar {
        use Activations::*;
        match self {
            Identity => x,
            Sigmoid => 1.0 / (1.0 + (-x).exp()),
            Arctan => x.atan(),
            ReLU => x.max(0.0),
        }
    }

    fn derivative(&self, x: Scalar) -> Scalar {
        use Activations::*;
        match self {
            Identity => 1.0,
            Arctan => 1.0 / (1.0 + x * x),
            Sigmoid => {
                let s = self.call(x);
                s * (1.0 - s)
            }
            ReLU => {
                if x > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

pub fn relu(x: Scalar) -> Scalar {
    Activations::ReLU.call(x)
}

pub fn relu_derivative(x: Scalar) -> Scalar {
    Activations::ReLU.derivative(x)
}

/// Returns a new matrix with `f` applied to every cell.
pub fn activate<F: Fn(Scalar) -> Scalar>(matrix: &Matrix, f: F) -> Matrix {
    matrix.map(f)
}

/// Element-wise derivative mask of `activation` over pre-activations `z`.
pub fn activate_derivative(z: &Matrix, activation: &dyn Activation) -> Matrix {
    activate(z, |x| activation.derivative(x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix2;

    #[test]
    fn relu_clamps_negatives() {
        let z = Matrix2::from_array([[-1.5, 0.0, 2.0], [3.0, -0.1, 0.25]]);
        assert_eq!(
            activate(&z, relu).to_vec(),
            [[0.0, 0.0, 2.0], [3.0, 0.0, 0.25]]
        );
    }

    #[test]
    fn relu_derivative_is_zero_at_zero() {
        let z = Matrix2::from_array([[-1.0, 0.0, 2.0]]);
        assert_eq!(activate(&z, relu_derivative).to_vec(), [[0.0, 0.0, 1.0]]);
        assert_eq!(
            activate_derivative(&z, &Activations::ReLU),
            activate(&z, relu_derivative)
        );
    }

    #[test]
    fn activate_with_closure() {
        let z = Matrix2::from_array([[1.0, 2.0]]);
        assert_eq!(activate(&z, |x| x * 10.0).to_vec(), [[10.0, 20.0]]);
        assert_eq!(z.to_vec(), [[1.0, 2.0]]);
    }

    #[test]
    fn derivatives_match_finite_differences() {
        let eps = 1e-6;
        for activation in [
            Activations::Identity,
            Activations::Sigmoid,
            Activations::Arctan,
            Activations::ReLU,
        ] {
            for x in [-2.0, -0.3, 0.4, 1.7] {
                let numeric = (activation.call(x + eps) - activation.call(x - eps)) / (2.0 * eps);
                let analytic = activation.derivative(x);
                assert!(
                    (numeric - analytic).abs() < 1e-6,
                    "{activation:?} at {x}: {numeric} vs {analytic}"
                );
            }
        }
    }
}
