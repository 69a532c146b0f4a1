pub mod activations;
pub mod layer;
pub mod optimizer;

use crate::prelude::*;

use crate::matrix::{Matrix, Matrix2, Scalar, Vector};
use rand::Rng;

use self::activations::{Activation, Activations};
use self::layer::{DenseLayer, InputLayer, Layer, LayerKind};

/// Intermediates of one forward pass, all of which backward propagation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardPass {
    /// `X · W1`, examples × hidden units
    pub z1: Matrix,
    /// hidden activation of `z1`
    pub a1: Matrix,
    /// `A1 · W2`, examples × output units
    pub z2: Matrix,
    /// output activation of `z2`; the prediction
    pub a2: Matrix,
}

/// Weight gradients, each the same shape as the weights they belong to.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub hidden: Matrix,
    pub output: Matrix,
}

/// Feed-forward network with one hidden layer.
///
/// The hidden layer uses ReLU and the output layer the identity unless
/// configured otherwise.
#[derive(Clone)]
pub struct TwoLayerNet {
    input: InputLayer,
    hidden: DenseLayer,
    output: DenseLayer,
}

impl TwoLayerNet {
    /// Creates a network with weights drawn uniformly from `[-0.5, 0.5) * scale`.
    pub fn new<R: Rng + ?Sized>(
        n_features: usize,
        n_hidden: usize,
        n_outputs: usize,
        scale: f64,
        rng: &mut R,
    ) -> Self {
        Self {
            input: InputLayer::new(n_features),
            hidden: DenseLayer::new(LayerKind::Hidden, n_features, n_hidden, scale, rng)
                .with_activation(Activations::ReLU),
            output: DenseLayer::new(LayerKind::Output, n_hidden, n_outputs, scale, rng),
        }
    }

    /// Creates a network from explicit `features × hidden` and `hidden × outputs` weights.
    pub fn from_weights(hidden: Matrix, output: Matrix) -> Result<Self> {
        if hidden.cols() != output.rows() {
            return Err(Error::DimensionErr);
        }

        Ok(Self {
            input: InputLayer::new(hidden.rows()),
            hidden: DenseLayer::from_weights(LayerKind::Hidden, hidden)
                .with_activation(Activations::ReLU),
            output: DenseLayer::from_weights(LayerKind::Output, output),
        })
    }

    pub fn with_hidden_activation(mut self, activation: impl Activation + 'static) -> Self {
        self.hidden = self.hidden.with_activation(activation);
        self
    }

    pub fn with_output_activation(mut self, activation: impl Activation + 'static) -> Self {
        self.output = self.output.with_activation(activation);
        self
    }

    pub fn hidden_weights(&self) -> &Matrix {
        self.hidden.weights()
    }

    pub fn output_weights(&self) -> &Matrix {
        self.output.weights()
    }

    pub fn layers(&self) -> [&dyn Layer; 3] {
        [&self.input, &self.hidden, &self.output]
    }

    pub fn forward(&self, x: &Matrix) -> Result<ForwardPass> {
        let x = self.input.transfer(x)?;

        let z1 = self.hidden.transfer(&x)?;
        let a1 = self.hidden.activate(&z1);
        let z2 = self.output.transfer(&a1)?;
        let a2 = self.output.activate(&z2);

        Ok(ForwardPass { z1, a1, z2, a2 })
    }

    /// Returns the prediction for every example, one row each.
    pub fn predict(&self, x: &Matrix) -> Result<Matrix> {
        Ok(self.forward(x)?.a2)
    }

    /// Gradients of half the summed squared error with respect to both weight matrices.
    ///
    /// Requires a single output unit, one label per example and the same `x`
    /// that produced `pass`.
    pub fn backward(&self, x: &Matrix, labels: &Vector, pass: &ForwardPass) -> Result<Gradients> {
        let x = self.input.transfer(x)?;
        if x.rows() != pass.z1.rows() {
            return Err(Error::DimensionErr);
        }
        let error = output_error(&pass.a2, labels)?;

        let output = self.output.back_prop(&pass.a1, &pass.z2, &error)?;
        let hidden = self.hidden.back_prop(&x, &pass.z1, &output.upstream)?;

        match (hidden.weights, output.weights) {
            (Some(hidden), Some(output)) => Ok(Gradients { hidden, output }),
            _ => Err(Error::DimensionErr),
        }
    }

    /// One gradient descent step on both layers: `W = W - rate * dW`.
    pub fn step(&mut self, grads: &Gradients, rate: f64) -> Result<()> {
        self.hidden.descend(&grads.hidden, rate)?;
        self.output.descend(&grads.output, rate)?;
        Ok(())
    }

    /// Summed squared error of the predictions.
    pub fn squared_error(&self, x: &Matrix, labels: &Vector) -> Result<Scalar> {
        let pass = self.forward(x)?;
        squared_error(&pass.a2, labels)
    }

    pub fn mean_squared_error(&self, x: &Matrix, labels: &Vector) -> Result<Scalar> {
        if labels.is_empty() {
            return Err(Error::DimensionErr);
        }
        Ok(self.squared_error(x, labels)? / labels.len() as Scalar)
    }
}

/// `A2 - y` as an `examples × 1` matrix.
fn output_error(a2: &Matrix, labels: &Vector) -> Result<Matrix> {
    if a2.dim() != (labels.len(), 1) {
        return Err(Error::DimensionErr);
    }

    let mut error = Matrix2::zeroes(labels.len(), 1);
    for (i, &y) in labels.iter().enumerate() {
        error[(i, 0)] = a2[(i, 0)] - y;
    }
    Ok(error)
}

pub(crate) fn squared_error(a2: &Matrix, labels: &Vector) -> Result<Scalar> {
    let error = output_error(a2, labels)?;
    Ok(error.to_vec().into_iter().flatten().map(|e| e * e).sum())
}
