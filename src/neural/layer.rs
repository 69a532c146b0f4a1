//! Layers that can be chained into a feed-forward network.
//!
//! Every layer reports its kind and size, computes its forward transfer and
//! activation, and turns the error arriving from the layer above into a
//! weight gradient plus the error to pass further down.

use std::sync::Arc;

use rand::Rng;

use super::activations::{activate, activate_derivative, Activation, Activations};
use crate::matrix::{
    ops::{Dot, Transpose},
    Matrix,
};
use crate::prelude::*;

/// Kind of a layer.
///
/// Convolutional and dropout layers would be further variants; neither is
/// implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// Result of propagating an error signal back through one layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Backward {
    /// Gradient for this layer's weights, same shape as the weights.
    /// `None` for layers without parameters.
    pub weights: Option<Matrix>,
    /// Error with respect to this layer's input, handed to the layer below.
    pub upstream: Matrix,
}

pub trait Layer {
    fn kind(&self) -> LayerKind;

    /// (inputs accepted, units produced)
    fn size(&self) -> (usize, usize);

    /// Pre-activation `z` for a batch of inputs (rows = examples).
    fn transfer(&self, input: &Matrix) -> Result<Matrix>;

    fn activate(&self, z: &Matrix) -> Matrix;

    /// `upstream` is the loss gradient with respect to this layer's
    /// activation; `input` and `z` are the values from the forward pass.
    fn back_prop(&self, input: &Matrix, z: &Matrix, upstream: &Matrix) -> Result<Backward>;
}

/// Passes the dataset through unchanged after checking its width.
#[derive(Debug, Clone, Copy)]
pub struct InputLayer {
    width: usize,
}

impl InputLayer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }
}

impl Layer for InputLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::Input
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.width)
    }

    fn transfer(&self, input: &Matrix) -> Result<Matrix> {
        if input.cols() != self.width {
            return Err(Error::DimensionErr);
        }
        Ok(input.clone())
    }

    fn activate(&self, z: &Matrix) -> Matrix {
        z.clone()
    }

    fn back_prop(&self, _input: &Matrix, z: &Matrix, upstream: &Matrix) -> Result<Backward> {
        if z.dim() != upstream.dim() {
            return Err(Error::DimensionErr);
        }
        Ok(Backward {
            weights: None,
            upstream: upstream.clone(),
        })
    }
}

/// Fully connected layer without bias. Weights are `inputs × units`, so a
/// batch transfers as `input · W`. Append a constant column to the input if
/// a bias is wanted.
#[derive(Clone)]
pub struct DenseLayer {
    kind: LayerKind,
    weights: Matrix,
    activation: Arc<dyn Activation>,
}

impl DenseLayer {
    /// Initializes a layer given the number of inputs and neurons.
    /// Weights are drawn uniformly from `[-0.5, 0.5) * scale`.
    /// Activation function is initally the identity (f(x) = x)
    pub fn new<R: Rng + ?Sized>(
        kind: LayerKind,
        n_inputs: usize,
        n_neurons: usize,
        scale: f64,
        rng: &mut R,
    ) -> Self {
        Self::from_weights(kind, Matrix::random(n_inputs, n_neurons, scale, rng))
    }

    pub fn from_weights(kind: LayerKind, weights: Matrix) -> Self {
        Self {
            kind,
            weights,
            activation: Arc::new(Activations::Identity),
        }
    }

    /// Add an activation function of this layer
    pub fn with_activation(mut self, activation: impl Activation + 'static) -> Self {
        self.activation = Arc::new(activation);
        self
    }

    pub fn weights(&self) -> &Matrix {
        &self.weights
    }

    /// `W = W - rate * grad`
    pub fn descend(&mut self, grad: &Matrix, rate: f64) -> Result<()> {
        self.weights = (&self.weights - &grad.scale(rate))?;
        Ok(())
    }
}

impl Layer for DenseLayer {
    fn kind(&self) -> LayerKind {
        self.kind
    }

    fn size(&self) -> (usize, usize) {
        self.weights.dim()
    }

    fn transfer(&self, input: &Matrix) -> Result<Matrix> {
        input.dot(&self.weights)
    }

    fn activate(&self, z: &Matrix) -> Matrix {
        activate(z, |x| self.activation.call(x))
    }

    fn back_prop(&self, input: &Matrix, z: &Matrix, upstream: &Matrix) -> Result<Backward> {
        // delta = upstream ⊙ f'(z), dW = inputᵗ · delta, next = delta · Wᵗ
        let delta = upstream.hadamard(&activate_derivative(z, self.activation.as_ref()))?;
        let weights = input.transpose().dot(&delta)?;
        let upstream = delta.dot(&self.weights.transpose())?;

        Ok(Backward {
            weights: Some(weights),
            upstream,
        })
    }
}
