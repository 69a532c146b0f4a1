use tracing::{debug, info};

use crate::{
    matrix::{Matrix, Scalar, Vector},
    neural::{squared_error, TwoLayerNet},
    prelude::*,
};

/// Diagnostics recorded for one training iteration, measured on the
/// forward pass that produced that iteration's gradients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IterationStats {
    pub iteration: usize,
    /// Mean prediction `mean(A2)`.
    pub mean_prediction: Scalar,
    /// Summed squared error over all examples.
    pub squared_error: Scalar,
    /// Mean signed error `mean(A2 - y)`.
    pub mean_error: Scalar,
}

/// Full-batch gradient descent for a [`TwoLayerNet`].
pub struct Optimizer {
    iterations: usize,
    iterations_per_log: Option<usize>,
    rate: f64,
}

impl Optimizer {
    pub fn new(iterations: usize, rate: f64) -> Self {
        Self {
            iterations,
            iterations_per_log: None,
            rate,
        }
    }

    pub fn with_log(mut self, iterations_per_log: Option<usize>) -> Self {
        self.iterations_per_log = iterations_per_log;
        self
    }

    /// Runs `iterations` gradient steps and returns the per-iteration diagnostics.
    pub fn train(
        &self,
        net: &mut TwoLayerNet,
        inputs: &Matrix,
        labels: &Vector,
    ) -> Result<Vec<IterationStats>> {
        if inputs.rows() != labels.len() || labels.is_empty() {
            return Err(Error::DimensionErr);
        }

        let mut history = Vec::with_capacity(self.iterations);
        for i in 0..self.iterations {
            let stats = self.backprop_once(net, inputs, labels, i)?;

            if self.iterations_per_log.is_some_and(|ipl| ipl > 0 && i % ipl == 0) {
                info!(
                    iteration = i,
                    mean_prediction = stats.mean_prediction,
                    squared_error = stats.squared_error,
                    mean_error = stats.mean_error,
                    "Iteration {} error: {}",
                    i,
                    stats.squared_error
                );
            }
            history.push(stats);
        }

        if let Some(last) = history.last() {
            debug!(
                iterations = self.iterations,
                squared_error = last.squared_error,
                "training finished"
            );
        }
        Ok(history)
    }

    fn backprop_once(
        &self,
        net: &mut TwoLayerNet,
        inputs: &Matrix,
        labels: &Vector,
        iteration: usize,
    ) -> Result<IterationStats> {
        let pass = net.forward(inputs)?;

        let squared_error = squared_error(&pass.a2, labels)?;
        let n = labels.len() as Scalar;
        let mean_prediction = (0..labels.len()).map(|i| pass.a2[(i, 0)]).sum::<Scalar>() / n;
        let mean_error = mean_prediction - labels.iter().sum::<Scalar>() / n;

        let grads = net.backward(inputs, labels, &pass)?;
        net.step(&grads, self.rate)?;

        Ok(IterationStats {
            iteration,
            mean_prediction,
            squared_error,
            mean_error,
        })
    }
}
