//! Online mistake-driven perceptron over raw feature vectors.
//!
//! Independent of [`crate::neural`]: a single weight vector, no hidden
//! layer, one update per misclassified example.

use rand::{seq::SliceRandom, Rng};
use tracing::{debug, trace};

use crate::{
    matrix::{ops::Dot, Matrix, Scalar, Vector},
    prelude::*,
};

/// What happened during a [`Perceptron::train`] run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PerceptronReport {
    /// Number of weight updates made in each pass.
    pub updates_per_pass: Vec<usize>,
}

impl PerceptronReport {
    pub fn total_updates(&self) -> usize {
        self.updates_per_pass.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Perceptron {
    weights: Vector,
    rate: Scalar,
    passes: usize,
}

impl Perceptron {
    /// Zero-initialized weights for `n_features` inputs.
    pub fn new(n_features: usize, rate: Scalar, passes: usize) -> Self {
        Self {
            weights: Vector::new(n_features),
            rate,
            passes,
        }
    }

    pub fn with_weights(mut self, weights: Vector) -> Self {
        self.weights = weights;
        self
    }

    pub fn weights(&self) -> &Vector {
        &self.weights
    }

    /// Visits every example in a freshly shuffled order on each pass and
    /// applies `w += x * label * rate` whenever `(x · w) * label <= 0`.
    /// Always runs the configured number of passes.
    pub fn train<R: Rng + ?Sized>(
        &mut self,
        data: &Matrix,
        labels: &Vector,
        rng: &mut R,
    ) -> Result<PerceptronReport> {
        if data.rows() != labels.len() || data.cols() != self.weights.len() {
            return Err(Error::DimensionErr);
        }

        let mut order: Vec<usize> = (0..data.rows()).collect();
        let mut updates_per_pass = Vec::with_capacity(self.passes);

        for pass in 0..self.passes {
            order.shuffle(&mut *rng);

            let mut updates = 0;
            for &i in &order {
                let example = data.row(i)?;
                let label = labels[i];
                let prediction = example.dot(&self.weights)?;
                trace!(pass, example = i, prediction, label, "predicted");

                if prediction * label <= 0.0 {
                    self.weights = (&self.weights + &example.scale(label * self.rate))?;
                    updates += 1;
                    trace!(pass, example = i, weights = ?self.weights.as_slice(), "adjusted weights");
                }
            }

            debug!(pass, updates, "perceptron pass finished");
            updates_per_pass.push(updates);
        }

        Ok(PerceptronReport { updates_per_pass })
    }

    /// +1 when `x · w > 0`, otherwise -1.
    pub fn predict(&self, example: &Vector) -> Result<Scalar> {
        let p = example.dot(&self.weights)?;
        Ok(if p > 0.0 { 1.0 } else { -1.0 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::{Matrix1, Matrix2};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn mirrored_examples_need_one_update() {
        // Both examples start on the boundary, but whichever is visited
        // first moves w to [3, 2, 1], which already classifies the other.
        for seed in 0..8 {
            let data = Matrix2::from_array([[3.0, 2.0, 1.0], [-3.0, -2.0, -1.0]]);
            let labels = Matrix1::from_array([1.0, -1.0]);
            let mut rng = StdRng::seed_from_u64(seed);

            let mut perceptron = Perceptron::new(3, 1.0, 1);
            let report = perceptron.train(&data, &labels, &mut rng).unwrap();

            assert_eq!(report.updates_per_pass, [1]);
            assert_eq!(perceptron.weights(), &Matrix1::from_array([3.0, 2.0, 1.0]));
        }
    }

    #[test]
    fn boundary_examples_all_update() {
        // orthogonal examples: the first update leaves the second on the boundary
        let data = Matrix2::from_array([[1.0, 0.0], [0.0, 2.0]]);
        let labels = Matrix1::from_array([1.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(1);

        let mut perceptron = Perceptron::new(2, 0.5, 1);
        let report = perceptron.train(&data, &labels, &mut rng).unwrap();

        assert_eq!(report.total_updates(), 2);
        assert_eq!(perceptron.weights(), &Matrix1::from_array([0.5, 1.0]));
    }

    #[test]
    fn always_runs_every_pass() {
        let data = Matrix2::from_array([[3.0, 2.0, 1.0], [-3.0, -2.0, -1.0]]);
        let labels = Matrix1::from_array([1.0, -1.0]);
        let mut rng = StdRng::seed_from_u64(2);

        let mut perceptron = Perceptron::new(3, 1.0, 5);
        let report = perceptron.train(&data, &labels, &mut rng).unwrap();

        assert_eq!(report.updates_per_pass, [1, 0, 0, 0, 0]);
    }

    #[test]
    fn separates_toy_dataset() {
        let data = Matrix2::from_array([
            [3.0, 2.0, 1.0],
            [4.5, 3.0, 1.0],
            [3.0, 3.5, 1.0],
            [5.0, 4.5, 1.0],
            [6.0, 4.0, 1.0],
            [2.5, 5.0, 1.0],
            [3.0, 6.0, 1.0],
            [2.0, 6.5, 1.0],
            [3.0, 7.0, 1.0],
            [3.5, 7.5, 1.0],
        ]);
        let labels =
            Matrix1::from_array([-1.0, -1.0, -1.0, -1.0, -1.0, 1.0, 1.0, 1.0, 1.0, 1.0]);
        let mut rng = StdRng::seed_from_u64(10);

        let mut perceptron = Perceptron::new(3, 0.1, 1_000);
        let report = perceptron.train(&data, &labels, &mut rng).unwrap();

        assert_eq!(report.updates_per_pass.len(), 1_000);
        assert_eq!(report.updates_per_pass.last(), Some(&0));
        for i in 0..data.rows() {
            assert_eq!(
                perceptron.predict(&data.row(i).unwrap()),
                Ok(labels[i]),
                "example {i}"
            );
        }
    }

    #[test]
    fn same_seed_same_weights() {
        let data = Matrix2::from_array([[1.0, 2.0], [2.0, -1.0], [-1.0, 1.0]]);
        let labels = Matrix1::from_array([1.0, -1.0, 1.0]);

        let train = |seed| {
            let mut perceptron = Perceptron::new(2, 1.0, 4);
            perceptron
                .train(&data, &labels, &mut StdRng::seed_from_u64(seed))
                .unwrap();
            perceptron
        };

        assert_eq!(train(5), train(5));
    }

    #[test]
    fn rejects_mismatched_shapes() {
        let data = Matrix2::from_array([[1.0, 2.0], [2.0, -1.0]]);
        let mut rng = StdRng::seed_from_u64(0);

        let mut perceptron = Perceptron::new(2, 1.0, 1);
        assert_eq!(
            perceptron.train(&data, &Matrix1::from_array([1.0]), &mut rng),
            Err(Error::DimensionErr)
        );

        let mut wide = Perceptron::new(3, 1.0, 1);
        assert_eq!(
            wide.train(&data, &Matrix1::from_array([1.0, -1.0]), &mut rng),
            Err(Error::DimensionErr)
        );

        assert_eq!(
            perceptron.predict(&Matrix1::from_array([1.0])),
            Err(Error::DimensionErr)
        );
    }

    #[test]
    fn starts_from_given_weights() {
        let perceptron = Perceptron::new(2, 1.0, 0).with_weights(Matrix1::from_array([1.0, -1.0]));
        assert_eq!(perceptron.predict(&Matrix1::from_array([2.0, 1.0])), Ok(1.0));
        assert_eq!(perceptron.predict(&Matrix1::from_array([1.0, 2.0])), Ok(-1.0));
    }
}
