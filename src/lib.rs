//! Dense linear algebra, a two-layer ReLU network trained by manual
//! backpropagation, and an online perceptron.
//!
//! Every operation that combines operands of incompatible shape returns
//! [`prelude::Error::DimensionErr`] instead of panicking.

pub mod matrix;
pub mod neural;
pub mod perceptron;
pub mod prelude;
pub mod rng;
