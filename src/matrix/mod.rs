use crate::prelude::*;
use rand::{
    distributions::{Distribution, Uniform},
    Rng,
};
use std::ops::{Index, IndexMut, Mul};

pub mod ops;
mod vector;

pub use vector::Matrix1;

/// The unit of all arithmetic.
pub type Scalar = f64;
pub type Vector = Matrix1<Scalar>;
pub type Matrix = Matrix2<Scalar>;

/// Rectangular matrix stored row-major.
#[derive(Debug, PartialEq, Clone)]
pub struct Matrix2<T> {
    data: Vec<T>,
    dim: (usize, usize),
}

impl<T: Clone> Matrix2<T> {
    /// Copies out a single row.
    pub fn row(&self, row: usize) -> Result<Matrix1<T>> {
        if row >= self.rows() {
            return Err(Error::DimensionErr);
        }

        let start = row * self.cols();
        Ok(Matrix1::from_vec(
            self.data[start..start + self.cols()].to_vec(),
        ))
    }

    /// Gathers a single column, one element from each row.
    pub fn col(&self, col: usize) -> Result<Matrix1<T>> {
        if col >= self.cols() {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix1::from_vec(
            (0..self.rows())
                .map(|row| self[(row, col)].clone())
                .collect(),
        ))
    }

    pub fn from_rows(rows: Vec<Matrix1<T>>) -> Result<Self> {
        Self::from_vec(rows.into_iter().map(Matrix1::into_vec).collect())
    }
}

impl<T: Default + Clone> Matrix2<T> {
    pub fn zeroes(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::default(); rows * cols],
            dim: (rows, cols),
        }
    }
}

impl Matrix2<Scalar> {
    /// Samples every entry independently from `[-0.5, 0.5)` and multiplies it by `scale`.
    pub fn random<R: Rng + ?Sized>(rows: usize, cols: usize, scale: Scalar, rng: &mut R) -> Self {
        let die = Uniform::new(-0.5, 0.5);

        Self {
            data: (0..rows * cols)
                .map(|_| die.sample(&mut *rng) * scale)
                .collect(),
            dim: (rows, cols),
        }
    }
}

impl<T> Matrix2<T> {
    pub fn from_array<const R: usize, const C: usize>(arr: [[T; C]; R]) -> Self {
        let mut data = Vec::with_capacity(R * C);

        for row in arr {
            for x in row {
                data.push(x);
            }
        }

        Self { data, dim: (R, C) }
    }

    pub fn dim(&self) -> (usize, usize) {
        self.dim
    }

    pub fn rows(&self) -> usize {
        self.dim.0
    }

    pub fn cols(&self) -> usize {
        self.dim.1
    }

    /// Fails if the rows are ragged.
    pub fn from_vec(vec: Vec<Vec<T>>) -> Result<Self> {
        let rows = vec.len();
        let cols = vec.first().map(|row| row.len()).unwrap_or(0);

        let mut data = Vec::with_capacity(rows * cols);
        for row in vec {
            if cols != row.len() {
                return Err(Error::DimensionErr);
            }

            data.extend(row);
        }

        Ok(Self {
            data,
            dim: (rows, cols),
        })
    }

    pub fn to_vec(self) -> Vec<Vec<T>> {
        let cols = self.cols();
        let mut res = Vec::with_capacity(self.rows());
        let mut data = self.data.into_iter();
        for _ in 0..self.dim.0 {
            res.push(data.by_ref().take(cols).collect());
        }
        res
    }
}

impl<T: Copy> Matrix2<T> {
    /// Returns a new matrix of the same shape with `f` applied to every element.
    pub fn map<F: Fn(T) -> T>(&self, f: F) -> Self {
        Self {
            data: self.data.iter().map(|&x| f(x)).collect(),
            dim: self.dim,
        }
    }
}

impl<T> Matrix2<T>
where
    T: Mul<Output = T> + Copy,
{
    pub fn scale(&self, s: T) -> Self {
        self.map(|x| x * s)
    }
}

/// Panics if `(row, col)` lies outside the matrix.
impl<T> Index<(usize, usize)> for Matrix2<T> {
    type Output = T;
    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        assert!(i < self.rows() && j < self.cols(), "index out of bounds");
        &self.data[i * self.cols() + j]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix2<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        assert!(i < self.rows() && j < self.cols(), "index out of bounds");
        let idx = i * self.cols() + j;
        &mut self.data[idx]
    }
}

impl From<Matrix2<i32>> for Matrix2<f64> {
    fn from(value: Matrix2<i32>) -> Self {
        Self {
            dim: value.dim(),
            data: value.data.into_iter().map(|x| x as f64).collect(),
        }
    }
}
