use super::{Matrix1, Matrix2};
use crate::prelude::*;
use std::ops::{Add, AddAssign, Mul, Sub};

pub trait Dot<I> {
    type Output;
    fn dot(self, rhs: I) -> Result<Self::Output>;
}

pub trait Transpose {
    fn transpose(&self) -> Self;
}

impl<T: Default + Copy> Transpose for Matrix2<T> {
    fn transpose(&self) -> Self {
        let mut transposed = Matrix2::zeroes(self.cols(), self.rows());

        for row in 0..self.rows() {
            for col in 0..self.cols() {
                transposed[(col, row)] = self[(row, col)];
            }
        }
        transposed
    }
}

/// Matrix product. Each cell is the inner product of a row of `self` and a column of `rhs`.
impl<'a, T> Dot<&Matrix2<T>> for &'a Matrix2<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
{
    type Output = Matrix2<T>;
    fn dot(self, rhs: &Matrix2<T>) -> Result<Self::Output> {
        if self.cols() != rhs.rows() {
            return Err(Error::DimensionErr);
        }

        let mut data = Vec::with_capacity(self.rows() * rhs.cols());

        for lhs_row in 0..self.rows() {
            for rhs_col in 0..rhs.cols() {
                let mut sum = T::default();
                for n in 0..self.cols() {
                    sum += self[(lhs_row, n)] * rhs[(n, rhs_col)]
                }
                data.push(sum);
            }
        }

        Ok(Matrix2 {
            data,
            dim: (self.rows(), rhs.cols()),
        })
    }
}

/// Matrix-vector product, one inner product per row.
impl<'a, T> Dot<&Matrix1<T>> for &'a Matrix2<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
{
    type Output = Matrix1<T>;
    fn dot(self, rhs: &Matrix1<T>) -> Result<Self::Output> {
        // columns of LHS == rows of RHS
        if self.cols() != rhs.len() {
            return Err(Error::DimensionErr);
        }

        let mut data = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            let mut sum = T::default();
            for (n, &x) in rhs.iter().enumerate() {
                sum += self[(row, n)] * x;
            }
            data.push(sum);
        }

        Ok(Matrix1::from_vec(data))
    }
}

/// Inner product.
impl<'a, T> Dot<&Matrix1<T>> for &'a Matrix1<T>
where
    T: Mul<Output = T> + Default + AddAssign + Copy,
{
    type Output = T;
    fn dot(self, rhs: &Matrix1<T>) -> Result<Self::Output> {
        if self.len() != rhs.len() {
            return Err(Error::DimensionErr);
        }

        let mut sum = T::default();
        for (&x, &y) in self.iter().zip(rhs.iter()) {
            sum += x * y;
        }

        Ok(sum)
    }
}

/// Adds two Matrix2s element-wise.
impl<'a, T> Add for &'a Matrix2<T>
where
    &'a T: Add<Output = T>,
{
    type Output = Result<Matrix2<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        if self.dim != rhs.dim {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix2 {
            data: self.data.iter().zip(&rhs.data).map(|(x, y)| x + y).collect(),
            dim: self.dim,
        })
    }
}

/// Subs two Matrix2s element-wise.
impl<'a, T> Sub for &'a Matrix2<T>
where
    &'a T: Sub<Output = T>,
{
    type Output = Result<Matrix2<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        if self.dim != rhs.dim {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix2 {
            data: self.data.iter().zip(&rhs.data).map(|(x, y)| x - y).collect(),
            dim: self.dim,
        })
    }
}

/// Adds two Matrix1s element-wise.
impl<'a, T> Add for &'a Matrix1<T>
where
    &'a T: Add<Output = T>,
{
    type Output = Result<Matrix1<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        if self.len() != rhs.len() {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix1::from_vec(
            self.iter().zip(rhs.iter()).map(|(x, y)| x + y).collect(),
        ))
    }
}

impl<T> Matrix2<T>
where
    T: Mul<Output = T> + Copy,
{
    /// Element-wise (Hadamard) product of two same-shape matrices.
    pub fn hadamard(&self, rhs: &Matrix2<T>) -> Result<Matrix2<T>> {
        if self.dim != rhs.dim {
            return Err(Error::DimensionErr);
        }

        Ok(Matrix2 {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(&x, &y)| x * y)
                .collect(),
            dim: self.dim,
        })
    }
}


#[cfg(test)]
mod proptests {
    use crate::matrix::{
        ops::{Dot, Transpose},
        Matrix, Matrix1, Matrix2, Vector,
    };
    use crate::prelude::*;
    use proptest::prelude::*;

    fn matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix> {
        prop::collection::vec(-100.0_f64..100.0, rows * cols).prop_map(move |data| Matrix2 {
            data,
            dim: (rows, cols),
        })
    }

    fn any_matrix() -> impl Strategy<Value = Matrix> {
        (1_usize..6, 1_usize..6).prop_flat_map(|(rows, cols)| matrix(rows, cols))
    }

    fn same_shape_pair() -> impl Strategy<Value = (Matrix, Matrix)> {
        (1_usize..6, 1_usize..6).prop_flat_map(|(rows, cols)| (matrix(rows, cols), matrix(rows, cols)))
    }

    fn vector_pair() -> impl Strategy<Value = (Vector, Vector)> {
        (1_usize..10).prop_flat_map(|len| {
            (
                prop::collection::vec(-100.0_f64..100.0, len).prop_map(Matrix1::from_vec),
                prop::collection::vec(-100.0_f64..100.0, len).prop_map(Matrix1::from_vec),
            )
        })
    }

    proptest! {
        #[test]
        fn prop_double_transpose_is_identity(a in any_matrix()) {
            prop_assert_eq!(a.transpose().transpose(), a);
        }

        #[test]
        fn prop_multiply_by_zeroes(a in any_matrix(), k in 1_usize..6) {
            let zeroes = Matrix2::zeroes(a.cols(), k);
            prop_assert_eq!(a.dot(&zeroes).unwrap(), Matrix2::zeroes(a.rows(), k));
        }

        #[test]
        fn prop_addition_commutes((a, b) in same_shape_pair()) {
            prop_assert_eq!(&a + &b, &b + &a);
        }

        #[test]
        fn prop_inner_product_commutes((v, w) in vector_pair()) {
            prop_assert_eq!(v.dot(&w), w.dot(&v));
        }

        #[test]
        fn prop_scale_composes(
            (v, _) in vector_pair(),
            s in -10.0_f64..10.0,
            t in -10.0_f64..10.0,
        ) {
            let twice = v.scale(s).scale(t);
            let once = v.scale(s * t);
            for (x, y) in twice.iter().zip(once.iter()) {
                prop_assert!((x - y).abs() <= 1e-9 * y.abs().max(1.0));
            }
        }

        #[test]
        fn prop_mismatched_inner_dimensions_fail(
            m in 1_usize..6,
            n in 1_usize..6,
            p in 1_usize..6,
            q in 1_usize..6,
        ) {
            prop_assume!(n != p);
            let a = Matrix2::<f64>::zeroes(m, n);
            let b = Matrix2::<f64>::zeroes(p, q);
            prop_assert_eq!(a.dot(&b), Err(Error::DimensionErr));
        }
    }
}
