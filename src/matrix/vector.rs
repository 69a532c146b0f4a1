use std::ops::{Index, IndexMut, Mul};

/// Fixed-length vector. Used for label vectors, perceptron weights and single rows.
#[derive(Debug, PartialEq, Clone)]
pub struct Matrix1<T> {
    data: Vec<T>,
}

impl<T: Default + Clone> Matrix1<T> {
    pub fn new(len: usize) -> Self {
        Self {
            data: vec![T::default(); len],
        }
    }
}

impl<T> Matrix1<T> {
    pub fn from_array<const R: usize>(arr: [T; R]) -> Self {
        Self {
            data: Vec::from(arr),
        }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> Matrix1<T>
where
    T: Mul<Output = T> + Copy,
{
    /// Multiplies every element by `s`, leaving `self` untouched.
    pub fn scale(&self, s: T) -> Self {
        Self {
            data: self.data.iter().map(|&x| x * s).collect(),
        }
    }
}

impl<T> Index<usize> for Matrix1<T> {
    type Output = T;
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T> IndexMut<usize> for Matrix1<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}
