//! N-dimensional Vector type

use serde::{Serialize, Deserialize};
use crate::MathError;

/// Vector with a runtime-determined number of components
///
/// Hypercube vertices are stored as `VectorN`s of ±1 coordinates; the same
/// type carries any intermediate point produced by a transform.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorN {
    components: Vec<f64>,
}

impl VectorN {
    /// Create a vector from its components
    #[inline]
    pub fn new(components: Vec<f64>) -> Self {
        Self { components }
    }

    /// The zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self { components: vec![0.0; dim] }
    }

    /// Number of components
    #[inline]
    pub fn dim(&self) -> usize {
        self.components.len()
    }

    /// Borrow the components
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Iterate over the components
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.components.iter()
    }

    /// Copy of this vector with `value` placed in front of the existing components
    pub fn prepended(&self, value: f64) -> Self {
        let mut components = Vec::with_capacity(self.dim() + 1);
        components.push(value);
        components.extend_from_slice(&self.components);
        Self { components }
    }

    /// Dot product
    pub fn dot(&self, other: &Self) -> Result<f64, MathError> {
        MathError::check(self.dim(), other.dim())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| a * b).sum())
    }

    /// L1 (Manhattan) distance: sum of absolute component differences
    pub fn l1_distance(&self, other: &Self) -> Result<f64, MathError> {
        MathError::check(self.dim(), other.dim())?;
        Ok(self.iter().zip(other.iter()).map(|(a, b)| (a - b).abs()).sum())
    }
}

impl From<Vec<f64>> for VectorN {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl From<&[f64]> for VectorN {
    fn from(components: &[f64]) -> Self {
        Self::new(components.to_vec())
    }
}

impl std::ops::Index<usize> for VectorN {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let v = VectorN::zeros(3);
        assert_eq!(v.dim(), 3);
        assert!(v.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_prepended() {
        let v = VectorN::new(vec![1.0, -1.0]);
        let p = v.prepended(-1.0);
        assert_eq!(p.as_slice(), &[-1.0, 1.0, -1.0]);
        // Original is untouched
        assert_eq!(v.dim(), 2);
    }

    #[test]
    fn test_dot() {
        let a = VectorN::new(vec![1.0, 2.0, 3.0]);
        let b = VectorN::new(vec![4.0, 5.0, 6.0]);
        assert_eq!(a.dot(&b).unwrap(), 32.0);
    }

    #[test]
    fn test_l1_distance() {
        let a = VectorN::new(vec![-1.0, 1.0, 1.0]);
        let b = VectorN::new(vec![1.0, 1.0, -1.0]);
        assert_eq!(a.l1_distance(&b).unwrap(), 4.0);
        assert_eq!(a.l1_distance(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_mismatched_lengths() {
        let a = VectorN::new(vec![1.0, 2.0]);
        let b = VectorN::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            a.l1_distance(&b),
            Err(MathError::DimensionMismatch { expected: 2, actual: 3 })
        );
        assert!(a.dot(&b).is_err());
    }

    #[test]
    fn test_empty_vector() {
        let v = VectorN::default();
        assert_eq!(v.dim(), 0);
        assert_eq!(v.l1_distance(&VectorN::zeros(0)).unwrap(), 0.0);
    }
}
