//! Orthographic projection from N-space onto the plane
//!
//! Each source axis gets a 2D direction; a point lands at the sum of those
//! directions weighted by its coordinates. There is no depth, so nothing is
//! ever occluded.

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};
use std::f64::consts::PI;
use crate::{MathError, VectorN};

/// Point (or direction) in the drawing plane
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit direction at `angle` radians from the x axis
    #[inline]
    pub fn from_angle(angle: f64) -> Self {
        Self::new(angle.cos(), angle.sin())
    }

    #[inline]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl std::ops::Mul<f64> for Point2D {
    type Output = Self;

    #[inline]
    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s)
    }
}

/// One 2D direction per source dimension
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProjectionBasis {
    directions: Vec<Point2D>,
}

impl ProjectionBasis {
    /// Spread `n` unit directions evenly over the half turn `[0, π)`.
    ///
    /// Axis `i` points at angle `π · i / n`, so axis 0 is always +x.
    pub fn evenly_spread(n: usize) -> Self {
        let directions = (0..n)
            .map(|i| Point2D::from_angle(PI * i as f64 / n as f64))
            .collect();
        Self { directions }
    }

    /// Number of source dimensions this basis accepts
    #[inline]
    pub fn dim(&self) -> usize {
        self.directions.len()
    }

    #[inline]
    pub fn directions(&self) -> &[Point2D] {
        &self.directions
    }
}

/// Project a point: `x = Σ basis[i].x · p[i]`, `y = Σ basis[i].y · p[i]`
pub fn project(point: &VectorN, basis: &ProjectionBasis) -> Result<Point2D, MathError> {
    MathError::check(basis.dim(), point.dim())?;

    let mut out = Point2D::ZERO;
    for (dir, &c) in basis.directions.iter().zip(point.iter()) {
        out.x += dir.x * c;
        out.y += dir.y * c;
    }
    Ok(out)
}
