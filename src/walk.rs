//! Self-avoiding walks stored as a flat coordinate buffer.
//!
//! A walk of n points in D dimensions is `n * D` integers laid out point by
//! point: `[x0, y0, x1, y1, ...]`. Consumers (renderers, writers, statistics)
//! read it through [`Walk::as_slice`] or [`Walk::points`].

use ahash::AHashSet;

use crate::error::{PivotError, Result};
use crate::lattice::{is_unit_step, Dimension};

/// An ordered sequence of distinct lattice points.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Walk {
    dimension: Dimension,
    coords: Vec<i64>,
}

impl Walk {
    /// Build a walk from a flat coordinate buffer.
    ///
    /// Fails if the dimension is unsupported, the buffer does not hold a whole
    /// number of points, or any site is visited twice.
    pub fn from_coords(dimensions: usize, coords: Vec<i64>) -> Result<Self> {
        let dimension = Dimension::new(dimensions)?;
        if coords.len() % dimensions != 0 {
            return Err(PivotError::InvalidLength {
                len: coords.len(),
                dimensions,
            });
        }
        if let Some(index) = first_revisit(&coords, dimensions) {
            return Err(PivotError::SelfIntersecting { index });
        }
        Ok(Self { dimension, coords })
    }

    /// Build a walk from fixed-size points.
    pub fn from_points<const D: usize>(points: &[[i64; D]]) -> Result<Self> {
        Self::from_coords(D, points.iter().flatten().copied().collect())
    }

    pub(crate) fn from_parts_unchecked(dimension: Dimension, coords: Vec<i64>) -> Self {
        Self { dimension, coords }
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.coords.len() / self.dimension.get()
    }

    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Flat coordinate buffer (read-only).
    pub fn as_slice(&self) -> &[i64] {
        &self.coords
    }

    pub fn into_coords(self) -> Vec<i64> {
        self.coords
    }

    /// Coordinates of point `index`.
    pub fn point(&self, index: usize) -> Option<&[i64]> {
        let d = self.dimension.get();
        self.coords.get(index * d..(index + 1) * d)
    }

    pub fn points(&self) -> std::slice::ChunksExact<'_, i64> {
        self.coords.chunks_exact(self.dimension.get())
    }

    /// Mutable access for the sampler. Callers must keep the walk self-avoiding.
    pub(crate) fn coords_mut(&mut self) -> &mut [i64] {
        &mut self.coords
    }

    /// All points pairwise distinct.
    pub fn is_self_avoiding(&self) -> bool {
        first_revisit(&self.coords, self.dimension.get()).is_none()
    }

    /// Consecutive points are lattice nearest neighbours.
    pub fn is_lattice_path(&self) -> bool {
        self.points()
            .zip(self.points().skip(1))
            .all(|(a, b)| is_unit_step(a, b))
    }
}

/// Index of the first point that repeats an earlier one.
fn first_revisit(coords: &[i64], dimensions: usize) -> Option<usize> {
    let mut seen: AHashSet<&[i64]> = AHashSet::with_capacity(coords.len() / dimensions);
    coords
        .chunks_exact(dimensions)
        .position(|p| !seen.insert(p))
}

/// Straight rod of `n` points along the first axis: (0,0,..), (1,0,..), ..
pub fn rod(n: usize, dimensions: usize) -> Result<Walk> {
    let dimension = Dimension::new(dimensions)?;
    let d = dimension.get();
    let mut coords = vec![0; n * d];
    for (i, p) in coords.chunks_exact_mut(d).enumerate() {
        p[0] = i as i64;
    }
    Ok(Walk::from_parts_unchecked(dimension, coords))
}
