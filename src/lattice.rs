//! Lattice dimension and integer point arithmetic.
//!
//! Walks live on Z² (square lattice) or Z³ (cubic lattice). Points are fixed-size
//! `i64` arrays inside the sampler; callers see them as `&[i64]` slices of a flat
//! coordinate buffer.

use std::fmt;

use crate::error::{PivotError, Result};

/// A point on the D-dimensional integer lattice.
pub type Point<const D: usize> = [i64; D];

/// Supported lattice dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Square lattice Z².
    Two,
    /// Cubic lattice Z³.
    Three,
}

impl Dimension {
    /// Validate a raw dimension count.
    pub fn new(dimensions: usize) -> Result<Self> {
        match dimensions {
            2 => Ok(Dimension::Two),
            3 => Ok(Dimension::Three),
            other => Err(PivotError::UnsupportedDimension(other)),
        }
    }

    /// Number of coordinates per point.
    pub fn get(self) -> usize {
        match self {
            Dimension::Two => 2,
            Dimension::Three => 3,
        }
    }
}

impl TryFrom<usize> for Dimension {
    type Error = PivotError;

    fn try_from(dimensions: usize) -> Result<Self> {
        Dimension::new(dimensions)
    }
}

impl From<Dimension> for usize {
    fn from(dim: Dimension) -> usize {
        dim.get()
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}D", self.get())
    }
}

/// Componentwise a - b, `None` on overflow.
pub fn checked_sub<const D: usize>(a: Point<D>, b: Point<D>) -> Option<Point<D>> {
    let mut out = [0; D];
    for k in 0..D {
        out[k] = a[k].checked_sub(b[k])?;
    }
    Some(out)
}

/// Componentwise a + b, `None` on overflow.
pub fn checked_add<const D: usize>(a: Point<D>, b: Point<D>) -> Option<Point<D>> {
    let mut out = [0; D];
    for k in 0..D {
        out[k] = a[k].checked_add(b[k])?;
    }
    Some(out)
}

/// Read point `index` out of a flat coordinate buffer.
pub(crate) fn read_point<const D: usize>(coords: &[i64], index: usize) -> Point<D> {
    let mut p = [0; D];
    p.copy_from_slice(&coords[index * D..(index + 1) * D]);
    p
}

/// Nearest neighbours on the lattice: exactly one coordinate differs, by 1.
pub fn is_unit_step(a: &[i64], b: &[i64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diffs = a.iter().zip(b).map(|(x, y)| x.abs_diff(*y)).filter(|&d| d != 0);
    diffs.next() == Some(1) && diffs.next().is_none()
}
