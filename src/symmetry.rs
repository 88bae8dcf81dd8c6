//! Point-group symmetries of the square and cubic lattices.
//!
//! Every element is a signed permutation matrix: each row and column holds a
//! single ±1. Such matrices are orthogonal (Mᵗ·M = I), have determinant ±1 and
//! map lattice points to lattice points, so a pivot move never breaks unit-step
//! adjacency.
//!
//! Two tables are available:
//! - [`SymmetryTable::Standard`]: the 8-element dihedral group D4 in 2D and a
//!   13-element subset of the cubic group in 3D (identity, the nine axis
//!   rotations, three axis-plane reflections).
//! - [`SymmetryTable::Full`]: every signed permutation matrix, 8 in 2D and 48
//!   in 3D, generated once on first use.
//!
//! The 13-element cubic table is not closed under composition; it stays the
//! default so chains reproduce the established move set.

use std::sync::OnceLock;

use crate::error::Result;
use crate::lattice::{Dimension, Point};

/// A D×D integer matrix, row major.
pub type Matrix<const D: usize> = [[i64; D]; D];

/// Dihedral group of the square lattice.
pub static SQUARE_SYMMETRIES: [Matrix<2>; 8] = [
    // rotations
    [[1, 0], [0, 1]],
    [[0, -1], [1, 0]],
    [[-1, 0], [0, -1]],
    [[0, 1], [-1, 0]],
    // reflections: x-axis, y-axis, y=x, y=-x
    [[1, 0], [0, -1]],
    [[-1, 0], [0, 1]],
    [[0, 1], [1, 0]],
    [[0, -1], [-1, 0]],
];

/// Axis rotations and axis-plane reflections of the cubic lattice.
pub static CUBIC_SYMMETRIES: [Matrix<3>; 13] = [
    [[1, 0, 0], [0, 1, 0], [0, 0, 1]],
    // about x: 90, 180, 270
    [[1, 0, 0], [0, 0, -1], [0, 1, 0]],
    [[1, 0, 0], [0, -1, 0], [0, 0, -1]],
    [[1, 0, 0], [0, 0, 1], [0, -1, 0]],
    // about y
    [[0, 0, 1], [0, 1, 0], [-1, 0, 0]],
    [[-1, 0, 0], [0, 1, 0], [0, 0, -1]],
    [[0, 0, -1], [0, 1, 0], [1, 0, 0]],
    // about z
    [[0, -1, 0], [1, 0, 0], [0, 0, 1]],
    [[-1, 0, 0], [0, -1, 0], [0, 0, 1]],
    [[0, 1, 0], [-1, 0, 0], [0, 0, 1]],
    // reflections through the xy, xz and yz planes
    [[1, 0, 0], [0, 1, 0], [0, 0, -1]],
    [[1, 0, 0], [0, -1, 0], [0, 0, 1]],
    [[-1, 0, 0], [0, 1, 0], [0, 0, 1]],
];

static FULL_SQUARE: OnceLock<Vec<Matrix<2>>> = OnceLock::new();
static FULL_CUBIC: OnceLock<Vec<Matrix<3>>> = OnceLock::new();

/// Which set of lattice symmetries pivot moves draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SymmetryTable {
    /// 8 elements in 2D, 13 in 3D.
    #[default]
    Standard,
    /// All signed permutation matrices: 8 in 2D, 48 in 3D.
    Full,
}

impl SymmetryTable {
    /// Look up the group for a raw dimension count.
    pub fn elements(self, dimensions: usize) -> Result<SymmetryGroup> {
        Ok(self.for_dimension(Dimension::new(dimensions)?))
    }

    pub fn for_dimension(self, dim: Dimension) -> SymmetryGroup {
        match (self, dim) {
            (SymmetryTable::Standard, Dimension::Two) => SymmetryGroup::Square(&SQUARE_SYMMETRIES),
            (SymmetryTable::Standard, Dimension::Three) => SymmetryGroup::Cubic(&CUBIC_SYMMETRIES),
            (SymmetryTable::Full, Dimension::Two) => {
                SymmetryGroup::Square(FULL_SQUARE.get_or_init(signed_permutations::<2>))
            }
            (SymmetryTable::Full, Dimension::Three) => {
                SymmetryGroup::Cubic(FULL_CUBIC.get_or_init(signed_permutations::<3>))
            }
        }
    }
}

/// Standard symmetry group for `dimensions` (8 elements for 2, 13 for 3).
pub fn elements(dimensions: usize) -> Result<SymmetryGroup> {
    SymmetryTable::Standard.elements(dimensions)
}

/// A borrowed, immutable set of lattice symmetries for one dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymmetryGroup {
    Square(&'static [Matrix<2>]),
    Cubic(&'static [Matrix<3>]),
}

impl SymmetryGroup {
    pub fn dimension(&self) -> Dimension {
        match self {
            SymmetryGroup::Square(_) => Dimension::Two,
            SymmetryGroup::Cubic(_) => Dimension::Three,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            SymmetryGroup::Square(g) => g.len(),
            SymmetryGroup::Cubic(g) => g.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every element orthogonal with determinant ±1.
    pub fn is_orthogonal(&self) -> bool {
        match self {
            SymmetryGroup::Square(g) => g.iter().all(|m| is_orthogonal(m) && determinant(m).abs() == 1),
            SymmetryGroup::Cubic(g) => g.iter().all(|m| is_orthogonal(m) && determinant(m).abs() == 1),
        }
    }

    /// Whether `entries`, a row-major D×D matrix, is an element of the group.
    pub fn contains(&self, entries: &[i64]) -> bool {
        match self {
            SymmetryGroup::Square(g) => g.iter().any(|m| m.iter().flatten().eq(entries.iter())),
            SymmetryGroup::Cubic(g) => g.iter().any(|m| m.iter().flatten().eq(entries.iter())),
        }
    }

    /// Whether the product of any two elements is again an element.
    pub fn is_closed(&self) -> bool {
        match self {
            SymmetryGroup::Square(g) => products(g).all(|m| self.contains(&m)),
            SymmetryGroup::Cubic(g) => products(g).all(|m| self.contains(&m)),
        }
    }
}

/// Every pairwise product a·b, flattened row major.
fn products<const D: usize>(group: &[Matrix<D>]) -> impl Iterator<Item = Vec<i64>> + '_ {
    group.iter().flat_map(move |a| {
        group
            .iter()
            .map(move |b| compose(a, b).iter().flatten().copied().collect::<Vec<i64>>())
    })
}

/// m·v
pub fn apply<const D: usize>(m: &Matrix<D>, v: Point<D>) -> Point<D> {
    let mut out = [0; D];
    for (row, o) in m.iter().zip(out.iter_mut()) {
        *o = row.iter().zip(v.iter()).map(|(a, b)| a * b).sum();
    }
    out
}

/// m·v, `None` if any coordinate overflows.
pub fn checked_apply<const D: usize>(m: &Matrix<D>, v: Point<D>) -> Option<Point<D>> {
    let mut out = [0; D];
    for (row, o) in m.iter().zip(out.iter_mut()) {
        let mut acc: i64 = 0;
        for (a, b) in row.iter().zip(v.iter()) {
            acc = acc.checked_add(a.checked_mul(*b)?)?;
        }
        *o = acc;
    }
    Some(out)
}

/// a·b
pub fn compose<const D: usize>(a: &Matrix<D>, b: &Matrix<D>) -> Matrix<D> {
    let mut out = [[0; D]; D];
    for i in 0..D {
        for j in 0..D {
            out[i][j] = (0..D).map(|k| a[i][k] * b[k][j]).sum();
        }
    }
    out
}

pub fn transpose<const D: usize>(m: &Matrix<D>) -> Matrix<D> {
    let mut out = [[0; D]; D];
    for i in 0..D {
        for j in 0..D {
            out[j][i] = m[i][j];
        }
    }
    out
}

pub fn identity<const D: usize>() -> Matrix<D> {
    let mut out = [[0; D]; D];
    for (i, row) in out.iter_mut().enumerate() {
        row[i] = 1;
    }
    out
}

/// Mᵗ·M == I
pub fn is_orthogonal<const D: usize>(m: &Matrix<D>) -> bool {
    compose(&transpose(m), m) == identity()
}

/// Leibniz expansion over all permutations of the columns.
pub fn determinant<const D: usize>(m: &Matrix<D>) -> i64 {
    permutations(D)
        .iter()
        .map(|perm| {
            let sign = permutation_sign(perm);
            sign * perm.iter().enumerate().map(|(row, &col)| m[row][col]).product::<i64>()
        })
        .sum()
}

/// All D×D signed permutation matrices, identity first.
fn signed_permutations<const D: usize>() -> Vec<Matrix<D>> {
    let perms = permutations(D);
    let num_reflections = 1usize << D;
    let mut out = Vec::with_capacity(perms.len() * num_reflections);

    for perm in &perms {
        for ref_mask in 0..num_reflections {
            let mut m = [[0; D]; D];
            for (row, &col) in perm.iter().enumerate() {
                m[row][col] = if (ref_mask >> row) & 1 == 1 { -1 } else { 1 };
            }
            out.push(m);
        }
    }
    out
}

/// Permutations of 0..n in Heap's order (identity first).
fn permutations(n: usize) -> Vec<Vec<usize>> {
    let mut arr: Vec<usize> = (0..n).collect();
    let mut res = Vec::new();
    heap_permute(n, &mut arr, &mut res);
    res
}

fn heap_permute(k: usize, arr: &mut [usize], res: &mut Vec<Vec<usize>>) {
    if k <= 1 {
        res.push(arr.to_vec());
        return;
    }
    heap_permute(k - 1, arr, res);
    for i in 0..k - 1 {
        if k % 2 == 0 {
            arr.swap(i, k - 1);
        } else {
            arr.swap(0, k - 1);
        }
        heap_permute(k - 1, arr, res);
    }
}

/// +1 for even permutations, -1 for odd (inversion count parity).
fn permutation_sign(perm: &[usize]) -> i64 {
    let mut inversions = 0;
    for i in 0..perm.len() {
        for j in (i + 1)..perm.len() {
            if perm[i] > perm[j] {
                inversions += 1;
            }
        }
    }
    if inversions % 2 == 0 {
        1
    } else {
        -1
    }
}
