//! Pivot algorithm: Markov chain over self-avoiding walks of fixed length.
//!
//! One trial:
//! 1. Draw a pivot index i uniformly from [0, n-1). Point i never moves.
//! 2. Draw a lattice symmetry g uniformly from the group.
//! 3. Map every tail point j > i to g·(walk[j] - walk[i]) + walk[i].
//! 4. Accept iff the prefix walk[0..=i] and the new tail share no site.
//!
//! Rejected trials leave the walk untouched: the candidate tail is built in a
//! scratch buffer and only copied back on acceptance. `iterations` counts
//! proposals, not acceptances.

use ahash::AHashSet;
use log::{debug, trace, warn};
use rand::Rng;

use crate::error::{PivotError, Result};
use crate::lattice::{checked_add, checked_sub, read_point, Dimension, Point};
use crate::symmetry::{checked_apply, Matrix, SymmetryGroup, SymmetryTable};
use crate::walk::Walk;

/// An explicit pivot move: pivot point index and group element index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PivotMove {
    pub index: usize,
    pub element: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialOutcome {
    Accepted,
    Rejected,
}

/// Running proposal/acceptance counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PivotStats {
    /// Trials proposed.
    pub proposed: usize,
    /// Trials accepted.
    pub accepted: usize,
}

impl PivotStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.proposed == 0 {
            0.0
        } else {
            self.accepted as f64 / self.proposed as f64
        }
    }

    fn record(&mut self, outcome: TrialOutcome) {
        self.proposed += 1;
        if outcome == TrialOutcome::Accepted {
            self.accepted += 1;
        }
    }

    fn merge(&mut self, other: PivotStats) {
        self.proposed += other.proposed;
        self.accepted += other.accepted;
    }
}

/// Pivot sampler owning its random source and symmetry table.
///
/// Each independent chain should own its own sampler, seeded separately.
#[derive(Debug)]
pub struct PivotSampler<R: Rng> {
    rng: R,
    table: SymmetryTable,
    stats: PivotStats,
}

impl<R: Rng> PivotSampler<R> {
    pub fn new(rng: R) -> Self {
        Self::with_table(rng, SymmetryTable::Standard)
    }

    pub fn with_table(rng: R, table: SymmetryTable) -> Self {
        Self {
            rng,
            table,
            stats: PivotStats::default(),
        }
    }

    pub fn table(&self) -> SymmetryTable {
        self.table
    }

    /// Totals over every run and move since construction.
    pub fn stats(&self) -> PivotStats {
        self.stats
    }

    /// Hand back the random source, e.g. to continue the stream elsewhere.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Run `iterations` random trials on `walk` in place.
    ///
    /// Returns the counts for this run only.
    pub fn run(&mut self, walk: &mut Walk, iterations: usize) -> PivotStats {
        if iterations == 0 {
            return PivotStats::default();
        }

        let n = walk.len();
        let dim = walk.dimension();
        let run = if n < 2 {
            warn!(
                "pivot: walk of {} point(s) has no pivot index, {} trials rejected",
                n, iterations
            );
            PivotStats {
                proposed: iterations,
                accepted: 0,
            }
        } else {
            match self.table.for_dimension(dim) {
                SymmetryGroup::Square(group) => {
                    run_trials::<2, R>(walk.coords_mut(), group, iterations, &mut self.rng)
                }
                SymmetryGroup::Cubic(group) => {
                    run_trials::<3, R>(walk.coords_mut(), group, iterations, &mut self.rng)
                }
            }
        };

        self.stats.merge(run);
        debug!(
            "pivot: {} walk of {} points, {}/{} trials accepted ({:.3})",
            dim,
            n,
            run.accepted,
            run.proposed,
            run.acceptance_rate()
        );
        run
    }

    /// Apply one explicit move, bypassing the random draw.
    pub fn apply_move(&mut self, walk: &mut Walk, mv: PivotMove) -> Result<TrialOutcome> {
        let group = self.table.for_dimension(walk.dimension());
        let n = walk.len();
        if n < 2 || mv.index >= n - 1 || mv.element >= group.len() {
            return Err(PivotError::InvalidMove {
                index: mv.index,
                element: mv.element,
                len: n,
                group_size: group.len(),
            });
        }

        let outcome = match group {
            SymmetryGroup::Square(g) => {
                let mut seen = AHashSet::with_capacity(n);
                let mut scratch = Vec::with_capacity(n * 2);
                try_pivot::<2>(walk.coords_mut(), &g[mv.element], mv.index, &mut seen, &mut scratch)
            }
            SymmetryGroup::Cubic(g) => {
                let mut seen = AHashSet::with_capacity(n);
                let mut scratch = Vec::with_capacity(n * 3);
                try_pivot::<3>(walk.coords_mut(), &g[mv.element], mv.index, &mut seen, &mut scratch)
            }
        };
        self.stats.record(outcome);
        Ok(outcome)
    }
}

/// Run `iterations` pivot trials on `walk` with the standard symmetry group.
///
/// `dimensions` selects the group and must match the walk. Returns the walk
/// after the last trial, unchanged if every trial was rejected.
pub fn pivot<R: Rng>(
    mut walk: Walk,
    iterations: usize,
    dimensions: usize,
    rng: &mut R,
) -> Result<Walk> {
    let dim = Dimension::new(dimensions)?;
    if walk.dimension() != dim {
        return Err(PivotError::DimensionMismatch {
            walk: walk.dimension().get(),
            requested: dimensions,
        });
    }
    PivotSampler::new(rng).run(&mut walk, iterations);
    Ok(walk)
}

fn run_trials<const D: usize, R: Rng>(
    coords: &mut [i64],
    group: &[Matrix<D>],
    iterations: usize,
    rng: &mut R,
) -> PivotStats {
    let n = coords.len() / D;
    let mut seen: AHashSet<Point<D>> = AHashSet::with_capacity(n);
    let mut scratch: Vec<i64> = Vec::with_capacity(n * D);
    let mut stats = PivotStats::default();

    for _ in 0..iterations {
        let index = rng.gen_range(0..n - 1);
        let element = rng.gen_range(0..group.len());
        let outcome = try_pivot(coords, &group[element], index, &mut seen, &mut scratch);
        if outcome == TrialOutcome::Accepted {
            trace!("pivot accepted: index {} element {}", index, element);
        }
        stats.record(outcome);
    }
    stats
}

/// Transform the tail after `index` by `m` about the pivot point.
///
/// The walk is written only when the candidate is self-avoiding. A tail point
/// that would leave the `i64` range rejects the trial.
fn try_pivot<const D: usize>(
    coords: &mut [i64],
    m: &Matrix<D>,
    index: usize,
    seen: &mut AHashSet<Point<D>>,
    scratch: &mut Vec<i64>,
) -> TrialOutcome {
    let n = coords.len() / D;
    let pivot_point: Point<D> = read_point(coords, index);

    seen.clear();
    for i in 0..=index {
        seen.insert(read_point(coords, i));
    }

    scratch.clear();
    for j in (index + 1)..n {
        let moved = checked_sub(read_point(coords, j), pivot_point)
            .and_then(|rel| checked_apply(m, rel))
            .and_then(|rel| checked_add(rel, pivot_point));
        let Some(moved) = moved else {
            return TrialOutcome::Rejected;
        };
        if !seen.insert(moved) {
            return TrialOutcome::Rejected;
        }
        scratch.extend_from_slice(&moved);
    }

    coords[(index + 1) * D..].copy_from_slice(&scratch[..]);
    TrialOutcome::Accepted
}
