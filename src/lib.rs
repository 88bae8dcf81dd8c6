//! # saw_pivot
//!
//! Self-avoiding walk sampler on the square (Z²) and cubic (Z³) lattices using
//! the pivot algorithm.
//!
//! A chain starts from a straight rod. Each trial picks a pivot point and a
//! lattice symmetry, rotates or reflects the tail of the walk about the pivot,
//! and keeps the result only if no site is visited twice. The chain converges
//! to the uniform distribution over walks of fixed length; it does not reach it
//! in finite time.
//!
//! ## Usage
//!
//! ```no_run
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use saw_pivot::prelude::*;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let walk = rod(1000, 2).unwrap();
//! let walk = pivot(walk, 10_000, 2, &mut rng).unwrap();
//! assert!(walk.is_self_avoiding());
//! for point in walk.points() {
//!     println!("{:?}", point);
//! }
//! ```
//!
//! Randomness is always injected: independent chains on separate threads each
//! own their walk and their seeded RNG.

pub mod chain;
pub mod error;
pub mod lattice;
pub mod pivot;
pub mod symmetry;
pub mod walk;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use crate::chain::*;
    pub use crate::error::PivotError;
    pub use crate::lattice::{Dimension, Point};
    pub use crate::pivot::*;
    pub use crate::symmetry::{elements, SymmetryGroup, SymmetryTable};
    pub use crate::walk::*;
}
