//! Random branch generation for the Sakura rotation puzzle.
//!
//! A *branch* is a random tree of connectors carved into a [`Grid`]. The
//! [`BranchGenerator`] resets the grid, seeds a mask of forbidden cells whose size is
//! controlled by the [`RelaxFactor`], carves the tree depth-first from a random start
//! cell and finally moves the root to a cell with at least two connectors.
//!
//! Every random decision is drawn from a single [`Pcg64`] stream, so a round is
//! reproducible from its [`RoundSeed`].
//!
//! [`Grid`]: sakura_core::Grid
//! [`Pcg64`]: rand_pcg::Pcg64
//!
//! # Examples
//!
//! ```
//! use sakura_core::Grid;
//! use sakura_generator::{BranchGenerator, RelaxFactor, RoundSeed};
//!
//! let mut grid = Grid::new(7, 6).unwrap();
//! let generator = BranchGenerator::new(RelaxFactor::default());
//! let seed = RoundSeed::from_phrase("sakura");
//! let branch = generator.generate_with_seed(&mut grid, seed);
//!
//! assert!(grid.is_all_in_place());
//! assert_eq!(grid.root(), branch.root);
//! ```

pub use self::{
    branch::{BranchGenerator, GeneratedBranch, find_root},
    relax::{RelaxFactor, RelaxFactorError},
    seed::{RoundSeed, SeedParseError},
};

mod branch;
mod relax;
mod seed;
