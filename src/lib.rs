//! Rectangular range-sum queries over an immutable numeric grid.
//!
//! A [`Grid`] owns the matrix; [`Grid::in_range`] builds a [`RangeQuery`]
//! for one rectangle, which answers through three strategies of increasing
//! sophistication: a brute-force walk, row-wise prefix sums, and a full
//! summed-area table.

pub mod error;
pub mod grid;
pub mod query;

pub use error::GridError;
pub use grid::{Grid, GridPos};
pub use query::RangeQuery;
