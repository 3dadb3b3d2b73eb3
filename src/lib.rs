#![warn(missing_docs)]

//! # `gallivant`
//!
//! Simulation core for the guard-patrol puzzle: a guard walks a rectangular
//! obstacle grid, moving forward until something blocks the way and turning
//! 90° clockwise when it does. The patrol ends once a step would carry the
//! guard off the grid.
//! Begin by building a [`PatrolGrid`] from rows of text with
//! [`PatrolGrid::from_rows`], then call
//! [`trace_base_path()`](PatrolGrid::trace_base_path) for the set of cells the
//! unobstructed patrol visits, or
//! [`count_loop_causing_obstructions()`](PatrolGrid::count_loop_causing_obstructions)
//! for the number of cells where one extra obstacle traps the guard forever.
//!
//! # Internals
//! The patrol is a deterministic walk over the finite space of
//! (location, heading) states, so it either leaves the grid or revisits a
//! state, and a revisited state proves an infinite cycle. The obstruction
//! search replays the walk once per candidate cell with the hypothesis
//! overlaid on the read-only base grid, tracking visited states in a per-run
//! bitmask; candidates are limited to cells on the unobstructed path, since an
//! obstacle the guard never reaches cannot change the walk. Hypotheses are
//! mutually independent and are evaluated in parallel.

pub use error::{GridError, PatrolError};
pub use grid::PatrolGrid;
pub use location::Location;

pub(crate) mod cell;
pub(crate) mod error;
pub(crate) mod grid;
pub(crate) mod heading;
pub(crate) mod location;
pub(crate) mod patrol;
