use thiserror::Error;

/// Reasons a grid cannot be built from its input rows.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum GridError {
    /// The input contained no rows at all.
    #[error("grid has no rows")]
    Empty,
    /// No `^` start marker was found anywhere in the grid.
    #[error("grid has no `^` start marker")]
    MissingStart,
}

/// Reasons a patrol simulation cannot produce a result.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum PatrolError {
    /// The unobstructed patrol was still inside the grid after visiting more
    /// states than the grid holds, so it must be cycling. The base grid is
    /// required to let the guard walk out eventually.
    #[error("unobstructed patrol still inside the grid after {transitions} transitions")]
    CyclicBasePatrol {
        /// Number of transitions simulated before giving up.
        transitions: usize,
    },
}
