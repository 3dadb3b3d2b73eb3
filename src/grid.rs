use std::collections::HashSet;

use itertools::Itertools;
use strum::VariantArray;

use crate::cell::Cell;
use crate::error::GridError;
use crate::heading::Heading;
use crate::location::{Coord, Location};

/// An obstacle grid plus the guard's starting cell, parsed from rows of text.
///
/// Rows may have differing lengths; a location is in bounds only within its own
/// row. The grid never changes once built: obstruction hypotheses are overlaid
/// by the simulation, not written into the cells.
pub struct PatrolGrid {
    rows: Vec<Vec<Cell>>,
    start: Location,
}

impl PatrolGrid {
    /// Builds a grid from one string-like item per row. `#` is an obstacle,
    /// `^` marks the guard, anything else is an open cell; no whitespace is
    /// trimmed, so line terminators must already be stripped.
    ///
    /// Fails with [`GridError::Empty`] when there are no rows and
    /// [`GridError::MissingStart`] when no row carries the marker.
    pub fn from_rows<S>(rows: impl IntoIterator<Item = S>) -> Result<Self, GridError>
    where
        S: AsRef<str>,
    {
        let rows = rows
            .into_iter()
            .map(|row| row.as_ref().chars().map(Cell::from_char).collect_vec())
            .collect_vec();

        if rows.is_empty() {
            return Err(GridError::Empty);
        }

        // first marker in row-major order wins
        let start = rows
            .iter()
            .enumerate()
            .find_map(|(y, row)| {
                row.iter()
                    .find_position(|cell| **cell == Cell::Start)
                    .map(|(x, _)| Location(x, y))
            })
            .ok_or(GridError::MissingStart)?;

        Ok(Self { rows, start })
    }

    /// The cell the guard patrols from, facing up.
    pub fn start(&self) -> Location {
        self.start
    }

    pub(crate) fn cell(&self, location: Location) -> Option<Cell> {
        self.rows.get(location.1).and_then(|row| row.get(location.0)).copied()
    }

    pub(crate) fn is_blocked(&self, location: Location, obstruction: Option<Location>) -> bool {
        obstruction == Some(location) || self.cell(location) == Some(Cell::Obstacle)
    }

    pub(crate) fn height(&self) -> Coord {
        self.rows.len()
    }

    pub(crate) fn max_width(&self) -> Coord {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    // upper bound on distinct (location, heading) states; the simulation loops
    // use it as their transition safety bound
    pub(crate) fn transition_bound(&self) -> usize {
        Heading::VARIANTS.len() * self.height() * self.max_width()
    }

    /// Renders the grid with every location in `path` painted as `X`, one row
    /// per line. Ragged rows render at their own length.
    pub fn render_with_path(&self, path: &HashSet<Location>) -> String {
        let mut out = String::with_capacity(self.height() * (self.max_width() + 1));

        for (y, row) in self.rows.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                out.push(if path.contains(&Location(x, y)) {
                    'X'
                } else {
                    cell.display()
                });
            }
            out.push('\n');
        }

        out
    }
}
