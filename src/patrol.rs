use std::collections::HashSet;

use itertools::Itertools;
use ndarray::Array2;
use rayon::prelude::*;
use tracing::warn;

use crate::cell::Cell;
use crate::error::PatrolError;
use crate::grid::PatrolGrid;
use crate::heading::Heading;
use crate::location::Location;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub(crate) struct AgentState {
    pub(crate) location: Location,
    pub(crate) heading: Heading,
}

/// Result of one application of the stepping rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Advance {
    /// The agent turned in place or moved one cell; either way, one transition.
    To(AgentState),
    /// The forward cell is outside the grid. Terminal.
    Exited,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PatrolOutcome {
    Exited,
    Looping,
}

impl PatrolGrid {
    fn initial_state(&self) -> AgentState {
        AgentState {
            location: self.start(),
            heading: Heading::UP,
        }
    }

    /// One transition: blocked ahead turns the agent 90° clockwise in place,
    /// open ahead moves it forward, out of bounds ahead ends the patrol.
    ///
    /// `obstruction` is overlaid on the base grid as one extra obstacle; the
    /// grid itself is never touched.
    pub(crate) fn advance(&self, state: AgentState, obstruction: Option<Location>) -> Advance {
        let ahead = state.heading.attempt_from(state.location);

        if self.cell(ahead).is_none() {
            return Advance::Exited;
        }

        Advance::To(match self.is_blocked(ahead, obstruction) {
            true => AgentState {
                heading: state.heading.clockwise(),
                ..state
            },
            false => AgentState {
                location: ahead,
                ..state
            },
        })
    }

    /// Replays the unobstructed patrol from the start marker, facing up, and
    /// returns every distinct location visited before the guard leaves the
    /// grid, the start included.
    ///
    /// A patrol still inside the grid after more transitions than the grid has
    /// (location, heading) states must be cycling; that violates the input
    /// precondition and fails with [`PatrolError::CyclicBasePatrol`].
    pub fn trace_base_path(&self) -> Result<HashSet<Location>, PatrolError> {
        let mut visited = HashSet::new();
        visited.insert(self.start());

        let mut state = self.initial_state();
        let transitions = self.transition_bound();
        for _ in 0..transitions {
            match self.advance(state, None) {
                Advance::Exited => return Ok(visited),
                Advance::To(next) => {
                    visited.insert(next.location);
                    state = next;
                }
            }
        }

        Err(PatrolError::CyclicBasePatrol { transitions })
    }

    /// Counts the open cells where a single extra obstruction traps the guard
    /// in an infinite cycle.
    ///
    /// Only cells on the unobstructed path can change the patrol, so only
    /// those are tested; the start cell and pre-existing obstacles are never
    /// candidates. Hypotheses are independent and run in parallel, each with
    /// its own visited-state masks.
    pub fn count_loop_causing_obstructions(&self) -> Result<usize, PatrolError> {
        let candidates = self
            .trace_base_path()?
            .into_iter()
            .filter(|location| {
                *location != self.start() && self.cell(*location) == Some(Cell::Open)
            })
            .collect_vec();

        Ok(candidates
            .into_par_iter()
            .filter(|obstruction| self.obstructed_outcome(*obstruction) == PatrolOutcome::Looping)
            .count())
    }

    /// Full stepping run with `obstruction` overlaid: a repeated
    /// (location, heading) state proves a cycle, leaving the grid proves
    /// there is none.
    pub(crate) fn obstructed_outcome(&self, obstruction: Location) -> PatrolOutcome {
        // one bit per heading per cell
        let mut seen = Array2::from_elem((self.height(), self.max_width()), 0u8);

        let mut state = self.initial_state();
        seen[state.location.as_index()] |= state.heading.mask_bit();

        let transitions = self.transition_bound();
        for _ in 0..transitions {
            match self.advance(state, Some(obstruction)) {
                Advance::Exited => return PatrolOutcome::Exited,
                Advance::To(next) => {
                    let mask = &mut seen[next.location.as_index()];
                    if *mask & next.heading.mask_bit() != 0 {
                        return PatrolOutcome::Looping;
                    }
                    *mask |= next.heading.mask_bit();
                    state = next;
                }
            }
        }

        // a bounded state space must repeat within the bound; reachable only
        // if the stepping rule is broken
        warn!(
            ?obstruction,
            transitions, "patrol exceeded the transition bound; classified as non-looping"
        );
        PatrolOutcome::Exited
    }
}
