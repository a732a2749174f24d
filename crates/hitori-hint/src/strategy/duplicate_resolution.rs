use hitori_core::{Cell, CellState, Grid, Position};
use tinyvec::TinyVec;

use super::{BoxedStrategy, Strategy};
use crate::{Hint, HintReason, Line};

const NAME: &str = "duplicate resolution";

type Members = TinyVec<[(Position, CellState); 8]>;

/// A strategy that resolves duplicate-value groups under marking pressure.
///
/// For every row and then every column, cells are grouped by value —
/// regardless of state, since a hint must consider the whole line. A group
/// with two or more members yields a hint in exactly two shapes:
///
/// - exactly one member is kept: the first other member that is not yet
///   shaded should be shaded (it duplicates the kept copy), or
/// - no member is kept and exactly one is undecided while the rest are
///   shaded: that member is the forced survivor and should be kept.
///
/// Rows are scanned before columns; within a line, groups are visited in
/// the order their value first appears.
#[derive(Debug, Default, Clone, Copy)]
pub struct DuplicateResolution;

impl DuplicateResolution {
    /// Creates a new `DuplicateResolution` strategy.
    #[must_use]
    pub const fn new() -> Self {
        DuplicateResolution
    }
}

impl Strategy for DuplicateResolution {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedStrategy {
        Box::new(*self)
    }

    fn find(&self, grid: &Grid) -> Option<Hint> {
        for row in 0..grid.size() {
            if let Some(hint) = scan_line(grid.row(row), Line::Row { index: row }) {
                return Some(hint);
            }
        }
        for col in 0..grid.size() {
            if let Some(hint) = scan_line(grid.column(col), Line::Column { index: col }) {
                return Some(hint);
            }
        }
        None
    }
}

fn scan_line<'a>(cells: impl Iterator<Item = &'a Cell>, line: Line) -> Option<Hint> {
    // Groups keep first-encounter value order.
    let mut groups: Vec<(u32, Members)> = Vec::new();
    for cell in cells {
        let member = (cell.position(), cell.state());
        match groups.iter_mut().find(|(value, _)| *value == cell.value()) {
            Some((_, members)) => members.push(member),
            None => {
                let mut members = Members::new();
                members.push(member);
                groups.push((cell.value(), members));
            }
        }
    }

    groups
        .into_iter()
        .filter(|(_, members)| members.len() > 1)
        .find_map(|(value, members)| resolve_group(line, value, &members))
}

fn resolve_group(line: Line, value: u32, members: &[(Position, CellState)]) -> Option<Hint> {
    let kept = members
        .iter()
        .filter(|(_, state)| *state == CellState::Kept)
        .count();

    if kept == 1 {
        let keeper = members
            .iter()
            .find(|(_, state)| *state == CellState::Kept)?
            .0;
        let (target, _) = members
            .iter()
            .find(|(pos, state)| *pos != keeper && !state.is_shaded())?;
        return Some(Hint::new(
            *target,
            CellState::Shaded,
            HintReason::ShadeDuplicate { line, value },
        ));
    }

    if kept == 0 {
        let mut undecided = members
            .iter()
            .filter(|(_, state)| *state == CellState::Undecided);
        if let (Some((survivor, _)), None) = (undecided.next(), undecided.next()) {
            return Some(Hint::new(
                *survivor,
                CellState::Kept,
                HintReason::KeepSurvivor { line, value },
            ));
        }
    }

    None
}
