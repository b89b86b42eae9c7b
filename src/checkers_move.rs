use std::fmt;

use crate::position::Coord;

/// What happens as a side effect of a move.
///
/// Decided when the move is generated and carried unchanged into application.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    Null,
    /// Removes the piece at the given coordinate.
    Capture(Coord),
}

impl Effect {
    pub fn is_capture(&self) -> bool {
        matches!(self, Effect::Capture(_))
    }

    pub fn captured(&self) -> Option<Coord> {
        match self {
            Effect::Capture(coord) => Some(*coord),
            Effect::Null => None,
        }
    }
}

/// A single step of the selected piece.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move {
    pub destination: Coord,
    pub effect: Effect,
}

impl Move {
    pub const fn step(destination: Coord) -> Move {
        Move {
            destination,
            effect: Effect::Null,
        }
    }

    pub const fn capture(destination: Coord, captured: Coord) -> Move {
        Move {
            destination,
            effect: Effect::Capture(captured),
        }
    }

    pub fn is_capture(&self) -> bool {
        self.effect.is_capture()
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.effect {
            Effect::Null => write!(f, "-{}", self.destination),
            Effect::Capture(captured) => write!(f, "x{}{}", captured, self.destination),
        }
    }
}

/// Where a pending chain of moves stands.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum ChainState {
    /// No move chosen yet.
    Fresh,
    /// The last move captured; only further captures may follow.
    Continuing,
    /// The last move was a plain step; the turn is over.
    Ended,
}

impl ChainState {
    pub fn of(chain: &[Move]) -> ChainState {
        match chain.last() {
            None => ChainState::Fresh,
            Some(last) if last.is_capture() => ChainState::Continuing,
            Some(_) => ChainState::Ended,
        }
    }
}
