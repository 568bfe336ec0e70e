//! Procedural terrain board.
//!
//! A square grid where the first and last rows (the deployment rows) are
//! always clear. Every other square rolls a d20: 1 places high terrain, 2
//! places low terrain, anything else leaves it empty.

use crate::config::GameConfig;
use crate::rng::{Dice, RngOracle, RollContext};

/// Row/column coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }
}

/// Terrain on a single square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    #[default]
    Empty,
    Low,
    High,
}

impl Terrain {
    /// Maps a d20 face onto terrain.
    pub const fn from_d20(face: u32) -> Self {
        match face {
            1 => Terrain::High,
            2 => Terrain::Low,
            _ => Terrain::Empty,
        }
    }

    /// Text marker used when painting the board.
    pub const fn marker(self) -> char {
        match self {
            Terrain::Empty => ' ',
            Terrain::Low => '^',
            Terrain::High => '$',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSquare {
    pub pos: Position,
    pub terrain: Terrain,
}

impl BoardSquare {
    pub fn has_low_terrain(&self) -> bool {
        self.terrain == Terrain::Low
    }

    pub fn has_high_terrain(&self) -> bool {
        self.terrain == Terrain::High
    }
}

/// Square terrain board, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Board {
    side: usize,
    squares: Vec<BoardSquare>,
}

impl Board {
    /// Rolls a fresh `side × side` board.
    pub fn generate<R: RngOracle>(side: usize, dice: &mut Dice<R>) -> Self {
        let capacity = side.min(GameConfig::MAX_BOARD_SIDE).pow(2);
        let mut squares = Vec::with_capacity(capacity);

        for row in 0..side {
            let deployment_row = row == 0 || row + 1 == side;
            for column in 0..side {
                let terrain = if deployment_row {
                    Terrain::Empty
                } else {
                    Terrain::from_d20(dice.roll(GameConfig::TERRAIN_DIE_SIDES, RollContext::Terrain))
                };
                squares.push(BoardSquare {
                    pos: Position::new(row, column),
                    terrain,
                });
            }
        }

        Self { side, squares }
    }

    pub fn side(&self) -> usize {
        self.side
    }

    pub fn square(&self, pos: Position) -> Option<&BoardSquare> {
        if pos.row >= self.side || pos.column >= self.side {
            return None;
        }
        self.squares.get(pos.row * self.side + pos.column)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[BoardSquare]> {
        self.squares.chunks(self.side.max(1))
    }

    pub fn squares(&self) -> &[BoardSquare] {
        &self.squares
    }

    /// Number of squares carrying `terrain`.
    pub fn count(&self, terrain: Terrain) -> usize {
        self.squares.iter().filter(|sq| sq.terrain == terrain).count()
    }

    /// One line per row, one marker per square.
    pub fn render(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|sq| sq.terrain.marker()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
