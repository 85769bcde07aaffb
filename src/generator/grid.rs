/*
grid.rs

Copyright 2025 The Math Forest developers

This file is part of Math Forest.

Math Forest is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Math Forest is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Math Forest. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Maze grid and cell states.
//!
//! A [`Grid`] stores `width x height` [`Cell`] values in row-major order.
//! Coordinates are `(x, y)` tuples where `x` is the column and `y` is the row, with `(0, 0)` at
//! the top-left corner.
//!
//! When serialized, the grid is written as a list of rows of numeric cell codes, which is the
//! format the game has always used for mazes in progress.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use strum_macros::FromRepr;

/// Grid coordinate as `(x, y)`.
pub type Coord = (usize, usize);

/// State of a maze cell.
///
/// The discriminants are the numeric codes used in serialized grids.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, FromRepr, Default)]
#[repr(u8)]
pub enum Cell {
    Path = 0,
    #[default]
    Wall = 1,
    Start = 2,
    End = 3,
    /// Encounter cell: the player must answer a question to go through.
    Animal = 4,
}

impl Cell {
    /// Whether the player can stand on the cell.
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }

    /// Character used for the text rendering of the grid.
    pub fn symbol(self) -> char {
        match self {
            Cell::Path => ' ',
            Cell::Wall => '#',
            Cell::Start => 'S',
            Cell::End => 'E',
            Cell::Animal => 'A',
        }
    }
}

/// Type of errors when building a grid from numeric codes.
#[derive(Debug, PartialEq)]
pub enum GridError {
    /// No rows, or empty rows.
    Empty,

    /// A row does not have the same length as the first one.
    Ragged { row: usize },

    /// A code does not match any [`Cell`].
    UnknownCode { code: u8, x: usize, y: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "the grid has no cells"),
            GridError::Ragged { row } => write!(f, "row {row} has an unexpected length"),
            GridError::UnknownCode { code, x, y } => {
                write!(f, "unknown cell code {code} at ({x}, {y})")
            }
        }
    }
}

impl Error for GridError {}

/// Two-dimensional array of cells.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<Vec<u8>>", into = "Vec<Vec<u8>>")]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a [`Grid`] object with all the cells set to [`Cell::Wall`].
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Wall; width * height],
        }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether the coordinate is inside the grid.
    pub fn contains(&self, (x, y): Coord) -> bool {
        x < self.width && y < self.height
    }

    /// Return the cell at the given coordinate, or None if the coordinate is outside the grid.
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        if self.contains(coord) {
            Some(self.cells[coord.1 * self.width + coord.0])
        } else {
            None
        }
    }

    /// Set the cell at the given coordinate.
    ///
    /// Return `false` if the coordinate is outside the grid.
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        if !self.contains(coord) {
            return false;
        }
        self.cells[coord.1 * self.width + coord.0] = cell;
        true
    }

    /// Number of cells in the given state.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    /// Coordinates of all the cells in the given state, in row-major order.
    pub fn coords_of(&self, cell: Cell) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| **c == cell)
            .map(|(i, _)| (i % self.width, i / self.width))
            .collect()
    }

    /// Walkable cells adjacent to the given coordinate (up, down, left, right).
    pub fn walkable_neighbours(&self, (x, y): Coord) -> Vec<Coord> {
        let mut neighbours: Vec<Coord> = Vec::with_capacity(4);
        if y > 0 {
            neighbours.push((x, y - 1));
        }
        if y + 1 < self.height {
            neighbours.push((x, y + 1));
        }
        if x > 0 {
            neighbours.push((x - 1, y));
        }
        if x + 1 < self.width {
            neighbours.push((x + 1, y));
        }
        neighbours.retain(|c| self.get(*c).is_some_and(Cell::is_walkable));
        neighbours
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl From<Grid> for Vec<Vec<u8>> {
    fn from(grid: Grid) -> Self {
        grid.cells
            .chunks(grid.width.max(1))
            .map(|row| row.iter().map(|c| *c as u8).collect())
            .collect()
    }
}

impl TryFrom<Vec<Vec<u8>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let width: usize = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells: Vec<Cell> = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::Ragged { row: y });
            }
            for (x, code) in row.iter().enumerate() {
                let cell: Cell =
                    Cell::from_repr(*code).ok_or(GridError::UnknownCode { code: *code, x, y })?;
                cells.push(cell);
            }
        }
        Ok(Self {
            width,
            height: rows.len(),
            cells,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_grid_is_all_walls() {
        let grid = Grid::new(5, 7);
        assert_eq!(grid.count(Cell::Wall), 35);
        assert_eq!(grid.get((4, 6)), Some(Cell::Wall));
        assert_eq!(grid.get((5, 0)), None);
    }

    #[test]
    fn set_outside_is_rejected() {
        let mut grid = Grid::new(3, 3);
        assert!(!grid.set((3, 1), Cell::Path));
        assert!(grid.set((1, 1), Cell::Path));
        assert_eq!(grid.coords_of(Cell::Path), vec![(1, 1)]);
    }

    #[test]
    fn neighbours_skip_walls() {
        let mut grid = Grid::new(5, 5);
        grid.set((1, 1), Cell::Start);
        grid.set((2, 1), Cell::Path);
        grid.set((1, 2), Cell::Animal);
        let mut n = grid.walkable_neighbours((1, 1));
        n.sort_unstable();
        assert_eq!(n, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn serialized_as_cell_codes() {
        let mut grid = Grid::new(3, 3);
        grid.set((1, 1), Cell::Start);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, "[[1,1,1],[1,2,1],[1,1,1]]");
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn invalid_codes_are_reported() {
        assert_eq!(Grid::try_from(vec![]), Err(GridError::Empty));
        assert_eq!(
            Grid::try_from(vec![vec![1, 1], vec![1]]),
            Err(GridError::Ragged { row: 1 })
        );
        assert_eq!(
            Grid::try_from(vec![vec![1, 9]]),
            Err(GridError::UnknownCode { code: 9, x: 1, y: 0 })
        );
    }

    #[test]
    fn display_uses_symbols() {
        let mut grid = Grid::new(3, 3);
        grid.set((1, 1), Cell::End);
        assert_eq!(grid.to_string(), "###\n#E#\n###\n");
    }
}
