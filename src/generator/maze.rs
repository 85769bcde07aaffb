/*
maze.rs

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

//! Generate a random maze for a level.
//!
//! The maze is carved with a randomized recursive backtracker: starting from the top-left cell,
//! the carver jumps two cells in a random direction, opens the wall in between, and recurses.
//! The result is a perfect maze: every path cell is reachable and there is exactly one route
//! between any two of them.
//!
//! After carving, the start and end cells are marked and a level-scaled number of path cells are
//! turned into encounter ([`Cell::Animal`]) cells.

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::SliceRandom;

use super::grid::{Cell, Coord, Grid};
use crate::levels;

const BASE_WIDTH: usize = 7;
const BASE_HEIGHT: usize = 9;
const MAX_WIDTH: usize = 25;
const MAX_HEIGHT: usize = 35;

/// The maze grows by [`GROWTH`] cells in both directions every [`GROWTH_LEVELS`] levels.
const GROWTH_LEVELS: u32 = 10;
const GROWTH: usize = 2;

const BASE_ENCOUNTERS: usize = 3;
const ENCOUNTER_LEVELS: u32 = 3;
const MAX_ENCOUNTERS: usize = 12;

/// Carving directions. The carver always moves two cells so that path cells stay on odd
/// coordinates and walls on even ones.
const DIRECTIONS: [(isize, isize); 4] = [(0, 2), (0, -2), (2, 0), (-2, 0)];

/// Return the `(width, height)` of the maze for the given level.
///
/// Both dimensions are odd.
pub fn size_for_level(level: u32) -> (usize, usize) {
    let growth: usize = (level / GROWTH_LEVELS) as usize * GROWTH;
    let mut width: usize = BASE_WIDTH.saturating_add(growth).min(MAX_WIDTH);
    let mut height: usize = BASE_HEIGHT.saturating_add(growth).min(MAX_HEIGHT);
    if width % 2 == 0 {
        width += 1;
    }
    if height % 2 == 0 {
        height += 1;
    }
    (width, height)
}

/// Return the number of encounters to place in the maze for the given level.
pub fn encounter_count(level: u32) -> usize {
    (BASE_ENCOUNTERS + (level / ENCOUNTER_LEVELS) as usize).min(MAX_ENCOUNTERS)
}

/// [`MazeGenerator`] object.
///
/// One generator is created per level. The random number generator is injected so that mazes
/// can be reproduced from a seed; [`MazeGenerator::new`] uses the thread-local generator.
pub struct MazeGenerator<R: Rng = ThreadRng> {
    /// Level number (1 or more).
    level: u32,

    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// Maze cells. All walls until [`MazeGenerator::generate`] is called.
    grid: Grid,

    /// Encounter cells in the order they were placed.
    encounters: Vec<Coord>,

    /// Random number generator.
    rng: R,
}

impl MazeGenerator<ThreadRng> {
    /// Create the object for the given level.
    pub fn new(level: u32) -> Self {
        Self::with_rng(level, rand::rng())
    }
}

impl<R: Rng> MazeGenerator<R> {
    /// Create the object for the given level with the provided random number generator.
    ///
    /// A level of 0 is processed as level 1.
    pub fn with_rng(level: u32, rng: R) -> Self {
        let level: u32 = levels::clamp_level(level);
        let (width, height) = size_for_level(level);
        Self {
            level,
            width,
            height,
            grid: Grid::new(width, height),
            encounters: Vec::new(),
            rng,
        }
    }

    /// Carve the maze, mark the start, end, and encounter cells, and return the grid.
    ///
    /// Calling the method again produces a new maze.
    pub fn generate(&mut self) -> &Grid {
        self.grid = Grid::new(self.width, self.height);
        self.encounters.clear();

        let start: Coord = self.start();
        let end: Coord = self.end();
        self.carve(start);
        self.grid.set(start, Cell::Start);
        self.grid.set(end, Cell::End);
        self.place_encounters();

        debug!(
            "Maze for level {}: {}x{}, {} encounters",
            self.level,
            self.width,
            self.height,
            self.encounters.len()
        );
        &self.grid
    }

    /// Recursively carve the passages from the given cell.
    fn carve(&mut self, (cx, cy): Coord) {
        let mut directions: [(isize, isize); 4] = DIRECTIONS;
        directions.shuffle(&mut self.rng);
        self.grid.set((cx, cy), Cell::Path);

        for (dx, dy) in directions {
            let (Some(nx), Some(ny)) = (cx.checked_add_signed(dx), cy.checked_add_signed(dy))
            else {
                continue;
            };
            if nx == 0 || ny == 0 || nx >= self.width - 1 || ny >= self.height - 1 {
                continue;
            }
            if self.grid.get((nx, ny)) != Some(Cell::Wall) {
                continue;
            }
            // Open the wall between the current and the next cell
            let wall: Coord = ((cx + nx) / 2, (cy + ny) / 2);
            self.grid.set(wall, Cell::Path);
            self.carve((nx, ny));
        }
    }

    /// Turn random path cells into encounter cells.
    fn place_encounters(&mut self) {
        // Start and end cells are already marked, so they are not in the list
        let mut candidates: Vec<Coord> = self.grid.coords_of(Cell::Path);
        candidates.shuffle(&mut self.rng);
        candidates.truncate(encounter_count(self.level));
        for coord in &candidates {
            self.grid.set(*coord, Cell::Animal);
        }
        self.encounters = candidates;
    }

    /// Level number used to size the maze.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The maze grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Coordinates of the encounter cells, in placement order.
    pub fn encounters(&self) -> &[Coord] {
        &self.encounters
    }

    /// Starting cell, always `(1, 1)`.
    pub fn start(&self) -> Coord {
        (1, 1)
    }

    /// Exit cell, always in the bottom-right corner inside the border.
    pub fn end(&self) -> Coord {
        (self.width - 2, self.height - 2)
    }
}
