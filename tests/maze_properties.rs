/*
maze_properties.rs

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

// Properties of the generated mazes over the full level range.

use mathforest::generator::grid::{Cell, Coord, Grid};
use mathforest::generator::maze::{self, MazeGenerator};
use mathforest::run::shortest_path;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn generate(level: u32) -> (Grid, Vec<Coord>, Coord, Coord) {
    let mut maze = MazeGenerator::with_rng(level, StdRng::seed_from_u64(level as u64 * 31 + 7));
    let grid: Grid = maze.generate().clone();
    (grid, maze.encounters().to_vec(), maze.start(), maze.end())
}

/// Number of walkable cells reachable from the given cell.
fn reachable(grid: &Grid, from: Coord) -> usize {
    let mut seen: HashSet<Coord> = HashSet::from([from]);
    let mut stack: Vec<Coord> = vec![from];
    while let Some(c) = stack.pop() {
        for n in grid.walkable_neighbours(c) {
            if seen.insert(n) {
                stack.push(n);
            }
        }
    }
    seen.len()
}

/// Number of pairs of adjacent walkable cells.
fn passages(grid: &Grid) -> usize {
    let walkable = |c: Coord| grid.get(c).is_some_and(Cell::is_walkable);
    let mut count: usize = 0;
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if !walkable((x, y)) {
                continue;
            }
            if walkable((x + 1, y)) {
                count += 1;
            }
            if walkable((x, y + 1)) {
                count += 1;
            }
        }
    }
    count
}

#[test]
fn start_and_end_are_connected() {
    for level in 1..=300 {
        let (grid, _, start, end) = generate(level);
        assert_eq!(grid.count(Cell::Start), 1, "level {level}");
        assert_eq!(grid.count(Cell::End), 1, "level {level}");
        assert_eq!(grid.get(start), Some(Cell::Start));
        assert_eq!(grid.get(end), Some(Cell::End));
        assert!(
            shortest_path(&grid, start, end).is_some(),
            "level {level}: exit not reachable"
        );
    }
}

#[test]
fn mazes_are_perfect() {
    for level in 1..=300 {
        let (grid, _, start, _) = generate(level);
        let walkable: usize = grid.width() * grid.height() - grid.count(Cell::Wall);
        // Connected, and a tree: one passage less than cells
        assert_eq!(reachable(&grid, start), walkable, "level {level}: not connected");
        assert_eq!(passages(&grid), walkable - 1, "level {level}: loop detected");
    }
}

#[test]
fn dimensions_are_odd_and_capped() {
    for level in 1..=300 {
        let (grid, _, _, end) = generate(level);
        assert_eq!(grid.width() % 2, 1);
        assert_eq!(grid.height() % 2, 1);
        assert!(grid.width() <= 25 && grid.height() <= 35);
        assert_eq!(end, (grid.width() - 2, grid.height() - 2));
        assert_eq!((grid.width(), grid.height()), maze::size_for_level(level));
    }
}

#[test]
fn encounters_are_bounded_and_distinct() {
    for level in 1..=300 {
        let (grid, encounters, start, end) = generate(level);
        assert!(encounters.len() <= 12);
        assert_eq!(encounters.len(), maze::encounter_count(level));
        let unique: HashSet<&Coord> = encounters.iter().collect();
        assert_eq!(unique.len(), encounters.len());
        for c in &encounters {
            assert_ne!(*c, start);
            assert_ne!(*c, end);
            assert_eq!(grid.get(*c), Some(Cell::Animal));
        }
        assert_eq!(grid.count(Cell::Animal), encounters.len());
    }
}

#[test]
fn thread_rng_generator() {
    let mut maze = MazeGenerator::new(1);
    let grid: Grid = maze.generate().clone();
    assert_eq!((grid.width(), grid.height()), (7, 9));
    assert_eq!(maze.end(), (5, 7));
    assert!((3..=4).contains(&maze.encounters().len()));
}
