/*
generator.rs

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

//! Generate the content of a level.
//!
//! Three independent generators produce a level:
//!
//! * [`maze::MazeGenerator`] carves a random maze sized for the level, and marks the start, the
//!   exit, and the encounter cells.
//!   Create one object per level and call its [`maze::MazeGenerator::generate`] method once.
//!
//! * [`questions::QuestionGenerator`] returns a [`questions::Question`] for each encounter.
//!   The question rules depend on the player's [`questions::AgeGroup`], and the numbers grow
//!   with the level.
//!
//! * [`rewards::RewardSystem`] computes the diamonds and stars earned when the level is
//!   completed.
//!
//! The generators do not depend on each other and do not read or write the player's progress.
//! The caller composes them, as [`crate::run::LevelRun`] does.
//!
//! The random number generator is injected in the objects. Use a seeded generator, such as
//! [`rand::rngs::StdRng`], to reproduce a level.

pub mod choices;
pub mod grid;
pub mod maze;
pub mod questions;
pub mod rewards;
