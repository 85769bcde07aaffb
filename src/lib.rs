/*
lib.rs

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

//! Level content for Math Forest, an educational maze game for children.
//!
//! The player walks through a maze, answers arithmetic questions to get past the animals that
//! guard the path, collects animal cards, and earns diamonds.
//!
//! * [`generator`] produces the maze, the questions, and the rewards of a level.
//! * [`levels`] lists the level themes and their animal sets.
//! * [`run`] plays a level without a user interface.
//! * [`progress`] and [`saver`] keep the player progress in a JSON file.
//! * [`cli_options`] is the developer command line.

pub mod cli_options;
pub mod config;
pub mod generator;
pub mod levels;
pub mod progress;
pub mod run;
pub mod saver;
