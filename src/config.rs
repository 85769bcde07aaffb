/*
config.rs

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

//! Application constants.

/// Name displayed by the command line.
pub const APPLICATION_NAME: &str = "Math Forest";

/// Name of the progress file in the data directory.
pub const SAVE_FILE: &str = "mathforest_save.json";

/// Number of playable levels.
pub const MAX_LEVEL: u32 = 300;

/// Number of consecutive levels sharing a theme and an animal set.
pub const LEVELS_PER_THEME: u32 = 30;

/// Lives at the beginning of a level. A wrong answer costs one life.
pub const MAX_LIVES: u8 = 3;

/// Long version message, which includes the license.
pub const COPYRIGHT_NOTICE: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright 2025 The Math Forest developers
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law."
);
