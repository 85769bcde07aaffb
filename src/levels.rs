/*
levels.rs

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

//! Level catalogue.
//!
//! The 300 levels are grouped in ten themes of 30 levels. Each theme comes with a set of 15
//! animals: the animals guard the encounter cells, and the player collects an animal card for
//! each one defeated.

use log::warn;

use crate::config::{LEVELS_PER_THEME, MAX_LEVEL};

/// Visual theme shared by a range of levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Identifier, also used as the translation key for the theme name.
    pub id: &'static str,

    /// First level of the theme.
    pub first_level: u32,

    /// Background color. Components are floats between 0 and 1.
    pub bg: (f64, f64, f64, f64),
}

impl Theme {
    /// Last level of the theme.
    pub fn last_level(&self) -> u32 {
        self.first_level + LEVELS_PER_THEME - 1
    }
}

const fn theme(id: &'static str, index: u32, bg: (f64, f64, f64, f64)) -> Theme {
    Theme {
        id,
        first_level: index * LEVELS_PER_THEME + 1,
        bg,
    }
}

/// All the themes, in level order.
pub static THEMES: [Theme; 10] = [
    theme("forest", 0, (0.13, 0.45, 0.13, 1.0)),
    theme("cave", 1, (0.25, 0.20, 0.15, 1.0)),
    theme("clearing", 2, (0.55, 0.80, 0.30, 1.0)),
    theme("night", 3, (0.05, 0.05, 0.20, 1.0)),
    theme("underwater", 4, (0.05, 0.35, 0.65, 1.0)),
    theme("volcano", 5, (0.60, 0.15, 0.05, 1.0)),
    theme("snow", 6, (0.80, 0.90, 0.95, 1.0)),
    theme("cloud", 7, (0.70, 0.85, 1.00, 1.0)),
    theme("desert", 8, (0.90, 0.75, 0.30, 1.0)),
    theme("haunted", 9, (0.15, 0.08, 0.20, 1.0)),
];

/// Animal sets, one per theme.
pub static ANIMAL_SETS: [[&str; 15]; 10] = [
    [
        "rabbit", "fox", "deer", "bear", "owl", "wolf", "squirrel", "hedgehog", "raccoon",
        "beaver", "otter", "skunk", "moose", "lynx", "eagle",
    ],
    [
        "bat", "mole", "spider", "scorpion", "snake", "lizard", "toad", "worm", "cricket",
        "beetle", "mushroom_gnome", "cave_bear", "stalactite_sprite", "glowworm", "salamander",
    ],
    [
        "butterfly", "bee", "ladybug", "grasshopper", "dragonfly", "frog", "duck", "swan",
        "heron", "stork", "firefly", "mantis", "caterpillar", "snail", "dove",
    ],
    [
        "firefly", "owl", "wolf", "panther", "nighthawk", "bat_prince", "shadow_cat",
        "moon_rabbit", "star_fox", "luna_moth", "night_heron", "glowbug", "dark_deer",
        "midnight_bear", "phantom_bird",
    ],
    [
        "dolphin", "octopus", "seahorse", "jellyfish", "clownfish", "shark", "turtle", "crab",
        "starfish", "mermaid_cat", "pufferfish", "anglerfish", "coral_sprite", "sea_dragon",
        "narwhal",
    ],
    [
        "phoenix", "fire_lizard", "lava_toad", "ember_fox", "magma_crab", "ash_wolf",
        "flame_butterfly", "volcano_bird", "obsidian_snake", "cinder_bear", "heat_sprite",
        "smoke_cat", "eruption_frog", "lava_eel", "fire_deer",
    ],
    [
        "arctic_fox", "polar_bear", "snow_owl", "ice_rabbit", "penguin", "reindeer",
        "snow_leopard", "frost_wolf", "ice_dragon", "blizzard_bird", "tundra_hare",
        "glacier_seal", "snowflake_fairy", "yeti_cub", "crystal_deer",
    ],
    [
        "cloud_sheep", "sky_whale", "wind_horse", "thunder_bird", "rainbow_fox", "storm_cat",
        "nimbus_rabbit", "celestial_owl", "air_dragon", "cumulus_bear", "breeze_butterfly",
        "lightning_beetle", "gale_wolf", "mist_deer", "cirrus_bird",
    ],
    [
        "sand_cat", "camel", "desert_fox", "scorpion_king", "dune_snake", "oasis_frog",
        "mirage_deer", "dust_rabbit", "sun_lizard", "cactus_sprite", "sandstorm_wolf", "heat_owl",
        "pyramid_cat", "golden_eagle", "desert_tortoise",
    ],
    [
        "ghost_cat", "shadow_wolf", "phantom_deer", "spirit_fox", "haunted_owl",
        "skeleton_rabbit", "witch_bear", "zombie_frog", "banshee_bird", "specter_snake",
        "cursed_butterfly", "demon_lizard", "pumpkin_sprite", "graveyard_bat", "wraith_elk",
    ],
];

/// Return the level, or 1 if the level is 0.
pub fn clamp_level(level: u32) -> u32 {
    if level == 0 {
        warn!("Invalid level 0, using level 1");
        1
    } else {
        level
    }
}

/// Index of the theme and animal set for the level. Levels past [`MAX_LEVEL`] use the last one.
pub fn theme_index(level: u32) -> usize {
    let level: u32 = clamp_level(level).min(MAX_LEVEL);
    (((level - 1) / LEVELS_PER_THEME) as usize).min(THEMES.len() - 1)
}

/// Return the theme of the level.
pub fn theme_for_level(level: u32) -> &'static Theme {
    &THEMES[theme_index(level)]
}

/// Return the animals that can guard the encounter cells of the level.
pub fn animals_for_level(level: u32) -> &'static [&'static str; 15] {
    &ANIMAL_SETS[theme_index(level)]
}

/// Identifier of the card for the given animal set and animal, such as `set0_fox`.
pub fn card_id(set_index: usize, animal: &str) -> String {
    format!("set{set_index}_{animal}")
}

/// Number of collectible cards.
pub fn total_cards() -> usize {
    ANIMAL_SETS.iter().map(|s| s.len()).sum()
}

/// Diamonds advertised for the level in the level list.
pub fn diamonds_for_level(level: u32) -> u32 {
    5 + (level / 10) * 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themes_cover_all_levels() {
        assert_eq!(THEMES[0].first_level, 1);
        for pair in THEMES.windows(2) {
            assert_eq!(pair[0].last_level() + 1, pair[1].first_level);
        }
        assert_eq!(THEMES[THEMES.len() - 1].last_level(), MAX_LEVEL);
    }

    #[test]
    fn theme_lookup() {
        assert_eq!(theme_for_level(1).id, "forest");
        assert_eq!(theme_for_level(30).id, "forest");
        assert_eq!(theme_for_level(31).id, "cave");
        assert_eq!(theme_for_level(300).id, "haunted");
        assert_eq!(theme_for_level(1000).id, "haunted");
        assert_eq!(theme_for_level(0).id, "forest");
    }

    #[test]
    fn animals_follow_theme() {
        assert_eq!(animals_for_level(45)[0], "bat");
        assert_eq!(animals_for_level(299)[14], "wraith_elk");
    }

    #[test]
    fn cards() {
        assert_eq!(card_id(3, "star_fox"), "set3_star_fox");
        assert_eq!(total_cards(), 150);
    }

    #[test]
    fn advertised_diamonds() {
        assert_eq!(diamonds_for_level(1), 5);
        assert_eq!(diamonds_for_level(10), 7);
        assert_eq!(diamonds_for_level(300), 65);
    }
}
