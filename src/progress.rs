/*
progress.rs

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

//! Player progress.
//!
//! The [`Progress`] object is a flat document with the player preferences, the diamonds, the
//! unlocked and completed levels, the cosmetic items, and the collected cards.
//! See the [`crate::saver::progress`] module that saves and restores the object.
//!
//! The generators never access this object. The caller reads the level and the age group from
//! it, and records the outcome of a level with [`Progress::record_run`].

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::MAX_LEVEL;
use crate::generator::questions::AgeGroup;
use crate::generator::rewards::RewardResult;

/// Category of cosmetic items.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ItemCategory {
    Outfits,
    Accessories,
    Companions,
}

/// Player progress.
///
/// Missing keys take their default values when the document is loaded, and unknown keys are
/// ignored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Progress {
    /// Interface language code, such as `en`.
    pub language: String,

    /// Age group tag, such as `8-10`. See [`Progress::age_group`].
    pub age_group: String,

    /// Avatar style, such as `princess`.
    pub gender: String,

    /// Diamonds available for the shop.
    pub diamonds: u32,

    /// Last selected level.
    pub current_level: u32,

    /// Levels the player can start.
    pub unlocked_levels: Vec<u32>,
    /// Levels finished at least once.
    pub completed_levels: Vec<u32>,

    /// Shop items bought, per category.
    pub owned_outfits: Vec<String>,
    pub owned_accessories: Vec<String>,
    pub owned_companions: Vec<String>,

    /// Item equipped, per category.
    pub equipped_outfit: String,
    pub equipped_accessory: String,
    pub equipped_companion: String,

    /// Card identifiers, such as `set0_fox`.
    pub collected_cards: Vec<String>,

    /// Sum of the stars of all the completed runs.
    pub total_stars: u32,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// Create a [`Progress`] object for a new player.
    pub fn new() -> Self {
        Self {
            language: "en".to_string(),
            age_group: AgeGroup::default().tag().to_string(),
            gender: "princess".to_string(),
            diamonds: 0,
            current_level: 1,
            unlocked_levels: vec![1],
            completed_levels: Vec::new(),
            owned_outfits: vec!["outfit_default".to_string()],
            owned_accessories: vec!["acc_none".to_string()],
            owned_companions: vec!["comp_none".to_string()],
            equipped_outfit: "outfit_default".to_string(),
            equipped_accessory: "acc_none".to_string(),
            equipped_companion: "comp_none".to_string(),
            collected_cards: Vec::new(),
            total_stars: 0,
        }
    }

    /// Age group of the player. An unknown tag falls back to the default age group.
    pub fn age_group(&self) -> AgeGroup {
        AgeGroup::from_tag(&self.age_group)
    }

    pub fn set_age_group(&mut self, age_group: AgeGroup) {
        self.age_group = age_group.tag().to_string();
    }

    pub fn add_diamonds(&mut self, amount: u32) {
        self.diamonds = self.diamonds.saturating_add(amount);
    }

    /// Remove diamonds. Return `false`, and keep the diamonds, if there are not enough.
    pub fn spend_diamonds(&mut self, amount: u32) -> bool {
        if self.diamonds < amount {
            return false;
        }
        self.diamonds -= amount;
        true
    }

    pub fn is_unlocked(&self, level: u32) -> bool {
        self.unlocked_levels.contains(&level)
    }

    /// Unlock the level. Levels past the last one are ignored.
    pub fn unlock_level(&mut self, level: u32) {
        if (1..=MAX_LEVEL).contains(&level) && !self.is_unlocked(level) {
            self.unlocked_levels.push(level);
        }
    }

    /// Mark the level as completed, add the stars, and unlock the next level.
    pub fn complete_level(&mut self, level: u32, stars: u8) {
        if !self.completed_levels.contains(&level) {
            self.completed_levels.push(level);
        }
        self.total_stars = self.total_stars.saturating_add(stars as u32);
        self.unlock_level(level.saturating_add(1));
    }

    /// Add a card to the collection. Return `false` if the card was already collected.
    pub fn add_card(&mut self, card_id: &str) -> bool {
        if self.collected_cards.iter().any(|c| c == card_id) {
            return false;
        }
        self.collected_cards.push(card_id.to_string());
        true
    }

    fn owned(&self, category: ItemCategory) -> &Vec<String> {
        match category {
            ItemCategory::Outfits => &self.owned_outfits,
            ItemCategory::Accessories => &self.owned_accessories,
            ItemCategory::Companions => &self.owned_companions,
        }
    }

    pub fn owns_item(&self, item_id: &str, category: ItemCategory) -> bool {
        self.owned(category).iter().any(|i| i == item_id)
    }

    /// Add the item to the owned items. The caller spends the diamonds.
    pub fn buy_item(&mut self, item_id: &str, category: ItemCategory) {
        if self.owns_item(item_id, category) {
            return;
        }
        let owned: &mut Vec<String> = match category {
            ItemCategory::Outfits => &mut self.owned_outfits,
            ItemCategory::Accessories => &mut self.owned_accessories,
            ItemCategory::Companions => &mut self.owned_companions,
        };
        owned.push(item_id.to_string());
    }

    /// Equip an owned item. Return `false` if the item is not owned.
    pub fn equip_item(&mut self, item_id: &str, category: ItemCategory) -> bool {
        if !self.owns_item(item_id, category) {
            return false;
        }
        let equipped: &mut String = match category {
            ItemCategory::Outfits => &mut self.equipped_outfit,
            ItemCategory::Accessories => &mut self.equipped_accessory,
            ItemCategory::Companions => &mut self.equipped_companion,
        };
        *equipped = item_id.to_string();
        true
    }

    /// Record a completed level: stars, diamonds, next level unlocked, and cards.
    pub fn record_run(&mut self, level: u32, result: RewardResult, cards: &[String]) {
        self.complete_level(level, result.stars);
        self.add_diamonds(result.currency);
        let mut new_cards: usize = 0;
        for card in cards {
            if self.add_card(card) {
                new_cards += 1;
            }
        }
        debug!(
            "Level {level} recorded: +{} diamonds, {} stars, {new_cards} new cards",
            result.currency, result.stars
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_player_defaults() {
        let progress = Progress::new();
        assert_eq!(progress.age_group(), AgeGroup::Ages8To10);
        assert!(progress.is_unlocked(1));
        assert!(!progress.is_unlocked(2));
        assert!(progress.owns_item("outfit_default", ItemCategory::Outfits));
    }

    #[test]
    fn missing_and_unknown_keys() {
        let progress: Progress =
            serde_json::from_str(r#"{"diamonds": 12, "age_group": "11-13", "theme": "x"}"#)
                .unwrap();
        assert_eq!(progress.diamonds, 12);
        assert_eq!(progress.age_group(), AgeGroup::Ages11To13);
        assert_eq!(progress.equipped_companion, "comp_none");
    }

    #[test]
    fn unknown_age_group_falls_back() {
        let mut progress = Progress::new();
        progress.age_group = "99".to_string();
        assert_eq!(progress.age_group(), AgeGroup::Ages8To10);
        progress.set_age_group(AgeGroup::Ages14Plus);
        assert_eq!(progress.age_group, "14+");
    }

    #[test]
    fn diamonds() {
        let mut progress = Progress::new();
        progress.add_diamonds(10);
        assert!(!progress.spend_diamonds(11));
        assert_eq!(progress.diamonds, 10);
        assert!(progress.spend_diamonds(4));
        assert_eq!(progress.diamonds, 6);
    }

    #[test]
    fn complete_unlocks_next_level() {
        let mut progress = Progress::new();
        progress.complete_level(1, 2);
        progress.complete_level(1, 3);
        assert_eq!(progress.completed_levels, vec![1]);
        assert_eq!(progress.unlocked_levels, vec![1, 2]);
        assert_eq!(progress.total_stars, 5);

        progress.complete_level(MAX_LEVEL, 3);
        assert!(!progress.is_unlocked(MAX_LEVEL + 1));
    }

    #[test]
    fn complete_last_representable_level() {
        let mut progress = Progress::new();
        progress.complete_level(u32::MAX, 1);
        assert_eq!(progress.completed_levels, vec![u32::MAX]);
        assert_eq!(progress.unlocked_levels, vec![1]);
        assert_eq!(progress.total_stars, 1);

        progress.record_run(u32::MAX, RewardResult { currency: 1, stars: 1 }, &[]);
        assert_eq!(progress.diamonds, 1);
        assert_eq!(progress.total_stars, 2);
    }

    #[test]
    fn items() {
        let mut progress = Progress::new();
        assert!(!progress.equip_item("hat", ItemCategory::Accessories));
        progress.buy_item("hat", ItemCategory::Accessories);
        progress.buy_item("hat", ItemCategory::Accessories);
        assert_eq!(progress.owned_accessories, vec!["acc_none", "hat"]);
        assert!(progress.equip_item("hat", ItemCategory::Accessories));
        assert_eq!(progress.equipped_accessory, "hat");
        assert!(!progress.owns_item("hat", ItemCategory::Companions));
    }

    #[test]
    fn record_run() {
        let mut progress = Progress::new();
        let cards: Vec<String> = vec!["set0_fox".to_string(), "set0_owl".to_string()];
        progress.add_card("set0_fox");
        progress.record_run(3, RewardResult { currency: 15, stars: 3 }, &cards);
        assert_eq!(progress.diamonds, 15);
        assert_eq!(progress.total_stars, 3);
        assert!(progress.is_unlocked(4));
        assert_eq!(progress.collected_cards, cards);
    }
}
