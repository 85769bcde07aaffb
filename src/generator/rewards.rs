/*
rewards.rs

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

//! Compute the diamonds and stars earned at the end of a level.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Diamonds paid for a perfect run on the first levels. One more diamond every ten levels.
const BASE_REWARD: u32 = 5;

/// Bonus for answering all the questions correctly.
const PERFECT_BONUS: u32 = 10;

/// Bonus for completing the level in less than [`SPEED_LIMIT`].
const SPEED_BONUS: u32 = 5;
const SPEED_LIMIT: Duration = Duration::from_secs(30);

/// Time used when the caller does not measure the level duration.
pub const DEFAULT_TIME_TAKEN: Duration = Duration::from_secs(60);

/// Outcome of a completed level.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct RewardResult {
    /// Diamonds earned. At least 1.
    pub currency: u32,

    /// Rating between 1 and 3.
    pub stars: u8,
}

/// Reward calculator.
pub struct RewardSystem;

impl RewardSystem {
    /// Return the diamonds earned for the level.
    ///
    /// Return 0 if no question was asked. Otherwise, the result is at least 1.
    /// `correct` values greater than `total` are processed as `total`.
    pub fn calculate(level: u32, correct: u32, total: u32, time_taken: Duration) -> u32 {
        if total == 0 {
            return 0;
        }
        let correct: u32 = correct.min(total);
        let base: u64 = (BASE_REWARD + level / 10) as u64;
        // floor(base * correct / total)
        let mut reward: u32 = (base * correct as u64 / total as u64) as u32;
        if correct == total {
            reward += PERFECT_BONUS;
        }
        if time_taken < SPEED_LIMIT {
            reward += SPEED_BONUS;
        }
        reward.max(1)
    }

    /// Return the number of stars (1 to 3) for the level, or 0 if no question was asked.
    pub fn stars(correct: u32, total: u32) -> u8 {
        if total == 0 {
            return 0;
        }
        let correct: u32 = correct.min(total);
        if correct == total {
            3
        } else if correct as u64 * 10 >= total as u64 * 7 {
            // At least 70% of correct answers
            2
        } else {
            1
        }
    }

    /// Return the reward for a completed level.
    ///
    /// A level completed without answering any question is paid as a run with one wrong answer,
    /// so that the result always has at least one diamond and one star.
    pub fn evaluate(level: u32, correct: u32, total: u32, time_taken: Duration) -> RewardResult {
        let total: u32 = total.max(1);
        RewardResult {
            currency: Self::calculate(level, correct, total, time_taken),
            stars: Self::stars(correct, total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_question_no_reward() {
        assert_eq!(RewardSystem::calculate(5, 0, 0, DEFAULT_TIME_TAKEN), 0);
        assert_eq!(RewardSystem::stars(0, 0), 0);
    }

    #[test]
    fn perfect_run_gets_bonus() {
        assert_eq!(RewardSystem::calculate(1, 4, 4, DEFAULT_TIME_TAKEN), 15);
        assert_eq!(RewardSystem::calculate(25, 4, 4, DEFAULT_TIME_TAKEN), 17);
        assert_eq!(RewardSystem::calculate(25, 4, 4, Duration::from_secs(12)), 22);
    }

    #[test]
    fn partial_run_is_prorated() {
        // floor(5 * 0.7) = 3
        assert_eq!(RewardSystem::calculate(1, 7, 10, DEFAULT_TIME_TAKEN), 3);
        assert_eq!(RewardSystem::calculate(1, 7, 10, Duration::from_secs(29)), 8);
        assert_eq!(RewardSystem::calculate(1, 7, 10, SPEED_LIMIT), 3);
    }

    #[test]
    fn reward_is_at_least_one() {
        assert_eq!(RewardSystem::calculate(1, 0, 10, DEFAULT_TIME_TAKEN), 1);
        assert_eq!(RewardSystem::calculate(300, 0, 1, DEFAULT_TIME_TAKEN), 1);
    }

    #[test]
    fn extra_correct_answers_are_ignored() {
        assert_eq!(
            RewardSystem::calculate(1, 12, 10, DEFAULT_TIME_TAKEN),
            RewardSystem::calculate(1, 10, 10, DEFAULT_TIME_TAKEN)
        );
        assert_eq!(RewardSystem::stars(12, 10), 3);
    }

    #[test]
    fn stars_boundaries() {
        assert_eq!(RewardSystem::stars(10, 10), 3);
        assert_eq!(RewardSystem::stars(7, 10), 2);
        assert_eq!(RewardSystem::stars(6, 10), 1);
        assert_eq!(RewardSystem::stars(0, 3), 1);
    }

    #[test]
    fn evaluate_without_questions() {
        let result: RewardResult = RewardSystem::evaluate(1, 0, 0, DEFAULT_TIME_TAKEN);
        assert_eq!(result, RewardResult { currency: 1, stars: 1 });
    }

    #[test]
    fn monotonic_in_accuracy() {
        for level in [1, 10, 99, 300] {
            for total in 1..=12 {
                let full = RewardSystem::calculate(level, total, total, DEFAULT_TIME_TAKEN);
                let half = RewardSystem::calculate(level, total / 2, total, DEFAULT_TIME_TAKEN);
                assert!(full >= half);
            }
        }
    }
}
