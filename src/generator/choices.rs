/*
choices.rs

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

//! Build the multiple-choice answers for a question.
//!
//! Wrong answers (distractors) are picked close to the correct answer so that the player has to
//! compute the result instead of guessing the odd one out.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

/// Number of choices presented to the player, including the correct answer.
pub const NUM_CHOICES: usize = 4;

/// Maximum number of random draws before falling back to [`fallback_distractors`].
const MAX_ATTEMPTS: usize = 50;

/// Smallest perturbation range. Prevents the search space from collapsing for small answers.
const MIN_SPREAD: i64 = 3;

/// Return the four shuffled choices for the given answer, as strings.
///
/// Distractors are `answer ± delta` with `delta` in `1..=max(3, max_spread / 5)`. They are never
/// negative, never equal to the answer, and never duplicated.
pub fn build_choices<R: Rng>(answer: i64, max_spread: i64, rng: &mut R) -> [String; NUM_CHOICES] {
    let spread: i64 = (max_spread / 5).max(MIN_SPREAD);
    let mut distractors: Vec<i64> = Vec::with_capacity(NUM_CHOICES - 1);
    let mut attempts: usize = 0;

    while distractors.len() < NUM_CHOICES - 1 && attempts < MAX_ATTEMPTS {
        attempts += 1;
        let delta: i64 = rng.random_range(1..=spread);
        let candidate: i64 = if rng.random_bool(0.5) {
            answer + delta
        } else {
            answer - delta
        };
        if candidate >= 0 && candidate != answer && !distractors.contains(&candidate) {
            distractors.push(candidate);
        }
    }
    if distractors.len() < NUM_CHOICES - 1 {
        debug!(
            "Only {} distractors for {answer} after {attempts} attempts, completing the list",
            distractors.len()
        );
        fallback_distractors(answer, &mut distractors);
    }

    let mut choices: Vec<i64> = distractors;
    choices.push(answer);
    choices.shuffle(rng);
    [0, 1, 2, 3].map(|i| choices[i].to_string())
}

/// Complete the list of distractors deterministically: `answer + 1`, `answer - 1`,
/// `answer + 2`, `answer - 2`, ...
fn fallback_distractors(answer: i64, distractors: &mut Vec<i64>) {
    let mut delta: i64 = 1;
    while distractors.len() < NUM_CHOICES - 1 {
        for candidate in [answer + delta, answer - delta] {
            if distractors.len() < NUM_CHOICES - 1
                && candidate >= 0
                && !distractors.contains(&candidate)
            {
                distractors.push(candidate);
            }
        }
        delta += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn assert_valid(choices: &[String; NUM_CHOICES], answer: i64) {
        let unique: HashSet<&String> = choices.iter().collect();
        assert_eq!(unique.len(), NUM_CHOICES, "duplicated choices: {choices:?}");
        let answer: String = answer.to_string();
        assert_eq!(choices.iter().filter(|c| **c == answer).count(), 1);
        for c in choices {
            assert!(c.parse::<i64>().unwrap() >= 0, "negative choice: {c}");
        }
    }

    #[test]
    fn choices_are_valid_for_small_answers() {
        let mut rng = StdRng::seed_from_u64(17);
        for answer in 0..20 {
            let choices = build_choices(answer, 0, &mut rng);
            assert_valid(&choices, answer);
        }
    }

    #[test]
    fn distractors_stay_within_spread() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..100 {
            let choices = build_choices(500, 100, &mut rng);
            assert_valid(&choices, 500);
            for c in &choices {
                let v: i64 = c.parse().unwrap();
                assert!((480..=520).contains(&v), "{v} out of range");
            }
        }
    }

    #[test]
    fn fallback_never_goes_negative() {
        let mut distractors: Vec<i64> = Vec::new();
        fallback_distractors(0, &mut distractors);
        assert_eq!(distractors, vec![1, 2, 3]);

        let mut distractors: Vec<i64> = vec![11];
        fallback_distractors(10, &mut distractors);
        assert_eq!(distractors, vec![11, 9, 12]);
    }
}
