/*
questions.rs

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

//! Generate arithmetic and algebra questions for an age group.
//!
//! Each age group has its own set of operations. Within an age group, the numbers grow with the
//! level, up to a cap that keeps the mental arithmetic reasonable.
//!
//! | Age group | Operations                                        |
//! |-----------|---------------------------------------------------|
//! | 5-7       | addition                                          |
//! | 8-10      | addition, subtraction, multiplication             |
//! | 11-13     | the above, division, power, square root           |
//! | 14+       | linear equation, percentage, area, sequence       |

use clap::ValueEnum;
use log::warn;
use rand::Rng;
use rand::rngs::ThreadRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::choices::{self, NUM_CHOICES};
use crate::config::MAX_LEVEL;
use crate::levels;

/// Player age group. Selects the question rules.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum AgeGroup {
    #[serde(rename = "5-7")]
    #[value(name = "5-7")]
    Ages5To7,

    #[default]
    #[serde(rename = "8-10")]
    #[value(name = "8-10")]
    Ages8To10,

    #[serde(rename = "11-13")]
    #[value(name = "11-13")]
    Ages11To13,

    #[serde(rename = "14+")]
    #[value(name = "14+")]
    Ages14Plus,
}

impl AgeGroup {
    /// All the age groups, youngest first.
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Ages5To7,
        AgeGroup::Ages8To10,
        AgeGroup::Ages11To13,
        AgeGroup::Ages14Plus,
    ];

    /// Tag used in saved progress files and on the command line.
    pub fn tag(self) -> &'static str {
        match self {
            AgeGroup::Ages5To7 => "5-7",
            AgeGroup::Ages8To10 => "8-10",
            AgeGroup::Ages11To13 => "11-13",
            AgeGroup::Ages14Plus => "14+",
        }
    }

    /// Return the age group for the given tag.
    ///
    /// Unknown tags fall back to the default age group, and a warning is logged.
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|_| {
            let fallback: AgeGroup = AgeGroup::default();
            warn!("Unknown age group {tag:?}, using {fallback}");
            fallback
        })
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Error returned when parsing an unknown age group tag.
#[derive(Debug, PartialEq)]
pub struct UnknownAgeGroup(pub String);

impl fmt::Display for UnknownAgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "unknown age group: {}", self.0)
    }
}

impl std::error::Error for UnknownAgeGroup {}

impl FromStr for AgeGroup {
    type Err = UnknownAgeGroup;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgeGroup::ALL
            .into_iter()
            .find(|a| a.tag() == s.trim())
            .ok_or_else(|| UnknownAgeGroup(s.to_string()))
    }
}

/// Type of question. Used by the user interface to format the question.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    Power,
    SquareRoot,
    Algebra,
    Percentage,
    Geometry,
    Sequence,
}

/// Multiple-choice question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Text displayed to the player, such as `3 + 4 = ?`.
    pub prompt: String,

    /// Correct answer.
    pub answer: i64,

    /// Shuffled choices. Exactly one of them is the correct answer.
    pub choices: [String; NUM_CHOICES],

    /// Question type.
    pub kind: QuestionKind,
}

impl Question {
    /// Whether the given choice is the correct answer.
    pub fn is_correct(&self, choice: &str) -> bool {
        choice.trim() == self.answer.to_string()
    }

    /// Index of the correct answer in [`Question::choices`].
    pub fn answer_index(&self) -> Option<usize> {
        let answer: String = self.answer.to_string();
        self.choices.iter().position(|c| *c == answer)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}  [{}]", self.prompt, self.choices.join(" | "))
    }
}

/// Return a question with its choices.
fn build<R: Rng>(
    prompt: String,
    answer: i64,
    max_spread: i64,
    kind: QuestionKind,
    rng: &mut R,
) -> Question {
    Question {
        prompt,
        answer,
        choices: choices::build_choices(answer, max_spread, rng),
        kind,
    }
}

/// [`QuestionGenerator`] object.
pub struct QuestionGenerator<R: Rng = ThreadRng> {
    /// Age group that selects the rules.
    age_group: AgeGroup,

    /// Random number generator.
    rng: R,
}

impl QuestionGenerator<ThreadRng> {
    /// Create the object for the given age group.
    pub fn new(age_group: AgeGroup) -> Self {
        Self::with_rng(age_group, rand::rng())
    }
}

impl<R: Rng> QuestionGenerator<R> {
    /// Create the object with the provided random number generator.
    pub fn with_rng(age_group: AgeGroup, rng: R) -> Self {
        Self { age_group, rng }
    }

    /// Age group of the generator.
    pub fn age_group(&self) -> AgeGroup {
        self.age_group
    }

    /// Generate a question for the given level.
    ///
    /// A level of 0 is processed as level 1. Levels above [`MAX_LEVEL`] use the same numbers as
    /// the last level.
    pub fn generate(&mut self, level: u32) -> Question {
        let level: i64 = levels::clamp_level(level).min(MAX_LEVEL) as i64;
        match self.age_group {
            AgeGroup::Ages5To7 => self.ages_5_7(level),
            AgeGroup::Ages8To10 => self.ages_8_10(level),
            AgeGroup::Ages11To13 => self.ages_11_13(level),
            AgeGroup::Ages14Plus => self.ages_14_plus(level),
        }
    }

    fn ages_5_7(&mut self, level: i64) -> Question {
        let max: i64 = (9 + level / 10).min(20);
        let a: i64 = self.rng.random_range(1..=max);
        let b: i64 = self.rng.random_range(1..=max);
        let answer: i64 = a + b;
        build(
            format!("{a} + {b} = ?"),
            answer,
            10,
            QuestionKind::Addition,
            &mut self.rng,
        )
    }

    fn ages_8_10(&mut self, level: i64) -> Question {
        let max: i64 = (10 + level * 3).min(100);
        let (prompt, answer, kind) = match self.rng.random_range(0..3) {
            0 => {
                let a: i64 = self.rng.random_range(1..=max);
                let b: i64 = self.rng.random_range(1..=max);
                (format!("{a} + {b} = ?"), a + b, QuestionKind::Addition)
            }
            1 => {
                let a: i64 = self.rng.random_range(1..=max);
                let b: i64 = self.rng.random_range(1..=max);
                let (a, b) = (a.max(b), a.min(b));
                (format!("{a} - {b} = ?"), a - b, QuestionKind::Subtraction)
            }
            _ => {
                // Keep the multiplication table small whatever the level
                let a: i64 = self.rng.random_range(2..=max.min(10));
                let b: i64 = self.rng.random_range(2..=max.min(10));
                (format!("{a} x {b} = ?"), a * b, QuestionKind::Multiplication)
            }
        };
        build(prompt, answer, (answer * 2).max(20), kind, &mut self.rng)
    }

    fn ages_11_13(&mut self, level: i64) -> Question {
        let max: i64 = (20 + level * 5).min(500);
        let (prompt, answer, kind) = match self.rng.random_range(0..6) {
            0 => {
                let a: i64 = self.rng.random_range(10..=max);
                let b: i64 = self.rng.random_range(10..=max);
                (format!("{a} + {b} = ?"), a + b, QuestionKind::Addition)
            }
            1 => {
                let a: i64 = self.rng.random_range(10..=max);
                let b: i64 = self.rng.random_range(10..=max);
                let (a, b) = (a.max(b), a.min(b));
                (format!("{a} - {b} = ?"), a - b, QuestionKind::Subtraction)
            }
            2 => {
                let a: i64 = self.rng.random_range(2..=20);
                let b: i64 = self.rng.random_range(2..=20);
                (format!("{a} x {b} = ?"), a * b, QuestionKind::Multiplication)
            }
            3 => {
                // Start from the result so that the division is exact
                let divisor: i64 = self.rng.random_range(2..=12);
                let quotient: i64 = self.rng.random_range(2..=20);
                (
                    format!("{} / {divisor} = ?", divisor * quotient),
                    quotient,
                    QuestionKind::Division,
                )
            }
            4 => {
                let base: i64 = self.rng.random_range(2..=10);
                let exponent: u32 = self.rng.random_range(2..=3);
                (
                    format!("{base}^{exponent} = ?"),
                    base.pow(exponent),
                    QuestionKind::Power,
                )
            }
            _ => {
                let root: i64 = self.rng.random_range(2..=15);
                (
                    format!("sqrt({}) = ?", root * root),
                    root,
                    QuestionKind::SquareRoot,
                )
            }
        };
        build(prompt, answer, (answer * 3).max(30), kind, &mut self.rng)
    }

    fn ages_14_plus(&mut self, level: i64) -> Question {
        match self.rng.random_range(0..4) {
            0 => self.algebra(level),
            1 => self.percentage(),
            2 => self.geometry(),
            _ => self.sequence(level),
        }
    }

    /// Solve `a*x + b = c`.
    fn algebra(&mut self, level: i64) -> Question {
        let x: i64 = self.rng.random_range(1..=10 + level);
        let a: i64 = self.rng.random_range(1..=10);
        let b: i64 = self.rng.random_range(1..=20);
        let c: i64 = a * x + b;
        build(
            format!("{a}x + {b} = {c},  x = ?"),
            x,
            30,
            QuestionKind::Algebra,
            &mut self.rng,
        )
    }

    fn percentage(&mut self) -> Question {
        const PERCENTS: [i64; 4] = [10, 20, 25, 50];
        let pct: i64 = PERCENTS[self.rng.random_range(0..PERCENTS.len())];
        let base: i64 = self.rng.random_range(20..=200);
        let answer: i64 = base * pct / 100;
        build(
            format!("{pct}% of {base} = ?"),
            answer,
            base,
            QuestionKind::Percentage,
            &mut self.rng,
        )
    }

    /// Area of a rectangle, a triangle, or a circle.
    fn geometry(&mut self) -> Question {
        let (prompt, answer) = match self.rng.random_range(0..3) {
            0 => {
                let w: i64 = self.rng.random_range(3..=20);
                let h: i64 = self.rng.random_range(3..=20);
                (format!("Area: {w} x {h} = ?"), w * h)
            }
            1 => {
                // An even base keeps the area an integer
                let b: i64 = self.rng.random_range(2..=10) * 2;
                let h: i64 = self.rng.random_range(3..=20);
                (format!("Triangle area: base {b}, height {h} = ?"), b * h / 2)
            }
            _ => {
                let r: i64 = self.rng.random_range(1..=10);
                (format!("Circle area: radius {r}, pi = 3 = ?"), 3 * r * r)
            }
        };
        build(
            prompt,
            answer,
            answer * 2 + 10,
            QuestionKind::Geometry,
            &mut self.rng,
        )
    }

    /// Next term of an arithmetic progression.
    fn sequence(&mut self, level: i64) -> Question {
        let start: i64 = self.rng.random_range(1..=10);
        let step: i64 = self.rng.random_range(2..=5 + level);
        let terms: Vec<String> = (0..4).map(|i| (start + i * step).to_string()).collect();
        let answer: i64 = start + 4 * step;
        build(
            format!("{}, ?", terms.join(", ")),
            answer,
            answer * 2,
            QuestionKind::Sequence,
            &mut self.rng,
        )
    }
}
