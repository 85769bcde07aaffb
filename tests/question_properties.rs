/*
question_properties.rs

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

// Properties of the generated questions for every age group.

use mathforest::generator::questions::{AgeGroup, Question, QuestionGenerator};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn assert_valid(q: &Question) {
    let unique: HashSet<&String> = q.choices.iter().collect();
    assert_eq!(unique.len(), 4, "{q}");
    let answer: String = q.answer.to_string();
    assert_eq!(q.choices.iter().filter(|c| **c == answer).count(), 1, "{q}");
    assert!(q.answer >= 0, "{q}");
    for c in &q.choices {
        assert!(c.parse::<i64>().is_ok_and(|v| v >= 0), "{q}");
    }
}

#[test]
fn four_unique_choices_for_all_levels() {
    for (i, age_group) in AgeGroup::ALL.into_iter().enumerate() {
        let mut questions =
            QuestionGenerator::with_rng(age_group, StdRng::seed_from_u64(i as u64));
        for level in 1..=300 {
            for _ in 0..5 {
                assert_valid(&questions.generate(level));
            }
        }
    }
}

#[test]
fn level_zero_and_huge_levels() {
    for age_group in AgeGroup::ALL {
        let mut questions = QuestionGenerator::new(age_group);
        assert_eq!(questions.age_group(), age_group);
        assert_valid(&questions.generate(0));
        assert_valid(&questions.generate(u32::MAX));
    }
}

#[test]
fn youngest_prompt_format() {
    let mut questions = QuestionGenerator::new(AgeGroup::Ages5To7);
    let q: Question = questions.generate(1);
    let (a, b) = q
        .prompt
        .strip_suffix(" = ?")
        .and_then(|e| e.split_once(" + "))
        .unwrap();
    let (a, b): (i64, i64) = (a.parse().unwrap(), b.parse().unwrap());
    assert!((1..=9).contains(&a) && (1..=9).contains(&b));
    assert_eq!(q.answer, a + b);
}

#[test]
fn questions_serialize_for_the_interface() {
    let mut questions =
        QuestionGenerator::with_rng(AgeGroup::Ages14Plus, StdRng::seed_from_u64(9));
    let q: Question = questions.generate(12);
    let value: serde_json::Value = serde_json::to_value(&q).unwrap();
    assert_eq!(value["choices"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["answer"].as_i64(), Some(q.answer));
    let back: Question = serde_json::from_value(value).unwrap();
    assert_eq!(back, q);
}
