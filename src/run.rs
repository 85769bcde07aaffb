/*
run.rs

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

//! Play a level without a user interface.
//!
//! A [`LevelRun`] object keeps the status of a level in progress: the maze, the player position,
//! the remaining encounters, the question waiting for an answer, the lives, and the score.
//! The user interface translates the player actions into [`LevelRun::step`] and
//! [`LevelRun::answer`] calls and renders the returned outcomes.
//!
//! The run does not save anything. When the level is finished, the caller records the
//! [`RewardResult`] and the collected cards in the player's [`crate::progress::Progress`].

use log::debug;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::collections::{HashMap, VecDeque};
use std::error::Error;
use std::fmt;
use std::time::{Duration, Instant};

use crate::config::MAX_LIVES;
use crate::generator::grid::{Cell, Coord, Grid};
use crate::generator::maze::MazeGenerator;
use crate::generator::questions::{AgeGroup, Question, QuestionGenerator};
use crate::generator::rewards::{RewardResult, RewardSystem};
use crate::levels;

/// Player moves.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Return the coordinate next to the given one in this direction, or None if it would be
    /// negative.
    pub fn apply(self, (x, y): Coord) -> Option<Coord> {
        match self {
            Direction::Up => Some((x, y.checked_sub(1)?)),
            Direction::Down => Some((x, y + 1)),
            Direction::Left => Some((x.checked_sub(1)?, y)),
            Direction::Right => Some((x + 1, y)),
        }
    }

    /// The reverse move.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Return the move that goes from `from` to the adjacent cell `to`.
    pub fn between(from: Coord, to: Coord) -> Option<Self> {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
        .into_iter()
        .find(|d| d.apply(from) == Some(to))
    }
}

/// Result of a player move.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// The player moved to an empty cell.
    Moved,

    /// The player entered an encounter cell and must answer the question.
    Encounter(Question),

    /// The player reached the exit.
    Finished(RewardResult),
}

/// Result of an answer.
#[derive(Debug, Clone, PartialEq)]
pub enum AnswerOutcome {
    /// Correct answer. The encounter cell is cleared and the animal card is collected.
    Defeated { card: String },

    /// Wrong answer. The encounter stays, and the player lost a life.
    Missed { lives: u8 },

    /// Wrong answer with the last life.
    GameOver,
}

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RunError {
    /// The move leads into a wall or outside the maze.
    Blocked(Direction),

    /// A question is waiting for an answer; the player cannot move.
    AwaitingAnswer,

    /// No question to answer.
    NoPendingQuestion,

    /// The level is finished or the game is over.
    Ended,
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RunError::Blocked(d) => write!(f, "cannot move {d:?}: wall"),
            RunError::AwaitingAnswer => write!(f, "a question is waiting for an answer"),
            RunError::NoPendingQuestion => write!(f, "no question to answer"),
            RunError::Ended => write!(f, "the level is over"),
        }
    }
}

impl Error for RunError {}

/// Status of a level in progress.
pub struct LevelRun<R: Rng = ThreadRng> {
    /// Level number (1 or more).
    level: u32,

    /// Maze. Encounter cells are reset to [`Cell::Path`] when defeated.
    grid: Grid,

    /// Exit cell.
    end: Coord,

    /// Current player position.
    position: Coord,

    /// Undefeated encounters and the animal that guards them.
    animals: HashMap<Coord, &'static str>,

    /// Encounter cell and question waiting for an answer.
    pending: Option<(Coord, Question)>,

    /// Question generator for the player's age group.
    questions: QuestionGenerator<R>,

    /// Number of correct answers.
    correct: u32,

    /// Number of answers.
    total: u32,

    /// Remaining lives.
    lives: u8,

    /// Cards won during the run.
    cards: Vec<String>,

    /// Reward, set when the player reaches the exit.
    result: Option<RewardResult>,

    /// Time when the run started. Used to compute the speed bonus.
    start_time: Instant,
}

impl LevelRun<ThreadRng> {
    /// Create a [`LevelRun`] object for the given level and age group.
    pub fn new(level: u32, age_group: AgeGroup) -> Self {
        Self::with_rng(level, age_group, rand::rng())
    }
}

impl<R: Rng> LevelRun<R> {
    /// Create a [`LevelRun`] object with the provided random number generator.
    ///
    /// The generator is used for the maze, for selecting the animals, and for the questions.
    pub fn with_rng(level: u32, age_group: AgeGroup, mut rng: R) -> Self {
        let (level, grid, start, end, encounters) = {
            let mut maze: MazeGenerator<&mut R> = MazeGenerator::with_rng(level, &mut rng);
            maze.generate();
            (
                maze.level(),
                maze.grid().clone(),
                maze.start(),
                maze.end(),
                maze.encounters().to_vec(),
            )
        };

        let set: &[&str; 15] = levels::animals_for_level(level);
        let animals: HashMap<Coord, &'static str> = encounters
            .into_iter()
            .map(|coord| (coord, set[rng.random_range(0..set.len())]))
            .collect();
        debug!("Level {level} animals: {animals:?}");

        Self {
            level,
            grid,
            end,
            position: start,
            animals,
            pending: None,
            questions: QuestionGenerator::with_rng(age_group, rng),
            correct: 0,
            total: 0,
            lives: MAX_LIVES,
            cards: Vec::new(),
            result: None,
            start_time: Instant::now(),
        }
    }

    /// Move the player one cell in the given direction.
    ///
    /// # Errors
    ///
    /// The method returns an error if the move is not possible: a wall, a question waiting for
    /// an answer, or a level already over.
    pub fn step(&mut self, direction: Direction) -> Result<StepOutcome, RunError> {
        if self.is_over() {
            return Err(RunError::Ended);
        }
        if self.pending.is_some() {
            return Err(RunError::AwaitingAnswer);
        }
        let next: Coord = direction
            .apply(self.position)
            .filter(|c| self.grid.get(*c).is_some_and(Cell::is_walkable))
            .ok_or(RunError::Blocked(direction))?;
        self.position = next;

        if next == self.end {
            let result: RewardResult = RewardSystem::evaluate(
                self.level,
                self.correct,
                self.total,
                self.elapsed(),
            );
            debug!(
                "Level {} finished: {}/{} correct, {result:?}",
                self.level, self.correct, self.total
            );
            self.result = Some(result);
            return Ok(StepOutcome::Finished(result));
        }

        if self.animals.contains_key(&next) {
            let question: Question = self.questions.generate(self.level);
            debug!("Encounter at {next:?}: {question}");
            self.pending = Some((next, question.clone()));
            return Ok(StepOutcome::Encounter(question));
        }
        Ok(StepOutcome::Moved)
    }

    /// Answer the pending question with the given choice.
    ///
    /// # Errors
    ///
    /// The method returns an error if there is no question to answer.
    pub fn answer(&mut self, choice: &str) -> Result<AnswerOutcome, RunError> {
        if self.is_over() {
            return Err(RunError::Ended);
        }
        let (coord, question) = self.pending.take().ok_or(RunError::NoPendingQuestion)?;
        self.total += 1;

        if question.is_correct(choice) {
            self.correct += 1;
            self.grid.set(coord, Cell::Path);
            let animal: &str = self.animals.remove(&coord).unwrap_or_default();
            let card: String = levels::card_id(levels::theme_index(self.level), animal);
            if !self.cards.contains(&card) {
                self.cards.push(card.clone());
            }
            debug!("Defeated {animal} at {coord:?}");
            return Ok(AnswerOutcome::Defeated { card });
        }

        self.lives = self.lives.saturating_sub(1);
        debug!("Wrong answer {choice:?} for {:?}: {} lives left", question.prompt, self.lives);
        if self.lives == 0 {
            Ok(AnswerOutcome::GameOver)
        } else {
            Ok(AnswerOutcome::Missed { lives: self.lives })
        }
    }

    /// Whether the level is finished or the game is over.
    pub fn is_over(&self) -> bool {
        self.result.is_some() || self.lives == 0
    }

    /// Time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Level being played.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Maze of the run.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Current position of the player.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Position of the exit.
    pub fn end(&self) -> Coord {
        self.end
    }

    /// Remaining lives.
    pub fn lives(&self) -> u8 {
        self.lives
    }

    /// Number of questions answered correctly.
    pub fn correct(&self) -> u32 {
        self.correct
    }

    /// Number of questions answered.
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Number of encounters not yet defeated.
    pub fn remaining_encounters(&self) -> usize {
        self.animals.len()
    }

    /// Animal guarding the given encounter cell.
    pub fn animal_at(&self, coord: Coord) -> Option<&'static str> {
        self.animals.get(&coord).copied()
    }

    /// Question waiting for an answer.
    pub fn pending_question(&self) -> Option<&Question> {
        self.pending.as_ref().map(|(_, q)| q)
    }

    /// Cards won during the run, in the order they were won.
    pub fn collected_cards(&self) -> &[String] {
        &self.cards
    }

    /// Reward, once the exit is reached.
    pub fn result(&self) -> Option<RewardResult> {
        self.result
    }
}

/// Return the shortest path between two cells, both included, or None if the cells are not
/// connected.
///
/// Only walls block the path: encounter cells are crossed.
pub fn shortest_path(grid: &Grid, from: Coord, to: Coord) -> Option<Vec<Coord>> {
    if !grid.get(from).is_some_and(Cell::is_walkable) {
        return None;
    }
    let mut previous: HashMap<Coord, Coord> = HashMap::new();
    let mut queue: VecDeque<Coord> = VecDeque::from([from]);
    previous.insert(from, from);

    while let Some(current) = queue.pop_front() {
        if current == to {
            let mut path: Vec<Coord> = vec![current];
            let mut c: Coord = current;
            while c != from {
                c = previous[&c];
                path.push(c);
            }
            path.reverse();
            return Some(path);
        }
        for next in grid.walkable_neighbours(current) {
            if !previous.contains_key(&next) {
                previous.insert(next, current);
                queue.push_back(next);
            }
        }
    }
    None
}
