/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the level content.
//! The command prints the mazes, questions, and rewards that the game would produce, and can play
//! a level automatically.
//!
//! # Examples
//!
//! Print the maze of level 12, reproducibly:
//!
//! ```text
//! $ mathforest --level 12 --seed 7 --maze
//! Level 12 (forest): 9x11, 7 encounters
//! #########
//! #S      #
//! ...
//! ```
//!
//! Print five questions for the 11-13 age group:
//!
//! ```text
//! $ mathforest --age 11-13 --level 40 --questions 5
//! 84 / 7 = ?  [12 | 11 | 10 | 14]
//! sqrt(121) = ?  [11 | 9 | 12 | 13]
//! ...
//! ```
//!
//! Play level 3 with a player that answers 70% of the questions correctly, and record the result
//! in a progress file:
//!
//! ```text
//! $ mathforest --level 3 --simulate --accuracy 0.7 --save-dir /tmp/mathforest
//! ```

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::env;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;

use crate::config::{APPLICATION_NAME, COPYRIGHT_NOTICE};
use crate::generator::grid::{Coord, Grid};
use crate::generator::maze::MazeGenerator;
use crate::generator::questions::{AgeGroup, Question, QuestionGenerator};
use crate::generator::rewards::{RewardResult, RewardSystem};
use crate::levels;
use crate::run::{self, AnswerOutcome, Direction, LevelRun, StepOutcome};
use crate::saver::progress::SaverProgress;

/// Print Math Forest level content for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Level number
    #[arg(short, long, default_value_t = 1)]
    level: u32,

    /// Age group of the player
    #[arg(value_enum, short, long, default_value_t = AgeGroup::Ages8To10)]
    age: AgeGroup,

    /// Seed for the random number generator, to reproduce the output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the maze (default when no other action is requested)
    #[arg(short, long, default_value_t = false)]
    maze: bool,

    /// Number of questions to print
    #[arg(short, long, default_value_t = 0)]
    questions: usize,

    /// Compute the reward for CORRECT answers out of TOTAL questions
    #[arg(short, long, num_args = 2, value_names = ["CORRECT", "TOTAL"])]
    reward: Option<Vec<u32>>,

    /// Time taken to complete the level, in seconds, for the reward computation
    #[arg(short, long, default_value_t = 60, requires = "reward")]
    time: u64,

    /// Play the level along the shortest path to the exit
    #[arg(long, default_value_t = false)]
    simulate: bool,

    /// Probability that the simulated player answers correctly
    #[arg(long, default_value_t = 0.8, requires = "simulate", value_parser = parse_probability)]
    accuracy: f64,

    /// Directory of the progress file to update with the simulated run
    #[arg(long, requires = "simulate")]
    save_dir: Option<PathBuf>,

    /// List the level themes
    #[arg(long, default_value_t = false)]
    themes: bool,

    /// Print JSON instead of text
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

#[derive(Serialize)]
struct MazeReport {
    level: u32,
    theme: &'static str,
    width: usize,
    height: usize,
    start: Coord,
    end: Coord,
    encounters: Vec<Coord>,
    grid: Grid,
}

#[derive(Serialize)]
struct RewardReport {
    level: u32,
    correct: u32,
    total: u32,
    time_taken: u64,
    currency: u32,
    stars: u8,
}

#[derive(Serialize)]
struct SimulationReport {
    level: u32,
    age_group: AgeGroup,
    steps: usize,
    correct: u32,
    total: u32,
    lives: u8,
    result: Option<RewardResult>,
    cards: Vec<String>,
}

#[derive(Serialize)]
struct ThemeReport {
    id: &'static str,
    first_level: u32,
    last_level: u32,
    animals: &'static [&'static str],
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    match process(&args) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{APPLICATION_NAME}: {e}");
            1
        }
    }
}

fn process(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.themes {
        return print_themes(args.json);
    }

    let nothing_requested: bool = args.questions == 0 && args.reward.is_none() && !args.simulate;
    if args.maze || nothing_requested {
        print_maze(args, &mut rng)?;
    }
    if args.questions > 0 {
        print_questions(args, &mut rng)?;
    }
    if let Some(reward) = &args.reward {
        print_reward(args, reward[0], reward[1])?;
    }
    if args.simulate {
        simulate(args, &mut rng)?;
    }
    Ok(())
}

fn print_themes(json: bool) -> Result<(), Box<dyn Error>> {
    let reports: Vec<ThemeReport> = levels::THEMES
        .iter()
        .enumerate()
        .map(|(i, t)| ThemeReport {
            id: t.id,
            first_level: t.first_level,
            last_level: t.last_level(),
            animals: &levels::ANIMAL_SETS[i],
        })
        .collect();
    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }
    for t in &reports {
        println!(
            "{:>3}-{:<3} {:<11} {}",
            t.first_level,
            t.last_level,
            t.id,
            t.animals.join(", ")
        );
    }
    Ok(())
}

fn print_maze(args: &Args, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let mut maze: MazeGenerator<&mut StdRng> = MazeGenerator::with_rng(args.level, rng);
    maze.generate();
    let report = MazeReport {
        level: maze.level(),
        theme: levels::theme_for_level(maze.level()).id,
        width: maze.width(),
        height: maze.height(),
        start: maze.start(),
        end: maze.end(),
        encounters: maze.encounters().to_vec(),
        grid: maze.grid().clone(),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    println!(
        "Level {} ({}): {}x{}, {} encounters",
        report.level,
        report.theme,
        report.width,
        report.height,
        report.encounters.len()
    );
    print!("{}", report.grid);
    Ok(())
}

fn print_questions(args: &Args, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let mut generator: QuestionGenerator<&mut StdRng> =
        QuestionGenerator::with_rng(args.age, rng);
    let questions: Vec<Question> = (0..args.questions)
        .map(|_| generator.generate(args.level))
        .collect();
    if args.json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }
    for q in &questions {
        println!("{q}");
    }
    Ok(())
}

fn print_reward(args: &Args, correct: u32, total: u32) -> Result<(), Box<dyn Error>> {
    let time_taken: Duration = Duration::from_secs(args.time);
    let report = RewardReport {
        level: args.level,
        correct,
        total,
        time_taken: args.time,
        currency: RewardSystem::calculate(args.level, correct, total, time_taken),
        stars: RewardSystem::stars(correct, total),
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{}/{} correct in {}s: {} diamonds, {} stars",
            correct, total, args.time, report.currency, report.stars
        );
    }
    Ok(())
}

/// Parse a probability between 0 and 1, both included.
fn parse_probability(value: &str) -> Result<f64, String> {
    let p: f64 = value
        .parse()
        .map_err(|e| format!("{value:?} is not a number: {e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{value} is not between 0 and 1"))
    }
}

/// Choose the answer of the simulated player.
fn pick_answer(question: &Question, accuracy: f64, rng: &mut StdRng) -> String {
    let accuracy: f64 = if accuracy.is_nan() {
        0.0
    } else {
        accuracy.clamp(0.0, 1.0)
    };
    if rng.random_bool(accuracy) {
        return question.answer.to_string();
    }
    let wrong: Vec<&String> = question
        .choices
        .iter()
        .filter(|c| !question.is_correct(c))
        .collect();
    wrong[rng.random_range(0..wrong.len())].clone()
}

fn simulate(args: &Args, rng: &mut StdRng) -> Result<(), Box<dyn Error>> {
    let mut player: StdRng = StdRng::seed_from_u64(rng.random());
    let mut level_run: LevelRun<&mut StdRng> = LevelRun::with_rng(args.level, args.age, rng);
    let path: Vec<Coord> =
        run::shortest_path(level_run.grid(), level_run.position(), level_run.end())
            .ok_or("the exit cannot be reached")?;

    let mut steps: usize = 0;
    let mut i: usize = 1;
    while i < path.len() && !level_run.is_over() {
        let direction: Direction =
            Direction::between(path[i - 1], path[i]).ok_or("invalid path")?;
        steps += 1;
        let question: Question = match level_run.step(direction)? {
            StepOutcome::Encounter(q) => q,
            StepOutcome::Moved | StepOutcome::Finished(_) => {
                i += 1;
                continue;
            }
        };
        let choice: String = pick_answer(&question, args.accuracy, &mut player);
        debug!("{} -> {choice}", question.prompt);
        match level_run.answer(&choice)? {
            AnswerOutcome::Defeated { .. } => i += 1,
            AnswerOutcome::Missed { .. } => {
                // Step back, then face the animal again on the next iteration
                level_run.step(direction.opposite())?;
                steps += 1;
            }
            AnswerOutcome::GameOver => break,
        }
    }

    let report = SimulationReport {
        level: level_run.level(),
        age_group: args.age,
        steps,
        correct: level_run.correct(),
        total: level_run.total(),
        lives: level_run.lives(),
        result: level_run.result(),
        cards: level_run.collected_cards().to_vec(),
    };

    if let (Some(dir), Some(result)) = (&args.save_dir, report.result) {
        let saver = SaverProgress::new(dir.clone());
        let mut progress = saver.get_progress_or_default();
        progress.current_level = report.level;
        progress.record_run(report.level, result, &report.cards);
        saver.save_progress(&progress)?;
        debug!("Progress saved in {:?}", saver.path());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }
    match report.result {
        Some(result) => println!(
            "Level {} finished in {} steps: {}/{} correct, {} diamonds, {} stars, cards: {}",
            report.level,
            report.steps,
            report.correct,
            report.total,
            result.currency,
            result.stars,
            report.cards.join(", ")
        ),
        None => println!(
            "Game over on level {} after {} steps: {}/{} correct",
            report.level, report.steps, report.correct, report.total
        ),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::questions::QuestionKind;

    #[test]
    fn accuracy_must_be_a_probability() {
        assert_eq!(parse_probability("0.7"), Ok(0.7));
        assert_eq!(parse_probability("1"), Ok(1.0));
        assert!(parse_probability("NaN").is_err());
        assert!(parse_probability("1.5").is_err());
        assert!(parse_probability("-0.1").is_err());
        assert!(parse_probability("often").is_err());
    }

    #[test]
    fn accuracy_option_is_validated() {
        assert!(Args::try_parse_from(["mathforest", "--simulate", "--accuracy", "NaN"]).is_err());
        let args: Args =
            Args::try_parse_from(["mathforest", "--simulate", "--accuracy", "0.25"]).unwrap();
        assert_eq!(args.accuracy, 0.25);
    }

    #[test]
    fn nan_accuracy_picks_a_wrong_answer() {
        let question = Question {
            prompt: "2 + 2 = ?".to_string(),
            answer: 4,
            choices: ["3", "4", "5", "6"].map(String::from),
            kind: QuestionKind::Addition,
        };
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..20 {
            assert_ne!(pick_answer(&question, f64::NAN, &mut rng), "4");
            assert_eq!(pick_answer(&question, 1.0, &mut rng), "4");
        }
    }
}
