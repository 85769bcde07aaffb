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

//! Save and restore the player progress.
//!
//! The saved object is a serialization of the [`Progress`] object in JSON format by using
//! [`serde`].

use log::{debug, warn};
use std::error::Error;
use std::fs::{self, File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::SAVE_FILE;
use crate::progress::Progress;

/// Object to save and restore the player progress.
pub struct SaverProgress {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverProgress {
    /// Create a [`SaverProgress`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the progress must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push(SAVE_FILE);
        debug!("Progress file: {data_dir:?}");
        Self {
            save_file: data_dir,
        }
    }

    /// Path to the save file.
    pub fn path(&self) -> &Path {
        &self.save_file
    }

    /// Retrieve the [`Progress`] object from the save file.
    ///
    /// Return None if the save file does not exist.
    pub fn get_progress(&self) -> Result<Option<Progress>, Box<dyn Error>> {
        let file: File = match File::open(&self.save_file) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let progress: Progress = serde_json::from_reader(reader)?;
        Ok(Some(progress))
    }

    /// Retrieve the [`Progress`] object, or the progress of a new player if the save file does
    /// not exist or cannot be read.
    pub fn get_progress_or_default(&self) -> Progress {
        match self.get_progress() {
            Ok(Some(progress)) => progress,
            Ok(None) => Progress::new(),
            Err(e) => {
                warn!("Cannot read {:?}, starting a new game: {e}", self.save_file);
                Progress::new()
            }
        }
    }

    /// Save the provided [`Progress`] object.
    ///
    /// The parent directory is created if it does not exist.
    pub fn save_progress(&self, progress: &Progress) -> Result<(), Box<dyn Error>> {
        if let Some(dir) = self.save_file.parent() {
            fs::create_dir_all(dir)?;
        }
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer_pretty(&mut writer, progress)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the save file.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::process;

    fn temp_dir(name: &str) -> PathBuf {
        let mut dir: PathBuf = env::temp_dir();
        dir.push(format!("mathforest-{name}-{}", process::id()));
        dir
    }

    #[test]
    fn missing_file_is_none() {
        let saver = SaverProgress::new(temp_dir("missing"));
        assert!(saver.get_progress().unwrap().is_none());
        assert_eq!(saver.get_progress_or_default(), Progress::new());
    }

    #[test]
    fn save_and_restore() {
        let dir: PathBuf = temp_dir("roundtrip");
        let saver = SaverProgress::new(dir.clone());
        let mut progress = Progress::new();
        progress.add_diamonds(42);
        progress.complete_level(1, 3);
        saver.save_progress(&progress).unwrap();

        assert_eq!(saver.get_progress().unwrap(), Some(progress));
        saver.delete_save();
        assert!(saver.get_progress().unwrap().is_none());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn corrupt_file_starts_fresh() {
        let dir: PathBuf = temp_dir("corrupt");
        fs::create_dir_all(&dir).unwrap();
        let saver = SaverProgress::new(dir.clone());
        fs::write(saver.path(), "{not json").unwrap();

        assert!(saver.get_progress().is_err());
        assert_eq!(saver.get_progress_or_default(), Progress::new());
        let _ = fs::remove_dir_all(dir);
    }
}
