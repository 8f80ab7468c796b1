// Crosswheel – A crossword word game on a letter wheel
// Copyright (C) 2023  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.


use std::fmt;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use crosswheel::catalog::Catalog;
use crosswheel::level::{Conflict, ParseError};
use crosswheel::tray::Tray;

/// Checks that every level in a catalog can be played.
#[derive(Clone, Debug, Parser)]
struct Opts {
    /// JSON file with the levels to check instead of the built-in ones
    #[arg(short, long)]
    levels: Option<PathBuf>,

    /// Log what each level contains
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, PartialEq)]
enum LevelMessage {
    ParseError(ParseError),
    Conflict(Conflict),
    Unspellable(String),
}

impl fmt::Display for LevelMessage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelMessage::ParseError(e) => write!(f, "{}", e),
            LevelMessage::Conflict(conflict) => write!(f, "{}", conflict),
            LevelMessage::Unspellable(word) => {
                write!(f, "“{}” can’t be made from the letters", word)
            },
        }
    }
}

fn load_catalog(filename: Option<&PathBuf>) -> Result<Catalog, ()> {
    let Some(filename) = filename
    else {
        return Ok(Catalog::builtin());
    };

    Catalog::from_file(filename).map_err(|e| {
        eprintln!("{}: {}", filename.display(), e);
    })
}

fn check_level(letters: &str, words: &str) -> Vec<LevelMessage> {
    let level = match crosswheel::Level::parse(letters, words) {
        Ok(level) => level,
        Err(e) => return vec![LevelMessage::ParseError(e)],
    };

    let (width, height) = level.dimensions();

    log::debug!(
        "{} letters, {} words, {}×{} grid",
        level.letters().len(),
        level.placements().len(),
        width,
        height,
    );

    let mut messages = level
        .conflicts()
        .into_iter()
        .map(LevelMessage::Conflict)
        .collect::<Vec<_>>();

    let tray = Tray::new(level.letters());

    for placement in level.placements() {
        let word = placement.text();

        if tray.tiles_for_word(&word).is_none() {
            messages.push(LevelMessage::Unspellable(word));
        }
    }

    messages
}

fn main() -> ExitCode {
    let opts = Opts::parse();

    let log_level = if opts.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    if let Err(e) = TermLogger::init(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    let Ok(catalog) = load_catalog(opts.levels.as_ref())
    else {
        return ExitCode::FAILURE;
    };

    let mut result = ExitCode::SUCCESS;

    for def in catalog.levels() {
        log::debug!("checking level {} “{}”", def.id, def.name);

        for message in check_level(&def.letters, &def.words) {
            result = ExitCode::FAILURE;

            eprintln!("level {}: {}", def.id, message);
        }
    }

    result
}

#[cfg(test)]
mod test {
    use super::*;
    use crosswheel::placement::Cell;

    #[test]
    fn good_level() {
        assert!(check_level(
            "G,O,D,L",
            "0,0,GOLD,H|0,0,GOD,V|0,2,DOG,H|2,0,LOG,V",
        ).is_empty());
    }

    #[test]
    fn parse_error() {
        let messages = check_level("G,O,D,L", "0,0,GOLD,H|0,0,GOD");

        assert_eq!(
            messages,
            vec![LevelMessage::ParseError(ParseError::WrongFieldCount(1, 3))],
        );
        assert_eq!(
            &messages[0].to_string(),
            "word 2: expected 4 fields but found 3",
        );
    }

    #[test]
    fn conflict() {
        let messages = check_level("C,A,T,D,O,G", "0,0,CAT,H|0,0,DOG,V");

        assert_eq!(
            messages,
            vec![LevelMessage::Conflict(Conflict {
                cell: Cell::new(0, 0),
                first: 0,
                other: 1,
                first_letter: 'C',
                other_letter: 'D',
            })],
        );
    }

    #[test]
    fn unspellable() {
        // There is only one O on the wheel
        let messages = check_level("M,O,N", "0,0,MOON,H|0,0,MO,V");

        assert_eq!(
            messages,
            vec![LevelMessage::Unspellable("MOON".to_string())],
        );
        assert_eq!(
            &messages[0].to_string(),
            "“MOON” can’t be made from the letters",
        );
    }
}
