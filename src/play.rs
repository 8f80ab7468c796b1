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


use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplelog::{ColorChoice, LevelFilter, TermLogger, TerminalMode};
use crosswheel::audio::LogAudio;
use crosswheel::catalog::Catalog;
use crosswheel::session::{Progress, Session};
use crosswheel::tray::TileState;
use crosswheel::turn::{Submission, TurnController};

/// Plays the game in the terminal. Type a word to swipe it on the wheel,
/// “?” for a hint, “!” to shuffle the wheel or an empty line to quit.
#[derive(Clone, Debug, Parser)]
struct Opts {
    /// JSON file with the levels to play instead of the built-in ones
    #[arg(short, long)]
    levels: Option<PathBuf>,

    /// Id of the level to start on
    #[arg(short = 'n', long)]
    level: Option<u32>,

    /// Seed for shuffling the wheel
    #[arg(short, long)]
    seed: Option<u64>,

    /// Log game events and sounds
    #[arg(short, long)]
    verbose: bool,
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

fn show(controller: &mut TurnController<LogAudio>) {
    while let Some(event) = controller.next_event() {
        log::debug!("{:?}", event);
    }

    println!("{}", controller.grid());
    println!();

    let tray = controller.tray();
    let wheel = tray
        .tiles_by_slot()
        .into_iter()
        .filter_map(|id| tray.tile(id))
        .map(|tile| match tile.state {
            TileState::Available => tile.letter,
            TileState::Selected | TileState::Used => '·',
        })
        .collect::<String>();

    println!("Letters: {}", wheel);

    if let Some(target) = controller.target() {
        let level = controller.level();

        println!(
            "Word {} of {} has {} letters",
            target + 1,
            level.placements().len(),
            level.placement(target).len(),
        );
    }
}

fn submit_word(controller: &mut TurnController<LogAudio>, word: &str) {
    let Some(tiles) = controller.tray().tiles_for_word(word)
    else {
        println!("“{}” can’t be made from the letters", word.to_uppercase());
        return;
    };

    match controller.submit_candidate(&tiles) {
        Submission::Accepted(advance) => {
            println!("Correct!");

            if !controller.advance(advance) {
                log::warn!("the game had already moved on");
            }
        },
        Submission::Rejected(result) => println!("{}", result),
        Submission::Ignored => (),
    }
}

fn play(session: &mut Session<LogAudio>, rng: &mut StdRng) -> Result<(), ()> {
    let mut lines = std::io::stdin().lines();

    show(session.controller_mut());

    loop {
        print!("> ");

        if let Err(e) = std::io::stdout().flush() {
            eprintln!("{}", e);
            return Err(());
        }

        let line = match lines.next() {
            None => return Ok(()),
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                eprintln!("{}", e);
                return Err(());
            },
        };

        let controller = session.controller_mut();

        match line.trim() {
            "" => return Ok(()),
            "?" => match controller.hint_tiles() {
                Some(tiles) => {
                    println!("Hint: {}", controller.tray().letters_for(&tiles));
                },
                None => println!("No hint available"),
            },
            "!" => controller.shuffle(rng),
            word => submit_word(controller, word),
        }

        if session.controller().is_level_complete() {
            println!("Level {} complete!", session.current_id());

            match session.next_level() {
                Ok(Progress::Loaded(id)) => println!("Level {}", id),
                Ok(Progress::AllLevelsComplete) => {
                    println!("All levels complete!");
                    return Ok(());
                },
                Err(e) => {
                    eprintln!("{}", e);
                    return Err(());
                },
            }
        }

        show(session.controller_mut());
    }
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

    let session = match opts.level {
        Some(id) => Session::starting_at(catalog, id, LogAudio),
        None => Session::new(catalog, LogAudio),
    };

    let mut session = match session {
        Ok(session) => session,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        },
    };

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match play(&mut session, &mut rng) {
        Ok(()) => ExitCode::SUCCESS,
        Err(()) => ExitCode::FAILURE,
    }
}
