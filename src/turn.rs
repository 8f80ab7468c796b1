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

use std::collections::VecDeque;
use rand::Rng;
use super::audio::{AudioPort, Sound};
use super::level::Level;
use super::matcher::{self, CheckResult};
use super::placement::Cell;
use super::tray::{Tray, TileId};
use super::word_grid::WordGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnState {
    AwaitingInput { target: usize },
    /// The target was completed and the move to the next one hasn’t
    /// happened yet.
    Evaluating { completed: usize },
    LevelComplete,
}

/// Things that whoever draws the game needs to know about. They are
/// queued in the order they happen and collected with
/// [`TurnController::next_event`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    TargetChanged { placement: usize, text: String },
    HighlightTarget { cells: Vec<Cell> },
    LetterConfirmed { cell: Cell, letter: char },
    WordRejected { tiles: Vec<TileId> },
    WordCompleted { placement: usize },
    LevelComplete,
    StopHint,
}

/// The deferred step that moves on from a completed word. It remembers
/// which word and which loaded level it belongs to so that a late
/// call can’t skip past a different target.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Advance {
    placement: usize,
    generation: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    Accepted(Advance),
    Rejected(CheckResult),
    /// There was nothing to compare against, either because the
    /// candidate was empty or because no target is open.
    Ignored,
}

pub struct TurnController<A> {
    level: Level,
    grid: WordGrid,
    tray: Tray,
    state: TurnState,
    held_tiles: Vec<TileId>,
    events: VecDeque<Event>,
    audio: A,
    // Bumped every time a level is loaded
    generation: u32,
}

impl Advance {
    pub fn placement(&self) -> usize {
        self.placement
    }
}

impl<A: AudioPort> TurnController<A> {
    pub fn new(level: Level, audio: A) -> TurnController<A> {
        let mut controller = TurnController {
            grid: WordGrid::new(&level),
            tray: Tray::new(level.letters()),
            level,
            state: TurnState::LevelComplete,
            held_tiles: Vec::new(),
            events: VecDeque::new(),
            audio,
            generation: 0,
        };

        controller.start();

        controller
    }

    /// Throws away the current game and starts playing `level` with
    /// the same audio.
    pub fn load(&mut self, level: Level) {
        self.grid = WordGrid::new(&level);
        self.tray = Tray::new(level.letters());
        self.level = level;
        self.held_tiles.clear();
        self.events.clear();
        self.generation = self.generation.wrapping_add(1);

        self.start();
    }

    fn start(&mut self) {
        self.level.warn_conflicts();
        self.select_next_target();
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn target(&self) -> Option<usize> {
        match self.state {
            TurnState::AwaitingInput { target } => Some(target),
            TurnState::Evaluating { .. } | TurnState::LevelComplete => None,
        }
    }

    pub fn target_text(&self) -> Option<String> {
        self.target().map(|target| self.level.placement(target).text())
    }

    pub fn is_level_complete(&self) -> bool {
        self.state == TurnState::LevelComplete
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn grid(&self) -> &WordGrid {
        &self.grid
    }

    pub fn tray(&self) -> &Tray {
        &self.tray
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut A {
        &mut self.audio
    }

    pub fn next_event(&mut self) -> Option<Event> {
        self.events.pop_front()
    }

    /// Opens `placement` for input and forgets any half-made
    /// selection. Returns false if the level has no such placement.
    pub fn set_target(&mut self, placement: usize) -> bool {
        let Some(placement_ref) = self.level.placements().get(placement)
        else {
            return false;
        };

        let text = placement_ref.text();
        let cells = placement_ref.cells().collect::<Vec<Cell>>();

        self.tray.cancel();
        self.state = TurnState::AwaitingInput { target: placement };

        log::debug!("new target: {}", text);

        self.events.push_back(Event::TargetChanged { placement, text });
        self.events.push_back(Event::HighlightTarget { cells });

        true
    }

    fn select_next_target(&mut self) {
        match self.level.first_incomplete() {
            Some(next) => {
                self.set_target(next);
            },
            None => self.finish_level(),
        }
    }

    fn finish_level(&mut self) {
        log::info!("level complete");

        self.state = TurnState::LevelComplete;
        self.events.push_back(Event::LevelComplete);
        self.audio.play(Sound::LevelComplete);
    }

    pub fn begin_drag(&mut self, tile: TileId) -> bool {
        self.events.push_back(Event::StopHint);
        self.tray.begin_drag(tile)
    }

    pub fn drag_over(&mut self, tile: TileId) -> bool {
        self.tray.drag_over(tile)
    }

    /// Finishes the drag gesture and submits whatever was selected.
    pub fn release(&mut self) -> Submission {
        let tiles = self.tray.release();
        self.submit_candidate(&tiles)
    }

    /// Submits a complete sequence of tiles for the current target.
    /// The letters must spell the target exactly, in order.
    pub fn submit_candidate(&mut self, tiles: &[TileId]) -> Submission {
        let target = match self.state {
            TurnState::AwaitingInput { target }
                if !tiles.is_empty() && !self.level.is_completed(target) =>
            {
                target
            },
            _ => {
                self.tray.deselect(tiles);
                return Submission::Ignored;
            },
        };

        let letters = tiles
            .iter()
            .filter_map(|&id| self.tray.tile(id))
            .map(|tile| tile.letter)
            .collect::<Vec<char>>();

        let distinct = tiles
            .iter()
            .enumerate()
            .all(|(i, tile)| !tiles[..i].contains(tile));

        let result = if letters.len() == tiles.len() && distinct {
            matcher::match_letters(self.level.placement(target), letters)
        } else {
            // Each tile can only be used once and it has to exist
            CheckResult::WrongWord {
                formed: letters.into_iter().collect(),
                expected: self.level.placement(target).text(),
            }
        };

        if result.is_valid() {
            log::debug!("accepted {}", result);

            self.tray.mark_used(tiles);
            self.held_tiles.extend_from_slice(tiles);
            self.audio.play(Sound::Correct);

            match self.complete_placement(target) {
                Some(advance) => Submission::Accepted(advance),
                None => Submission::Ignored,
            }
        } else {
            log::debug!("rejected: {}", result);

            self.tray.deselect(tiles);
            self.audio.play(Sound::Wrong);
            self.events.push_back(Event::WordRejected {
                tiles: tiles.to_vec(),
            });

            Submission::Rejected(result)
        }
    }

    /// Marks a word as completed and writes its letters into the grid.
    /// Completing a word a second time, or a placement that isn’t in
    /// the level, does nothing and returns None.
    pub fn complete_placement(&mut self, placement: usize) -> Option<Advance> {
        if !self.level.complete_word(placement) {
            return None;
        }

        let placement_ref = self.level.placement(placement);

        for (cell, &letter) in
            placement_ref.cells().zip(placement_ref.letters().iter())
        {
            self.grid.place_letter(cell, letter);
            self.events.push_back(Event::LetterConfirmed { cell, letter });
        }

        self.events.push_back(Event::WordCompleted { placement });
        self.audio.play(Sound::WordComplete);

        if self.state == (TurnState::AwaitingInput { target: placement }) {
            self.state = TurnState::Evaluating { completed: placement };
        }

        Some(Advance {
            placement,
            generation: self.generation,
        })
    }

    /// Moves on from the word that `advance` was created for. Returns
    /// false and does nothing if the game has already moved on.
    pub fn advance(&mut self, advance: Advance) -> bool {
        if advance.generation != self.generation {
            return false;
        }

        match self.state {
            TurnState::Evaluating { completed }
                if completed == advance.placement =>
            {
                let held = std::mem::take(&mut self.held_tiles);
                self.tray.release_tiles(&held);
                self.select_next_target();
                true
            },
            _ => false,
        }
    }

    /// The tiles that a hint animation should trace for the target.
    pub fn hint_tiles(&self) -> Option<Vec<TileId>> {
        self.target_text().and_then(|text| self.tray.tiles_for_word(&text))
    }

    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.tray.shuffle(rng);
    }
}
