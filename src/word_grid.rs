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
use super::level::Level;
use super::placement::{Cell, Placement};

/// The cells covered by a level’s placements along with the letters
/// that have been confirmed so far.
#[derive(Debug, Clone)]
pub struct WordGrid {
    placements: Vec<Placement>,
    width: usize,
    height: usize,
    letters: Vec<Option<char>>,
}

impl fmt::Display for WordGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = Cell::new(x, y);

                match self.get_letter(cell) {
                    Some(letter) => write!(f, "{}", letter)?,
                    None if self.word_at(cell).is_some() => write!(f, ".")?,
                    None => write!(f, " ")?,
                }
            }

            if y + 1 < self.height {
                writeln!(f)?;
            }
        }

        Ok(())
    }
}

impl WordGrid {
    pub fn new(level: &Level) -> WordGrid {
        let (width, height) = level.dimensions();

        WordGrid {
            placements: level.placements().to_vec(),
            width,
            height,
            letters: vec![None; width * height],
        }
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn cell_index(&self, cell: Cell) -> Option<usize> {
        (cell.x < self.width && cell.y < self.height)
            .then(|| cell.y * self.width + cell.x)
    }

    /// The first placement in level order that covers `cell`.
    pub fn word_at(&self, cell: Cell) -> Option<usize> {
        self.placements.iter().position(|p| p.contains(cell))
    }

    pub fn words_at(&self, cell: Cell) -> Vec<usize> {
        self.placements
            .iter()
            .enumerate()
            .filter_map(|(index, p)| p.contains(cell).then_some(index))
            .collect()
    }

    /// The letter that the solution has at `cell`. When intersecting
    /// words disagree the first one wins and the disagreement is
    /// logged.
    pub fn letter_at(&self, cell: Cell) -> Option<char> {
        let mut words = self
            .placements
            .iter()
            .enumerate()
            .filter_map(|(index, p)| p.letter_at(cell).map(|l| (index, l)));

        let (first, letter) = words.next()?;

        for (other, other_letter) in words {
            if other_letter != letter {
                log::warn!(
                    "cell {}: word {} has “{}” but word {} has “{}”",
                    cell,
                    first + 1,
                    letter,
                    other + 1,
                    other_letter,
                );
            }
        }

        Some(letter)
    }

    /// Confirms a letter. Returns false if the cell is outside of the
    /// grid.
    pub fn place_letter(&mut self, cell: Cell, letter: char) -> bool {
        match self.cell_index(cell) {
            Some(index) => {
                self.letters[index] = Some(letter);
                true
            },
            None => false,
        }
    }

    pub fn remove_letter(&mut self, cell: Cell) {
        if let Some(index) = self.cell_index(cell) {
            self.letters[index] = None;
        }
    }

    pub fn has_letter(&self, cell: Cell) -> bool {
        self.get_letter(cell).is_some()
    }

    pub fn get_letter(&self, cell: Cell) -> Option<char> {
        self.cell_index(cell).and_then(|index| self.letters[index])
    }

    pub fn confirmed_count(&self) -> usize {
        self.letters.iter().filter(|l| l.is_some()).count()
    }

    /// The first index of the placement whose cell has no confirmed
    /// letter yet.
    pub fn next_empty_index(&self, placement: &Placement) -> Option<usize> {
        placement.cells().position(|cell| !self.has_letter(cell))
    }

    pub fn clear(&mut self) {
        self.letters.fill(None);
    }
}
