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
use super::word_grid::WordGrid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Valid(String),
    MissingLetters,
    WrongWord { formed: String, expected: String },
}

impl CheckResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, CheckResult::Valid(_))
    }
}

impl fmt::Display for CheckResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckResult::Valid(word) => write!(f, "“{}” is correct", word),
            CheckResult::MissingLetters => write!(f, "missing letters"),
            CheckResult::WrongWord { formed, expected } => {
                write!(f, "formed “{}” but expected “{}”", formed, expected)
            },
        }
    }
}

fn normalize(letters: impl IntoIterator<Item = char>) -> String {
    letters.into_iter().flat_map(char::to_uppercase).collect()
}

/// Compares a sequence of letters against the target text. There is
/// no partial credit and anagrams are rejected.
pub fn match_letters<I>(placement: &Placement, letters: I) -> CheckResult
where
    I: IntoIterator<Item = char>
{
    let formed = normalize(letters);
    let expected = normalize(placement.letters().iter().copied());

    if formed == expected {
        CheckResult::Valid(formed)
    } else {
        CheckResult::WrongWord { formed, expected }
    }
}

/// Checks whether the confirmed letters in the grid spell out the
/// placement.
pub fn check_word(placement: &Placement, grid: &WordGrid) -> CheckResult {
    let mut formed = String::with_capacity(placement.len());

    for cell in placement.cells() {
        match grid.get_letter(cell) {
            Some(letter) => formed.push(letter),
            None => return CheckResult::MissingLetters,
        }
    }

    let expected = placement.text();

    if formed == expected {
        CheckResult::Valid(formed)
    } else {
        CheckResult::WrongWord { formed, expected }
    }
}

/// Returns the indices of the incomplete placements that the grid
/// already spells out.
pub fn check_all_words(level: &Level, grid: &WordGrid) -> Vec<usize> {
    level
        .placements()
        .iter()
        .enumerate()
        .filter(|&(index, placement)| {
            !level.is_completed(index)
                && check_word(placement, grid).is_valid()
        })
        .map(|(index, _)| index)
        .collect()
}

/// Checks every incomplete placement that passes through `cell`.
pub fn check_affected_words(
    cell: Cell,
    level: &Level,
    grid: &WordGrid,
) -> Vec<(usize, CheckResult)> {
    level
        .placements()
        .iter()
        .enumerate()
        .filter(|&(index, placement)| {
            !level.is_completed(index) && placement.contains(cell)
        })
        .map(|(index, placement)| (index, check_word(placement, grid)))
        .collect()
}
