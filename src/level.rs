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
use super::placement::{Cell, Orientation, Placement};

#[derive(Debug, Clone)]
pub struct Level {
    letters: Vec<char>,
    placements: Vec<Placement>,
    completed: Vec<bool>,
    width: usize,
    height: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    BadLetter(usize, String),
    WrongFieldCount(usize, usize),
    InvalidCoordinate(usize, String),
    EmptyWord(usize),
    BadOrientation(usize, String),
    TooLarge(usize),
}

/// Two placements that disagree about the letter in a shared cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub cell: Cell,
    pub first: usize,
    pub other: usize,
    pub first_letter: char,
    pub other_letter: char,
}

const N_WORD_FIELDS: usize = 4;

/// Levels can’t be wider or taller than this.
pub const MAX_GRID_SIZE: usize = 64;

fn parse_letters(letters: &str) -> Result<Vec<char>, ParseError> {
    letters
        .split(',')
        .enumerate()
        .map(|(entry_num, entry)| {
            let entry = entry.trim();
            let mut chars = entry.chars();

            match (chars.next(), chars.next()) {
                (Some(ch), None) => Ok(ch),
                _ => Err(ParseError::BadLetter(entry_num, entry.to_string())),
            }
        })
        .collect()
}

fn parse_coordinate(
    entry_num: usize,
    field: &str,
) -> Result<usize, ParseError> {
    field.parse::<usize>().map_err(|_| {
        ParseError::InvalidCoordinate(entry_num, field.to_string())
    })
}

fn parse_placement(
    entry_num: usize,
    entry: &str,
) -> Result<Placement, ParseError> {
    let fields = entry.split(',').map(str::trim).collect::<Vec<&str>>();

    let &[x, y, word, orientation] = fields.as_slice()
    else {
        return Err(ParseError::WrongFieldCount(entry_num, fields.len()));
    };

    let x = parse_coordinate(entry_num, x)?;
    let y = parse_coordinate(entry_num, y)?;

    if word.is_empty() {
        return Err(ParseError::EmptyWord(entry_num));
    }

    let mut orientation_chars = orientation.chars();

    let Some(orientation_value) = orientation_chars
        .next()
        .filter(|_| orientation_chars.next().is_none())
        .and_then(Orientation::from_char)
    else {
        return Err(ParseError::BadOrientation(
            entry_num,
            orientation.to_string(),
        ));
    };

    let n_letters = word.chars().count();

    let (width, height) = match orientation_value {
        Orientation::Horizontal => (n_letters, 1),
        Orientation::Vertical => (1, n_letters),
    };

    if x.saturating_add(width) > MAX_GRID_SIZE
        || y.saturating_add(height) > MAX_GRID_SIZE
    {
        return Err(ParseError::TooLarge(entry_num));
    }

    Ok(Placement::new(x, y, word, orientation_value))
}

impl Level {
    /// Parses a level from its letters field, eg `G,O,D,L`, and its
    /// words field, eg `0,0,GOLD,H|0,0,GOD,V`.
    pub fn parse(letters: &str, words: &str) -> Result<Level, ParseError> {
        let letters = parse_letters(letters)?;

        let placements = words
            .split('|')
            .enumerate()
            .map(|(entry_num, entry)| parse_placement(entry_num, entry))
            .collect::<Result<Vec<Placement>, ParseError>>()?;

        Ok(Level::new(letters, placements))
    }

    fn new(letters: Vec<char>, placements: Vec<Placement>) -> Level {
        let (width, height) = placements.iter().fold(
            (0, 0),
            |(width, height), placement| {
                let end = placement.end();
                (width.max(end.x), height.max(end.y))
            },
        );

        let completed = vec![false; placements.len()];

        Level {
            letters,
            placements,
            completed,
            width,
            height,
        }
    }

    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Panics if `index` is out of range, the same as slice indexing.
    pub fn placement(&self, index: usize) -> &Placement {
        &self.placements[index]
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// False for an index that isn’t in the level.
    pub fn is_completed(&self, index: usize) -> bool {
        self.completed.get(index).copied().unwrap_or(false)
    }

    /// Marks a placement as completed. Returns true only the first
    /// time, so callers can tie side effects to the transition. An
    /// index that isn’t in the level is ignored.
    pub fn complete_word(&mut self, index: usize) -> bool {
        match self.completed.get_mut(index) {
            Some(completed) if !*completed => {
                *completed = true;
                true
            },
            _ => false,
        }
    }

    pub fn completed_count(&self) -> usize {
        self.completed.iter().filter(|&&c| c).count()
    }

    pub fn is_all_completed(&self) -> bool {
        self.completed.iter().all(|&c| c)
    }

    pub fn first_incomplete(&self) -> Option<usize> {
        self.completed.iter().position(|&c| !c)
    }

    pub fn find_placement(&self, text: &str) -> Option<usize> {
        self.placements
            .iter()
            .position(|p| p.letters().iter().copied().eq(text.chars()))
    }

    pub fn conflicts(&self) -> Vec<Conflict> {
        let mut conflicts = Vec::new();

        for (first, placement) in self.placements.iter().enumerate() {
            for (offset, other_placement) in
                self.placements[first + 1..].iter().enumerate()
            {
                for (index, cell) in placement.cells().enumerate() {
                    let Some(other_letter) = other_placement.letter_at(cell)
                    else {
                        continue;
                    };

                    let first_letter = placement.letters()[index];

                    if first_letter != other_letter {
                        conflicts.push(Conflict {
                            cell,
                            first,
                            other: first + 1 + offset,
                            first_letter,
                            other_letter,
                        });
                    }
                }
            }
        }

        conflicts
    }

    /// Logs a warning for every conflicting intersection.
    pub fn warn_conflicts(&self) -> usize {
        let conflicts = self.conflicts();

        for conflict in conflicts.iter() {
            log::warn!("{}", conflict);
        }

        conflicts.len()
    }
}

impl fmt::Display for Conflict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "cell {}: word {} has “{}” but word {} has “{}”",
            self.cell,
            self.first + 1,
            self.first_letter,
            self.other + 1,
            self.other_letter,
        )
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ParseError::BadLetter(entry_num, entry) => {
                write!(
                    f,
                    "letter {}: “{}” is not a single letter",
                    entry_num + 1,
                    entry,
                )
            },
            ParseError::WrongFieldCount(entry_num, count) => {
                write!(
                    f,
                    "word {}: expected {} fields but found {}",
                    entry_num + 1,
                    N_WORD_FIELDS,
                    count,
                )
            },
            ParseError::InvalidCoordinate(entry_num, field) => {
                write!(
                    f,
                    "word {}: invalid coordinate “{}”",
                    entry_num + 1,
                    field,
                )
            },
            ParseError::EmptyWord(entry_num) => {
                write!(f, "word {}: word is empty", entry_num + 1)
            },
            ParseError::BadOrientation(entry_num, orientation) => {
                write!(
                    f,
                    "word {}: orientation must be H or V but found “{}”",
                    entry_num + 1,
                    orientation,
                )
            },
            ParseError::TooLarge(entry_num) => {
                write!(
                    f,
                    "word {}: doesn’t fit in a {}×{} grid",
                    entry_num + 1,
                    MAX_GRID_SIZE,
                    MAX_GRID_SIZE,
                )
            },
        }
    }
}

impl std::error::Error for ParseError {
}

#[cfg(test)]
mod test {
    use super::*;

    const GOLD_LETTERS: &str = "G,O,D,L";
    const GOLD_WORDS: &str = "0,0,GOLD,H|0,0,GOD,V|0,2,DOG,H|2,0,LOG,V";

    #[test]
    fn parse() {
        let level = Level::parse(GOLD_LETTERS, GOLD_WORDS).unwrap();

        assert_eq!(level.letters(), &['G', 'O', 'D', 'L']);
        assert_eq!(level.placements().len(), 4);
        assert_eq!(level.dimensions(), (4, 3));

        assert_eq!(
            level.placement(0),
            &Placement::new(0, 0, "GOLD", Orientation::Horizontal),
        );
        assert_eq!(
            level.placement(3),
            &Placement::new(2, 0, "LOG", Orientation::Vertical),
        );

        assert_eq!(level.first_incomplete(), Some(0));
        assert_eq!(level.completed_count(), 0);
        assert!(level.conflicts().is_empty());
    }

    #[test]
    fn whitespace_and_duplicates() {
        let level = Level::parse(
            " M, O ,O,N",
            " 0, 0, MOON , H|0,0,MOO,V|0,0,MOO,V",
        ).unwrap();

        assert_eq!(level.letters(), &['M', 'O', 'O', 'N']);
        assert_eq!(level.placements().len(), 3);
        assert_eq!(level.placement(0).text(), "MOON");
        assert_eq!(level.find_placement("MOO"), Some(1));
        assert_eq!(level.find_placement("NOON"), None);
    }

    #[test]
    fn bounding_box() {
        let level = Level::parse(
            "A,B",
            "2,1,AB,V|0,5,BA,H",
        ).unwrap();

        assert_eq!(level.dimensions(), (3, 6));

        let level = Level::parse("A", "4,0,A,H").unwrap();

        assert_eq!(level.dimensions(), (5, 1));
    }

    #[test]
    fn bad_letter() {
        assert_eq!(
            Level::parse("G,OO,D", GOLD_WORDS).unwrap_err(),
            ParseError::BadLetter(1, "OO".to_string()),
        );
        assert_eq!(
            &Level::parse("", GOLD_WORDS).unwrap_err().to_string(),
            "letter 1: “” is not a single letter",
        );
    }

    #[test]
    fn wrong_field_count() {
        assert_eq!(
            Level::parse(GOLD_LETTERS, "0,0,GOLD").unwrap_err(),
            ParseError::WrongFieldCount(0, 3),
        );
        assert_eq!(
            Level::parse(GOLD_LETTERS, "0,0,GOLD,H,X").unwrap_err(),
            ParseError::WrongFieldCount(0, 5),
        );
        assert_eq!(
            &Level::parse(GOLD_LETTERS, "0,0,GOLD,H|0,0,GOD,V|")
                .unwrap_err()
                .to_string(),
            "word 3: expected 4 fields but found 1",
        );
    }

    #[test]
    fn invalid_coordinate() {
        assert_eq!(
            Level::parse(GOLD_LETTERS, "0,0,GOLD,H|x,0,GOD,V").unwrap_err(),
            ParseError::InvalidCoordinate(1, "x".to_string()),
        );
        assert_eq!(
            &Level::parse(GOLD_LETTERS, "0,-1,GOLD,H")
                .unwrap_err()
                .to_string(),
            "word 1: invalid coordinate “-1”",
        );
    }

    #[test]
    fn empty_word() {
        assert_eq!(
            Level::parse(GOLD_LETTERS, "0,0,,H").unwrap_err(),
            ParseError::EmptyWord(0),
        );
    }

    #[test]
    fn bad_orientation() {
        assert_eq!(
            Level::parse(GOLD_LETTERS, "0,0,GOLD,D").unwrap_err(),
            ParseError::BadOrientation(0, "D".to_string()),
        );
        assert_eq!(
            Level::parse(GOLD_LETTERS, "0,0,GOLD,h").unwrap_err(),
            ParseError::BadOrientation(0, "h".to_string()),
        );
        assert_eq!(
            &Level::parse(GOLD_LETTERS, "0,0,GOLD,HV")
                .unwrap_err()
                .to_string(),
            "word 1: orientation must be H or V but found “HV”",
        );
    }

    #[test]
    fn too_large() {
        assert_eq!(
            Level::parse("A,B", "18446744073709551615,0,AB,H").unwrap_err(),
            ParseError::TooLarge(0),
        );
        assert_eq!(
            Level::parse("A,B", "0,0,A,H|4294967296,4294967296,B,H")
                .unwrap_err(),
            ParseError::TooLarge(1),
        );
        assert_eq!(
            &Level::parse("A,B", "0,0,A,H|100000,100000,B,H")
                .unwrap_err()
                .to_string(),
            "word 2: doesn’t fit in a 64×64 grid",
        );
        // The word runs off the edge even though it starts inside
        assert_eq!(
            Level::parse("A,B", "0,62,ABC,V").unwrap_err(),
            ParseError::TooLarge(0),
        );
        assert_eq!(
            Level::parse("A,B", "0,62,AB,V").unwrap().dimensions(),
            (1, 64),
        );
        assert_eq!(
            Level::parse("A,B", "63,63,A,H").unwrap().dimensions(),
            (64, 64),
        );
    }

    #[test]
    fn complete_word() {
        let mut level = Level::parse(GOLD_LETTERS, GOLD_WORDS).unwrap();

        assert!(level.complete_word(1));
        assert!(!level.complete_word(1));
        assert_eq!(level.completed_count(), 1);
        assert_eq!(level.first_incomplete(), Some(0));

        assert!(level.complete_word(0));
        assert_eq!(level.first_incomplete(), Some(2));

        assert!(level.complete_word(2));
        assert!(level.complete_word(3));
        assert!(level.is_all_completed());
        assert_eq!(level.first_incomplete(), None);

        // Out of range
        assert!(!level.complete_word(4));
        assert!(!level.is_completed(4));
        assert_eq!(level.completed_count(), 4);
    }

    #[test_log::test]
    fn conflicts() {
        let level = Level::parse(
            "C,A,T,O,W",
            "0,0,CAT,H|0,0,COW,V|2,0,TOW,V|0,2,WOW,H",
        ).unwrap();

        assert!(level.conflicts().is_empty());
        assert_eq!(level.warn_conflicts(), 0);

        let level = Level::parse(
            "C,A,T,O,W",
            "0,0,CAT,H|0,0,DOG,V|2,0,TOW,V",
        ).unwrap();

        let conflicts = level.conflicts();

        assert_eq!(
            conflicts,
            vec![Conflict {
                cell: Cell::new(0, 0),
                first: 0,
                other: 1,
                first_letter: 'C',
                other_letter: 'D',
            }],
        );
        assert_eq!(
            &conflicts[0].to_string(),
            "cell (0,0): word 1 has “C” but word 2 has “D”",
        );
        assert_eq!(level.warn_conflicts(), 1);
    }
}
