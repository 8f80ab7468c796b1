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

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A target word anchored on the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    pub x: usize,
    pub y: usize,
    pub orientation: Orientation,
    text: Vec<char>,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Cell {
        Cell { x, y }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Orientation {
    pub fn from_char(ch: char) -> Option<Orientation> {
        match ch {
            'H' => Some(Orientation::Horizontal),
            'V' => Some(Orientation::Vertical),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Orientation::Horizontal => 'H',
            Orientation::Vertical => 'V',
        }
    }
}

impl Placement {
    /// Creates a placement. The text must contain at least one
    /// character.
    pub fn new(
        x: usize,
        y: usize,
        text: &str,
        orientation: Orientation,
    ) -> Placement {
        let text = text.chars().collect::<Vec<char>>();

        assert!(!text.is_empty());

        Placement { x, y, orientation, text }
    }

    pub fn text(&self) -> String {
        self.text.iter().collect()
    }

    pub fn letters(&self) -> &[char] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn cell(&self, index: usize) -> Cell {
        match self.orientation {
            Orientation::Horizontal => Cell::new(self.x + index, self.y),
            Orientation::Vertical => Cell::new(self.x, self.y + index),
        }
    }

    pub fn cells(&self) -> CellIter {
        CellIter {
            placement: self,
            pos: 0,
        }
    }

    /// The index of the letter that covers `cell`, if any.
    pub fn index_of(&self, cell: Cell) -> Option<usize> {
        let (along, across, start, fixed) = match self.orientation {
            Orientation::Horizontal => (cell.x, cell.y, self.x, self.y),
            Orientation::Vertical => (cell.y, cell.x, self.y, self.x),
        };

        if across != fixed || along < start || along - start >= self.len() {
            None
        } else {
            Some(along - start)
        }
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.index_of(cell).is_some()
    }

    pub fn letter_at(&self, cell: Cell) -> Option<char> {
        self.index_of(cell).map(|index| self.text[index])
    }

    /// The cell one past the bottom right corner of the placement.
    pub fn end(&self) -> Cell {
        let last = self.cell(self.len() - 1);

        Cell::new(last.x + 1, last.y + 1)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{},", self.x, self.y)?;

        for &ch in self.text.iter() {
            write!(f, "{}", ch)?;
        }

        write!(f, ",{}", self.orientation.to_char())
    }
}

pub struct CellIter<'a> {
    placement: &'a Placement,
    pos: usize,
}

impl<'a> Iterator for CellIter<'a> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.pos < self.placement.len() {
            let cell = self.placement.cell(self.pos);
            self.pos += 1;
            Some(cell)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.placement.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for CellIter<'a> {
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cells() {
        let placement = Placement::new(1, 2, "LOG", Orientation::Vertical);

        assert_eq!(
            &placement.cells().collect::<Vec<_>>(),
            &[Cell::new(1, 2), Cell::new(1, 3), Cell::new(1, 4)],
        );

        let placement = Placement::new(0, 2, "DOG", Orientation::Horizontal);

        assert_eq!(
            &placement.cells().collect::<Vec<_>>(),
            &[Cell::new(0, 2), Cell::new(1, 2), Cell::new(2, 2)],
        );
        assert_eq!(placement.cells().len(), 3);
    }

    #[test]
    fn index_of() {
        let placement = Placement::new(2, 0, "LOG", Orientation::Vertical);

        assert_eq!(placement.index_of(Cell::new(2, 0)), Some(0));
        assert_eq!(placement.index_of(Cell::new(2, 2)), Some(2));
        assert_eq!(placement.index_of(Cell::new(2, 3)), None);
        assert_eq!(placement.index_of(Cell::new(1, 1)), None);
        assert_eq!(placement.letter_at(Cell::new(2, 1)), Some('O'));

        let placement = Placement::new(1, 1, "AB", Orientation::Horizontal);

        assert_eq!(placement.index_of(Cell::new(0, 1)), None);
        assert_eq!(placement.index_of(Cell::new(2, 1)), Some(1));
        assert_eq!(placement.index_of(Cell::new(2, 0)), None);
    }

    #[test]
    fn end() {
        assert_eq!(
            Placement::new(0, 0, "GOLD", Orientation::Horizontal).end(),
            Cell::new(4, 1),
        );
        assert_eq!(
            Placement::new(2, 0, "LOG", Orientation::Vertical).end(),
            Cell::new(3, 3),
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            &Placement::new(3, 0, "RIDE", Orientation::Vertical).to_string(),
            "3,0,RIDE,V",
        );
    }
}
