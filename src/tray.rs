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

use rand::Rng;
use rand::seq::SliceRandom;

/// Identifies one tile on the wheel. Tiles with the same letter still
/// have different ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    Available,
    Selected,
    Used,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub letter: char,
    pub state: TileState,
    // Position on the wheel
    pub slot: usize,
}

#[derive(Debug, Clone)]
pub struct Tray {
    tiles: Vec<Tile>,
    selection: Vec<TileId>,
    dragging: bool,
}

impl Tray {
    pub fn new(letters: &[char]) -> Tray {
        let tiles = letters
            .iter()
            .enumerate()
            .map(|(slot, &letter)| Tile {
                letter,
                state: TileState::Available,
                slot,
            })
            .collect();

        Tray {
            tiles,
            selection: Vec::new(),
            dragging: false,
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.tiles.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = TileId> {
        (0..self.tiles.len()).map(TileId)
    }

    fn is_available(&self, id: TileId) -> bool {
        self.tile(id).map(|t| t.state == TileState::Available)
            .unwrap_or(false)
    }

    fn set_state(&mut self, id: TileId, state: TileState) {
        if let Some(tile) = self.tiles.get_mut(id.0) {
            tile.state = state;
        }
    }

    /// Starts a new drag gesture on `tile`. Any selection left over
    /// from an unfinished gesture is dropped. Returns false if the tile
    /// can’t be picked up.
    pub fn begin_drag(&mut self, tile: TileId) -> bool {
        self.cancel();

        if !self.is_available(tile) {
            return false;
        }

        self.dragging = true;
        self.selection.push(tile);
        self.set_state(tile, TileState::Selected);

        true
    }

    /// Adds a tile to the current gesture. Tiles that are already
    /// selected or used are ignored.
    pub fn drag_over(&mut self, tile: TileId) -> bool {
        if !self.dragging || !self.is_available(tile) {
            return false;
        }

        self.selection.push(tile);
        self.set_state(tile, TileState::Selected);

        true
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn selection(&self) -> &[TileId] {
        &self.selection
    }

    pub fn selected_word(&self) -> String {
        self.letters_for(&self.selection)
    }

    pub fn letters_for(&self, tiles: &[TileId]) -> String {
        tiles.iter().filter_map(|&id| self.tile(id)).map(|t| t.letter).collect()
    }

    /// Ends the gesture and hands back the selected tiles. The tiles
    /// stay selected until the caller decides what happens to them.
    pub fn release(&mut self) -> Vec<TileId> {
        self.dragging = false;
        std::mem::take(&mut self.selection)
    }

    pub fn cancel(&mut self) {
        let selection = std::mem::take(&mut self.selection);
        self.deselect(&selection);
        self.dragging = false;
    }

    pub fn mark_used(&mut self, tiles: &[TileId]) {
        for &id in tiles {
            self.set_state(id, TileState::Used);
        }
    }

    /// Puts selected tiles back. Used tiles are left alone.
    pub fn deselect(&mut self, tiles: &[TileId]) {
        for &id in tiles {
            if self.tile(id).map(|t| t.state) == Some(TileState::Selected) {
                self.set_state(id, TileState::Available);
            }
        }
    }

    pub fn release_tiles(&mut self, tiles: &[TileId]) {
        for &id in tiles {
            self.set_state(id, TileState::Available);
        }
    }

    pub fn reset(&mut self) {
        self.selection.clear();
        self.dragging = false;

        for tile in self.tiles.iter_mut() {
            tile.state = TileState::Available;
        }
    }

    /// Picks a distinct available tile for each letter of `word`, or
    /// None if the wheel can’t spell it.
    pub fn tiles_for_word(&self, word: &str) -> Option<Vec<TileId>> {
        let mut taken = vec![false; self.tiles.len()];
        let mut result = Vec::new();

        for ch in word.chars().flat_map(char::to_uppercase) {
            let index = self.tiles.iter().enumerate().position(|(i, t)| {
                !taken[i]
                    && t.state == TileState::Available
                    && t.letter.to_uppercase().eq(std::iter::once(ch))
            })?;

            taken[index] = true;
            result.push(TileId(index));
        }

        Some(result)
    }

    /// Moves the available tiles to a random permutation of their
    /// slots. Used and selected tiles keep their place.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        let movable = self
            .tiles
            .iter()
            .enumerate()
            .filter_map(|(i, t)| (t.state == TileState::Available).then_some(i))
            .collect::<Vec<usize>>();

        if movable.len() <= 1 {
            return;
        }

        let mut slots = movable
            .iter()
            .map(|&i| self.tiles[i].slot)
            .collect::<Vec<usize>>();

        slots.shuffle(rng);

        for (&i, slot) in movable.iter().zip(slots) {
            self.tiles[i].slot = slot;
        }
    }

    /// The tiles in the order they appear around the wheel.
    pub fn tiles_by_slot(&self) -> Vec<TileId> {
        let mut ids = self.ids().collect::<Vec<TileId>>();
        ids.sort_by_key(|id| self.tiles[id.0].slot);
        ids
    }
}
