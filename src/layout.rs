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

//! Mapping between game coordinates and screen space. Nothing in the
//! game logic depends on this; it is only here for whatever draws the
//! game.

use glam::Vec2;
use std::f32::consts::{FRAC_PI_2, TAU};
use super::placement::Cell;
use super::tray::{Tray, TileId};

pub const DEFAULT_CELL_SIZE: f32 = 50.0;
pub const DEFAULT_CELL_GAP: f32 = 4.0;
pub const DEFAULT_TRAY_RADIUS: f32 = 80.0;
pub const DEFAULT_HIT_RADIUS: f32 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLayout {
    /// World position of the top left corner of cell (0,0)
    pub origin: Vec2,
    pub cell_size: f32,
    pub cell_gap: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrayLayout {
    pub center: Vec2,
    pub radius: f32,
    pub hit_radius: f32,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin: Vec2::ZERO,
            cell_size: DEFAULT_CELL_SIZE,
            cell_gap: DEFAULT_CELL_GAP,
        }
    }
}

impl GridLayout {
    /// Builds a layout with the grid centred horizontally in a world
    /// of the given width.
    pub fn centered(world_width: f32, top: f32, grid_width: usize) -> Self {
        let layout = Self::default();
        let total_width = grid_width as f32 * layout.pitch();

        Self {
            origin: Vec2::new((world_width - total_width) / 2.0, top),
            ..layout
        }
    }

    fn pitch(&self) -> f32 {
        self.cell_size + self.cell_gap
    }

    /// The world position of the centre of a cell.
    pub fn cell_to_world(&self, cell: Cell) -> Vec2 {
        self.origin
            + Vec2::new(cell.x as f32, cell.y as f32) * self.pitch()
            + Vec2::splat(self.cell_size / 2.0)
    }

    pub fn world_to_cell(&self, pos: Vec2) -> Option<Cell> {
        let local = ((pos - self.origin) / self.pitch()).floor();

        if local.x < 0.0 || local.y < 0.0 || !local.is_finite() {
            None
        } else {
            Some(Cell::new(local.x as usize, local.y as usize))
        }
    }
}

impl Default for TrayLayout {
    fn default() -> Self {
        Self {
            center: Vec2::ZERO,
            radius: DEFAULT_TRAY_RADIUS,
            hit_radius: DEFAULT_HIT_RADIUS,
        }
    }
}

impl TrayLayout {
    pub fn slot_position(&self, slot: usize, n_slots: usize) -> Vec2 {
        let angle = -FRAC_PI_2 + slot as f32 * TAU / n_slots.max(1) as f32;

        self.center + Vec2::from_angle(angle) * self.radius
    }

    pub fn tile_position(&self, tray: &Tray, tile: TileId) -> Option<Vec2> {
        tray.tile(tile).map(|t| self.slot_position(t.slot, tray.len()))
    }

    pub fn tile_positions(&self, tray: &Tray) -> Vec<(TileId, Vec2)> {
        tray.ids()
            .filter_map(|id| self.tile_position(tray, id).map(|pos| (id, pos)))
            .collect()
    }

    /// The tile under a pointer, if any.
    pub fn tile_at(&self, tray: &Tray, pos: Vec2) -> Option<TileId> {
        tray.ids().find(|&id| {
            self.tile_position(tray, id)
                .map(|tile_pos| tile_pos.distance(pos) < self.hit_radius)
                .unwrap_or(false)
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn assert_close(a: Vec2, b: Vec2) {
        assert!(a.abs_diff_eq(b, 1e-3), "{} != {}", a, b);
    }

    #[test]
    fn cell_to_world() {
        let layout = GridLayout {
            origin: Vec2::new(10.0, 80.0),
            ..Default::default()
        };

        assert_close(
            layout.cell_to_world(Cell::new(0, 0)),
            Vec2::new(35.0, 105.0),
        );
        assert_close(
            layout.cell_to_world(Cell::new(2, 1)),
            Vec2::new(10.0 + 108.0 + 25.0, 80.0 + 54.0 + 25.0),
        );
    }

    #[test]
    fn world_to_cell() {
        let layout = GridLayout {
            origin: Vec2::new(10.0, 80.0),
            ..Default::default()
        };

        for cell in [Cell::new(0, 0), Cell::new(3, 2), Cell::new(1, 4)] {
            assert_eq!(
                layout.world_to_cell(layout.cell_to_world(cell)),
                Some(cell),
            );
        }

        assert_eq!(layout.world_to_cell(Vec2::new(5.0, 100.0)), None);
        assert_eq!(layout.world_to_cell(Vec2::new(20.0, 10.0)), None);
        // The gap belongs to the cell before it
        assert_eq!(
            layout.world_to_cell(Vec2::new(10.0 + 52.0, 81.0)),
            Some(Cell::new(0, 0)),
        );
    }

    #[test]
    fn centered() {
        let layout = GridLayout::centered(400.0, 80.0, 4);

        assert_close(layout.origin, Vec2::new((400.0 - 4.0 * 54.0) / 2.0, 80.0));
    }

    #[test]
    fn tray_positions() {
        let tray = Tray::new(&['G', 'O', 'D', 'L']);
        let layout = TrayLayout {
            center: Vec2::new(200.0, 500.0),
            ..Default::default()
        };

        let positions = layout.tile_positions(&tray);

        assert_eq!(positions.len(), 4);
        // First tile is at the top of the wheel
        assert_close(positions[0].1, Vec2::new(200.0, 420.0));
        assert_close(positions[1].1, Vec2::new(280.0, 500.0));
        assert_close(positions[2].1, Vec2::new(200.0, 580.0));
        assert_close(positions[3].1, Vec2::new(120.0, 500.0));

        assert_eq!(
            layout.tile_at(&tray, Vec2::new(210.0, 430.0)),
            Some(TileId(0)),
        );
        assert_eq!(layout.tile_at(&tray, Vec2::new(200.0, 500.0)), None);
    }
}
