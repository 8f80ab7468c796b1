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

pub mod placement;
pub mod level;
pub mod catalog;
pub mod word_grid;
pub mod matcher;
pub mod tray;
pub mod layout;
pub mod audio;
pub mod turn;
pub mod session;

pub use audio::{AudioPort, Sound};
pub use catalog::{Catalog, LevelDef};
pub use level::Level;
pub use session::{Progress, Session, SessionError};
pub use tray::TileId;
pub use turn::{Advance, Event, Submission, TurnController, TurnState};
