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
use super::audio::AudioPort;
use super::catalog::Catalog;
use super::level::{Level, ParseError};
use super::turn::TurnController;

#[derive(Debug)]
pub enum SessionError {
    MissingLevel(u32),
    InvalidLevel(u32, ParseError),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Progress {
    Loaded(u32),
    AllLevelsComplete,
}

/// Walks through the levels of a catalog, one controller at a time.
pub struct Session<A> {
    catalog: Catalog,
    current_id: u32,
    controller: TurnController<A>,
}

fn parse_level(catalog: &Catalog, id: u32) -> Result<Level, SessionError> {
    let Some(def) = catalog.get(id)
    else {
        return Err(SessionError::MissingLevel(id));
    };

    let level = def.parse().map_err(|e| SessionError::InvalidLevel(id, e))?;

    log::info!("loaded “{}” ({} words)", def.name, level.placements().len());

    Ok(level)
}

impl<A: AudioPort> Session<A> {
    /// Starts a session on the first level of the catalog.
    pub fn new(catalog: Catalog, audio: A) -> Result<Session<A>, SessionError> {
        let id = catalog.first_id();

        Session::starting_at(catalog, id, audio)
    }

    pub fn starting_at(
        catalog: Catalog,
        id: u32,
        audio: A,
    ) -> Result<Session<A>, SessionError> {
        let level = parse_level(&catalog, id)?;

        Ok(Session {
            catalog,
            current_id: id,
            controller: TurnController::new(level, audio),
        })
    }

    /// Switches to another level. If the level can’t be loaded then the
    /// current game carries on untouched.
    pub fn load(&mut self, id: u32) -> Result<(), SessionError> {
        let level = parse_level(&self.catalog, id)?;

        self.controller.load(level);
        self.current_id = id;

        Ok(())
    }

    pub fn next_level(&mut self) -> Result<Progress, SessionError> {
        match self.catalog.next_id(self.current_id) {
            Some(id) => {
                self.load(id)?;
                Ok(Progress::Loaded(id))
            },
            None => {
                log::info!("all levels complete");
                Ok(Progress::AllLevelsComplete)
            },
        }
    }

    pub fn restart(&mut self) -> Result<(), SessionError> {
        self.load(self.current_id)
    }

    pub fn current_id(&self) -> u32 {
        self.current_id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn controller(&self) -> &TurnController<A> {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut TurnController<A> {
        &mut self.controller
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SessionError::MissingLevel(id) => {
                write!(f, "level {} doesn’t exist", id)
            },
            SessionError::InvalidLevel(id, e) => {
                write!(f, "level {}: {}", id, e)
            },
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::MissingLevel(_) => None,
            SessionError::InvalidLevel(_, e) => Some(e),
        }
    }
}
