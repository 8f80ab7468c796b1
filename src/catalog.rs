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
use std::io;
use std::path::Path;
use serde::Deserialize;
use super::level::{Level, ParseError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelDef {
    pub id: u32,
    pub name: String,
    pub letters: String,
    pub words: String,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    levels: Vec<LevelDef>,
}

#[derive(Debug)]
pub enum LoadError {
    Io(io::Error),
    Json(serde_json::Error),
    DuplicateId(u32),
    Empty,
}

// Id, letters, words
static BUILTIN_LEVELS: [(u32, &str, &str); 10] = [
    (1, "G,O,D,L", "0,0,GOLD,H|0,0,GOD,V|0,2,DOG,H|2,0,LOG,V"),
    (
        2,
        "S,T,A,R,I,L,D,E,O,V",
        "0,0,STAR,H|0,0,SAIL,V|3,0,RIDE,V|0,3,LOVE,H",
    ),
    (3, "B,E,A,R", "0,0,BEAR,H|0,0,BAR,V|2,0,ARE,V|0,2,RAE,H"),
    (4, "F,I,S,H", "0,0,FISH,H|3,0,HIS,V"),
    (5, "T,R,E,E", "0,0,TREE,H|0,0,TRE,V"),
    (6, "M,O,O,N", "0,0,MOON,H|0,0,MOO,V|2,0,OON,V"),
    (7, "S,T,A,R", "0,0,STAR,H|0,0,STA,V|3,0,RAT,V|0,2,ART,H"),
    (8, "L,O,V,E", "0,0,LOVE,H|0,0,LOV,V|3,0,EVO,V"),
    (9, "B,O,O,K", "0,0,BOOK,H|0,0,BOO,V"),
    (10, "H,O,M,E", "0,0,HOME,H|0,0,HOM,V|3,0,EMO,V"),
];

impl LevelDef {
    pub fn parse(&self) -> Result<Level, ParseError> {
        Level::parse(&self.letters, &self.words)
    }
}

impl Catalog {
    /// The levels that ship with the game.
    pub fn builtin() -> Catalog {
        let levels = BUILTIN_LEVELS
            .iter()
            .map(|&(id, letters, words)| LevelDef {
                id,
                name: format!("Level {}", id),
                letters: letters.to_string(),
                words: words.to_string(),
            })
            .collect();

        Catalog { levels }
    }

    pub fn new(levels: Vec<LevelDef>) -> Result<Catalog, LoadError> {
        if levels.is_empty() {
            return Err(LoadError::Empty);
        }

        for (i, level) in levels.iter().enumerate() {
            if levels[..i].iter().any(|other| other.id == level.id) {
                return Err(LoadError::DuplicateId(level.id));
            }
        }

        Ok(Catalog { levels })
    }

    /// Loads a JSON array of level definitions.
    pub fn from_json<R: io::Read>(reader: R) -> Result<Catalog, LoadError> {
        let levels = serde_json::from_reader::<_, Vec<LevelDef>>(reader)?;

        Catalog::new(levels)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Catalog, LoadError> {
        let f = std::fs::File::open(path)?;

        Catalog::from_json(io::BufReader::new(f))
    }

    pub fn levels(&self) -> &[LevelDef] {
        &self.levels
    }

    pub fn get(&self, id: u32) -> Option<&LevelDef> {
        self.levels.iter().find(|level| level.id == id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// A catalog always has at least one level.
    pub fn first_id(&self) -> u32 {
        self.levels[0].id
    }

    /// The id of the level that comes after `id` in catalog order.
    pub fn next_id(&self, id: u32) -> Option<u32> {
        let pos = self.levels.iter().position(|level| level.id == id)?;

        self.levels.get(pos + 1).map(|level| level.id)
    }
}

impl From<io::Error> for LoadError {
    fn from(e: io::Error) -> LoadError {
        LoadError::Io(e)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(e: serde_json::Error) -> LoadError {
        LoadError::Json(e)
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::Io(e) => write!(f, "{}", e),
            LoadError::Json(e) => write!(f, "{}", e),
            LoadError::DuplicateId(id) => {
                write!(f, "level {} appears more than once", id)
            },
            LoadError::Empty => write!(f, "there are no levels"),
        }
    }
}

impl std::error::Error for LoadError {
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn builtin_levels_parse() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.len(), 10);

        for level in catalog.levels() {
            let parsed = level.parse().unwrap();

            assert!(parsed.conflicts().is_empty(), "level {}", level.id);

            // Every word must be possible with the letters on the wheel
            let tray = crate::tray::Tray::new(parsed.letters());

            for placement in parsed.placements() {
                assert!(
                    tray.tiles_for_word(&placement.text()).is_some(),
                    "level {}: {}",
                    level.id,
                    placement,
                );
            }
        }
    }

    #[test]
    fn lookup() {
        let catalog = Catalog::builtin();

        assert_eq!(catalog.get(6).unwrap().letters, "M,O,O,N");
        assert_eq!(&catalog.get(1).unwrap().name, "Level 1");
        assert!(catalog.get(11).is_none());
        assert_eq!(catalog.first_id(), 1);
        assert_eq!(catalog.next_id(1), Some(2));
        assert_eq!(catalog.next_id(10), None);
        assert_eq!(catalog.next_id(42), None);
    }

    #[test]
    fn from_json() {
        let json = r#"[
            {"id": 3, "name": "Cats", "letters": "C,A,T",
             "words": "0,0,CAT,H|0,0,CA,V"},
            {"id": 7, "name": "Acts", "letters": "A,C,T,S",
             "words": "0,0,ACTS,H"}
        ]"#;

        let catalog = Catalog::from_json(json.as_bytes()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.next_id(3), Some(7));
        assert_eq!(catalog.get(7).unwrap().parse().unwrap().dimensions(), (4, 1));
    }

    #[test]
    fn bad_json() {
        assert!(matches!(
            Catalog::from_json("[{\"id\": 1}]".as_bytes()),
            Err(LoadError::Json(_)),
        ));
        assert!(matches!(
            Catalog::from_json("[]".as_bytes()),
            Err(LoadError::Empty),
        ));

        let json = r#"[
            {"id": 1, "name": "a", "letters": "A", "words": "0,0,A,H"},
            {"id": 1, "name": "b", "letters": "B", "words": "0,0,B,H"}
        ]"#;

        let err = Catalog::from_json(json.as_bytes()).unwrap_err();

        assert!(matches!(err, LoadError::DuplicateId(1)));
        assert_eq!(&err.to_string(), "level 1 appears more than once");
    }

    #[test]
    fn from_file() {
        let path = std::env::temp_dir().join(format!(
            "crosswheel-catalog-{}.json",
            std::process::id(),
        ));

        std::fs::write(
            &path,
            r#"[{"id": 5, "name": "Fish", "letters": "F,I,S,H",
                 "words": "0,0,FISH,H|3,0,HIS,V"}]"#,
        ).unwrap();

        let catalog = Catalog::from_file(&path);

        std::fs::remove_file(&path).unwrap();

        let catalog = catalog.unwrap();

        assert_eq!(catalog.first_id(), 5);
        assert_eq!(catalog.get(5).unwrap().parse().unwrap().dimensions(), (4, 3));

        assert!(matches!(
            Catalog::from_file(&path),
            Err(LoadError::Io(_)),
        ));
    }
}
