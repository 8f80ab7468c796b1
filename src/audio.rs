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
pub enum Sound {
    Correct,
    Wrong,
    WordComplete,
    LevelComplete,
}

impl Sound {
    pub fn name(self) -> &'static str {
        match self {
            Sound::Correct => "correct",
            Sound::Wrong => "wrong",
            Sound::WordComplete => "wordComplete",
            Sound::LevelComplete => "levelComplete",
        }
    }
}

impl fmt::Display for Sound {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whatever makes the noises. Playing is fire-and-forget and the game
/// never looks at whether it worked.
pub trait AudioPort {
    fn play(&mut self, sound: Sound);
}

/// Discards every sound.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl AudioPort for Silent {
    fn play(&mut self, _sound: Sound) {
    }
}

/// Writes each sound to the log instead of playing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogAudio;

impl AudioPort for LogAudio {
    fn play(&mut self, sound: Sound) {
        log::debug!("sound: {}", sound);
    }
}

/// Remembers the sounds so that they can be inspected later.
#[derive(Debug, Default, Clone)]
pub struct RecordedAudio {
    pub sounds: Vec<Sound>,
}

impl AudioPort for RecordedAudio {
    fn play(&mut self, sound: Sound) {
        self.sounds.push(sound);
    }
}

impl<T: AudioPort + ?Sized> AudioPort for Box<T> {
    fn play(&mut self, sound: Sound) {
        (**self).play(sound)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(&Sound::WordComplete.to_string(), "wordComplete");
        assert_eq!(Sound::LevelComplete.name(), "levelComplete");
    }

    #[test]
    fn boxed() {
        let mut audio: Box<dyn AudioPort> = Box::new(Silent);

        audio.play(Sound::Wrong);

        let mut recorded = Box::new(RecordedAudio::default());

        recorded.play(Sound::Correct);
        recorded.play(Sound::Wrong);

        assert_eq!(&recorded.sounds, &[Sound::Correct, Sound::Wrong]);
    }
}
