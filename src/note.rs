// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Definitions of what a note is.

use std::fmt;

use crate::tuning::Tuning;

/// The pitch of a note in standard notation, or a rest.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Pitch {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
    /// Silence for the duration of the note.
    Rest,
}

impl Pitch {
    /// Classify a single MML character, ignoring case.
    /// Returns `None` for characters that do not denote a pitch or a rest.
    ///
    /// # Examples
    ///
    /// ```
    /// use mml_play::note::Pitch;
    ///
    /// assert_eq!(Pitch::from_char('c'), Some(Pitch::C));
    /// assert_eq!(Pitch::from_char('G'), Some(Pitch::G));
    /// assert_eq!(Pitch::from_char('R'), Some(Pitch::Rest));
    /// assert_eq!(Pitch::from_char('#'), None);
    /// ```
    pub fn from_char(ch: char) -> Option<Pitch> {
        match ch.to_ascii_lowercase() {
            'c' => Some(Pitch::C),
            'd' => Some(Pitch::D),
            'e' => Some(Pitch::E),
            'f' => Some(Pitch::F),
            'g' => Some(Pitch::G),
            'a' => Some(Pitch::A),
            'b' => Some(Pitch::B),
            'r' => Some(Pitch::Rest),
            _ => None,
        }
    }

    /// The lowercase letter used for this pitch in MML.
    pub fn letter(self) -> char {
        match self {
            Pitch::C => 'c',
            Pitch::D => 'd',
            Pitch::E => 'e',
            Pitch::F => 'f',
            Pitch::G => 'g',
            Pitch::A => 'a',
            Pitch::B => 'b',
            Pitch::Rest => 'r',
        }
    }

    /// Distance in semitones from the A of the same octave.
    /// A rest has no pitch and returns `None`.
    pub fn semitones_from_a(self) -> Option<i32> {
        match self {
            Pitch::C => Some(-9),
            Pitch::D => Some(-7),
            Pitch::E => Some(-5),
            Pitch::F => Some(-4),
            Pitch::G => Some(-2),
            Pitch::A => Some(0),
            Pitch::B => Some(2),
            Pitch::Rest => None,
        }
    }

    pub fn is_rest(self) -> bool {
        self == Pitch::Rest
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// A single parsed musical event.
///
/// Notes are immutable once constructed. The frequency is exactly `0.0`
/// if and only if the note is a rest.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Note {
    pitch: Pitch,
    octave: i32,
    /// Length in seconds.
    duration: f64,
    /// Frequency in Hz, zero for rests.
    frequency: f64,
}

impl Note {
    /// The octave containing A4.
    pub const DEFAULT_OCTAVE: i32 = 4;
    /// Half a second.
    pub const DEFAULT_DURATION: f64 = 0.5;

    /// A note whose frequency is taken from the tuning. Passing `Pitch::Rest` yields a rest instead,
    /// so that a rest can never carry a frequency.
    ///
    /// Pitches the tuning puts at or below 0 Hz, e.g. through underflow in absurdly low octaves,
    /// are raised to the smallest positive frequency so that only rests are silent.
    pub fn pitched(pitch: Pitch, octave: i32, duration: f64, tuning: &Tuning) -> Note {
        if pitch.is_rest() {
            return Note::rest(octave, duration);
        }
        let frequency = tuning.frequency(pitch, octave);
        let frequency = if frequency > 0.0 {
            frequency
        } else {
            f64::MIN_POSITIVE
        };
        Note {
            pitch,
            octave,
            duration,
            frequency,
        }
    }

    pub fn rest(octave: i32, duration: f64) -> Note {
        Note {
            pitch: Pitch::Rest,
            octave,
            duration,
            frequency: 0.0,
        }
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    pub fn is_rest(&self) -> bool {
        self.pitch.is_rest()
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_rest() {
            write!(f, "r ({:.3} s)", self.duration)
        } else {
            write!(
                f,
                "{}{} ({:.3} s, {:.2} Hz)",
                self.pitch, self.octave, self.duration, self.frequency
            )
        }
    }
}
