// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! A lenient parser for Music Macro Language strings.
//!
//! Every pitch letter `c d e f g a b` and the rest marker `r` produce one note,
//! regardless of case. All other characters are skipped without complaint.

use log::debug;

use crate::note::{Note, Pitch};
use crate::tuning::Tuning;

/// Parse an MML string into the notes it describes, in input order.
/// Never fails; an input without any recognized characters yields no notes.
///
/// # Examples
///
/// ```
/// use mml_play::mml::parse_mml;
/// use mml_play::note::Pitch;
///
/// let notes = parse_mml("c r E");
/// let pitches: Vec<_> = notes.iter().map(|n| n.pitch()).collect();
/// assert_eq!(pitches, vec![Pitch::C, Pitch::Rest, Pitch::E]);
/// ```
pub fn parse_mml(input: &str) -> Vec<Note> {
    let notes: Vec<_> = Parser::new(input).collect();
    debug!(
        "parsed {} notes from {} characters of MML",
        notes.len(),
        input.chars().count()
    );
    notes
}

/// Values applied to every note that does not specify them itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Defaults {
    pub octave: i32,
    /// Note length in seconds.
    pub duration: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            octave: Note::DEFAULT_OCTAVE,
            duration: Note::DEFAULT_DURATION,
        }
    }
}

/// Single pass scanner producing one note per recognized character.
pub struct Parser<'a> {
    stream: std::str::Chars<'a>,
    /// Running defaults, each note takes the ones active when it is scanned.
    defaults: Defaults,
    tuning: Tuning,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_defaults(input, Defaults::default())
    }

    pub fn with_defaults(input: &'a str, defaults: Defaults) -> Self {
        Self {
            stream: input.chars(),
            defaults,
            tuning: Tuning::default(),
        }
    }

    fn note(&self, pitch: Pitch) -> Note {
        let Defaults { octave, duration } = self.defaults;
        Note::pitched(pitch, octave, duration, &self.tuning)
    }
}

impl<'a> Iterator for Parser<'a> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        while let Some(ch) = self.stream.next() {
            if let Some(pitch) = Pitch::from_char(ch) {
                return Some(self.note(pitch));
            }
        }
        None
    }
}
