// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::note::Pitch;
use crate::util;

/// Defines the tuning by assigning a frequency to the A of some octave.
/// This defines the frequencies of all other notes at a standard tuning of 12 half-tones per octave.
///
/// # Examples
///
/// ```
/// use mml_play::note::Pitch;
/// use mml_play::tuning::*;
/// assert_eq!(Tuning::default().frequency(Pitch::A, 3), 220.0);
/// assert_eq!(Tuning::default().frequency(Pitch::A, 5), 880.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tuning {
    /// Octave of the reference A.
    pub reference_octave: i32,
    pub reference_frequency: f64,
}

impl Tuning {
    /// Semitone distance of a pitch in an octave from the reference A.
    /// Rests count as an A.
    /// Computed in floating point, so no octave is out of range.
    pub fn semitones(&self, pitch: Pitch, octave: i32) -> f64 {
        let offset = pitch.semitones_from_a().unwrap_or(0);
        (octave as f64 - self.reference_octave as f64) * 12.0 + offset as f64
    }

    /// Return the frequency of a pitch relative to this tuning.
    /// Octaves are not range checked, far away octaves are simply extrapolated.
    /// A rest is silent and has a frequency of zero.
    pub fn frequency(&self, pitch: Pitch, octave: i32) -> f64 {
        if pitch.is_rest() {
            return 0.0;
        }
        self.reference_frequency * util::from_semitones(self.semitones(pitch, octave))
    }
}

/// Default concert tuning, where A4 corresponds to 440 Hz.
impl Default for Tuning {
    fn default() -> Self {
        Tuning {
            reference_octave: 4,
            reference_frequency: 440.0,
        }
    }
}

/// Frequency in Hz of a pitch letter (case-insensitive) in the given octave at concert tuning.
///
/// Letters other than `c d e f g a b` fall back to the offset of `a`.
///
/// # Examples
///
/// ```
/// use mml_play::tuning::note_to_frequency;
/// assert_eq!(note_to_frequency('a', 4), 440.0);
/// assert_eq!(note_to_frequency('A', 2), 110.0);
/// assert_eq!(note_to_frequency('x', 4), 440.0);
/// ```
pub fn note_to_frequency(pitch: char, octave: i32) -> f64 {
    let tuning = Tuning::default();
    let semitones = match Pitch::from_char(pitch) {
        Some(pitch) => tuning.semitones(pitch, octave),
        None => tuning.semitones(Pitch::A, octave),
    };
    tuning.reference_frequency * util::from_semitones(semitones)
}
