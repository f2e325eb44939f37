//! Frequency ratio helpers.

/// Compute a factor measured in octaves (one octave corresponds to a factor of two).
///
/// # Example
///
/// ```
/// # use mml_play::util::*;
///
/// assert_eq!(from_octaves(3.0), 8.0);
/// assert_eq!(from_octaves(-1.0), 0.5);
/// ```
pub fn from_octaves(octaves: f64) -> f64 {
    2.0f64.powf(octaves)
}

/// Compute a factor measured in semitones (one octave consists of 12 semitones)
///
/// # Example
///
/// ```
/// # use mml_play::util::*;
///
/// assert_eq!(from_semitones(12.0), 2.0);
/// assert_eq!(from_semitones(3.0), from_octaves(3.0 / 12.0));
/// ```
pub fn from_semitones(semitones: f64) -> f64 {
    from_octaves(semitones / 12.0)
}
