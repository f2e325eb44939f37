// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

use crate::wave::seconds_to_samples;

/// An Attack-Release envelope for notes of known length.
/// The amplitude rises linearly from zero to one over the first `attack` seconds
/// and falls linearly from one to zero over the last `release` seconds.
/// In between it is held at one.
///
/// Each ramp is only applied when the note is strictly longer than the ramp.
/// For very short notes the two windows may overlap, in which case both ramps
/// are multiplied into the overlapping samples.
///
/// # Example
///
/// ```
/// use mml_play::envelope::*;
/// let e = AttackRelease {
///     attack: 0.5,
///     release: 0.75,
/// };
/// // 4 samples per second, 8 samples long
/// let gains = e.gains(8, 4);
/// assert_eq!(gains, vec![0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackRelease {
    /// Time in seconds to go from 0.0 to 1.0
    pub attack: f64,
    /// Time in seconds to go from 1.0 to 0.0 at the end of the note.
    pub release: f64,
}

impl AttackRelease {
    /// Gain for each of the `len` samples of a note.
    pub fn gains(&self, len: usize, sample_rate: u32) -> Vec<f64> {
        let attack_samples = seconds_to_samples(self.attack, sample_rate);
        let release_samples = seconds_to_samples(self.release, sample_rate);

        let mut gains = vec![1.0; len];
        if len > attack_samples {
            for (i, gain) in gains[..attack_samples].iter_mut().enumerate() {
                *gain *= ramp(0.0, 1.0, i, attack_samples);
            }
        }
        if len > release_samples {
            let release_start = len - release_samples;
            for (i, gain) in gains[release_start..].iter_mut().enumerate() {
                *gain *= ramp(1.0, 0.0, i, release_samples);
            }
        }
        gains
    }
}

/// Value at step `index` of `steps` evenly spaced values going from `from` to `to`, both inclusive.
/// A single step stays at `from`.
fn ramp(from: f64, to: f64, index: usize, steps: usize) -> f64 {
    if steps <= 1 {
        return from;
    }
    from + (to - from) * index as f64 / (steps - 1) as f64
}

#[cfg(test)]
mod test {
    use super::*;

    const CLICK_FREE: AttackRelease = AttackRelease {
        attack: 0.01,
        release: 0.05,
    };

    #[test]
    fn ramps() {
        assert_eq!(ramp(0.0, 1.0, 0, 5), 0.0);
        assert_eq!(ramp(0.0, 1.0, 2, 5), 0.5);
        assert_eq!(ramp(0.0, 1.0, 4, 5), 1.0);
        assert_eq!(ramp(1.0, 0.0, 1, 5), 0.75);
        assert_eq!(ramp(1.0, 0.0, 0, 1), 1.0);
    }

    #[test]
    fn long_note() {
        // 1000 samples per second: 10 samples attack, 50 samples release
        let gains = CLICK_FREE.gains(200, 1000);
        assert_eq!(gains.len(), 200);
        assert_eq!(gains[0], 0.0);
        assert_eq!(gains[9], 1.0);
        assert!(gains[..10].windows(2).all(|w| w[0] <= w[1]));
        assert!(gains[10..150].iter().all(|g| *g == 1.0));
        assert_eq!(gains[150], 1.0);
        assert!(gains[150..].windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(gains[199], 0.0);
    }

    #[test]
    fn overlapping_windows_multiply() {
        // 55 samples: attack covers 0..10, release covers 5..55
        let gains = CLICK_FREE.gains(55, 1000);
        let attack = |i: usize| i as f64 / 9.0;
        let release = |i: usize| 1.0 - (i - 5) as f64 / 49.0;
        for i in 5..10 {
            assert!((gains[i] - attack(i) * release(i)).abs() < 1e-12);
        }
        assert_eq!(gains[54], 0.0);
    }

    #[test]
    fn ramps_skipped_for_short_notes() {
        // not longer than the attack: no envelope at all
        assert_eq!(CLICK_FREE.gains(10, 1000), vec![1.0; 10]);
        // longer than the attack but not the release: only the attack
        let gains = CLICK_FREE.gains(50, 1000);
        assert_eq!(gains[0], 0.0);
        assert_eq!(gains[49], 1.0);
    }

    #[test]
    fn empty() {
        assert!(CLICK_FREE.gains(0, 48000).is_empty());
    }
}
