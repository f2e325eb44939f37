// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! This is the namespace for all parts dealing with data in sampled waves.

/// Number of samples covering `seconds` at the given sample rate, rounded to the nearest sample.
/// Negative durations yield zero samples.
///
/// ```
/// use mml_play::wave::seconds_to_samples;
///
/// assert_eq!(seconds_to_samples(0.5, 48000), 24000);
/// assert_eq!(seconds_to_samples(0.01, 48000), 480);
/// assert_eq!(seconds_to_samples(-1.0, 48000), 0);
/// ```
pub fn seconds_to_samples(seconds: f64, sample_rate: u32) -> usize {
    (seconds * sample_rate as f64).round() as usize
}

/// A buffer holding mono floating point audio data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer of `sample_count` zero samples.
    pub fn silence(sample_count: usize) -> Self {
        Self {
            samples: vec![0.0; sample_count],
        }
    }

    /// Size of the buffer in samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Size of the buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * std::mem::size_of::<f64>()
    }

    /// Play time of the buffer in seconds.
    pub fn seconds(&self, sample_rate: u32) -> f64 {
        self.len() as f64 / sample_rate as f64
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.samples.iter()
    }

    /// Append the samples of another buffer to the end of this one.
    pub fn append(&mut self, other: &SampleBuffer) {
        self.samples.extend_from_slice(&other.samples);
    }

    /// Largest absolute amplitude, zero for an empty buffer.
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0, |peak, s| peak.max(s.abs()))
    }

    /// Copy the `f64` samples to little-endian bytes.
    ///
    /// Returns the number of samples that were actually copied.
    /// Might be less than the number of input samples if the output buffer was not large enough.
    pub fn copy_bytes_to(&self, bytes: &mut [u8]) -> usize {
        let mut processed = 0;
        for (sample, target) in self.samples.iter().zip(bytes.chunks_exact_mut(8)) {
            target.copy_from_slice(&sample.to_le_bytes());
            processed += 1;
        }
        processed
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(samples: Vec<f64>) -> Self {
        Self { samples }
    }
}

impl std::iter::FromIterator<f64> for SampleBuffer {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}
