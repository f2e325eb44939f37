// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Turns single notes into sampled waveforms.

use crate::envelope::AttackRelease;
use crate::note::Note;
use crate::oscillator::SineOscillator;
use crate::wave::{seconds_to_samples, SampleBuffer};

/// Parameters of the sine voice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    /// Fade-in time in seconds.
    pub attack: f64,
    /// Fade-out time in seconds.
    pub release: f64,
    /// Gain applied after the envelope.
    pub volume: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            attack: 0.01,
            release: 0.05,
            volume: 0.3,
        }
    }
}

impl Params {
    pub fn envelope(&self) -> AttackRelease {
        AttackRelease {
            attack: self.attack,
            release: self.release,
        }
    }

    /// Render a tone of the given frequency and length.
    /// A frequency of exactly zero renders silence.
    pub fn render(&self, frequency: f64, duration: f64, sample_rate: u32) -> SampleBuffer {
        let sample_count = seconds_to_samples(duration, sample_rate);
        if frequency == 0.0 {
            return SampleBuffer::silence(sample_count);
        }

        let wave = SineOscillator::new(frequency).sample(duration, sample_count);
        let gains = self.envelope().gains(wave.len(), sample_rate);
        wave.iter()
            .zip(gains.iter())
            .map(|(sample, gain)| sample * gain * self.volume)
            .collect()
    }

    pub fn render_note(&self, note: &Note, sample_rate: u32) -> SampleBuffer {
        self.render(note.frequency(), note.duration(), sample_rate)
    }
}

/// Render a tone with the default parameters: 10 ms attack, 50 ms release and a volume of 0.3.
///
/// # Examples
///
/// ```
/// use mml_play::synth::generate_waveform;
///
/// let rest = generate_waveform(0.0, 1.0, 48000);
/// assert_eq!(rest.len(), 48000);
/// assert!(rest.iter().all(|s| *s == 0.0));
///
/// let a4 = generate_waveform(440.0, 0.5, 48000);
/// assert_eq!(a4.len(), 24000);
/// assert!(a4.peak() <= 0.3);
/// ```
pub fn generate_waveform(frequency: f64, duration: f64, sample_rate: u32) -> SampleBuffer {
    Params::default().render(frequency, duration, sample_rate)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn silence() {
        let buffer = generate_waveform(0.0, 1.0, 48000);
        assert_eq!(buffer.len(), 48000);
        assert!(buffer.iter().all(|s| *s == 0.0));
    }

    #[test]
    fn tone_shape() {
        let buffer = generate_waveform(440.0, 0.5, 48000);
        let samples = buffer.samples();
        assert_eq!(samples.len(), 24000);
        assert!(buffer.peak() <= 0.3);
        assert!(buffer.peak() > 0.29);
        assert_eq!(samples[0], 0.0);

        // within the first 10 ms the amplitude is bounded by a rising ramp
        for (i, s) in samples[..480].iter().enumerate() {
            assert!(s.abs() <= 0.3 * i as f64 / 479.0 + 1e-12);
        }
        // within the last 50 ms it is bounded by a falling ramp
        for (i, s) in samples[24000 - 2400..].iter().enumerate() {
            assert!(s.abs() <= 0.3 * (1.0 - i as f64 / 2399.0) + 1e-12);
        }
        assert_eq!(samples[23999], 0.0);
    }

    #[test]
    fn sustain_reaches_volume() {
        let params = Params::default();
        let buffer = params.render(440.0, 0.5, 48000);
        let middle = &buffer.samples()[480..24000 - 2400];
        let peak = middle.iter().fold(0.0f64, |p, s| p.max(s.abs()));
        assert!((peak - params.volume).abs() < 1e-3);
    }

    #[test]
    fn custom_volume() {
        let params = Params {
            volume: 0.5,
            ..Params::default()
        };
        let buffer = params.render(440.0, 0.5, 48000);
        assert!(buffer.peak() <= 0.5);
        assert!(buffer.peak() > 0.49);
    }

    #[test]
    fn degenerate_durations() {
        assert!(generate_waveform(440.0, 0.0, 48000).is_empty());
        assert!(generate_waveform(440.0, -0.5, 48000).is_empty());
        assert!(generate_waveform(0.0, -0.5, 48000).is_empty());
    }

    #[test]
    fn very_short_note() {
        // shorter than the attack: no envelope, just the scaled sine
        let buffer = generate_waveform(440.0, 0.005, 48000);
        assert_eq!(buffer.len(), 240);
        assert!(buffer.peak() <= 0.3);
    }

    #[test]
    fn render_note_uses_note_values() {
        let note = Note::rest(4, 0.25);
        let buffer = Params::default().render_note(&note, 8000);
        assert_eq!(buffer, SampleBuffer::silence(2000));
    }
}
