// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Translate a sequence of notes into one waveform and play it.

use log::{info, trace};

use crate::note::Note;
use crate::output::{AudioOutput, OutputError};
use crate::synth;
use crate::wave::SampleBuffer;

pub const DEFAULT_SAMPLE_RATE: u32 = 48000;

/// Render the notes one after another into a single buffer.
pub fn render(notes: &[Note], sample_rate: u32) -> SampleBuffer {
    render_with(&synth::Params::default(), notes, sample_rate)
}

/// Like `render`, but with custom synthesizer parameters.
pub fn render_with(params: &synth::Params, notes: &[Note], sample_rate: u32) -> SampleBuffer {
    let mut buffer = SampleBuffer::new();
    for note in notes {
        let start = buffer.len();
        buffer.append(&params.render_note(note, sample_rate));
        trace!("{:9}: {}", start, note);
    }
    info!(
        "total length {} samples ({:.2} seconds) at {} Hz",
        buffer.len(),
        buffer.seconds(sample_rate),
        sample_rate
    );
    buffer
}

/// Render the notes and play them on the output, blocking until playback has finished.
///
/// Errors of the output are passed on as they are, there is no retry.
/// An empty sequence is not sent to the output at all.
pub fn play(
    notes: &[Note],
    sample_rate: u32,
    output: &mut dyn AudioOutput,
) -> Result<(), OutputError> {
    let buffer = render(notes, sample_rate);
    play_buffer(&buffer, sample_rate, output)
}

/// Play an already rendered buffer, blocking until playback has finished.
pub fn play_buffer(
    buffer: &SampleBuffer,
    sample_rate: u32,
    output: &mut dyn AudioOutput,
) -> Result<(), OutputError> {
    if buffer.is_empty() {
        info!("nothing to play");
        return Ok(());
    }
    output.play_blocking(buffer, sample_rate)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::mml::parse_mml;
    use crate::synth::generate_waveform;

    /// Remembers what it was asked to play.
    #[derive(Default)]
    struct Recorder {
        played: Vec<(SampleBuffer, u32)>,
        waits: usize,
        fail: bool,
    }

    impl AudioOutput for Recorder {
        fn play(&mut self, buffer: &SampleBuffer, sample_rate: u32) -> Result<(), OutputError> {
            if self.fail {
                return Err(OutputError::NotPlaying);
            }
            self.played.push((buffer.clone(), sample_rate));
            Ok(())
        }

        fn wait(&mut self) -> Result<(), OutputError> {
            self.waits += 1;
            Ok(())
        }
    }

    #[test]
    fn concatenates_in_order() {
        let notes = parse_mml("ab");
        let a = generate_waveform(notes[0].frequency(), notes[0].duration(), 48000);
        let b = generate_waveform(notes[1].frequency(), notes[1].duration(), 48000);

        let buffer = render(&notes, 48000);
        assert_eq!(buffer.len(), a.len() + b.len());
        assert_eq!(&buffer.samples()[..a.len()], a.samples());
        assert_eq!(&buffer.samples()[a.len()..], b.samples());
    }

    #[test]
    fn rests_are_silent() {
        let notes = parse_mml("r");
        assert_eq!(render(&notes, 1000), SampleBuffer::silence(500));
    }

    #[test]
    fn plays_and_waits() {
        let notes = parse_mml("c r e");
        let mut output = Recorder::default();
        play(&notes, 44100, &mut output).unwrap();

        assert_eq!(output.played.len(), 1);
        assert_eq!(output.waits, 1);
        let (buffer, rate) = &output.played[0];
        assert_eq!(*rate, 44100);
        assert_eq!(buffer.len(), 3 * 22050);
        assert_eq!(*buffer, render(&notes, 44100));
    }

    #[test]
    fn empty_sequence_is_a_no_op() {
        let mut output = Recorder::default();
        play(&[], DEFAULT_SAMPLE_RATE, &mut output).unwrap();
        assert!(output.played.is_empty());
        assert_eq!(output.waits, 0);
    }

    #[test]
    fn device_errors_propagate() {
        let mut output = Recorder {
            fail: true,
            ..Recorder::default()
        };
        let result = play(&parse_mml("c"), DEFAULT_SAMPLE_RATE, &mut output);
        assert!(matches!(result, Err(OutputError::NotPlaying)));
        assert_eq!(output.waits, 0);
    }

    #[test]
    fn custom_params() {
        let params = synth::Params {
            volume: 0.1,
            ..synth::Params::default()
        };
        let buffer = render_with(&params, &parse_mml("a"), 8000);
        assert_eq!(buffer.len(), 4000);
        assert!(buffer.peak() <= 0.1);
    }
}
