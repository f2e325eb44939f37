//! Audio devices accepting rendered sample buffers.

pub mod sox;

use std::io;
use std::process::ExitStatus;

use snafu::Snafu;

use crate::wave::SampleBuffer;

#[derive(Debug, Snafu)]
pub enum OutputError {
    #[snafu(display("Could not start {}: {}", program, source))]
    Spawn { program: String, source: io::Error },
    #[snafu(display("Failed to write audio to the output stream: {}", source))]
    Write { source: io::Error },
    #[snafu(display("Failed to wait for playback: {}", source))]
    Wait { source: io::Error },
    #[snafu(display("{} exited with {}", program, status))]
    Exit { program: String, status: ExitStatus },
    #[snafu(display("Nothing is playing"))]
    NotPlaying,
}

/// A device that plays mono sample buffers.
pub trait AudioOutput {
    /// Start playing a buffer. Returns without waiting for playback to finish.
    fn play(&mut self, buffer: &SampleBuffer, sample_rate: u32) -> Result<(), OutputError>;

    /// Block until the most recently started playback has finished.
    fn wait(&mut self) -> Result<(), OutputError>;

    /// Play a buffer and block until it has finished.
    fn play_blocking(&mut self, buffer: &SampleBuffer, sample_rate: u32) -> Result<(), OutputError> {
        self.play(buffer, sample_rate)?;
        self.wait()
    }
}
