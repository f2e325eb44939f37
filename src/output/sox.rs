// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! Easy interface for getting sound to play using a sox subprocess.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use log::{debug, error};
use snafu::{ensure, OptionExt, ResultExt};

use super::{AudioOutput, Exit, NotPlaying, OutputError, Spawn, Wait, Write as WriteFailed};
use crate::wave::SampleBuffer;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SoxTarget {
    /// Play on the default speakers.
    Play,
    /// Write to a file in any sox-supported format.
    File(PathBuf),
}

/// Plays buffers through `play`, or records them with `sox`.
pub struct SoxOutput {
    target: SoxTarget,
    player: Option<Child>,
}

impl SoxOutput {
    pub fn new(target: SoxTarget) -> Self {
        Self {
            target,
            player: None,
        }
    }

    fn program(&self) -> PathBuf {
        let name = match self.target {
            SoxTarget::Play => "play",
            SoxTarget::File(_) => "sox",
        };
        // For properly recording the sox dependency on nix:
        if let Some(sox_bin) = option_env!("NIX_SOX_BIN") {
            debug!("using sox from nix store {}", sox_bin);
            Path::new(sox_bin).join(name)
        } else {
            name.into()
        }
    }

    fn command(&self, sample_rate: u32) -> Command {
        let mut command = Command::new(self.program());
        command
            .args(&["-R", "--channels", "1", "--rate"])
            .arg(sample_rate.to_string())
            .args(&["--type", "f64", "/dev/stdin"])
            .stdin(Stdio::piped());
        match &self.target {
            SoxTarget::Play => {
                command.stdout(Stdio::null()).stderr(Stdio::null());
            }
            SoxTarget::File(outfile) => {
                command.arg(outfile);
            }
        }
        command
    }
}

impl AudioOutput for SoxOutput {
    /// Hands the buffer to a fresh sox process.
    /// Since the buffer is written through a pipe, this returns once sox has consumed
    /// all but the last pipe buffer worth of samples.
    fn play(&mut self, buffer: &SampleBuffer, sample_rate: u32) -> Result<(), OutputError> {
        // only one playback at a time
        if self.player.is_some() {
            self.wait()?;
        }

        let program = self.program();
        debug!("starting {} at {} Hz", program.display(), sample_rate);
        let mut player = self.command(sample_rate).spawn().context(Spawn {
            program: program.display().to_string(),
        })?;

        let mut bytes = vec![0u8; buffer.byte_len()];
        buffer.copy_bytes_to(&mut bytes);

        let status = match player.stdin.take() {
            Some(mut audio_stream) => audio_stream
                .write_all(&bytes)
                .and_then(|_| audio_stream.flush()),
            None => Ok(()),
        };
        // sox exits once its input stream is closed, which happened when the stream was dropped.
        self.player = Some(player);
        if let Err(err) = status {
            error!("Failed to write audio to sox stream: {}", err);
            // reap the process, its exit status is less telling than the write error
            let _ = self.wait();
            return Err(err).context(WriteFailed);
        }
        Ok(())
    }

    fn wait(&mut self) -> Result<(), OutputError> {
        let mut player = self.player.take().context(NotPlaying)?;
        let status = player.wait().context(Wait)?;
        ensure!(
            status.success(),
            Exit {
                program: self.program().display().to_string(),
                status,
            }
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn args(command: &Command) -> Vec<String> {
        command
            .get_args()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn play_command() {
        let output = SoxOutput::new(SoxTarget::Play);
        assert!(output.program().ends_with("play"));
        assert_eq!(
            args(&output.command(48000)),
            vec!["-R", "--channels", "1", "--rate", "48000", "--type", "f64", "/dev/stdin"]
        );
    }

    #[test]
    fn file_command() {
        let output = SoxOutput::new(SoxTarget::File("out.wav".into()));
        assert!(output.program().ends_with("sox"));
        let args = args(&output.command(44100));
        assert_eq!(args[4], "44100");
        assert_eq!(args.last().map(String::as_str), Some("out.wav"));
    }

    #[test]
    fn wait_without_play() {
        let mut output = SoxOutput::new(SoxTarget::Play);
        match output.wait() {
            Err(OutputError::NotPlaying) => {}
            other => panic!("unexpected result {:?}", other),
        }
    }
}
