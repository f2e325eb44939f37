// mml-play -- play Music Macro Language melodies as sine tones
// Copyright (C) 2020  Fabian Thorand
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation.
//
// A copy of the license can be found in the LICENSE file in the root of
// this repository.

//! `mmlplay` plays a Music Macro Language string on the speakers.

use std::error::Error;
use std::io::Write;
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use mml_play::input::Input;
use mml_play::mml;
use mml_play::output::sox::{SoxOutput, SoxTarget};
use mml_play::play;

#[derive(Debug, StructOpt)]
#[structopt(name = "mmlplay", about = "Playing Music Macro Language as sine tones")]
struct Opt {
    #[structopt(short = "v", long = "verbose", parse(from_occurrences))]
    verbose: usize,

    /// MML text (e.g. "cde r g") or a .mml file to play.
    #[structopt(name = "INPUT")]
    input: String,

    /// Sample rate in Hz.
    #[structopt(short, long, default_value = "48000")]
    rate: u32,

    /// Output file (any sox-supported format). Music is played directly if not given.
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,

    /// Dump the parsed notes.
    #[structopt(long)]
    #[allow(clippy::option_option)]
    dump_notes: Option<Option<PathBuf>>,
}

fn main() {
    let opt = Opt::from_args();
    if let Err(err) = run(opt) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Box<dyn Error>> {
    let level = match opt.verbose {
        0 => log::Level::Info,
        1 => log::Level::Debug,
        _ => log::Level::Trace,
    };
    simple_logger::init_with_level(level)?;

    let input = Input::detect(&opt.input)?;
    match &input {
        Input::Text(mml) => info!("playing MML: {}", mml),
        Input::File { path, .. } => info!("playing MML file {}", path.display()),
    }

    let notes = mml::parse_mml(input.mml());
    info!("parsed {} notes", notes.len());

    let dump_out = opt
        .dump_notes
        .map(|path| path.unwrap_or_else(|| "/dev/stdout".into()));
    if let Some(dump_out_path) = dump_out {
        let mut f = std::fs::File::create(dump_out_path)?;
        for note in &notes {
            writeln!(f, "{:?}", note)?;
        }
    }

    let target = match opt.output {
        None => SoxTarget::Play,
        Some(path) => SoxTarget::File(path),
    };
    let mut output = SoxOutput::new(target);
    play::play(&notes, opt.rate, &mut output)?;
    info!("playback finished");
    Ok(())
}
