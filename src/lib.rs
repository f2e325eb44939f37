// modules for making sounds
pub mod envelope;
pub mod note;
pub mod oscillator;
pub mod synth;
pub mod tuning;
pub mod util;
pub mod wave;

// From text to speakers
pub mod input;
pub mod mml;
pub mod output;
pub mod play;
