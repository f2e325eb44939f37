use std::f64::consts::PI;

/// An oscillator producing a pure sine wave at a fixed frequency.
#[derive(Debug, Clone, Copy)]
pub struct SineOscillator {
    frequency: f64,
}

impl SineOscillator {
    pub fn new(frequency: f64) -> Self {
        Self { frequency }
    }

    /// Value of the wave `time` seconds after its start.
    pub fn value_at(&self, time: f64) -> f64 {
        (2.0 * PI * self.frequency * time).sin()
    }

    /// Sample the wave at `count` evenly spaced points in `[0, duration)`.
    pub fn sample(&self, duration: f64, count: usize) -> Vec<f64> {
        let step = if count == 0 {
            0.0
        } else {
            duration / count as f64
        };
        (0..count).map(|i| self.value_at(i as f64 * step)).collect()
    }
}
