//! # Ramp Up Gen
//!
//! ```text
//!  1     /|    /|    /|    /|
//!       / |   / |   / |   / |
//!      /  |  /  |  /  |  /  |
//!     /   | /   | /   | /   |
//!  0 /    |/    |/    |/    |
//! ```
//!
//! Block-processing phasor which writes its phase in the range 0..1.
//!
//! Phase is kept in f64 and narrowed to f32 on output, so a phase within half an f32 step of 1
//! is written as exactly 1.0 even though the state itself never reaches it.
//!
//! Frequency is either audio-rate (one value per sample) or control-rate (one value per block).
//! Control-rate frequency is ramped linearly from the value reached at the end of the previous
//! block, so changing it never steps the increment mid-signal.
//!
//! Sources to connect: frequency.

use phasor::advance;
use sample::{Frequency, Sample};
use slope::Slope;
use unit::Unit;

/// How often the frequency input changes. Fixed for the lifetime of a generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rate {
    /// One frequency value per sample.
    Audio,
    /// One frequency value per block.
    Control,
}

pub struct RampUpGen {
    rate: Rate,
    sample_rate: Sample,
    phase: Sample,
    /// Frequency reached at the end of the previous control-rate block.
    frequency: Frequency,
    initialization_sample: f32,
}

impl RampUpGen {
    pub const UNIT: Unit = Unit {
        name: "RampUpGen",
        pure: false,
    };

    /// Create a generator and compute its initialization sample from `frequency`, the value the
    /// frequency input holds at construction time.
    pub fn new(rate: Rate, sample_rate: Sample, frequency: Frequency) -> Self {
        let mut module = RampUpGen {
            rate,
            sample_rate,
            phase: 0.0,
            frequency,
            initialization_sample: 0.0,
        };
        let mut output = [0.0];
        module.process(&[frequency], &mut output);
        module.initialization_sample = output[0];
        // The first real block must produce the same first sample as the step above.
        // Frequency stays as is: ramping towards itself did not change it.
        module.phase = 0.0;
        module
    }

    /// Compute one block of `output.len()` samples.
    ///
    /// Audio-rate generators read one frequency per output sample from `input`, control-rate
    /// generators read only `input[0]`.
    pub fn process(&mut self, input: &[f32], output: &mut [f32]) {
        match self.rate {
            Rate::Audio => {
                let n = output.len();
                let mut phase = self.phase;
                for (output, frequency) in output.iter_mut().zip(&input[..n]) {
                    *output = phase as f32;
                    phase = advance(phase, *frequency, self.sample_rate);
                }
                self.phase = phase;
            }
            Rate::Control => {
                let mut slope = Slope::new(input[0], self.frequency, output.len());
                let mut phase = self.phase;
                for output in output.iter_mut() {
                    let frequency = slope.consume();
                    *output = phase as f32;
                    phase = advance(phase, frequency, self.sample_rate);
                }
                self.frequency = slope.value();
                self.phase = phase;
            }
        }
    }

    /// Compute one block when the host hands a single buffer holding frequency on the way in and
    /// phase on the way out. An empty buffer is an empty block and leaves all state untouched.
    pub fn process_in_place(&mut self, buffer: &mut [f32]) {
        if buffer.is_empty() {
            return;
        }
        match self.rate {
            Rate::Audio => {
                let mut phase = self.phase;
                for sample in buffer.iter_mut() {
                    // Read before write: this slot is both input and output.
                    let frequency = *sample;
                    *sample = phase as f32;
                    phase = advance(phase, frequency, self.sample_rate);
                }
                self.phase = phase;
            }
            Rate::Control => {
                let target = buffer[0];
                self.process(&[target], buffer);
            }
        }
    }

    pub fn rate(&self) -> Rate {
        self.rate
    }

    pub fn sample_rate(&self) -> Sample {
        self.sample_rate
    }

    /// Phase the next block starts from.
    pub fn phase(&self) -> Sample {
        self.phase
    }

    /// Frequency the next control-rate block ramps from.
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Output of the single-sample step run during construction.
    pub fn initialization_sample(&self) -> f32 {
        self.initialization_sample
    }
}
