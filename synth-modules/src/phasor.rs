//! # Phasor
//!
//! ```text
//!  1     /|    /|    /|    /|
//!       / |   / |   / |   / |
//!      /  |  /  |  /  |  /  |
//!     /   | /   | /   | /   |
//!  0 /    |/    |/    |/    |
//! ```
//!
//! Phase accumulation in the range 0..1.
//!
//! The accumulator itself is stateless: the caller owns the phase and threads it through
//! `advance`, which is what lets a block processor keep phase in a local between block
//! boundaries.

use sample::{Frequency, Sample};

/// Advance `phase` by one sample of a ramp running at `frequency` Hz and wrap it back into 0..1.
///
/// Excess above 1 is carried over from 0, excess below 0 is carried back from 1. Any frequency
/// is accepted, including zero, negative and above Nyquist.
#[inline]
pub fn advance(phase: Sample, frequency: Frequency, sample_rate: Sample) -> Sample {
    let increment = Sample::from(frequency) / sample_rate;
    let phase = phase + increment;
    if phase > 1.0 {
        phase - 1.0
    } else if phase < 0.0 {
        1.0 - phase.abs()
    } else {
        phase
    }
}
