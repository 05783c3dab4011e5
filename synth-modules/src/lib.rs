//! # Synth modules
//!
//! Backend-agnostic DSP modules. Hosts hand them buffers once per block and own everything else:
//! sample rate, buffer sizes and when blocks are processed.
pub mod phasor;
pub mod prelude;
pub mod ramp;
pub mod sample;
pub mod slope;
pub mod unit;
