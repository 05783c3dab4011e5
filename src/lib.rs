//! # Ramp Up Gen
//!
//! Phasor producing a ramp in [0, 1) from an audio- or control-rate frequency, and the harness
//! running it as a JACK client.
pub extern crate jack_modules;
pub extern crate synth_modules;
