//! # JACK modules
//!
//! Harness to run backend-agnostic DSP modules from synth-modules as JACK clients: unit registry,
//! configuration, logging, control input over OSC and the JACK process handler.
#[macro_use]
extern crate anyhow;
extern crate crossbeam_channel;
extern crate fnv;
extern crate jack;
extern crate rosc;
extern crate serde;
#[macro_use]
extern crate serde_derive;
#[macro_use]
extern crate slog;
#[macro_use]
extern crate slog_scope;
extern crate sloggers;
extern crate synth_modules;
extern crate toml;

pub mod config;
pub mod logging;
pub mod notification;
pub mod osc;
pub mod process;
pub mod registry;
