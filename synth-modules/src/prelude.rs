//! # Prelude
//!
//! Re-export of everything a host needs to drive the modules.
pub use phasor::advance;
pub use ramp::{RampUpGen, Rate};
pub use sample::{Frequency, Sample};
pub use slope::Slope;
pub use unit::Unit;
