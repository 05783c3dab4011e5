//! # Process
//!
//! JACK process handler driving a RampUpGen once per period.
//!
//! Runs on the real-time thread: no allocation, no locks, no logging.
use osc::Latest;
use synth_modules::prelude::*;

/// Where the frequency of a block comes from.
pub enum FrequencyInput {
    /// The `frequency` port. Control-rate generators only look at its first sample.
    Port(jack::Port<jack::AudioIn>),
    /// The newest value received over OSC.
    Osc(Latest),
}

pub struct RampProcess {
    module: RampUpGen,
    frequency: FrequencyInput,
    phase: jack::Port<jack::AudioOut>,
}

impl RampProcess {
    pub fn new(
        module: RampUpGen,
        frequency: FrequencyInput,
        phase: jack::Port<jack::AudioOut>,
    ) -> Self {
        RampProcess {
            module,
            frequency,
            phase,
        }
    }
}

impl jack::ProcessHandler for RampProcess {
    fn process(&mut self, _: &jack::Client, ps: &jack::ProcessScope) -> jack::Control {
        let phase = self.phase.as_mut_slice(ps);
        match self.frequency {
            FrequencyInput::Port(ref port) => self.module.process(port.as_slice(ps), phase),
            FrequencyInput::Osc(ref mut latest) => {
                let frequency = latest.poll();
                self.module.process(&[frequency], phase)
            }
        }
        jack::Control::Continue
    }
}
