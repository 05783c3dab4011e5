//! # Slope
//!
//! Linear ramp from the value a control signal had at the end of the previous block to the value
//! it has now, spread evenly over the samples of the current block. Used to turn a control-rate
//! input, which changes once per block, into a per-sample signal without stepping.

use sample::Frequency;

#[derive(Debug, Clone, Copy)]
pub struct Slope {
    start: Frequency,
    target: Frequency,
    increment: Frequency,
    samples: usize,
    consumed: usize,
}

impl Slope {
    /// Ramp from `previous` to `target` over `samples` values.
    pub fn new(target: Frequency, previous: Frequency, samples: usize) -> Self {
        let increment = if samples == 0 {
            0.0
        } else {
            (target - previous) / samples as Frequency
        };
        Slope {
            start: previous,
            target,
            increment,
            samples,
            consumed: 0,
        }
    }

    /// Return the current value and step along the ramp.
    #[inline]
    pub fn consume(&mut self) -> Frequency {
        let value = self.value();
        self.consumed += 1;
        value
    }

    /// Value the next `consume` would return. Exactly the target once the ramp is used up.
    #[inline]
    pub fn value(&self) -> Frequency {
        if self.consumed >= self.samples {
            self.target
        } else {
            self.start + self.consumed as Frequency * self.increment
        }
    }

    pub fn increment(&self) -> Frequency {
        self.increment
    }
}
