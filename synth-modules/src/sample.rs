//! # Basic audio signal types

/// The type in which phase is accumulated.
///
/// Phase increments are tiny (a few hundredths at most for audible frequencies, often much less)
/// and are summed over millions of samples, so every rounding error lands in the output as drift.
/// f64 keeps that drift far below anything audible; the value is narrowed to f32 only when it is
/// written into a host buffer.
pub type Sample = f64;

/// The type in which frequencies arrive from the host, in Hz.
pub type Frequency = f32;
