//! Host I/O boundary.

use bg_core::RandomSource;

/// Everything the applet needs from its host per tick.
///
/// Clock inputs are edge detectors: `clock` reports true for exactly
/// one tick per incoming pulse. CV readings are raw host units,
/// 0..=CV_FULL_SCALE.
pub trait HostIo {
    /// Monotonic tick counter.
    fn ticks(&self) -> u64;
    /// Edge-detected digital input (0 = primary clock, 1 = randomize).
    fn clock(&mut self, input: usize) -> bool;
    /// Raw CV reading for an analog input (0 or 1).
    fn cv(&self, input: usize) -> i32;
    /// Pulse a trigger output (0 or 1) this tick.
    fn clock_out(&mut self, channel: usize);
    /// The host's random source.
    fn random(&mut self) -> &mut dyn RandomSource;
}
