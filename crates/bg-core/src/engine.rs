//! Per-tick trigger scheduler.
//!
//! Ties clock detection, modulation, spacing, and burst stepping
//! together. The host calls [`Engine::tick`] once per tick with the
//! edge-detected clock states and raw CV readings; the result says
//! which trigger outputs pulse this tick.

use crate::burst;
use crate::codec;
use crate::modulation::{apply_cv, apply_random};
use crate::params::{Channel, ADC_LAG_TICKS, CHANNELS, CV_ACTIVE_WINDOW, PROB_MAX};
use crate::random::RandomSource;
use crate::spacing::{capture_spacing, update_effective_spacing};

/// Host inputs sampled for one tick.
#[derive(Clone, Copy, Debug, Default)]
pub struct TickInputs {
    /// Primary clock edge detected this tick.
    pub clock: bool,
    /// Randomize clock edge detected this tick.
    pub rand_clock: bool,
    /// Raw CV readings, 0..=CV_FULL_SCALE.
    pub cv: [i32; 2],
}

/// The dual-channel burst engine.
#[derive(Clone, Debug, Default)]
pub struct Engine {
    channels: [Channel; CHANNELS],
    ticks_since_clock: u32,
    /// Last tick a CV source rewrote a burst count; None = never.
    last_number_cv_tick: Option<u64>,
    /// Deferred-arming countdown, pending while Some.
    adc_lag: Option<u32>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn channels(&self) -> &[Channel; CHANNELS] {
        &self.channels
    }

    pub fn channel(&self, index: usize) -> &Channel {
        &self.channels[index]
    }

    pub fn channel_mut(&mut self, index: usize) -> &mut Channel {
        &mut self.channels[index]
    }

    /// Restore the applet-start state. Parameters reset to defaults and
    /// any in-progress burst or pending arming delay is dropped.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Advance the engine by one host tick.
    ///
    /// `now` is the host's monotonic tick counter. Returns one pulse
    /// flag per trigger output.
    pub fn tick(
        &mut self,
        now: u64,
        inputs: TickInputs,
        rng: &mut dyn RandomSource,
    ) -> [bool; CHANNELS] {
        let mut pulses = [false; CHANNELS];

        for ch in &mut self.channels {
            if apply_cv(ch, inputs.cv) {
                self.last_number_cv_tick = Some(now);
            }
        }

        if inputs.clock {
            for ch in &mut self.channels {
                capture_spacing(ch, self.ticks_since_clock);
            }
            self.ticks_since_clock = 0;
        }

        if inputs.rand_clock {
            for ch in &mut self.channels {
                apply_random(ch, rng);
            }
        }

        self.ticks_since_clock += 1;

        for ch in &mut self.channels {
            update_effective_spacing(ch);
        }

        for (i, ch) in self.channels.iter_mut().enumerate() {
            if burst::step(ch) {
                pulses[i] = true;
            }
        }

        // Arming: when the burst count is being driven by CV, defer the
        // probability roll past the ADC settling window so a fast
        // external voltage is read where it lands, not where it was.
        // Otherwise arm on the clock edge with zero added latency.
        let number_cv_active = self
            .last_number_cv_tick
            .is_some_and(|t| now.saturating_sub(t) < CV_ACTIVE_WINDOW);

        let mut fire = inputs.clock && !number_cv_active;
        if let Some(remaining) = &mut self.adc_lag {
            *remaining -= 1;
            if *remaining == 0 {
                self.adc_lag = None;
                fire = true;
            }
        }
        if inputs.clock && number_cv_active {
            self.adc_lag = Some(ADC_LAG_TICKS);
        }

        if fire {
            for (i, ch) in self.channels.iter_mut().enumerate() {
                if rng.range(0, PROB_MAX) < ch.prob {
                    pulses[i] = true;
                    burst::arm(ch);
                }
            }
        }

        pulses
    }

    /// Pack both channels' persisted settings into one 32-bit word.
    pub fn save_settings(&self) -> u32 {
        codec::pack_settings(&self.channels)
    }

    /// Restore both channels from a persisted word. Out-of-range
    /// fields are clamped, never rejected.
    pub fn load_settings(&mut self, data: u32) {
        codec::unpack_settings(data, &mut self.channels);
    }
}
