//! Timing core for the burstgen ratchet applet.
//!
//! Two identical channel state machines share a clock timeline: each
//! incoming clock pulse may arm a burst of trigger pulses whose count,
//! spacing, and probability are set by hand, by CV, or by random
//! excursions. The host calls [`Engine::tick`] once per tick and drives
//! its trigger outputs from the result.
//!
//! Designed to be `no_std` compatible; the core owns no I/O, no RNG
//! state, and allocates nothing.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod burst;
mod codec;
mod engine;
mod modulation;
mod params;
mod random;
pub mod spacing;
pub mod tuplet;

pub use codec::{pack_settings, unpack_settings};
pub use engine::{Engine, TickInputs};
pub use modulation::{apply_cv, apply_random, proportion_cv, ModSource};
pub use params::{
    Channel, Dist, ParamSlot, Tuplets, ADC_LAG_TICKS, CHANNELS, CV_ACTIVE_WINDOW, CV_FULL_SCALE,
    DIST_MAX, DIV_MAX, DIV_MIN, MOD_MAX, MOD_SLOTS, NUMBER_INDEX_MAX, NUMBER_MAX, NUMBER_MIN,
    PROB_MAX, SPACING_MIN, TICKS_PER_UNIT, TUPLETS_MAX,
};
pub use random::RandomSource;
pub use tuplet::{max_index, quantize};
