//! Burst sequencer: the per-channel countdown state machine.
//!
//! A channel is Idle while `bursts_to_go == 0` and Bursting otherwise.
//! Once armed, a burst always runs to completion; parameter changes
//! mid-burst reshape the remaining gaps but never the committed count.

use crate::params::{Channel, SPACING_MIN, TICKS_PER_UNIT};

/// Idle → Bursting. Commits the remaining trigger count and loads the
/// countdown for the second trigger; the caller emits the first
/// trigger immediately. The spacing floor applies here too, so even a
/// just-measured near-zero clock period cannot fire back-to-back.
pub fn arm(ch: &mut Channel) {
    if ch.effective_spacing < SPACING_MIN {
        ch.effective_spacing = SPACING_MIN;
    }
    ch.bursts_to_go = ch.number - 1;
    ch.burst_countdown = ch.effective_spacing * TICKS_PER_UNIT;
}

/// Advance a bursting channel by one tick. Returns true when a trigger
/// fires this tick. On expiry the effective spacing is floor-clamped
/// before use, and the countdown reloads only while triggers remain.
pub fn step(ch: &mut Channel) -> bool {
    if ch.bursts_to_go == 0 {
        return false;
    }

    ch.burst_countdown -= 1;
    if ch.burst_countdown > 0 {
        return false;
    }

    if ch.effective_spacing < SPACING_MIN {
        ch.effective_spacing = SPACING_MIN;
    }
    ch.bursts_to_go -= 1;
    if ch.bursts_to_go > 0 {
        ch.burst_countdown = ch.effective_spacing * TICKS_PER_UNIT;
    }
    true
}
