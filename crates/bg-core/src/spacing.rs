//! Spacing calculator: clock period → inter-trigger spacing.

use crate::params::{Channel, Dist, TICKS_PER_UNIT};

/// Derive the raw inter-trigger spacing from a measured clock-to-clock
/// interval. Called on each primary clock after the first; the quantizer
/// guarantees `number >= 1`, so the division is safe.
pub fn capture_spacing(ch: &mut Channel, ticks_since_clock: u32) {
    ch.spacing = (ticks_since_clock as i32 / ch.number) / TICKS_PER_UNIT;
}

/// Recompute the effective spacing from division and distribution.
/// Runs every tick, not just on clocks, so mid-burst parameter changes
/// reshape the remaining gaps.
///
/// Both non-flat buckets add positively: the term scales with the
/// triggers still to go, so gaps start wide and tighten across the
/// burst either way, with `Wide` twice as pronounced. The minimum
/// clamp happens at fire time in the burst sequencer.
pub fn update_effective_spacing(ch: &mut Channel) {
    ch.effective_spacing = ch.spacing * ch.div;
    if ch.dist != Dist::Flat {
        ch.effective_spacing += ch.dist.index() * ch.bursts_to_go * (ch.spacing / ch.number);
    }
}
