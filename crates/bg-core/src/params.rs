//! Per-channel burst parameters and their editing bounds.

use crate::tuplet;

/// Number of trigger channels.
pub const CHANNELS: usize = 2;

/// Floor on effective spacing, in spacing units, applied before a
/// burst trigger fires.
pub const SPACING_MIN: i32 = 8;
/// Probability ceiling (percent).
pub const PROB_MAX: i32 = 100;
/// Clock-division range.
pub const DIV_MIN: i32 = 1;
pub const DIV_MAX: i32 = 16;
/// Distribution bucket ceiling (0 = flat).
pub const DIST_MAX: i32 = 2;
/// Tuplet mode ceiling.
pub const TUPLETS_MAX: i32 = 2;
/// Resolved triggers-per-burst range.
pub const NUMBER_MIN: i32 = 1;
pub const NUMBER_MAX: i32 = 48;
/// Raw burst-count index ceiling in free mode.
pub const NUMBER_INDEX_MAX: i32 = 32;

/// Modulation slots per channel: prob, number index, div, dist, tuplets.
pub const MOD_SLOTS: usize = 5;
/// Modulation code ceiling. 0 = manual, 1-2 = CV inputs, 3..=102 map to
/// random intensities 1..=100.
pub const MOD_MAX: i32 = 102;

/// Host ticks per spacing unit (sub-tick timing resolution of the
/// host's tick counter).
pub const TICKS_PER_UNIT: i32 = 17;
/// Window, in ticks, during which a CV write to the burst count is
/// considered "still changing" for the deferred-arming decision.
pub const CV_ACTIVE_WINDOW: u64 = 80_000;
/// Deferred-arming delay: lets a fast-moving CV settle past the host
/// ADC before the probability roll reads the burst count.
pub const ADC_LAG_TICKS: u32 = 96;
/// Full-scale raw CV reading from the host.
pub const CV_FULL_SCALE: i32 = 7_680;

/// Distribution of trigger spacing across a burst.
///
/// Both non-flat buckets widen the early gaps of a burst (the added
/// term scales with the triggers still to go); they differ only in
/// magnitude. This matches the original hardware behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Dist {
    #[default]
    Flat,
    Narrow,
    Wide,
}

impl Dist {
    /// Bucket index, also the magnitude of the distribution term.
    pub fn index(self) -> i32 {
        match self {
            Dist::Flat => 0,
            Dist::Narrow => 1,
            Dist::Wide => 2,
        }
    }

    /// Bucket from an index, clamped to the valid range.
    pub fn from_index(index: i32) -> Self {
        match index {
            i if i <= 0 => Dist::Flat,
            1 => Dist::Narrow,
            _ => Dist::Wide,
        }
    }
}

/// Constraint on how the burst-count index maps to a trigger count.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tuplets {
    /// Index is the count itself (1..=32).
    #[default]
    Free,
    /// Counts restricted to powers of two.
    Duplets,
    /// Counts restricted to 1.5 × powers of two.
    Triplets,
}

impl Tuplets {
    pub fn index(self) -> i32 {
        match self {
            Tuplets::Free => 0,
            Tuplets::Duplets => 1,
            Tuplets::Triplets => 2,
        }
    }

    pub fn from_index(index: i32) -> Self {
        match index {
            i if i <= 0 => Tuplets::Free,
            1 => Tuplets::Duplets,
            _ => Tuplets::Triplets,
        }
    }
}

/// The five modulatable parameters, in modulation-slot order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamSlot {
    Prob,
    Number,
    Div,
    Dist,
    Tuplets,
}

impl ParamSlot {
    pub const ALL: [ParamSlot; MOD_SLOTS] = [
        ParamSlot::Prob,
        ParamSlot::Number,
        ParamSlot::Div,
        ParamSlot::Dist,
        ParamSlot::Tuplets,
    ];

    pub fn index(self) -> usize {
        match self {
            ParamSlot::Prob => 0,
            ParamSlot::Number => 1,
            ParamSlot::Div => 2,
            ParamSlot::Dist => 3,
            ParamSlot::Tuplets => 4,
        }
    }
}

/// All timing and modulation state for one trigger channel.
#[derive(Clone, Debug)]
pub struct Channel {
    /// Raw spacing between burst triggers, in spacing units, derived
    /// from the measured clock period.
    pub spacing: i32,
    /// Spacing after division and distribution, recomputed every tick.
    pub effective_spacing: i32,
    /// Ticks until the next trigger of an in-progress burst.
    pub burst_countdown: i32,
    /// Triggers remaining in the current burst (0 = idle).
    pub bursts_to_go: i32,
    /// Probability (percent) that a clock pulse arms a burst.
    pub prob: i32,
    /// Resolved triggers per burst, 1..=48.
    pub number: i32,
    /// Raw index behind `number`; interpretation depends on `tuplets`.
    pub number_index: i32,
    /// Clock-division multiplier on spacing, 1..=16.
    pub div: i32,
    /// Spacing distribution across the burst.
    pub dist: Dist,
    /// Tuplet constraint on the burst count.
    pub tuplets: Tuplets,
    /// UI flag: show the modulation-assignment page instead of values.
    /// Rendering only; never read by the timing core.
    pub settings_page: bool,
    /// Raw modulation codes, one per [`ParamSlot`].
    pub mods: [i32; MOD_SLOTS],
}

impl Default for Channel {
    fn default() -> Self {
        Self {
            spacing: 50,
            effective_spacing: 50,
            burst_countdown: 0,
            bursts_to_go: 0,
            prob: 50,
            number: 1,
            number_index: 0,
            div: 1,
            dist: Dist::Flat,
            tuplets: Tuplets::Free,
            settings_page: false,
            mods: [0; MOD_SLOTS],
        }
    }
}

impl Channel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-derive `number` from `number_index` under the current tuplet
    /// mode. Must run after any write to either field.
    pub fn update_number(&mut self) {
        self.number = tuplet::quantize(self.tuplets, self.number_index);
    }

    /// Upper bound on `number_index` edits under the current mode.
    pub fn max_index(&self) -> i32 {
        tuplet::max_index(self.tuplets)
    }

    /// Is a burst in progress?
    pub fn bursting(&self) -> bool {
        self.bursts_to_go > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_channel_is_idle() {
        let ch = Channel::new();
        assert_eq!(ch.bursts_to_go, 0);
        assert!(!ch.bursting());
        assert_eq!(ch.prob, 50);
        assert_eq!(ch.number, 1);
        assert_eq!(ch.div, 1);
        assert_eq!(ch.mods, [0; MOD_SLOTS]);
    }

    #[test]
    fn dist_index_round_trip() {
        for i in 0..=DIST_MAX {
            assert_eq!(Dist::from_index(i).index(), i);
        }
    }

    #[test]
    fn dist_from_index_clamps() {
        assert_eq!(Dist::from_index(-3), Dist::Flat);
        assert_eq!(Dist::from_index(9), Dist::Wide);
    }

    #[test]
    fn tuplets_index_round_trip() {
        for i in 0..=TUPLETS_MAX {
            assert_eq!(Tuplets::from_index(i).index(), i);
        }
    }

    #[test]
    fn update_number_tracks_index() {
        let mut ch = Channel::new();
        ch.number_index = 7;
        ch.update_number();
        assert_eq!(ch.number, 7);

        ch.tuplets = Tuplets::Duplets;
        ch.update_number();
        assert_eq!(ch.number, 32); // 2^7 clamped
    }

    #[test]
    fn param_slot_order_matches_mod_array() {
        for (i, slot) in ParamSlot::ALL.iter().enumerate() {
            assert_eq!(slot.index(), i);
        }
    }
}
