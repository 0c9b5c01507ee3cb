//! Modulation resolver: manual, CV, and random parameter sources.
//!
//! Each channel carries one modulation slot per editable parameter.
//! CV slots overwrite their parameter every tick; random slots
//! overwrite only on the randomize clock, scaled by a stored intensity.

use crate::params::{
    Channel, Dist, ParamSlot, Tuplets, CV_FULL_SCALE, DIST_MAX, DIV_MAX, DIV_MIN, PROB_MAX,
    TUPLETS_MAX,
};
use crate::random::RandomSource;

/// Decoded modulation-slot assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModSource {
    /// Parameter keeps its manually-set value.
    Manual,
    /// Parameter tracks a CV input (0 or 1).
    Cv(usize),
    /// Parameter is replaced on the randomize clock, scaled by an
    /// intensity in percent (1..=100).
    Random(i32),
}

impl ModSource {
    /// Decode a raw slot code (0..=102).
    pub fn from_code(code: i32) -> Self {
        match code {
            c if c <= 0 => ModSource::Manual,
            1 => ModSource::Cv(0),
            2 => ModSource::Cv(1),
            c => ModSource::Random(c - 2),
        }
    }
}

/// Map a raw CV reading onto [0, max], clamping the reading to the
/// host's full-scale range first.
pub fn proportion_cv(raw: i32, max: i32) -> i32 {
    raw.clamp(0, CV_FULL_SCALE) * max / CV_FULL_SCALE
}

/// Per-tick CV pass: overwrite every CV-assigned parameter from the
/// current readings. Returns true if a CV source rewrote the burst
/// count index this tick (feeds the deferred-arming decision).
pub fn apply_cv(ch: &mut Channel, cv: [i32; 2]) -> bool {
    let mut number_touched = false;

    for slot in ParamSlot::ALL {
        let input = match ModSource::from_code(ch.mods[slot.index()]) {
            ModSource::Cv(input) => input,
            _ => continue,
        };
        let raw = cv[input];

        match slot {
            ParamSlot::Prob => ch.prob = proportion_cv(raw, PROB_MAX).clamp(0, PROB_MAX),
            ParamSlot::Number => {
                let max = ch.max_index();
                ch.number_index = proportion_cv(raw, max).clamp(0, max);
                ch.update_number();
                number_touched = true;
            }
            ParamSlot::Div => ch.div = proportion_cv(raw, DIV_MAX).clamp(DIV_MIN, DIV_MAX),
            ParamSlot::Dist => ch.dist = Dist::from_index(proportion_cv(raw, DIST_MAX)),
            ParamSlot::Tuplets => {
                ch.tuplets = Tuplets::from_index(proportion_cv(raw, TUPLETS_MAX));
                ch.update_number();
            }
        }
    }

    number_touched
}

/// Randomize pass, run on the secondary clock only: every
/// random-assigned parameter is replaced by a uniform draw over its
/// range, scaled down by the slot's intensity (floor division).
pub fn apply_random(ch: &mut Channel, rng: &mut dyn RandomSource) {
    for slot in ParamSlot::ALL {
        let intensity = match ModSource::from_code(ch.mods[slot.index()]) {
            ModSource::Random(intensity) => intensity,
            _ => continue,
        };

        match slot {
            ParamSlot::Prob => ch.prob = rng.range(0, PROB_MAX + 1) * intensity / 100,
            ParamSlot::Number => {
                ch.number_index = rng.range(0, ch.max_index() + 1) * intensity / 100;
                ch.update_number();
            }
            ParamSlot::Div => {
                ch.div = (rng.range(DIV_MIN, DIV_MAX + 1) * intensity / 100)
                    .clamp(DIV_MIN, DIV_MAX);
            }
            ParamSlot::Dist => {
                ch.dist = Dist::from_index(rng.range(0, DIST_MAX + 1) * intensity / 100);
            }
            ParamSlot::Tuplets => {
                ch.tuplets = Tuplets::from_index(rng.range(0, TUPLETS_MAX + 1) * intensity / 100);
                ch.update_number();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Replays a fixed script of draws.
    struct Script {
        values: &'static [i32],
        at: usize,
    }

    impl Script {
        fn new(values: &'static [i32]) -> Self {
            Self { values, at: 0 }
        }
    }

    impl RandomSource for Script {
        fn range(&mut self, lo: i32, hi: i32) -> i32 {
            let v = self.values[self.at];
            self.at += 1;
            assert!((lo..hi).contains(&v), "scripted {v} outside [{lo},{hi})");
            v
        }
    }

    #[test]
    fn mod_source_decoding() {
        assert_eq!(ModSource::from_code(0), ModSource::Manual);
        assert_eq!(ModSource::from_code(1), ModSource::Cv(0));
        assert_eq!(ModSource::from_code(2), ModSource::Cv(1));
        assert_eq!(ModSource::from_code(3), ModSource::Random(1));
        assert_eq!(ModSource::from_code(102), ModSource::Random(100));
    }

    #[test]
    fn proportion_cv_maps_full_scale() {
        assert_eq!(proportion_cv(0, 100), 0);
        assert_eq!(proportion_cv(CV_FULL_SCALE, 100), 100);
        assert_eq!(proportion_cv(CV_FULL_SCALE / 2, 100), 50);
    }

    #[test]
    fn proportion_cv_clamps_out_of_range_readings() {
        assert_eq!(proportion_cv(-500, 100), 0);
        assert_eq!(proportion_cv(CV_FULL_SCALE * 2, 100), 100);
    }

    #[test]
    fn manual_slots_ignore_cv() {
        let mut ch = Channel::new();
        let before = ch.clone();
        assert!(!apply_cv(&mut ch, [CV_FULL_SCALE, CV_FULL_SCALE]));
        assert_eq!(ch.prob, before.prob);
        assert_eq!(ch.number, before.number);
    }

    #[test]
    fn cv_overwrites_prob() {
        let mut ch = Channel::new();
        ch.mods[ParamSlot::Prob.index()] = 1;
        apply_cv(&mut ch, [CV_FULL_SCALE / 4, 0]);
        assert_eq!(ch.prob, 25);
    }

    #[test]
    fn cv_on_number_reports_touch_and_requantizes() {
        let mut ch = Channel::new();
        ch.mods[ParamSlot::Number.index()] = 2;
        let touched = apply_cv(&mut ch, [0, CV_FULL_SCALE]);
        assert!(touched);
        assert_eq!(ch.number_index, 32);
        assert_eq!(ch.number, 32);
    }

    #[test]
    fn cv_number_range_follows_tuplet_mode() {
        let mut ch = Channel::new();
        ch.tuplets = Tuplets::Duplets;
        ch.mods[ParamSlot::Number.index()] = 1;
        apply_cv(&mut ch, [CV_FULL_SCALE, 0]);
        assert_eq!(ch.number_index, 5);
        assert_eq!(ch.number, 32);
    }

    #[test]
    fn cv_div_floors_at_one() {
        let mut ch = Channel::new();
        ch.mods[ParamSlot::Div.index()] = 1;
        apply_cv(&mut ch, [0, 0]);
        assert_eq!(ch.div, 1);
    }

    #[test]
    fn random_full_intensity_takes_draw_verbatim() {
        let mut ch = Channel::new();
        ch.mods[ParamSlot::Prob.index()] = 102; // intensity 100
        apply_random(&mut ch, &mut Script::new(&[73]));
        assert_eq!(ch.prob, 73);
    }

    #[test]
    fn random_intensity_scales_by_floor_division() {
        let mut ch = Channel::new();
        ch.mods[ParamSlot::Prob.index()] = 52; // intensity 50
        apply_random(&mut ch, &mut Script::new(&[99]));
        assert_eq!(ch.prob, 49);
    }

    #[test]
    fn random_number_requantizes() {
        let mut ch = Channel::new();
        ch.tuplets = Tuplets::Triplets;
        ch.mods[ParamSlot::Number.index()] = 102;
        apply_random(&mut ch, &mut Script::new(&[4]));
        assert_eq!(ch.number_index, 4);
        assert_eq!(ch.number, 24);
    }

    #[test]
    fn random_div_never_drops_below_one() {
        let mut ch = Channel::new();
        ch.div = 9;
        ch.mods[ParamSlot::Div.index()] = 12; // intensity 10
        apply_random(&mut ch, &mut Script::new(&[3])); // 3 * 10 / 100 = 0
        assert_eq!(ch.div, 1);
    }

    #[test]
    fn manual_slots_ignore_randomize_clock() {
        let mut ch = Channel::new();
        let before = ch.clone();
        apply_random(&mut ch, &mut Script::new(&[]));
        assert_eq!(ch.prob, before.prob);
        assert_eq!(ch.number, before.number);
        assert_eq!(ch.div, before.div);
    }
}
