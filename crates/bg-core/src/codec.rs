//! Settings codec: the persisted 32-bit settings word.
//!
//! Each channel packs into 16 bits — number (8), div (4), dist (2),
//! tuplets (2) — with channel B at bit offset 16. Probability and the
//! modulation assignments are deliberately not persisted.

use crate::params::{Channel, Dist, Tuplets, CHANNELS, DIV_MAX, DIV_MIN, NUMBER_MAX, NUMBER_MIN};

const NUMBER_SHIFT: u32 = 0;
const NUMBER_BITS: u32 = 8;
const DIV_SHIFT: u32 = 8;
const DIV_BITS: u32 = 4;
const DIST_SHIFT: u32 = 12;
const DIST_BITS: u32 = 2;
const TUPLETS_SHIFT: u32 = 14;
const TUPLETS_BITS: u32 = 2;

const CHANNEL_STRIDE: u32 = 16;

fn mask(bits: u32) -> u32 {
    (1 << bits) - 1
}

fn pack_field(word: &mut u32, shift: u32, bits: u32, value: i32) {
    *word |= (value as u32 & mask(bits)) << shift;
}

fn unpack_field(word: u32, shift: u32, bits: u32) -> i32 {
    ((word >> shift) & mask(bits)) as i32
}

/// Pack both channels into one settings word.
pub fn pack_settings(channels: &[Channel; CHANNELS]) -> u32 {
    let mut word = 0;
    for (i, ch) in channels.iter().enumerate() {
        let base = i as u32 * CHANNEL_STRIDE;
        pack_field(&mut word, base + NUMBER_SHIFT, NUMBER_BITS, ch.number);
        pack_field(&mut word, base + DIV_SHIFT, DIV_BITS, ch.div);
        pack_field(&mut word, base + DIST_SHIFT, DIST_BITS, ch.dist.index());
        pack_field(&mut word, base + TUPLETS_SHIFT, TUPLETS_BITS, ch.tuplets.index());
    }
    word
}

/// Restore both channels from a settings word.
///
/// Out-of-range fields clamp to the same bounds the live editors use.
/// The restored `number` is authoritative: `number_index` is left as
/// it was, and desyncs from `number` until the next edit.
pub fn unpack_settings(word: u32, channels: &mut [Channel; CHANNELS]) {
    for (i, ch) in channels.iter_mut().enumerate() {
        let base = i as u32 * CHANNEL_STRIDE;
        ch.number =
            unpack_field(word, base + NUMBER_SHIFT, NUMBER_BITS).clamp(NUMBER_MIN, NUMBER_MAX);
        ch.div = unpack_field(word, base + DIV_SHIFT, DIV_BITS).clamp(DIV_MIN, DIV_MAX);
        ch.dist = Dist::from_index(unpack_field(word, base + DIST_SHIFT, DIST_BITS));
        ch.tuplets = Tuplets::from_index(unpack_field(word, base + TUPLETS_SHIFT, TUPLETS_BITS));
    }
}
