//! Menu model: cursor slots and their display positions.

use bg_core::ParamSlot;

/// Menu slots: two channels × six items.
pub const MENU_ITEMS: usize = 12;
pub const ITEMS_PER_CHANNEL: usize = 6;

// Display layout for the three-column, four-row parameter grid.
pub const COL0_X: i32 = 1;
pub const COL1_X: i32 = 22;
pub const COL2_X: i32 = 44;
pub const ROW0_Y: i32 = 15;
pub const ROW_INTERVAL: i32 = 12;

/// One editable item within a channel, in cursor order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItem {
    Prob,
    Number,
    Div,
    Dist,
    Tuplets,
    /// Toggles the channel between its value page and mod page.
    Settings,
}

impl MenuItem {
    const ORDER: [MenuItem; ITEMS_PER_CHANNEL] = [
        MenuItem::Prob,
        MenuItem::Number,
        MenuItem::Div,
        MenuItem::Dist,
        MenuItem::Tuplets,
        MenuItem::Settings,
    ];

    /// The modulation slot this item edits on the settings page.
    pub fn mod_slot(self) -> Option<ParamSlot> {
        match self {
            MenuItem::Prob => Some(ParamSlot::Prob),
            MenuItem::Number => Some(ParamSlot::Number),
            MenuItem::Div => Some(ParamSlot::Div),
            MenuItem::Dist => Some(ParamSlot::Dist),
            MenuItem::Tuplets => Some(ParamSlot::Tuplets),
            MenuItem::Settings => None,
        }
    }
}

/// Resolve a cursor position to (channel, item).
pub fn decode(cursor: i32) -> (usize, MenuItem) {
    let cursor = cursor.rem_euclid(MENU_ITEMS as i32) as usize;
    (cursor / ITEMS_PER_CHANNEL, MenuItem::ORDER[cursor % ITEMS_PER_CHANNEL])
}

/// Display position of a cursor slot. Items sit on a 3×2 grid per
/// channel; channel B's grid starts two rows down.
pub fn item_coords(cursor: i32) -> (i32, i32) {
    let (channel, item) = decode(cursor);
    let y_base = ROW0_Y + channel as i32 * 2 * ROW_INTERVAL;
    let (col, row) = match item {
        MenuItem::Prob => (COL0_X, 0),
        MenuItem::Number => (COL1_X, 0),
        MenuItem::Div => (COL2_X, 0),
        MenuItem::Dist => (COL0_X, 1),
        MenuItem::Tuplets => (COL1_X, 1),
        MenuItem::Settings => (COL2_X, 1),
    };
    (col, y_base + row * ROW_INTERVAL)
}

/// Euclidean wrap, so encoder moves cycle in both directions.
pub fn wrap(value: i32, modulus: i32) -> i32 {
    value.rem_euclid(modulus)
}
