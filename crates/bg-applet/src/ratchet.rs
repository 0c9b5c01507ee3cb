//! The burstgen applet: timing core + menu UI behind the host hooks.

use core::fmt::Write as _;

use arrayvec::ArrayString;
use bg_core::{
    Dist, Engine, ModSource, TickInputs, Tuplets, DIST_MAX, DIV_MAX, DIV_MIN, MOD_MAX, PROB_MAX,
    TUPLETS_MAX,
};

use crate::applet::{Applet, HelpLines};
use crate::host::HostIo;
use crate::ui::{self, MenuItem, COL0_X, COL1_X, COL2_X, ROW0_Y, ROW_INTERVAL};
use crate::view::Display;

const DIST_LABELS: [&str; 3] = ["*", "-", "+"];
const TUPLET_LABELS: [&str; 3] = ["*", "D", "T"];

/// Dual-channel probabilistic burst/ratchet trigger applet.
pub struct RatchetApplet {
    engine: Engine,
    /// Cursor position over the 12 menu slots.
    cursor: i32,
    /// Slot latched for editing, if any.
    edit: Option<i32>,
}

impl Default for RatchetApplet {
    fn default() -> Self {
        Self::new()
    }
}

impl RatchetApplet {
    pub fn new() -> Self {
        Self { engine: Engine::new(), cursor: 0, edit: None }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    pub fn cursor(&self) -> i32 {
        self.cursor
    }

    pub fn editing(&self) -> bool {
        self.edit.is_some()
    }

    fn draw_selector(&self, display: &mut dyn Display) {
        for i in 0..bg_core::CHANNELS {
            let ch = self.engine.channel(i);
            let y1 = ROW0_Y + i as i32 * 2 * ROW_INTERVAL;
            let y2 = y1 + ROW_INTERVAL;

            if !ch.settings_page {
                print_int(display, COL0_X, y1, ch.prob);
                print_int(display, COL1_X, y1, ch.number);
                let mut div = ArrayString::<8>::new();
                let _ = write!(div, "/{}", ch.div);
                display.print(COL2_X, y1, &div);

                display.print(COL0_X, y2, DIST_LABELS[ch.dist.index() as usize]);
                display.print(COL1_X, y2, TUPLET_LABELS[ch.tuplets.index() as usize]);
                display.print(COL2_X, y2, "S");
            } else {
                for (slot, code) in ch.mods.iter().enumerate() {
                    let (x, y) = match slot {
                        0 => (COL0_X, y1),
                        1 => (COL1_X, y1),
                        2 => (COL2_X, y1),
                        3 => (COL0_X, y2),
                        _ => (COL1_X, y2),
                    };
                    match ModSource::from_code(*code) {
                        ModSource::Manual => display.print(x, y, "*"),
                        ModSource::Cv(0) => display.print(x, y, "cv1"),
                        ModSource::Cv(_) => display.print(x, y, "cv2"),
                        ModSource::Random(intensity) => print_int(display, x, y, intensity),
                    }
                }
                display.print(COL2_X, y2, "<");
            }
        }

        let (x, y) = ui::item_coords(self.cursor);
        display.cursor(x + 1, y + 10, 12, self.edit.is_none());
    }
}

impl Applet for RatchetApplet {
    fn name(&self) -> &'static str {
        "BurstGen"
    }

    fn start(&mut self) {
        self.engine.reset();
        self.cursor = 0;
        self.edit = None;
    }

    fn controller(&mut self, host: &mut dyn HostIo) {
        let now = host.ticks();
        let inputs = TickInputs {
            clock: host.clock(0),
            rand_clock: host.clock(1),
            cv: [host.cv(0), host.cv(1)],
        };
        let pulses = self.engine.tick(now, inputs, host.random());
        for (i, fired) in pulses.iter().enumerate() {
            if *fired {
                host.clock_out(i);
            }
        }
    }

    fn view(&self, display: &mut dyn Display) {
        display.print(1, 2, self.name());
        self.draw_selector(display);
    }

    fn on_button_press(&mut self) {
        let (channel, item) = ui::decode(self.cursor);
        if item == MenuItem::Settings {
            let ch = self.engine.channel_mut(channel);
            ch.settings_page = !ch.settings_page;
        } else {
            self.edit = if self.edit == Some(self.cursor) { None } else { Some(self.cursor) };
        }
    }

    fn on_encoder_move(&mut self, direction: i32) {
        let Some(param) = self.edit else {
            self.cursor = ui::wrap(self.cursor + direction, ui::MENU_ITEMS as i32);
            return;
        };

        let (channel, item) = ui::decode(param);
        let ch = self.engine.channel_mut(channel);

        if !ch.settings_page {
            match item {
                MenuItem::Prob => ch.prob = (ch.prob + direction).clamp(0, PROB_MAX),
                MenuItem::Number => {
                    let max = ch.max_index();
                    ch.number_index = (ch.number_index + direction).clamp(0, max);
                    ch.update_number();
                }
                MenuItem::Div => ch.div = (ch.div + direction).clamp(DIV_MIN, DIV_MAX),
                MenuItem::Dist => {
                    ch.dist = Dist::from_index((ch.dist.index() + direction).clamp(0, DIST_MAX));
                }
                MenuItem::Tuplets => {
                    ch.tuplets =
                        Tuplets::from_index((ch.tuplets.index() + direction).clamp(0, TUPLETS_MAX));
                    ch.update_number();
                }
                MenuItem::Settings => {}
            }
        } else if let Some(slot) = item.mod_slot() {
            let code = &mut ch.mods[slot.index()];
            *code = ui::wrap(*code + direction, MOD_MAX + 1);
        }
    }

    fn on_data_request(&self) -> u32 {
        self.engine.save_settings()
    }

    fn on_data_receive(&mut self, data: u32) {
        self.engine.load_settings(data);
    }

    fn help(&self) -> HelpLines {
        HelpLines {
            digitals: "1=Clock 2=Rand Clk",
            cvs: "Freely Assignable",
            outs: "1=Trig1 2=Trig2",
            encoder: "Push to Edit Param",
        }
    }
}

fn print_int(display: &mut dyn Display, x: i32, y: i32, value: i32) {
    let mut buf = ArrayString::<8>::new();
    let _ = write!(buf, "{value}");
    display.print(x, y, &buf);
}
