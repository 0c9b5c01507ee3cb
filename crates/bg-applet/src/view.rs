//! Display boundary and a buffered draw-list implementation.

use arrayvec::ArrayString;
use heapless::Vec;

/// Longest text a single draw op carries.
pub const TEXT_CAP: usize = 20;

/// Draw ops per frame: header + two channels of labels + cursor.
const OP_CAP: usize = 32;

/// The shared display, as the applet sees it. Coordinates are pixels
/// on the host's small OLED.
pub trait Display {
    fn print(&mut self, x: i32, y: i32, text: &str);
    /// Underline cursor: solid while navigating, hollow while editing.
    fn cursor(&mut self, x: i32, y: i32, w: i32, solid: bool);
}

/// One buffered draw operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOp {
    Text { x: i32, y: i32, text: ArrayString<TEXT_CAP> },
    Cursor { x: i32, y: i32, w: i32, solid: bool },
}

/// A [`Display`] that records draw ops instead of driving hardware.
/// The simulator renders from it; tests assert on it.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    ops: Vec<DrawOp, OP_CAP>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// The text drawn at exactly (x, y), if any.
    pub fn text_at(&self, x: i32, y: i32) -> Option<&str> {
        self.ops.iter().find_map(|op| match op {
            DrawOp::Text { x: ox, y: oy, text } if *ox == x && *oy == y => Some(text.as_str()),
            _ => None,
        })
    }

    /// Does any op draw this exact text?
    pub fn contains_text(&self, needle: &str) -> bool {
        self.ops
            .iter()
            .any(|op| matches!(op, DrawOp::Text { text, .. } if text.as_str() == needle))
    }
}

impl Display for DisplayList {
    fn print(&mut self, x: i32, y: i32, text: &str) {
        let mut buf = ArrayString::<TEXT_CAP>::new();
        for c in text.chars().take(TEXT_CAP) {
            let _ = buf.try_push(c);
        }
        let _ = self.ops.push(DrawOp::Text { x, y, text: buf });
    }

    fn cursor(&mut self, x: i32, y: i32, w: i32, solid: bool) {
        let _ = self.ops.push(DrawOp::Cursor { x, y, w, solid });
    }
}
