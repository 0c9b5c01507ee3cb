//! Host-facing applet surface for the burstgen ratchet.
//!
//! Wraps the timing core in the polymorphic hook set a host framework
//! drives — per-tick controller, display rendering, encoder/button
//! handling, and settings persistence — behind small traits so hosts
//! range from real hardware glue to the scripted fakes in tests.

mod applet;
mod host;
mod ratchet;
mod ui;
mod view;

pub use applet::{Applet, HelpLines};
pub use host::HostIo;
pub use ratchet::RatchetApplet;
pub use ui::{decode, item_coords, wrap, MenuItem, ITEMS_PER_CHANNEL, MENU_ITEMS};
pub use view::{Display, DisplayList, DrawOp, TEXT_CAP};
