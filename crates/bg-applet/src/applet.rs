//! Applet capability trait: the hook set a host framework drives.

use crate::host::HostIo;
use crate::view::Display;

/// The four help-screen lines a host shows for an applet.
#[derive(Clone, Copy, Debug)]
pub struct HelpLines {
    pub digitals: &'static str,
    pub cvs: &'static str,
    pub outs: &'static str,
    pub encoder: &'static str,
}

/// Hooks every hosted applet implements. The host calls `controller`
/// once per tick on a single execution context, `view` at frame rate,
/// and the input/persistence hooks on the corresponding events.
pub trait Applet {
    fn name(&self) -> &'static str;
    /// (Re-)initialize; also the explicit reset path.
    fn start(&mut self);
    /// One tick of work: read inputs, advance timing, drive outputs.
    fn controller(&mut self, host: &mut dyn HostIo);
    /// Render onto the shared display.
    fn view(&self, display: &mut dyn Display);
    fn on_button_press(&mut self);
    /// Encoder rotation, direction −1 or +1.
    fn on_encoder_move(&mut self, direction: i32);
    /// Produce the persisted settings word.
    fn on_data_request(&self) -> u32;
    /// Restore from a persisted settings word.
    fn on_data_receive(&mut self, data: u32);
    fn help(&self) -> HelpLines;
}
