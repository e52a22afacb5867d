//! OS specific behaviour eframe does not expose.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::{configure_event_loop, join_all_spaces, main_screen_size, ShortTimeStyle};

#[cfg(not(target_os = "macos"))]
use crate::{error::PlatformError, position::Size};

/// Shows the window on every space/virtual desktop. No-op off macOS.
#[cfg(not(target_os = "macos"))]
pub fn join_all_spaces(_frame: &eframe::Frame) -> Result<(), PlatformError> {
    Ok(())
}

/// Runs the process without a dock icon or menu bar. No-op off macOS.
#[cfg(not(target_os = "macos"))]
pub fn configure_event_loop(_options: &mut eframe::NativeOptions) {}

/// Only AppKit can be asked before the event loop starts.
#[cfg(not(target_os = "macos"))]
pub fn main_screen_size() -> Option<Size> {
    None
}
