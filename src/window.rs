use eframe::egui::{self, Vec2, WindowLevel};

use crate::config::ClockConfig;
use crate::platform;
use crate::position::{anchored_position, Size};

/// Borderless, transparent, click-through window that floats above normal
/// application windows.
///
/// With a known `screen` the window opens in its top-right corner.
pub fn viewport(config: &ClockConfig, screen: Option<Size>) -> egui::ViewportBuilder {
    let builder = egui::ViewportBuilder::default()
        .with_title(config.title.clone())
        .with_inner_size(Vec2::from(config.window_size))
        .with_decorations(false)
        .with_transparent(true)
        .with_window_level(WindowLevel::AlwaysOnTop)
        .with_mouse_passthrough(true)
        .with_resizable(false)
        .with_taskbar(false);

    match screen {
        Some(screen) => builder.with_position(anchored_position(config.window_size, screen)),
        None => builder,
    }
}

pub fn native_options(config: &ClockConfig) -> eframe::NativeOptions {
    let mut options = eframe::NativeOptions {
        viewport: viewport(config, platform::main_screen_size()),
        ..Default::default()
    };
    platform::configure_event_loop(&mut options);
    options
}
