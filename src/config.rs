use std::time::Duration;

use eframe::egui::{Color32, FontFamily, FontId, Vec2};

use crate::position::Size;

/// Layout and style of the clock window.
///
/// Nothing loads this from disk; [`ClockConfig::default`]
/// is the only configuration the binary uses.
#[derive(Clone, Debug, PartialEq)]
pub struct ClockConfig {
    pub title: String,
    pub window_size: Size,
    pub font_size: f32,
    pub text_color: Color32,
    pub shadow_color: Color32,
    pub shadow_offset: Vec2,
    pub shadow_blur: f32,
    pub background: Color32,
    pub refresh_interval: Duration,
    /// Used where the host's short time style cannot be read.
    pub fallback_time_format: String,
}

impl ClockConfig {
    pub fn font(&self) -> FontId {
        FontId::new(self.font_size, FontFamily::Monospace)
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            title: String::from("float clock"),
            window_size: Size::new(120.0, 30.0),
            font_size: 22.0,
            // 7/8 opaque
            text_color: Color32::from_rgba_unmultiplied(255, 255, 255, 223),
            shadow_color: Color32::BLACK,
            shadow_offset: Vec2::ZERO,
            shadow_blur: 1.0,
            background: Color32::TRANSPARENT,
            refresh_interval: Duration::from_secs(1),
            fallback_time_format: String::from("%H:%M"),
        }
    }
}
