use chrono::{DateTime, Local};
use eframe::egui::{self, Align2, Vec2};
use tracing::debug;

use crate::config::ClockConfig;
#[cfg(target_os = "macos")]
use crate::platform::ShortTimeStyle;

/// Source of wall-clock time, swappable in tests.
pub trait TimeSource {
    fn now(&self) -> DateTime<Local>;
}

pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

#[derive(Debug)]
pub enum TimeFormatter {
    /// A `chrono` strftime pattern.
    Pattern(String),
    /// The host's short time style.
    #[cfg(target_os = "macos")]
    Host(ShortTimeStyle),
}

impl TimeFormatter {
    pub fn new(format: impl Into<String>) -> Self {
        Self::Pattern(format.into())
    }

    /// The host's short time style where it can be read, `fallback` elsewhere.
    #[cfg(target_os = "macos")]
    pub fn host(_fallback: &str) -> Self {
        Self::Host(ShortTimeStyle::new())
    }

    #[cfg(not(target_os = "macos"))]
    pub fn host(fallback: &str) -> Self {
        Self::new(fallback)
    }

    pub fn format(&self, time: DateTime<Local>) -> String {
        match self {
            Self::Pattern(format) => time.format(format).to_string(),
            #[cfg(target_os = "macos")]
            Self::Host(style) => style.format(time),
        }
    }
}

/// The text element of the clock window.
pub struct ClockLabel {
    formatter: TimeFormatter,
    source: Box<dyn TimeSource>,
    text: String,
}

impl ClockLabel {
    /// Builds the label and renders the current time right away.
    pub fn new(formatter: TimeFormatter, source: Box<dyn TimeSource>) -> Self {
        let mut label = Self {
            formatter,
            source,
            text: String::new(),
        };
        label.refresh();
        label
    }

    pub fn from_config(config: &ClockConfig) -> Self {
        Self::new(
            TimeFormatter::host(&config.fallback_time_format),
            Box::new(LocalClock),
        )
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Re-renders the time string. Returns `true` when the text changed.
    pub fn refresh(&mut self) -> bool {
        let text = self.formatter.format(self.source.now());
        if text == self.text {
            return false;
        }
        debug!(%text, "clock text changed");
        self.text = text;
        true
    }

    /// Paints the text centred in the ui's rect, over a halo standing in for
    /// a blurred drop shadow.
    pub fn paint(&self, ui: &mut egui::Ui, config: &ClockConfig) {
        let center = ui.max_rect().center();
        let painter = ui.painter();
        let font = config.font();

        if config.shadow_color.a() > 0 {
            let shadow = config.shadow_color.gamma_multiply(0.5);
            for offset in halo_offsets(config.shadow_blur) {
                painter.text(
                    center + config.shadow_offset + offset,
                    Align2::CENTER_CENTER,
                    &self.text,
                    font.clone(),
                    shadow,
                );
            }
        }

        painter.text(
            center,
            Align2::CENTER_CENTER,
            &self.text,
            font,
            config.text_color,
        );
    }
}

/// Offsets of the eight neighbours at distance `blur`, or the origin alone for
/// an unblurred shadow.
fn halo_offsets(blur: f32) -> Vec<Vec2> {
    if blur <= 0.0 {
        return vec![Vec2::ZERO];
    }
    let mut offsets = Vec::with_capacity(8);
    for dx in [-blur, 0.0, blur] {
        for dy in [-blur, 0.0, blur] {
            if dx != 0.0 || dy != 0.0 {
                offsets.push(Vec2::new(dx, dy));
            }
        }
    }
    offsets
}
