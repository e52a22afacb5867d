#![allow(unsafe_code)]

use chrono::{DateTime, Local};
use objc2::rc::Id;
use objc2::MainThreadMarker;
use objc2_app_kit::{NSScreen, NSView, NSWindowCollectionBehavior};
use objc2_foundation::{NSDate, NSDateFormatter, NSDateFormatterStyle};
use raw_window_handle::{HasWindowHandle, RawWindowHandle};
use winit::event_loop::EventLoopBuilder;
use winit::platform::macos::{ActivationPolicy, EventLoopBuilderExtMacOS};

use crate::error::PlatformError;
use crate::position::Size;

fn accessory<T: 'static>(builder: &mut EventLoopBuilder<T>) {
    builder.with_activation_policy(ActivationPolicy::Accessory);
}

pub fn configure_event_loop(options: &mut eframe::NativeOptions) {
    options.event_loop_builder = Some(Box::new(accessory));
}

/// Frame size of the main screen. `None` off the main thread or headless.
pub fn main_screen_size() -> Option<Size> {
    let mtm = MainThreadMarker::new()?;
    let screen = unsafe { NSScreen::mainScreen(mtm) }?;
    let frame = unsafe { screen.frame() };
    Some(Size::new(frame.size.width as f32, frame.size.height as f32))
}

/// The user's short time style, as set in System Settings.
#[derive(Debug)]
pub struct ShortTimeStyle {
    formatter: Id<NSDateFormatter>,
}

impl ShortTimeStyle {
    pub fn new() -> Self {
        let formatter = unsafe { NSDateFormatter::new() };
        unsafe {
            formatter.setDateStyle(NSDateFormatterStyle::NSDateFormatterNoStyle);
            formatter.setTimeStyle(NSDateFormatterStyle::NSDateFormatterShortStyle);
        }
        Self { formatter }
    }

    pub fn format(&self, time: DateTime<Local>) -> String {
        let secs = time.timestamp() as f64 + f64::from(time.timestamp_subsec_nanos()) / 1e9;
        let date = unsafe { NSDate::dateWithTimeIntervalSince1970(secs) };
        unsafe { self.formatter.stringFromDate(&date) }.to_string()
    }
}

pub fn join_all_spaces(frame: &eframe::Frame) -> Result<(), PlatformError> {
    let handle = frame
        .window_handle()
        .map_err(|e| PlatformError::Handle(e.to_string()))?;
    let RawWindowHandle::AppKit(appkit) = handle.as_raw() else {
        return Err(PlatformError::NotAppKit);
    };

    // SAFETY: an AppKit handle points at the NSView eframe renders into, which
    // outlives `frame`.
    let view: &NSView = unsafe { appkit.ns_view.cast::<NSView>().as_ref() };
    let window = unsafe { view.window() }.ok_or(PlatformError::Detached)?;
    unsafe {
        window.setCollectionBehavior(
            NSWindowCollectionBehavior::NSWindowCollectionBehaviorCanJoinAllSpaces,
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn short_style_shows_minutes_without_seconds() {
        let time = Local.with_ymd_and_hms(2024, 1, 2, 13, 5, 42).unwrap();
        let text = ShortTimeStyle::new().format(time);
        assert!(text.contains("05"), "{text}");
        assert!(!text.contains("42"), "{text}");
    }
}
