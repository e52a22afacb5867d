use tracing::info;

use crate::position::Size;

/// Tracks the primary screen size across frames.
#[derive(Debug, Default)]
pub struct ScreenObserver {
    last: Option<Size>,
}

impl ScreenObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds the size reported for the current frame and returns the size to
    /// lay out against.
    ///
    /// A `None` report keeps the last known size; before any report there is
    /// nothing to lay out against.
    pub fn observe(&mut self, size: Option<Size>) -> Option<Size> {
        if let Some(size) = size {
            if self.last != Some(size) {
                info!(width = size.width, height = size.height, "screen parameters changed");
                self.last = Some(size);
            }
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_known_before_the_first_report() {
        let mut observer = ScreenObserver::new();
        assert_eq!(observer.observe(None), None);
    }

    #[test]
    fn reports_the_current_size() {
        let mut observer = ScreenObserver::new();
        let size = Size::new(1440.0, 900.0);
        assert_eq!(observer.observe(Some(size)), Some(size));
        assert_eq!(observer.observe(Some(size)), Some(size));
    }

    #[test]
    fn resolution_switch_is_picked_up() {
        let mut observer = ScreenObserver::new();
        observer.observe(Some(Size::new(1440.0, 900.0)));
        let external = Size::new(2560.0, 1440.0);
        assert_eq!(observer.observe(Some(external)), Some(external));
    }

    #[test]
    fn missing_size_keeps_last() {
        let mut observer = ScreenObserver::new();
        let size = Size::new(800.0, 600.0);
        observer.observe(Some(size));
        assert_eq!(observer.observe(None), Some(size));
    }
}
