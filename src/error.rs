use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClockError {
    /// The native event loop could not be started or exited with an error.
    ///
    /// Holds the rendered message: `eframe::Error` carries raw window handles
    /// and is neither `Send` nor `Sync`.
    #[error("event loop failed: {0}")]
    EventLoop(String),
}

/// Failures while applying OS specific window behaviour.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("no native window handle available: {0}")]
    Handle(String),
    #[error("native window is not an AppKit window")]
    NotAppKit,
    #[error("view is not attached to a window")]
    Detached,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync + 'static>() {}

    #[test]
    fn errors_cross_threads() {
        assert_send_sync::<ClockError>();
        assert_send_sync::<PlatformError>();
    }

    #[test]
    fn converts_into_anyhow() {
        let err: anyhow::Error = ClockError::EventLoop(String::from("no display")).into();
        assert_eq!(err.to_string(), "event loop failed: no display");
    }
}
