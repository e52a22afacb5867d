use std::time::Duration;

use eframe::egui;
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

/// Repeating timer on the tokio runtime. Stops when dropped.
pub struct Ticker {
    task: JoinHandle<()>,
}

impl Ticker {
    /// Requests a repaint of `ctx` every `interval`, starting immediately.
    pub fn spawn(ctx: egui::Context, interval: Duration) -> Self {
        Self::spawn_with(interval, move || ctx.request_repaint())
    }

    pub fn spawn_with<F>(interval: Duration, mut on_tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let task = tokio::task::spawn(async move {
            let mut interval = time::interval(interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                interval.tick().await;
                on_tick();
            }
        });
        Self { task }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_every_interval_until_dropped() {
        let ticks = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&ticks);
        let ticker = Ticker::spawn_with(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        time::sleep(Duration::from_millis(3500)).await;
        // t = 0, 1, 2, 3
        assert_eq!(ticks.load(Ordering::SeqCst), 4);

        drop(ticker);
        let stopped_at = ticks.load(Ordering::SeqCst);
        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(ticks.load(Ordering::SeqCst), stopped_at);
    }
}
