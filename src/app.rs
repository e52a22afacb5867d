use eframe::egui::{self, Color32, Pos2, ViewportCommand, Visuals};
use tracing::{info, warn};

use crate::clock::ClockLabel;
use crate::config::ClockConfig;
use crate::error::ClockError;
use crate::platform;
use crate::position::{anchored_position, Size};
use crate::screen::ScreenObserver;
use crate::ticker::Ticker;

pub struct ClockApp {
    config: ClockConfig,
    label: ClockLabel,
    screen: ScreenObserver,
    platform_applied: bool,
    _ticker: Ticker,
}

impl ClockApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: ClockConfig) -> Self {
        let mut visuals = Visuals::dark();
        visuals.panel_fill = Color32::TRANSPARENT;
        visuals.window_fill = Color32::TRANSPARENT;
        cc.egui_ctx.set_visuals(visuals);

        let ticker = Ticker::spawn(cc.egui_ctx.clone(), config.refresh_interval);

        Self {
            label: ClockLabel::from_config(&config),
            screen: ScreenObserver::new(),
            platform_applied: false,
            _ticker: ticker,
            config,
        }
    }
}

/// Command moving the window back to the corner whenever it is not there.
///
/// `current` is the window's outer top-left position, when the host reports it.
fn reposition(
    screen: &mut ScreenObserver,
    window: Size,
    monitor: Option<Size>,
    current: Option<Pos2>,
) -> Option<ViewportCommand> {
    let screen = screen.observe(monitor)?;
    let target = anchored_position(window, screen);
    if current.is_some_and(|pos| pos.distance(target) < 0.5) {
        return None;
    }
    info!(x = target.x, y = target.y, "moving clock to the top-right corner");
    Some(ViewportCommand::OuterPosition(target))
}

impl eframe::App for ClockApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        if !self.platform_applied {
            self.platform_applied = true;
            if let Err(e) = platform::join_all_spaces(frame) {
                warn!("window will not follow across spaces: {e}");
            }
        }

        let (monitor, current) = ctx.input(|i| {
            let viewport = i.viewport();
            (
                viewport.monitor_size.map(Size::from),
                viewport.outer_rect.map(|r| r.min),
            )
        });
        if let Some(cmd) = reposition(&mut self.screen, self.config.window_size, monitor, current)
        {
            ctx.send_viewport_cmd(cmd);
        }

        self.label.refresh();

        let Self { config, label, .. } = self;
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(config.background))
            .show(ctx, |ui| label.paint(ui, config));

        ctx.request_repaint_after(config.refresh_interval);
    }

    fn clear_color(&self, _visuals: &Visuals) -> [f32; 4] {
        self.config.background.to_normalized_gamma_f32()
    }
}

/// Opens the clock window and blocks until the event loop exits.
pub fn run(config: ClockConfig) -> Result<(), ClockError> {
    let options = crate::window::native_options(&config);
    let title = config.title.clone();
    info!("starting {title}");

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Box::new(ClockApp::new(cc, config))),
    )
    .map_err(|e| ClockError::EventLoop(e.to_string()))
}
