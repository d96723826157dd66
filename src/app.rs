use crate::config;
use crate::field::StarField;
use crate::pattern::Extent;
use crate::types::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

/// Top-level application state.
pub struct App {
    pub config: FieldConfig,
    pub extent: Extent,
    pub field: StarField,
    pub dialog: Option<DialogKind>,
    pub should_quit: bool,
    pub tick: u64,
    /// Brief status message shown in footer (e.g. "Rescattered"), auto-clears.
    pub flash_message: Option<String>,
    pub flash_until: u64,
    started: Instant,
    paused_at: Option<Instant>,
    paused_total: Duration,
    rng: StdRng,
}

impl App {
    pub fn new(extent: Extent) -> Self {
        let config = config::load_config();
        let mut rng = StdRng::from_entropy();
        let field = StarField::new(&config, extent, &mut rng);
        let mut app = Self {
            config,
            extent,
            field,
            dialog: None,
            should_quit: false,
            tick: 0,
            flash_message: None,
            flash_until: 0,
            started: Instant::now(),
            paused_at: None,
            paused_total: Duration::ZERO,
            rng,
        };
        if app.field.is_empty() {
            app.flash("No layers could be built; check the config file");
        }
        app
    }

    /// Animation time: wall-clock elapsed minus time spent paused. Every
    /// layer samples its loop against this one clock.
    pub fn animation_elapsed(&self) -> Duration {
        let end = self.paused_at.unwrap_or_else(Instant::now);
        end.duration_since(self.started)
            .saturating_sub(self.paused_total)
    }

    pub fn is_paused(&self) -> bool {
        self.paused_at.is_some()
    }

    pub fn toggle_pause(&mut self) {
        match self.paused_at.take() {
            Some(at) => {
                self.paused_total += at.elapsed();
                self.flash("Resumed");
            }
            None => {
                self.paused_at = Some(Instant::now());
                self.flash("Paused");
            }
        }
    }

    /// Drop every layer and mount fresh ones with newly scattered patterns.
    /// Patterns are fixed for a layer's lifetime; this ends those lifetimes.
    pub fn rescatter(&mut self) {
        self.field = StarField::new(&self.config, self.extent, &mut self.rng);
        self.flash("Rescattered");
    }

    /// Terminal resized: remount the field over the new extent.
    pub fn resize(&mut self, extent: Extent) {
        self.extent = extent;
        self.field = StarField::new(&self.config, self.extent, &mut self.rng);
    }

    pub fn flash(&mut self, msg: &str) {
        self.flash_message = Some(msg.to_string());
        self.flash_until = self.tick + 60; // ~2s at 30fps
    }
}
