//! Browser state.

use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Instant;

use image::DynamicImage;
use ratatui::widgets::ListState;
use ratatui_image::picker::{Picker, ProtocolType};
use ratatui_image::protocol::StatefulProtocol;
use tracing::{debug, warn};

use polyiamond::{render_pattern_svg, RenderStyle};
use polyiamond_core::{GenerationStats, Generator, LeafPolicy, Pattern};

use crate::cli::raster;

/// Pixels per lattice unit in the preview.
const PREVIEW_SCALE: f64 = 80.0;

/// Result of one background enumeration.
struct Batch {
    count: usize,
    patterns: Vec<Pattern>,
    stats: GenerationStats,
    gen_time_ms: f64,
}

/// Application state for the browser.
pub struct App {
    /// Triangle count currently shown (or being generated)
    pub count: usize,
    pub max_count: usize,
    pub policy: LeafPolicy,
    /// Shapes of the last finished enumeration
    pub patterns: Vec<Pattern>,
    pub list_state: ListState,
    pub stats: GenerationStats,
    pub gen_time_ms: f64,
    pub style: RenderStyle,
    pub should_quit: bool,
    /// Is an enumeration running?
    pub is_loading: bool,
    /// Count to enumerate once the running search completes
    pending_count: Option<usize>,
    result_rx: Receiver<Batch>,
    result_tx: Sender<Batch>,
    pub spinner_frame: usize,
    picker: Picker,
    pub image_state: Option<Box<dyn StatefulProtocol>>,
    needs_image_update: bool,
    /// Last rendering error, shown in the preview title
    pub status: Option<String>,
}

impl App {
    pub fn new(count: usize, max_count: usize, policy: LeafPolicy, style: RenderStyle) -> Self {
        let (result_tx, result_rx) = mpsc::channel();

        // Image picker, forced to Sixel
        let mut picker = Picker::from_termios().unwrap_or_else(|_| Picker::new((8, 16)));
        picker.protocol_type = ProtocolType::Sixel;

        let mut app = App {
            count: count.clamp(1, max_count),
            max_count,
            policy,
            patterns: Vec::new(),
            list_state: ListState::default(),
            stats: GenerationStats::default(),
            gen_time_ms: 0.0,
            style: RenderStyle {
                scale: PREVIEW_SCALE,
                ..style
            },
            should_quit: false,
            is_loading: false,
            pending_count: None,
            result_rx,
            result_tx,
            spinner_frame: 0,
            picker,
            image_state: None,
            needs_image_update: false,
            status: None,
        };

        app.regenerate();
        app
    }

    pub fn selected(&self) -> Option<&Pattern> {
        self.list_state.selected().and_then(|i| self.patterns.get(i))
    }

    /// Start enumerating `self.count` unless a search is already running.
    fn regenerate(&mut self) {
        if self.is_loading {
            self.pending_count = Some(self.count);
            return;
        }

        self.pending_count = None;
        self.is_loading = true;

        let count = self.count;
        let policy = self.policy;
        let tx = self.result_tx.clone();

        thread::spawn(move || {
            let start = Instant::now();
            let Ok(generator) = Generator::new(count) else {
                return;
            };
            let generation = generator.with_policy(policy).run();
            let _ = tx.send(Batch {
                count,
                patterns: generation.patterns,
                stats: generation.stats,
                gen_time_ms: start.elapsed().as_secs_f64() * 1000.0,
            });
        });
    }

    /// Pick up a finished enumeration, if any.
    pub fn check_result(&mut self) {
        let mut latest: Option<Batch> = None;
        while let Ok(batch) = self.result_rx.try_recv() {
            latest = Some(batch);
        }

        if let Some(batch) = latest {
            debug!(count = batch.count, shapes = batch.patterns.len(), "batch received");
            self.is_loading = false;

            if let Some(count) = self.pending_count {
                if count != batch.count {
                    self.regenerate();
                    return;
                }
                self.pending_count = None;
            }

            self.patterns = batch.patterns;
            self.stats = batch.stats;
            self.gen_time_ms = batch.gen_time_ms;
            self.list_state.select(if self.patterns.is_empty() { None } else { Some(0) });
            self.needs_image_update = true;
        }
    }

    pub fn update_image(&mut self) {
        if !self.needs_image_update || self.is_loading {
            return;
        }
        self.needs_image_update = false;

        let Some(pattern) = self.selected() else {
            self.image_state = None;
            return;
        };

        let rendered = render_pattern_svg(pattern, &self.style)
            .map_err(anyhow::Error::from)
            .and_then(|svg| raster::svg_to_image(&svg));

        match rendered {
            Ok(image) => {
                let image = DynamicImage::ImageRgba8(image);
                self.image_state = Some(self.picker.new_resize_protocol(image));
                self.status = None;
            }
            Err(e) => {
                warn!(error = %e, "preview failed");
                self.image_state = None;
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn next_pattern(&mut self) {
        if self.patterns.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.patterns.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.needs_image_update = true;
    }

    pub fn prev_pattern(&mut self) {
        if self.patterns.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.patterns.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
        self.needs_image_update = true;
    }

    /// Move the triangle count by `delta`, staying in `1..=max_count`.
    pub fn change_count(&mut self, delta: i64) {
        let next = (self.count as i64 + delta).clamp(1, self.max_count as i64) as usize;
        if next != self.count {
            self.count = next;
            self.regenerate();
        }
    }

    pub fn toggle_grid(&mut self) {
        self.style.show_grid = !self.style.show_grid;
        self.needs_image_update = true;
    }

    pub fn toggle_axes(&mut self) {
        self.style.show_axes = !self.style.show_axes;
        self.needs_image_update = true;
    }
}
