//! Main application entry point

use anyhow::Result;
use eframe::egui::{self, Align, Context};
use tracing::info;

use deck_core::{SlideNavigator, SlideRegistry};
use deck_ui::{KeyboardNav, ProgressBar, SlideContainer, SlideObserver, SnapAlign, Theme};

mod sample_deck;

use sample_deck::Slide;

/// Main application state
struct DeckApp {
    /// Current-slide index, shared with every component that can move it
    navigator: SlideNavigator,

    /// Ordered slide handles and their layout rects
    registry: SlideRegistry,

    /// Arrow-key handling
    keyboard: KeyboardNav,

    /// Detects the slide the reader scrolled to
    observer: SlideObserver,

    /// Fixture content
    slides: Vec<Slide>,

    /// Scroll offset at the end of the previous frame
    last_scroll_offset: f32,

    /// Offset the view is easing toward while settling on a slide edge
    settle_target: Option<f32>,
}

impl DeckApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        deck_ui::apply_theme(&cc.egui_ctx, &Theme::default());

        let slides = sample_deck::sample_deck();
        info!("Loaded sample deck with {} slides", slides.len());

        Self {
            navigator: SlideNavigator::new(slides.len()),
            registry: SlideRegistry::with_slide_count(slides.len()),
            keyboard: KeyboardNav::new(),
            observer: SlideObserver::new(),
            slides,
            last_scroll_offset: 0.0,
            settle_target: None,
        }
    }

    fn show_slide_content(ui: &mut egui::Ui, slide: &Slide) {
        ui.add_space(24.0);
        ui.heading(egui::RichText::new(slide.title).size(44.0).strong());
        ui.add_space(24.0);

        for bullet in slide.bullets {
            ui.label(egui::RichText::new(format!("•  {}", bullet)).size(20.0));
            ui.add_space(8.0);
        }
    }

    /// Scroll offset that would rest the nearest slide on its snap edge.
    /// `None` when the view is already aligned.
    fn snap_target(
        offset: f32,
        viewport: egui::Rect,
        max_offset: f32,
        slides: &[(egui::Rect, SnapAlign)],
    ) -> Option<f32> {
        let mut best: Option<f32> = None;

        for (rect, snap) in slides {
            let candidate = match snap {
                SnapAlign::Start => offset + rect.top() - viewport.top(),
                SnapAlign::Center => offset + rect.center().y - viewport.center().y,
                SnapAlign::End => offset + rect.bottom() - viewport.bottom(),
            };
            let candidate = candidate.clamp(0.0, max_offset);

            let closer = match best {
                Some(current) => (candidate - offset).abs() < (current - offset).abs(),
                None => true,
            };
            if closer {
                best = Some(candidate);
            }
        }

        best.filter(|target| (target - offset).abs() > 0.5)
    }

    /// Ease the scroll position onto the nearest slide edge once the reader
    /// lets go, the way a snapping scroll container comes to rest.
    fn settle_scroll(
        &mut self,
        ctx: &Context,
        output: &egui::scroll_area::ScrollAreaOutput<()>,
        slides: &[(egui::Rect, SnapAlign)],
        jumped: bool,
    ) {
        let offset = output.state.offset.y;
        let max_offset = (output.content_size.y - output.inner_rect.height()).max(0.0);
        let scrolling = ctx.input(|i| i.scroll_delta.y != 0.0 || i.pointer.any_down());
        let moving = (offset - self.last_scroll_offset).abs() > 0.5;

        if scrolling || jumped {
            self.settle_target = None;
        } else if !moving && self.settle_target.is_none() {
            self.settle_target = Self::snap_target(offset, output.inner_rect, max_offset, slides);
        }

        if let Some(target) = self.settle_target {
            let diff = target - offset;
            let new_offset = if diff.abs() < 0.5 {
                self.settle_target = None;
                target
            } else {
                // Move 15% of the remaining distance each frame
                ctx.request_repaint();
                offset + diff * 0.15
            };

            let mut state = output.state;
            state.offset.y = new_offset;
            state.store(ctx, output.id);
            self.last_scroll_offset = new_offset;
        } else {
            self.last_scroll_offset = offset;
        }
    }
}

impl eframe::App for DeckApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.keyboard.handle_input(ctx, &self.navigator, &self.registry);

        let mut scroll_request = self.keyboard.take_scroll_request();
        let mut jumped = false;
        let mut slide_geometry: Vec<(egui::Rect, SnapAlign)> = Vec::with_capacity(self.slides.len());

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ctx.style().visuals.panel_fill))
            .show(ctx, |ui| {
                let output = egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.spacing_mut().item_spacing.y = 0.0;

                        for (i, slide) in self.slides.iter().enumerate() {
                            let handle = match self.registry.handle(i) {
                                Some(handle) => handle,
                                None => break,
                            };

                            let response = SlideContainer::new(handle)
                                .with_overrides(slide.overrides)
                                .show(ui, |ui| Self::show_slide_content(ui, slide));

                            self.registry.record_rect(response.handle, response.rect);
                            slide_geometry.push((response.rect, response.style.snap));

                            if scroll_request.map_or(false, |request| request.handle == response.handle) {
                                ui.scroll_to_rect(response.rect, Some(Align::TOP));
                                scroll_request = None;
                                jumped = true;
                            }
                        }
                    });

                // Observation starts once the first layout pass has recorded rects
                if !self.observer.is_active() {
                    self.observer.activate(&self.registry);
                }
                self.observer.observe(output.inner_rect, &self.registry, &self.navigator);

                self.settle_scroll(ctx, &output, &slide_geometry, jumped);
            });

        // Progress bar pinned over the top edge of the window
        egui::Area::new("deck_progress")
            .order(egui::Order::Foreground)
            .fixed_pos(egui::pos2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.set_width(ctx.screen_rect().width());
                ProgressBar::new(self.navigator.current(), self.navigator.slide_count()).ui(ui);
            });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Deckview");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Deckview",
        options,
        Box::new(|cc| Box::new(DeckApp::new(cc))),
    ).map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
