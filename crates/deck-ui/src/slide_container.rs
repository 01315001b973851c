//! Full-viewport wrapper for one slide's content

use deck_core::SlideHandle;
use egui::{pos2, Align, Color32, Layout, Margin, Rect, Rounding, Sense, Ui, Vec2};
use serde::{Serialize, Deserialize};

/// Edge of the slide the host settles the scroll position on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SnapAlign {
    /// Slide's top edge meets the top of the viewport
    Start,
    /// Slide's center meets the center of the viewport
    Center,
    /// Slide's bottom edge meets the bottom of the viewport
    End,
}

/// Resolved layout for one slide
#[derive(Debug, Clone, PartialEq)]
pub struct SlideStyle {
    /// Background fill; `None` leaves the surface untouched
    pub fill: Option<Color32>,

    /// Upper bound on the content box width
    pub content_max_width: f32,

    /// Padding between the slide edge and the content box
    pub padding: Margin,

    /// Edge the host snaps this slide to
    pub snap: SnapAlign,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            fill: None,
            content_max_width: 1280.0,
            padding: Margin::symmetric(32.0, 64.0),
            snap: SnapAlign::Start,
        }
    }
}

impl SlideStyle {
    /// Layer `overrides` over this style; set fields win
    pub fn merged(mut self, overrides: &SlideOverrides) -> Self {
        if let Some(fill) = overrides.fill {
            self.fill = Some(fill);
        }
        if let Some(width) = overrides.content_max_width {
            self.content_max_width = width;
        }
        if let Some(padding) = overrides.padding {
            self.padding = padding;
        }
        if let Some(snap) = overrides.snap {
            self.snap = snap;
        }
        self
    }
}

/// Optional per-slide styling, layered over [`SlideStyle::default`]; set
/// fields replace the base values, unset fields leave them alone
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideOverrides {
    pub fill: Option<Color32>,
    pub content_max_width: Option<f32>,
    pub padding: Option<Margin>,
    pub snap: Option<SnapAlign>,
}

/// Full-viewport wrapper around one slide's content.
///
/// Fills one viewport height (more if the content runs over), lays the
/// content out in a centered, width-capped box, and reports the region it
/// occupied so the deck owner can record it against the handle. The widget
/// itself holds no state; the content height used for vertical centering is
/// remembered in egui's id memory, measured a frame behind.
pub struct SlideContainer {
    handle: SlideHandle,
    overrides: SlideOverrides,
}

/// What [`SlideContainer::show`] produced
pub struct SlideResponse<R> {
    /// Handle the container was created with, handed back for registration
    pub handle: SlideHandle,

    /// Region the slide occupied, in screen coordinates
    pub rect: Rect,

    /// Style the slide was laid out with
    pub style: SlideStyle,

    /// Whatever the content closure returned
    pub inner: R,
}

impl SlideContainer {
    /// Wrap the slide identified by `handle`
    pub fn new(handle: SlideHandle) -> Self {
        Self {
            handle,
            overrides: SlideOverrides::default(),
        }
    }

    /// Layer extra styling over the base style
    pub fn with_overrides(mut self, overrides: SlideOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Effective style after merging the overrides over the base
    pub fn style(&self) -> SlideStyle {
        SlideStyle::default().merged(&self.overrides)
    }

    /// Render the slide and return its geometry
    pub fn show<R>(self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui) -> R) -> SlideResponse<R> {
        let style = self.style();

        // One viewport height per slide, like a full-screen page
        let viewport_height = ui.ctx().screen_rect().height();
        let slide_width = ui.available_width();
        let top_left = ui.cursor().min;
        let slide_rect = Rect::from_min_size(top_left, Vec2::new(slide_width, viewport_height));

        if let Some(fill) = style.fill {
            ui.painter().rect_filled(slide_rect, Rounding::ZERO, fill);
        }

        // Width-capped content box, centered in the slide. The content
        // height is only known after rendering, so it is measured and kept
        // in id memory; a slide's first frame lays out top-aligned and the
        // next one is centered.
        let content_width = (slide_width - style.padding.left - style.padding.right)
            .min(style.content_max_width)
            .max(0.0);
        let content_height = (viewport_height - style.padding.top - style.padding.bottom).max(0.0);

        let height_id = self.handle.id().with("measured_height");
        let measured: Option<f32> = ui.ctx().data_mut(|d| d.get_temp(height_id));
        let top_gap = measured
            .map(|h| ((content_height - h) * 0.5).max(0.0))
            .unwrap_or(0.0);
        let content_rect = Rect::from_min_size(
            pos2(
                slide_rect.center().x - content_width * 0.5,
                slide_rect.top() + style.padding.top + top_gap,
            ),
            Vec2::new(content_width, content_height - top_gap),
        );

        let mut content_ui = ui.child_ui(content_rect, Layout::top_down(Align::Min));
        let inner = add_contents(&mut content_ui);
        ui.ctx()
            .data_mut(|d| d.insert_temp(height_id, content_ui.min_rect().height().max(0.0)));

        // Claim at least one full viewport height from the parent; content
        // that runs past the box extends the slide
        let content_bottom = content_ui.min_rect().bottom() + style.padding.bottom;
        let bottom = slide_rect.bottom().max(content_bottom);
        let response = ui.allocate_rect(
            Rect::from_min_max(top_left, pos2(slide_rect.right(), bottom)),
            Sense::hover(),
        );

        SlideResponse {
            handle: self.handle,
            rect: response.rect,
            style,
            inner,
        }
    }
}
