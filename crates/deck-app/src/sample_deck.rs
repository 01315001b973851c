//! Built-in sample deck shown by the demo binary

use deck_ui::SlideOverrides;
use egui::Color32;

/// One slide of fixture content
pub struct Slide {
    pub title: &'static str,
    pub bullets: &'static [&'static str],
    /// Extra styling for this slide, if any
    pub overrides: SlideOverrides,
}

impl Slide {
    fn new(title: &'static str, bullets: &'static [&'static str]) -> Self {
        Self {
            title,
            bullets,
            overrides: SlideOverrides::default(),
        }
    }
}

/// The deck rendered when the viewer starts
pub fn sample_deck() -> Vec<Slide> {
    vec![
        Slide {
            title: "Deckview",
            bullets: &[
                "A scroll-driven slide viewer",
                "Use the arrow keys or the mouse wheel to move around",
            ],
            overrides: SlideOverrides {
                fill: Some(Color32::from_rgb(24, 28, 38)),
                ..Default::default()
            },
        },
        Slide::new(
            "Navigating",
            &[
                "Down and Right advance one slide",
                "Up and Left go back",
                "The deck stops cleanly at both ends",
            ],
        ),
        Slide::new(
            "Scrolling",
            &[
                "Free scrolling works too",
                "Whichever slide fills half the window becomes the current one",
                "When you let go, the view settles on the nearest slide edge",
            ],
        ),
        Slide::new(
            "Progress",
            &[
                "The bar along the top edge tracks your position in the deck",
                "It glides to each new position instead of jumping",
            ],
        ),
        Slide::new(
            "Styling",
            &[
                "Slides share one base layout: full viewport, centered content",
                "Individual slides can override the fill, width, padding, or snap edge",
            ],
        ),
    ]
}
