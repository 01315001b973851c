use serde::{Serialize, Deserialize};

mod engine;

pub use engine::SlideNavigator;

/// Snapshot of the deck's navigation state at one point in time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckContext {
    /// Index of the slide currently considered active
    pub current: usize,
    /// Total number of slides in the deck
    pub slide_count: usize,
}

impl DeckContext {
    /// True when the deck has no slides
    pub fn is_empty(&self) -> bool {
        self.slide_count == 0
    }

    /// True when `current` points at the last slide
    pub fn at_end(&self) -> bool {
        self.slide_count > 0 && self.current == self.slide_count - 1
    }

    /// True when `current` points at the first slide
    pub fn at_start(&self) -> bool {
        self.current == 0
    }
}
