//! Slide navigation engine implementation

use super::DeckContext;
use std::sync::Arc;
use parking_lot::RwLock;

/// Navigation state stored internally
#[derive(Debug, Clone)]
struct NavigationState {
    current: usize,
    slide_count: usize,
}

/// Owner of the current-slide index.
///
/// All components that move the deck go through [`SlideNavigator::set_current`];
/// none of them hold index state of their own. The slide count is fixed for the
/// navigator's lifetime, and the index is kept inside `0..slide_count` whenever
/// the deck is non-empty.
pub struct SlideNavigator {
    state: Arc<RwLock<NavigationState>>,
}

impl SlideNavigator {
    /// Create a navigator for a deck of `slide_count` slides, starting at slide 0
    pub fn new(slide_count: usize) -> Self {
        let state = NavigationState {
            current: 0,
            slide_count,
        };

        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    /// Index of the currently active slide
    pub fn current(&self) -> usize {
        self.state.read().current
    }

    /// Total number of slides in the deck
    pub fn slide_count(&self) -> usize {
        self.state.read().slide_count
    }

    /// Set the current slide index.
    ///
    /// This is the only mutation channel. Out-of-range indices are clamped to
    /// the last valid slide; on an empty deck the index stays 0. When several
    /// callers write within the same frame, the last write wins.
    pub fn set_current(&self, index: usize) {
        let mut state = self.state.write();
        let clamped = index.min(state.slide_count.saturating_sub(1));
        if clamped != state.current {
            tracing::debug!("Current slide {} -> {}", state.current, clamped);
        }
        state.current = clamped;
    }

    /// Get a snapshot of the current navigation state
    pub fn context(&self) -> DeckContext {
        let state = self.state.read();
        DeckContext {
            current: state.current,
            slide_count: state.slide_count,
        }
    }
}
