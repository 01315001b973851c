//! Arrow-key navigation between slides

use deck_core::{SlideHandle, SlideNavigator, SlideRegistry};
use egui::{Context, Key, Modifiers};

/// Request to bring one slide's start edge to the top of the viewport
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollRequest {
    /// Slide to scroll to
    pub handle: SlideHandle,
}

/// Keyboard navigation for the deck.
///
/// Call [`KeyboardNav::handle_input`] once per frame while the deck is on
/// screen. Down/Right move forward, Up/Left move backward; both directions
/// stop at the deck boundaries. Recognized presses are consumed so nothing
/// else in the application reacts to them.
pub struct KeyboardNav {
    enabled: bool,
    pending_scroll: Option<ScrollRequest>,
}

impl Default for KeyboardNav {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardNav {
    /// Create an enabled keyboard handler
    pub fn new() -> Self {
        Self {
            enabled: true,
            pending_scroll: None,
        }
    }

    /// Turn key handling on or off. While disabled, key events pass through
    /// untouched and the navigator is never written to.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether key handling is currently on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Process this frame's key presses.
    ///
    /// Moving writes the new index through the navigator and queues a scroll
    /// request for the target slide. A target that has no recorded rect yet
    /// gets no scroll request; the index change still happens.
    pub fn handle_input(
        &mut self,
        ctx: &Context,
        navigator: &SlideNavigator,
        registry: &SlideRegistry,
    ) {
        if !self.enabled {
            return;
        }

        // Consume both keys of a direction even if only one is needed, so a
        // press never leaks to other widgets
        let forward = ctx.input_mut(|input| {
            let down = input.consume_key(Modifiers::NONE, Key::ArrowDown);
            let right = input.consume_key(Modifiers::NONE, Key::ArrowRight);
            down || right
        });
        let backward = ctx.input_mut(|input| {
            let up = input.consume_key(Modifiers::NONE, Key::ArrowUp);
            let left = input.consume_key(Modifiers::NONE, Key::ArrowLeft);
            up || left
        });

        let current = navigator.current();
        let slide_count = navigator.slide_count();

        if forward && current + 1 < slide_count {
            self.move_to(current + 1, navigator, registry);
        }
        if backward && current > 0 {
            self.move_to(current - 1, navigator, registry);
        }
    }

    fn move_to(&mut self, index: usize, navigator: &SlideNavigator, registry: &SlideRegistry) {
        navigator.set_current(index);

        // Scroll only once the target slide has rendered
        if registry.rect_of(index).is_some() {
            if let Some(handle) = registry.handle(index) {
                self.pending_scroll = Some(ScrollRequest { handle });
            }
        }
    }

    /// Take the scroll request queued by the latest key press, if any. The
    /// deck owner fulfils it while laying out the slides.
    pub fn take_scroll_request(&mut self) -> Option<ScrollRequest> {
        self.pending_scroll.take()
    }
}
