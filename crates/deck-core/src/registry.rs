//! Ordered slide handles and their recorded layout geometry

use egui::{Id, Rect};

/// Stable reference to one slide of the deck.
///
/// Handles are created by the deck owner, one per slide; their position in the
/// [`SlideRegistry`] defines slide order. A handle carries no geometry of its
/// own; the registry records the most recent layout rect against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideHandle {
    id: Id,
}

impl SlideHandle {
    /// Create a handle from an id source, e.g. the slide's position in the deck
    pub fn new(source: impl std::hash::Hash) -> Self {
        Self { id: Id::new(source) }
    }

    /// The underlying egui id
    pub fn id(&self) -> Id {
        self.id
    }
}

/// One registry slot: a handle plus its last recorded layout rect
#[derive(Debug, Clone, Copy)]
struct SlideEntry {
    handle: SlideHandle,
    rect: Option<Rect>,
}

/// Deck-owned, ordered sequence of slide handles.
///
/// The owner creates the registry and records layout rects after rendering
/// each slide; navigation components only read it. A slot whose rect is `None`
/// belongs to a slide that has not been rendered yet.
#[derive(Debug, Clone, Default)]
pub struct SlideRegistry {
    entries: Vec<SlideEntry>,
}

impl SlideRegistry {
    /// Create a registry from an explicit ordered handle sequence
    pub fn new(handles: Vec<SlideHandle>) -> Self {
        let entries = handles
            .into_iter()
            .map(|handle| SlideEntry { handle, rect: None })
            .collect();

        Self { entries }
    }

    /// Create a registry with `slide_count` sequentially-derived handles
    pub fn with_slide_count(slide_count: usize) -> Self {
        Self::new((0..slide_count).map(|i| SlideHandle::new(("slide", i))).collect())
    }

    /// Number of slides in the deck
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the deck has no slides
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Handle at `index`, if in range
    pub fn handle(&self, index: usize) -> Option<SlideHandle> {
        self.entries.get(index).map(|e| e.handle)
    }

    /// Iterate handles in slide order
    pub fn handles(&self) -> impl Iterator<Item = SlideHandle> + '_ {
        self.entries.iter().map(|e| e.handle)
    }

    /// Iterate `(handle, recorded rect)` pairs in slide order
    pub fn iter(&self) -> impl Iterator<Item = (SlideHandle, Option<Rect>)> + '_ {
        self.entries.iter().map(|e| (e.handle, e.rect))
    }

    /// Position of `handle` in the slide order (first match), if present
    pub fn position_of(&self, handle: SlideHandle) -> Option<usize> {
        self.entries.iter().position(|e| e.handle == handle)
    }

    /// Last recorded rect for the slide at `index`; `None` until it renders
    pub fn rect_of(&self, index: usize) -> Option<Rect> {
        self.entries.get(index).and_then(|e| e.rect)
    }

    /// Last recorded rect for `handle`, if present and rendered
    pub fn rect_for(&self, handle: SlideHandle) -> Option<Rect> {
        self.position_of(handle).and_then(|index| self.rect_of(index))
    }

    /// Record the layout rect produced for `handle` this frame.
    ///
    /// Called by the deck owner after rendering a slide. Handles that are not
    /// in the registry are ignored.
    pub fn record_rect(&mut self, handle: SlideHandle, rect: Rect) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.handle == handle) {
            entry.rect = Some(rect);
        }
    }

    /// Drop all recorded rects, e.g. when the surrounding layout changes
    pub fn clear_rects(&mut self) {
        for entry in &mut self.entries {
            entry.rect = None;
        }
    }
}
