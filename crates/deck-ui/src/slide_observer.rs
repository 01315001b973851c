//! Viewport observation: which slide is the reader actually looking at

use deck_core::{visible_fraction, SlideHandle, SlideNavigator, SlideRegistry, VISIBILITY_THRESHOLD};
use egui::Rect;

/// Tracking state for one observed slide
#[derive(Debug, Clone, Copy)]
struct Observation {
    handle: SlideHandle,
    intersecting: bool,
}

/// Watches the scroll viewport and reports the slide that has come into view.
///
/// A slide qualifies once at least half of it lies inside the viewport. Only
/// the transition into view is reported; a slide that stays visible across
/// frames is not re-reported until it leaves and enters again. Reports go
/// through [`SlideNavigator::set_current`]; when several slides cross the
/// threshold in one frame, the last one in deck order wins.
pub struct SlideObserver {
    /// Full handle sequence at activation; observing restarts when it changes
    sequence: Vec<SlideHandle>,
    /// Slides actually watched: those that had a rect at activation
    observations: Vec<Observation>,
    active: bool,
}

impl Default for SlideObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl SlideObserver {
    /// Create an inactive observer; call [`SlideObserver::activate`] once the
    /// deck has rendered
    pub fn new() -> Self {
        Self {
            sequence: Vec::new(),
            observations: Vec::new(),
            active: false,
        }
    }

    /// Begin observing the registry's slides.
    ///
    /// Only slides with a recorded rect at this moment are watched. Slides
    /// that render later are not picked up until the deck's handle sequence
    /// changes or the observer is re-activated.
    pub fn activate(&mut self, registry: &SlideRegistry) {
        self.active = true;
        self.capture(registry);
    }

    /// Stop observing. Until the next activation no scroll movement changes
    /// the current slide.
    pub fn deactivate(&mut self) {
        self.active = false;
        self.sequence.clear();
        self.observations.clear();
        tracing::debug!("Slide observer deactivated");
    }

    /// Whether the observer is currently watching the deck
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Number of slides currently under observation
    pub fn observed_count(&self) -> usize {
        self.observations.len()
    }

    /// Scan the observed slides against `viewport` and report the newly
    /// visible one, if any. Call once per frame with the scroll viewport in
    /// screen coordinates.
    pub fn observe(
        &mut self,
        viewport: Rect,
        registry: &SlideRegistry,
        navigator: &SlideNavigator,
    ) {
        if !self.active {
            return;
        }

        // The handle sequence is this observer's dependency: when the deck is
        // rebuilt, drop the old observations and start over on the new one
        if !self.sequence.iter().copied().eq(registry.handles()) {
            self.capture(registry);
        }

        for obs in &mut self.observations {
            let rect = match registry.rect_for(obs.handle) {
                Some(rect) => rect,
                None => {
                    // Slide vanished from the layout; it may come back
                    obs.intersecting = false;
                    continue;
                }
            };

            let now = visible_fraction(rect, viewport) >= VISIBILITY_THRESHOLD;
            if now && !obs.intersecting {
                if let Some(index) = registry.position_of(obs.handle) {
                    navigator.set_current(index);
                }
            }
            obs.intersecting = now;
        }
    }

    fn capture(&mut self, registry: &SlideRegistry) {
        self.sequence = registry.handles().collect();
        self.observations = registry
            .iter()
            .filter(|(_, rect)| rect.is_some())
            .map(|(handle, _)| Observation {
                handle,
                intersecting: false,
            })
            .collect();
        tracing::debug!(
            "Observing {} of {} slides",
            self.observations.len(),
            self.sequence.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, Vec2};

    const SLIDE_HEIGHT: f32 = 600.0;

    /// Registry of `slides` stacked vertically, scrolled up by `offset` pixels
    fn registry_at_offset(slides: usize, offset: f32) -> SlideRegistry {
        let mut registry = SlideRegistry::with_slide_count(slides);
        record_at_offset(&mut registry, offset);
        registry
    }

    fn record_at_offset(registry: &mut SlideRegistry, offset: f32) {
        for i in 0..registry.len() {
            let handle = registry.handle(i).unwrap();
            let top = i as f32 * SLIDE_HEIGHT - offset;
            registry.record_rect(
                handle,
                Rect::from_min_size(pos2(0.0, top), Vec2::new(800.0, SLIDE_HEIGHT)),
            );
        }
    }

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(800.0, SLIDE_HEIGHT))
    }

    #[test]
    fn test_activation_skips_unrendered_slides() {
        let mut registry = SlideRegistry::with_slide_count(3);
        let first = registry.handle(0).unwrap();
        registry.record_rect(first, viewport());

        let mut observer = SlideObserver::new();
        observer.activate(&registry);

        assert!(observer.is_active());
        assert_eq!(observer.observed_count(), 1);
    }

    #[test]
    fn test_slide_scrolled_into_view_becomes_current() {
        let navigator = SlideNavigator::new(3);
        let mut registry = registry_at_offset(3, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 0);

        // Scroll down one full slide: slide 1 fills the viewport
        record_at_offset(&mut registry, 600.0);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 1);
    }

    #[test]
    fn test_half_visible_slide_qualifies() {
        let navigator = SlideNavigator::new(2);
        let mut registry = registry_at_offset(2, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        observer.observe(viewport(), &registry, &navigator);

        // Slide 1 exactly half in view: counts as current
        record_at_offset(&mut registry, 300.0);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 1);
    }

    #[test]
    fn test_below_threshold_does_not_report() {
        let navigator = SlideNavigator::new(2);
        let mut registry = registry_at_offset(2, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        observer.observe(viewport(), &registry, &navigator);

        // Slide 1 only a third visible: no report
        record_at_offset(&mut registry, 200.0);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 0);
    }

    #[test]
    fn test_reports_only_on_entering_view() {
        let navigator = SlideNavigator::new(3);
        let registry = registry_at_offset(3, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 0);

        // Someone else moves the index; slide 0 merely staying visible must
        // not snap it back
        navigator.set_current(2);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 2);
    }

    #[test]
    fn test_reenters_after_leaving() {
        let navigator = SlideNavigator::new(2);
        let mut registry = registry_at_offset(2, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        observer.observe(viewport(), &registry, &navigator);

        // Scroll to slide 1, then back
        record_at_offset(&mut registry, 600.0);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 1);

        record_at_offset(&mut registry, 0.0);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 0);
    }

    #[test]
    fn test_deactivated_observer_reports_nothing() {
        let navigator = SlideNavigator::new(3);
        let mut registry = registry_at_offset(3, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        observer.observe(viewport(), &registry, &navigator);
        observer.deactivate();
        assert_eq!(observer.observed_count(), 0);

        record_at_offset(&mut registry, 1200.0);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 0);
    }

    #[test]
    fn test_late_rendered_slide_stays_unobserved() {
        let navigator = SlideNavigator::new(2);
        let mut registry = SlideRegistry::with_slide_count(2);
        let first = registry.handle(0).unwrap();
        registry.record_rect(first, viewport());

        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        assert_eq!(observer.observed_count(), 1);

        // Slide 1 renders afterwards, filling the viewport; same handle
        // sequence, so it is not picked up
        let second = registry.handle(1).unwrap();
        registry.record_rect(second, viewport());
        registry.record_rect(first, Rect::from_min_size(pos2(0.0, -600.0), Vec2::new(800.0, 600.0)));
        observer.observe(viewport(), &registry, &navigator);

        assert_eq!(observer.observed_count(), 1);
        assert_eq!(navigator.current(), 0);
    }

    #[test]
    fn test_deck_rebuild_restarts_observation() {
        let navigator = SlideNavigator::new(3);
        let registry = registry_at_offset(2, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        assert_eq!(observer.observed_count(), 2);
        navigator.set_current(2);

        // A longer deck arrives: observation restarts on the new sequence,
        // and the slide filling the viewport is reported afresh
        let rebuilt = registry_at_offset(3, 0.0);
        observer.observe(viewport(), &rebuilt, &navigator);
        assert_eq!(observer.observed_count(), 3);
        assert_eq!(navigator.current(), 0);
    }

    #[test]
    fn test_missing_rects_skipped_and_rearmed() {
        let navigator = SlideNavigator::new(2);
        let mut registry = registry_at_offset(2, 0.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 0);

        // Rects vanish for a frame; an index set elsewhere must survive the
        // scan untouched and the slides stay under observation
        navigator.set_current(1);
        registry.clear_rects();
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 1);
        assert_eq!(observer.observed_count(), 2);

        // Rects return with slide 0 filling the viewport: reported again
        record_at_offset(&mut registry, 0.0);
        observer.observe(viewport(), &registry, &navigator);
        assert_eq!(navigator.current(), 0);
    }

    #[test]
    fn test_two_slides_entering_at_once_last_in_deck_order_wins() {
        let navigator = SlideNavigator::new(2);
        // Scrolled so both slides sit exactly half in view
        let registry = registry_at_offset(2, 300.0);
        let mut observer = SlideObserver::new();
        observer.activate(&registry);

        observer.observe(viewport(), &registry, &navigator);

        assert_eq!(navigator.current(), 1);
    }
}
