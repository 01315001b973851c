//! Visibility math for deciding which slide is on screen

use egui::Rect;

/// Fraction of a slide that must be inside the viewport for the slide to count
/// as the current one
pub const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Fraction of `slide` that lies inside `viewport`, in `0.0..=1.0`.
///
/// The viewport is used as-is, with no margin expansion. Degenerate slide
/// rects (zero or negative area) report 0.0.
pub fn visible_fraction(slide: Rect, viewport: Rect) -> f32 {
    if !slide.is_positive() {
        return 0.0;
    }

    let overlap = slide.intersect(viewport);
    if !overlap.is_positive() {
        return 0.0;
    }

    overlap.area() / slide.area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn rect(top: f32, height: f32) -> Rect {
        Rect::from_min_max(pos2(0.0, top), pos2(100.0, top + height))
    }

    #[test]
    fn test_fully_visible() {
        let viewport = rect(0.0, 600.0);
        assert_eq!(visible_fraction(rect(0.0, 600.0), viewport), 1.0);
        assert_eq!(visible_fraction(rect(100.0, 200.0), viewport), 1.0);
    }

    #[test]
    fn test_half_visible_meets_threshold() {
        let viewport = rect(0.0, 600.0);
        let slide = rect(300.0, 600.0);
        let fraction = visible_fraction(slide, viewport);
        assert_eq!(fraction, 0.5);
        assert!(fraction >= VISIBILITY_THRESHOLD);
    }

    #[test]
    fn test_less_than_half_visible() {
        let viewport = rect(0.0, 600.0);
        let slide = rect(450.0, 600.0);
        let fraction = visible_fraction(slide, viewport);
        assert_eq!(fraction, 0.25);
        assert!(fraction < VISIBILITY_THRESHOLD);
    }

    #[test]
    fn test_outside_viewport() {
        let viewport = rect(0.0, 600.0);
        assert_eq!(visible_fraction(rect(600.0, 600.0), viewport), 0.0);
        assert_eq!(visible_fraction(rect(-600.0, 600.0), viewport), 0.0);
    }

    #[test]
    fn test_degenerate_slide() {
        let viewport = rect(0.0, 600.0);
        assert_eq!(visible_fraction(rect(100.0, 0.0), viewport), 0.0);
    }
}
