//! Thin progress bar showing how far into the deck the reader is

use egui::{Color32, Rect, Rounding, Sense, Ui, Vec2};

/// Progress bar configuration
#[derive(Debug, Clone)]
pub struct ProgressBarConfig {
    /// Height of the bar
    pub height: f32,

    /// Track color
    pub track_color: Color32,

    /// Fill color
    pub fill_color: Color32,

    /// Seconds the fill takes to glide to a new position
    pub transition_time: f32,
}

impl Default for ProgressBarConfig {
    fn default() -> Self {
        Self {
            height: 4.0,
            track_color: Color32::from_gray(45),
            fill_color: Color32::from_rgb(100, 150, 250),
            transition_time: 0.3,
        }
    }
}

/// Deck progress indicator: a track whose fill spans `current / total` of the
/// available width.
///
/// Rendering is all this widget does. It holds no state between frames and
/// performs no validation; passing `total == 0` or `current >= total` yields
/// an out-of-range fill, and keeping the pair consistent is the caller's job.
pub struct ProgressBar {
    current: usize,
    total: usize,
    config: ProgressBarConfig,
}

impl ProgressBar {
    /// Create a bar representing slide `current` of `total`
    pub fn new(current: usize, total: usize) -> Self {
        Self {
            current,
            total,
            config: ProgressBarConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: ProgressBarConfig) -> Self {
        self.config = config;
        self
    }

    /// Filled share of the track, `current / total`
    pub fn fill_fraction(&self) -> f32 {
        self.current as f32 / self.total as f32
    }

    /// Filled share of the track as a percentage
    pub fn fill_percent(&self) -> f32 {
        self.fill_fraction() * 100.0
    }

    /// Draw the bar across the available width
    pub fn ui(&self, ui: &mut Ui) {
        let desired = Vec2::new(ui.available_width(), self.config.height);
        let (response, painter) = ui.allocate_painter(desired, Sense::hover());
        let rect = response.rect;

        painter.rect_filled(rect, Rounding::ZERO, self.config.track_color);

        // Glide toward the new position instead of jumping
        let fraction = ui.ctx().animate_value_with_time(
            ui.id().with("deck_progress_fill"),
            self.fill_fraction(),
            self.config.transition_time,
        );

        let fill = Rect::from_min_size(rect.min, Vec2::new(rect.width() * fraction, rect.height()));
        painter.rect_filled(fill, Rounding::ZERO, self.config.fill_color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_fraction() {
        assert_eq!(ProgressBar::new(3, 10).fill_fraction(), 0.3);
        assert_eq!(ProgressBar::new(0, 1).fill_fraction(), 0.0);
        assert_eq!(ProgressBar::new(10, 10).fill_fraction(), 1.0);
    }

    #[test]
    fn test_fill_percent() {
        assert!((ProgressBar::new(3, 10).fill_percent() - 30.0).abs() < 1e-4);
        assert_eq!(ProgressBar::new(0, 1).fill_percent(), 0.0);
        assert_eq!(ProgressBar::new(5, 10).fill_percent(), 50.0);
    }

    #[test]
    fn test_config_override() {
        let config = ProgressBarConfig {
            height: 8.0,
            transition_time: 0.0,
            ..Default::default()
        };
        let bar = ProgressBar::new(1, 2).with_config(config);
        assert_eq!(bar.config.height, 8.0);
        assert_eq!(bar.config.transition_time, 0.0);
    }
}
