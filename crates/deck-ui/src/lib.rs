//! User interface components for the slide deck viewer
//!
//! This crate provides the egui building blocks: arrow-key navigation, the
//! viewport observer that tracks which slide the reader is on, a deck
//! progress bar, and the full-viewport slide container.

pub mod keyboard_nav;
pub mod progress_bar;
pub mod slide_container;
pub mod slide_observer;
pub mod theme;

// Re-export commonly used types
pub use keyboard_nav::{KeyboardNav, ScrollRequest};
pub use progress_bar::{ProgressBar, ProgressBarConfig};
pub use slide_container::{SlideContainer, SlideOverrides, SlideResponse, SlideStyle, SnapAlign};
pub use slide_observer::SlideObserver;
pub use theme::{apply_theme, Theme};
