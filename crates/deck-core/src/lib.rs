//! Core state for the slide deck viewer
//!
//! This crate owns the shared navigation model: the current-slide index, the
//! ordered slide handles with their recorded layout geometry, and the
//! visibility math used to decide which slide is on screen. Rendering lives
//! in `deck-ui`.

pub mod navigation;
pub mod registry;
pub mod visibility;

// Re-export commonly used types
pub use navigation::{SlideNavigator, DeckContext};
pub use registry::{SlideHandle, SlideRegistry};
pub use visibility::{visible_fraction, VISIBILITY_THRESHOLD};
