//! CPU raster primitives for the Cornice window-decoration engine.
//!
//! This crate is the leaf raster layer: geometry and color types, a
//! box-blur approximation of Gaussian blur, and the composite
//! [`BoxShadowRenderer`]. It knows nothing about window decorations,
//! settings, or layout; those live in the `cornice` crate.

pub mod blur;
pub mod box_shadow;
pub mod error;
pub mod types;

pub use blur::{blur_extent, blur_radius_for_std_dev, blur_std_dev, box_blur_alpha};
pub use box_shadow::{BoxShadowRenderer, rounded_rect_path};
pub use error::{RenderError, RenderResult};
pub use types::{Color, IntPoint, IntSize, Margins, Point, Rect, Size};

// The raster backend is part of the public surface: callers composite the
// pixmaps this crate produces.
pub use tiny_skia;
