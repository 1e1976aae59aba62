//! Window-decoration engine: composite drop shadows and titlebar layout.
//!
//! Cornice computes everything a window-manager decoration plugin needs
//! that is independent of the host toolkit: border geometry, button and
//! caption layout, a two-lobe drop-shadow texture with a punched window
//! hole, and the chrome painting itself. The host supplies window state
//! snapshots, a color palette, and text measurement; Cornice hands back
//! geometry and premultiplied-alpha pixmaps.
//!
//! The typical flow:
//!
//! ```ignore
//! let cache = Arc::new(ShadowCache::new());
//! let mut decoration = Decoration::new(settings, state, cache, &metrics)?;
//!
//! // On every host event:
//! decoration.update_state(new_state, Instant::now(), &metrics)?;
//!
//! // On every frame:
//! let caption = decoration.paint(&mut pixmap, &palette, &metrics, Instant::now());
//! ```
//!
//! Raster primitives (blur, box-shadow synthesis, geometry types) live in
//! the `cornice-render` crate, re-exported here as [`render`].

pub mod animation;
pub mod decoration;
pub mod event;
pub mod layout;
pub mod metrics;
pub mod paint;
pub mod settings;
pub mod shadow;
pub mod state;

pub use cornice_render as render;

pub use animation::ActiveStateFade;
pub use decoration::{CaptionPaint, Decoration, LayoutState, Palette};
pub use event::{RecomputePass, StateChange};
pub use layout::{
    BorderGeometry, ButtonGeometry, ButtonGroupLayout, ButtonsLayout, CaptionAlignment,
    border_size, caption_rect, recalculate_borders, title_bar_rect, update_buttons_geometry,
};
pub use paint::{
    CaptionLayout, CaptionMetrics, elide_middle, layout_caption, paint_background, paint_button,
    paint_frame_outline, paint_title_bar,
};
pub use settings::{
    BorderSizeClass, ButtonKind, ButtonSize, DecorationSettings, ShadowSize, TitleAlignment,
};
pub use shadow::{CompositeShadowSpec, ShadowCache, ShadowLobe, ShadowTexture};
pub use state::WindowState;
