//! The decoration orchestrator.
//!
//! [`Decoration`] owns one window's settings and state snapshot, keeps
//! the derived layout current by mapping host-reported changes onto
//! recomputation passes, and paints the chrome into a host pixmap. The
//! shadow texture is shared process-wide through a [`ShadowCache`] the
//! host passes in at construction.

use std::sync::Arc;
use std::time::{Duration, Instant};

use cornice_render::{Color, Point, Rect, RenderResult};
use tiny_skia::Pixmap;

use crate::animation::ActiveStateFade;
use crate::event::{RecomputePass, StateChange};
use crate::layout::{
    BorderGeometry, ButtonsLayout, CaptionAlignment, caption_rect, recalculate_borders,
    title_bar_rect, update_buttons_geometry,
};
use crate::metrics::scale_factor_from_env;
use crate::paint::{
    CaptionLayout, CaptionMetrics, layout_caption, paint_background, paint_button,
    paint_frame_outline, paint_title_bar,
};
use crate::settings::{ButtonKind, DecorationSettings};
use crate::shadow::{ShadowCache, ShadowTexture};
use crate::state::WindowState;

/// Host-supplied colors for the two focus states.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub active_title_bar: Color,
    pub inactive_title_bar: Color,
    pub active_foreground: Color,
    pub inactive_foreground: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            active_title_bar: Color::from_rgb8(71, 80, 87),
            inactive_title_bar: Color::from_rgb8(239, 240, 241),
            active_foreground: Color::from_rgb8(252, 252, 252),
            inactive_foreground: Color::from_rgb8(112, 125, 138),
        }
    }
}

/// All geometry derived from the current state snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutState {
    pub border_geometry: BorderGeometry,
    pub title_bar: Rect,
    pub buttons: ButtonsLayout,
    pub caption_rect: Rect,
    pub caption_alignment: CaptionAlignment,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self {
            border_geometry: BorderGeometry::default(),
            title_bar: Rect::ZERO,
            buttons: ButtonsLayout::default(),
            caption_rect: Rect::ZERO,
            caption_alignment: CaptionAlignment::Center,
        }
    }
}

/// Caption text ready for the host to rasterize.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionPaint {
    /// Elided text and resolved x position.
    pub layout: CaptionLayout,
    /// Rectangle the text is vertically centered in.
    pub rect: Rect,
    /// Foreground color blended for the current focus fade.
    pub color: Color,
}

/// One window's decoration: settings, state, derived layout, and the
/// shared shadow handle.
#[derive(Debug)]
pub struct Decoration {
    settings: DecorationSettings,
    state: WindowState,
    scale: f32,
    layout: LayoutState,
    fade: ActiveStateFade,
    shadow_cache: Arc<ShadowCache>,
    shadow: Option<Arc<ShadowTexture>>,
}

impl Decoration {
    /// Build a decoration and compute its initial layout and shadow.
    ///
    /// The scale-factor override is read from the environment once, here.
    pub fn new(
        settings: DecorationSettings,
        state: WindowState,
        shadow_cache: Arc<ShadowCache>,
        metrics: &dyn CaptionMetrics,
    ) -> RenderResult<Self> {
        let scale = scale_factor_from_env();
        let fade = ActiveStateFade::new(
            settings.animations_enabled,
            Duration::from_millis(settings.animations_duration_ms),
            state.is_active,
        );
        let mut decoration = Self {
            settings,
            state,
            scale,
            layout: LayoutState::default(),
            fade,
            shadow_cache,
            shadow: None,
        };
        decoration.recompute(RecomputePass::ALL, metrics)?;
        Ok(decoration)
    }

    pub fn settings(&self) -> &DecorationSettings {
        &self.settings
    }

    pub fn state(&self) -> &WindowState {
        &self.state
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn layout(&self) -> &LayoutState {
        &self.layout
    }

    /// Current shadow texture; `None` when shadows are disabled.
    pub fn shadow(&self) -> Option<&Arc<ShadowTexture>> {
        self.shadow.as_ref()
    }

    /// Whether the focus fade still needs paint ticks.
    pub fn is_animating(&self) -> bool {
        self.fade.is_running()
    }

    /// Replace the state snapshot, recomputing whatever the differences
    /// require. Returns the executed pass so the host knows what moved.
    pub fn update_state(
        &mut self,
        state: WindowState,
        now: Instant,
        metrics: &dyn CaptionMetrics,
    ) -> RenderResult<RecomputePass> {
        let mut pass = RecomputePass::NONE;
        for change in diff_states(&self.state, &state) {
            if change == StateChange::ActiveChanged {
                self.fade.set_active(state.is_active, now);
            }
            pass = pass.merge(RecomputePass::for_change(change));
        }
        self.state = state;
        self.recompute(pass, metrics)?;
        Ok(pass)
    }

    /// Replace the settings, recomputing what the differences require.
    ///
    /// Narrowly diffed: changing only the shadow settings rebuilds the
    /// shadow handle without touching layout, and vice versa. Any change
    /// outside the diffed groups falls back to a full reconfigure.
    pub fn update_settings(
        &mut self,
        settings: DecorationSettings,
        metrics: &dyn CaptionMetrics,
    ) -> RenderResult<RecomputePass> {
        let mut pass = RecomputePass::NONE;
        for change in diff_settings(&self.settings, &settings) {
            pass = pass.merge(RecomputePass::for_change(change));
        }
        if self.settings.animations_enabled != settings.animations_enabled
            || self.settings.animations_duration_ms != settings.animations_duration_ms
        {
            self.fade = ActiveStateFade::new(
                settings.animations_enabled,
                Duration::from_millis(settings.animations_duration_ms),
                self.state.is_active,
            );
        }
        self.settings = settings;
        self.recompute(pass, metrics)?;
        Ok(pass)
    }

    /// Execute a recomputation pass against the current snapshot.
    ///
    /// Border changes move everything anchored to the borders, so the
    /// pass cascades before running.
    fn recompute(
        &mut self,
        mut pass: RecomputePass,
        metrics: &dyn CaptionMetrics,
    ) -> RenderResult<()> {
        if pass.borders {
            pass.title_bar = true;
            pass.buttons = true;
            pass.caption = true;
        }
        if pass.buttons {
            pass.caption = true;
        }
        if !pass.is_none() {
            tracing::debug!(?pass, "recomputing decoration layout");
        }

        if pass.borders {
            self.layout.border_geometry =
                recalculate_borders(&self.state, &self.settings, self.scale);
        }
        let borders = self.layout.border_geometry.borders;
        if pass.title_bar {
            self.layout.title_bar = title_bar_rect(&self.state, &self.settings, &borders);
        }
        if pass.buttons {
            self.layout.buttons =
                update_buttons_geometry(&self.state, &self.settings, self.scale, &borders);
        }
        if pass.caption {
            let caption_width = metrics.text_width(&self.state.caption);
            let (rect, alignment) = caption_rect(
                &self.state,
                &self.settings,
                &borders,
                &self.layout.buttons,
                caption_width,
            );
            self.layout.caption_rect = rect;
            self.layout.caption_alignment = alignment;
        }
        if pass.shadow {
            self.shadow = self.shadow_cache.get_or_render(&self.settings, self.scale)?;
        }
        Ok(())
    }

    /// Titlebar color for the current focus fade.
    pub fn title_bar_color(&self, palette: &Palette) -> Color {
        palette
            .inactive_title_bar
            .lerp(palette.active_title_bar, self.fade.value())
    }

    /// Foreground (caption, glyph) color for the current focus fade.
    pub fn foreground_color(&self, palette: &Palette) -> Color {
        palette
            .inactive_foreground
            .lerp(palette.active_foreground, self.fade.value())
    }

    /// The button under a point, if any.
    pub fn button_at(&self, point: Point) -> Option<ButtonKind> {
        self.layout
            .buttons
            .left
            .buttons
            .iter()
            .chain(&self.layout.buttons.right.buttons)
            .find(|button| button.rect.contains(point))
            .map(|button| button.kind)
    }

    /// Paint the decoration into a window-sized pixmap.
    ///
    /// Advances the focus fade to `now`. Text is not rasterized; the
    /// returned [`CaptionPaint`] tells the host what to draw where, and
    /// is `None` when the titlebar is hidden.
    pub fn paint(
        &mut self,
        pixmap: &mut Pixmap,
        palette: &Palette,
        metrics: &dyn CaptionMetrics,
        now: Instant,
    ) -> Option<CaptionPaint> {
        self.fade.tick(now);
        let title_bar_color = self.title_bar_color(palette);
        let foreground = self.foreground_color(palette);
        let border_top = self.layout.border_geometry.borders.top;

        paint_background(pixmap, &self.state, &self.settings, border_top, title_bar_color);
        paint_title_bar(
            pixmap,
            &self.state,
            &self.settings,
            self.scale,
            border_top,
            title_bar_color,
            foreground,
        );

        // No compositor alpha means no shadow to delimit the window.
        if !self.state.has_alpha_channel && crate::layout::has_borders(&self.settings) {
            let outline = if self.state.is_active {
                title_bar_color
            } else {
                foreground
            };
            paint_frame_outline(pixmap, &self.state, outline);
        }

        if crate::layout::hide_title_bar(&self.settings, &self.state) {
            return None;
        }

        for button in self
            .layout
            .buttons
            .left
            .buttons
            .iter()
            .chain(&self.layout.buttons.right.buttons)
        {
            paint_button(pixmap, button, &self.state, foreground, self.scale);
        }

        let layout = layout_caption(
            metrics,
            &self.state.caption,
            self.layout.caption_rect,
            self.layout.caption_alignment,
        );
        Some(CaptionPaint {
            layout,
            rect: self.layout.caption_rect,
            color: foreground,
        })
    }
}

/// Map the differences between two snapshots onto state changes.
fn diff_states(old: &WindowState, new: &WindowState) -> Vec<StateChange> {
    let mut changes = Vec::new();
    if old.is_active != new.is_active {
        changes.push(StateChange::ActiveChanged);
    }
    if old.is_shaded != new.is_shaded {
        changes.push(StateChange::ShadedChanged);
    }
    if old.maximized_horizontally != new.maximized_horizontally
        || old.maximized_vertically != new.maximized_vertically
    {
        changes.push(StateChange::MaximizedChanged);
    }
    if old.top_edge != new.top_edge
        || old.left_edge != new.left_edge
        || old.right_edge != new.right_edge
        || old.bottom_edge != new.bottom_edge
    {
        changes.push(StateChange::AdjacentEdgesChanged);
    }
    if old.width != new.width {
        changes.push(StateChange::WidthChanged);
    }
    if old.caption != new.caption {
        changes.push(StateChange::CaptionChanged);
    }
    changes
}

/// Map the differences between two settings onto state changes.
///
/// Fields outside the diffed groups collapse into a full reconfigure.
fn diff_settings(old: &DecorationSettings, new: &DecorationSettings) -> Vec<StateChange> {
    let mut changes = Vec::new();
    if old.border_size != new.border_size {
        changes.push(StateChange::BorderSizeChanged);
    }
    if old.small_spacing != new.small_spacing
        || old.large_spacing != new.large_spacing
        || old.grid_unit != new.grid_unit
    {
        changes.push(StateChange::SpacingChanged);
    }
    if old.buttons_left != new.buttons_left
        || old.buttons_right != new.buttons_right
        || old.button_size != new.button_size
        || old.button_spacing != new.button_spacing
    {
        changes.push(StateChange::ButtonLayoutChanged);
    }
    if old.shadow_size != new.shadow_size
        || old.shadow_strength != new.shadow_strength
        || old.shadow_color != new.shadow_color
    {
        changes.push(StateChange::ShadowSettingsChanged);
    }

    // Equalize the diffed groups; any remaining difference is a change
    // this table has no narrow mapping for.
    let mut rest = old.clone();
    rest.border_size = new.border_size;
    rest.small_spacing = new.small_spacing;
    rest.large_spacing = new.large_spacing;
    rest.grid_unit = new.grid_unit;
    rest.buttons_left = new.buttons_left.clone();
    rest.buttons_right = new.buttons_right.clone();
    rest.button_size = new.button_size;
    rest.button_spacing = new.button_spacing;
    rest.shadow_size = new.shadow_size;
    rest.shadow_strength = new.shadow_strength;
    rest.shadow_color = new.shadow_color;
    if rest != *new {
        changes.push(StateChange::Reconfigured);
    }
    changes
}
