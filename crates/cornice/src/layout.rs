//! Titlebar layout engine.
//!
//! Every function here is a pure, total recomputation over a
//! [`WindowState`] snapshot and the current settings: no I/O, no retained
//! layout state, and idempotent by construction. The decoration calls
//! back into this module whenever a state-change event demands it.

use cornice_render::{Margins, Point, Rect, Size};

use crate::metrics::{
    BUTTON_OFFSET_DIVISOR, TITLEBAR_BOTTOM_MARGIN, TITLEBAR_HEIGHT, TITLEBAR_SIDE_MARGIN,
    TITLEBAR_TOP_MARGIN,
};
use crate::settings::{BorderSizeClass, ButtonKind, ButtonSize, DecorationSettings, TitleAlignment};
use crate::state::WindowState;

/// Visible borders plus the invisible resize-only extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderGeometry {
    /// Visible border margins around the window content.
    pub borders: Margins,
    /// Extra invisible hit-test margins, present only when the visible
    /// borders are collapsed (borderless styles).
    pub resize_only: Margins,
}

/// Geometry of a single titlebar button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonGeometry {
    pub kind: ButtonKind,
    /// Clickable rectangle in decoration coordinates.
    pub rect: Rect,
    /// Size of the glyph within the clickable rectangle.
    pub icon_size: Size,
    /// Glyph offset within the rectangle (edge padding, vertical centering).
    pub offset: Point,
    /// Outermost button of a group flush against the left screen edge.
    pub first_in_group: bool,
    /// Outermost button of a group flush against the right screen edge.
    pub last_in_group: bool,
}

/// One button group (left or right side of the titlebar).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonGroupLayout {
    /// Bounding rectangle of the whole group; `Rect::ZERO` when empty.
    pub rect: Rect,
    pub buttons: Vec<ButtonGeometry>,
}

impl ButtonGroupLayout {
    /// Whether the group holds no buttons.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

/// Button geometry for both titlebar sides.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonsLayout {
    pub left: ButtonGroupLayout,
    pub right: ButtonGroupLayout,
}

/// Horizontal caption alignment within its rectangle.
///
/// The caption is always vertically centered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionAlignment {
    Left,
    Center,
    Right,
}

/// Whether the titlebar is hidden for this state.
///
/// A shaded window always shows its titlebar (it is all that remains).
#[inline]
pub fn hide_title_bar(settings: &DecorationSettings, state: &WindowState) -> bool {
    settings.hide_title_bar && !state.is_shaded
}

/// Whether the style has no visible borders at all.
#[inline]
pub fn has_no_borders(settings: &DecorationSettings) -> bool {
    settings.border_size == BorderSizeClass::None
}

/// Whether the style has visible borders only on the bottom edge.
#[inline]
pub fn has_no_side_borders(settings: &DecorationSettings) -> bool {
    settings.border_size == BorderSizeClass::NoSides
}

/// Whether the style has visible borders on every edge.
#[inline]
pub fn has_borders(settings: &DecorationSettings) -> bool {
    !has_no_borders(settings) && !has_no_side_borders(settings)
}

/// Border thickness for one edge, in pixels.
///
/// `bottom` selects the bottom edge, which keeps a 4px floor at the
/// smallest non-`None` classes so a resize handle stays grabbable.
pub fn border_size(settings: &DecorationSettings, bottom: bool) -> i32 {
    let base = settings.small_spacing;
    match settings.border_size {
        BorderSizeClass::None => 0,
        BorderSizeClass::NoSides => {
            if bottom {
                base.max(4)
            } else {
                0
            }
        }
        BorderSizeClass::Tiny => {
            if bottom {
                base.max(4)
            } else {
                base
            }
        }
        BorderSizeClass::Normal => base * 2,
        BorderSizeClass::Large => base * 3,
        BorderSizeClass::VeryLarge => base * 4,
        BorderSizeClass::Huge => base * 5,
        BorderSizeClass::VeryHuge => base * 6,
        BorderSizeClass::Oversized => base * 10,
    }
}

/// Recompute visible and resize-only borders for the current state.
///
/// Edges flush against a screen edge collapse to zero; the bottom border
/// also collapses when the window is shaded. The top border is the
/// scaled titlebar height, or mirrors the bottom border when the
/// titlebar is hidden.
pub fn recalculate_borders(
    state: &WindowState,
    settings: &DecorationSettings,
    scale: f32,
) -> BorderGeometry {
    let left = if state.left_edge {
        0
    } else {
        border_size(settings, false)
    };
    let right = if state.right_edge {
        0
    } else {
        border_size(settings, false)
    };
    let bottom = if state.is_shaded || state.bottom_edge {
        0
    } else {
        border_size(settings, true)
    };

    let top = if hide_title_bar(settings, state) {
        bottom
    } else {
        (TITLEBAR_HEIGHT as f32 * scale) as i32
    };

    // Invisible resize-only margins compensate for collapsed visible
    // borders so the window stays grabbable.
    let ext_size = settings.large_spacing;
    let mut ext_sides = 0;
    let mut ext_bottom = 0;
    if has_no_borders(settings) {
        if !state.maximized_horizontally {
            ext_sides = ext_size;
        }
        if !state.maximized_vertically {
            ext_bottom = ext_size;
        }
    } else if has_no_side_borders(settings) && !state.maximized_horizontally {
        ext_sides = ext_size;
    }

    BorderGeometry {
        borders: Margins::new(left, top, right, bottom),
        resize_only: Margins::new(ext_sides, 0, ext_sides, ext_bottom),
    }
}

/// The draggable titlebar rectangle reported to the window manager.
///
/// Maximized windows use the full top strip; otherwise the rectangle is
/// inset so the rounded frame corners stay outside the drag region.
pub fn title_bar_rect(
    state: &WindowState,
    settings: &DecorationSettings,
    borders: &Margins,
) -> Rect {
    let maximized = state.is_maximized();
    let side_inset = settings.large_spacing * TITLEBAR_SIDE_MARGIN;
    if maximized {
        Rect::new(0.0, 0.0, state.width as f32, borders.top as f32)
    } else {
        Rect::new(
            side_inset as f32,
            TITLEBAR_TOP_MARGIN as f32,
            (state.width - 2 * side_inset) as f32,
            (borders.top - TITLEBAR_TOP_MARGIN) as f32,
        )
    }
}

/// Unscaled button height for the configured button size class.
pub fn button_height(settings: &DecorationSettings) -> f32 {
    let base = settings.grid_unit as f32;
    match settings.button_size {
        ButtonSize::Tiny => base,
        ButtonSize::Small => base * 1.5,
        ButtonSize::Default => base * 2.0,
        ButtonSize::Large => base * 2.5,
        ButtonSize::VeryLarge => base * 3.5,
    }
}

/// Height of the caption strip inside the titlebar.
pub fn caption_height(settings: &DecorationSettings, border_top: i32, hidden: bool) -> i32 {
    if hidden {
        border_top
    } else {
        border_top - settings.small_spacing * (TITLEBAR_TOP_MARGIN + TITLEBAR_BOTTOM_MARGIN) - 1
    }
}


/// Recompute geometry for both button groups.
///
/// Buttons flush against a screen edge absorb the side padding into
/// their own clickable rectangle so the hit area reaches the physical
/// screen edge; such buttons are tagged first/last in group and their
/// glyph is shifted inward instead.
pub fn update_buttons_geometry(
    state: &WindowState,
    settings: &DecorationSettings,
    scale: f32,
    borders: &Margins,
) -> ButtonsLayout {
    let hidden = hide_title_bar(settings, state);
    let caption_h = caption_height(settings, borders.top, hidden);

    let top_margin = if state.top_edge { TITLEBAR_TOP_MARGIN } else { 0 };
    let b_height = (caption_h + top_margin) as f32 * scale;
    let b_width = button_height(settings) * scale;
    let vertical_offset = (top_margin as f32 + (caption_h as f32 - button_height(settings)) / 2.0)
        / (scale * BUTTON_OFFSET_DIVISOR);

    let spacing = settings.button_spacing as f32 * scale;
    let v_padding = if state.top_edge {
        0.0
    } else {
        TITLEBAR_TOP_MARGIN as f32 * scale + 1.0
    };
    let h_padding = TITLEBAR_SIDE_MARGIN as f32 * scale;

    // Left group
    let left = if settings.buttons_left.is_empty() {
        ButtonGroupLayout::default()
    } else {
        let mut buttons = Vec::with_capacity(settings.buttons_left.len());
        let mut widths = vec![b_width; settings.buttons_left.len()];
        let mut icon_offset_x = 0.0;
        if state.left_edge {
            widths[0] = b_width + h_padding;
            icon_offset_x = h_padding;
        }
        let group_x = if state.left_edge {
            0.0
        } else {
            h_padding + borders.left as f32
        };
        let mut x = group_x;
        for (i, (&kind, &width)) in settings.buttons_left.iter().zip(&widths).enumerate() {
            let edge_button = state.left_edge && i == 0;
            buttons.push(ButtonGeometry {
                kind,
                rect: Rect::new(x, v_padding, width, b_height),
                icon_size: Size::new(b_width, b_width),
                offset: Point::new(
                    if edge_button { icon_offset_x } else { 0.0 },
                    vertical_offset,
                ),
                first_in_group: edge_button,
                last_in_group: false,
            });
            x += width + spacing;
        }
        let group_width = widths.iter().sum::<f32>() + spacing * (widths.len() - 1) as f32;
        ButtonGroupLayout {
            rect: Rect::new(group_x, v_padding, group_width, b_height),
            buttons,
        }
    };

    // Right group
    let right = if settings.buttons_right.is_empty() {
        ButtonGroupLayout::default()
    } else {
        let count = settings.buttons_right.len();
        let mut widths = vec![b_width; count];
        if state.right_edge {
            widths[count - 1] = b_width + h_padding;
        }
        let group_width = widths.iter().sum::<f32>() + spacing * (count - 1) as f32;
        let group_x = if state.right_edge {
            state.width as f32 - group_width
        } else {
            state.width as f32 - group_width - h_padding - borders.right as f32
        };
        let mut buttons = Vec::with_capacity(count);
        let mut x = group_x;
        for (i, (&kind, &width)) in settings.buttons_right.iter().zip(&widths).enumerate() {
            let edge_button = state.right_edge && i == count - 1;
            buttons.push(ButtonGeometry {
                kind,
                rect: Rect::new(x, v_padding, width, b_height),
                icon_size: Size::new(b_width, b_width),
                offset: Point::new(0.0, vertical_offset),
                first_in_group: false,
                last_in_group: edge_button,
            });
            x += width + spacing;
        }
        ButtonGroupLayout {
            rect: Rect::new(group_x, v_padding, group_width, b_height),
            buttons,
        }
    };

    ButtonsLayout { left, right }
}

/// Compute the caption rectangle and its text alignment.
///
/// `caption_width` is the natural (unconstrained) width of the caption
/// text as measured by the host's font metrics. When the titlebar is
/// hidden the result is an empty rectangle with center alignment and the
/// caller must not draw text.
pub fn caption_rect(
    state: &WindowState,
    settings: &DecorationSettings,
    borders: &Margins,
    buttons: &ButtonsLayout,
    caption_width: f32,
) -> (Rect, CaptionAlignment) {
    let hidden = hide_title_bar(settings, state);
    if hidden {
        return (Rect::ZERO, CaptionAlignment::Center);
    }

    let width = state.width as f32;
    let margin = (TITLEBAR_SIDE_MARGIN * settings.small_spacing + settings.extra_title_margin) as f32;
    let left_offset = if buttons.left.is_empty() {
        margin
    } else {
        buttons.left.rect.right() + margin
    };
    let right_offset = if buttons.right.is_empty() {
        margin
    } else {
        width - buttons.right.rect.left() + margin
    };

    let y_offset = (TITLEBAR_TOP_MARGIN + 1) as f32;
    let caption_h = caption_height(settings, borders.top, hidden) as f32;
    let max_rect = Rect::new(left_offset, y_offset, width - left_offset - right_offset, caption_h);

    match settings.title_alignment {
        TitleAlignment::Left => (max_rect, CaptionAlignment::Left),
        TitleAlignment::Right => (max_rect, CaptionAlignment::Right),
        TitleAlignment::Center => (max_rect, CaptionAlignment::Center),
        TitleAlignment::CenterFullWidth => {
            // Try centering across the entire titlebar; fall back toward
            // the freer side when the centered text would sit under a
            // button group.
            let full_rect = Rect::new(0.0, y_offset, width, caption_h);
            let bounding_left = (width - caption_width) / 2.0;
            if bounding_left < left_offset {
                (max_rect, CaptionAlignment::Left)
            } else if bounding_left + caption_width > width - right_offset {
                (max_rect, CaptionAlignment::Right)
            } else {
                (full_rect, CaptionAlignment::Center)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_with(border: BorderSizeClass) -> DecorationSettings {
        DecorationSettings {
            border_size: border,
            ..DecorationSettings::default()
        }
    }

    #[test]
    fn test_border_size_table() {
        let normal = settings_with(BorderSizeClass::Normal);
        assert_eq!(border_size(&normal, false), 8);
        assert_eq!(border_size(&normal, true), 8);

        let tiny = settings_with(BorderSizeClass::Tiny);
        assert_eq!(border_size(&tiny, false), 4);

        let no_sides = settings_with(BorderSizeClass::NoSides);
        assert_eq!(border_size(&no_sides, true), 4);
        assert_eq!(border_size(&no_sides, false), 0);

        let oversized = settings_with(BorderSizeClass::Oversized);
        assert_eq!(border_size(&oversized, false), 40);
    }

    #[test]
    fn test_bottom_border_floor() {
        // Bottom edge keeps a grabbable 4px floor at the smallest
        // non-None classes, even with a tiny spacing unit.
        for class in [BorderSizeClass::NoSides, BorderSizeClass::Tiny] {
            let mut settings = settings_with(class);
            settings.small_spacing = 2;
            assert!(border_size(&settings, true) >= 4);
        }
        assert_eq!(border_size(&settings_with(BorderSizeClass::None), true), 0);
    }

    #[test]
    fn test_borders_collapse_on_screen_edges() {
        let state = WindowState {
            left_edge: true,
            right_edge: true,
            top_edge: true,
            bottom_edge: true,
            ..WindowState::default()
        };
        let geometry = recalculate_borders(&state, &DecorationSettings::default(), 1.0);
        assert_eq!(geometry.borders.left, 0);
        assert_eq!(geometry.borders.right, 0);
        assert_eq!(geometry.borders.bottom, 0);
        // Default style has visible borders, so no resize-only extension.
        assert!(geometry.resize_only.is_zero());
    }

    #[test]
    fn test_shaded_window_has_no_bottom_border() {
        let state = WindowState {
            is_shaded: true,
            ..WindowState::default()
        };
        let geometry = recalculate_borders(&state, &DecorationSettings::default(), 1.0);
        assert_eq!(geometry.borders.bottom, 0);
    }

    #[test]
    fn test_top_border_is_scaled_titlebar_height() {
        let state = WindowState::default();
        let geometry = recalculate_borders(&state, &DecorationSettings::default(), 1.0);
        assert_eq!(geometry.borders.top, TITLEBAR_HEIGHT);

        let scaled = recalculate_borders(&state, &DecorationSettings::default(), 2.0);
        assert_eq!(scaled.borders.top, TITLEBAR_HEIGHT * 2);
    }

    #[test]
    fn test_hidden_title_bar_mirrors_bottom_border() {
        let mut settings = DecorationSettings::default();
        settings.hide_title_bar = true;
        let state = WindowState::default();
        let geometry = recalculate_borders(&state, &settings, 1.0);
        assert_eq!(geometry.borders.top, geometry.borders.bottom);
    }

    #[test]
    fn test_borderless_style_gets_resize_only_borders() {
        let settings = settings_with(BorderSizeClass::None);
        let state = WindowState::default();
        let geometry = recalculate_borders(&state, &settings, 1.0);
        assert_eq!(geometry.resize_only.left, settings.large_spacing);
        assert_eq!(geometry.resize_only.right, settings.large_spacing);
        assert_eq!(geometry.resize_only.bottom, settings.large_spacing);
        assert_eq!(geometry.resize_only.top, 0);

        // Maximized axes drop their extension.
        let maximized = WindowState {
            maximized_horizontally: true,
            maximized_vertically: true,
            ..WindowState::default()
        };
        let geometry = recalculate_borders(&maximized, &settings, 1.0);
        assert!(geometry.resize_only.is_zero());
    }

    #[test]
    fn test_no_side_borders_extends_sides_only() {
        let settings = settings_with(BorderSizeClass::NoSides);
        let state = WindowState::default();
        let geometry = recalculate_borders(&state, &settings, 1.0);
        assert_eq!(geometry.resize_only.left, settings.large_spacing);
        assert_eq!(geometry.resize_only.bottom, 0);
    }

    #[test]
    fn test_recalculate_borders_is_idempotent() {
        let state = WindowState::default();
        let settings = DecorationSettings::default();
        let a = recalculate_borders(&state, &settings, 1.25);
        let b = recalculate_borders(&state, &settings, 1.25);
        assert_eq!(a, b);
    }

    #[test]
    fn test_title_bar_rect_maximized_vs_floating() {
        let settings = DecorationSettings::default();
        let mut state = WindowState::default();
        let borders = recalculate_borders(&state, &settings, 1.0).borders;

        let floating = title_bar_rect(&state, &settings, &borders);
        assert!(floating.left() > 0.0);
        assert!(floating.top() > 0.0);

        state.maximized_horizontally = true;
        state.maximized_vertically = true;
        let maximized = title_bar_rect(&state, &settings, &borders);
        assert_eq!(maximized.left(), 0.0);
        assert_eq!(maximized.top(), 0.0);
        assert_eq!(maximized.width(), state.width as f32);
    }

    #[test]
    fn test_button_height_classes() {
        let mut settings = DecorationSettings::default();
        settings.grid_unit = 10;
        settings.button_size = ButtonSize::Tiny;
        assert_eq!(button_height(&settings), 10.0);
        settings.button_size = ButtonSize::Small;
        assert_eq!(button_height(&settings), 15.0);
        settings.button_size = ButtonSize::Default;
        assert_eq!(button_height(&settings), 20.0);
        settings.button_size = ButtonSize::Large;
        assert_eq!(button_height(&settings), 25.0);
        settings.button_size = ButtonSize::VeryLarge;
        assert_eq!(button_height(&settings), 35.0);
    }

    #[test]
    fn test_buttons_geometry_plain() {
        let settings = DecorationSettings::default();
        let state = WindowState::default();
        let borders = recalculate_borders(&state, &settings, 1.0).borders;
        let layout = update_buttons_geometry(&state, &settings, 1.0, &borders);

        assert_eq!(layout.left.buttons.len(), settings.buttons_left.len());
        assert_eq!(layout.right.buttons.len(), settings.buttons_right.len());

        // Left group sits after the side padding and left border.
        assert!(layout.left.rect.left() > 0.0);
        // Right group ends before the right border.
        assert!(layout.right.rect.right() < state.width as f32);
        // No edge tagging away from screen edges.
        assert!(layout.left.buttons.iter().all(|b| !b.first_in_group));
        assert!(layout.right.buttons.iter().all(|b| !b.last_in_group));
    }

    #[test]
    fn test_edge_buttons_absorb_padding() {
        let mut settings = DecorationSettings::default();
        // Two left buttons so the edge button has a sibling to compare.
        settings.buttons_left = vec![ButtonKind::Menu, ButtonKind::OnAllDesktops];
        let state = WindowState {
            left_edge: true,
            right_edge: true,
            ..WindowState::default()
        };
        let borders = recalculate_borders(&state, &settings, 1.0).borders;
        let layout = update_buttons_geometry(&state, &settings, 1.0, &borders);

        // Groups reach the physical screen edges.
        assert_eq!(layout.left.rect.left(), 0.0);
        assert_eq!(layout.right.rect.right(), state.width as f32);

        let first = &layout.left.buttons[0];
        let last = layout.right.buttons.last().unwrap();
        assert!(first.first_in_group);
        assert!(last.last_in_group);
        // The edge button is wider than its siblings and shifts its glyph
        // inward instead of adding an external margin.
        assert!(first.rect.width() > layout.left.buttons[1].rect.width());
        assert!(first.offset.x > 0.0);
        assert!(last.rect.width() > layout.right.buttons[0].rect.width());
        assert_eq!(last.offset.x, 0.0);
    }

    #[test]
    fn test_buttons_geometry_is_idempotent() {
        let settings = DecorationSettings::default();
        let state = WindowState::default();
        let borders = recalculate_borders(&state, &settings, 1.5).borders;
        let a = update_buttons_geometry(&state, &settings, 1.5, &borders);
        let b = update_buttons_geometry(&state, &settings, 1.5, &borders);
        assert_eq!(a, b);
    }

    fn fixed_groups(width: f32) -> ButtonsLayout {
        // Left group [0, 80), right group [350, width).
        ButtonsLayout {
            left: ButtonGroupLayout {
                rect: Rect::new(0.0, 0.0, 80.0, 20.0),
                buttons: vec![ButtonGeometry {
                    kind: ButtonKind::Menu,
                    rect: Rect::new(0.0, 0.0, 80.0, 20.0),
                    icon_size: Size::new(20.0, 20.0),
                    offset: Point::ZERO,
                    first_in_group: false,
                    last_in_group: false,
                }],
            },
            right: ButtonGroupLayout {
                rect: Rect::new(350.0, 0.0, width - 350.0, 20.0),
                buttons: vec![ButtonGeometry {
                    kind: ButtonKind::Close,
                    rect: Rect::new(350.0, 0.0, width - 350.0, 20.0),
                    icon_size: Size::new(20.0, 20.0),
                    offset: Point::ZERO,
                    first_in_group: false,
                    last_in_group: false,
                }],
            },
        }
    }

    #[test]
    fn test_caption_center_full_width_fits() {
        let settings = DecorationSettings::default();
        let state = WindowState {
            width: 400,
            ..WindowState::default()
        };
        let borders = recalculate_borders(&state, &settings, 1.0).borders;
        let buttons = fixed_groups(400.0);

        // A 90px caption centered at [155, 245) clears both groups.
        let (rect, alignment) = caption_rect(&state, &settings, &borders, &buttons, 90.0);
        assert_eq!(alignment, CaptionAlignment::Center);
        assert_eq!(rect.left(), 0.0);
        assert_eq!(rect.width(), 400.0);
    }

    #[test]
    fn test_caption_center_full_width_falls_back_left() {
        let settings = DecorationSettings::default();
        let state = WindowState {
            width: 400,
            ..WindowState::default()
        };
        let borders = recalculate_borders(&state, &settings, 1.0).borders;
        let buttons = fixed_groups(400.0);

        // A 300px caption centered at [50, 350) overlaps both groups.
        let (rect, alignment) = caption_rect(&state, &settings, &borders, &buttons, 300.0);
        assert_eq!(alignment, CaptionAlignment::Left);
        // Constrained rect starts after the left group plus margin.
        assert!(rect.left() >= 80.0);
        assert!(rect.right() <= 350.0);
    }

    #[test]
    fn test_caption_hidden_title_bar() {
        let mut settings = DecorationSettings::default();
        settings.hide_title_bar = true;
        let state = WindowState::default();
        let borders = recalculate_borders(&state, &settings, 1.0).borders;
        let buttons = ButtonsLayout::default();

        let (rect, alignment) = caption_rect(&state, &settings, &borders, &buttons, 50.0);
        assert!(rect.is_empty());
        assert_eq!(alignment, CaptionAlignment::Center);
    }

    #[test]
    fn test_caption_explicit_alignments() {
        let mut settings = DecorationSettings::default();
        let state = WindowState::default();
        let borders = recalculate_borders(&state, &settings, 1.0).borders;
        let buttons = update_buttons_geometry(&state, &settings, 1.0, &borders);

        settings.title_alignment = TitleAlignment::Left;
        let (_, alignment) = caption_rect(&state, &settings, &borders, &buttons, 10.0);
        assert_eq!(alignment, CaptionAlignment::Left);

        settings.title_alignment = TitleAlignment::Right;
        let (_, alignment) = caption_rect(&state, &settings, &borders, &buttons, 10.0);
        assert_eq!(alignment, CaptionAlignment::Right);

        settings.title_alignment = TitleAlignment::Center;
        let (rect, alignment) = caption_rect(&state, &settings, &borders, &buttons, 10.0);
        assert_eq!(alignment, CaptionAlignment::Center);
        // Constrained, not full width.
        assert!(rect.left() > 0.0);
    }
}
