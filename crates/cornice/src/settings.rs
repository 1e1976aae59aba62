//! Decoration settings: the numeric and enumerated knobs the host exposes.
//!
//! Every enum here is closed, with an explicit `from_raw` mapping table
//! and one documented fallback branch for values the host hands us that
//! we do not recognize (newer config files, corrupt entries). Nothing in
//! this module errors: malformed input resolves to a stated default.

use cornice_render::Color;

/// Visible border thickness class.
///
/// Unrecognized raw values fall back to [`BorderSizeClass::Tiny`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderSizeClass {
    /// No visible borders at all.
    None,
    /// Borders only on the bottom edge.
    NoSides,
    /// The base spacing unit, with a 4px floor on the bottom edge.
    Tiny,
    /// Twice the base spacing unit.
    #[default]
    Normal,
    Large,
    VeryLarge,
    Huge,
    VeryHuge,
    Oversized,
}

impl BorderSizeClass {
    /// Map a raw config value to a class; unknown values become `Tiny`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::NoSides,
            2 => Self::Tiny,
            3 => Self::Normal,
            4 => Self::Large,
            5 => Self::VeryLarge,
            6 => Self::Huge,
            7 => Self::VeryHuge,
            8 => Self::Oversized,
            _ => Self::Tiny,
        }
    }
}

/// Shadow size preset selector.
///
/// Unrecognized raw values fall back to [`ShadowSize::Large`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShadowSize {
    None,
    Small,
    Medium,
    #[default]
    Large,
    VeryLarge,
}

impl ShadowSize {
    /// Map a raw config value to a preset; unknown values become `Large`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::None,
            1 => Self::Small,
            2 => Self::Medium,
            3 => Self::Large,
            4 => Self::VeryLarge,
            _ => Self::Large,
        }
    }
}

/// Titlebar button size, in grid-unit multiples.
///
/// Unrecognized raw values fall back to [`ButtonSize::Default`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// 1x the grid unit.
    Tiny,
    /// 1.5x the grid unit.
    Small,
    /// 2x the grid unit.
    #[default]
    Default,
    /// 2.5x the grid unit.
    Large,
    /// 3.5x the grid unit.
    VeryLarge,
}

impl ButtonSize {
    /// Map a raw config value to a size; unknown values become `Default`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Tiny,
            1 => Self::Small,
            2 => Self::Default,
            3 => Self::Large,
            4 => Self::VeryLarge,
            _ => Self::Default,
        }
    }
}

/// Caption text alignment mode.
///
/// Unrecognized raw values fall back to
/// [`TitleAlignment::CenterFullWidth`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TitleAlignment {
    Left,
    Center,
    /// Center across the full titlebar width, falling back to `Left` or
    /// `Right` when the centered text would overlap a button group.
    #[default]
    CenterFullWidth,
    Right,
}

impl TitleAlignment {
    /// Map a raw config value to an alignment; unknown values become
    /// `CenterFullWidth`.
    pub fn from_raw(raw: i32) -> Self {
        match raw {
            0 => Self::Left,
            1 => Self::Center,
            2 => Self::CenterFullWidth,
            3 => Self::Right,
            _ => Self::CenterFullWidth,
        }
    }
}

/// Kind of titlebar button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Application menu button.
    Menu,
    /// Keep-on-all-desktops toggle.
    OnAllDesktops,
    Minimize,
    /// Maximize, or restore when the window is maximized.
    Maximize,
    Close,
}

/// The knobs the layout engine and shadow renderer consume.
///
/// Owned by the host; the core only reads it. All fields have defaults
/// that produce a sensible decoration.
#[derive(Debug, Clone, PartialEq)]
pub struct DecorationSettings {
    /// Visible border thickness class.
    pub border_size: BorderSizeClass,
    /// Base spacing unit in pixels (borders, caption margins).
    pub small_spacing: i32,
    /// Wide spacing unit in pixels (extended resize borders, titlebar inset).
    pub large_spacing: i32,
    /// Base grid unit in pixels (button sizing).
    pub grid_unit: i32,

    /// Shadow size preset.
    pub shadow_size: ShadowSize,
    /// Shadow strength, 0-255.
    pub shadow_strength: u8,
    /// Shadow base color.
    pub shadow_color: Color,

    /// Titlebar button size class.
    pub button_size: ButtonSize,
    /// Spacing between buttons in a group, in pixels.
    pub button_spacing: i32,
    /// Buttons on the left side of the titlebar, outermost first.
    pub buttons_left: Vec<ButtonKind>,
    /// Buttons on the right side of the titlebar, innermost first.
    pub buttons_right: Vec<ButtonKind>,

    /// Caption alignment mode.
    pub title_alignment: TitleAlignment,
    /// Additional margin between button groups and the caption, in pixels.
    pub extra_title_margin: i32,
    /// Hide the titlebar entirely (borders only).
    pub hide_title_bar: bool,
    /// Suppress the titlebar body gradient, keeping only the light top line.
    pub flat_title_bar: bool,
    /// Draw a one-pixel separator line under the titlebar.
    pub draw_title_bar_separator: bool,
    /// Titlebar opacity, 0-255.
    pub title_bar_alpha: u8,

    /// Paint the titlebar with a vertical gradient instead of a flat fill.
    pub draw_background_gradient: bool,
    /// Extra lightness of the gradient's top, in percent points.
    pub background_gradient_intensity: i32,

    /// Animate active-state changes.
    pub animations_enabled: bool,
    /// Active-state fade duration in milliseconds.
    pub animations_duration_ms: u64,
}

impl Default for DecorationSettings {
    fn default() -> Self {
        Self {
            border_size: BorderSizeClass::Normal,
            small_spacing: 4,
            large_spacing: 10,
            grid_unit: 10,
            shadow_size: ShadowSize::Large,
            shadow_strength: 255,
            shadow_color: Color::BLACK,
            button_size: ButtonSize::Default,
            button_spacing: 2,
            buttons_left: vec![ButtonKind::Menu],
            buttons_right: vec![ButtonKind::Minimize, ButtonKind::Maximize, ButtonKind::Close],
            title_alignment: TitleAlignment::CenterFullWidth,
            extra_title_margin: 0,
            hide_title_bar: false,
            flat_title_bar: false,
            draw_title_bar_separator: false,
            title_bar_alpha: 255,
            draw_background_gradient: true,
            background_gradient_intensity: 0,
            animations_enabled: true,
            animations_duration_ms: 150,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_size_from_raw_fallback() {
        assert_eq!(BorderSizeClass::from_raw(0), BorderSizeClass::None);
        assert_eq!(BorderSizeClass::from_raw(8), BorderSizeClass::Oversized);
        assert_eq!(BorderSizeClass::from_raw(99), BorderSizeClass::Tiny);
        assert_eq!(BorderSizeClass::from_raw(-1), BorderSizeClass::Tiny);
    }

    #[test]
    fn test_shadow_size_from_raw_fallback() {
        assert_eq!(ShadowSize::from_raw(0), ShadowSize::None);
        assert_eq!(ShadowSize::from_raw(4), ShadowSize::VeryLarge);
        assert_eq!(ShadowSize::from_raw(17), ShadowSize::Large);
    }

    #[test]
    fn test_button_size_from_raw_fallback() {
        assert_eq!(ButtonSize::from_raw(1), ButtonSize::Small);
        assert_eq!(ButtonSize::from_raw(-3), ButtonSize::Default);
    }

    #[test]
    fn test_title_alignment_from_raw_fallback() {
        assert_eq!(TitleAlignment::from_raw(0), TitleAlignment::Left);
        assert_eq!(TitleAlignment::from_raw(42), TitleAlignment::CenterFullWidth);
    }

    #[test]
    fn test_default_settings() {
        let settings = DecorationSettings::default();
        assert_eq!(settings.border_size, BorderSizeClass::Normal);
        assert_eq!(settings.shadow_size, ShadowSize::Large);
        assert_eq!(settings.shadow_strength, 255);
        assert_eq!(settings.buttons_right.len(), 3);
    }
}
