//! State-change events and the recomputation each one triggers.
//!
//! The host reports what changed; [`RecomputePass::for_change`] maps each
//! change to the minimal set of layout passes that depend on it. The
//! decoration widens the pass with its own cascade rules (border changes
//! move everything anchored to the borders) before executing it.

/// A change in window state or configuration, as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    /// The border size class changed.
    BorderSizeChanged,
    /// A spacing or grid unit changed.
    SpacingChanged,
    /// The button arrangement changed.
    ButtonLayoutChanged,
    /// Settings were reloaded wholesale.
    Reconfigured,
    /// The set of screen edges the window touches changed.
    AdjacentEdgesChanged,
    /// A maximization axis toggled.
    MaximizedChanged,
    /// The window was shaded or unshaded.
    ShadedChanged,
    /// Focus moved to or away from the window.
    ActiveChanged,
    /// The window width changed.
    WidthChanged,
    /// The caption text changed.
    CaptionChanged,
    /// Shadow size, strength, or color changed.
    ShadowSettingsChanged,
}

/// The set of recomputations a state change requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RecomputePass {
    /// Recompute visible and resize-only borders.
    pub borders: bool,
    /// Recompute the draggable titlebar rectangle.
    pub title_bar: bool,
    /// Recompute button group geometry.
    pub buttons: bool,
    /// Recompute the caption rectangle and alignment.
    pub caption: bool,
    /// Refresh the shadow texture handle.
    pub shadow: bool,
    /// Repaint even if no geometry moved.
    pub repaint: bool,
}

impl RecomputePass {
    /// The empty pass.
    pub const NONE: Self = Self {
        borders: false,
        title_bar: false,
        buttons: false,
        caption: false,
        shadow: false,
        repaint: false,
    };

    /// Every recomputation at once.
    pub const ALL: Self = Self {
        borders: true,
        title_bar: true,
        buttons: true,
        caption: true,
        shadow: true,
        repaint: true,
    };

    /// The minimal pass for a single state change.
    pub fn for_change(change: StateChange) -> Self {
        match change {
            StateChange::Reconfigured => Self::ALL,
            StateChange::BorderSizeChanged => Self {
                borders: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::SpacingChanged => Self {
                borders: true,
                buttons: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::ButtonLayoutChanged => Self {
                buttons: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::AdjacentEdgesChanged => Self {
                borders: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::MaximizedChanged => Self {
                borders: true,
                title_bar: true,
                buttons: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::ShadedChanged => Self {
                borders: true,
                title_bar: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::ActiveChanged => Self {
                repaint: true,
                ..Self::NONE
            },
            StateChange::WidthChanged => Self {
                title_bar: true,
                buttons: true,
                caption: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::CaptionChanged => Self {
                caption: true,
                repaint: true,
                ..Self::NONE
            },
            StateChange::ShadowSettingsChanged => Self {
                shadow: true,
                repaint: true,
                ..Self::NONE
            },
        }
    }

    /// Union of two passes.
    pub fn merge(self, other: Self) -> Self {
        Self {
            borders: self.borders || other.borders,
            title_bar: self.title_bar || other.title_bar,
            buttons: self.buttons || other.buttons,
            caption: self.caption || other.caption,
            shadow: self.shadow || other.shadow,
            repaint: self.repaint || other.repaint,
        }
    }

    /// Whether the pass does anything at all.
    pub fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}
