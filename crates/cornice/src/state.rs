//! Window state snapshot supplied by the host window manager.

/// Read-only snapshot of the decorated window's state.
///
/// Owned by the host; the layout engine consumes it and never mutates
/// it. Layout results are derived fresh from a snapshot on every
/// recalculation trigger, so stale geometry cannot leak across state
/// changes.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    /// Whether the window currently has focus.
    pub is_active: bool,
    /// Whether the window is rolled up to its titlebar.
    pub is_shaded: bool,
    /// Maximized along the horizontal axis.
    pub maximized_horizontally: bool,
    /// Maximized along the vertical axis.
    pub maximized_vertically: bool,
    /// Flush against the top screen edge.
    pub top_edge: bool,
    /// Flush against the left screen edge.
    pub left_edge: bool,
    /// Flush against the right screen edge.
    pub right_edge: bool,
    /// Flush against the bottom screen edge.
    pub bottom_edge: bool,
    /// Decorated width in pixels.
    pub width: i32,
    /// Decorated height in pixels.
    pub height: i32,
    /// Window caption text.
    pub caption: String,
    /// Whether the host allows resizing this window.
    pub is_resizeable: bool,
    /// Whether the compositor supports an alpha channel.
    pub has_alpha_channel: bool,
}

impl WindowState {
    /// Maximized along both axes.
    #[inline]
    pub fn is_maximized(&self) -> bool {
        self.maximized_horizontally && self.maximized_vertically
    }

    /// Flush against at least one screen edge.
    #[inline]
    pub fn is_edge_adjacent(&self) -> bool {
        self.top_edge || self.left_edge || self.right_edge || self.bottom_edge
    }
}

impl Default for WindowState {
    fn default() -> Self {
        Self {
            is_active: true,
            is_shaded: false,
            maximized_horizontally: false,
            maximized_vertically: false,
            top_edge: false,
            left_edge: false,
            right_edge: false,
            bottom_edge: false,
            width: 640,
            height: 480,
            caption: String::new(),
            is_resizeable: true,
            has_alpha_channel: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_maximized_requires_both_axes() {
        let mut state = WindowState::default();
        assert!(!state.is_maximized());
        state.maximized_horizontally = true;
        assert!(!state.is_maximized());
        state.maximized_vertically = true;
        assert!(state.is_maximized());
    }

    #[test]
    fn test_edge_adjacent() {
        let mut state = WindowState::default();
        assert!(!state.is_edge_adjacent());
        state.left_edge = true;
        assert!(state.is_edge_adjacent());
    }
}
