//! Fixed layout metrics and the global scale-factor override.

/// Corner radius of the decoration frame, in pixels.
pub const FRAME_RADIUS: f32 = 3.0;

/// Margin above the titlebar when the window is not flush with the top
/// screen edge, in spacing units.
pub const TITLEBAR_TOP_MARGIN: i32 = 2;

/// Margin below the caption, in spacing units.
pub const TITLEBAR_BOTTOM_MARGIN: i32 = 2;

/// Horizontal margin between the frame edge and the button groups, in
/// spacing units.
pub const TITLEBAR_SIDE_MARGIN: i32 = 2;

/// Absolute titlebar height in pixels, before scaling.
pub const TITLEBAR_HEIGHT: i32 = 22;

/// How far the shadow hole's edge tucks under the window edge, in pixels.
///
/// Keeps the mask boundary from showing as a seam at the window border.
/// Empirically tuned; not derived.
pub const SHADOW_OVERLAP: i32 = 3;

/// Divisor applied to the buttons' vertical offset.
///
/// Empirically tuned against the reference raster backend; revisit if
/// the antialiasing behavior of the target backend differs.
pub const BUTTON_OFFSET_DIVISOR: f32 = 1.6;

/// Environment variable holding the optional global scale override.
pub const SCALE_FACTOR_ENV: &str = "CORNICE_SCALE_FACTOR";

/// Read the global scale factor override from the environment.
///
/// Read once at decoration construction; it multiplies all pixel metrics
/// uniformly. Absent or unparsable values resolve to 1.0.
pub fn scale_factor_from_env() -> f32 {
    match std::env::var(SCALE_FACTOR_ENV) {
        Ok(value) => match value.trim().parse::<f32>() {
            Ok(factor) if factor.is_finite() && factor > 0.0 => factor,
            _ => {
                tracing::warn!(%value, "ignoring unparsable scale factor override");
                1.0
            }
        },
        Err(_) => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_factor_default() {
        // The variable is not set under test; the override must be inert.
        if std::env::var(SCALE_FACTOR_ENV).is_err() {
            assert_eq!(scale_factor_from_env(), 1.0);
        }
    }
}
