//! Frame and titlebar painting.
//!
//! Everything here rasterizes into a caller-supplied pixmap sized to the
//! decorated window. Text itself is not rasterized: the host owns the
//! font engine, so caption handling stops at elision and placement, with
//! widths measured through the [`CaptionMetrics`] seam.

use cornice_render::{Color, Point, Rect, rounded_rect_path};
use tiny_skia::{
    FillRule, GradientStop, LinearGradient, Mask, Paint, Pixmap, Shader, SpreadMode, Stroke,
    Transform,
};

use crate::layout::{ButtonGeometry, CaptionAlignment, hide_title_bar};
use crate::metrics::FRAME_RADIUS;
use crate::settings::{ButtonKind, DecorationSettings};
use crate::state::WindowState;

/// Host-supplied text measurement.
///
/// The decoration never touches fonts itself; the host measures caption
/// widths with whatever text stack it paints with.
pub trait CaptionMetrics {
    /// Advance width of `text` in the caption font, in pixels.
    fn text_width(&self, text: &str) -> f32;
}

const ELLIPSIS: char = '\u{2026}';

/// Shorten `text` from the middle until it fits `max_width`.
///
/// Keeps the start and end of the caption visible, which preserves both
/// the document name and the application name in the common
/// "document - application" caption shape.
pub fn elide_middle(metrics: &dyn CaptionMetrics, text: &str, max_width: f32) -> String {
    if metrics.text_width(text) <= max_width {
        return text.to_owned();
    }

    let chars: Vec<char> = text.chars().collect();
    for keep in (1..chars.len()).rev() {
        let front = keep.div_ceil(2);
        let back = keep / 2;
        let candidate: String = chars[..front]
            .iter()
            .chain(std::iter::once(&ELLIPSIS))
            .chain(chars[chars.len() - back..].iter())
            .collect();
        if metrics.text_width(&candidate) <= max_width {
            return candidate;
        }
    }

    let ellipsis = ELLIPSIS.to_string();
    if metrics.text_width(&ellipsis) <= max_width {
        ellipsis
    } else {
        String::new()
    }
}

/// An elided caption and where to start drawing it.
#[derive(Debug, Clone, PartialEq)]
pub struct CaptionLayout {
    /// Caption text after middle elision.
    pub text: String,
    /// Left edge of the text baseline run.
    pub x: f32,
}

/// Elide the caption into its rectangle and resolve the alignment to a
/// concrete x position.
pub fn layout_caption(
    metrics: &dyn CaptionMetrics,
    caption: &str,
    rect: Rect,
    alignment: CaptionAlignment,
) -> CaptionLayout {
    let text = elide_middle(metrics, caption, rect.width());
    let width = metrics.text_width(&text);
    let x = match alignment {
        CaptionAlignment::Left => rect.left(),
        CaptionAlignment::Center => rect.center().x - width / 2.0,
        CaptionAlignment::Right => rect.right() - width,
    };
    CaptionLayout { text, x }
}

fn fill_mask_rect(width: u32, height: u32, clip: Rect) -> Option<Mask> {
    let mut mask = Mask::new(width, height)?;
    let rect = tiny_skia::Rect::from_xywh(
        clip.left(),
        clip.top(),
        clip.width(),
        clip.height(),
    )?;
    let path = tiny_skia::PathBuilder::from_rect(rect);
    mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
    Some(mask)
}

/// Paint the window body behind the client area.
///
/// The body is the titlebar color at the configured titlebar opacity,
/// rounded when the compositor supports alpha, and clipped below the
/// titlebar strip so the gradient pass owns the top. Shaded windows skip
/// this entirely.
pub fn paint_background(
    pixmap: &mut Pixmap,
    state: &WindowState,
    settings: &DecorationSettings,
    border_top: i32,
    color: Color,
) {
    if state.is_shaded {
        return;
    }

    let width = pixmap.width();
    let height = pixmap.height();
    let full = Rect::new(0.0, 0.0, width as f32, height as f32);
    let body_color = color.with_alpha(settings.title_bar_alpha as f32 / 255.0);

    let mask = if hide_title_bar(settings, state) {
        None
    } else {
        fill_mask_rect(
            width,
            height,
            Rect::new(
                0.0,
                border_top as f32,
                width as f32,
                (height as i32 - border_top) as f32,
            ),
        )
    };

    let mut paint = Paint::default();
    paint.set_color(body_color.to_skia());
    paint.anti_alias = true;

    let radius = if state.has_alpha_channel {
        FRAME_RADIUS
    } else {
        0.0
    };
    if let Some(path) = rounded_rect_path(full, radius) {
        pixmap.fill_path(
            &path,
            &paint,
            FillRule::Winding,
            Transform::identity(),
            mask.as_ref(),
        );
    }
}

fn title_bar_shader(
    settings: &DecorationSettings,
    color: Color,
    height: f32,
) -> Option<Shader<'static>> {
    let base = color.with_alpha(settings.title_bar_alpha as f32 / 255.0);
    let gradient_body = settings.draw_background_gradient && !settings.flat_title_bar;
    let intensity = if gradient_body {
        settings.background_gradient_intensity
    } else {
        0
    };
    let light = base.lighter(130 + intensity);
    let mid = if gradient_body {
        base.lighter(100 + intensity)
    } else {
        base
    };

    // A one-pixel light line along the top, then the body gradient.
    let stops = vec![
        GradientStop::new(0.0, light.to_skia()),
        GradientStop::new(0.99 / height, light.to_skia()),
        GradientStop::new(1.0 / height, mid.to_skia()),
        GradientStop::new(1.0, base.to_skia()),
    ];
    LinearGradient::new(
        tiny_skia::Point::from_xy(0.0, 0.0),
        tiny_skia::Point::from_xy(0.0, height),
        stops,
        SpreadMode::Pad,
        Transform::identity(),
    )
}

/// Paint the titlebar strip.
///
/// The strip covers the full window width down to the top border. Shape
/// follows the window state: plain rectangle when maximized or without
/// alpha, fully rounded when shaded, otherwise rounded only at the top
/// with corners flush to any adjacent screen edge squared off. The
/// optional separator line under the strip uses `foreground`.
pub fn paint_title_bar(
    pixmap: &mut Pixmap,
    state: &WindowState,
    settings: &DecorationSettings,
    scale: f32,
    border_top: i32,
    color: Color,
    foreground: Color,
) {
    if hide_title_bar(settings, state) {
        return;
    }

    let title_rect = Rect::new(0.0, 0.0, state.width as f32, border_top as f32);
    if title_rect.is_empty() {
        return;
    }

    let Some(shader) = title_bar_shader(settings, color, title_rect.height()) else {
        return;
    };
    let mut paint = Paint {
        shader,
        ..Paint::default()
    };
    paint.anti_alias = true;

    let radius = FRAME_RADIUS * scale;
    if state.is_maximized() || !state.has_alpha_channel {
        if let Some(rect) = tiny_skia::Rect::from_xywh(
            title_rect.left(),
            title_rect.top(),
            title_rect.width(),
            title_rect.height(),
        ) {
            pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    } else if state.is_shaded {
        if let Some(path) = rounded_rect_path(title_rect, radius) {
            pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    } else {
        // Oversize the rounded rect past any flush screen edge and past
        // the bottom, then clip back to the strip, so only the exposed
        // top corners stay rounded.
        let oversized = title_rect.adjusted(
            if state.left_edge { -radius } else { 0.0 },
            if state.top_edge { -radius } else { 0.0 },
            if state.right_edge { radius } else { 0.0 },
            radius,
        );
        let mask = fill_mask_rect(pixmap.width(), pixmap.height(), title_rect);
        if let Some(path) = rounded_rect_path(oversized, radius) {
            pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                Transform::identity(),
                mask.as_ref(),
            );
        }
    }

    if settings.draw_title_bar_separator && !state.is_shaded {
        let mut paint = Paint::default();
        paint.set_color(foreground.to_skia());
        if let Some(line) = tiny_skia::Rect::from_xywh(
            0.0,
            title_rect.bottom() - 1.0,
            title_rect.width(),
            1.0,
        ) {
            pixmap.fill_rect(line, &paint, Transform::identity(), None);
        }
    }
}

/// One-pixel frame outline for non-composited hosts.
///
/// Without an alpha channel there is no shadow to delimit the window, so
/// windows with visible borders get a hard single-pixel rectangle around
/// the full decoration instead.
pub fn paint_frame_outline(pixmap: &mut Pixmap, state: &WindowState, color: Color) {
    let mut paint = Paint::default();
    paint.set_color(color.to_skia());

    let width = state.width as f32;
    let height = state.height as f32;
    let edges = [
        Rect::new(0.0, 0.0, width, 1.0),
        Rect::new(0.0, height - 1.0, width, 1.0),
        Rect::new(0.0, 0.0, 1.0, height),
        Rect::new(width - 1.0, 0.0, 1.0, height),
    ];
    for edge in edges {
        if let Some(rect) = tiny_skia::Rect::from_xywh(
            edge.left(),
            edge.top(),
            edge.width(),
            edge.height(),
        ) {
            pixmap.fill_rect(rect, &paint, Transform::identity(), None);
        }
    }
}

/// A button glyph: a path in an 18x18 design box, stroked or filled.
struct Glyph {
    path: Option<tiny_skia::Path>,
    filled: bool,
}

/// Design-box size the glyph paths are authored in.
const GLYPH_BOX: f32 = 18.0;

fn glyph_for(kind: ButtonKind, maximized: bool) -> Glyph {
    use tiny_skia::PathBuilder;

    let mut pb = PathBuilder::new();
    let mut filled = false;
    match kind {
        ButtonKind::Close => {
            pb.move_to(5.0, 5.0);
            pb.line_to(13.0, 13.0);
            pb.move_to(13.0, 5.0);
            pb.line_to(5.0, 13.0);
        }
        ButtonKind::Maximize => {
            if maximized {
                // Restore: a diamond.
                pb.move_to(4.5, 9.0);
                pb.line_to(9.0, 4.5);
                pb.line_to(13.5, 9.0);
                pb.line_to(9.0, 13.5);
                pb.close();
            } else {
                pb.move_to(4.0, 11.0);
                pb.line_to(9.0, 6.0);
                pb.line_to(14.0, 11.0);
            }
        }
        ButtonKind::Minimize => {
            pb.move_to(4.0, 7.0);
            pb.line_to(9.0, 12.0);
            pb.line_to(14.0, 7.0);
        }
        ButtonKind::OnAllDesktops => {
            pb.push_circle(9.0, 9.0, 2.5);
            filled = true;
        }
        ButtonKind::Menu => {
            pb.move_to(3.5, 5.0);
            pb.line_to(14.5, 5.0);
            pb.move_to(3.5, 9.0);
            pb.line_to(14.5, 9.0);
            pb.move_to(3.5, 13.0);
            pb.line_to(14.5, 13.0);
        }
    }
    Glyph {
        path: pb.finish(),
        filled,
    }
}

/// Paint one button glyph into its laid-out rectangle.
///
/// The glyph is centered in the button's icon box, honoring the edge
/// padding offset computed by the layout pass.
pub fn paint_button(
    pixmap: &mut Pixmap,
    button: &ButtonGeometry,
    state: &WindowState,
    color: Color,
    scale: f32,
) {
    let maximized = state.is_maximized() && button.kind == ButtonKind::Maximize;
    let glyph = glyph_for(button.kind, maximized);
    let Some(path) = glyph.path else {
        return;
    };

    // Map the 18x18 design box onto the icon box, centered in the
    // clickable rect and shifted by the layout offset.
    let icon = button.icon_size;
    let origin = Point::new(
        button.rect.left() + (button.rect.width() - icon.width) / 2.0 + button.offset.x,
        button.rect.top() + (button.rect.height() - icon.height) / 2.0 + button.offset.y,
    );
    let transform = Transform::from_row(
        icon.width / GLYPH_BOX,
        0.0,
        0.0,
        icon.height / GLYPH_BOX,
        origin.x,
        origin.y,
    );

    let mut paint = Paint::default();
    paint.set_color(color.to_skia());
    paint.anti_alias = true;

    if glyph.filled {
        pixmap.fill_path(&path, &paint, FillRule::Winding, transform, None);
    } else {
        let stroke = Stroke {
            width: 1.1 * scale.max(1.0),
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, transform, None);
    }
}
