//! Composite box-shadow rasterization.
//!
//! [`BoxShadowRenderer`] synthesizes a drop shadow for a rounded box as a
//! premultiplied-alpha pixmap. Each added shadow layer is rasterized as a
//! blurred rounded rectangle and composited onto a shared canvas sized to
//! contain every layer's blur falloff plus its offset. The caller is
//! responsible for masking out the region covered by the opaque window.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, PixmapPaint, Transform};

use crate::blur::{blur_extent, blur_radius_for_std_dev, blur_std_dev, box_blur_alpha};
use crate::error::{RenderError, RenderResult};
use crate::types::{Color, IntPoint, IntSize, Rect};

/// Circle-to-cubic control point distance for a quarter arc.
const ARC_CONTROL: f32 = 0.552_284_8;

/// Build a rounded-rectangle path with a uniform corner radius.
///
/// The radius is clamped to half the shorter side. Returns `None` for a
/// degenerate rectangle.
pub fn rounded_rect_path(rect: Rect, radius: f32) -> Option<tiny_skia::Path> {
    if rect.is_empty() {
        return None;
    }
    let r = radius
        .max(0.0)
        .min(rect.width() / 2.0)
        .min(rect.height() / 2.0);
    let (left, top, right, bottom) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    if r <= 0.0 {
        pb.push_rect(tiny_skia::Rect::from_ltrb(left, top, right, bottom)?);
        return pb.finish();
    }

    let k = r * ARC_CONTROL;
    pb.move_to(left + r, top);
    pb.line_to(right - r, top);
    pb.cubic_to(right - r + k, top, right, top + r - k, right, top + r);
    pb.line_to(right, bottom - r);
    pb.cubic_to(right, bottom - r + k, right - r + k, bottom, right - r, bottom);
    pb.line_to(left + r, bottom);
    pb.cubic_to(left + r - k, bottom, left, bottom - r + k, left, bottom - r);
    pb.line_to(left, top + r);
    pb.cubic_to(left, top + r - k, left + r - k, top, left + r, top);
    pb.close();
    pb.finish()
}

/// One shadow layer: a blurred rounded rectangle.
#[derive(Debug, Clone, Copy)]
struct Shadow {
    offset: IntPoint,
    radius: i32,
    color: Color,
}

/// Renders one or more blurred rounded-rectangle layers into a single
/// shadow texture.
///
/// # Example
///
/// ```ignore
/// let box_size = BoxShadowRenderer::minimum_box_size(48)
///     .expanded_to(BoxShadowRenderer::minimum_box_size(24));
///
/// let mut renderer = BoxShadowRenderer::new();
/// renderer.set_border_radius(3.5);
/// renderer.set_box_size(box_size);
/// renderer.add_shadow(IntPoint::new(0, 0), 48, near_color);
/// renderer.add_shadow(IntPoint::new(0, -6), 24, far_color);
/// let texture = renderer.render()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BoxShadowRenderer {
    border_radius: f32,
    box_size: IntSize,
    shadows: Vec<Shadow>,
}

impl BoxShadowRenderer {
    /// Create a renderer with no shadows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the corner radius of the box casting the shadows.
    pub fn set_border_radius(&mut self, radius: f32) {
        self.border_radius = radius.max(0.0);
    }

    /// Set the size of the box casting the shadows.
    pub fn set_box_size(&mut self, size: IntSize) {
        self.box_size = size;
    }

    /// Add a shadow layer.
    ///
    /// `radius` is the blur radius in pixels; `color` carries the layer's
    /// opacity in its alpha channel.
    pub fn add_shadow(&mut self, offset: IntPoint, radius: i32, color: Color) {
        self.shadows.push(Shadow {
            offset,
            radius,
            color,
        });
    }

    /// Minimum box size whose blurred edges do not bleed into each other
    /// for the given blur radius.
    pub fn minimum_box_size(radius: i32) -> IntSize {
        let extent = blur_extent(radius);
        IntSize::new(2 * extent.width + 1, 2 * extent.height + 1)
    }

    /// Minimum texture size that contains a box of `box_size` blurred by
    /// `radius` and shifted by `offset`.
    pub fn minimum_texture_size(box_size: IntSize, radius: i32, offset: IntPoint) -> IntSize {
        let extent = blur_extent(radius);
        IntSize::new(
            box_size.width + 2 * extent.width + offset.x.abs(),
            box_size.height + 2 * extent.height + offset.y.abs(),
        )
    }

    /// Rasterize all shadow layers into one premultiplied-alpha pixmap.
    ///
    /// The box is centered in the canvas; each layer is drawn centered at
    /// the box center plus its own offset. Deterministic for identical
    /// inputs.
    pub fn render(&self) -> RenderResult<Pixmap> {
        if self.box_size.is_empty() {
            return Err(RenderError::EmptyBoxSize);
        }

        let mut canvas_size = IntSize::ZERO;
        for shadow in &self.shadows {
            canvas_size = canvas_size.expanded_to(Self::minimum_texture_size(
                self.box_size,
                shadow.radius,
                shadow.offset,
            ));
        }

        tracing::debug!(
            width = canvas_size.width,
            height = canvas_size.height,
            layers = self.shadows.len(),
            "rendering shadow canvas"
        );

        let mut canvas = new_pixmap(canvas_size)?;
        let box_origin = IntPoint::new(
            (canvas_size.width - self.box_size.width) / 2,
            (canvas_size.height - self.box_size.height) / 2,
        );

        for shadow in &self.shadows {
            self.render_shadow(&mut canvas, box_origin, shadow)?;
        }

        Ok(canvas)
    }

    fn render_shadow(
        &self,
        canvas: &mut Pixmap,
        box_origin: IntPoint,
        shadow: &Shadow,
    ) -> RenderResult<()> {
        let extent = blur_extent(shadow.radius);
        let size = IntSize::new(
            self.box_size.width + 2 * extent.width,
            self.box_size.height + 2 * extent.height,
        );
        let mut scratch = new_pixmap(size)?;

        // Coverage of the sharp rounded box, centered in the scratch
        // pixmap with room for the blur on every side.
        let box_rect = Rect::new(
            extent.width as f32,
            extent.height as f32,
            self.box_size.width as f32,
            self.box_size.height as f32,
        );
        if let Some(path) = rounded_rect_path(box_rect, self.border_radius) {
            let mut paint = Paint::default();
            paint.set_color(tiny_skia::Color::WHITE);
            paint.anti_alias = true;
            scratch.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }

        let width = size.width as usize;
        let height = size.height as usize;
        let mut plane: Vec<u8> = scratch.pixels().iter().map(|p| p.alpha()).collect();
        box_blur_alpha(
            &mut plane,
            width,
            height,
            blur_radius_for_std_dev(blur_std_dev(shadow.radius)),
        );

        tint(&mut scratch, &plane, shadow.color);

        // Center the blurred layer at the box center shifted by the
        // layer's offset.
        let dst_x = box_origin.x + self.box_size.width / 2 + shadow.offset.x - size.width / 2;
        let dst_y = box_origin.y + self.box_size.height / 2 + shadow.offset.y - size.height / 2;
        canvas.draw_pixmap(
            dst_x,
            dst_y,
            scratch.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );

        Ok(())
    }
}

fn new_pixmap(size: IntSize) -> RenderResult<Pixmap> {
    if size.is_empty() {
        return Err(RenderError::InvalidDimensions {
            width: size.width,
            height: size.height,
        });
    }
    Pixmap::new(size.width as u32, size.height as u32).ok_or(RenderError::InvalidDimensions {
        width: size.width,
        height: size.height,
    })
}

/// Replace a pixmap's contents with `color` modulated by a coverage plane.
fn tint(pixmap: &mut Pixmap, plane: &[u8], color: Color) {
    let data = pixmap.data_mut();
    debug_assert_eq!(data.len(), plane.len() * 4);
    for (pixel, &coverage) in data.chunks_exact_mut(4).zip(plane) {
        let c = coverage as f32 / 255.0;
        let a = (color.a * c * 255.0 + 0.5) as u8;
        // Premultiplied channels can never exceed alpha.
        pixel[0] = ((color.r * c * 255.0 + 0.5) as u8).min(a);
        pixel[1] = ((color.g * c * 255.0 + 0.5) as u8).min(a);
        pixel[2] = ((color.b * c * 255.0 + 0.5) as u8).min(a);
        pixel[3] = a;
    }
}
