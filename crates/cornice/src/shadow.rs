//! Composite shadow presets, texture synthesis, and the process-wide
//! shadow cache.
//!
//! A shadow texture is the sum of two blurred lobes: a tight, dark lobe
//! hugging the window and a wide, faint lobe providing ambient falloff.
//! After compositing the lobes, the region covered by the opaque window
//! is punched out of the texture and a one-pixel contact outline is drawn
//! along the punched edge.
//!
//! Textures are expensive to synthesize and identical for every window
//! sharing the same settings, so [`ShadowCache`] shares them process-wide
//! through weak handles: windows hold strong [`Arc`] references and the
//! cache drops an entry once the last window releases it.

use std::collections::HashMap;
use std::sync::{Arc, Weak};

use cornice_render::{
    BoxShadowRenderer, Color, IntPoint, IntSize, Margins, Point, Rect, RenderResult,
    rounded_rect_path,
};
use parking_lot::Mutex;
use tiny_skia::{BlendMode, FillRule, Paint, Pixmap, Stroke, Transform};

use crate::metrics::{FRAME_RADIUS, SHADOW_OVERLAP};
use crate::settings::{DecorationSettings, ShadowSize};

/// One blurred lobe of a composite shadow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadowLobe {
    /// Offset of this lobe relative to the composite center.
    pub offset: IntPoint,
    /// Blur radius in pixels.
    pub radius: i32,
    /// Opacity of this lobe before the strength multiplier.
    pub opacity: f32,
}

/// A complete two-lobe shadow description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeShadowSpec {
    /// Offset of the whole composite below the window.
    pub offset: IntPoint,
    /// Near lobe first, far lobe second.
    pub lobes: [ShadowLobe; 2],
}

impl CompositeShadowSpec {
    /// The disabled spec: no offset, no lobes.
    pub const NONE: Self = Self {
        offset: IntPoint::ZERO,
        lobes: [
            ShadowLobe {
                offset: IntPoint::ZERO,
                radius: 0,
                opacity: 0.0,
            },
            ShadowLobe {
                offset: IntPoint::ZERO,
                radius: 0,
                opacity: 0.0,
            },
        ],
    };

    /// Look up the preset for a size class.
    pub const fn for_size(size: ShadowSize) -> Self {
        match size {
            ShadowSize::None => Self::NONE,
            ShadowSize::Small => Self {
                offset: IntPoint::new(0, 4),
                lobes: [
                    ShadowLobe {
                        offset: IntPoint::ZERO,
                        radius: 16,
                        opacity: 1.0,
                    },
                    ShadowLobe {
                        offset: IntPoint::new(0, -2),
                        radius: 8,
                        opacity: 0.4,
                    },
                ],
            },
            ShadowSize::Medium => Self {
                offset: IntPoint::new(0, 8),
                lobes: [
                    ShadowLobe {
                        offset: IntPoint::ZERO,
                        radius: 32,
                        opacity: 0.9,
                    },
                    ShadowLobe {
                        offset: IntPoint::new(0, -4),
                        radius: 16,
                        opacity: 0.3,
                    },
                ],
            },
            ShadowSize::Large => Self {
                offset: IntPoint::new(0, 12),
                lobes: [
                    ShadowLobe {
                        offset: IntPoint::ZERO,
                        radius: 48,
                        opacity: 0.8,
                    },
                    ShadowLobe {
                        offset: IntPoint::new(0, -6),
                        radius: 24,
                        opacity: 0.2,
                    },
                ],
            },
            ShadowSize::VeryLarge => Self {
                offset: IntPoint::new(0, 16),
                lobes: [
                    ShadowLobe {
                        offset: IntPoint::ZERO,
                        radius: 64,
                        opacity: 0.7,
                    },
                    ShadowLobe {
                        offset: IntPoint::new(0, -8),
                        radius: 32,
                        opacity: 0.1,
                    },
                ],
            },
        }
    }

    /// Whether this spec draws nothing.
    #[inline]
    pub fn is_none(&self) -> bool {
        self.lobes[0].radius == 0 && self.lobes[1].radius == 0
    }

    /// Scale every radius and offset by a uniform factor.
    fn scaled(&self, scale: f32) -> Self {
        let scale_point =
            |p: IntPoint| IntPoint::new((p.x as f32 * scale) as i32, (p.y as f32 * scale) as i32);
        Self {
            offset: scale_point(self.offset),
            lobes: self.lobes.map(|lobe| ShadowLobe {
                offset: scale_point(lobe.offset),
                radius: (lobe.radius as f32 * scale) as i32,
                opacity: lobe.opacity,
            }),
        }
    }
}

/// A rendered shadow texture plus its placement metadata.
pub struct ShadowTexture {
    /// The composite shadow raster, hole already punched.
    pub pixmap: Pixmap,
    /// How far the texture extends beyond the window on each side.
    pub padding: Margins,
    /// One-pixel anchor at the texture center; the compositor stretches
    /// the texture's middle from this rectangle.
    pub inner_anchor: Rect,
}

impl std::fmt::Debug for ShadowTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShadowTexture")
            .field("width", &self.pixmap.width())
            .field("height", &self.pixmap.height())
            .field("padding", &self.padding)
            .field("inner_anchor", &self.inner_anchor)
            .finish()
    }
}

/// Synthesize a shadow texture for a spec at a given strength and scale.
///
/// `strength` multiplies each lobe's opacity and the contact outline's;
/// `scale` multiplies every radius and offset. The window region is
/// punched out of the result and ringed by a one-pixel outline so the
/// shadow visually meets the frame edge.
pub fn render_shadow_texture(
    spec: &CompositeShadowSpec,
    strength: f32,
    color: Color,
    scale: f32,
) -> RenderResult<ShadowTexture> {
    let spec = spec.scaled(scale);
    let [near, far] = spec.lobes;

    let box_size = BoxShadowRenderer::minimum_box_size(near.radius)
        .expanded_to(BoxShadowRenderer::minimum_box_size(far.radius));

    let mut renderer = BoxShadowRenderer::new();
    renderer.set_border_radius((FRAME_RADIUS + 0.5) * scale);
    renderer.set_box_size(box_size);
    renderer.add_shadow(near.offset, near.radius, color.with_alpha(near.opacity * strength));
    renderer.add_shadow(far.offset, far.radius, color.with_alpha(far.opacity * strength));
    let mut pixmap = renderer.render()?;

    let canvas_size = IntSize::new(pixmap.width() as i32, pixmap.height() as i32);
    let box_left = (canvas_size.width - box_size.width) / 2;
    let box_top = (canvas_size.height - box_size.height) / 2;

    // The padding is how far the texture reaches past each window edge:
    // the box-edge distance, tucked under by the overlap and shifted by
    // the composite offset.
    let padding = Margins::new(
        box_left - SHADOW_OVERLAP - spec.offset.x,
        box_top - SHADOW_OVERLAP - spec.offset.y,
        canvas_size.width - box_left - box_size.width - SHADOW_OVERLAP + spec.offset.x,
        canvas_size.height - box_top - box_size.height - SHADOW_OVERLAP + spec.offset.y,
    );

    // The window rect within the texture, as the compositor will place it.
    let inner_rect = Rect::new(
        padding.left as f32,
        padding.top as f32,
        (canvas_size.width - padding.left - padding.right) as f32,
        (canvas_size.height - padding.top - padding.bottom) as f32,
    );

    // Punch out the region the opaque window will cover. Slightly larger
    // than the frame radius so no shadow fringe peeks past the corners.
    if let Some(hole) = rounded_rect_path(inner_rect, (FRAME_RADIUS + 0.5) * scale) {
        let mut paint = Paint::default();
        paint.set_color(tiny_skia::Color::BLACK);
        paint.anti_alias = true;
        paint.blend_mode = BlendMode::DestinationOut;
        pixmap.fill_path(&hole, &paint, FillRule::Winding, Transform::identity(), None);
    }

    // One-pixel contact outline along the punched edge, slightly smaller
    // than the frame radius so it sits just inside the hole.
    if let Some(outline) = rounded_rect_path(inner_rect, (FRAME_RADIUS - 0.5) * scale) {
        let mut paint = Paint::default();
        paint.set_color(color.with_alpha(0.2 * strength).to_skia());
        paint.anti_alias = true;
        let stroke = Stroke {
            width: 1.0,
            ..Stroke::default()
        };
        pixmap.stroke_path(&outline, &paint, &stroke, Transform::identity(), None);
    }

    let center = Point::new(
        (canvas_size.width / 2) as f32,
        (canvas_size.height / 2) as f32,
    );
    let inner_anchor = Rect::new(center.x, center.y, 1.0, 1.0);

    Ok(ShadowTexture {
        pixmap,
        padding,
        inner_anchor,
    })
}

/// Everything a shadow texture's pixels depend on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct ShadowKey {
    size: ShadowSize,
    strength: u8,
    color: [u8; 4],
    scale_bits: u32,
}

impl ShadowKey {
    fn new(settings: &DecorationSettings, scale: f32) -> Self {
        Self {
            size: settings.shadow_size,
            strength: settings.shadow_strength,
            color: settings.shadow_color.to_rgba8(),
            scale_bits: scale.to_bits(),
        }
    }
}

/// Process-wide cache of rendered shadow textures.
///
/// Entries are held weakly: the cache never keeps a texture alive on its
/// own, and stale entries are pruned on the next insert.
#[derive(Debug, Default)]
pub struct ShadowCache {
    entries: Mutex<HashMap<ShadowKey, Weak<ShadowTexture>>>,
}

impl ShadowCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the texture for the given settings, rendering on a miss.
    ///
    /// Returns `Ok(None)` when the settings disable shadows entirely.
    pub fn get_or_render(
        &self,
        settings: &DecorationSettings,
        scale: f32,
    ) -> RenderResult<Option<Arc<ShadowTexture>>> {
        let spec = CompositeShadowSpec::for_size(settings.shadow_size);
        if spec.is_none() {
            return Ok(None);
        }

        let key = ShadowKey::new(settings, scale);
        let mut entries = self.entries.lock();
        if let Some(texture) = entries.get(&key).and_then(Weak::upgrade) {
            return Ok(Some(texture));
        }

        let strength = settings.shadow_strength as f32 / 255.0;
        let texture = Arc::new(render_shadow_texture(
            &spec,
            strength,
            settings.shadow_color,
            scale,
        )?);

        entries.retain(|_, weak| weak.strong_count() > 0);
        entries.insert(key, Arc::downgrade(&texture));
        tracing::debug!(
            entries = entries.len(),
            width = texture.pixmap.width(),
            height = texture.pixmap.height(),
            "rendered shadow texture"
        );

        Ok(Some(texture))
    }

    /// Number of live cache entries, including not-yet-pruned stale ones.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table() {
        let small = CompositeShadowSpec::for_size(ShadowSize::Small);
        assert_eq!(small.offset, IntPoint::new(0, 4));
        assert_eq!(small.lobes[0].radius, 16);
        assert_eq!(small.lobes[1].radius, 8);
        assert_eq!(small.lobes[1].offset, IntPoint::new(0, -2));

        let large = CompositeShadowSpec::for_size(ShadowSize::Large);
        assert_eq!(large.offset, IntPoint::new(0, 12));
        assert_eq!(large.lobes[0].radius, 48);
        assert!((large.lobes[0].opacity - 0.8).abs() < 1e-6);
        assert!((large.lobes[1].opacity - 0.2).abs() < 1e-6);

        assert!(CompositeShadowSpec::for_size(ShadowSize::None).is_none());
        assert!(!small.is_none());
    }

    #[test]
    fn test_scaled_spec() {
        let spec = CompositeShadowSpec::for_size(ShadowSize::Medium).scaled(2.0);
        assert_eq!(spec.offset, IntPoint::new(0, 16));
        assert_eq!(spec.lobes[0].radius, 64);
        assert_eq!(spec.lobes[1].offset, IntPoint::new(0, -8));
        // Opacity never scales.
        assert!((spec.lobes[0].opacity - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_texture_padding_follows_offset() {
        let spec = CompositeShadowSpec::for_size(ShadowSize::Large);
        let texture = render_shadow_texture(&spec, 1.0, Color::BLACK, 1.0).unwrap();
        // The composite is pushed downward, so the texture extends
        // farther below the window than above it.
        assert!(texture.padding.bottom > texture.padding.top);
        assert_eq!(texture.padding.left, texture.padding.right);
        assert!(texture.padding.left > 0);
    }

    #[test]
    fn test_texture_hole_is_punched() {
        let spec = CompositeShadowSpec::for_size(ShadowSize::Small);
        let texture = render_shadow_texture(&spec, 1.0, Color::BLACK, 1.0).unwrap();
        let inner = Rect::new(
            texture.padding.left as f32,
            texture.padding.top as f32,
            texture.pixmap.width() as f32
                - (texture.padding.left + texture.padding.right) as f32,
            texture.pixmap.height() as f32
                - (texture.padding.top + texture.padding.bottom) as f32,
        );
        // Every pixel inside the hole, inset past the rounded corners and
        // the one-pixel contact outline, must be fully transparent.
        let inset = 5;
        for y in (inner.top() as u32 + inset)..(inner.bottom() as u32 - inset) {
            for x in (inner.left() as u32 + inset)..(inner.right() as u32 - inset) {
                let pixel = texture.pixmap.pixel(x, y).unwrap();
                assert_eq!(pixel.alpha(), 0, "shadow leaked into the hole at ({x}, {y})");
            }
        }

        // Shadow remains outside the hole.
        let center = inner.center();
        let below = texture
            .pixmap
            .pixel(center.x as u32, (inner.bottom() + 4.0) as u32)
            .unwrap();
        assert!(below.alpha() > 0);
    }

    #[test]
    fn test_texture_inner_anchor_is_one_pixel() {
        let spec = CompositeShadowSpec::for_size(ShadowSize::Medium);
        let texture = render_shadow_texture(&spec, 0.5, Color::BLACK, 1.0).unwrap();
        assert_eq!(texture.inner_anchor.width(), 1.0);
        assert_eq!(texture.inner_anchor.height(), 1.0);
        let center = Rect::new(
            0.0,
            0.0,
            texture.pixmap.width() as f32,
            texture.pixmap.height() as f32,
        )
        .center();
        assert_eq!(texture.inner_anchor.left(), (center.x as i32) as f32);
    }

    #[test]
    fn test_cache_shares_texture() {
        let cache = ShadowCache::new();
        let settings = DecorationSettings::default();
        let a = cache.get_or_render(&settings, 1.0).unwrap().unwrap();
        let b = cache.get_or_render(&settings, 1.0).unwrap().unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_disabled_shadow() {
        let cache = ShadowCache::new();
        let mut settings = DecorationSettings::default();
        settings.shadow_size = ShadowSize::None;
        assert!(cache.get_or_render(&settings, 1.0).unwrap().is_none());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_cache_distinguishes_settings() {
        let cache = ShadowCache::new();
        let settings = DecorationSettings::default();
        let a = cache.get_or_render(&settings, 1.0).unwrap().unwrap();

        let mut stronger = settings.clone();
        stronger.shadow_strength = 128;
        let b = cache.get_or_render(&stronger, 1.0).unwrap().unwrap();
        assert!(!Arc::ptr_eq(&a, &b));

        let c = cache.get_or_render(&settings, 2.0).unwrap().unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
    }

    #[test]
    fn test_cache_prunes_dropped_textures() {
        let cache = ShadowCache::new();
        let settings = DecorationSettings::default();
        let texture = cache.get_or_render(&settings, 1.0).unwrap().unwrap();
        drop(texture);

        // The stale entry is swept on the next insert.
        let mut small = settings.clone();
        small.shadow_size = ShadowSize::Small;
        let _keep = cache.get_or_render(&small, 1.0).unwrap().unwrap();
        assert_eq!(cache.len(), 1);
    }
}
