use crate::{
    assets::outfit::{PreparedImage, PreparedOutfit},
    closet::model::GarmentCategory,
    foundation::core::Canvas,
    foundation::error::FitroomResult,
    pose::landmarks::PoseLandmarks,
    render::blit,
    tryon::placement::{self, PlacementConfig},
};

/// A composited output frame in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// Fully transparent frame of the given size.
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Pixel at `(x, y)`; out-of-range reads come back transparent.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        if x >= self.width || y >= self.height {
            return [0, 0, 0, 0];
        }
        let off = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[off],
            self.data[off + 1],
            self.data[off + 2],
            self.data[off + 3],
        ]
    }
}

/// Fixed draw order under the base layer: bottom first, then top. A
/// one-piece replaces both.
const LAYER_ORDER: [GarmentCategory; 2] = [GarmentCategory::Bottom, GarmentCategory::Top];

/// Composite one frame: base image, then garments placed from landmarks.
///
/// The canvas takes the base image's natural dimensions. Without landmarks
/// only the base is drawn. Garments whose required landmarks are absent are
/// skipped silently; garment draw order is fixed and independent of how the
/// outfit was prepared.
#[tracing::instrument(skip_all, fields(base_w = base.width, base_h = base.height))]
pub fn compose_outfit(
    base: &PreparedImage,
    landmarks: Option<&PoseLandmarks>,
    outfit: &PreparedOutfit,
    config: &PlacementConfig,
) -> FitroomResult<FrameRGBA> {
    config.validate()?;

    let canvas = Canvas {
        width: base.width,
        height: base.height,
    };
    let mut frame = FrameRGBA::transparent(canvas.width, canvas.height);
    blit::blit_full(&mut frame, base);

    let Some(landmarks) = landmarks else {
        tracing::debug!("no landmarks, base-only frame");
        return Ok(frame);
    };

    // A selected one-piece supersedes the separate layers entirely.
    if outfit.get(GarmentCategory::OnePiece).is_some() {
        draw_garment(&mut frame, canvas, landmarks, outfit, GarmentCategory::OnePiece, config);
        return Ok(frame);
    }
    for category in LAYER_ORDER {
        draw_garment(&mut frame, canvas, landmarks, outfit, category, config);
    }

    Ok(frame)
}

fn draw_garment(
    frame: &mut FrameRGBA,
    canvas: Canvas,
    landmarks: &PoseLandmarks,
    outfit: &PreparedOutfit,
    category: GarmentCategory,
    config: &PlacementConfig,
) {
    let Some(image) = outfit.get(category) else {
        return;
    };
    match placement::garment_placement(category, landmarks, canvas, image.aspect_ratio(), config)
    {
        Some(placement) => blit::blit_scaled(frame, image, placement.rect),
        None => tracing::debug!(%category, "skipping garment, required landmarks absent"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tryon/compositor.rs"]
mod tests;
