use kurbo::Rect;

use crate::{
    closet::model::GarmentCategory,
    foundation::core::Canvas,
    foundation::error::{FitroomError, FitroomResult},
    pose::landmarks::PoseLandmarks,
};

/// Tuning surface for the placement formulas.
///
/// Defaults are the production values: scale factors widen or lengthen the
/// measured body span so garments overhang the silhouette naturally, and the
/// offset fractions lift the draw origin above its anchor line (shoulder
/// seam above the shoulder landmark, waistband above the hip landmark).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Width multiplier applied to the measured torso width.
    pub top_scale: f64,
    /// Fraction of torso height the top is lifted above the shoulder line.
    pub top_y_offset_frac: f64,
    /// Height multiplier applied to the measured hip-to-ankle span.
    pub bottom_scale: f64,
    /// Fraction of leg height the bottom is lifted above the hip line.
    pub bottom_y_offset_frac: f64,
    /// Height multiplier applied to the measured shoulder-to-ankle span.
    pub one_piece_scale: f64,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            top_scale: 1.7,
            top_y_offset_frac: 0.15,
            bottom_scale: 1.0,
            bottom_y_offset_frac: 0.05,
            one_piece_scale: 1.1,
        }
    }
}

impl PlacementConfig {
    /// Parse a configuration from JSON, falling back to defaults for
    /// missing fields.
    pub fn from_json(bytes: &[u8]) -> FitroomResult<Self> {
        let config: Self = serde_json::from_slice(bytes)
            .map_err(|e| FitroomError::serde(format!("parse placement config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject non-finite, non-positive scales and negative offsets.
    pub fn validate(&self) -> FitroomResult<()> {
        for (name, value) in [
            ("top_scale", self.top_scale),
            ("bottom_scale", self.bottom_scale),
            ("one_piece_scale", self.one_piece_scale),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(FitroomError::validation(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("top_y_offset_frac", self.top_y_offset_frac),
            ("bottom_y_offset_frac", self.bottom_y_offset_frac),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(FitroomError::validation(format!(
                    "{name} must be finite and >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Resolved draw rectangle for one garment.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GarmentPlacement {
    /// Category the rectangle was computed for.
    pub category: GarmentCategory,
    /// Draw rectangle in canvas pixel space.
    pub rect: Rect,
}

/// Compute the draw rectangle for a garment of intrinsic aspect ratio
/// `garment_aspect` (width / height).
///
/// Returns `None` when any landmark the category requires is absent or the
/// aspect ratio is unusable; the garment is then omitted from the draw with
/// no error. Same landmarks, canvas, aspect and config always produce the
/// same rectangle.
pub fn garment_placement(
    category: GarmentCategory,
    landmarks: &PoseLandmarks,
    canvas: Canvas,
    garment_aspect: f64,
    config: &PlacementConfig,
) -> Option<GarmentPlacement> {
    if !garment_aspect.is_finite() || garment_aspect <= 0.0 {
        return None;
    }
    let rect = match category {
        GarmentCategory::Top => place_top(landmarks, canvas, garment_aspect, config)?,
        GarmentCategory::Bottom => place_bottom(landmarks, canvas, garment_aspect, config)?,
        GarmentCategory::OnePiece => place_one_piece(landmarks, canvas, garment_aspect, config)?,
    };
    Some(GarmentPlacement { category, rect })
}

fn place_top(
    landmarks: &PoseLandmarks,
    canvas: Canvas,
    aspect: f64,
    config: &PlacementConfig,
) -> Option<Rect> {
    let left_shoulder = landmarks.left_shoulder()?;
    let right_shoulder = landmarks.right_shoulder()?;
    let left_hip = landmarks.left_hip()?;
    landmarks.right_hip()?;

    let torso_width = (right_shoulder.x - left_shoulder.x).abs() * canvas.width_f64();
    let torso_height = (left_hip.y - left_shoulder.y).abs() * canvas.height_f64();
    let center_x = ((left_shoulder.x + right_shoulder.x) / 2.0) * canvas.width_f64();
    let top_y = left_shoulder.y * canvas.height_f64();

    let width = torso_width * config.top_scale;
    let height = width / aspect;
    let y = top_y - torso_height * config.top_y_offset_frac;

    Some(rect_at(center_x, y, width, height))
}

fn place_bottom(
    landmarks: &PoseLandmarks,
    canvas: Canvas,
    aspect: f64,
    config: &PlacementConfig,
) -> Option<Rect> {
    let left_hip = landmarks.left_hip()?;
    let right_hip = landmarks.right_hip()?;
    let left_ankle = landmarks.left_ankle()?;
    landmarks.right_ankle()?;

    let leg_height = (left_ankle.y - left_hip.y).abs() * canvas.height_f64();
    let center_x = ((left_hip.x + right_hip.x) / 2.0) * canvas.width_f64();
    let top_y = left_hip.y * canvas.height_f64();

    let height = leg_height * config.bottom_scale;
    let width = height * aspect;
    let y = top_y - leg_height * config.bottom_y_offset_frac;

    Some(rect_at(center_x, y, width, height))
}

fn place_one_piece(
    landmarks: &PoseLandmarks,
    canvas: Canvas,
    aspect: f64,
    config: &PlacementConfig,
) -> Option<Rect> {
    let left_shoulder = landmarks.left_shoulder()?;
    let right_shoulder = landmarks.right_shoulder()?;
    let left_ankle = landmarks.left_ankle()?;
    landmarks.right_ankle()?;

    let body_height = (left_ankle.y - left_shoulder.y).abs() * canvas.height_f64();
    let center_x = ((left_shoulder.x + right_shoulder.x) / 2.0) * canvas.width_f64();
    let top_y = left_shoulder.y * canvas.height_f64();

    let height = body_height * config.one_piece_scale;
    let width = height * aspect;

    Some(rect_at(center_x, top_y, width, height))
}

fn rect_at(center_x: f64, y: f64, width: f64, height: f64) -> Rect {
    let x = center_x - width / 2.0;
    Rect::new(x, y, x + width, y + height)
}

#[cfg(test)]
#[path = "../../tests/unit/tryon/placement.rs"]
mod tests;
