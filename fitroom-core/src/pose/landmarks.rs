use crate::foundation::error::{FitroomError, FitroomResult};

/// Fixed anatomical landmark indices used by the detection capability.
///
/// The numbering follows the 33-point full-body convention: only the indices
/// the placement formulas consume are named here.
pub mod index {
    /// Left shoulder.
    pub const LEFT_SHOULDER: usize = 11;
    /// Right shoulder.
    pub const RIGHT_SHOULDER: usize = 12;
    /// Left hip.
    pub const LEFT_HIP: usize = 23;
    /// Right hip.
    pub const RIGHT_HIP: usize = 24;
    /// Left knee.
    pub const LEFT_KNEE: usize = 25;
    /// Right knee.
    pub const RIGHT_KNEE: usize = 26;
    /// Left ankle.
    pub const LEFT_ANKLE: usize = 27;
    /// Right ankle.
    pub const RIGHT_ANKLE: usize = 28;
}

/// A normalized 2D body-joint coordinate in `[0, 1]` canvas space.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Landmark {
    /// Normalized horizontal position.
    pub x: f64,
    /// Normalized vertical position.
    pub y: f64,
}

impl Landmark {
    /// Construct a landmark from normalized coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A fixed-index landmark sequence produced by one detection call.
///
/// The wire form is a JSON array of nullable `{x, y}` objects; entries the
/// estimator could not resolve are `null` and read back as absent.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct PoseLandmarks {
    points: Vec<Option<Landmark>>,
}

impl PoseLandmarks {
    /// Wrap a fixed-index point sequence.
    pub fn from_points(points: Vec<Option<Landmark>>) -> Self {
        Self { points }
    }

    /// Parse the JSON wire form and validate coordinates.
    pub fn from_json(bytes: &[u8]) -> FitroomResult<Self> {
        let parsed: Self = serde_json::from_slice(bytes)
            .map_err(|e| FitroomError::serde(format!("parse landmark json: {e}")))?;
        parsed.validate()?;
        Ok(parsed)
    }

    /// Set the point at `index`, growing the sequence as needed.
    pub fn set_point(&mut self, index: usize, point: Option<Landmark>) {
        if self.points.len() <= index {
            self.points.resize(index + 1, None);
        }
        self.points[index] = point;
    }

    /// Landmark at `index`; absent entries and out-of-range indices are `None`.
    pub fn get(&self, index: usize) -> Option<Landmark> {
        self.points.get(index).copied().flatten()
    }

    /// Number of slots in the sequence (absent entries included).
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// `true` when the sequence has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Reject non-finite coordinates.
    pub fn validate(&self) -> FitroomResult<()> {
        for (i, point) in self.points.iter().enumerate() {
            if let Some(p) = point
                && (!p.x.is_finite() || !p.y.is_finite())
            {
                return Err(FitroomError::pose(format!(
                    "landmark {i} has non-finite coordinates"
                )));
            }
        }
        Ok(())
    }

    /// Left shoulder, if detected.
    pub fn left_shoulder(&self) -> Option<Landmark> {
        self.get(index::LEFT_SHOULDER)
    }

    /// Right shoulder, if detected.
    pub fn right_shoulder(&self) -> Option<Landmark> {
        self.get(index::RIGHT_SHOULDER)
    }

    /// Left hip, if detected.
    pub fn left_hip(&self) -> Option<Landmark> {
        self.get(index::LEFT_HIP)
    }

    /// Right hip, if detected.
    pub fn right_hip(&self) -> Option<Landmark> {
        self.get(index::RIGHT_HIP)
    }

    /// Left knee, if detected.
    pub fn left_knee(&self) -> Option<Landmark> {
        self.get(index::LEFT_KNEE)
    }

    /// Right knee, if detected.
    pub fn right_knee(&self) -> Option<Landmark> {
        self.get(index::RIGHT_KNEE)
    }

    /// Left ankle, if detected.
    pub fn left_ankle(&self) -> Option<Landmark> {
        self.get(index::LEFT_ANKLE)
    }

    /// Right ankle, if detected.
    pub fn right_ankle(&self) -> Option<Landmark> {
        self.get(index::RIGHT_ANKLE)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pose/landmarks.rs"]
mod tests;
