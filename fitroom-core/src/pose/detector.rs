use std::path::PathBuf;

use anyhow::Context;

use crate::{
    assets::outfit::PreparedImage,
    foundation::error::FitroomResult,
    pose::landmarks::PoseLandmarks,
};

/// The pose-detection capability, treated as a black box.
///
/// Implementations are owned, lifecycle-scoped handles: construct one with
/// the session that uses it and let it drop when the session ends. `Ok(None)`
/// means the detector ran and found no pose in the image.
pub trait PoseDetector {
    /// Detect body landmarks in `image`.
    fn detect(&mut self, image: &PreparedImage) -> FitroomResult<Option<PoseLandmarks>>;
}

/// Detector backed by a landmark JSON sidecar written by an external
/// estimator run.
///
/// A missing sidecar file is treated as "no pose found" rather than an error,
/// so a base image without precomputed landmarks still renders base-only.
#[derive(Clone, Debug)]
pub struct LandmarkFileDetector {
    path: PathBuf,
}

impl LandmarkFileDetector {
    /// Detector reading landmark sets from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sidecar path this detector reads from.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl PoseDetector for LandmarkFileDetector {
    fn detect(&mut self, _image: &PreparedImage) -> FitroomResult<Option<PoseLandmarks>> {
        if !self.path.is_file() {
            return Ok(None);
        }
        let bytes = std::fs::read(&self.path)
            .with_context(|| format!("read landmark file '{}'", self.path.display()))?;
        Ok(Some(PoseLandmarks::from_json(&bytes)?))
    }
}

/// Detector that always returns a preset landmark set.
///
/// Useful when landmarks are produced programmatically instead of read from
/// an estimator run.
#[derive(Clone, Debug, Default)]
pub struct FixedPoseDetector {
    landmarks: Option<PoseLandmarks>,
}

impl FixedPoseDetector {
    /// Detector returning `landmarks` for every image.
    pub fn new(landmarks: Option<PoseLandmarks>) -> Self {
        Self { landmarks }
    }
}

impl PoseDetector for FixedPoseDetector {
    fn detect(&mut self, _image: &PreparedImage) -> FitroomResult<Option<PoseLandmarks>> {
        Ok(self.landmarks.clone())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/pose/detector.rs"]
mod tests;
