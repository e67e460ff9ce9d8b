use uuid::Uuid;

use crate::{
    assets::outfit::{PreparedImage, PreparedOutfit},
    closet::model::{GarmentCategory, OutfitSelection},
    closet::store::Closet,
    foundation::error::{FitroomError, FitroomResult},
    pose::detector::PoseDetector,
    pose::landmarks::PoseLandmarks,
    tryon::compositor::{self, FrameRGBA},
    tryon::placement::PlacementConfig,
};

/// One render output tagged with the session generation it was produced
/// under.
#[derive(Clone, Debug)]
pub struct RenderPass {
    generation: u64,
    frame: FrameRGBA,
}

impl RenderPass {
    /// Generation current when the pass started.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The composited frame.
    pub fn frame(&self) -> &FrameRGBA {
        &self.frame
    }
}

/// Stateful try-on pipeline: owns the pose-detector handle, the base image,
/// the cached landmark set and the current selection.
///
/// Detection runs once per base image; selection changes re-render from the
/// cached landmarks. Every state change bumps a generation counter, and
/// [`TryOnSession::commit`] drops passes whose generation went stale before
/// they finished, so a superseded render can never overwrite a newer one.
#[derive(Debug)]
pub struct TryOnSession<D: PoseDetector> {
    detector: D,
    base: Option<PreparedImage>,
    landmarks: Option<PoseLandmarks>,
    selection: OutfitSelection,
    generation: u64,
    last_frame: Option<FrameRGBA>,
}

impl<D: PoseDetector> TryOnSession<D> {
    /// Session owning `detector` for its whole lifetime.
    pub fn new(detector: D) -> Self {
        Self {
            detector,
            base: None,
            landmarks: None,
            selection: OutfitSelection::new(),
            generation: 0,
            last_frame: None,
        }
    }

    /// Install the base image and run detection on it once.
    #[tracing::instrument(skip_all, fields(base_w = base.width, base_h = base.height))]
    pub fn set_base(&mut self, base: PreparedImage) -> FitroomResult<()> {
        self.landmarks = self.detector.detect(&base)?;
        if self.landmarks.is_none() {
            tracing::debug!("no pose found in base image");
        }
        self.base = Some(base);
        self.generation += 1;
        Ok(())
    }

    /// Select an item, enforcing the one-piece exclusivity invariant.
    pub fn select(&mut self, category: GarmentCategory, id: Uuid) {
        self.selection.select(category, id);
        self.generation += 1;
    }

    /// Clear one selection slot.
    pub fn clear(&mut self, category: GarmentCategory) {
        self.selection.clear(category);
        self.generation += 1;
    }

    /// Clear every selection slot.
    pub fn clear_selection(&mut self) {
        self.selection.clear_all();
        self.generation += 1;
    }

    /// Current selection.
    pub fn selection(&self) -> &OutfitSelection {
        &self.selection
    }

    /// Cached landmark set from the last detection, if a pose was found.
    pub fn landmarks(&self) -> Option<&PoseLandmarks> {
        self.landmarks.as_ref()
    }

    /// Current generation; bumped by every base or selection change.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Run one render pass against the current state.
    ///
    /// Garment images are front-loaded from the closet before any drawing,
    /// and the output carries the generation for [`TryOnSession::commit`].
    #[tracing::instrument(skip_all, fields(generation = self.generation))]
    pub fn render_pass(
        &self,
        closet: &Closet,
        config: &PlacementConfig,
    ) -> FitroomResult<RenderPass> {
        let base = self
            .base
            .as_ref()
            .ok_or_else(|| FitroomError::render("no base image set"))?;
        let outfit = PreparedOutfit::prepare(closet, &self.selection)?;
        let frame = compositor::compose_outfit(base, self.landmarks.as_ref(), &outfit, config)?;
        Ok(RenderPass {
            generation: self.generation,
            frame,
        })
    }

    /// Publish a finished pass, unless the session state moved on while it
    /// was in flight.
    pub fn commit(&mut self, pass: RenderPass) -> Option<&FrameRGBA> {
        if pass.generation != self.generation {
            tracing::debug!(
                pass_generation = pass.generation,
                current_generation = self.generation,
                "discarding stale render pass"
            );
            return None;
        }
        self.last_frame = Some(pass.frame);
        self.last_frame.as_ref()
    }

    /// Most recently committed frame.
    pub fn last_frame(&self) -> Option<&FrameRGBA> {
        self.last_frame.as_ref()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tryon/session.rs"]
mod tests;
