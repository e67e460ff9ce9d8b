//! Fitroom is a virtual try-on compositing engine.
//!
//! Given a body image (photograph or SVG silhouette), a pose landmark set
//! and up to two selected garments, fitroom produces a composited frame
//! (`FrameRGBA`) with each garment scaled and positioned from the body's
//! detected proportions.
//!
//! # Pipeline overview
//!
//! 1. **Detect**: a [`PoseDetector`] maps the base image to normalized
//!    landmarks, once per base image (`TryOnSession::set_base`)
//! 2. **Prepare**: every selected garment image is loaded and decoded
//!    up-front ([`PreparedOutfit::prepare`]) so later stages do no IO
//! 3. **Place**: landmarks + canvas + garment aspect produce deterministic
//!    draw rectangles per category ([`garment_placement`])
//! 4. **Compose**: base layer, then garments in a fixed z-order
//!    ([`compose_outfit`] -> [`FrameRGBA`])
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: placement and compositing are pure and
//!   stable for a given input; detection results are cached per base image.
//! - **No IO in the compositor**: all file reads are front-loaded into
//!   [`PreparedOutfit`] and the base [`PreparedImage`].
//! - **Premultiplied RGBA8** end-to-end.
//!
//! Around the pipeline, [`SessionGate`] wraps the remote identity API
//! (login/register/logout/current-user over a cookie session) and
//! [`Closet`] holds the transient garment collection and saved outfits.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod closet;
mod foundation;
mod pose;
mod render;
mod session;
mod tryon;

pub use assets::decode::{decode_image, load_base_image, rasterize_svg};
pub use assets::outfit::{PreparedImage, PreparedOutfit};
pub use closet::model::{
    ClothingItem, GarmentCategory, OutfitSelection, SavedOutfit, User,
};
pub use closet::store::Closet;
pub use foundation::core::{Canvas, Point, Rect, Rgba8Premul, Vec2};
pub use foundation::error::{FitroomError, FitroomResult};
pub use pose::detector::{FixedPoseDetector, LandmarkFileDetector, PoseDetector};
pub use pose::landmarks::{Landmark, PoseLandmarks, index as landmark_index};
pub use render::blit::{blit_full, blit_scaled, over};
pub use session::gate::{
    AuthApi, Credentials, Registration, RouteAccess, RouteDecision, SessionGate, route_decision,
};
pub use session::http::HttpAuthApi;
pub use tryon::compositor::{FrameRGBA, compose_outfit};
pub use tryon::placement::{GarmentPlacement, PlacementConfig, garment_placement};
pub use tryon::session::{RenderPass, TryOnSession};
