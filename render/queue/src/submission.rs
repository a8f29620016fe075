use std::sync::Arc;

use crate::*;

/// a single "draw this mesh with this material on this layer" request from
/// scene logic. consumed by `RenderQueue::register`, never retained.
#[derive(Clone)]
pub struct DrawSubmission {
  pub mesh: MeshPtr,
  pub material: Option<Arc<dyn Material>>,
  pub layer: String,
  /// submission order hint inside the layer, checked against the drawer's
  /// allowed range at admission. entries registered without one get 0.
  pub priority: Option<i32>,
}
