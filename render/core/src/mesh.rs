use std::sync::Arc;

use crate::*;

/// drawable mesh as the scheduler sees it. asset loading, vertex data and the
/// actual backend submission all live outside, the scheduler only probes
/// state, binds and draws.
pub trait DrawableMesh {
  fn is_active(&self) -> bool;

  fn vbo(&self) -> VboHandle;

  /// bind the mesh vertex (and index) buffers on the backend
  fn bind_vbo(&self) -> bool;

  fn draw(&self);

  fn virtual_ubo(&self) -> VirtualUboId;

  fn back_references(&self) -> &BackReferenceLedger;
}

pub type MeshPtr = Arc<dyn DrawableMesh>;
