use std::sync::Arc;

use crate::*;

bitflags::bitflags! {
  /// per entry outcome of the last render/update walk
  #[derive(Debug, Clone, Copy, PartialEq, Eq)]
  pub struct EntryState: u32 {
    const OK = 1 << 0;
    /// entry could not be drawn, the shader/vbo bits refine the cause
    const ERROR = 1 << 1;
    const SHADER_ERROR = (1 << 2) | Self::ERROR.bits();
    const VBO_ERROR = (1 << 3) | Self::ERROR.bits();
    /// shared uniforms of this entry's shader were already pushed this frame
    const SHADER_UPDATED = 1 << 4;
    /// per object uniforms of this entry were already pushed this frame
    const VBO_UPDATED = 1 << 5;
  }
}

/// one registered draw, owned by exactly one layer queue of exactly one
/// scheduler instance. created on registration, mutated in place by the
/// render and update walks, removed on unregistration.
pub struct QueueEntry {
  pub mesh: MeshPtr,
  pub shader_use: Option<ShaderUse>,
  pub vbo: VboHandle,
  pub priority: i32,
  pub state: EntryState,
}

impl QueueEntry {
  pub fn shader_uid(&self) -> Option<ShaderUid> {
    self.shader_use.as_ref().map(|shader_use| shader_use.uid())
  }

  /// registration key equality: same mesh instance, same shader identity,
  /// same vertex buffer, same priority
  fn matches(&self, other: &QueueEntry) -> bool {
    Arc::ptr_eq(&self.mesh, &other.mesh)
      && self.shader_uid() == other.shader_uid()
      && self.vbo == other.vbo
      && self.priority == other.priority
  }
}

/// insertion ordered batch of entries for one layer. order is registration
/// order, not sorted by key, clustering is discovered by the linear scan.
#[derive(Default)]
pub struct LayerQueue {
  pub entries: Vec<QueueEntry>,
}

impl LayerQueue {
  pub fn add(&mut self, entry: QueueEntry) {
    self.entries.push(entry);
  }

  /// remove the first entry matching the reconstructed key, false on miss
  pub fn remove(&mut self, key: &QueueEntry) -> bool {
    match self.entries.iter().position(|entry| entry.matches(key)) {
      Some(index) => {
        self.entries.remove(index);
        true
      }
      None => false,
    }
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}
