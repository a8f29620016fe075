use parking_lot::Mutex;

use crate::*;

/// one consumer currently tracking a mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BackReference {
  pub queue: RenderQueueId,
  pub shader: Option<ShaderUid>,
}

/// reverse index kept on each drawable mesh: every (scheduler, shader use)
/// pair the mesh is currently registered with, counted per pair. lets the
/// mesh pull itself out of all schedulers on destruction without any of them
/// scanning their queues. the relation is non owning in both directions.
#[derive(Default)]
pub struct BackReferenceLedger {
  entries: Mutex<FastHashMap<BackReference, u32>>,
}

impl BackReferenceLedger {
  pub fn add(&self, reference: BackReference) {
    *self.entries.lock().entry(reference).or_insert(0) += 1;
  }

  /// drop one occurrence, false if the reference was not present
  pub fn remove(&self, reference: BackReference) -> bool {
    let mut entries = self.entries.lock();
    match entries.get_mut(&reference) {
      Some(count) if *count > 1 => {
        *count -= 1;
        true
      }
      Some(_) => {
        entries.remove(&reference);
        true
      }
      None => false,
    }
  }

  pub fn count(&self, reference: BackReference) -> u32 {
    self.entries.lock().get(&reference).copied().unwrap_or(0)
  }

  pub fn total(&self) -> u32 {
    self.entries.lock().values().sum()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.lock().is_empty()
  }
}
