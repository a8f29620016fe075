use std::sync::atomic::{AtomicU64, Ordering};

/// native vertex buffer handle. the backend hands these out, zero is a live
/// id, negative means not allocated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VboHandle(pub i32);

impl VboHandle {
  pub const INVALID: Self = VboHandle(-1);

  pub fn is_valid(&self) -> bool {
    self.0 >= 0
  }
}

/// indirection id resolved to a backend uniform buffer allocation at bind
/// time. meshes without a per object uniform allocation report INVALID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VirtualUboId(pub i32);

impl VirtualUboId {
  pub const INVALID: Self = VirtualUboId(-1);

  pub fn is_valid(&self) -> bool {
    self.0 >= 0
  }
}

/// stable identity of a compiled shader program. two shader uses bind the
/// same program exactly when their uids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderUid(pub u64);

/// identity of one scheduler instance. the mesh side back reference ledger
/// addresses schedulers by this instead of holding a reference to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderQueueId(u64);

impl RenderQueueId {
  pub fn next() -> Self {
    static NEXT: AtomicU64 = AtomicU64::new(0);
    RenderQueueId(NEXT.fetch_add(1, Ordering::Relaxed))
  }
}
