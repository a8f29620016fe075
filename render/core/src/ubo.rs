use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UboBindResult {
  Bound,
  /// the slot resolves to memory another consumer already bound this frame
  Duplicated,
}

/// the descriptor set / uniform buffer allocator. resolves virtual ids to
/// backend allocations at bind time.
pub trait UboBinder {
  fn bind_ubo(&self, id: VirtualUboId) -> UboBindResult;
}
