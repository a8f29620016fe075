use thiserror::Error;

use crate::*;

/// diagnostics collected by the scheduler while it walks its queues. none of
/// these abort the frame, the caller drains them after the pass.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
  #[error("shader samplers are not valid, path: {path}, missing: {samplers:?}")]
  MissingSamplers { path: String, samplers: Vec<String> },

  #[error("virtual ubo {ubo:?} bound twice within one update pass")]
  DuplicatedUboBind { ubo: VirtualUboId },
}
