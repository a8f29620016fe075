use std::sync::Arc;

use smallvec::SmallVec;

use crate::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderBindResult {
  /// the program is now bound and differs from what the backend had before,
  /// constants and samplers must be pushed again
  Bound,
  /// the program was already the backend's current one, the bind was a no-op
  Duplicated,
  Failed,
}

/// compiled shader program as the scheduler sees it. produced by the shading
/// language front end, resolved through materials, shared between many queue
/// entries.
pub trait ShaderProgram {
  fn uid(&self) -> ShaderUid;

  /// source path of the program, only used for diagnostics
  fn path(&self) -> &str;

  fn bind(&self) -> ShaderBindResult;
  fn unbind(&self);

  /// names of declared sampler slots that currently have no resource bound.
  /// an empty list means the program is ready to draw with.
  fn missing_samplers(&self) -> SmallVec<[String; 4]>;

  /// begin a scoped write of the shared (per shader, per pass) uniform
  /// block. false means the block could not be acquired this frame.
  fn begin_shared_ubo(&self) -> bool;
  fn end_shared_ubo(&self);

  /// submit the per object uniform values staged since the last bind
  fn flush(&self);
}

pub type ShaderPtr = Arc<dyn ShaderProgram>;

/// a shader program plus the binding context for one queue entry. many
/// entries share one of these, equality is by underlying program identity.
#[derive(Clone)]
pub struct ShaderUse {
  pub shader: ShaderPtr,
}

impl ShaderUse {
  pub fn new(shader: ShaderPtr) -> Self {
    Self { shader }
  }

  pub fn uid(&self) -> ShaderUid {
    self.shader.uid()
  }
}

impl PartialEq for ShaderUse {
  fn eq(&self, other: &Self) -> bool {
    self.uid() == other.uid()
  }
}
impl Eq for ShaderUse {}

pub trait Material {
  fn shader(&self) -> Option<ShaderPtr>;
}
