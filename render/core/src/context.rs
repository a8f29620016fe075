use parking_lot::Mutex;

use crate::*;

/// opaque handle to a bound skeleton, owned by the animation system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonHandle(pub u64);

/// per frame binding slots shared by everything that renders inside the
/// frame. the scheduler publishes the shader it draws with and clears both
/// slots at the end of its update pass so no stale binding leaks into the
/// next subsystem that runs this frame.
#[derive(Default)]
pub struct FrameContext {
  current_shader: Mutex<Option<ShaderPtr>>,
  current_skeleton: Mutex<Option<SkeletonHandle>>,
}

impl FrameContext {
  pub fn set_current_shader(&self, shader: Option<ShaderPtr>) {
    *self.current_shader.lock() = shader;
  }

  pub fn current_shader(&self) -> Option<ShaderPtr> {
    self.current_shader.lock().clone()
  }

  pub fn set_current_skeleton(&self, skeleton: Option<SkeletonHandle>) {
    *self.current_skeleton.lock() = skeleton;
  }

  pub fn current_skeleton(&self) -> Option<SkeletonHandle> {
    *self.current_skeleton.lock()
  }
}
