use crate::*;

/// the drawer policy a scheduler instance is constructed around. it decides
/// which layers and priorities the instance accepts, resolves submissions to
/// the shader actually used, and writes uniform data when the scheduler asks
/// for it during the render and update walks.
pub trait MeshDrawer {
  fn is_layer_allowed(&self, layer: &str) -> bool;

  fn is_priority_allowed(&self, priority: i32) -> bool;

  /// resolve the shader use descriptor for a submission. the default policy
  /// takes the material's shader unmodified, shader replacement passes
  /// override this.
  fn resolve_shader_use(&self, submission: &DrawSubmission) -> Option<ShaderUse> {
    let material = submission.material.as_ref()?;
    material.shader().map(ShaderUse::new)
  }

  /// push constant values after a shader became newly bound
  fn use_constants(&self, shader_use: &ShaderUse);

  /// rebind sampler slots after a shader became newly bound
  fn use_samplers(&self, shader_use: &ShaderUse);

  /// write the shared (per shader, per pass) uniform block
  fn use_shared_uniforms(&self, shader_use: &ShaderUse);

  /// stage the per object uniform values for one mesh
  fn use_uniforms(&self, shader_use: &ShaderUse, mesh: &MeshPtr);
}
