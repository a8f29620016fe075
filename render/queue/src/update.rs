use crate::*;

impl RenderQueue {
  /// the update phase, a second walk decoupled from `render`. pushes the
  /// shared (per shader) uniform block once per shader run and the per
  /// object uniform values for every entry the render walk drew. no-op when
  /// the frame produced no output.
  pub fn update(&mut self) {
    if !self.rendered {
      return;
    }

    let mut queues = std::mem::take(&mut self.queues);
    for (_, queue) in &mut queues {
      self.update_layer(queue);
    }
    self.queues = queues;

    // the next subsystem running this frame must not observe our bindings
    self.context().set_current_shader(None);
    self.context().set_current_skeleton(None);
  }

  fn update_layer(&mut self, queue: &mut LayerQueue) {
    let mut current_shader: Option<ShaderUid> = None;

    let entries = &mut queue.entries;
    let mut index = 0;

    while index < entries.len() {
      // decisions below are made against the state as it was when this
      // iteration started, the marks written here only affect repeated
      // update calls within the same frame
      let state = entries[index].state;

      if state.is_empty() {
        // registered after the render walk, nothing was drawn for it yet
        index += 1;
        continue;
      }

      if state.contains(EntryState::ERROR) {
        if state.contains(EntryState::SHADER_ERROR) {
          index = skip_shader_run(entries, index);
        } else if state.contains(EntryState::VBO_ERROR) {
          index = skip_vbo_run(entries, index);
        } else {
          index += 1;
        }
        continue;
      }

      let Some(shader_use) = entries[index].shader_use.clone() else {
        index += 1;
        continue;
      };

      if current_shader != Some(shader_use.uid()) {
        current_shader = Some(shader_use.uid());
        if shader_use.shader.begin_shared_ubo() {
          self.drawer().use_shared_uniforms(&shader_use);
          entries[index].state |= EntryState::SHADER_UPDATED;
          shader_use.shader.end_shared_ubo();
        }
      }

      if state.contains(EntryState::SHADER_UPDATED) {
        index = skip_shader_run(entries, index);
        continue;
      }

      if state.contains(EntryState::VBO_UPDATED) {
        index = skip_vbo_run(entries, index);
        continue;
      }

      let mesh = entries[index].mesh.clone();

      let virtual_ubo = mesh.virtual_ubo();
      if !virtual_ubo.is_valid() {
        index += 1;
        continue;
      }

      self.drawer().use_uniforms(&shader_use, &mesh);
      entries[index].state |= EntryState::VBO_UPDATED | EntryState::SHADER_UPDATED;

      if self.ubo_binder().bind_ubo(virtual_ubo) == UboBindResult::Duplicated {
        log::error!(
          "RenderQueue::update: virtual ubo {:?} bound twice within one pass",
          virtual_ubo
        );
        self.errors.push(RenderError::DuplicatedUboBind { ubo: virtual_ubo });
        index += 1;
        continue;
      }

      shader_use.shader.flush();
      index += 1;
    }
  }
}
