use crate::*;

impl RenderQueue {
  /// the render phase. walks every layer queue once in layer order, clusters
  /// consecutive entries sharing a shader program and vertex buffer, binds
  /// state only on cluster boundaries and issues one draw call per live
  /// entry. returns true if at least one draw call was issued this frame.
  pub fn render(&mut self) -> bool {
    self.prepare_layers();

    self.rendered = false;

    let mut queues = std::mem::take(&mut self.queues);
    for (_, queue) in &mut queues {
      self.render_layer(queue);
    }
    self.queues = queues;

    self.rendered
  }

  fn render_layer(&mut self, queue: &mut LayerQueue) {
    let mut current_shader: Option<ShaderUse> = None;
    let mut current_vbo: Option<VboHandle> = None;
    let mut shader_ok = false;

    let entries = &mut queue.entries;
    let mut index = 0;

    while index < entries.len() {
      let shader_use = entries[index].shader_use.clone();
      let vbo = entries[index].vbo;
      let mesh = entries[index].mesh.clone();

      let Some(shader_use) = shader_use else {
        entries[index].state = EntryState::ERROR;
        index += 1;
        continue;
      };

      if !vbo.is_valid() || !mesh.is_active() {
        entries[index].state = EntryState::ERROR;
        index += 1;
        continue;
      }

      if current_shader.as_ref().map(ShaderUse::uid) != Some(shader_use.uid()) {
        current_shader = Some(shader_use.clone());
        shader_ok = self.use_shader(&shader_use);
        if !shader_ok {
          // the whole contiguous run of this shader is failed, without a
          // second bind attempt
          let next = skip_shader_run(entries, index);
          for entry in &mut entries[index..next] {
            entry.state = EntryState::SHADER_ERROR;
          }
          index = next;
          continue;
        }
      } else if !shader_ok {
        // the cursor shader already failed this frame, a nonadjacent run of
        // it is failed too, without another bind attempt
        let next = skip_shader_run(entries, index);
        for entry in &mut entries[index..next] {
          entry.state = EntryState::SHADER_ERROR;
        }
        index = next;
        continue;
      }

      if current_vbo != Some(vbo) {
        if !mesh.bind_vbo() {
          let next = skip_vbo_run(entries, index);
          for entry in &mut entries[index..next] {
            entry.state = EntryState::VBO_ERROR;
          }
          index = next;
          continue;
        }
        current_vbo = Some(vbo);
      }

      mesh.draw();
      entries[index].state = EntryState::OK;
      self.rendered = true;
      index += 1;
    }

    if shader_ok {
      if let Some(shader_use) = &current_shader {
        shader_use.shader.unbind();
      }
    }
  }

  /// bind a shader and validate it is drawable. a failed backend bind or an
  /// incompletely bound sampler set fails the bind, the caller skips the
  /// contiguous run of entries using this shader.
  fn use_shader(&mut self, shader_use: &ShaderUse) -> bool {
    let shader = &shader_use.shader;

    let result = shader.bind();
    if result == ShaderBindResult::Failed {
      return false;
    }

    self.context().set_current_shader(Some(shader.clone()));

    let missing = shader.missing_samplers();
    if !missing.is_empty() {
      self.errors.push(RenderError::MissingSamplers {
        path: shader.path().to_owned(),
        samplers: missing.into_vec(),
      });
      shader.unbind();
      return false;
    }

    // constants and samplers survive on the backend across a reused bind,
    // only a newly changed program needs them pushed again
    if result == ShaderBindResult::Bound {
      self.drawer().use_constants(shader_use);
      self.drawer().use_samplers(shader_use);
    }

    true
  }
}
