use std::sync::Arc;

use crate::*;

/// the scheduler core: one ordered queue of draw entries per eligible layer,
/// rebuilt lazily when the layer registry moves, walked once per frame by the
/// render and update passes.
///
/// all mutation happens on the owning render thread, only the layer
/// registry's change state is guarded against other threads.
pub struct RenderQueue {
  id: RenderQueueId,
  drawer: Arc<dyn MeshDrawer>,
  registry: Arc<LayerRegistry>,
  context: Arc<FrameContext>,
  ubo_binder: Arc<dyn UboBinder>,
  pub(crate) queues: Vec<(String, LayerQueue)>,
  layers_hash_state: Option<u64>,
  pub(crate) rendered: bool,
  pub(crate) errors: Vec<RenderError>,
}

impl RenderQueue {
  pub fn new(
    drawer: Arc<dyn MeshDrawer>,
    registry: Arc<LayerRegistry>,
    context: Arc<FrameContext>,
    ubo_binder: Arc<dyn UboBinder>,
  ) -> Self {
    Self {
      id: RenderQueueId::next(),
      drawer,
      registry,
      context,
      ubo_binder,
      queues: Vec::new(),
      layers_hash_state: None,
      rendered: false,
      errors: Vec::new(),
    }
  }

  pub fn id(&self) -> RenderQueueId {
    self.id
  }

  pub(crate) fn drawer(&self) -> &dyn MeshDrawer {
    self.drawer.as_ref()
  }

  pub(crate) fn context(&self) -> &FrameContext {
    self.context.as_ref()
  }

  pub(crate) fn ubo_binder(&self) -> &dyn UboBinder {
    self.ubo_binder.as_ref()
  }

  /// whether the last `render` call produced at least one draw
  pub fn is_rendered(&self) -> bool {
    self.rendered
  }

  /// drain the diagnostics collected since the last call
  pub fn take_errors(&mut self) -> Vec<RenderError> {
    std::mem::take(&mut self.errors)
  }

  pub fn layer_queue(&self, layer: &str) -> Option<&LayerQueue> {
    self
      .queues
      .iter()
      .find(|(known, _)| known == layer)
      .map(|(_, queue)| queue)
  }

  /// admission check: the target layer must be on the drawer's allow list
  /// and an explicit priority must fall inside its allowed range. pure, no
  /// side effects.
  pub fn is_suitable(&self, submission: &DrawSubmission) -> bool {
    if !self.drawer.is_layer_allowed(&submission.layer) {
      return false;
    }

    if let Some(priority) = submission.priority {
      if !self.drawer.is_priority_allowed(priority) {
        return false;
      }
    }

    true
  }

  /// admit a submission into its layer queue and record the back reference
  /// on the mesh. rejected submissions are silently ignored. the queue
  /// append and the back reference addition happen together or not at all.
  pub fn register(&mut self, submission: &DrawSubmission) {
    if !self.is_suitable(submission) {
      return;
    }

    self.prepare_layers();

    let entry = QueueEntry {
      mesh: submission.mesh.clone(),
      shader_use: self.drawer.resolve_shader_use(submission),
      vbo: submission.mesh.vbo(),
      priority: submission.priority.unwrap_or(0),
      state: EntryState::empty(),
    };

    let Some(slot) = self
      .queues
      .iter()
      .position(|(layer, _)| layer == &submission.layer)
    else {
      return;
    };

    entry.mesh.back_references().add(BackReference {
      queue: self.id,
      shader: entry.shader_uid(),
    });
    self.queues[slot].1.add(entry);
  }

  /// remove a previously registered submission. an unknown layer or a
  /// priority outside the allowed range means the submission was never
  /// admitted, the call no-ops. a located queue that does not contain the
  /// matching entry is a bookkeeping bug on the caller side and halts.
  pub fn unregister(&mut self, submission: &DrawSubmission) {
    let Some(slot) = self
      .queues
      .iter()
      .position(|(layer, _)| layer == &submission.layer)
    else {
      return;
    };

    if let Some(priority) = submission.priority {
      if !self.drawer.is_priority_allowed(priority) {
        return;
      }
    }

    let key = QueueEntry {
      mesh: submission.mesh.clone(),
      shader_use: self.drawer.resolve_shader_use(submission),
      vbo: submission.mesh.vbo(),
      priority: submission.priority.unwrap_or(0),
      state: EntryState::empty(),
    };

    key.mesh.back_references().remove(BackReference {
      queue: self.id,
      shader: key.shader_uid(),
    });

    if !self.queues[slot].1.remove(&key) {
      panic!(
        "RenderQueue::unregister: no matching entry in layer '{}'",
        submission.layer
      );
    }
  }

  /// rebuild the per layer partitions if the registry moved since the last
  /// call, cheap no-op otherwise. queue contents survive the rebuild as long
  /// as their layer is still registered, layers that left the registry drop
  /// their entries with a diagnostic.
  pub fn prepare_layers(&mut self) {
    if Some(self.registry.hash_state()) == self.layers_hash_state {
      return;
    }

    let registry = self.registry.clone();
    let guard = registry.lock();

    self.layers_hash_state = Some(guard.hash_state());

    let stash = std::mem::take(&mut self.queues);

    for layer in guard.layers() {
      if !self.drawer.is_layer_allowed(layer) {
        continue;
      }
      self.queues.push((layer.clone(), LayerQueue::default()));
    }

    for (layer, queue) in stash {
      match self
        .queues
        .iter()
        .position(|(new_layer, _)| *new_layer == layer)
      {
        Some(slot) => self.queues[slot].1 = queue,
        None => {
          if !queue.is_empty() {
            log::warn!(
              "layer '{}' left the registry, dropping {} queued entries",
              layer,
              queue.len()
            );
          }
          self.release_queue(&queue);
        }
      }
    }
  }

  /// remove this scheduler's back reference for every entry of a queue that
  /// is about to go away
  pub(crate) fn release_queue(&self, queue: &LayerQueue) {
    for entry in &queue.entries {
      entry.mesh.back_references().remove(BackReference {
        queue: self.id,
        shader: entry.shader_uid(),
      });
    }
  }
}

impl Drop for RenderQueue {
  // meshes outlive any single scheduler instance, pull this instance out of
  // every registered mesh before the queue storage goes away
  fn drop(&mut self) {
    let queues = std::mem::take(&mut self.queues);
    for (_, queue) in &queues {
      self.release_queue(queue);
    }
  }
}
