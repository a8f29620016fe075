use parking_lot::{Mutex, MutexGuard};

/// process wide, versioned list of named rendering layers. schedulers cache
/// the hash state and rebuild their per layer partitions when it moves.
///
/// injected explicitly (`Arc<LayerRegistry>`) rather than reached through a
/// hidden singleton so tests can run isolated registries side by side.
#[derive(Default)]
pub struct LayerRegistry {
  inner: Mutex<LayerRegistryInner>,
}

#[derive(Default)]
pub struct LayerRegistryInner {
  layers: Vec<String>,
  hash_state: u64,
}

impl LayerRegistryInner {
  pub fn layers(&self) -> &[String] {
    &self.layers
  }

  pub fn hash_state(&self) -> u64 {
    self.hash_state
  }

  fn touch(&mut self) {
    self.hash_state = self.hash_state.wrapping_add(1);
  }
}

impl LayerRegistry {
  pub fn new(layers: impl IntoIterator<Item = impl Into<String>>) -> Self {
    let registry = Self::default();
    registry.set_layers(layers);
    registry
  }

  /// cheap version probe, safe to call every frame
  pub fn hash_state(&self) -> u64 {
    self.inner.lock().hash_state
  }

  pub fn layers(&self) -> Vec<String> {
    self.inner.lock().layers.clone()
  }

  /// exclusive access to the change state for the duration of a partition
  /// rebuild, so the layer list and the hash are observed consistently
  pub fn lock(&self) -> MutexGuard<'_, LayerRegistryInner> {
    self.inner.lock()
  }

  pub fn set_layers(&self, layers: impl IntoIterator<Item = impl Into<String>>) {
    let mut inner = self.inner.lock();
    inner.layers = layers.into_iter().map(Into::into).collect();
    inner.touch();
  }

  pub fn push_layer(&self, layer: impl Into<String>) {
    let mut inner = self.inner.lock();
    inner.layers.push(layer.into());
    inner.touch();
  }

  pub fn remove_layer(&self, layer: &str) {
    let mut inner = self.inner.lock();
    inner.layers.retain(|known| known != layer);
    inner.touch();
  }
}
