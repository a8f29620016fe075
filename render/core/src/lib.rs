//! Backend facing contracts of the lucerna draw submission scheduler.
//!
//! Everything the per frame scheduler needs from the surrounding renderer is
//! expressed here as narrow interfaces: the compiled shader program, the
//! drawable mesh, the process wide layer registry, the per frame render
//! context and the uniform buffer binder. The scheduler itself lives in
//! `lucerna-render-queue` and only ever talks to these.

mod context;
mod error;
mod handle;
mod layer;
mod ledger;
mod mesh;
mod shader;
mod ubo;

pub use context::*;
pub use error::*;
pub use handle::*;
pub use layer::*;
pub use ledger::*;
pub use mesh::*;
pub use shader::*;
pub use ubo::*;

// https://nnethercote.github.io/perf-book/hashing.html
pub type FastHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
