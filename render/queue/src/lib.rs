//! The per frame draw submission scheduler.
//!
//! Scene logic registers "draw this mesh with this material on this layer"
//! submissions. The scheduler partitions them into one insertion ordered
//! queue per eligible layer and converts each frame into a minimal sequence
//! of backend state changes: consecutive entries sharing a shader program
//! and vertex buffer form a cluster, state is bound only on cluster
//! boundaries. The frame is split into two coordinated walks, `render`
//! issues the draw calls and `update` pushes shared and per object uniform
//! data for what actually got drawn. A bad shader or an unbound buffer
//! fails its own cluster, never the frame.

pub use lucerna_render_core::*;

mod entry;
mod pass;
mod queue;
mod render;
mod scan;
mod submission;
mod update;

pub use entry::*;
pub use pass::*;
pub use queue::*;
pub use scan::*;
pub use submission::*;
