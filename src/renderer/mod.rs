//! Render hand-off
//!
//! The core never draws. Each tick it offers an immutable snapshot of the
//! ball and the shared wall list, which a host renderer may flatten into GPU
//! instance buffers.

pub mod snapshot;
pub mod vertex;

pub use snapshot::RenderSnapshot;
pub use vertex::{CircleInstance, RectInstance, colors};
