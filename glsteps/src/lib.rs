//! Shared plumbing for an incremental OpenGL 3.3 tutorial progression.
//!
//! The binaries in `glsteps-samples` grow step by step from an empty cleared window up to a
//! rotating, depth-tested pyramid. Everything the steps have in common lives here:
//!
//! - [`surface`]: GLFW window and context bootstrap, event polling and buffer swapping.
//! - [`shader`]: the compile / attach / link / validate pipeline and uniform resolution.
//! - [`mesh`]: one-shot upload of position data (optionally indexed) and the draw call.
//! - [`transform`]: fixed-order model matrix composition.
//! - [`anim`]: the bouncing / wrapping scalars driving the per-frame transforms.
//!
//! The samples own all state explicitly; nothing in this crate keeps globals.

pub mod anim;
pub mod mesh;
pub mod shader;
pub mod surface;
pub mod transform;
