//! Shared fixture plumbing.

use glsteps::surface::{GlfwSurface, WindowDim};

/// Minimal vertex shader with an active `model` uniform.
pub const MODEL_VS: &str = "#version 330 core\n\
                            layout (location = 0) in vec3 pos;\n\
                            uniform mat4 model;\n\
                            void main() { gl_Position = model * vec4(pos, 1.0); }\n";

/// Minimal vertex shader with no uniform at all.
pub const PLAIN_VS: &str = "#version 330 core\n\
                            layout (location = 0) in vec3 pos;\n\
                            void main() { gl_Position = vec4(pos, 1.0); }\n";

/// Minimal fragment shader.
pub const PLAIN_FS: &str = "#version 330 core\n\
                            out vec4 colour;\n\
                            void main() { colour = vec4(1.0); }\n";

/// Open a small window whose context the fixture runs against.
pub fn surface(title: &str) -> GlfwSurface {
  GlfwSurface::new(
    WindowDim {
      width: 256,
      height: 256,
    },
    title,
  )
  .expect("GLFW surface creation")
}
