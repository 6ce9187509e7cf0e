//! GLFW windowing and OpenGL context bootstrap.
//!
//! A [`GlfwSurface`] owns the window and the OpenGL context bound to it for the whole process
//! lifetime. Creation requests a 3.3 core, forward-compatible context, loads the OpenGL symbols
//! and sets the viewport to the framebuffer dimensions. Every startup failure maps to a distinct
//! process exit code so shell scripts can tell them apart.

use gl;
use glfw::{self, Context as _, Window, WindowEvent};
use std::{error, fmt, os::raw::c_void, sync::mpsc::Receiver};

/// Default window width used by the course samples.
pub const DEFAULT_WIDTH: u32 = 1000;

/// Default window height used by the course samples.
pub const DEFAULT_HEIGHT: u32 = 750;

/// Dimension of the window to open, in pixels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WindowDim {
  /// Width of the window, in pixels.
  pub width: u32,
  /// Height of the window, in pixels.
  pub height: u32,
}

impl Default for WindowDim {
  /// The course's 1000×750 window.
  fn default() -> Self {
    WindowDim {
      width: DEFAULT_WIDTH,
      height: DEFAULT_HEIGHT,
    }
  }
}

/// Error that can be risen while creating a surface.
#[non_exhaustive]
#[derive(Debug)]
pub enum SurfaceError {
  /// Initialization of the windowing system went wrong.
  ///
  /// This variant exposes a **glfw** error for further information about what went wrong.
  InitError(glfw::InitError),

  /// The window could not be created.
  WindowCreationFailed,

  /// The OpenGL symbols could not be loaded after the context was made current.
  LoaderError,
}

impl SurfaceError {
  /// Process exit code associated with this startup failure.
  ///
  /// Windowing init maps to 1, window creation to 2 and symbol loading to 3.
  pub fn exit_code(&self) -> i32 {
    match *self {
      SurfaceError::InitError(_) => 1,
      SurfaceError::WindowCreationFailed => 2,
      SurfaceError::LoaderError => 3,
    }
  }
}

impl fmt::Display for SurfaceError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      SurfaceError::InitError(ref e) => write!(f, "GLFW initialization failed: {}", e),
      SurfaceError::WindowCreationFailed => f.write_str("GLFW window creation failed"),
      SurfaceError::LoaderError => f.write_str("OpenGL symbol loading failed"),
    }
  }
}

impl From<glfw::InitError> for SurfaceError {
  fn from(e: glfw::InitError) -> Self {
    SurfaceError::InitError(e)
  }
}

impl error::Error for SurfaceError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      SurfaceError::InitError(e) => Some(e),
      _ => None,
    }
  }
}

/// GLFW surface.
///
/// Owns the window, the OpenGL context bound to it and the GLFW event receiver. The render loop
/// of a sample is expected to call [`GlfwSurface::poll_events`], drain `events_rx` with
/// [`glfw::flush_messages`], draw, then [`GlfwSurface::swap_buffers`] once per iteration.
#[derive(Debug)]
pub struct GlfwSurface {
  /// Wrapped GLFW events queue.
  pub events_rx: Receiver<(f64, WindowEvent)>,

  /// Wrapped GLFW window.
  pub window: Window,
}

impl GlfwSurface {
  /// Initialize GLFW, open a window and bootstrap an OpenGL 3.3 core context in it.
  pub fn new(dim: WindowDim, title: &str) -> Result<Self, SurfaceError> {
    let mut glfw = glfw::init(glfw::FAIL_ON_ERRORS)?;

    // OpenGL hints: core profile, no backwards compatibility
    glfw.window_hint(glfw::WindowHint::OpenGlProfile(
      glfw::OpenGlProfileHint::Core,
    ));
    glfw.window_hint(glfw::WindowHint::OpenGlForwardCompat(true));
    glfw.window_hint(glfw::WindowHint::ContextVersionMajor(3));
    glfw.window_hint(glfw::WindowHint::ContextVersionMinor(3));

    let (mut window, events_rx) = glfw
      .create_window(dim.width, dim.height, title, glfw::WindowMode::Windowed)
      .ok_or(SurfaceError::WindowCreationFailed)?;

    window.make_current();
    window.set_key_polling(true);

    // init OpenGL
    gl::load_with(|s| window.get_proc_address(s) as *const c_void);

    // the loader silently yields null pointers when it cannot resolve symbols, so probe one
    if !gl::Viewport::is_loaded() {
      return Err(SurfaceError::LoaderError);
    }

    let (w, h) = window.get_framebuffer_size();
    unsafe { gl::Viewport(0, 0, w, h) };

    Ok(GlfwSurface { events_rx, window })
  }

  /// Size of the surface's framebuffer, in pixels.
  pub fn size(&self) -> [u32; 2] {
    let (w, h) = self.window.get_framebuffer_size();
    [w as u32, h as u32]
  }

  /// Whether the host asked to close the window.
  pub fn should_close(&self) -> bool {
    self.window.should_close()
  }

  /// Poll the system events captured since the last call.
  ///
  /// Drain them from [`GlfwSurface::events_rx`] with [`glfw::flush_messages`].
  pub fn poll_events(&mut self) {
    self.window.glfw.poll_events();
  }

  /// Swap the back and front buffers.
  pub fn swap_buffers(&mut self) {
    self.window.swap_buffers();
  }

  /// Enable depth testing for the lifetime of the context.
  pub fn enable_depth_test(&mut self) {
    unsafe { gl::Enable(gl::DEPTH_TEST) };
  }

  /// Clear the color buffer to `color`, and the depth buffer as well if `depth` is set.
  pub fn clear_frame(&mut self, color: [f32; 4], depth: bool) {
    unsafe {
      gl::ClearColor(color[0], color[1], color[2], color[3]);

      let mut bits = gl::COLOR_BUFFER_BIT;
      if depth {
        bits |= gl::DEPTH_BUFFER_BIT;
      }

      gl::Clear(bits);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_window_dim_is_the_course_resolution() {
    assert_eq!(
      WindowDim::default(),
      WindowDim {
        width: 1000,
        height: 750
      }
    );
  }

  #[test]
  fn exit_codes_are_distinct_per_startup_stage() {
    assert_eq!(SurfaceError::WindowCreationFailed.exit_code(), 2);
    assert_eq!(SurfaceError::LoaderError.exit_code(), 3);
  }
}
