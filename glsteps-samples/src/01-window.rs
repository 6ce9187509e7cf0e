//! First step of the course: open a 1000×750 window with an OpenGL 3.3 core context and clear
//! it to a dark red every frame.
//!
//! Press <escape> to quit or close the window.

use glfw::{Action, Key, WindowEvent};
use glsteps::surface::{GlfwSurface, WindowDim};
use log::{error, info};
use std::process;

fn main() {
  env_logger::init();

  let mut surface = match GlfwSurface::new(
    WindowDim::default(),
    "Test Window",
  ) {
    Ok(surface) => surface,

    Err(e) => {
      error!("cannot create surface: {}", e);
      process::exit(e.exit_code());
    }
  };

  let [w, h] = surface.size();
  info!("framebuffer size: {}x{}", w, h);

  'app: loop {
    surface.poll_events();
    for (_, event) in glfw::flush_messages(&surface.events_rx) {
      match event {
        WindowEvent::Close | WindowEvent::Key(Key::Escape, _, Action::Release, _) => break 'app,
        _ => (),
      }
    }

    if surface.should_close() {
      break 'app;
    }

    surface.clear_frame([0.5, 0., 0., 1.], false);
    surface.swap_buffers();
  }
}
