//! Second step: upload a triangle once, build a minimal shader program and draw every frame.
//!
//! Press <escape> to quit or close the window.

use glfw::{Action, Key, WindowEvent};
use glsteps::mesh::{Mesh, Vertex};
use glsteps::shader::Program;
use glsteps::surface::{GlfwSurface, WindowDim};
use log::{error, warn};
use std::process;

// We get the shaders at compile time from local files.
const VS: &str = include_str!("simple-vs.glsl");
const FS: &str = include_str!("simple-fs.glsl");

// One triangle, positions only.
const TRI_VERTICES: [Vertex; 3] = [
  Vertex::new([-1., -1., 0.]),
  Vertex::new([1., -1., 0.]),
  Vertex::new([0., 1., 0.]),
];

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

  let program = match Program::from_strings(VS, FS) {
    Ok(program) => program,

    Err(e) => {
      error!("{}", e);
      // startup failures own codes 1 through 3
      process::exit(4);
    }
  };

  // commonly trips before any draw state is bound; worth a warning, nothing more
  if let Err(w) = program.validate() {
    warn!("{}", w);
  }

  let triangle = Mesh::new(&TRI_VERTICES);

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

    surface.clear_frame([0., 0., 0., 1.], false);

    program.bind();
    triangle.render();
    program.unbind();

    surface.swap_buffers();
  }
}
