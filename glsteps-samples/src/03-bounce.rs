//! Third step: animate the triangle with a scalar uniform.
//!
//! The vertex shader exposes an `xMove` uniform; every frame the sample advances a bouncing
//! offset and writes it there, sliding the triangle left and right between fixed bounds.
//!
//! Press <escape> to quit or close the window.

use glfw::{Action, Key, WindowEvent};
use glsteps::anim::Bounce;
use glsteps::mesh::{Mesh, Vertex};
use glsteps::shader::{Program, Uniform};
use glsteps::surface::{GlfwSurface, WindowDim};
use log::{error, warn};
use std::process;

const VS: &str = include_str!("xmove-vs.glsl");
const FS: &str = include_str!("simple-fs.glsl");

const TRI_VERTICES: [Vertex; 3] = [
  Vertex::new([-1., -1., 0.]),
  Vertex::new([1., -1., 0.]),
  Vertex::new([0., 1., 0.]),
];

// The offset moves by this much every frame and bounces at ±TRI_MAX_OFFSET.
const TRI_INCREMENT: f32 = 0.005;
const TRI_MAX_OFFSET: f32 = 0.7;

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

  if let Err(w) = program.validate() {
    warn!("{}", w);
  }

  // an inactive uniform downgrades the animation to a no-op instead of aborting
  let x_move = program.uniform::<f32>("xMove").unwrap_or_else(|w| {
    warn!("{}", w);
    Uniform::unbound()
  });

  let triangle = Mesh::new(&TRI_VERTICES);
  let mut offset = Bounce::symmetric(TRI_INCREMENT, TRI_MAX_OFFSET);

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

    let x = offset.advance();

    surface.clear_frame([0., 0., 0., 1.], false);

    program.bind();
    program.set(&x_move, x);
    triangle.render();
    program.unbind();

    surface.swap_buffers();
  }
}
