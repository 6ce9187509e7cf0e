//! Fifth step: an indexed, depth-tested pyramid.
//!
//! Four vertices and twelve indices describe a tetrahedron whose faces share vertices. Depth
//! testing keeps the back faces behind the front ones, so the depth buffer is cleared along
//! with the color buffer every frame. This step deliberately drops the translation: the model
//! matrix is rotation (around y) times scale only.
//!
//! Press <escape> to quit or close the window.

use cgmath::{Deg, Matrix4};
use glfw::{Action, Key, WindowEvent};
use glsteps::anim::{Bounce, Spin};
use glsteps::mesh::{Mesh, Vertex};
use glsteps::shader::{Program, Uniform};
use glsteps::surface::{GlfwSurface, WindowDim};
use log::{error, warn};
use std::process;

const VS: &str = include_str!("model-vs.glsl");
const FS: &str = include_str!("interp-fs.glsl");

// The four corners of the tetrahedron.
const PYRAMID_VERTICES: [Vertex; 4] = [
  Vertex::new([-1., -1., 0.]),
  Vertex::new([0., -1., 1.]),
  Vertex::new([1., -1., 0.]),
  Vertex::new([0., 1., 0.]),
];

// Three faces around the apex, plus the base.
const PYRAMID_INDICES: [u32; 12] = [
  0, 3, 1, //
  1, 3, 2, //
  2, 3, 0, //
  0, 1, 2, //
];

const ANGLE_INCREMENT: f32 = 0.1;

const SIZE_INCREMENT: f32 = 0.001;
const MIN_SIZE: f32 = 0.1;
const MAX_SIZE: f32 = 0.8;

struct Anim {
  angle: Spin,
  size: Bounce,
}

impl Anim {
  fn new() -> Self {
    Anim {
      angle: Spin::new(ANGLE_INCREMENT),
      size: Bounce::new(0.4, SIZE_INCREMENT, MIN_SIZE, MAX_SIZE),
    }
  }

  fn update(&mut self) {
    self.angle.advance();
    self.size.advance();
  }

  // no translation in this step; rotate then scale
  fn model(&self) -> Matrix4<f32> {
    let s = self.size.value();
    Matrix4::from_angle_y(Deg(self.angle.angle())) * Matrix4::from_nonuniform_scale(s, s, s)
  }
}

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

  surface.enable_depth_test();

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

  let model = program.uniform::<Matrix4<f32>>("model").unwrap_or_else(|w| {
    warn!("{}", w);
    Uniform::unbound()
  });

  let pyramid = Mesh::indexed(&PYRAMID_VERTICES, &PYRAMID_INDICES);
  let mut anim = Anim::new();

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

    anim.update();

    surface.clear_frame([0., 0., 0., 1.], true);

    program.bind();
    program.set(&model, anim.model());
    pyramid.render();
    program.unbind();

    surface.swap_buffers();
  }
}
