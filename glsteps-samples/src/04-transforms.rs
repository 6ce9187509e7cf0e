//! Fourth step: drive a full `model` matrix from per-frame animation state.
//!
//! Every frame the triangle slides between fixed bounds, spins around the z axis and breathes
//! between a minimum and maximum size. The three scalars are composed into a single model
//! matrix — translate, then rotate, then scale — and uploaded as a mat4 uniform. Vertex colors
//! are derived from the clamped positions and interpolated across the triangle.
//!
//! Press <escape> to quit or close the window.

use cgmath::{Deg, Matrix4, Vector3};
use glfw::{Action, Key, WindowEvent};
use glsteps::anim::{Bounce, Spin};
use glsteps::mesh::{Mesh, Vertex};
use glsteps::shader::{Program, Uniform};
use glsteps::surface::{GlfwSurface, WindowDim};
use glsteps::transform;
use log::{error, warn};
use std::process;

const VS: &str = include_str!("model-vs.glsl");
const FS: &str = include_str!("interp-fs.glsl");

const TRI_VERTICES: [Vertex; 3] = [
  Vertex::new([-1., -1., 0.]),
  Vertex::new([1., -1., 0.]),
  Vertex::new([0., 1., 0.]),
];

const TRI_INCREMENT: f32 = 0.005;
const TRI_MAX_OFFSET: f32 = 0.7;

const ANGLE_INCREMENT: f32 = 0.1;

const SIZE_INCREMENT: f32 = 0.001;
const MIN_SIZE: f32 = 0.1;
const MAX_SIZE: f32 = 0.8;

// All of the animation state, advanced once per frame; no globals anywhere.
struct Anim {
  offset: Bounce,
  angle: Spin,
  size: Bounce,
}

impl Anim {
  fn new() -> Self {
    Anim {
      offset: Bounce::symmetric(TRI_INCREMENT, TRI_MAX_OFFSET),
      angle: Spin::new(ANGLE_INCREMENT),
      size: Bounce::new(0.4, SIZE_INCREMENT, MIN_SIZE, MAX_SIZE),
    }
  }

  fn update(&mut self) {
    self.offset.advance();
    self.angle.advance();
    self.size.advance();
  }

  fn model(&self) -> Matrix4<f32> {
    transform::compose(
      Vector3::new(self.offset.value(), 0., 0.),
      Matrix4::from_angle_z(Deg(self.angle.angle())),
      Vector3::new(self.size.value(), self.size.value(), 1.),
    )
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

  let triangle = Mesh::new(&TRI_VERTICES);
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

    surface.clear_frame([0., 0., 0., 1.], false);

    program.bind();
    program.set(&model, anim.model());
    triangle.render();
    program.unbind();

    surface.swap_buffers();
  }
}
