//! Geometry uploads once and both the direct and the indexed draw paths run without raising a
//! GL error.

use crate::common;
use glsteps::mesh::{Mesh, Vertex};
use glsteps::shader::Program;

const TRI_VERTICES: [Vertex; 3] = [
  Vertex::new([-1., -1., 0.]),
  Vertex::new([1., -1., 0.]),
  Vertex::new([0., 1., 0.]),
];

const PYRAMID_VERTICES: [Vertex; 4] = [
  Vertex::new([-1., -1., 0.]),
  Vertex::new([0., -1., 1.]),
  Vertex::new([1., -1., 0.]),
  Vertex::new([0., 1., 0.]),
];

const PYRAMID_INDICES: [u32; 12] = [0, 3, 1, 1, 3, 2, 2, 3, 0, 0, 1, 2];

pub fn fixture() {
  let mut surface = common::surface("mesh-draw");

  let program = Program::from_strings(common::PLAIN_VS, common::PLAIN_FS).expect("program build");

  let triangle = Mesh::new(&TRI_VERTICES);
  let pyramid = Mesh::indexed(&PYRAMID_VERTICES, &PYRAMID_INDICES);

  surface.clear_frame([0., 0., 0., 1.], false);

  program.bind();
  triangle.render();
  pyramid.render();
  program.unbind();

  assert_eq!(unsafe { gl::GetError() }, gl::NO_ERROR);

  surface.swap_buffers();
}
