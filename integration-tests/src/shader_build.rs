//! A well-formed program builds and its declared uniform resolves to a real location.

use crate::common;
use cgmath::Matrix4;
use glsteps::shader::Program;

pub fn fixture() {
  let _surface = common::surface("shader-build");

  let program = Program::from_strings(common::MODEL_VS, common::PLAIN_FS).expect("program build");

  let model = program
    .uniform::<Matrix4<f32>>("model")
    .expect("model uniform");

  assert!(model.location() >= 0);
}
