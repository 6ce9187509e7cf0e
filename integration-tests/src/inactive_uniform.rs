//! Asking a linked program for a uniform it does not declare yields an inactive-uniform
//! warning instead of a crash, and the unbound fallback keeps writes as no-ops.

use crate::common;
use glsteps::shader::{Program, Uniform, UniformWarning};

pub fn fixture() {
  let _surface = common::surface("inactive-uniform");

  let program = Program::from_strings(common::PLAIN_VS, common::PLAIN_FS).expect("program build");

  match program.uniform::<f32>("nope") {
    Err(UniformWarning::Inactive(name)) => assert_eq!(name, "nope"),
    Ok(_) => panic!("resolved a uniform that does not exist"),
  }

  // writing through an unbound uniform must be harmless
  let unbound = Uniform::<f32>::unbound();
  program.bind();
  program.set(&unbound, 1.);
  program.unbind();

  assert_eq!(unsafe { gl::GetError() }, gl::NO_ERROR);
}
