//! A deliberate syntax error surfaces a non-empty diagnostic and stops the build before any
//! uniform resolution can happen.

use crate::common;
use glsteps::shader::{Program, ProgramError, StageError, StageType};

const BROKEN_VS: &str = "#version 330 core\n\
                         layout (location = 0) in vec3 pos;\n\
                         void main() { gl_Position = vec4(pos, 1.0) }\n";

pub fn fixture() {
  let _surface = common::surface("shader-compile-error");

  match Program::from_strings(BROKEN_VS, common::PLAIN_FS) {
    Err(ProgramError::StageError(StageError::CompilationFailed(ty, log))) => {
      assert_eq!(ty, StageType::Vertex);
      assert!(!log.trim().is_empty(), "empty diagnostic log");
    }

    other => panic!("expected a vertex compilation failure, got {:?}", other),
  }
}
