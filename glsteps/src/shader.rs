//! Shader stage compilation and program linking.
//!
//! The build pipeline is a straight line with a terminal failure at every step: create the
//! stage objects, compile each from a single source string, attach them to a program, link,
//! and only then resolve uniforms by name. Compile and link failures carry the driver's
//! diagnostic log. Validation and inactive uniforms are warnings, not errors: a program that
//! fails validation before any draw state is bound is still usable, and writes through an
//! unbound uniform are silent no-ops.

use cgmath::{Matrix as _, Matrix4};
use gl::{self, types::*};
use std::{
  error, fmt,
  ffi::CString,
  marker::PhantomData,
  ptr::{null, null_mut},
};

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  Vertex,
  /// Fragment shader.
  Fragment,
}

impl StageType {
  fn to_gl(self) -> GLenum {
    match self {
      StageType::Vertex => gl::VERTEX_SHADER,
      StageType::Fragment => gl::FRAGMENT_SHADER,
    }
  }
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::Vertex => f.write_str("vertex shader"),
      StageType::Fragment => f.write_str("fragment shader"),
    }
  }
}

/// Errors that can occur while building a shader stage.
#[derive(Debug)]
pub enum StageError {
  /// Occurs when a shader fails to compile. The `String` is the driver's diagnostic log.
  CompilationFailed(StageType, String),
  /// Occurs when the stage object itself cannot be created.
  CreationFailed(StageType),
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CompilationFailed(ref ty, ref log) => {
        write!(f, "{} compilation error: {}", ty, log)
      }

      StageError::CreationFailed(ty) => write!(f, "unable to create {}", ty),
    }
  }
}

impl error::Error for StageError {}

/// Errors that a [`Program`] can generate.
#[derive(Debug)]
pub enum ProgramError {
  /// A shader stage failed to compile.
  StageError(StageError),
  /// Program link failed. You can inspect the reason by looking at the contained `String`.
  LinkFailed(String),
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::StageError(ref e) => write!(f, "shader program has stage error: {}", e),

      ProgramError::LinkFailed(ref log) => write!(f, "shader program failed to link: {}", log),
    }
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::StageError(e)
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::StageError(e) => Some(e),
      _ => None,
    }
  }
}

/// Program warnings, not considered blocking errors.
#[derive(Debug)]
pub enum ProgramWarning {
  /// The program failed validation against the current GPU state. Mostly harmless when raised
  /// before any draw state is bound.
  ValidationFailed(String),
}

impl fmt::Display for ProgramWarning {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramWarning::ValidationFailed(ref log) => {
        write!(f, "shader program failed to validate: {}", log)
      }
    }
  }
}

/// Warnings related to uniform resolution.
#[derive(Debug)]
pub enum UniformWarning {
  /// The uniform was not found in the program. It is either not declared or declared yet unused,
  /// which makes the driver optimize it out.
  Inactive(String),
}

impl fmt::Display for UniformWarning {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      UniformWarning::Inactive(ref name) => write!(f, "inactive {} uniform", name),
    }
  }
}

/// A compiled shader stage.
#[derive(Debug)]
pub struct Stage {
  handle: GLuint,
  ty: StageType,
}

impl Stage {
  /// Compile a stage of type `ty` from a single source string.
  ///
  /// On compile failure the stage object is deleted and the driver's diagnostic log is
  /// returned in the error.
  pub fn new(ty: StageType, src: &str) -> Result<Self, StageError> {
    // reject sources with interior NULs before any GL object exists
    let c_src = CString::new(src.as_bytes()).map_err(|_| StageError::CreationFailed(ty))?;

    unsafe {
      let handle = gl::CreateShader(ty.to_gl());

      if handle == 0 {
        return Err(StageError::CreationFailed(ty));
      }

      gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), null());
      gl::CompileShader(handle);

      let mut compiled: GLint = gl::FALSE.into();
      gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

      if compiled == gl::TRUE.into() {
        Ok(Stage { handle, ty })
      } else {
        let mut log_len: GLint = 0;
        gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let mut log: Vec<u8> = Vec::with_capacity(log_len as usize);
        gl::GetShaderInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

        gl::DeleteShader(handle);

        log.set_len(log_len as usize);

        Err(StageError::CompilationFailed(ty, info_log_to_string(log)))
      }
    }
  }

  /// Type of the stage.
  pub fn ty(&self) -> StageType {
    self.ty
  }
}

impl Drop for Stage {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteShader(self.handle);
    }
  }
}

/// A linked shader program.
///
/// A value of this type only exists after a successful link, which is what makes resolving
/// uniforms through [`Program::uniform`] legal.
#[derive(Debug)]
pub struct Program {
  handle: GLuint,
}

impl Program {
  /// Attach the two compiled stages to a new program object and link it.
  pub fn from_stages(vertex: &Stage, fragment: &Stage) -> Result<Self, ProgramError> {
    let handle = unsafe { gl::CreateProgram() };

    unsafe {
      gl::AttachShader(handle, vertex.handle);
      gl::AttachShader(handle, fragment.handle);
    }

    let program = Program { handle };
    program.link().map(move |_| program)
  }

  /// Compile both stages from source strings, then link them.
  pub fn from_strings(vertex_src: &str, fragment_src: &str) -> Result<Self, ProgramError> {
    let vertex = Stage::new(StageType::Vertex, vertex_src)?;
    let fragment = Stage::new(StageType::Fragment, fragment_src)?;

    Self::from_stages(&vertex, &fragment)
  }

  fn link(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(())
      } else {
        Err(ProgramError::LinkFailed(program_info_log(handle)))
      }
    }
  }

  /// Validate the program against the current GPU state.
  ///
  /// Failure here is a warning, not an error; it commonly triggers when no draw state is bound
  /// yet and the program would still render fine.
  pub fn validate(&self) -> Result<(), ProgramWarning> {
    unsafe {
      gl::ValidateProgram(self.handle);

      let mut valid: GLint = gl::FALSE.into();
      gl::GetProgramiv(self.handle, gl::VALIDATE_STATUS, &mut valid);

      if valid == gl::TRUE.into() {
        Ok(())
      } else {
        Err(ProgramWarning::ValidationFailed(program_info_log(
          self.handle,
        )))
      }
    }
  }

  /// Resolve a uniform by name.
  ///
  /// A negative location means the uniform is inactive, which is reported as a warning; the
  /// caller can fall back on [`Uniform::unbound`] to keep rendering with no-op writes.
  pub fn uniform<T>(&self, name: &str) -> Result<Uniform<T>, UniformWarning>
  where
    T: UniformValue,
  {
    let location = {
      let c_name = match CString::new(name.as_bytes()) {
        Ok(c_name) => c_name,
        Err(_) => return Err(UniformWarning::Inactive(name.to_owned())),
      };

      unsafe { gl::GetUniformLocation(self.handle, c_name.as_ptr() as *const GLchar) }
    };

    // ensure the location smells good
    if location < 0 {
      return Err(UniformWarning::Inactive(name.to_owned()));
    }

    Ok(Uniform::new(location))
  }

  /// Make this program the one used by subsequent draw calls and uniform writes.
  pub fn bind(&self) {
    unsafe { gl::UseProgram(self.handle) };
  }

  /// Unbind whatever program is currently in use.
  pub fn unbind(&self) {
    unsafe { gl::UseProgram(0) };
  }

  /// Write `value` to `uniform`.
  ///
  /// The program must currently be bound. Writing through an unbound uniform does nothing.
  pub fn set<T>(&self, uniform: &Uniform<T>, value: T)
  where
    T: UniformValue,
  {
    if uniform.location < 0 {
      return;
    }

    unsafe { T::update(uniform.location, value) };
  }
}

impl Drop for Program {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteProgram(self.handle);
    }
  }
}

/// A typed uniform location resolved from a linked [`Program`].
#[derive(Clone, Copy, Debug)]
pub struct Uniform<T> {
  location: GLint,
  _t: PhantomData<T>,
}

impl<T> Uniform<T> {
  fn new(location: GLint) -> Self {
    Uniform {
      location,
      _t: PhantomData,
    }
  }

  /// A uniform that is not bound to any location; writes through it are no-ops.
  pub fn unbound() -> Self {
    Self::new(-1)
  }

  /// The raw location, `-1` if unbound.
  pub fn location(&self) -> GLint {
    self.location
  }
}

/// Values that can be written to a uniform location.
pub trait UniformValue {
  /// Upload `value` to `location` in the currently bound program.
  unsafe fn update(location: GLint, value: Self);
}

impl UniformValue for f32 {
  unsafe fn update(location: GLint, value: Self) {
    gl::Uniform1f(location, value);
  }
}

impl UniformValue for Matrix4<f32> {
  unsafe fn update(location: GLint, value: Self) {
    gl::UniformMatrix4fv(location, 1, gl::FALSE, value.as_ptr());
  }
}

fn program_info_log(handle: GLuint) -> String {
  unsafe {
    let mut log_len: GLint = 0;
    gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

    let mut log: Vec<u8> = Vec::with_capacity(log_len as usize);
    gl::GetProgramInfoLog(handle, log_len, null_mut(), log.as_mut_ptr() as *mut GLchar);

    log.set_len(log_len as usize);

    info_log_to_string(log)
  }
}

// info logs come back NUL-terminated; drop the terminator instead of carrying it around
fn info_log_to_string(log: Vec<u8>) -> String {
  String::from_utf8_lossy(&log)
    .trim_end_matches('\0')
    .to_owned()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stage_error_reports_the_stage_and_the_log() {
    let e = StageError::CompilationFailed(StageType::Vertex, "0:3: syntax error".to_owned());
    assert_eq!(e.to_string(), "vertex shader compilation error: 0:3: syntax error");
  }

  #[test]
  fn program_error_wraps_stage_error() {
    let e = ProgramError::from(StageError::CreationFailed(StageType::Fragment));
    assert_eq!(
      e.to_string(),
      "shader program has stage error: unable to create fragment shader"
    );
  }

  #[test]
  fn unbound_uniform_has_negative_location() {
    let u = Uniform::<f32>::unbound();
    assert!(u.location() < 0);
  }

  // an interior NUL must be rejected before the stage object is created, otherwise the error
  // path would leak it
  #[test]
  fn interior_nul_in_source_fails_before_any_gl_object_exists() {
    match Stage::new(StageType::Vertex, "void main() {}\0") {
      Err(StageError::CreationFailed(StageType::Vertex)) => (),
      other => panic!("expected a creation failure, got {:?}", other),
    }
  }

  #[test]
  fn info_log_terminator_is_stripped() {
    assert_eq!(info_log_to_string(b"boom\0".to_vec()), "boom");
    assert_eq!(info_log_to_string(Vec::new()), "");
  }
}
