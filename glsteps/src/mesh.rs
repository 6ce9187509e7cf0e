//! GPU-resident geometry.
//!
//! A [`Mesh`] uploads a tightly packed 3-component position stream (and optionally a `u32` index
//! list) exactly once, before the render loop starts. The buffers are owned by the context for
//! the rest of the process; rendering only rebinds the vertex array and issues the draw call.

use gl::{self, types::*};
use std::{mem, os::raw::c_void, ptr::null};

/// A single vertex: one 3D position.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
  /// 3D position of the vertex.
  pub position: [f32; 3],
}

impl Vertex {
  /// Build a vertex from a position triple.
  pub const fn new(position: [f32; 3]) -> Self {
    Vertex { position }
  }
}

/// GPU-resident triangle geometry, direct or indexed.
#[derive(Debug)]
pub struct Mesh {
  vao: GLuint,
  vbo: GLuint,
  ibo: Option<GLuint>,
  vert_nb: GLsizei,
  index_nb: GLsizei,
}

impl Mesh {
  /// Upload direct (non-indexed) triangle geometry.
  pub fn new(vertices: &[Vertex]) -> Self {
    Self::build(vertices, None)
  }

  /// Upload indexed triangle geometry; `indices` reference positions in `vertices`.
  pub fn indexed(vertices: &[Vertex], indices: &[u32]) -> Self {
    Self::build(vertices, Some(indices))
  }

  fn build(vertices: &[Vertex], indices: Option<&[u32]>) -> Self {
    let mut vao: GLuint = 0;
    let mut vbo: GLuint = 0;

    unsafe {
      gl::GenVertexArrays(1, &mut vao);
      gl::BindVertexArray(vao);

      gl::GenBuffers(1, &mut vbo);
      gl::BindBuffer(gl::ARRAY_BUFFER, vbo);
      gl::BufferData(
        gl::ARRAY_BUFFER,
        mem::size_of_val(vertices) as GLsizeiptr,
        vertices.as_ptr() as *const c_void,
        gl::STATIC_DRAW,
      );

      let ibo = indices.map(|indices| {
        let mut ibo: GLuint = 0;
        gl::GenBuffers(1, &mut ibo);
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ibo);
        gl::BufferData(
          gl::ELEMENT_ARRAY_BUFFER,
          mem::size_of_val(indices) as GLsizeiptr,
          indices.as_ptr() as *const c_void,
          gl::STATIC_DRAW,
        );

        ibo
      });

      // three tightly packed, non-normalized floats at attribute location 0
      gl::VertexAttribPointer(0, 3, gl::FLOAT, gl::FALSE, 0, null());
      gl::EnableVertexAttribArray(0);

      gl::BindBuffer(gl::ARRAY_BUFFER, 0);

      // the index buffer binding is part of the vertex array state; only unbind it once the
      // vertex array itself is unbound
      gl::BindVertexArray(0);
      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);

      Mesh {
        vao,
        vbo,
        ibo,
        vert_nb: vertices.len() as GLsizei,
        index_nb: indices.map(|i| i.len()).unwrap_or(0) as GLsizei,
      }
    }
  }

  /// Issue one triangle draw call over the uploaded geometry.
  pub fn render(&self) {
    unsafe {
      gl::BindVertexArray(self.vao);

      if self.ibo.is_some() {
        gl::DrawElements(gl::TRIANGLES, self.index_nb, gl::UNSIGNED_INT, null());
      } else {
        gl::DrawArrays(gl::TRIANGLES, 0, self.vert_nb);
      }

      gl::BindVertexArray(0);
    }
  }
}

impl Drop for Mesh {
  fn drop(&mut self) {
    unsafe {
      if let Some(ibo) = self.ibo {
        gl::DeleteBuffers(1, &ibo);
      }

      gl::DeleteBuffers(1, &self.vbo);
      gl::DeleteVertexArrays(1, &self.vao);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::mem;

  // the attribute pointer above assumes vertices are nothing but three packed floats
  #[test]
  fn vertex_is_three_packed_floats() {
    assert_eq!(mem::size_of::<Vertex>(), 12);
    assert_eq!(mem::align_of::<Vertex>(), 4);
  }
}
