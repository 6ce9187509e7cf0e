//! Model matrix composition.

use cgmath::{Matrix4, Vector3};

/// Compose a model matrix out of a translation, a rotation and a scale.
///
/// The order is fixed and matters: the scale applies first, then the rotation, then the
/// translation, i.e. the matrix is `T * R * S`. Swapping any two of them yields a different
/// transform (a translation picked up by the scale, for instance).
pub fn compose(
  translation: Vector3<f32>,
  rotation: Matrix4<f32>,
  scale: Vector3<f32>,
) -> Matrix4<f32> {
  Matrix4::from_translation(translation)
    * rotation
    * Matrix4::from_nonuniform_scale(scale.x, scale.y, scale.z)
}

#[cfg(test)]
mod tests {
  use super::*;
  use cgmath::{Deg, Vector4};

  fn assert_close(actual: Vector4<f32>, expected: [f32; 4]) {
    for i in 0..4 {
      assert!(
        (actual[i] - expected[i]).abs() < 1e-5,
        "component {}: {} != {}",
        i,
        actual[i],
        expected[i]
      );
    }
  }

  #[test]
  fn translate_rotate_scale_in_that_order() {
    let m = compose(
      Vector3::new(0.5, 0., 0.),
      Matrix4::from_angle_z(Deg(90.)),
      Vector3::new(0.5, 0.5, 1.),
    );

    // (0, 1, 0) scales to (0, 0.5, 0), rotates to (-0.5, 0, 0), translates to the origin
    assert_close(m * Vector4::new(0., 1., 0., 1.), [0., 0., 0., 1.]);
  }

  #[test]
  fn reordering_the_composition_changes_the_result() {
    let t = Vector3::new(0.5, 0., 0.);
    let r = Matrix4::from_angle_z(Deg(90.));
    let s = Vector3::new(0.5, 0.5, 1.);
    let p = Vector4::new(0., 1., 0., 1.);

    let reordered = Matrix4::from_nonuniform_scale(s.x, s.y, s.z) * r * Matrix4::from_translation(t);

    // translating first lands elsewhere: (0.5, 1, 0) rotates to (-1, 0.5, 0), scales to
    // (-0.5, 0.25, 0)
    assert_close(reordered * p, [-0.5, 0.25, 0., 1.]);

    let composed = compose(t, r, s) * p;
    assert!((composed.x - (reordered * p).x).abs() > 0.1);
  }
}
