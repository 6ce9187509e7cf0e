//! Per-frame scalar animation state.
//!
//! The course samples animate their transforms with two kinds of scalars: values that move by a
//! fixed step and bounce between two bounds ([`Bounce`]), and angles that grow by a fixed step
//! and wrap at 360 degrees ([`Spin`]). Both are pure math and advance deterministically, once
//! per frame, with no external input.

/// A scalar that moves by a fixed step and bounces between two bounds.
///
/// The direction flips exactly when a bound is reached; the value is clamped to the bound at
/// that point, so it never leaves `[min, max]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounce {
  value: f32,
  step: f32,
  min: f32,
  max: f32,
  increasing: bool,
}

impl Bounce {
  /// Start at `value`, moving upwards by `step` within `[min, max]`.
  pub fn new(value: f32, step: f32, min: f32, max: f32) -> Self {
    Bounce {
      value,
      step,
      min,
      max,
      increasing: true,
    }
  }

  /// Bounce within `[-max, max]`, starting at 0.
  pub fn symmetric(step: f32, max: f32) -> Self {
    Self::new(0., step, -max, max)
  }

  /// Move one step, flipping direction when a bound is reached. Returns the new value.
  pub fn advance(&mut self) -> f32 {
    if self.increasing {
      self.value += self.step;
    } else {
      self.value -= self.step;
    }

    if self.value >= self.max {
      self.value = self.max;
      self.increasing = false;
    } else if self.value <= self.min {
      self.value = self.min;
      self.increasing = true;
    }

    self.value
  }

  /// Current value.
  pub fn value(&self) -> f32 {
    self.value
  }

  /// Whether the next step moves upwards.
  pub fn increasing(&self) -> bool {
    self.increasing
  }
}

/// An angle in degrees that grows by a fixed step and wraps within `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spin {
  angle: f32,
  step: f32,
}

impl Spin {
  /// Start at 0 degrees, growing by `step` degrees per frame.
  pub fn new(step: f32) -> Self {
    Spin { angle: 0., step }
  }

  /// Move one step, subtracting 360 exactly once on overflow. Returns the new angle.
  pub fn advance(&mut self) -> f32 {
    self.angle += self.step;

    if self.angle >= 360. {
      self.angle -= 360.;
    }

    self.angle
  }

  /// Current angle, in degrees.
  pub fn angle(&self) -> f32 {
    self.angle
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  // binary-exact steps make the flip counts below exact in f32

  #[test]
  fn bounce_flips_exactly_at_the_upper_bound() {
    let mut b = Bounce::symmetric(0.125, 0.5);

    for _ in 0..3 {
      b.advance();
      assert!(b.increasing());
    }

    // fourth step reaches the bound
    assert_eq!(b.advance(), 0.5);
    assert!(!b.increasing());
  }

  #[test]
  fn bounce_reaches_the_lower_bound_and_comes_back() {
    let mut b = Bounce::symmetric(0.125, 0.5);

    // up to +0.5 in 4 steps, down to -0.5 in 8 more
    for _ in 0..12 {
      b.advance();
    }

    assert_eq!(b.value(), -0.5);
    assert!(b.increasing());

    assert_eq!(b.advance(), -0.375);
  }

  #[test]
  fn bounce_with_asymmetric_bounds() {
    let mut b = Bounce::new(0.25, 0.125, 0.125, 0.75);

    for _ in 0..4 {
      b.advance();
    }

    assert_eq!(b.value(), 0.75);
    assert!(!b.increasing());

    for _ in 0..5 {
      b.advance();
    }

    assert_eq!(b.value(), 0.125);
    assert!(b.increasing());
  }

  // the literal tutorial constants are not exactly representable, so only the bounds and the
  // flip positions are asserted here
  #[test]
  fn bounce_never_leaves_its_range_with_the_tutorial_constants() {
    let mut offset = Bounce::symmetric(0.005, 0.7);
    let mut flips = 0;
    let mut was_increasing = offset.increasing();

    for _ in 0..10_000 {
      let v = offset.advance();
      assert!(v >= -0.7 && v <= 0.7);

      if offset.increasing() != was_increasing {
        flips += 1;
        assert!(v == 0.7 || v == -0.7, "flipped away from a bound: {}", v);
        was_increasing = offset.increasing();
      }
    }

    assert!(flips > 0);
  }

  #[test]
  fn size_bounce_stays_within_the_tutorial_bounds() {
    let mut size = Bounce::new(0.4, 0.001, 0.1, 0.8);

    for _ in 0..10_000 {
      let v = size.advance();
      assert!(v >= 0.1 && v <= 0.8);
    }
  }

  #[test]
  fn spin_wraps_to_zero_at_360() {
    let mut spin = Spin::new(0.5);

    for _ in 0..719 {
      let a = spin.advance();
      assert!(a < 360.);
    }

    assert_eq!(spin.angle(), 359.5);
    assert_eq!(spin.advance(), 0.);
  }

  #[test]
  fn spin_stays_within_range_with_the_tutorial_constants() {
    let mut spin = Spin::new(0.1);
    let mut wraps = 0;
    let mut previous = spin.angle();

    for _ in 0..100_000 {
      let a = spin.advance();
      assert!(a >= 0. && a < 360., "angle left [0, 360): {}", a);

      if a < previous {
        wraps += 1;
        // one subtraction per overflow lands just above zero, never lower
        assert!(a < spin.step, "wrapped too far: {}", a);
      }

      previous = a;
    }

    assert!(wraps > 0);
  }

  #[test]
  fn spin_subtracts_360_once_per_overflow() {
    let mut spin = Spin::new(45.);

    for _ in 0..7 {
      spin.advance();
    }

    assert_eq!(spin.angle(), 315.);
    assert_eq!(spin.advance(), 0.);
    assert_eq!(spin.advance(), 45.);
  }
}
