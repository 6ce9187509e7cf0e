//! Manual integration tests.
//!
//! These checks need a live OpenGL context, so they run as a regular binary instead of under
//! `cargo test`: pass the name of the fixture to run as the first argument.

use colored::Colorize as _;

macro_rules! tests {
  ($($name:expr, $module:ident),*) => {
    // declare the modules for all tests
    $(
      mod $module;
    )*

    // list of all available integration tests
    const TEST_NAMES: &[&str] = &[$( $name ),*];

    // run a given test
    fn run_test(name: &str) {
      $(
        if name == $name {
          $module::fixture();
          println!("{} {}", name.green(), "ok".green());
          return;
        }
      )*

      else {
        println!("{} is not a valid test. Possible values", name.red());

        for test_name in TEST_NAMES {
          println!("  -> {}", test_name.blue());
        }
      }
    }
  }
}

tests! {
  "shader-build", shader_build,
  "shader-compile-error", shader_compile_error,
  "inactive-uniform", inactive_uniform,
  "mesh-draw", mesh_draw
}

mod common;

fn main() {
  let test_name = std::env::args().skip(1).next();

  if let Some(test_name) = test_name {
    println!("test name: {}", test_name.green());

    run_test(&test_name);
  } else {
    println!("Please provide a test name. Possible values");

    for test_name in TEST_NAMES {
      println!("  -> {}", test_name.blue());
    }
  }
}
