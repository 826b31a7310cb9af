//! Python `.pyi` stub emission.
//!
//! - `translate` maps one rustdoc type to Python type syntax
//! - `render` turns one function into a `def` block
//! - `assemble` sorts and joins the blocks into the final file

mod assemble;
mod render;
pub mod tables;
mod translate;

#[cfg(test)]
mod render_tests;
#[cfg(test)]
mod translate_tests;

pub use assemble::{assemble, render_group};
pub use render::render_function;
pub use translate::translate;
