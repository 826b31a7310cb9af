//! Stub generation for target languages.

pub mod python;
