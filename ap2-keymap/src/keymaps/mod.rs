//! Concrete keymap definitions.

pub mod lanquil;
