//! Keymap tables and LED feedback for the Anne Pro 2.
//!
//! This crate holds the two pieces the host firmware calls into:
//!
//! - [`keymap::KeyMap`] - the stack of keymap layers the firmware's
//!   key-resolution routine consults on every key transition.
//! - [`light::LightService`] - the layer/LED bridge: reactions to
//!   layer-activation and lock-indicator changes, delegating pixel
//!   output to the firmware's LED driver through [`light::LedDriver`].
//!
//! Matrix scanning, debouncing, HID transport and the LED animation
//! engine all live in the host firmware; everything here is
//! synchronous configuration data plus a handful of callbacks, wired
//! up through [`hooks::UserHooks`]. The concrete Anne Pro 2 layout is
//! in [`keymaps`].

#![no_std]

pub mod config;
pub mod event;
pub mod hooks;
pub mod keymap;
pub mod keymaps;
#[macro_use]
pub mod layout_macro;
pub mod light;

pub use ap2_types as types;

pub use config::LightConfig;
pub use hooks::UserHooks;
pub use keymap::{KeyMap, LayerMask};
pub use light::{LedDriver, LightService};
