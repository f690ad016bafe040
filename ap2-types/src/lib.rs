//! # Anne Pro 2 types
//!
//! Fundamental type definitions shared by the keymap crate:
//!
//! - [`action`] - Key actions stored in the keymap (key presses, layer operations)
//! - [`keycode`] - Keycode definitions, HID keycodes plus the Anne Pro 2 vendor range
//! - [`modifier`] - Modifier key combinations
//! - [`led_indicator`] - Lock indicator flags reported by the host
//! - [`color`] - LED colors used by the layer/LED bridge
//!
//! Everything in this crate is plain data: constructors and queries only,
//! no behavior. The `defmt` feature adds `defmt::Format` derives for
//! logging on embedded targets.

#![no_std]

pub mod action;
pub mod color;
pub mod keycode;
pub mod led_indicator;
pub mod modifier;
