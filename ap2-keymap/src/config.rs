//! Light profile configuration for the layer/LED bridge.
//!
//! The two shipped profiles correspond to the two observed keymap
//! variants. They differ in which keys carry the caps-lock override
//! and in the layer colors; the divergence is intentional, so they are
//! kept as distinct profiles instead of being unified.

use core::fmt;

use ap2_types::color::{Rgb, Rgba};

use crate::event::KeyPos;

/// Static configuration of the layer/LED bridge.
///
/// Fixed at build time, validated once against the declared matrix
/// dimensions. A malformed profile is a build defect, not a runtime
/// condition.
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LightConfig {
    /// Animation profile selected after boot.
    pub profile: u8,
    /// How many times to step the animation speed after boot.
    pub animation_speed_steps: u8,
    /// Foreground color per layer; layers without an entry reset to
    /// the profile default.
    pub layer_colors: &'static [(u8, Rgb)],
    /// Keys that carry the caps-lock override.
    pub capslock_keys: &'static [KeyPos],
    /// Override color while caps lock is on.
    pub capslock_color: Rgba,
}

impl LightConfig {
    /// The foreground color associated with a layer, if any.
    pub fn layer_color(&self, layer: u8) -> Option<Rgb> {
        self.layer_colors
            .iter()
            .find(|(l, _)| *l == layer)
            .map(|(_, color)| *color)
    }

    /// Check the profile against the declared matrix dimensions.
    pub fn validate(&self, rows: usize, cols: usize, num_layers: usize) -> Result<(), ConfigError> {
        for pos in self.capslock_keys {
            if pos.row as usize >= rows || pos.col as usize >= cols {
                return Err(ConfigError::KeyOutOfMatrix(*pos));
            }
        }
        for (layer, _) in self.layer_colors {
            if *layer as usize >= num_layers {
                return Err(ConfigError::LayerOutOfRange(*layer));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A caps-lock override key lies outside the switch matrix.
    KeyOutOfMatrix(KeyPos),
    /// A layer color refers to a layer the keymap does not have.
    LayerOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::KeyOutOfMatrix(pos) => {
                write!(f, "key ({}, {}) is outside the switch matrix", pos.row, pos.col)
            }
            ConfigError::LayerOutOfRange(layer) => {
                write!(f, "layer {} is outside the keymap's layer range", layer)
            }
        }
    }
}

/// Caps-lock override on both shift keys, green Fn layer, cyan keypad
/// layer. Used by the `lanquil` layout.
pub const SHIFT_PAIR: LightConfig = LightConfig {
    profile: 14,
    animation_speed_steps: 1,
    layer_colors: &[(1, Rgb::new(0x20, 0xFF, 0x4C)), (2, Rgb::new(0x00, 0xF0, 0xF0))],
    capslock_keys: &[KeyPos::new(3, 0), KeyPos::new(3, 12)],
    capslock_color: Rgba::RED,
};

/// Caps-lock override on the caps key only, blue Fn layer.
pub const CAPS_KEY: LightConfig = LightConfig {
    profile: 14,
    animation_speed_steps: 1,
    layer_colors: &[(1, Rgb::BLUE)],
    capslock_keys: &[KeyPos::new(2, 0)],
    capslock_color: Rgba::RED,
};
