//! LED colors used by the layer/LED bridge.
//!
//! Colors are transient values: computed fresh on each callback
//! invocation and handed straight to the LED driver, never stored.

use serde::{Deserialize, Serialize};

/// A board-wide foreground color, applied on top of the active
/// animation profile.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Rgb {
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    pub const RED: Self = Self::new(0xFF, 0x00, 0x00);
    pub const GREEN: Self = Self::new(0x00, 0xFF, 0x00);
    pub const BLUE: Self = Self::new(0x00, 0x00, 0xFF);
    pub const CYAN: Self = Self::new(0x00, 0xFF, 0xFF);
    pub const WHITE: Self = Self::new(0xFF, 0xFF, 0xFF);
}

/// A per-key color override. `alpha = 0` clears the override so the
/// key falls back to the animation profile underneath.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rgba {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub alpha: u8,
}

impl Rgba {
    pub const fn new(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self { red, green, blue, alpha }
    }

    /// A fully opaque color.
    pub const fn opaque(color: Rgb) -> Self {
        Self::new(color.red, color.green, color.blue, 0xFF)
    }

    pub const fn is_transparent(self) -> bool {
        self.alpha == 0
    }

    /// Clears a per-key override.
    pub const TRANSPARENT: Self = Self::new(0xFF, 0x00, 0x00, 0x00);
    pub const RED: Self = Self::opaque(Rgb::RED);
}
