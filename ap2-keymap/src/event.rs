use serde::{Deserialize, Serialize};

/// A position in the physical switch matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

impl KeyPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

/// A physical key transition reported by the firmware's matrix scan.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
}

impl KeyEvent {
    pub const fn key_down(row: u8, col: u8) -> Self {
        Self { row, col, pressed: true }
    }

    pub const fn key_up(row: u8, col: u8) -> Self {
        Self { row, col, pressed: false }
    }
}
