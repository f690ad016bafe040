//! Entry points the host firmware invokes.
//!
//! The firmware owns the event loop, the matrix scan and all shared
//! state; every hook here runs synchronously to completion on the
//! firmware's thread and reads state through the snapshot it is
//! handed.

use ap2_types::led_indicator::LedIndicator;

use crate::keymap::{KeyMap, LayerMask};
use crate::light::{LedDriver, LightService};

/// The user-level callbacks, bundling the layer table with the
/// layer/LED bridge.
pub struct UserHooks<'a, D: LedDriver, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,
    light: LightService<D>,
}

impl<'a, D: LedDriver, const ROW: usize, const COL: usize, const NUM_LAYER: usize>
    UserHooks<'a, D, ROW, COL, NUM_LAYER>
{
    pub fn new(keymap: KeyMap<'a, ROW, COL, NUM_LAYER>, light: LightService<D>) -> Self {
        Self { keymap, light }
    }

    /// The layer table, consulted by the firmware's key-resolution
    /// routine on every key transition.
    pub fn keymap(&mut self) -> &mut KeyMap<'a, ROW, COL, NUM_LAYER> {
        &mut self.keymap
    }

    /// Invoked once while the matrix is initialized.
    pub fn matrix_init(&mut self) {}

    /// Invoked on every scan cycle.
    pub fn matrix_scan(&mut self) {}

    /// Invoked once after the keyboard is fully initialized.
    pub fn keyboard_post_init(&mut self) {
        self.light.post_init();
    }

    /// Invoked whenever the layer activation state changes. Observes
    /// the new state and returns it unchanged.
    pub fn layer_state_set(&mut self, mask: LayerMask) -> LayerMask {
        self.light.on_layer_change(mask);
        mask
    }

    /// Invoked after any lock-indicator state changes. Returns `true`:
    /// the report is fully handled here.
    pub fn led_update(&mut self, leds: LedIndicator) -> bool {
        let mask = self.keymap.layer_mask();
        self.light.on_indicator_change(mask, leds)
    }
}
