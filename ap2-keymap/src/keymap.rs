use ap2_types::action::KeyAction;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::event::KeyEvent;

/// Snapshot of the layer activation state, one bit per layer.
///
/// The activation state itself is owned by the host firmware; the
/// layer/LED bridge receives a `LayerMask` on each invocation and
/// never mutates it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LayerMask(u32);

impl LayerMask {
    pub const EMPTY: Self = Self(0);

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn into_bits(self) -> u32 {
        self.0
    }

    pub const fn with_layer(self, layer: u8) -> Self {
        Self(self.0 | (1 << layer))
    }

    pub const fn is_active(self, layer: u8) -> bool {
        self.0 & (1 << layer) != 0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The highest active layer, or 0 (the base layer) when no layer
    /// bit is set. Higher index wins when multiple layers are active.
    pub const fn highest_active(self) -> u8 {
        if self.0 == 0 {
            0
        } else {
            31 - self.0.leading_zeros() as u8
        }
    }
}

/// KeyMap represents the stack of layers.
///
/// The conception is borrowed from qmk: <https://docs.qmk.fm/#/keymap>.
///
/// The keymap is bound to the physical matrix: the firmware detects
/// hardware key strokes and uses `(layer, row, col)` to retrieve the
/// action. Grids are fixed at build time; the const parameters
/// guarantee every layer has the declared matrix shape and every cell
/// holds a defined action.
pub struct KeyMap<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Layers, ordered by stacking priority.
    layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
    /// Current activation state of each layer, mutated only on the
    /// firmware's behalf through the activate/deactivate calls below.
    layer_state: [bool; NUM_LAYER],
    /// Default layer number.
    default_layer: u8,
    /// Per-position layer cache: a release resolves on the layer that
    /// handled the press, even if the layer state changed in between.
    layer_cache: [[u8; COL]; ROW],
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> KeyMap<'a, ROW, COL, NUM_LAYER> {
    pub fn new(action_map: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER]) -> Self {
        KeyMap {
            layers: action_map,
            layer_state: [false; NUM_LAYER],
            default_layer: 0,
            layer_cache: [[0; COL]; ROW],
        }
    }

    pub fn get_keymap_config(&self) -> (usize, usize, usize) {
        (ROW, COL, NUM_LAYER)
    }

    /// Get the default layer number
    pub fn get_default_layer(&self) -> u8 {
        self.default_layer
    }

    /// Set the default layer number, the effect of a `DefaultLayer`
    /// cell. Persists until changed again.
    pub fn set_default_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.default_layer = layer_num;
    }

    /// Fetch the action at a given position, without layer fallthrough.
    pub fn get_action_at(&self, row: usize, col: usize, layer_num: usize) -> KeyAction {
        self.layers[layer_num][row][col]
    }

    /// Fetch the action for a key event, with layer fallthrough and
    /// the per-position layer cache.
    ///
    /// On press, layers are checked from the highest active one down
    /// to the default layer; a `Transparent` cell defers to the next
    /// lower active layer. On release, the action comes from the layer
    /// that resolved the press.
    pub fn get_action(&mut self, key_event: KeyEvent) -> KeyAction {
        let row = key_event.row as usize;
        let col = key_event.col as usize;
        if !key_event.pressed {
            // Releasing a pressed key, use the cached layer and restore the cache
            let layer = self.pop_layer_from_cache(row, col);
            return self.layers[layer as usize][row][col];
        }

        // Iterate from higher layer to lower layer, the lowest checked layer is the default layer
        for (layer_idx, layer) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                let action = layer[row][col];
                if action == KeyAction::Transparent {
                    continue;
                }

                // Found a valid action in the layer, cache it
                self.save_layer_cache(row, col, layer_idx as u8);

                return action;
            }

            if layer_idx as u8 == self.default_layer {
                // No action
                break;
            }
        }

        KeyAction::No
    }

    /// The highest active layer ("highest active layer wins").
    pub fn get_activated_layer(&self) -> u8 {
        for (layer_idx, _) in self.layers.iter().enumerate().rev() {
            if self.layer_state[layer_idx] || layer_idx as u8 == self.default_layer {
                return layer_idx as u8;
            }
        }

        self.default_layer
    }

    pub fn is_layer_active(&self, layer_num: u8) -> bool {
        (layer_num as usize) < NUM_LAYER && self.layer_state[layer_num as usize]
    }

    /// Snapshot the activation state for the layer/LED bridge.
    pub fn layer_mask(&self) -> LayerMask {
        let mut mask = LayerMask::EMPTY;
        for (layer_idx, active) in self.layer_state.iter().enumerate() {
            if *active {
                mask = mask.with_layer(layer_idx as u8);
            }
        }
        mask
    }

    /// Activate given layer
    pub fn activate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = true;
    }

    /// Deactivate given layer
    pub fn deactivate_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = false;
    }

    /// Toggle given layer
    pub fn toggle_layer(&mut self, layer_num: u8) {
        if layer_num as usize >= NUM_LAYER {
            warn!("Not a valid layer {}, keyboard supports only {} layers", layer_num, NUM_LAYER);
            return;
        }
        self.layer_state[layer_num as usize] = !self.layer_state[layer_num as usize];
    }

    fn pop_layer_from_cache(&mut self, row: usize, col: usize) -> u8 {
        let layer = self.layer_cache[row][col];
        self.layer_cache[row][col] = self.default_layer;

        layer
    }

    fn save_layer_cache(&mut self, row: usize, col: usize, layer_num: u8) {
        self.layer_cache[row][col] = layer_num;
    }
}

#[cfg(test)]
mod test {
    use ap2_types::action::{Action, KeyAction};
    use ap2_types::keycode::KeyCode;

    use super::*;
    use crate::event::KeyEvent;
    use crate::{a, k, layer, lt, mo};

    const ROW: usize = 2;
    const COL: usize = 3;
    const NUM_LAYER: usize = 3;

    #[rustfmt::skip]
    static KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
        layer!([
            [k!(A), k!(B), mo!(1)],
            [k!(C), k!(D), lt!(2, Space)]
        ]),
        layer!([
            [k!(F1), a!(Transparent), a!(Transparent)],
            [a!(Transparent), k!(F2), a!(No)]
        ]),
        layer!([
            [a!(Transparent), k!(Kp1), a!(Transparent)],
            [a!(Transparent), a!(Transparent), a!(Transparent)]
        ]),
    ];

    #[test]
    fn base_layer_lookup() {
        let mut keymap = KeyMap::new(&KEYMAP);
        assert_eq!(keymap.get_action(KeyEvent::key_down(0, 0)), k!(A));
        assert_eq!(keymap.get_action(KeyEvent::key_down(0, 2)), mo!(1));
    }

    #[test]
    fn transparent_falls_through_to_base() {
        let mut keymap = KeyMap::new(&KEYMAP);
        keymap.activate_layer(1);
        // Defined on layer 1.
        assert_eq!(keymap.get_action(KeyEvent::key_down(0, 0)), k!(F1));
        // Transparent on layer 1, falls through to the base layer.
        assert_eq!(keymap.get_action(KeyEvent::key_down(0, 1)), k!(B));
        // `No` does not fall through.
        assert_eq!(keymap.get_action(KeyEvent::key_down(1, 2)), a!(No));
    }

    #[test]
    fn transparent_falls_through_recursively() {
        let mut keymap = KeyMap::new(&KEYMAP);
        keymap.activate_layer(1);
        keymap.activate_layer(2);
        // Transparent on layer 2 and layer 1, resolves on the base layer.
        assert_eq!(keymap.get_action(KeyEvent::key_down(0, 2)), mo!(1));
        // Transparent on layer 2, resolves on layer 1.
        assert_eq!(keymap.get_action(KeyEvent::key_down(0, 0)), k!(F1));
        // Defined on layer 2 wins over both lower layers.
        assert_eq!(keymap.get_action(KeyEvent::key_down(0, 1)), k!(Kp1));
    }

    #[test]
    fn release_uses_press_time_layer() {
        let mut keymap = KeyMap::new(&KEYMAP);
        keymap.activate_layer(1);
        assert_eq!(keymap.get_action(KeyEvent::key_down(1, 1)), k!(F2));
        // Layer deactivated before the release; the cached layer still resolves it.
        keymap.deactivate_layer(1);
        assert_eq!(keymap.get_action(KeyEvent::key_up(1, 1)), k!(F2));
        // Cache restored, the next release resolves on the default layer.
        assert_eq!(keymap.get_action(KeyEvent::key_up(1, 1)), k!(D));
    }

    #[test]
    fn highest_active_layer_wins() {
        let mut keymap = KeyMap::new(&KEYMAP);
        assert_eq!(keymap.get_activated_layer(), 0);
        keymap.activate_layer(1);
        assert_eq!(keymap.get_activated_layer(), 1);
        keymap.activate_layer(2);
        assert_eq!(keymap.get_activated_layer(), 2);
        keymap.deactivate_layer(2);
        assert_eq!(keymap.get_activated_layer(), 1);
    }

    #[test]
    fn layer_tap_cell_is_reachable() {
        let mut keymap = KeyMap::new(&KEYMAP);
        assert_eq!(
            keymap.get_action(KeyEvent::key_down(1, 2)),
            KeyAction::TapHold(Action::Key(KeyCode::Space), Action::LayerOn(2))
        );
    }

    #[test]
    fn default_layer_switch() {
        let mut keymap = KeyMap::new(&KEYMAP);
        keymap.set_default_layer(2);
        assert_eq!(keymap.get_default_layer(), 2);
        // Layers below the new default are not consulted.
        assert_eq!(keymap.get_action(KeyEvent::key_down(1, 0)), KeyAction::No);
        // Out-of-range request is ignored.
        keymap.set_default_layer(8);
        assert_eq!(keymap.get_default_layer(), 2);
    }

    #[test]
    fn layer_mask_snapshot() {
        let mut keymap = KeyMap::new(&KEYMAP);
        assert!(keymap.layer_mask().is_empty());
        keymap.activate_layer(1);
        let mask = keymap.layer_mask();
        assert!(mask.is_active(1));
        assert!(!mask.is_active(2));
        assert_eq!(mask.highest_active(), 1);
        assert!(keymap.is_layer_active(1));
    }

    #[test]
    fn out_of_range_layer_is_ignored() {
        let mut keymap = KeyMap::new(&KEYMAP);
        keymap.activate_layer(7);
        assert!(keymap.layer_mask().is_empty());
        keymap.toggle_layer(7);
        assert!(keymap.layer_mask().is_empty());
    }

    #[test]
    fn grid_dimensions_match_declared_matrix() {
        let keymap = KeyMap::new(&KEYMAP);
        assert_eq!(keymap.get_keymap_config(), (ROW, COL, NUM_LAYER));
    }
}
