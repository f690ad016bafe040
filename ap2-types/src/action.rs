//! Key actions stored in the keymap.
//!
//! Every cell of a keymap grid holds a [`KeyAction`]: either a plain
//! key, a layer operation, or a tap/hold pair. Transparent cells defer
//! to the next lower active layer during resolution.

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A single basic operation the keyboard can execute.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// Default action, no action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A normal key stroke.
    Key(KeyCode),
    /// Key stroke with a modifier combination held.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// A modifier combination on its own, used as a tap-hold hold action.
    Modifier(ModifierCombination),
    /// Activate a layer while held (momentary).
    LayerOn(u8),
    /// Persistently switch the default layer.
    DefaultLayer(u8),
}

/// A KeyAction is the action at a keyboard position, stored in the keymap.
/// It can be a single action like triggering a key, or a composite
/// behavior like tap/hold.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Transparent action, next layer will be checked.
    Transparent,
    /// A single action, triggered when pressed and cancelled when released.
    Single(Action),
    /// Tap/hold pair: tap triggers the first action, hold triggers the second.
    /// A layer-tap key is `TapHold(Key(k), LayerOn(l))`.
    TapHold(Action, Action),
}

impl KeyAction {
    /// Convert `KeyAction` to the inner `Action`.
    /// Only valid for the `Single` variant, returns `Action::No` otherwise.
    pub fn to_action(self) -> Action {
        match self {
            KeyAction::Single(a) => a,
            _ => Action::No,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, KeyAction::No)
    }

    pub fn is_transparent(&self) -> bool {
        matches!(self, KeyAction::Transparent)
    }
}
