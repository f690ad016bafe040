//! The `lanquil` Anne Pro 2 layout.
//!
//! Three layers on the 5x14 switch matrix: the base 60% layout, a
//! function layer with media, mouse, LED and Bluetooth controls, and a
//! keypad layer. Physical gaps in the matrix are `No` cells; a
//! `Transparent` cell defers to the next lower active layer.
//!
//! Keycode reference: <https://github.com/qmk/qmk_firmware/blob/master/docs/keycodes.md>

use ap2_types::action::{Action, KeyAction};
use ap2_types::keycode::KeyCode;
use ap2_types::modifier::{ModifierCombination, ALT, SHIFT};

use crate::{a, df, k, layer, mo, shifted};

pub const MATRIX_ROWS: usize = 5;
pub const MATRIX_COLS: usize = 14;
pub const NUM_LAYER: usize = 3;

/// Layer indices, ordered by stacking priority.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Layer {
    Base = 0,
    Fn = 1,
    Keypad = 2,
}

/// Tap `(`, hold left alt.
const LAPO: KeyAction = KeyAction::TapHold(
    Action::KeyWithModifier(KeyCode::Kc9, SHIFT),
    Action::Modifier(ALT),
);

/// Tap `)`, hold right alt.
const RAPC: KeyAction = KeyAction::TapHold(
    Action::KeyWithModifier(KeyCode::Kc0, SHIFT),
    Action::Modifier(ModifierCombination::new_from(true, false, true, false, false)),
);

#[rustfmt::skip]
pub static KEYMAP: [[[KeyAction; MATRIX_COLS]; MATRIX_ROWS]; NUM_LAYER] = [
    // Base: standard 60% layout, Fn on the caps position and right of space.
    layer!([
        [k!(Grave), k!(Kc1), k!(Kc2), k!(Kc3), k!(Kc4), k!(Kc5), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), k!(Minus), k!(Equal), k!(Backspace)],
        [k!(Tab), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(LeftBracket), k!(RightBracket), k!(Backslash)],
        [mo!(1), k!(A), k!(S), k!(D), k!(F), k!(G), k!(H), k!(J), k!(K), k!(L), k!(Semicolon), k!(Quote), k!(Enter), a!(No)],
        [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), a!(No), k!(RShift), a!(No)],
        [k!(LCtrl), k!(LGui), LAPO, a!(No), a!(No), a!(No), k!(Space), a!(No), a!(No), RAPC, mo!(1), k!(Escape), a!(No), k!(RCtrl)]
    ]),
    // Fn: function row, media and mouse keys, LED and Bluetooth controls.
    layer!([
        [k!(Escape), k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12), df!(0)],
        [k!(MouseBtn3), a!(No), k!(MouseUp), k!(MouseBtn2), k!(MouseWheelUp), k!(AudioVolUp), k!(LedNextIntensity), k!(LedNextAnimationSpeed), k!(LedOff), k!(LedOn), k!(PrintScreen), k!(Home), k!(End), df!(2)],
        [a!(No), k!(MouseLeft), k!(MouseDown), k!(MouseRight), k!(MouseWheelDown), k!(AudioVolDown), k!(Left), k!(Down), k!(Up), k!(Right), k!(PageUp), k!(PageDown), df!(1), a!(No)],
        [k!(MouseBtn1), k!(SystemSleep), k!(MediaNextTrack), k!(MediaPlayPause), k!(AudioMute), k!(Bt1), k!(Bt2), k!(BtUnpair), k!(UsbMode), k!(Insert), k!(Delete), a!(No), k!(CapsLock), a!(No)],
        [k!(LCtrl), a!(Transparent), k!(LAlt), a!(No), a!(No), a!(No), k!(MouseAccel1), a!(No), a!(No), k!(MacroRecord1), a!(No), k!(Menu), a!(No), k!(MacroPlay1)]
    ]),
    // Keypad: numpad on the right hand, locked in via Fn+End until Fn+Esc.
    layer!([
        [a!(No), a!(No), a!(No), a!(No), a!(No), shifted!(Kc5), k!(KpEqual), k!(KpSlash), k!(KpAsterisk), a!(No), a!(No), a!(No), a!(No), df!(0)],
        [k!(Tab), a!(No), k!(Up), a!(No), a!(No), k!(KpComma), k!(Kp7), k!(Kp8), k!(Kp9), k!(KpMinus), a!(No), a!(No), a!(No), k!(NumLock)],
        [mo!(1), k!(Left), k!(Down), k!(Right), a!(No), k!(KpEnter), k!(Kp4), k!(Kp5), k!(Kp6), k!(KpPlus), a!(No), a!(No), a!(No), a!(No)],
        [k!(LShift), a!(No), a!(No), a!(No), a!(No), k!(Backspace), k!(Kp1), k!(Kp2), k!(Kp3), k!(KpDot), a!(No), a!(No), k!(RShift), a!(No)],
        [k!(LCtrl), k!(LGui), LAPO, a!(No), a!(No), a!(No), k!(Kp0), a!(No), a!(No), RAPC, mo!(1), k!(Escape), a!(No), k!(RCtrl)]
    ]),
];
