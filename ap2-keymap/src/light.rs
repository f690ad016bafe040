//! The layer/LED bridge.
//!
//! Two reactions to firmware-owned state: layer-activation changes map
//! to a board-wide foreground color, lock-indicator changes map to
//! per-key overrides on the configured caps-lock keys. Both are pure
//! functions of their inputs; pixel output is delegated to the
//! firmware's LED driver, whose calls are fire-and-forget.

use ap2_types::color::{Rgb, Rgba};
use ap2_types::led_indicator::LedIndicator;
use log::debug;

use crate::config::LightConfig;
use crate::keymap::LayerMask;

/// The firmware's LED command surface.
///
/// All commands are fire-and-forget: failures are unobservable to this
/// crate and are neither retried nor surfaced.
pub trait LedDriver {
    /// Enable the LED subsystem.
    fn enable(&mut self);
    /// Select a named animation profile by index.
    fn set_profile(&mut self, index: u8);
    /// Advance the animation speed one step.
    fn next_animation_speed(&mut self);
    /// Apply a board-wide foreground color.
    fn set_foreground(&mut self, color: Rgb);
    /// Reset the foreground back to the profile default.
    fn reset_foreground(&mut self);
    /// Override a single key's color. A fully-transparent color clears
    /// the override.
    fn set_key_color(&mut self, row: u8, col: u8, color: Rgba);
}

/// The layer/LED bridge: owns the driver handle and a static profile,
/// no state of its own.
pub struct LightService<D: LedDriver> {
    driver: D,
    config: &'static LightConfig,
}

impl<D: LedDriver> LightService<D> {
    pub fn new(driver: D, config: &'static LightConfig) -> Self {
        Self { driver, config }
    }

    /// Post-boot LED setup: enable the subsystem, select the
    /// configured animation profile and slow the animation down by the
    /// configured number of steps.
    pub fn post_init(&mut self) {
        self.driver.enable();
        self.driver.set_profile(self.config.profile);
        for _ in 0..self.config.animation_speed_steps {
            self.driver.next_animation_speed();
        }
    }

    /// Reaction to a layer-activation change.
    ///
    /// The highest active layer selects the foreground color; when it
    /// has no configured color the foreground resets to the profile
    /// default. Same mask, same requested color.
    pub fn on_layer_change(&mut self, mask: LayerMask) {
        let layer = mask.highest_active();
        match self.config.layer_color(layer) {
            Some(color) => {
                debug!("layer {} active, setting foreground", layer);
                self.driver.set_foreground(color);
            }
            None => {
                debug!("no color layer active, resetting foreground");
                self.driver.reset_foreground();
            }
        }
    }

    /// Reaction to a lock-indicator change.
    ///
    /// Caps lock on: opaque override on the configured keys. Caps lock
    /// off: clear the override, but only while no color-bearing layer
    /// is active, so the override does not fight the layer foreground.
    /// Returns `true`: no further default processing is needed.
    pub fn on_indicator_change(&mut self, mask: LayerMask, leds: LedIndicator) -> bool {
        if leds.caps_lock() {
            for pos in self.config.capslock_keys {
                self.driver.set_key_color(pos.row, pos.col, self.config.capslock_color);
            }
        } else if !self.color_layer_active(mask) {
            for pos in self.config.capslock_keys {
                self.driver.set_key_color(pos.row, pos.col, Rgba::TRANSPARENT);
            }
        }
        true
    }

    fn color_layer_active(&self, mask: LayerMask) -> bool {
        self.config.layer_colors.iter().any(|(layer, _)| mask.is_active(*layer))
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::config::{CAPS_KEY, SHIFT_PAIR};

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum LedCommand {
        Enable,
        SetProfile(u8),
        NextAnimationSpeed,
        SetForeground(Rgb),
        ResetForeground,
        SetKeyColor(u8, u8, Rgba),
    }

    #[derive(Default)]
    struct MockDriver {
        commands: Vec<LedCommand>,
    }

    impl LedDriver for MockDriver {
        fn enable(&mut self) {
            self.commands.push(LedCommand::Enable);
        }
        fn set_profile(&mut self, index: u8) {
            self.commands.push(LedCommand::SetProfile(index));
        }
        fn next_animation_speed(&mut self) {
            self.commands.push(LedCommand::NextAnimationSpeed);
        }
        fn set_foreground(&mut self, color: Rgb) {
            self.commands.push(LedCommand::SetForeground(color));
        }
        fn reset_foreground(&mut self) {
            self.commands.push(LedCommand::ResetForeground);
        }
        fn set_key_color(&mut self, row: u8, col: u8, color: Rgba) {
            self.commands.push(LedCommand::SetKeyColor(row, col, color));
        }
    }

    fn service(config: &'static LightConfig) -> LightService<MockDriver> {
        LightService::new(MockDriver::default(), config)
    }

    #[test]
    fn post_init_sequence() {
        let mut light = service(&SHIFT_PAIR);
        light.post_init();
        assert_eq!(
            light.driver.commands,
            [
                LedCommand::Enable,
                LedCommand::SetProfile(14),
                LedCommand::NextAnimationSpeed,
            ]
        );
    }

    #[test]
    fn fn_layer_requests_fn_color_once() {
        let mut light = service(&SHIFT_PAIR);
        light.on_layer_change(LayerMask::EMPTY.with_layer(1));
        assert_eq!(
            light.driver.commands,
            [LedCommand::SetForeground(Rgb::new(0x20, 0xFF, 0x4C))]
        );
    }

    #[test]
    fn no_color_layer_requests_reset() {
        let mut light = service(&SHIFT_PAIR);
        light.on_layer_change(LayerMask::EMPTY);
        assert_eq!(light.driver.commands, [LedCommand::ResetForeground]);
    }

    #[test]
    fn highest_layer_color_wins() {
        let mut light = service(&SHIFT_PAIR);
        light.on_layer_change(LayerMask::EMPTY.with_layer(1).with_layer(2));
        assert_eq!(
            light.driver.commands,
            [LedCommand::SetForeground(Rgb::new(0x00, 0xF0, 0xF0))]
        );
    }

    #[test]
    fn capslock_on_sets_red_override_on_both_shifts() {
        let mut light = service(&SHIFT_PAIR);
        let handled = light.on_indicator_change(LayerMask::EMPTY, LedIndicator::CAPS_LOCK);
        assert!(handled);
        assert_eq!(
            light.driver.commands,
            [
                LedCommand::SetKeyColor(3, 0, Rgba::RED),
                LedCommand::SetKeyColor(3, 12, Rgba::RED),
            ]
        );
    }

    #[test]
    fn capslock_off_clears_override_when_no_layer_active() {
        let mut light = service(&SHIFT_PAIR);
        let handled = light.on_indicator_change(LayerMask::EMPTY, LedIndicator::new());
        assert!(handled);
        assert_eq!(
            light.driver.commands,
            [
                LedCommand::SetKeyColor(3, 0, Rgba::TRANSPARENT),
                LedCommand::SetKeyColor(3, 12, Rgba::TRANSPARENT),
            ]
        );
    }

    #[test]
    fn capslock_off_defers_to_active_layer_color() {
        let mut light = service(&SHIFT_PAIR);
        let handled =
            light.on_indicator_change(LayerMask::EMPTY.with_layer(1), LedIndicator::new());
        assert!(handled);
        assert!(light.driver.commands.is_empty());
    }

    #[test]
    fn indicator_reaction_is_idempotent() {
        let mut light = service(&SHIFT_PAIR);
        light.on_indicator_change(LayerMask::EMPTY, LedIndicator::CAPS_LOCK);
        let first = light.driver.commands.clone();
        light.driver.commands.clear();
        light.on_indicator_change(LayerMask::EMPTY, LedIndicator::CAPS_LOCK);
        assert_eq!(light.driver.commands, first);
    }

    #[test]
    fn single_caps_key_profile() {
        let mut light = service(&CAPS_KEY);
        light.on_indicator_change(LayerMask::EMPTY, LedIndicator::CAPS_LOCK);
        assert_eq!(
            light.driver.commands,
            [LedCommand::SetKeyColor(2, 0, Rgba::RED)]
        );

        light.driver.commands.clear();
        light.on_layer_change(LayerMask::EMPTY.with_layer(1));
        assert_eq!(light.driver.commands, [LedCommand::SetForeground(Rgb::BLUE)]);
    }

    #[test]
    fn other_indicators_do_not_touch_capslock_keys() {
        let mut light = service(&SHIFT_PAIR);
        // Num lock on, caps lock off, keypad layer active: the
        // caps-off branch defers to the layer color and requests nothing.
        light.on_indicator_change(LayerMask::EMPTY.with_layer(2), LedIndicator::NUM_LOCK);
        assert!(light.driver.commands.is_empty());
    }
}
