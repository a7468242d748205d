//! PWM-board channel wiring for the drive base.
//!
//! The wheel-to-channel mapping is configuration, not logic: a port
//! implementation resolves each [`Wheel`] to its speed channel and direction
//! pins through a [`ChannelMap`], and a differently wired chassis only needs
//! a different config file.

use rover_types::Wheel;
use serde::{Deserialize, Serialize};

/// Channel assignment for a single wheel on the PWM board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelChannels {
    /// Duty-cycle (speed) channel.
    pub pwm: u8,
    /// First direction pin.
    pub in1: u8,
    /// Second direction pin.
    pub in2: u8,
}

/// Wheel-to-channel mapping for the whole drive base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMap {
    pub left: WheelChannels,
    pub right: WheelChannels,
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            left: WheelChannels {
                pwm: 0,
                in1: 1,
                in2: 2,
            },
            right: WheelChannels {
                pwm: 5,
                in1: 3,
                in2: 4,
            },
        }
    }
}

impl ChannelMap {
    /// Channel assignment for `wheel`.
    pub fn wheel(&self, wheel: Wheel) -> WheelChannels {
        match wheel {
            Wheel::Left => self.left,
            Wheel::Right => self.right,
        }
    }
}
