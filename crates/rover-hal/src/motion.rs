//! [`MotionController`] – the direction dispatcher.
//!
//! Maps a logical [`Direction`] onto concrete per-wheel commands and issues
//! them to the owned [`ActuatorPort`]. The mapping is a total table: every
//! direction, including `Stop`, resolves to a defined motor action, so there
//! is no implicit "anything else" path that could leave a wheel undriven.
//!
//! | Direction | Left wheel | Right wheel |
//! |---|---|---|
//! | `Forward` | forward @ speed | forward @ speed |
//! | `Backward` | backward @ speed | backward @ speed |
//! | `Left` (pivot) | backward @ speed | forward @ speed |
//! | `Right` (pivot) | forward @ speed | backward @ speed |
//! | `Stop` | halt | halt |

use rover_types::{Direction, RoverError, Spin, Wheel, WheelCommand};
use tracing::debug;

use crate::port::ActuatorPort;

/// The concrete motor action a direction resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    /// Drive both wheels with the given commands (left, right).
    Drive(WheelCommand, WheelCommand),
    /// Cut both duty cycles.
    Halt,
}

/// Resolve `direction` into the per-wheel plan at `speed`.
///
/// Pure and total; the side effects live in [`MotionController::apply`].
pub fn plan(direction: Direction, speed: u8) -> Motion {
    let cmd = |wheel, spin| WheelCommand { wheel, spin, speed };
    match direction {
        Direction::Forward => Motion::Drive(
            cmd(Wheel::Left, Spin::Forward),
            cmd(Wheel::Right, Spin::Forward),
        ),
        Direction::Backward => Motion::Drive(
            cmd(Wheel::Left, Spin::Backward),
            cmd(Wheel::Right, Spin::Backward),
        ),
        // Pivots counter-rotate the wheels.
        Direction::Left => Motion::Drive(
            cmd(Wheel::Left, Spin::Backward),
            cmd(Wheel::Right, Spin::Forward),
        ),
        Direction::Right => Motion::Drive(
            cmd(Wheel::Left, Spin::Forward),
            cmd(Wheel::Right, Spin::Backward),
        ),
        Direction::Stop => Motion::Halt,
    }
}

/// Owns the actuator port and a configured drive speed, and applies
/// directions to the drive base.
pub struct MotionController {
    port: Box<dyn ActuatorPort>,
    speed: u8,
}

impl MotionController {
    /// Wrap `port`, driving every command at `speed` percent duty cycle.
    pub fn new(port: Box<dyn ActuatorPort>, speed: u8) -> Self {
        Self { port, speed }
    }

    /// Apply `direction` to the drive base.
    ///
    /// Total over [`Direction`]; the stop path addresses both wheels
    /// unconditionally so there is never a half-driven intermediate state.
    ///
    /// # Errors
    ///
    /// Fails only through the port itself ([`RoverError::HardwareFault`]),
    /// which callers treat as fatal.
    pub fn apply(&mut self, direction: Direction) -> Result<(), RoverError> {
        match plan(direction, self.speed) {
            Motion::Drive(left, right) => {
                debug!(%direction, speed = self.speed, "driving wheels");
                self.port.drive(left.wheel, left.spin, left.speed)?;
                self.port.drive(right.wheel, right.spin, right.speed)?;
            }
            Motion::Halt => {
                debug!("halting both wheels");
                self.port.stop(Wheel::Left)?;
                self.port.stop(Wheel::Right)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::channels::ChannelMap;
    use crate::sim::{PortEvent, SimPort};

    fn controller(speed: u8) -> (MotionController, crate::sim::Journal) {
        let port = SimPort::new(ChannelMap::default());
        let journal = port.journal();
        (MotionController::new(Box::new(port), speed), journal)
    }

    #[test]
    fn straight_line_commands_use_identical_spins() {
        for direction in [Direction::Forward, Direction::Backward] {
            match plan(direction, 100) {
                Motion::Drive(left, right) => {
                    assert_eq!(left.spin, right.spin, "{direction} must not pivot");
                    assert_eq!(left.wheel, Wheel::Left);
                    assert_eq!(right.wheel, Wheel::Right);
                }
                Motion::Halt => panic!("{direction} must drive"),
            }
        }
    }

    #[test]
    fn pivots_use_opposite_spins() {
        match plan(Direction::Left, 100) {
            Motion::Drive(left, right) => {
                assert_eq!(left.spin, Spin::Backward);
                assert_eq!(right.spin, Spin::Forward);
            }
            Motion::Halt => panic!("left pivot must drive"),
        }
        match plan(Direction::Right, 100) {
            Motion::Drive(left, right) => {
                assert_eq!(left.spin, Spin::Forward);
                assert_eq!(right.spin, Spin::Backward);
            }
            Motion::Halt => panic!("right pivot must drive"),
        }
    }

    #[test]
    fn stop_resolves_to_halt() {
        assert_eq!(plan(Direction::Stop, 100), Motion::Halt);
    }

    #[test]
    fn plan_carries_the_configured_speed() {
        match plan(Direction::Forward, 60) {
            Motion::Drive(left, right) => {
                assert_eq!(left.speed, 60);
                assert_eq!(right.speed, 60);
            }
            Motion::Halt => panic!("forward must drive"),
        }
    }

    #[test]
    fn apply_forward_drives_both_wheels() {
        let (mut motion, journal) = controller(100);
        motion.apply(Direction::Forward).unwrap();
        assert_eq!(
            journal.events(),
            vec![
                PortEvent::Drive {
                    wheel: Wheel::Left,
                    spin: Spin::Forward,
                    speed: 100,
                },
                PortEvent::Drive {
                    wheel: Wheel::Right,
                    spin: Spin::Forward,
                    speed: 100,
                },
            ]
        );
    }

    #[test]
    fn apply_stop_halts_both_wheels() {
        let (mut motion, journal) = controller(100);
        motion.apply(Direction::Stop).unwrap();
        assert_eq!(
            journal.events(),
            vec![
                PortEvent::Stop { wheel: Wheel::Left },
                PortEvent::Stop {
                    wheel: Wheel::Right
                },
            ]
        );
    }

    #[test]
    fn apply_is_total_over_directions() {
        let (mut motion, journal) = controller(100);
        for direction in [
            Direction::Forward,
            Direction::Backward,
            Direction::Left,
            Direction::Right,
            Direction::Stop,
        ] {
            motion.apply(direction).unwrap();
        }
        // Every direction produced exactly one action per wheel.
        assert_eq!(journal.events().len(), 10);
    }
}
