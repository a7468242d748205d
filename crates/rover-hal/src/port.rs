//! [`ActuatorPort`] – capability trait for the two-wheel motor driver.
//!
//! Implementations own the physical (or simulated) PWM backend. The rest of
//! the workspace only ever talks to this trait, so the motor driver can be
//! swapped without touching the control loop or the dispatcher.

use rover_types::{RoverError, Spin, Wheel};

/// A two-wheel PWM actuator capability.
pub trait ActuatorPort: Send {
    /// Set one wheel's direction pins and PWM duty cycle.
    ///
    /// `speed` is a duty-cycle percentage. Precondition: `speed <= 100`.
    /// A violation must be ignored as a silent no-op, never executed: an
    /// out-of-range command may not spin a wheel at undefined power, and the
    /// loop has no recovery path that would make an error useful.
    ///
    /// # Errors
    ///
    /// Returns [`RoverError::HardwareFault`] if the write to the underlying
    /// driver fails. Callers treat this as fatal.
    fn drive(&mut self, wheel: Wheel, spin: Spin, speed: u8) -> Result<(), RoverError>;

    /// Cut one wheel's duty cycle to zero, independent of direction pins.
    ///
    /// # Errors
    ///
    /// Returns [`RoverError::HardwareFault`] if the write fails.
    fn stop(&mut self, wheel: Wheel) -> Result<(), RoverError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal in-process port used only to pin down object safety.
    struct NullPort;

    impl ActuatorPort for NullPort {
        fn drive(&mut self, _wheel: Wheel, _spin: Spin, _speed: u8) -> Result<(), RoverError> {
            Ok(())
        }

        fn stop(&mut self, _wheel: Wheel) -> Result<(), RoverError> {
            Ok(())
        }
    }

    #[test]
    fn port_is_object_safe() {
        let mut port: Box<dyn ActuatorPort> = Box::new(NullPort);
        port.drive(Wheel::Left, Spin::Forward, 50).unwrap();
        port.stop(Wheel::Left).unwrap();
    }
}
