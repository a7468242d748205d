//! In-process simulated actuator port for headless runs and tests.
//!
//! [`SimPort`] implements [`ActuatorPort`] without any physical hardware: it
//! resolves each call against a [`ChannelMap`], traces the would-be channel
//! writes, and records every accepted call in a shared [`Journal`] so tests
//! can assert on exactly what the loop dispatched.
//!
//! # Example
//!
//! ```rust
//! use rover_hal::{ActuatorPort, ChannelMap, SimPort};
//! use rover_types::{Spin, Wheel};
//!
//! let mut port = SimPort::new(ChannelMap::default());
//! let journal = port.journal();
//! port.drive(Wheel::Left, Spin::Forward, 100).unwrap();
//! assert_eq!(journal.events().len(), 1);
//! ```

use std::sync::{Arc, Mutex};

use rover_types::{RoverError, Spin, Wheel};
use tracing::debug;

use crate::channels::ChannelMap;
use crate::port::ActuatorPort;

/// One accepted port call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortEvent {
    Drive { wheel: Wheel, spin: Spin, speed: u8 },
    Stop { wheel: Wheel },
}

/// Shared handle onto a [`SimPort`]'s recorded calls.
///
/// Clone it before boxing the port; all clones observe the same history.
#[derive(Debug, Clone, Default)]
pub struct Journal(Arc<Mutex<Vec<PortEvent>>>);

impl Journal {
    /// Snapshot of every call recorded so far, in dispatch order.
    pub fn events(&self) -> Vec<PortEvent> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn push(&self, event: PortEvent) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).push(event);
    }
}

/// An always-succeeding recording port.
pub struct SimPort {
    map: ChannelMap,
    journal: Journal,
}

impl SimPort {
    /// Create a simulated port wired according to `map`.
    pub fn new(map: ChannelMap) -> Self {
        Self {
            map,
            journal: Journal::default(),
        }
    }

    /// Handle onto the call journal, for assertions.
    pub fn journal(&self) -> Journal {
        self.journal.clone()
    }
}

impl ActuatorPort for SimPort {
    fn drive(&mut self, wheel: Wheel, spin: Spin, speed: u8) -> Result<(), RoverError> {
        if speed > 100 {
            // Out-of-range duty cycle: the port contract says ignore it.
            return Ok(());
        }
        let ch = self.map.wheel(wheel);
        debug!(
            ?wheel,
            ?spin,
            speed,
            pwm = ch.pwm,
            in1 = ch.in1,
            in2 = ch.in2,
            "sim drive"
        );
        self.journal.push(PortEvent::Drive { wheel, spin, speed });
        Ok(())
    }

    fn stop(&mut self, wheel: Wheel) -> Result<(), RoverError> {
        let ch = self.map.wheel(wheel);
        debug!(?wheel, pwm = ch.pwm, "sim stop");
        self.journal.push(PortEvent::Stop { wheel });
        Ok(())
    }
}
