//! [`ControlLoop`] – the poll → compare → dispatch cycle.
//!
//! Each tick polls the controller once, compares the observation against the
//! last applied state, and re-drives the wheels **only on change**. Repeated
//! identical polls are loop-level no-ops, so the hardware is not rewritten
//! ten times a second while the operator holds a direction.
//!
//! Link faults are folded into the same state machine: the first failure
//! commands a full stop and logs once; every following cycle with the same
//! fault kind is silent. Network and parsing faults never escape this loop —
//! the only error that propagates is a hardware write fault, which has no
//! recovery.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rover_hal::{ActuatorPort, MotionController};
use rover_types::{Direction, LinkFault, RoverError};
use tracing::{info, warn};

use crate::poller::{CommandPoller, DirectionSource};

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration bundle for [`ControlLoop`].
#[derive(Debug, Clone)]
pub struct ControlLoopConfig {
    /// Controller status endpoint (HTTP GET).
    pub endpoint: String,
    /// Per-request deadline.
    pub request_timeout: Duration,
    /// Sleep between polls. 100 ms ≙ 10 Hz.
    pub poll_interval: Duration,
    /// Duty-cycle percentage for every drive command.
    pub speed: u8,
}

impl Default for ControlLoopConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:5000/status".to_string(),
            request_timeout: Duration::from_secs(1),
            poll_interval: Duration::from_millis(100),
            speed: 100,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Loop state
// ─────────────────────────────────────────────────────────────────────────────

/// The last directive the loop acted on.
///
/// Fault markers are tracked alongside real orders so a persistent link
/// failure is dispatched (and logged) exactly once per fault kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Order(Direction),
    Fault(LinkFault),
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Observation matched the applied state; nothing was dispatched.
    Unchanged,
    /// A new order was dispatched to the wheels.
    Dispatched(Direction),
    /// The link went down (or changed fault kind); the wheels were stopped.
    SafeStopped(LinkFault),
}

// ─────────────────────────────────────────────────────────────────────────────
// ControlLoop
// ─────────────────────────────────────────────────────────────────────────────

/// The command-polling fail-safe loop.
///
/// Owns the direction source, the motion controller, and the single mutable
/// piece of state in the system: the [`Applied`] marker. There is exactly one
/// applied state at any instant; it is updated only after a successful
/// dispatch and never shared, so no locking is required.
pub struct ControlLoop<S> {
    source: S,
    motion: MotionController,
    poll_interval: Duration,
    applied: Applied,
}

impl ControlLoop<CommandPoller> {
    /// Build the production loop: HTTP poller plus motion over `port`.
    ///
    /// # Errors
    ///
    /// Returns [`RoverError::Config`] if the HTTP client cannot be built
    /// from the configured timeout.
    pub fn from_config(
        config: &ControlLoopConfig,
        port: Box<dyn ActuatorPort>,
    ) -> Result<Self, RoverError> {
        let poller = CommandPoller::new(&config.endpoint, config.request_timeout)
            .map_err(|e| RoverError::Config(format!("failed to build http client: {e}")))?;
        Ok(Self::new(
            poller,
            MotionController::new(port, config.speed),
            config.poll_interval,
        ))
    }
}

impl<S: DirectionSource> ControlLoop<S> {
    /// Assemble a loop from its parts. The applied state starts at
    /// `Order(Stop)`: nothing is dispatched until the first observed change.
    pub fn new(source: S, motion: MotionController, poll_interval: Duration) -> Self {
        Self {
            source,
            motion,
            poll_interval,
            applied: Applied::Order(Direction::Stop),
        }
    }

    /// The current applied state.
    pub fn applied(&self) -> Applied {
        self.applied
    }

    /// One poll → one dispatch decision.
    ///
    /// # Errors
    ///
    /// Every network fault is converted into a safe stop here; the only
    /// error that escapes is [`RoverError::HardwareFault`] from the port.
    pub async fn tick(&mut self) -> Result<Step, RoverError> {
        match self.source.poll().await {
            Ok(direction) => {
                if self.applied == Applied::Order(direction) {
                    return Ok(Step::Unchanged);
                }
                if matches!(self.applied, Applied::Fault(_)) {
                    info!(%direction, "link restored, new order");
                } else {
                    info!(%direction, "new order");
                }
                self.motion.apply(direction)?;
                self.applied = Applied::Order(direction);
                Ok(Step::Dispatched(direction))
            }
            Err(err) => {
                let fault = err.fault();
                if self.applied == Applied::Fault(fault) {
                    // Same failure as last cycle: the wheels are already
                    // stopped; don't re-log or re-drive at 10 Hz.
                    return Ok(Step::Unchanged);
                }
                warn!(%err, "link lost, stopping motors");
                self.motion.apply(Direction::Stop)?;
                self.applied = Applied::Fault(fault);
                Ok(Step::SafeStopped(fault))
            }
        }
    }

    /// Poll at the configured cadence until `shutdown` is raised, then
    /// command a final full stop.
    ///
    /// Strictly sequential: at most one request is in flight at any time,
    /// and the network timeout self-cancels a hanging one.
    ///
    /// # Errors
    ///
    /// Returns [`RoverError::HardwareFault`] if a port write fails; the loop
    /// does not retry hardware.
    pub async fn run(&mut self, shutdown: Arc<AtomicBool>) -> Result<(), RoverError> {
        info!("control loop running");
        while !shutdown.load(Ordering::SeqCst) {
            self.tick().await?;
            tokio::time::sleep(self.poll_interval).await;
        }
        info!("shutdown requested, stopping motors");
        self.motion.apply(Direction::Stop)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
