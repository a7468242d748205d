use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Logical movement order issued by the remote controller.
///
/// The wire format is a lowercase string in the `direction` field of the
/// controller's status response. Parsing is total: anything that is not a
/// known order resolves to [`Direction::Stop`], so an absent, empty, or
/// garbled directive can never produce motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
    /// Pivot left in place (wheels counter-rotate).
    Left,
    /// Pivot right in place (wheels counter-rotate).
    Right,
    Stop,
}

impl Direction {
    /// Parse the `direction` field of a controller response.
    ///
    /// `None` means the field was absent. Unrecognized strings are treated
    /// identically to `"stop"` rather than reported as errors.
    pub fn from_wire(raw: Option<&str>) -> Self {
        match raw {
            Some("forward") => Direction::Forward,
            Some("backward") => Direction::Backward,
            Some("left") => Direction::Left,
            Some("right") => Direction::Right,
            // "stop", absent, and anything unrecognized all mean stop.
            _ => Direction::Stop,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Backward => write!(f, "backward"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::Stop => write!(f, "stop"),
        }
    }
}

/// One of the two independently driven motors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wheel {
    Left,
    Right,
}

/// Spin direction of a single wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spin {
    Forward,
    Backward,
}

/// A concrete drive order for one wheel: spin at `speed` percent duty cycle.
///
/// `speed` is bounded to 0–100 at the actuator boundary; see
/// `ActuatorPort::drive` in `rover-hal` for the out-of-range contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WheelCommand {
    pub wheel: Wheel,
    pub spin: Spin,
    pub speed: u8,
}

/// Synthetic link-health states tracked alongside real orders.
///
/// These exist only so the control loop can tell "still the same failure"
/// from "a new failure" and avoid re-dispatching a stop every cycle. They are
/// never sent to the actuator layer as such; both map to stop motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkFault {
    /// Controller unreachable, bad status, or any other unexpected fault.
    Error,
    /// The request exceeded the configured deadline.
    Timeout,
}

/// Workspace-wide error type.
#[derive(Error, Debug)]
pub enum RoverError {
    /// A write to the motor driver failed. There is no safe degraded mode
    /// for a robot that cannot command its motors, so callers treat this as
    /// fatal rather than retrying.
    #[error("hardware fault on {component}: {details}")]
    HardwareFault { component: String, details: String },

    /// Invalid or unusable configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
