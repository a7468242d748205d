//! `rover-hal` – the hardware boundary of the rover client.
//!
//! # Modules
//!
//! - [`port`] – [`ActuatorPort`][port::ActuatorPort]: the capability trait a
//!   motor-driver backend implements (`drive` / `stop`, one call per wheel).
//! - [`motion`] – [`MotionController`][motion::MotionController]: translates a
//!   logical [`Direction`][rover_types::Direction] into per-wheel commands via
//!   a total dispatch table and issues them to the port.
//! - [`channels`] – [`ChannelMap`][channels::ChannelMap]: the PWM-board
//!   wiring for the drive base. Configuration, not logic.
//! - [`sim`] – [`SimPort`][sim::SimPort]: an always-succeeding recording port
//!   for headless runs and tests; no physical hardware required.
//!
//! Real PWM drivers live outside this workspace and plug in through
//! [`ActuatorPort`][port::ActuatorPort].

pub mod channels;
pub mod motion;
pub mod port;
pub mod sim;

pub use channels::{ChannelMap, WheelChannels};
pub use motion::{Motion, MotionController};
pub use port::ActuatorPort;
pub use sim::{Journal, PortEvent, SimPort};
