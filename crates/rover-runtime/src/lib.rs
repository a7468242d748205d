//! `rover-runtime` – the command-polling fail-safe loop.
//!
//! # Modules
//!
//! - [`poller`] – [`CommandPoller`][poller::CommandPoller]: a bounded-timeout
//!   HTTP client for the controller's status endpoint, plus the
//!   [`PollError`][poller::PollError] fault classification and the
//!   [`DirectionSource`][poller::DirectionSource] seam tests script
//!   observations through.
//! - [`control_loop`] – [`ControlLoop`][control_loop::ControlLoop]: the
//!   poll → compare → dispatch cycle. Re-drives the wheels only when the
//!   observed directive differs from what was last applied, converts every
//!   link fault into a de-duplicated safe stop, and logs transitions only.

pub mod control_loop;
pub mod poller;

pub use control_loop::{Applied, ControlLoop, ControlLoopConfig, Step};
pub use poller::{CommandPoller, DirectionSource, PollError};
