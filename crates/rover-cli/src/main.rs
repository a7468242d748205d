//! `rover-cli` – the `roverd` ground-robot client binary.
//!
//! This binary is the process that lives on the robot. It:
//!
//! 1. Initialises structured logging (`RUST_LOG` filter, optional JSON).
//! 2. Loads `~/.rover/config.toml` with `ROVER_*` environment overrides.
//! 3. Probes the controller endpoint once and reports reachability.
//! 4. Intercepts **Ctrl-C** to stop the motors before exiting.
//! 5. Runs the polling control loop until shutdown or a hardware fault.

mod config;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use colored::Colorize;
use rover_hal::SimPort;
use rover_runtime::{CommandPoller, ControlLoop, PollError};
use rover_types::Direction;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // ── Structured logging ────────────────────────────────────────────────
    // Initialise tracing-subscriber using RUST_LOG (defaults to "info").
    // Set ROVER_LOG_FORMAT=json to emit newline-delimited JSON logs.
    // User-facing startup output still uses println! for UX consistency.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("ROVER_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }

    print_banner();

    // ── Configuration ─────────────────────────────────────────────────────
    let cfg = match config::load() {
        Ok(Some(cfg)) => {
            println!(
                "  Config loaded from {}",
                config::config_path().display().to_string().bold()
            );
            cfg
        }
        Ok(None) => {
            println!(
                "  No config at {}; using defaults.",
                config::config_path().display().to_string().dimmed()
            );
            config::Config::default()
        }
        Err(e) => {
            println!("{}: {e}", "Config error".red());
            println!("  Using default configuration.");
            config::Config::default()
        }
    };

    // ── Controller probe ──────────────────────────────────────────────────
    print!("\n  Probing controller at {} … ", cfg.endpoint.dimmed());
    match probe(&cfg).await {
        Ok(direction) => {
            println!("{} (current order: {direction})", "online".green());
        }
        Err(err) => {
            println!("{}", "offline".yellow());
            println!(
                "  {}  The loop will keep retrying and hold the wheels stopped.",
                err.to_string().dimmed()
            );
        }
    }
    println!();

    // ── Ctrl-C handler ────────────────────────────────────────────────────
    let shutdown = Arc::new(AtomicBool::new(false));
    let shutdown_clone = shutdown.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        println!();
        println!(
            "{}",
            "⚠  Ctrl-C received – stopping motors and exiting …"
                .yellow()
                .bold()
        );
        shutdown_clone.store(true, Ordering::SeqCst);
    }) {
        warn!(error = %e, "failed to install Ctrl-C handler; stop on Ctrl-C will not be graceful");
    }

    // ── Control loop ──────────────────────────────────────────────────────
    // SimPort records and traces would-be channel writes; a real chassis
    // plugs its motor driver in through the ActuatorPort trait.
    let port = Box::new(SimPort::new(cfg.channels));
    let mut control = match ControlLoop::from_config(&cfg.loop_config(), port) {
        Ok(control) => control,
        Err(e) => {
            error!(error = %e, "failed to build control loop");
            std::process::exit(1);
        }
    };

    info!(
        endpoint = %cfg.endpoint,
        interval_ms = cfg.poll_interval_ms,
        speed = cfg.default_speed,
        "polling controller"
    );
    if let Err(e) = control.run(shutdown).await {
        error!(error = %e, "hardware fault, aborting");
        std::process::exit(1);
    }
    println!("{}", "  ✓ Motors stopped. Exiting.".green());
}

/// One-shot reachability check against the configured endpoint.
async fn probe(cfg: &config::Config) -> Result<Direction, PollError> {
    CommandPoller::new(
        &cfg.endpoint,
        Duration::from_millis(cfg.request_timeout_ms),
    )?
    .poll_once()
    .await
}

fn print_banner() {
    println!();
    println!("{}", "  rover – remote drive client".bold().cyan());
    println!("{}", "  ───────────────────────────".cyan());
}
