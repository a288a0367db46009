//! Process lifecycle: readiness notification, signal handling, and logging.

pub mod logging;
pub mod notify;
pub mod signal;

use std::net::SocketAddr;

/// Hooks around the listener's lifetime.
pub trait Lifecycle: Send + Sync {
    /// The listener is bound to `addr` and about to accept connections.
    fn on_ready(&self, addr: SocketAddr);
    /// Shutdown was requested; in-flight requests are draining.
    fn on_stopping(&self);
}

/// Plain process: log only.
pub struct ForegroundLifecycle;

impl Lifecycle for ForegroundLifecycle {
    fn on_ready(&self, addr: SocketAddr) {
        tracing::info!(%addr, "{}", notify::ready_status(addr));
    }

    fn on_stopping(&self) {
        tracing::info!("Draining in-flight requests...");
    }
}

/// Under systemd `Type=notify`: log and report READY/STOPPING with a status line.
pub struct SystemdLifecycle;

impl Lifecycle for SystemdLifecycle {
    fn on_ready(&self, addr: SocketAddr) {
        notify::ready(addr);
        tracing::info!(%addr, "{} (notified systemd)", notify::ready_status(addr));
    }

    fn on_stopping(&self) {
        notify::stopping();
        tracing::info!("Draining in-flight requests (notified systemd)...");
    }
}

/// `SystemdLifecycle` when `NOTIFY_SOCKET` is set, else `ForegroundLifecycle`.
pub fn detect_lifecycle() -> Box<dyn Lifecycle> {
    if std::env::var_os("NOTIFY_SOCKET").is_some() {
        Box::new(SystemdLifecycle)
    } else {
        Box::new(ForegroundLifecycle)
    }
}
