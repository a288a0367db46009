//! systemd notification protocol. Outside systemd there is no `NOTIFY_SOCKET`
//! and every call is a no-op; send failures are logged at `debug`.

use sd_notify::NotifyState;
use std::net::SocketAddr;

fn send(states: &[NotifyState<'_>]) {
    // Keep NOTIFY_SOCKET set: STOPPING is sent after READY
    if let Err(e) = sd_notify::notify(false, states) {
        tracing::debug!("sd-notify failed: {e}");
    }
}

/// Human-readable `STATUS=` line reported once the listener is bound.
pub fn ready_status(addr: SocketAddr) -> String {
    format!("Serving host metrics on {addr}")
}

/// READY=1 with the bound address as status.
pub fn ready(addr: SocketAddr) {
    let status = ready_status(addr);
    send(&[NotifyState::Ready, NotifyState::Status(&status)]);
}

/// STOPPING=1.
pub fn stopping() {
    send(&[NotifyState::Stopping, NotifyState::Status("Draining requests")]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_status_names_address() {
        let addr: SocketAddr = "127.0.0.1:8080".parse().unwrap();
        assert_eq!(ready_status(addr), "Serving host metrics on 127.0.0.1:8080");
    }

    #[test]
    fn test_ipv6_address() {
        let addr: SocketAddr = "[::1]:9100".parse().unwrap();
        assert!(ready_status(addr).ends_with("[::1]:9100"));
    }
}
