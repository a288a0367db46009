//! Container health check: GET http://localhost:8080/health, exit 0 on 200.
//! Takes no arguments and prints nothing.

use hostpulse_core::config::{DEFAULT_PROBE_URL, ProbeConfig};
use hostpulse_core::probe;
use std::time::Duration;

fn main() {
    let code = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => {
            let timeout = Duration::from_secs(ProbeConfig::default().timeout_secs);
            runtime
                .block_on(probe::probe(DEFAULT_PROBE_URL, timeout))
                .exit_code()
        }
        Err(_) => 1,
    };
    std::process::exit(code);
}
