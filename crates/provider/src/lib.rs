pub mod mounts;
pub mod system;

use hostpulse_core::provider::MetricsProvider;
use std::sync::Arc;

pub use system::SystemProvider;

/// Build the provider backing the HTTP handlers.
pub fn build_provider() -> Arc<dyn MetricsProvider> {
    if !sysinfo::IS_SUPPORTED_SYSTEM {
        tracing::warn!("sysinfo does not support this platform; metrics requests will fail");
    }
    Arc::new(SystemProvider::new())
}
