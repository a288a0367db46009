use crate::error::ProviderError;
use std::path::{Path, PathBuf};

/// Point-in-time virtual memory counters, in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MemorySnapshot {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub available: u64,
    /// `used / total * 100`.
    pub used_percent: f64,
    pub swap_total: u64,
    /// Swap currently in use (`swap_total - swap_free`).
    ///
    /// Not the kernel's swap-cache counter: that figure is pages that were
    /// swapped back in and still have a copy in swap, which understates use.
    pub swap_used: u64,
    pub swap_free: u64,
}

/// Usage of the filesystem holding a given path, in bytes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiskUsage {
    pub mount_point: PathBuf,
    pub total: u64,
    pub used: u64,
    pub free: u64,
    /// `used / total * 100`.
    pub used_percent: f64,
}

/// Source of host statistics.
///
/// Every call samples the OS synchronously and may block, so callers on an
/// async runtime should run them on a blocking thread.
pub trait MetricsProvider: Send + Sync {
    /// Aggregate CPU utilization across all cores since the previous call.
    fn cpu_percent(&self) -> Result<f64, ProviderError>;

    /// Number of logical CPUs.
    fn cpu_count(&self) -> Result<usize, ProviderError>;

    fn virtual_memory(&self) -> Result<MemorySnapshot, ProviderError>;

    /// Usage of the mounted filesystem that contains `path`.
    fn disk_usage(&self, path: &Path) -> Result<DiskUsage, ProviderError>;
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
pub fn percent_of(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_of() {
        assert_eq!(percent_of(1, 4), 25.0);
        assert_eq!(percent_of(0, 10), 0.0);
        assert_eq!(percent_of(10, 10), 100.0);
    }

    #[test]
    fn test_percent_of_zero_whole() {
        assert_eq!(percent_of(5, 0), 0.0);
    }
}
