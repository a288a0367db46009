//! [`MetricsProvider`] backed by `sysinfo` for CPU and memory, `statvfs` for disks.

#[cfg(unix)]
use crate::mounts::{mount_point, statvfs};
use hostpulse_core::error::ProviderError;
use hostpulse_core::provider::{DiskUsage, MemorySnapshot, MetricsProvider, percent_of};
use std::path::Path;
use std::sync::Mutex;
use sysinfo::System;

/// Samples the local host.
///
/// CPU usage is a delta between two refreshes, so the provider keeps the
/// `System` from the previous sample. Memory is read fresh on every call and
/// disks are sampled with `statvfs` on the requested path.
pub struct SystemProvider {
    cpu: Mutex<System>,
}

impl SystemProvider {
    pub fn new() -> Self {
        let mut sys = System::new();
        // Baseline so the first request reports usage since startup
        sys.refresh_cpu_usage();
        Self {
            cpu: Mutex::new(sys),
        }
    }

    fn ensure_supported() -> Result<(), ProviderError> {
        if sysinfo::IS_SUPPORTED_SYSTEM {
            Ok(())
        } else {
            Err(ProviderError::Unsupported)
        }
    }
}

impl Default for SystemProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricsProvider for SystemProvider {
    fn cpu_percent(&self) -> Result<f64, ProviderError> {
        Self::ensure_supported()?;
        let mut sys = self.cpu.lock().map_err(|_| ProviderError::Poisoned)?;
        sys.refresh_cpu_usage();
        if sys.cpus().is_empty() {
            return Err(ProviderError::NoCpus);
        }
        Ok(f64::from(sys.global_cpu_usage()))
    }

    fn cpu_count(&self) -> Result<usize, ProviderError> {
        Self::ensure_supported()?;
        let sys = self.cpu.lock().map_err(|_| ProviderError::Poisoned)?;
        match sys.cpus().len() {
            0 => Err(ProviderError::NoCpus),
            n => Ok(n),
        }
    }

    fn virtual_memory(&self) -> Result<MemorySnapshot, ProviderError> {
        Self::ensure_supported()?;
        let mut sys = System::new();
        sys.refresh_memory();

        let total = sys.total_memory();
        if total == 0 {
            return Err(ProviderError::Sampling("host reported zero total memory".into()));
        }
        let used = sys.used_memory();
        let swap_total = sys.total_swap();
        let swap_free = sys.free_swap();

        Ok(MemorySnapshot {
            total,
            used,
            free: sys.free_memory(),
            available: sys.available_memory(),
            used_percent: percent_of(used, total),
            swap_total,
            swap_used: swap_total.saturating_sub(swap_free),
            swap_free,
        })
    }

    fn disk_usage(&self, path: &Path) -> Result<DiskUsage, ProviderError> {
        Self::ensure_supported()?;
        sample_disk(path)
    }
}

#[cfg(unix)]
fn sample_disk(path: &Path) -> Result<DiskUsage, ProviderError> {
    let path = std::fs::canonicalize(path)
        .map_err(|_| ProviderError::MountNotFound(path.display().to_string()))?;
    let stats = statvfs(&path).map_err(|e| ProviderError::Sampling(e.to_string()))?;
    let mount = mount_point(&path).unwrap_or_else(|| path.clone());

    tracing::debug!(
        path = %path.display(),
        mount = %mount.display(),
        total = stats.total,
        available = stats.available,
        "Sampled disk usage"
    );

    Ok(stats.into_usage(mount))
}

#[cfg(not(unix))]
fn sample_disk(_path: &Path) -> Result<DiskUsage, ProviderError> {
    Err(ProviderError::Unsupported)
}
