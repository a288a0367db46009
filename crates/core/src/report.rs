//! JSON response bodies. Built once per request from a fresh sample.

use crate::format::{gib_string, percent_string};
use crate::provider::{DiskUsage, MemorySnapshot, percent_of};
use chrono::{DateTime, SecondsFormat, TimeZone};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339, second precision.
    pub time: String,
}

impl HealthStatus {
    pub fn ok_at<Tz>(now: DateTime<Tz>) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: std::fmt::Display,
    {
        Self {
            status: "OK".to_string(),
            time: now.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }

    pub fn ok_now() -> Self {
        Self::ok_at(chrono::Local::now())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CpuMetrics {
    pub cpu_usage: String,
    /// Serialized as a string, e.g. `"8"`.
    pub cpu_count: String,
}

impl CpuMetrics {
    pub fn new(usage_percent: f64, logical_cores: usize) -> Self {
        Self {
            cpu_usage: percent_string(usage_percent),
            cpu_count: logical_cores.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryMetrics {
    pub memory_usage: String,
    pub memory_used: String,
    pub memory_free: String,
    pub memory_available: String,
    pub memory_total: String,
    pub swap_usage: String,
    /// Swap in use. See [`MemorySnapshot::swap_used`].
    pub swap_used: String,
    pub swap_free: String,
    pub swap_total: String,
}

impl From<&MemorySnapshot> for MemoryMetrics {
    fn from(mem: &MemorySnapshot) -> Self {
        Self {
            memory_usage: percent_string(mem.used_percent),
            memory_used: gib_string(mem.used),
            memory_free: gib_string(mem.free),
            memory_available: gib_string(mem.available),
            memory_total: gib_string(mem.total),
            swap_usage: percent_string(percent_of(mem.swap_used, mem.swap_total)),
            swap_used: gib_string(mem.swap_used),
            swap_free: gib_string(mem.swap_free),
            swap_total: gib_string(mem.swap_total),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiskMetrics {
    pub disk_usage: String,
    pub disk_used: String,
    pub disk_free: String,
    pub disk_total: String,
}

impl From<&DiskUsage> for DiskMetrics {
    fn from(disk: &DiskUsage) -> Self {
        Self {
            disk_usage: percent_string(disk.used_percent),
            disk_used: gib_string(disk.used),
            disk_free: gib_string(disk.free),
            disk_total: gib_string(disk.total),
        }
    }
}
