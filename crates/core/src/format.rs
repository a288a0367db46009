//! Number formatting for the metrics responses.
//!
//! Byte counts are truncated to whole gibibytes before being printed with two
//! decimals, so `"1.00 GB"` means "at least 1 GiB and less than 2 GiB".
//! Percentages are rounded, not truncated.

pub const GIB: u64 = 1024 * 1024 * 1024;

/// Whole gibibytes in `bytes`, discarding the remainder.
pub fn whole_gib(bytes: u64) -> u64 {
    bytes / GIB
}

/// `bytes` as `"N.00 GB"`.
pub fn gib_string(bytes: u64) -> String {
    format!("{:.2} GB", whole_gib(bytes) as f64)
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `value` as `"NN.NN%"`, clamped to `[0, 100]`. NaN prints as `0.00%`.
pub fn percent_string(value: f64) -> String {
    let clamped = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    };
    format!("{:.2}%", round2(clamped))
}
