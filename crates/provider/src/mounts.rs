//! Filesystem usage for an arbitrary path: `statvfs(3)` on the path itself,
//! and the mount point found by walking up until the device id changes.

use hostpulse_core::provider::{DiskUsage, percent_of};
use std::io;
use std::path::{Path, PathBuf};

/// Raw `statvfs` counters, already multiplied by the fragment size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FsStats {
    pub total: u64,
    /// Free blocks, including those reserved for root.
    pub free: u64,
    /// Free blocks available to unprivileged users.
    pub available: u64,
}

impl FsStats {
    /// `used = total - free`, `free = available`, percent over `used + available`
    /// so reserved blocks do not count as free space.
    pub fn into_usage(self, mount_point: PathBuf) -> DiskUsage {
        let used = self.total.saturating_sub(self.free);
        DiskUsage {
            mount_point,
            total: self.total,
            used,
            free: self.available,
            used_percent: percent_of(used, used.saturating_add(self.available)),
        }
    }
}

#[cfg(unix)]
#[allow(clippy::unnecessary_cast)]
pub fn statvfs(path: &Path) -> io::Result<FsStats> {
    use std::ffi::CString;
    use std::mem::MaybeUninit;
    use std::os::unix::ffi::OsStrExt;

    let c_path = CString::new(path.as_os_str().as_bytes())
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    let mut buf = MaybeUninit::<libc::statvfs>::uninit();

    // SAFETY: `c_path` is NUL-terminated and `buf` is valid for writes.
    let rc = unsafe { libc::statvfs(c_path.as_ptr(), buf.as_mut_ptr()) };
    if rc != 0 {
        return Err(io::Error::last_os_error());
    }
    // SAFETY: statvfs returned 0, so it filled `buf`.
    let st = unsafe { buf.assume_init() };

    // Field widths differ between platforms
    let frsize = st.f_frsize as u64;
    Ok(FsStats {
        total: (st.f_blocks as u64).saturating_mul(frsize),
        free: (st.f_bfree as u64).saturating_mul(frsize),
        available: (st.f_bavail as u64).saturating_mul(frsize),
    })
}

/// Highest ancestor of `path` (itself included) on the same device as `path`.
/// `device_of` returns `None` for paths it cannot stat.
pub fn mount_point_by<F>(path: &Path, device_of: F) -> Option<PathBuf>
where
    F: Fn(&Path) -> Option<u64>,
{
    let device = device_of(path)?;
    let mut mount = path;
    for ancestor in path.ancestors().skip(1) {
        if device_of(ancestor) != Some(device) {
            break;
        }
        mount = ancestor;
    }
    Some(mount.to_path_buf())
}

#[cfg(unix)]
pub fn mount_point(path: &Path) -> Option<PathBuf> {
    use std::os::unix::fs::MetadataExt;

    mount_point_by(path, |p| std::fs::metadata(p).ok().map(|m| m.dev()))
}
