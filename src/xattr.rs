use std::ffi::CString;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// The extended attribute macOS puts on downloaded files.
pub const QUARANTINE_ATTR: &str = "com.apple.quarantine";

#[cfg(target_os = "macos")]
const ENOATTR: libc::c_int = libc::ENOATTR;
#[cfg(not(target_os = "macos"))]
const ENOATTR: libc::c_int = libc::ENODATA;

/// Result of one removal attempt on one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemovalOutcome {
    Removed,
    NotPresent,
    PermissionDenied,
    OtherError(String),
}

/// Remove the quarantine attribute from a single filesystem entry.
/// Symlinks are operated on directly, never followed.
pub fn remove_quarantine(path: &Path) -> RemovalOutcome {
    remove_attr(path, QUARANTINE_ATTR)
}

fn remove_attr(path: &Path, attr: &str) -> RemovalOutcome {
    // symlink_metadata so a dangling symlink still counts as an existing entry
    if path.symlink_metadata().is_err() {
        tracing::error!(path = %path.display(), "file does not exist");
        return RemovalOutcome::OtherError("File not found".to_string());
    }

    let c_path = match CString::new(path.as_os_str().as_bytes()) {
        Ok(p) => p,
        Err(_) => return RemovalOutcome::OtherError("Path contains a NUL byte".to_string()),
    };
    let c_attr = match CString::new(attr) {
        Ok(a) => a,
        Err(_) => return RemovalOutcome::OtherError("Attribute name contains a NUL byte".to_string()),
    };

    let ret = unsafe { removexattr_nofollow(c_path.as_ptr(), c_attr.as_ptr()) };
    if ret == 0 {
        tracing::info!(path = %path.display(), "removed quarantine attribute");
        return RemovalOutcome::Removed;
    }

    let err = std::io::Error::last_os_error();
    match err.raw_os_error() {
        Some(code) if code == ENOATTR => {
            tracing::debug!(path = %path.display(), "no quarantine attribute present");
            RemovalOutcome::NotPresent
        }
        Some(libc::EPERM) | Some(libc::EACCES) => {
            tracing::warn!(path = %path.display(), "permission denied removing quarantine attribute");
            RemovalOutcome::PermissionDenied
        }
        _ => {
            tracing::error!(path = %path.display(), error = %err, "failed to remove quarantine attribute");
            RemovalOutcome::OtherError(err.to_string())
        }
    }
}

#[cfg(target_os = "macos")]
unsafe fn removexattr_nofollow(path: *const libc::c_char, name: *const libc::c_char) -> libc::c_int {
    libc::removexattr(path, name, libc::XATTR_NOFOLLOW)
}

// Other unix spells "don't follow symlinks" as a separate entry point.
#[cfg(not(target_os = "macos"))]
unsafe fn removexattr_nofollow(path: *const libc::c_char, name: *const libc::c_char) -> libc::c_int {
    libc::lremovexattr(path, name)
}
