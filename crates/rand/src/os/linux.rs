//! `getrandom(2)` binding for Linux and Android

use crate::source::SourceError;

/// One `getrandom` call with no flags (blocking, urandom pool)
///
/// The kernel may return fewer bytes than requested when a signal arrives,
/// and caps a single call at 32 MiB - 1. The short count is returned as-is;
/// `EINTR` maps to [`SourceError::Interrupted`]. Anything else (`EFAULT`,
/// `EINVAL`, `ENOSYS`) is a hard failure.
pub(crate) fn sys_random(dest: &mut [u8]) -> Result<usize, SourceError> {
    // SAFETY: `dest` is a valid writable region of `dest.len()` bytes.
    let ret = unsafe { libc::getrandom(dest.as_mut_ptr().cast::<libc::c_void>(), dest.len(), 0) };

    if ret < 0 {
        let errno = std::io::Error::last_os_error().raw_os_error().unwrap_or(0);
        if errno == libc::EINTR {
            return Err(SourceError::Interrupted);
        }
        return Err(SourceError::Failed { code: errno });
    }

    Ok(ret as usize)
}
