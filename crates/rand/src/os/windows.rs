//! `BCryptGenRandom` binding for Windows

use windows_sys::Win32::Security::Cryptography::{
    BCryptGenRandom, BCRYPT_USE_SYSTEM_PREFERRED_RNG,
};

use crate::source::SourceError;

/// One `BCryptGenRandom` call using the system preferred RNG
///
/// The length parameter is a `u32`, so larger buffers are served one chunk
/// per call and the caller loops for the rest.
pub(crate) fn sys_random(dest: &mut [u8]) -> Result<usize, SourceError> {
    let len = dest.len().min(u32::MAX as usize);

    // SAFETY: `dest` is valid for `len` writable bytes; a null algorithm
    // handle is required with BCRYPT_USE_SYSTEM_PREFERRED_RNG.
    let status = unsafe {
        BCryptGenRandom(
            core::ptr::null_mut(),
            dest.as_mut_ptr(),
            len as u32,
            BCRYPT_USE_SYSTEM_PREFERRED_RNG,
        )
    };

    if status < 0 {
        return Err(SourceError::Failed { code: status });
    }

    Ok(len)
}
