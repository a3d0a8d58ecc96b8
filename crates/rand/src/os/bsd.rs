//! `arc4random_buf(3)` binding for Apple platforms and the BSDs

use crate::source::SourceError;

/// `arc4random_buf` always fills the whole buffer and cannot fail
pub(crate) fn sys_random(dest: &mut [u8]) -> Result<usize, SourceError> {
    // SAFETY: `dest` is a valid writable region of `dest.len()` bytes.
    unsafe {
        libc::arc4random_buf(dest.as_mut_ptr().cast::<libc::c_void>(), dest.len());
    }
    Ok(dest.len())
}
