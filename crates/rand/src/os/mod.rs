//! Operating system entropy bindings
//!
//! Exactly one binding is compiled in, chosen by target. Each exposes
//! `sys_random`, which performs a single call into the platform and reports
//! how many bytes it produced. Targets without a known secure source fail to
//! build instead of falling back to something weaker.

#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;

#[cfg(any(target_os = "linux", target_os = "android"))]
pub(crate) use linux::sys_random;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly",
))]
mod bsd;

#[cfg(any(
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly",
))]
pub(crate) use bsd::sys_random;

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub(crate) use windows::sys_random;

#[cfg(not(any(
    target_os = "linux",
    target_os = "android",
    target_os = "macos",
    target_os = "ios",
    target_os = "tvos",
    target_os = "watchos",
    target_os = "freebsd",
    target_os = "openbsd",
    target_os = "netbsd",
    target_os = "dragonfly",
    windows,
)))]
compile_error!(
    "hygiene-rand has no secure OS entropy binding for this target; add one to crates/rand/src/os"
);
