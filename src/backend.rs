//! Linked libraries and their version strings

use std::ffi::CStr;
use std::fmt;

use libzipsharp_sys as sys;

use crate::error::{Error, Result};

/// Marker reported for zlib-ng when it was not linked in
pub const NOT_USED: &str = "not used";

/// Marker reported for lzma and zstd when they were not linked in
pub const NOT_SUPPORTED: &str = "not supported";

/// Version of this library, overridable at build time with `LIBZIPSHARP_VERSION`
pub const LIBZIPSHARP_VERSION: &str = match option_env!("LIBZIPSHARP_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

/// Bit set in [`BackendFlags::bits`] when zlib-ng is linked in
pub const LZS_BACKEND_ZLIBNG: u32 = 1 << 0;
/// Bit set in [`BackendFlags::bits`] when liblzma is linked in
pub const LZS_BACKEND_LZMA: u32 = 1 << 1;
/// Bit set in [`BackendFlags::bits`] when libzstd is linked in
pub const LZS_BACKEND_ZSTD: u32 = 1 << 2;

/// A library whose version is reported
///
/// The discriminants are the component ids understood by
/// `lzs_get_version_string` and follow the field order of `LzsVersionsEx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Backend {
    /// bzip2
    Bzip2 = 0,
    /// libzip, the archive format library
    LibZip = 1,
    /// zlib
    Zlib = 2,
    /// zlib-ng (optional)
    ZlibNg = 3,
    /// liblzma (optional)
    Lzma = 4,
    /// This library
    LibZipSharp = 5,
    /// libzstd (optional)
    Zstd = 6,
}

impl Backend {
    /// Every backend, in record order
    pub const ALL: [Backend; 7] = [
        Backend::Bzip2,
        Backend::LibZip,
        Backend::Zlib,
        Backend::ZlibNg,
        Backend::Lzma,
        Backend::LibZipSharp,
        Backend::Zstd,
    ];

    /// Look up a backend by component id
    pub fn from_id(id: u32) -> Result<Self> {
        Backend::ALL
            .get(id as usize)
            .copied()
            .ok_or(Error::UnknownComponent(id))
    }

    /// Component id used across the C boundary
    pub fn id(self) -> u32 {
        self as u32
    }

    /// Short lowercase name, matching the `LzsVersions` field
    pub fn name(self) -> &'static str {
        match self {
            Backend::Bzip2 => "bzip2",
            Backend::LibZip => "libzip",
            Backend::Zlib => "zlib",
            Backend::ZlibNg => "zlibng",
            Backend::Lzma => "lzma",
            Backend::LibZipSharp => "libzipsharp",
            Backend::Zstd => "zstd",
        }
    }

    /// Whether this backend is part of the current build
    pub fn is_available(self) -> bool {
        BackendFlags::compiled().contains(self)
    }

    /// Version string, or the absence marker for optional backends
    pub fn version(self) -> String {
        String::from_utf8_lossy(self.version_bytes()).into_owned()
    }

    /// Strict UTF-8 view of [`Backend::version`]
    pub fn version_str(self) -> Result<&'static str> {
        Ok(std::str::from_utf8(self.version_bytes())?)
    }

    /// Copy the NUL-terminated version string into `buffer`
    ///
    /// Returns the number of bytes written, terminator included. Nothing is
    /// written when the buffer is too small.
    pub fn copy_version(self, buffer: &mut [u8]) -> Result<usize> {
        let version = self.version_bytes();
        let required = version.len() + 1;
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                available: buffer.len(),
            });
        }
        buffer[..version.len()].copy_from_slice(version);
        buffer[version.len()] = 0;
        Ok(required)
    }

    /// Raw version bytes without the NUL terminator
    ///
    /// Always non-empty and free of interior NUL bytes. The memory is static,
    /// either compiled in or owned by the linked library.
    pub(crate) fn version_bytes(self) -> &'static [u8] {
        match self {
            // SAFETY: the library returns a pointer to a static string
            Backend::Bzip2 => unsafe { static_version(sys::BZ2_bzlibVersion()) },
            Backend::LibZip => compiled_version(sys::LIBZIP_VERSION),
            // SAFETY: the library returns a pointer to a static string
            Backend::Zlib => unsafe { static_version(sys::zlibVersion()) },
            Backend::ZlibNg => zlibng_version(),
            Backend::Lzma => lzma_version(),
            Backend::LibZipSharp => compiled_version(LIBZIPSHARP_VERSION),
            Backend::Zstd => zstd_version(),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Optional backends compiled into this build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackendFlags {
    /// zlib-ng is linked next to zlib
    pub zlib_ng: bool,
    /// liblzma is linked
    pub lzma: bool,
    /// libzstd is linked
    pub zstd: bool,
}

impl BackendFlags {
    /// Flags for the current build, fixed by Cargo features
    pub const fn compiled() -> Self {
        BackendFlags {
            zlib_ng: cfg!(feature = "zlib-ng"),
            lzma: cfg!(feature = "lzma"),
            zstd: cfg!(feature = "zstd"),
        }
    }

    /// Whether `backend` is present; mandatory backends always are
    pub fn contains(self, backend: Backend) -> bool {
        match backend {
            Backend::ZlibNg => self.zlib_ng,
            Backend::Lzma => self.lzma,
            Backend::Zstd => self.zstd,
            Backend::Bzip2 | Backend::LibZip | Backend::Zlib | Backend::LibZipSharp => true,
        }
    }

    /// Bitmask of `LZS_BACKEND_*` values
    pub fn bits(self) -> u32 {
        let mut bits = 0;
        if self.zlib_ng {
            bits |= LZS_BACKEND_ZLIBNG;
        }
        if self.lzma {
            bits |= LZS_BACKEND_LZMA;
        }
        if self.zstd {
            bits |= LZS_BACKEND_ZSTD;
        }
        bits
    }

    /// Inverse of [`BackendFlags::bits`]; unknown bits are ignored
    pub fn from_bits(bits: u32) -> Self {
        BackendFlags {
            zlib_ng: bits & LZS_BACKEND_ZLIBNG != 0,
            lzma: bits & LZS_BACKEND_LZMA != 0,
            zstd: bits & LZS_BACKEND_ZSTD != 0,
        }
    }
}

fn compiled_version(version: &'static str) -> &'static [u8] {
    // Cut at the first NUL so the bytes stay a valid C string payload
    let bytes = version.as_bytes();
    let bytes = bytes.split(|b| *b == 0).next().unwrap_or_default();
    if bytes.is_empty() { b"unknown" } else { bytes }
}

/// Borrow a static version string handed out by a linked library
///
/// # Safety
/// `ptr` must be null or point to a NUL-terminated string that lives for the
/// rest of the process.
unsafe fn static_version(ptr: *const sys::c_char) -> &'static [u8] {
    if ptr.is_null() {
        log::trace!("linked library returned a null version string");
        return b"unknown";
    }
    // SAFETY: guaranteed by the caller
    let bytes = unsafe { CStr::from_ptr(ptr) }.to_bytes();
    if bytes.is_empty() { b"unknown" } else { bytes }
}

#[cfg(feature = "zlib-ng")]
fn zlibng_version() -> &'static [u8] {
    // SAFETY: zlib-ng returns a pointer to a static string
    unsafe { static_version(sys::zlibng_version()) }
}

#[cfg(not(feature = "zlib-ng"))]
fn zlibng_version() -> &'static [u8] {
    NOT_USED.as_bytes()
}

#[cfg(feature = "lzma")]
fn lzma_version() -> &'static [u8] {
    // SAFETY: liblzma returns a pointer to a static string
    unsafe { static_version(sys::lzma_version_string()) }
}

#[cfg(not(feature = "lzma"))]
fn lzma_version() -> &'static [u8] {
    NOT_SUPPORTED.as_bytes()
}

#[cfg(feature = "zstd")]
fn zstd_version() -> &'static [u8] {
    // SAFETY: libzstd returns a pointer to a static string
    unsafe { static_version(sys::ZSTD_versionString()) }
}

#[cfg(not(feature = "zstd"))]
fn zstd_version() -> &'static [u8] {
    NOT_SUPPORTED.as_bytes()
}
