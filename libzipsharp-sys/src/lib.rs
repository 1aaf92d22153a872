//! Low-level declarations for the libraries linked into ZipSharpNative
//!
//! Every function declared or re-exported here returns a pointer to a static,
//! NUL-terminated version string owned by the library that produced it.
//! Callers must never free or mutate that memory.

pub use libc::c_char;

pub use libz_sys::zlibVersion;

// bzip2-sys links libbz2 but does not declare the version query
use bzip2_sys as _;

unsafe extern "C" {
    /// bzip2's runtime version, e.g. `"1.0.8, 13-Jul-2019"`
    pub fn BZ2_bzlibVersion() -> *const c_char;
}

#[cfg(feature = "zlib-ng")]
pub use libz_ng_sys::zlibVersion as zlibng_version;

#[cfg(feature = "lzma")]
pub use lzma_sys::lzma_version_string;

#[cfg(feature = "zstd")]
pub use zstd_sys::ZSTD_versionString;

/// libzip version resolved by the build script
pub const LIBZIP_VERSION: &str = env!("LZS_LIBZIP_VERSION");
