//! Native helper library for LibZipSharp
//!
//! This crate builds the `cdylib` the managed `Xamarin.Tools.Zip` assembly
//! loads next to libzip. It exports two families of C functions:
//!
//! - seek origin translation (`lzs_convert_whence_value`), so libzip's
//!   platform `SEEK_*` values reach managed code as fixed codes;
//! - version reporting (`lzs_get_versions` and friends) for libzip and every
//!   compression library linked into the build.
//!
//! The same functionality is available from Rust through a safe API.
//!
//! # Examples
//!
//! ## Translating a seek origin
//!
//! ```
//! use zipsharp_native::{Whence, LZS_SEEK_END, LZS_SEEK_INVALID};
//!
//! assert_eq!(zipsharp_native::convert_whence_value(libc::SEEK_END), LZS_SEEK_END);
//! assert_eq!(zipsharp_native::convert_whence_value(999), LZS_SEEK_INVALID);
//! assert_eq!(Whence::from_platform(libc::SEEK_SET), Some(Whence::Start));
//! ```
//!
//! ## Reporting versions
//!
//! ```
//! use zipsharp_native::{Backend, Versions};
//!
//! let versions = Versions::collect();
//! println!("{}", versions);
//! assert_eq!(versions.get(Backend::Zlib), Backend::Zlib.version());
//! ```

#![deny(missing_docs)]

mod backend;
mod error;
pub mod ffi;
mod versions;
mod whence;

pub use backend::{
    Backend, BackendFlags, LIBZIPSHARP_VERSION, LZS_BACKEND_LZMA, LZS_BACKEND_ZLIBNG,
    LZS_BACKEND_ZSTD, NOT_SUPPORTED, NOT_USED,
};
pub use error::{Error, Result};
pub use ffi::{LzsVersions, LzsVersionsEx};
pub use versions::Versions;
pub use whence::{
    LZS_SEEK_CUR, LZS_SEEK_END, LZS_SEEK_INVALID, LZS_SEEK_SET, Whence, convert_whence_value,
};

/// Returns the version string of this library
pub fn version() -> String {
    Backend::LibZipSharp.version()
}

/// Returns the libzip version this library was built against
pub fn libzip_version() -> String {
    Backend::LibZip.version()
}

/// Returns every linked library's version, one per line
pub fn version_details() -> String {
    Versions::collect().to_string()
}
