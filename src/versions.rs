//! Owned version report

use std::fmt;

use crate::backend::{Backend, BackendFlags};

/// Versions of every library linked into this build
///
/// Optional backends that were not compiled in carry
/// [`NOT_USED`](crate::NOT_USED) or [`NOT_SUPPORTED`](crate::NOT_SUPPORTED).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Versions {
    /// bzip2 runtime version
    pub bzip2: String,
    /// libzip compile-time version
    pub libzip: String,
    /// zlib runtime version
    pub zlib: String,
    /// zlib-ng version or marker
    pub zlibng: String,
    /// liblzma version or marker
    pub lzma: String,
    /// This library's version
    pub libzipsharp: String,
    /// libzstd version or marker
    pub zstd: String,
    /// Which optional backends the strings above came from
    pub flags: BackendFlags,
}

impl Versions {
    /// Query every linked library
    pub fn collect() -> Self {
        Versions {
            bzip2: Backend::Bzip2.version(),
            libzip: Backend::LibZip.version(),
            zlib: Backend::Zlib.version(),
            zlibng: Backend::ZlibNg.version(),
            lzma: Backend::Lzma.version(),
            libzipsharp: Backend::LibZipSharp.version(),
            zstd: Backend::Zstd.version(),
            flags: BackendFlags::compiled(),
        }
    }

    /// Version string of a single backend
    pub fn get(&self, backend: Backend) -> &str {
        match backend {
            Backend::Bzip2 => &self.bzip2,
            Backend::LibZip => &self.libzip,
            Backend::Zlib => &self.zlib,
            Backend::ZlibNg => &self.zlibng,
            Backend::Lzma => &self.lzma,
            Backend::LibZipSharp => &self.libzipsharp,
            Backend::Zstd => &self.zstd,
        }
    }

    /// `(backend, version)` pairs in record order
    pub fn iter(&self) -> impl Iterator<Item = (Backend, &str)> + '_ {
        Backend::ALL
            .into_iter()
            .map(move |backend| (backend, self.get(backend)))
    }
}

impl fmt::Display for Versions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (backend, version)) in self.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", backend, version)?;
        }
        Ok(())
    }
}
