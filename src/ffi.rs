//! Exported C surface
//!
//! Every symbol here is called from managed code through P/Invoke. Strings
//! handed out are allocated with the C allocator (`malloc`) so the managed
//! marshaller can release them, and so can [`lzs_free_string`] and the
//! `lzs_free_versions*` functions. No function in this module panics.
//!
//! Records are allocated by the caller. [`LzsVersions`] is the historical
//! six-pointer layout and must never grow; newer fields live in
//! [`LzsVersionsEx`], filled by [`lzs_get_versions_ex`].

use std::ffi::c_char;
use std::ptr;

use crate::backend::{Backend, BackendFlags};
use crate::whence::convert_whence_value;

/// `lzs_get_version_string` was given an id that names no backend
pub const LZS_ERROR_UNKNOWN_COMPONENT: i64 = -1;
/// `lzs_get_version_string` was given a buffer that is too small
pub const LZS_ERROR_BUFFER_TOO_SMALL: i64 = -2;

/// Version record shared with the managed `LZSVersions` struct
///
/// Exactly six pointers in this order. The managed side allocates the
/// record, so adding a field here would write past the end of its memory.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LzsVersions {
    /// bzip2 version
    pub bzip2: *const c_char,
    /// libzip version
    pub libzip: *const c_char,
    /// zlib version
    pub zlib: *const c_char,
    /// zlib-ng version or "not used"
    pub zlibng: *const c_char,
    /// liblzma version or "not supported"
    pub lzma: *const c_char,
    /// This library's version
    pub libzipsharp: *const c_char,
}

/// Extended version record: [`LzsVersions`] followed by the zstd version
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct LzsVersionsEx {
    /// The historical six fields
    pub base: LzsVersions,
    /// libzstd version or "not supported"
    pub zstd: *const c_char,
}

/// A caller-allocated record of version string pointers
trait VersionRecord: Sized {
    /// Backends with a slot in the record, in field order
    const BACKENDS: &'static [Backend];

    fn empty() -> Self;

    fn slot(&mut self, backend: Backend) -> Option<&mut *const c_char>;

    /// Allocate a fresh copy of every version string the record holds
    ///
    /// On allocation failure everything allocated so far is released and
    /// `None` is returned.
    fn allocate() -> Option<Self> {
        let mut record = Self::empty();
        for &backend in Self::BACKENDS {
            let Some(copy) = duplicate(backend.version_bytes()) else {
                log::debug!("allocation failed while copying {} version", backend);
                // SAFETY: every non-null slot was allocated by `duplicate`
                unsafe { record.release() };
                return None;
            };
            if let Some(slot) = record.slot(backend) {
                *slot = copy;
            }
        }
        Some(record)
    }

    /// Free every non-null slot and null it
    ///
    /// # Safety
    /// Each non-null slot must have been allocated with the C allocator and
    /// not released yet.
    unsafe fn release(&mut self) {
        for &backend in Self::BACKENDS {
            if let Some(slot) = self.slot(backend) {
                if !slot.is_null() {
                    // SAFETY: guaranteed by the caller
                    unsafe { libc::free(*slot as *mut libc::c_void) };
                    *slot = ptr::null();
                }
            }
        }
    }
}

impl LzsVersions {
    /// Backends carried by the six-field record
    pub const BACKENDS: [Backend; 6] = [
        Backend::Bzip2,
        Backend::LibZip,
        Backend::Zlib,
        Backend::ZlibNg,
        Backend::Lzma,
        Backend::LibZipSharp,
    ];

    /// A record with every field null
    pub const fn empty() -> Self {
        LzsVersions {
            bzip2: ptr::null(),
            libzip: ptr::null(),
            zlib: ptr::null(),
            zlibng: ptr::null(),
            lzma: ptr::null(),
            libzipsharp: ptr::null(),
        }
    }

    /// Field holding `backend`'s version; null for backends without a field
    pub fn field(&self, backend: Backend) -> *const c_char {
        match backend {
            Backend::Bzip2 => self.bzip2,
            Backend::LibZip => self.libzip,
            Backend::Zlib => self.zlib,
            Backend::ZlibNg => self.zlibng,
            Backend::Lzma => self.lzma,
            Backend::LibZipSharp => self.libzipsharp,
            Backend::Zstd => ptr::null(),
        }
    }
}

impl VersionRecord for LzsVersions {
    const BACKENDS: &'static [Backend] = &LzsVersions::BACKENDS;

    fn empty() -> Self {
        LzsVersions::empty()
    }

    fn slot(&mut self, backend: Backend) -> Option<&mut *const c_char> {
        match backend {
            Backend::Bzip2 => Some(&mut self.bzip2),
            Backend::LibZip => Some(&mut self.libzip),
            Backend::Zlib => Some(&mut self.zlib),
            Backend::ZlibNg => Some(&mut self.zlibng),
            Backend::Lzma => Some(&mut self.lzma),
            Backend::LibZipSharp => Some(&mut self.libzipsharp),
            Backend::Zstd => None,
        }
    }
}

impl Default for LzsVersions {
    fn default() -> Self {
        LzsVersions::empty()
    }
}

impl LzsVersionsEx {
    /// A record with every field null
    pub const fn empty() -> Self {
        LzsVersionsEx {
            base: LzsVersions::empty(),
            zstd: ptr::null(),
        }
    }

    /// Field holding `backend`'s version
    pub fn field(&self, backend: Backend) -> *const c_char {
        match backend {
            Backend::Zstd => self.zstd,
            other => self.base.field(other),
        }
    }
}

impl VersionRecord for LzsVersionsEx {
    const BACKENDS: &'static [Backend] = &Backend::ALL;

    fn empty() -> Self {
        LzsVersionsEx::empty()
    }

    fn slot(&mut self, backend: Backend) -> Option<&mut *const c_char> {
        match backend {
            Backend::Zstd => Some(&mut self.zstd),
            other => self.base.slot(other),
        }
    }
}

impl Default for LzsVersionsEx {
    fn default() -> Self {
        LzsVersionsEx::empty()
    }
}

/// Copy `bytes` into a new NUL-terminated C heap allocation
fn duplicate(bytes: &[u8]) -> Option<*const c_char> {
    let len = bytes.len();
    // SAFETY: malloc with a non-zero size; the result is checked for null
    let copy = unsafe { libc::malloc(len + 1) } as *mut u8;
    if copy.is_null() {
        return None;
    }
    // SAFETY: `copy` has room for `len + 1` bytes and cannot overlap `bytes`
    unsafe {
        ptr::copy_nonoverlapping(bytes.as_ptr(), copy, len);
        *copy.add(len) = 0;
    }
    Some(copy as *const c_char)
}

/// Allocate a record and store it through `out`, ignoring a null `out`
///
/// # Safety
/// `out` must be null or valid for writing one `R`.
unsafe fn fill<R: VersionRecord>(out: *mut R, caller: &str) {
    if out.is_null() {
        log::debug!("{} called with a null record", caller);
        return;
    }

    if let Some(record) = R::allocate() {
        // SAFETY: non-null and valid for writes per the contract
        unsafe { out.write(record) };
    }
}

/// Translate a platform `SEEK_*` value into an `LZS_SEEK_*` code
#[unsafe(no_mangle)]
pub extern "C" fn lzs_convert_whence_value(whence: i32) -> u32 {
    convert_whence_value(whence)
}

/// Fill `versions` with newly allocated version strings
///
/// Writes exactly the six fields of [`LzsVersions`]. The caller owns every
/// string afterwards. A null `versions` is ignored.
///
/// # Safety
/// `versions` must be null or valid for writing one `LzsVersions`. Any
/// strings it already holds are overwritten, not freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lzs_get_versions(versions: *mut LzsVersions) {
    // SAFETY: forwarded from the caller
    unsafe { fill(versions, "lzs_get_versions") };
}

/// Fill `versions` with every version string, zstd included
///
/// # Safety
/// `versions` must be null or valid for writing one `LzsVersionsEx`. Any
/// strings it already holds are overwritten, not freed.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lzs_get_versions_ex(versions: *mut LzsVersionsEx) {
    // SAFETY: forwarded from the caller
    unsafe { fill(versions, "lzs_get_versions_ex") };
}

/// Release every string in a record filled by [`lzs_get_versions`]
///
/// Fields are nulled, so releasing the same record twice is harmless.
///
/// # Safety
/// `versions` must be null or point to a record whose non-null fields were
/// allocated by this library and not yet released.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lzs_free_versions(versions: *mut LzsVersions) {
    if versions.is_null() {
        return;
    }
    // SAFETY: guaranteed by the caller
    unsafe { (*versions).release() };
}

/// Release every string in a record filled by [`lzs_get_versions_ex`]
///
/// # Safety
/// Same contract as [`lzs_free_versions`], for an `LzsVersionsEx`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lzs_free_versions_ex(versions: *mut LzsVersionsEx) {
    if versions.is_null() {
        return;
    }
    // SAFETY: guaranteed by the caller
    unsafe { (*versions).release() };
}

/// Release one string handed out by this library
///
/// # Safety
/// `string` must be null or a string allocated by this library that has not
/// been released yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lzs_free_string(string: *mut c_char) {
    if string.is_null() {
        return;
    }
    // SAFETY: guaranteed by the caller
    unsafe { libc::free(string as *mut libc::c_void) };
}

/// Copy one backend's version into a caller-provided buffer
///
/// Returns the size needed including the NUL terminator, both on success and
/// when `buffer` is null. Returns [`LZS_ERROR_UNKNOWN_COMPONENT`] or
/// [`LZS_ERROR_BUFFER_TOO_SMALL`] on failure, leaving the buffer untouched.
///
/// # Safety
/// `buffer` must be null or valid for writing `length` bytes.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn lzs_get_version_string(
    component: u32,
    buffer: *mut c_char,
    length: usize,
) -> i64 {
    let backend = match Backend::from_id(component) {
        Ok(backend) => backend,
        Err(e) => {
            log::debug!("lzs_get_version_string: {}", e);
            return LZS_ERROR_UNKNOWN_COMPONENT;
        }
    };

    let required = backend.version_bytes().len() + 1;
    if buffer.is_null() {
        return required as i64;
    }

    // Only the bytes that will be written are borrowed
    let usable = length.min(required);
    // SAFETY: non-null and valid for `length >= usable` bytes per the contract
    let buffer = unsafe { std::slice::from_raw_parts_mut(buffer as *mut u8, usable) };

    match backend.copy_version(buffer) {
        Ok(written) => written as i64,
        // the id was resolved above, so only the size check can fail
        Err(e) => {
            log::debug!("lzs_get_version_string: {}", e);
            LZS_ERROR_BUFFER_TOO_SMALL
        }
    }
}

/// Bitmask of the optional backends compiled in (`LZS_BACKEND_*`)
#[unsafe(no_mangle)]
pub extern "C" fn lzs_get_backend_flags() -> u32 {
    BackendFlags::compiled().bits()
}
