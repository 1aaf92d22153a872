//! Seek origin translation
//!
//! libzip hands seek requests to source callbacks using the platform's
//! `SEEK_SET`/`SEEK_CUR`/`SEEK_END` values, which are not guaranteed to be the
//! same everywhere. The managed side only understands the fixed `LZS_SEEK_*`
//! codes below, so every whence value is normalized here before it crosses
//! the boundary.

use std::io::SeekFrom;

use crate::error::{Error, Result};

/// Seek relative to the start of the stream
pub const LZS_SEEK_SET: u32 = 0;
/// Seek relative to the current position
pub const LZS_SEEK_CUR: u32 = 1;
/// Seek relative to the end of the stream
pub const LZS_SEEK_END: u32 = 2;
/// Returned for any whence value the platform does not define
pub const LZS_SEEK_INVALID: u32 = 0xDEAD_BEEF;

/// Reference point of a seek operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Whence {
    /// Start of the stream
    Start = LZS_SEEK_SET,
    /// Current position
    Current = LZS_SEEK_CUR,
    /// End of the stream
    End = LZS_SEEK_END,
}

impl Whence {
    /// Interpret a platform `SEEK_*` value
    pub fn from_platform(whence: i32) -> Option<Self> {
        match whence {
            libc::SEEK_SET => Some(Whence::Start),
            libc::SEEK_CUR => Some(Whence::Current),
            libc::SEEK_END => Some(Whence::End),
            _ => None,
        }
    }

    /// Interpret a cross-boundary `LZS_SEEK_*` code
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            LZS_SEEK_SET => Some(Whence::Start),
            LZS_SEEK_CUR => Some(Whence::Current),
            LZS_SEEK_END => Some(Whence::End),
            _ => None,
        }
    }

    /// The cross-boundary `LZS_SEEK_*` code
    pub fn code(self) -> u32 {
        self as u32
    }

    /// The platform `SEEK_*` value
    pub fn platform(self) -> i32 {
        match self {
            Whence::Start => libc::SEEK_SET,
            Whence::Current => libc::SEEK_CUR,
            Whence::End => libc::SEEK_END,
        }
    }

    /// Build the [`SeekFrom`] for a libzip seek request
    ///
    /// libzip passes signed offsets for every origin; an offset before the
    /// start of the stream is rejected instead of being wrapped.
    pub fn seek_from(self, offset: i64) -> Result<SeekFrom> {
        match self {
            Whence::Start => u64::try_from(offset).map(SeekFrom::Start).map_err(|_| {
                Error::InvalidArgument(format!(
                    "negative offset {} relative to start of stream",
                    offset
                ))
            }),
            Whence::Current => Ok(SeekFrom::Current(offset)),
            Whence::End => Ok(SeekFrom::End(offset)),
        }
    }
}

impl TryFrom<i32> for Whence {
    type Error = Error;

    fn try_from(whence: i32) -> Result<Self> {
        Whence::from_platform(whence)
            .ok_or_else(|| Error::InvalidArgument(format!("unknown whence value {}", whence)))
    }
}

/// Map a platform whence value to its `LZS_SEEK_*` code
///
/// Total function: anything unrecognized yields [`LZS_SEEK_INVALID`].
pub fn convert_whence_value(whence: i32) -> u32 {
    Whence::from_platform(whence).map_or(LZS_SEEK_INVALID, Whence::code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_roundtrip() {
        for whence in [Whence::Start, Whence::Current, Whence::End] {
            assert_eq!(Whence::from_platform(whence.platform()), Some(whence));
            assert_eq!(Whence::from_code(whence.code()), Some(whence));
        }
    }

    #[test]
    fn test_sentinel_is_not_a_valid_code() {
        assert_eq!(Whence::from_code(LZS_SEEK_INVALID), None);
    }
}
