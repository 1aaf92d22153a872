use zipsharp_native::{
    Backend, BackendFlags, Error, LIBZIPSHARP_VERSION, LZS_BACKEND_LZMA, LZS_BACKEND_ZLIBNG,
    LZS_BACKEND_ZSTD, NOT_SUPPORTED, NOT_USED, Versions,
};

#[test]
fn test_every_version_is_non_empty() {
    let versions = Versions::collect();
    for (backend, version) in versions.iter() {
        assert!(!version.is_empty(), "{} reported an empty version", backend);
        assert!(!version.contains('\0'), "{} has an interior NUL", backend);
    }
}

#[test]
fn test_versions_match_backends() {
    let versions = Versions::collect();
    for backend in Backend::ALL {
        assert_eq!(versions.get(backend), backend.version());
    }
    assert_eq!(versions.flags, BackendFlags::compiled());
}

#[test]
fn test_own_version() {
    assert_eq!(zipsharp_native::version(), LIBZIPSHARP_VERSION);
    assert_eq!(Versions::collect().libzipsharp, LIBZIPSHARP_VERSION);
}

#[test]
fn test_zlib_version_looks_like_a_version() {
    let zlib = Backend::Zlib.version();
    assert!(zlib.chars().next().unwrap().is_ascii_digit());
    assert!(zlib.contains('.'));
}

#[test]
fn test_bzip2_version_looks_like_a_version() {
    // bzip2 reports e.g. "1.0.8, 13-Jul-2019"
    let bzip2 = Backend::Bzip2.version();
    assert!(bzip2.starts_with("1."));
}

#[cfg(not(feature = "zlib-ng"))]
#[test]
fn test_zlibng_marker_when_absent() {
    assert_eq!(Versions::collect().zlibng, "not used");
    assert_eq!(NOT_USED, "not used");
    assert!(!Backend::ZlibNg.is_available());
}

#[cfg(feature = "zlib-ng")]
#[test]
fn test_zlibng_reported_when_linked() {
    assert_ne!(Versions::collect().zlibng, NOT_USED);
    assert!(Backend::ZlibNg.is_available());
}

#[cfg(not(feature = "lzma"))]
#[test]
fn test_lzma_marker_when_absent() {
    assert_eq!(Versions::collect().lzma, "not supported");
}

#[cfg(feature = "lzma")]
#[test]
fn test_lzma_reported_when_linked() {
    let lzma = Versions::collect().lzma;
    assert_ne!(lzma, NOT_SUPPORTED);
    assert!(lzma.starts_with('5'));
}

#[cfg(not(feature = "zstd"))]
#[test]
fn test_zstd_marker_when_absent() {
    assert_eq!(Versions::collect().zstd, "not supported");
}

#[cfg(feature = "zstd")]
#[test]
fn test_zstd_reported_when_linked() {
    let zstd = Versions::collect().zstd;
    assert_ne!(zstd, NOT_SUPPORTED);
    assert!(zstd.starts_with("1."));
}

#[test]
fn test_flags_follow_features() {
    let flags = BackendFlags::compiled();
    assert_eq!(flags.zlib_ng, cfg!(feature = "zlib-ng"));
    assert_eq!(flags.lzma, cfg!(feature = "lzma"));
    assert_eq!(flags.zstd, cfg!(feature = "zstd"));
    assert_eq!(BackendFlags::from_bits(flags.bits()), flags);
}

#[test]
fn test_flag_bits() {
    let all = BackendFlags {
        zlib_ng: true,
        lzma: true,
        zstd: true,
    };
    assert_eq!(
        all.bits(),
        LZS_BACKEND_ZLIBNG | LZS_BACKEND_LZMA | LZS_BACKEND_ZSTD
    );
    assert_eq!(BackendFlags::default().bits(), 0);
    assert_eq!(BackendFlags::from_bits(0xFFFF_FFF8), BackendFlags::default());
    assert!(BackendFlags::default().contains(Backend::LibZip));
    assert!(!BackendFlags::default().contains(Backend::Zstd));
}

#[test]
fn test_backend_ids_follow_record_order() {
    for (index, backend) in Backend::ALL.into_iter().enumerate() {
        assert_eq!(backend.id(), index as u32);
        assert_eq!(Backend::from_id(index as u32).unwrap(), backend);
    }
    assert!(matches!(
        Backend::from_id(7),
        Err(Error::UnknownComponent(7))
    ));
}

#[test]
fn test_copy_version() {
    let expected = Backend::LibZipSharp.version();

    let mut buffer = [0xAAu8; 64];
    let written = Backend::LibZipSharp.copy_version(&mut buffer).unwrap();
    assert_eq!(written, expected.len() + 1);
    assert_eq!(&buffer[..expected.len()], expected.as_bytes());
    assert_eq!(buffer[expected.len()], 0);

    let mut small = vec![0xAAu8; expected.len()];
    match Backend::LibZipSharp.copy_version(&mut small) {
        Err(Error::BufferTooSmall {
            required,
            available,
        }) => {
            assert_eq!(required, expected.len() + 1);
            assert_eq!(available, expected.len());
        }
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(small.iter().all(|b| *b == 0xAA));
}

#[test]
fn test_display_lists_every_backend() {
    let details = zipsharp_native::version_details();
    assert_eq!(details.lines().count(), Backend::ALL.len());
    for backend in Backend::ALL {
        assert!(details.contains(&format!("{}: ", backend)));
    }
}

#[test]
fn test_version_str_is_strict_view_of_version() {
    for backend in Backend::ALL {
        let strict = backend.version_str().unwrap();
        assert_eq!(strict, backend.version());
        assert!(!strict.is_empty());
    }
}

#[test]
fn test_libzip_version_follows_build_override() {
    // The build script reads the same variable when this crate is compiled
    let libzip = zipsharp_native::libzip_version();
    match option_env!("LIBZIP_VERSION").and_then(|v| v.lines().next()) {
        Some(expected) if !expected.trim().is_empty() => {
            assert_eq!(libzip, expected.trim());
        }
        _ => assert!(!libzip.is_empty()),
    }
    assert_eq!(libzip, libzipsharp_sys::LIBZIP_VERSION);
}

#[cfg(feature = "strict-libzip-version")]
#[test]
fn test_strict_build_never_reports_unknown() {
    assert_ne!(zipsharp_native::libzip_version(), "unknown");
}
