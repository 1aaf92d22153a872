use std::ffi::{CStr, c_char};
use std::thread;

use zipsharp_native::ffi::{lzs_convert_whence_value, lzs_free_versions_ex, lzs_get_versions_ex};
use zipsharp_native::{
    Backend, LZS_SEEK_CUR, LZS_SEEK_END, LZS_SEEK_INVALID, LZS_SEEK_SET, LzsVersionsEx, Versions,
};

const THREADS: usize = 16;
const ITERATIONS: usize = 200;

#[test]
fn test_whence_translation_from_many_threads() {
    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..ITERATIONS {
                    assert_eq!(lzs_convert_whence_value(libc::SEEK_SET), LZS_SEEK_SET);
                    assert_eq!(lzs_convert_whence_value(libc::SEEK_CUR), LZS_SEEK_CUR);
                    assert_eq!(lzs_convert_whence_value(libc::SEEK_END), LZS_SEEK_END);
                    assert_eq!(lzs_convert_whence_value(-12345), LZS_SEEK_INVALID);
                }
            });
        }
    });
}

#[test]
fn test_version_reports_from_many_threads() {
    let expected = Versions::collect();

    thread::scope(|scope| {
        for _ in 0..THREADS {
            scope.spawn(|| {
                for _ in 0..ITERATIONS {
                    let mut record = LzsVersionsEx::empty();
                    unsafe { lzs_get_versions_ex(&mut record) };
                    for backend in Backend::ALL {
                        let field: *const c_char = record.field(backend);
                        assert!(!field.is_null());
                        let value = unsafe { CStr::from_ptr(field) };
                        assert_eq!(value.to_str().unwrap(), expected.get(backend));
                    }
                    unsafe { lzs_free_versions_ex(&mut record) };
                }
            });
        }
    });
}
