use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

const UNKNOWN_VERSION: &str = "unknown";

fn main() {
    println!("cargo:rerun-if-env-changed=LIBZIP_VERSION");
    println!("cargo:rerun-if-env-changed=LIBZIP_INCLUDE_DIR");
    println!("cargo:rerun-if-env-changed=PKG_CONFIG_PATH");
    println!("cargo:rerun-if-env-changed=PKG_CONFIG");

    let version = resolve_libzip_version();
    println!("cargo:rustc-env=LZS_LIBZIP_VERSION={}", version);
}

/// Resolve the libzip version baked into the shim.
///
/// Order: explicit `LIBZIP_VERSION`, then `zipconf.h` under
/// `LIBZIP_INCLUDE_DIR`, then `pkg-config`, then a fixed placeholder.
fn resolve_libzip_version() -> String {
    if let Ok(version) = env::var("LIBZIP_VERSION") {
        if let Some(version) = sanitize(&version) {
            return version;
        }
    }

    if let Ok(include_dir) = env::var("LIBZIP_INCLUDE_DIR") {
        let zipconf = PathBuf::from(include_dir).join("zipconf.h");
        println!("cargo:rerun-if-changed={}", zipconf.display());
        if let Some(version) = version_from_zipconf(&zipconf) {
            return version;
        }
    }

    if let Some(version) = version_from_pkg_config() {
        return version;
    }

    if env::var_os("CARGO_FEATURE_STRICT_LIBZIP_VERSION").is_some() {
        panic!(
            "libzip version could not be determined. \
                Set LIBZIP_VERSION, point LIBZIP_INCLUDE_DIR at zipconf.h, \
                or make libzip visible to pkg-config"
        );
    }

    println!("cargo:warning=libzip version could not be determined, reporting \"{UNKNOWN_VERSION}\"");
    UNKNOWN_VERSION.to_string()
}

/// Pull the value of `#define LIBZIP_VERSION "x.y.z"` out of zipconf.h
fn version_from_zipconf(path: &Path) -> Option<String> {
    let header = fs::read_to_string(path).ok()?;

    header.lines().find_map(|line| {
        let rest = line.trim().strip_prefix("#define")?.trim_start();
        let value = rest.strip_prefix("LIBZIP_VERSION")?;
        // LIBZIP_VERSION_MAJOR and friends share the prefix
        if !value.starts_with(char::is_whitespace) {
            return None;
        }
        sanitize(value.trim().trim_matches('"'))
    })
}

fn version_from_pkg_config() -> Option<String> {
    let pkg_config = env::var("PKG_CONFIG")
        .ok()
        .map(PathBuf::from)
        .or_else(|| which::which("pkg-config").ok())?;

    let output = Command::new(pkg_config)
        .args(["--modversion", "libzip"])
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    sanitize(&String::from_utf8_lossy(&output.stdout))
}

/// The value ends up in a `rustc-env` directive and later in a C string, so
/// it must be a single non-empty line without NUL bytes.
fn sanitize(raw: &str) -> Option<String> {
    let line = raw.lines().next()?.trim();
    let cleaned: String = line.chars().filter(|c| *c != '\0').collect();
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}
