//! Example: Display the versions reported by ZipSharpNative

use zipsharp_native::{Backend, BackendFlags, Versions};

fn main() {
    env_logger::init();

    println!("ZipSharpNative version: {}", zipsharp_native::version());
    println!("libzip version: {}", zipsharp_native::libzip_version());

    let flags = BackendFlags::compiled();
    println!("\nOptional backends:");
    for backend in [Backend::ZlibNg, Backend::Lzma, Backend::Zstd] {
        let state = if flags.contains(backend) { "linked" } else { "absent" };
        println!("  {}: {}", backend, state);
    }

    println!("\nDetails:\n{}", Versions::collect());
}
