//! Copies `include/gridquad.h` into
//! `$CARGO_C_GRIDQUAD_INSTALL_PREFIX/include/gridquad_capi` when that variable
//! is set, so C programs linking the library can find the header.

use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    println!("cargo:rerun-if-changed=include/gridquad.h");
    println!("cargo:rerun-if-env-changed=CARGO_C_GRIDQUAD_INSTALL_PREFIX");

    if let Ok(prefix) = env::var("CARGO_C_GRIDQUAD_INSTALL_PREFIX") {
        let include_path = PathBuf::from(prefix).join("include").join("gridquad_capi");

        fs::create_dir_all(&include_path).expect("Failed to create include directory.");

        let source_header = PathBuf::from("include/gridquad.h");
        let dest_header = include_path.join("gridquad.h");

        fs::copy(&source_header, &dest_header).expect("Failed to copy header file.");
    }
}
