//! Build script for wk2-sys
//!
//! Links to WebKit2GTK when the `link` feature is enabled. The library name
//! defaults to `webkit2gtk-4.0` and can be overridden with `WEBKIT2GTK_LIB`;
//! `WEBKIT2GTK_LIB_DIR` adds an extra search path.

fn main() {
    println!("cargo:rerun-if-env-changed=WEBKIT2GTK_LIB_DIR");
    println!("cargo:rerun-if-env-changed=WEBKIT2GTK_LIB");
    println!("cargo:rerun-if-changed=build.rs");

    // Without `link` nothing references the symbols at link time
    if std::env::var_os("CARGO_FEATURE_LINK").is_none() {
        return;
    }

    if let Ok(dir) = std::env::var("WEBKIT2GTK_LIB_DIR") {
        println!("cargo:rustc-link-search=native={}", dir);
    }

    let webkit = std::env::var("WEBKIT2GTK_LIB").unwrap_or_else(|_| "webkit2gtk-4.0".to_string());
    println!("cargo:rustc-link-lib=dylib={}", webkit);
    println!("cargo:rustc-link-lib=dylib=gobject-2.0");
    println!("cargo:rustc-link-lib=dylib=glib-2.0");
}
