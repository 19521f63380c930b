//! Raw FFI bindings to the GObject and WebKit2GTK C API
//!
//! This crate provides low-level declarations for the subset of GLib, GObject
//! and WebKit2GTK used by the `wk2` bridge. They are unsafe and meant to be
//! wrapped by the higher-level crate.
//!
//! # Prerequisites
//!
//! Enable the `link` feature to link against the system libraries. Set
//! `WEBKIT2GTK_LIB` to override the library name (default `webkit2gtk-4.0`)
//! and `WEBKIT2GTK_LIB_DIR` to add a search path.
//!
//! # Safety
//!
//! All functions in this crate are unsafe as they interact directly with C code.
//! The caller is responsible for:
//! - Ensuring pointers are valid and point at objects of the declared type
//! - Balancing every reference taken with exactly one release
//! - Calling functions from the thread running the GTK main loop

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

pub mod wk_context;
pub mod wk_glib;
pub mod wk_history;
pub mod wk_network;
pub mod wk_types;
pub mod wk_view;

pub use wk_context::*;
pub use wk_glib::*;
pub use wk_history::*;
pub use wk_network::*;
pub use wk_types::*;
pub use wk_view::*;
