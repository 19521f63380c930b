//! Safe Rust bridge over the WebKit2GTK object model
//!
//! This crate wraps WebKit2GTK objects (web views, contexts, managers,
//! downloads, history) in Rust types that own their foreign references. A
//! wrapper takes its reference when it is created and releases it exactly
//! once when the last clone is dropped.
//!
//! # Example
//!
//! ```ignore
//! use wk2::{TypeRegistry, ValueRef, WebContext, WebView};
//!
//! // Views sink their floating reference on creation
//! let view = WebView::new()?;
//! view.load_uri("https://example.com")?;
//!
//! // Accessors hand out wrappers holding their own reference
//! let context = view.context().expect("view without context");
//! context.set_spell_checking_languages(&["en_US"])?;
//!
//! // Recover typed wrappers from property or signal values; they are lent by
//! // the container, so keep one with `to_strong`
//! let registry = TypeRegistry::standard();
//! let value = unsafe { ValueRef::from_raw(raw_gvalue) }.expect("null value");
//! if let Some(download) = registry.convert_to::<wk2::Download>(&value)? {
//!     let kept = download.to_strong();
//! }
//! ```
//!
//! # Threading
//!
//! All wrappers must stay on the thread running the GTK main loop. They are
//! neither `Send` nor `Sync`.

mod certificate;
mod context;
pub mod conv;
mod download;
mod enums;
mod error;
mod handle;
mod history;
mod kind;
mod object;
mod registry;
mod view;

#[cfg(test)]
mod fake;

#[cfg(not(test))]
use wk2_sys as ffi;

#[cfg(test)]
use crate::fake as ffi;

pub use certificate::CertificateInfo;
pub use context::{CookieManager, FaviconDatabase, SecurityManager, WebContext};
pub use conv::StrArray;
pub use download::{Download, UriRequest};
pub use enums::{CacheModel, GlibEnum, LoadEvent, ProcessModel, TlsErrorsPolicy};
pub use error::{BridgeError, Result};
pub use handle::{BoxedRef, BoxedType, ObjectRef, Ownership};
pub use history::{BackForwardList, BackForwardListItem};
pub use kind::{Category, Kind, Marshaled};
pub use object::ObjectType;
pub use registry::{type_name, Borrowed, Converter, RegistryBuilder, TypeRegistry, ValueRef};
pub use view::{WebView, WebViewGroup};

// Re-export the raw types needed to cross the boundary
pub use wk2_sys::{GType, GValue};
