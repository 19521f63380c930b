//! Core type definitions
//!
//! Primitive GLib aliases, the `GValue` container layout, and opaque types for
//! every WebKit2GTK object. The object layouts are never exposed; the bridge
//! only works with pointers to them.

use std::ffi::{c_char, c_double, c_int, c_long, c_uint, c_ulong, c_void};
use std::marker::{PhantomData, PhantomPinned};

pub type gboolean = c_int;
pub type gchar = c_char;
pub type gint = c_int;
pub type guint = c_uint;
pub type gint64 = i64;
pub type guint64 = u64;
pub type gdouble = c_double;
pub type gpointer = *mut c_void;
pub type gconstpointer = *const c_void;

/// Runtime type identifier assigned by the GObject type system
pub type GType = usize;

pub const GFALSE: gboolean = 0;
pub const GTRUE: gboolean = 1;

/// Flags describing TLS certificate verification failures
pub type GTlsCertificateFlags = guint;

macro_rules! opaque {
    ($($(#[$meta:meta])* $name:ident;)*) => {
        $(
            $(#[$meta])*
            #[repr(C)]
            pub struct $name {
                _data: [u8; 0],
                _marker: PhantomData<(*mut u8, PhantomPinned)>,
            }
        )*
    };
}

opaque! {
    /// Base instance of every reference-counted object
    GObject;
    /// Base widget; web views are constructed as floating widgets
    GtkWidget;
    WebKitBackForwardList;
    WebKitBackForwardListItem;
    WebKitCookieManager;
    WebKitDownload;
    WebKitFaviconDatabase;
    WebKitSecurityManager;
    WebKitURIRequest;
    WebKitWebContext;
    WebKitWebView;
    WebKitWebViewGroup;
    /// Boxed value, released with `webkit_certificate_info_free`
    WebKitCertificateInfo;
}

/// Storage slot of a `GValue`
#[repr(C)]
#[derive(Clone, Copy)]
pub union GValueData {
    pub v_int: gint,
    pub v_uint: guint,
    pub v_long: c_long,
    pub v_ulong: c_ulong,
    pub v_int64: gint64,
    pub v_uint64: guint64,
    pub v_float: f32,
    pub v_double: gdouble,
    pub v_pointer: gpointer,
}

/// Generic value container used for properties and signal arguments
#[repr(C)]
#[derive(Clone, Copy)]
pub struct GValue {
    pub g_type: GType,
    pub data: [GValueData; 2],
}

impl GValue {
    /// An uninitialized (`G_TYPE_INVALID`) value
    pub const fn zeroed() -> Self {
        Self {
            g_type: 0,
            data: [GValueData { v_uint64: 0 }; 2],
        }
    }
}

/// Doubly linked list node
#[repr(C)]
pub struct GList {
    pub data: gpointer,
    pub next: *mut GList,
    pub prev: *mut GList,
}

/// Cache model of a web context
pub type WebKitCacheModel = c_int;
pub const WEBKIT_CACHE_MODEL_DOCUMENT_VIEWER: WebKitCacheModel = 0;
pub const WEBKIT_CACHE_MODEL_WEB_BROWSER: WebKitCacheModel = 1;
pub const WEBKIT_CACHE_MODEL_DOCUMENT_BROWSER: WebKitCacheModel = 2;

/// Events emitted during a web view load operation
pub type WebKitLoadEvent = c_int;
pub const WEBKIT_LOAD_STARTED: WebKitLoadEvent = 0;
pub const WEBKIT_LOAD_REDIRECTED: WebKitLoadEvent = 1;
pub const WEBKIT_LOAD_COMMITTED: WebKitLoadEvent = 2;
pub const WEBKIT_LOAD_FINISHED: WebKitLoadEvent = 3;

/// Web process model of a web context
pub type WebKitProcessModel = c_int;
pub const WEBKIT_PROCESS_MODEL_SHARED_SECONDARY_PROCESS: WebKitProcessModel = 0;
pub const WEBKIT_PROCESS_MODEL_MULTIPLE_SECONDARY_PROCESSES: WebKitProcessModel = 1;

/// Policy applied to TLS errors
pub type WebKitTLSErrorsPolicy = c_int;
pub const WEBKIT_TLS_ERRORS_POLICY_IGNORE: WebKitTLSErrorsPolicy = 0;
pub const WEBKIT_TLS_ERRORS_POLICY_FAIL: WebKitTLSErrorsPolicy = 1;
