//! WebKit enumerations
//!
//! The C enums are plain integers. Values outside the declared set are
//! rejected with [`BridgeError::InvalidEnumValue`] rather than transmuted.

use crate::error::{BridgeError, Result};
use crate::ffi;
use crate::kind::{Kind, Marshaled};

/// A Rust enum mirroring a registered C enum
pub trait GlibEnum: Copy + Sized {
    /// Kind of the enum in the type registry
    const KIND: Kind;

    /// Convert from the C value
    fn from_glib(value: i32) -> Result<Self>;

    /// Convert to the C value
    fn into_glib(self) -> i32;
}

macro_rules! glib_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $($(#[$vmeta:meta])* $variant:ident = $value:path,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant,)+
        }

        impl GlibEnum for $name {
            const KIND: Kind = Kind::$name;

            fn from_glib(value: i32) -> Result<Self> {
                match value {
                    $(v if v == $value => Ok(Self::$variant),)+
                    value => Err(BridgeError::InvalidEnumValue {
                        kind: Kind::$name.name(),
                        value,
                    }),
                }
            }

            fn into_glib(self) -> i32 {
                match self {
                    $(Self::$variant => $value,)+
                }
            }
        }

        impl TryFrom<Marshaled> for $name {
            type Error = BridgeError;

            fn try_from(value: Marshaled) -> Result<Self> {
                match value {
                    Marshaled::$name(v) => Ok(v),
                    other => Err(BridgeError::UnexpectedKind {
                        expected: Kind::$name.name(),
                        found: other.kind().name(),
                    }),
                }
            }
        }

        impl From<$name> for Marshaled {
            fn from(value: $name) -> Self {
                Marshaled::$name(value)
            }
        }
    };
}

glib_enum! {
    /// Cache model of a web context
    pub enum CacheModel {
        /// Minimal caching, for viewing local documents
        DocumentViewer = ffi::WEBKIT_CACHE_MODEL_DOCUMENT_VIEWER,
        /// Aggressive caching for browsing the web
        WebBrowser = ffi::WEBKIT_CACHE_MODEL_WEB_BROWSER,
        /// Moderate caching for browsing documents
        DocumentBrowser = ffi::WEBKIT_CACHE_MODEL_DOCUMENT_BROWSER,
    }
}

glib_enum! {
    /// Events emitted during a web view's load operation
    pub enum LoadEvent {
        Started = ffi::WEBKIT_LOAD_STARTED,
        Redirected = ffi::WEBKIT_LOAD_REDIRECTED,
        Committed = ffi::WEBKIT_LOAD_COMMITTED,
        Finished = ffi::WEBKIT_LOAD_FINISHED,
    }
}

glib_enum! {
    /// How a web context distributes views over web processes
    pub enum ProcessModel {
        SharedSecondaryProcess = ffi::WEBKIT_PROCESS_MODEL_SHARED_SECONDARY_PROCESS,
        MultipleSecondaryProcesses = ffi::WEBKIT_PROCESS_MODEL_MULTIPLE_SECONDARY_PROCESSES,
    }
}

glib_enum! {
    /// What a web context does when a TLS certificate fails verification
    pub enum TlsErrorsPolicy {
        Ignore = ffi::WEBKIT_TLS_ERRORS_POLICY_IGNORE,
        Fail = ffi::WEBKIT_TLS_ERRORS_POLICY_FAIL,
    }
}
