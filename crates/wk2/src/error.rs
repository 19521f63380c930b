//! Error types for wk2

use std::ffi::NulError;
use thiserror::Error;
use wk2_sys::GType;

/// Errors that can occur when crossing the WebKit2GTK boundary
#[derive(Error, Debug)]
pub enum BridgeError {
    /// No converter is registered for the runtime type held by a value
    #[error("No converter registered for type {name} ({gtype:#x})")]
    UnknownKind { gtype: GType, name: String },

    /// Two converters were registered for the same runtime type
    #[error("Converter for type {name} ({gtype:#x}) registered twice")]
    DoubleRegistration { gtype: GType, name: String },

    /// A constructor returned NULL
    #[error("{0} returned a null handle")]
    NullHandle(&'static str),

    /// A raw enum value outside the known set
    #[error("Invalid {kind} value: {value}")]
    InvalidEnumValue { kind: &'static str, value: i32 },

    /// A converted value is not of the requested kind
    #[error("Expected {expected}, found {found}")]
    UnexpectedKind {
        expected: &'static str,
        found: &'static str,
    },

    /// A string could not be passed as a C string
    #[error("String contains an interior NUL byte: {0}")]
    InteriorNul(#[from] NulError),
}

/// Result type alias for wk2 operations
pub type Result<T> = std::result::Result<T, BridgeError>;
