//! Typed object wrappers
//!
//! Each WebKit object kind gets a newtype over [`ObjectRef`]. The wrapper only
//! records the handle; the ownership was settled by whichever `ObjectRef`
//! constructor produced it.

use std::ptr::NonNull;

use crate::ffi::{GObject, GType};
use crate::handle::{ObjectRef, Ownership};
use crate::kind::Kind;

/// A wrapper over a reference-counted WebKit object
pub trait ObjectType: Clone + Sized {
    /// Opaque C type of the object
    type Raw;

    /// Kind of the wrapped object
    const KIND: Kind;

    /// Wrap a handle
    ///
    /// # Safety
    /// The handle must point at an object of this type. The check is not
    /// performed; a mismatch is undefined behavior.
    unsafe fn wrap(obj: ObjectRef) -> Self;

    /// The underlying handle
    fn object_ref(&self) -> &ObjectRef;

    /// Runtime type identifier of this kind
    fn static_type() -> GType {
        Self::KIND.static_type()
    }

    /// Raw pointer to the native object
    fn as_ptr(&self) -> *mut Self::Raw {
        self.object_ref().as_ptr().cast()
    }

    fn ownership(&self) -> Ownership {
        self.object_ref().ownership()
    }

    /// Wrapper holding a strong reference to the same object
    fn to_strong(&self) -> Self {
        unsafe { Self::wrap(self.object_ref().to_owned_ref()) }
    }
}

/// Wrap a transfer-none (or floating) pointer with ref-and-sink
///
/// Returns `None` for NULL, which accessors surface as an absent value.
///
/// # Safety
/// `ptr` must be NULL or point at a live object of type `T`.
pub(crate) unsafe fn sink_nullable<T: ObjectType, R>(ptr: *mut R) -> Option<T> {
    let ptr = NonNull::new(ptr.cast::<GObject>())?;
    Some(T::wrap(ObjectRef::sink(ptr)))
}

/// Wrap a transfer-full pointer
///
/// # Safety
/// `ptr` must be NULL or point at a live object of type `T` whose reference
/// the caller owns.
pub(crate) unsafe fn take_nullable<T: ObjectType, R>(ptr: *mut R) -> Option<T> {
    let ptr = NonNull::new(ptr.cast::<GObject>())?;
    Some(T::wrap(ObjectRef::take(ptr)))
}

macro_rules! object_wrapper {
    ($(#[$meta:meta])* $name:ident => $raw:ty, $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq)]
        pub struct $name {
            obj: $crate::handle::ObjectRef,
        }

        impl $crate::object::ObjectType for $name {
            type Raw = $raw;

            const KIND: $crate::kind::Kind = $crate::kind::Kind::$kind;

            unsafe fn wrap(obj: $crate::handle::ObjectRef) -> Self {
                Self { obj }
            }

            fn object_ref(&self) -> &$crate::handle::ObjectRef {
                &self.obj
            }
        }

        impl $name {
            /// Raw pointer to the native object
            pub fn as_ptr(&self) -> *mut $raw {
                self.obj.as_ptr().cast()
            }

            pub fn ownership(&self) -> $crate::handle::Ownership {
                self.obj.ownership()
            }
        }

        impl TryFrom<$crate::kind::Marshaled> for $name {
            type Error = $crate::error::BridgeError;

            fn try_from(value: $crate::kind::Marshaled) -> $crate::error::Result<Self> {
                match value {
                    $crate::kind::Marshaled::$kind(wrapper) => Ok(wrapper),
                    other => Err($crate::error::BridgeError::UnexpectedKind {
                        expected: $crate::kind::Kind::$kind.name(),
                        found: other.kind().name(),
                    }),
                }
            }
        }

        impl From<$name> for $crate::kind::Marshaled {
            fn from(wrapper: $name) -> Self {
                $crate::kind::Marshaled::$kind(wrapper)
            }
        }
    };
}

pub(crate) use object_wrapper;
