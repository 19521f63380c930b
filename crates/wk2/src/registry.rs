//! Type registry for generic values
//!
//! Properties and signal arguments arrive as `GValue` containers that erase
//! the static type. The registry maps the runtime type held by a container to
//! the converter producing a typed wrapper.
//!
//! Registration happens on a [`RegistryBuilder`]; only the frozen
//! [`TypeRegistry`] can convert, so every registration precedes every
//! conversion. The registry is an explicit value, built once at start-up and
//! passed by reference to whatever needs it.

use std::collections::HashMap;
use std::fmt;
use std::marker::PhantomData;
use std::ops::Deref;
use std::ptr::NonNull;

use log::{debug, trace, warn};

use crate::conv::from_glib_str;
use crate::error::{BridgeError, Result};
use crate::ffi::{self, GType, GValue};
use crate::kind::{Kind, Marshaled};

/// Function recovering a typed value from a generic container
pub type Converter = for<'a> fn(&ValueRef<'a>) -> Result<Borrowed<'a, Marshaled>>;

/// Borrowed view of a generic value container
#[derive(Debug, Clone, Copy)]
pub struct ValueRef<'a> {
    ptr: NonNull<GValue>,
    _marker: PhantomData<&'a GValue>,
}

impl<'a> ValueRef<'a> {
    /// View a container passed across the boundary
    ///
    /// Returns `None` for NULL.
    ///
    /// # Safety
    /// `ptr` must point at an initialized `GValue` that outlives `'a`, and any
    /// object or boxed value it holds must outlive every borrowed wrapper
    /// converted from it (or the wrapper must be promoted to a strong one).
    pub unsafe fn from_raw(ptr: *const GValue) -> Option<Self> {
        Some(Self {
            ptr: NonNull::new(ptr.cast_mut())?,
            _marker: PhantomData,
        })
    }

    /// View a container owned on the Rust side
    ///
    /// # Safety
    /// Same as [`ValueRef::from_raw`].
    pub unsafe fn new(value: &'a GValue) -> Self {
        Self {
            ptr: NonNull::from(value),
            _marker: PhantomData,
        }
    }

    /// Runtime type held by the container
    pub fn gtype(&self) -> GType {
        unsafe { ffi::g_value_type(self.ptr.as_ptr()) }
    }

    pub fn as_ptr(&self) -> *const GValue {
        self.ptr.as_ptr()
    }
}

/// A value lent by a generic container
///
/// Wrappers converted from a container do not hold a reference of their own,
/// so they can only be reached through this guard while the container lives.
/// Cloning an object wrapper out of it takes a strong reference; boxed values
/// are kept with their `copy`.
pub struct Borrowed<'a, T> {
    value: T,
    _container: PhantomData<&'a GValue>,
}

impl<'a, T> Borrowed<'a, T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            _container: PhantomData,
        }
    }

    fn try_map<U>(self, f: impl FnOnce(T) -> Result<U>) -> Result<Borrowed<'a, U>> {
        f(self.value).map(Borrowed::new)
    }
}

impl<T> Deref for Borrowed<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Borrowed<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Borrowed").field(&self.value).finish()
    }
}

/// Registered name of a runtime type
pub fn type_name(gtype: GType) -> String {
    unsafe { from_glib_str(ffi::g_type_name(gtype)) }.unwrap_or_else(|| format!("{:#x}", gtype))
}

struct Entry {
    name: String,
    converter: Converter,
}

/// Collects converters before the registry is frozen
#[derive(Default)]
pub struct RegistryBuilder {
    entries: HashMap<GType, Entry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a converter for a runtime type
    ///
    /// # Panics
    ///
    /// Panics with [`BridgeError::DoubleRegistration`] if `gtype` already has
    /// a converter. That is a programming error, not a runtime condition.
    pub fn register(&mut self, gtype: GType, converter: Converter) -> &mut Self {
        if let Err(err) = self.try_register(gtype, converter) {
            panic!("{}", err);
        }
        self
    }

    /// Register a converter, reporting a duplicate instead of panicking
    pub fn try_register(&mut self, gtype: GType, converter: Converter) -> Result<&mut Self> {
        let name = type_name(gtype);
        if self.entries.contains_key(&gtype) {
            return Err(BridgeError::DoubleRegistration { gtype, name });
        }
        debug!("register converter for {}", name);
        self.entries.insert(gtype, Entry { name, converter });
        Ok(self)
    }

    /// Register the converter of a known kind
    ///
    /// # Panics
    ///
    /// Same as [`RegistryBuilder::register`].
    pub fn register_kind(&mut self, kind: Kind) -> &mut Self {
        self.register(kind.static_type(), kind.converter())
    }

    pub fn build(self) -> TypeRegistry {
        debug!("type registry built with {} converters", self.entries.len());
        TypeRegistry {
            entries: self.entries,
        }
    }
}

/// Frozen mapping from runtime type to converter
pub struct TypeRegistry {
    entries: HashMap<GType, Entry>,
}

impl TypeRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry with a converter for every [`Kind`]
    pub fn standard() -> Self {
        let mut builder = RegistryBuilder::new();
        for kind in Kind::ALL {
            builder.register_kind(kind);
        }
        builder.build()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, gtype: GType) -> bool {
        self.entries.contains_key(&gtype)
    }

    /// Recover a typed value from a container
    ///
    /// Objects and boxed values come back borrowed; the container keeps
    /// ownership, and the result cannot outlive it.
    pub fn convert<'a>(&self, value: &ValueRef<'a>) -> Result<Borrowed<'a, Marshaled>> {
        let gtype = value.gtype();
        match self.entries.get(&gtype) {
            Some(entry) => {
                trace!("convert value of type {}", entry.name);
                (entry.converter)(value)
            }
            None => {
                let name = type_name(gtype);
                warn!("no converter registered for {}", name);
                Err(BridgeError::UnknownKind { gtype, name })
            }
        }
    }

    /// Convert and narrow to one type
    ///
    /// Returns `Ok(None)` when the container holds NULL.
    pub fn convert_to<'a, T>(&self, value: &ValueRef<'a>) -> Result<Option<Borrowed<'a, T>>>
    where
        T: TryFrom<Marshaled, Error = BridgeError>,
    {
        let converted = self.convert(value)?;
        if converted.is_null() {
            return Ok(None);
        }
        converted.try_map(T::try_from).map(Some)
    }
}
