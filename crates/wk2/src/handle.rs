//! Foreign handle ownership
//!
//! Every wrapper holds its foreign pointer through one of the handle types in
//! this module. The handle records how the pointer is owned and releases it
//! from `Drop`, so the release runs exactly once and only for handles that were
//! fully constructed.
//!
//! Strong object references are shared through `Rc`. A per-thread table maps
//! each live object address to its strong reference, which means sinking the
//! same object twice reuses the existing reference instead of taking a second
//! independent one that would later be released twice.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::ptr::NonNull;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use crate::ffi::{self, GObject};

/// How a wrapper owns its foreign handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Never released by the bridge
    Borrowed,
    /// Holds one strong reference, released with `g_object_unref`
    OwnedStrong,
    /// Holds the value, released with its kind's free function
    OwnedUnique,
}

thread_local! {
    static LIVE: RefCell<HashMap<usize, Weak<StrongRef>>> = RefCell::new(HashMap::new());
}

fn live_lookup(ptr: NonNull<GObject>) -> Option<Rc<StrongRef>> {
    LIVE.with(|live| {
        live.borrow()
            .get(&(ptr.as_ptr() as usize))
            .and_then(Weak::upgrade)
    })
}

fn live_insert(strong: &Rc<StrongRef>) {
    LIVE.with(|live| {
        live.borrow_mut()
            .insert(strong.ptr.as_ptr() as usize, Rc::downgrade(strong));
    });
}

/// Number of objects currently held by a strong reference on this thread
#[cfg(test)]
pub(crate) fn live_strong_count() -> usize {
    LIVE.with(|live| {
        live.borrow()
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    })
}

/// The single strong reference the bridge holds on an object
struct StrongRef {
    ptr: NonNull<GObject>,
}

impl Drop for StrongRef {
    fn drop(&mut self) {
        let addr = self.ptr.as_ptr() as usize;
        let this: *const StrongRef = self;
        // The table may already be gone during thread teardown
        let _ = LIVE.try_with(|live| {
            let mut live = live.borrow_mut();
            if live.get(&addr).is_some_and(|weak| Weak::as_ptr(weak) == this) {
                live.remove(&addr);
            }
        });
        debug!("unref object {:#x}", addr);
        unsafe { ffi::g_object_unref(self.ptr.as_ptr().cast()) }
    }
}

enum ObjectInner {
    Borrowed(NonNull<GObject>),
    Strong(Rc<StrongRef>),
}

/// Handle to a reference-counted foreign object
///
/// Cloning a strong handle shares it: the bridge never references an object
/// twice, however many clones exist. Cloning a borrowed handle promotes it, so
/// a clone never depends on the lender staying alive.
pub struct ObjectRef {
    inner: ObjectInner,
}

impl ObjectRef {
    /// Take a strong reference with ref-and-sink
    ///
    /// Sinks the floating reference of a newly created widget, or adds a
    /// reference to an object returned with transfer none. If the object is
    /// already held strongly on this thread, the existing reference is shared
    /// and no new one is taken.
    ///
    /// # Safety
    /// `ptr` must point at a live GObject.
    pub unsafe fn sink(ptr: NonNull<GObject>) -> Self {
        if let Some(strong) = live_lookup(ptr) {
            debug!("sink of {:#x} reuses live reference", ptr.as_ptr() as usize);
            return Self::from_strong(strong);
        }
        ffi::g_object_ref_sink(ptr.as_ptr().cast());
        debug!("sink object {:#x}", ptr.as_ptr() as usize);
        Self::adopt(ptr)
    }

    /// Adopt a reference transferred by the callee (transfer full)
    ///
    /// If the object is already held strongly on this thread, the transferred
    /// reference is redundant and is dropped right away.
    ///
    /// # Safety
    /// `ptr` must point at a live GObject whose reference the caller owns.
    pub unsafe fn take(ptr: NonNull<GObject>) -> Self {
        if let Some(strong) = live_lookup(ptr) {
            debug!("take of {:#x} merged into live reference", ptr.as_ptr() as usize);
            ffi::g_object_unref(ptr.as_ptr().cast());
            return Self::from_strong(strong);
        }
        debug!("take object {:#x}", ptr.as_ptr() as usize);
        Self::adopt(ptr)
    }

    /// Wrap a pointer the bridge does not own
    ///
    /// # Safety
    /// `ptr` must point at a GObject that stays alive as long as the handle
    /// and all its clones are used.
    pub unsafe fn borrowed(ptr: NonNull<GObject>) -> Self {
        trace!("borrow object {:#x}", ptr.as_ptr() as usize);
        Self {
            inner: ObjectInner::Borrowed(ptr),
        }
    }

    unsafe fn adopt(ptr: NonNull<GObject>) -> Self {
        let strong = Rc::new(StrongRef { ptr });
        live_insert(&strong);
        Self::from_strong(strong)
    }

    fn from_strong(strong: Rc<StrongRef>) -> Self {
        Self {
            inner: ObjectInner::Strong(strong),
        }
    }

    /// Raw object pointer
    pub fn as_ptr(&self) -> *mut GObject {
        match &self.inner {
            ObjectInner::Borrowed(ptr) => ptr.as_ptr(),
            ObjectInner::Strong(strong) => strong.ptr.as_ptr(),
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self.inner {
            ObjectInner::Borrowed(_) => Ownership::Borrowed,
            ObjectInner::Strong(_) => Ownership::OwnedStrong,
        }
    }

    /// Strong handle to the same object
    ///
    /// Borrowed handles are promoted with ref-and-sink; strong handles are
    /// shared.
    pub fn to_owned_ref(&self) -> Self {
        match &self.inner {
            ObjectInner::Borrowed(ptr) => unsafe { Self::sink(*ptr) },
            ObjectInner::Strong(strong) => Self::from_strong(Rc::clone(strong)),
        }
    }
}

impl Clone for ObjectRef {
    fn clone(&self) -> Self {
        self.to_owned_ref()
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.as_ptr() == other.as_ptr()
    }
}

impl Eq for ObjectRef {}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectRef")
            .field("ptr", &self.as_ptr())
            .field("ownership", &self.ownership())
            .finish()
    }
}

/// A foreign value type released by a dedicated free function
pub trait BoxedType {
    /// Opaque C type
    type Raw;

    /// Name used in logs and errors
    const NAME: &'static str;

    /// Deep-copy the value (transfer full)
    ///
    /// # Safety
    /// `ptr` must point at a live value.
    unsafe fn copy(ptr: NonNull<Self::Raw>) -> *mut Self::Raw;

    /// Release the value
    ///
    /// # Safety
    /// `ptr` must point at a live value owned by the caller.
    unsafe fn free(ptr: NonNull<Self::Raw>);
}

/// Handle to a boxed foreign value
pub struct BoxedRef<B: BoxedType> {
    ptr: NonNull<B::Raw>,
    ownership: Ownership,
}

impl<B: BoxedType> BoxedRef<B> {
    /// Take ownership of a value; it is freed when the handle drops
    ///
    /// # Safety
    /// `ptr` must point at a live value the caller owns.
    pub unsafe fn owned(ptr: NonNull<B::Raw>) -> Self {
        debug!("own {} {:#x}", B::NAME, ptr.as_ptr() as usize);
        Self {
            ptr,
            ownership: Ownership::OwnedUnique,
        }
    }

    /// Wrap a value the bridge does not own
    ///
    /// # Safety
    /// `ptr` must stay valid as long as the handle is used.
    pub unsafe fn borrowed(ptr: NonNull<B::Raw>) -> Self {
        Self {
            ptr,
            ownership: Ownership::Borrowed,
        }
    }

    pub fn as_ptr(&self) -> *mut B::Raw {
        self.ptr.as_ptr()
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    /// Owned deep copy of the value
    pub fn copy(&self) -> Option<Self> {
        unsafe {
            let copied = NonNull::new(B::copy(self.ptr))?;
            Some(Self::owned(copied))
        }
    }

    /// Release the value now instead of at drop
    ///
    /// Consumes the handle, so the drop-time release cannot run afterwards.
    pub fn release(self) {
        drop(self)
    }
}

impl<B: BoxedType> Drop for BoxedRef<B> {
    fn drop(&mut self) {
        if self.ownership == Ownership::OwnedUnique {
            debug!("free {} {:#x}", B::NAME, self.ptr.as_ptr() as usize);
            unsafe { B::free(self.ptr) }
        }
    }
}

impl<B: BoxedType> fmt::Debug for BoxedRef<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoxedRef")
            .field("type", &B::NAME)
            .field("ptr", &self.ptr)
            .field("ownership", &self.ownership)
            .finish()
    }
}
