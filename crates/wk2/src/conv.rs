//! Primitive conversions across the C boundary
//!
//! Booleans, strings, string arrays and lists. Every C allocation made here is
//! owned by a Rust value and released when that value is dropped, so a call
//! that returns early (or panics) still frees what it marshaled.

use std::ffi::{CStr, CString};
use std::ptr;

use crate::error::Result;
use crate::ffi::{self, gboolean, gchar, gpointer, GList, GFALSE, GTRUE};

/// Convert a Rust bool to a `gboolean`
#[inline]
pub fn to_gboolean(value: bool) -> gboolean {
    if value {
        GTRUE
    } else {
        GFALSE
    }
}

/// Convert a `gboolean` to a Rust bool; any non-zero value is true
#[inline]
pub fn from_gboolean(value: gboolean) -> bool {
    value != GFALSE
}

/// Convert a Rust string to a NUL-terminated C string
pub fn to_cstring(value: &str) -> Result<CString> {
    Ok(CString::new(value)?)
}

/// Convert an optional Rust string to an optional C string
pub fn to_cstring_opt(value: Option<&str>) -> Result<Option<CString>> {
    value.map(to_cstring).transpose()
}

/// Pointer for an optional C string, NULL when absent
#[inline]
pub(crate) fn opt_ptr(value: &Option<CString>) -> *const gchar {
    value.as_ref().map_or(ptr::null(), |s| s.as_ptr())
}

/// Copy a borrowed (transfer none) C string
///
/// # Safety
/// `ptr` must be NULL or point at a NUL-terminated string.
pub unsafe fn from_glib_str(ptr: *const gchar) -> Option<String> {
    if ptr.is_null() {
        return None;
    }
    Some(CStr::from_ptr(ptr).to_string_lossy().into_owned())
}

/// Copy a borrowed C string, mapping NULL to an empty string
///
/// # Safety
/// Same as [`from_glib_str`].
pub unsafe fn from_glib_str_or_empty(ptr: *const gchar) -> String {
    from_glib_str(ptr).unwrap_or_default()
}

/// Copy an owned (transfer full) C string and free it with `g_free`
///
/// # Safety
/// `ptr` must be NULL or a string allocated by GLib that the caller owns.
pub unsafe fn take_glib_str(ptr: *mut gchar) -> Option<String> {
    let owned = GFree(ptr.cast());
    from_glib_str(owned.0.cast())
}

/// Copy a NULL-terminated array of borrowed C strings
///
/// # Safety
/// `strv` must be NULL or point at a NULL-terminated array of valid strings.
pub unsafe fn from_glib_strv(strv: *const *const gchar) -> Vec<String> {
    let mut out = Vec::new();
    if strv.is_null() {
        return out;
    }
    let mut cursor = strv;
    while !(*cursor).is_null() {
        out.push(from_glib_str_or_empty(*cursor));
        cursor = cursor.add(1);
    }
    out
}

/// Collect the data pointers of a transfer-container list and free its nodes
///
/// The nodes are freed even if `map` panics.
///
/// # Safety
/// `list` must be NULL or a list the caller owns (the data stays borrowed).
pub unsafe fn drain_glib_list<T>(
    list: *mut GList,
    mut map: impl FnMut(gpointer) -> Option<T>,
) -> Vec<T> {
    let guard = ListGuard(list);
    let mut out = Vec::new();
    let mut node = guard.0;
    while !node.is_null() {
        if let Some(item) = map((*node).data) {
            out.push(item);
        }
        node = (*node).next;
    }
    out
}

/// A NULL-terminated `gchar**` marshaled from Rust strings
///
/// The array and every string in it live until this value is dropped.
pub struct StrArray {
    _strings: Vec<CString>,
    ptrs: Vec<*const gchar>,
}

impl StrArray {
    /// Marshal the given strings
    pub fn new<S: AsRef<str>>(items: &[S]) -> Result<Self> {
        let strings = items
            .iter()
            .map(|s| to_cstring(s.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        let mut ptrs: Vec<*const gchar> = strings.iter().map(|s| s.as_ptr()).collect();
        ptrs.push(ptr::null());
        Ok(Self {
            _strings: strings,
            ptrs,
        })
    }

    /// Pointer to the first element, valid while `self` lives
    pub fn as_ptr(&self) -> *const *const gchar {
        self.ptrs.as_ptr()
    }

    /// Number of strings, excluding the terminator
    pub fn len(&self) -> usize {
        self.ptrs.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

struct GFree(gpointer);

impl Drop for GFree {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { ffi::g_free(self.0) }
        }
    }
}

struct ListGuard(*mut GList);

impl Drop for ListGuard {
    fn drop(&mut self) {
        if !self.0.is_null() {
            unsafe { ffi::g_list_free(self.0) }
        }
    }
}
