//! GLib and GObject functions
//!
//! Reference counting, generic value access, type names and memory release.

use super::wk_types::*;

extern "C" {
    // ========== Reference counting ==========

    /// Take a reference, or sink the floating reference if there is one
    pub fn g_object_ref_sink(object: gpointer) -> gpointer;

    /// Drop one strong reference; finalizes the object at zero
    pub fn g_object_unref(object: gpointer);

    /// Whether the object still carries a floating reference
    pub fn g_object_is_floating(object: gpointer) -> gboolean;

    // ========== GValue ==========

    /// Get the object held by a value (transfer none, may be NULL)
    pub fn g_value_get_object(value: *const GValue) -> gpointer;

    /// Get the boxed pointer held by a value (transfer none, may be NULL)
    pub fn g_value_get_boxed(value: *const GValue) -> gpointer;

    /// Get the enum held by a value
    pub fn g_value_get_enum(value: *const GValue) -> gint;

    // ========== Types ==========

    /// Get the registered name of a type (static string, NULL if unknown)
    pub fn g_type_name(gtype: GType) -> *const gchar;

    // ========== Memory ==========

    /// Free memory allocated by GLib
    pub fn g_free(mem: gpointer);

    /// Free the nodes of a list, not the data
    pub fn g_list_free(list: *mut GList);
}

/// Read the type of a value (the `G_VALUE_TYPE` macro)
///
/// # Safety
/// `value` must point at an initialized `GValue`.
#[inline]
pub unsafe fn g_value_type(value: *const GValue) -> GType {
    (*value).g_type
}
