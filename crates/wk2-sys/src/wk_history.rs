//! Back/forward list functions
//!
//! The list and its items are owned by the web view. Item accessors return
//! transfer-none pointers that may be NULL when no such item exists.

use super::wk_types::*;

extern "C" {
    pub fn webkit_back_forward_list_get_type() -> GType;
    pub fn webkit_back_forward_list_item_get_type() -> GType;

    // ========== WebKitBackForwardList ==========

    pub fn webkit_back_forward_list_get_length(list: *mut WebKitBackForwardList) -> guint;

    pub fn webkit_back_forward_list_get_current_item(
        list: *mut WebKitBackForwardList,
    ) -> *mut WebKitBackForwardListItem;

    pub fn webkit_back_forward_list_get_back_item(
        list: *mut WebKitBackForwardList,
    ) -> *mut WebKitBackForwardListItem;

    pub fn webkit_back_forward_list_get_forward_item(
        list: *mut WebKitBackForwardList,
    ) -> *mut WebKitBackForwardListItem;

    /// Get the item at `index` relative to the current item
    pub fn webkit_back_forward_list_get_nth_item(
        list: *mut WebKitBackForwardList,
        index: gint,
    ) -> *mut WebKitBackForwardListItem;

    /// Items before the current one (transfer container)
    pub fn webkit_back_forward_list_get_back_list(list: *mut WebKitBackForwardList) -> *mut GList;

    /// Items after the current one (transfer container)
    pub fn webkit_back_forward_list_get_forward_list(
        list: *mut WebKitBackForwardList,
    ) -> *mut GList;

    // ========== WebKitBackForwardListItem ==========

    pub fn webkit_back_forward_list_item_get_uri(
        item: *mut WebKitBackForwardListItem,
    ) -> *const gchar;

    pub fn webkit_back_forward_list_item_get_title(
        item: *mut WebKitBackForwardListItem,
    ) -> *const gchar;

    pub fn webkit_back_forward_list_item_get_original_uri(
        item: *mut WebKitBackForwardListItem,
    ) -> *const gchar;
}
